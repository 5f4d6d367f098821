pub mod contact;
pub mod manager;
pub mod search;
pub mod storage;

use crate::errors::AppError;
use crate::store::KeyValueStore;
use tracing::{debug, warn};
use uuid::Uuid;

pub use contact::Contact;
pub use manager::{ContactStore, ImportReport};
pub use search::filter_by_name;
pub use storage::{STORAGE_KEY, load_contacts, persist_contacts};
