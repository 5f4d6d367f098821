pub use crate::cli::{command, display_contact, run, run_app};
pub use crate::domain::{
    ContactStore, ImportReport,
    contact::{self, Contact},
    filter_by_name,
    storage::{STORAGE_KEY, load_contacts, persist_contacts},
};
pub use crate::errors::AppError;
pub use crate::store::{
    self, FileStore, KeyValueStore, MemStore, StorageMedium, memory, parse_store,
};
