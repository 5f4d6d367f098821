pub mod file;
pub mod memory;
pub mod storage_port;

use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use file::FileStore;
pub use memory::MemStore;

pub const DEFAULT_DATA_DIR: &str = "./.instance";

/// String key-value medium the contact list is persisted to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    Mem,
    Json,
}

impl StorageMedium {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMedium::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMedium::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMedium::Json),
            "mem" => Ok(StorageMedium::Mem),
            _ => Err(AppError::Validation(format!(
                "Not a recognized storage medium: '{}' (expected mem or json)",
                str
            ))),
        }
    }
}

pub fn parse_store(
    medium: StorageMedium,
    data_dir: &Path,
) -> Result<Box<dyn KeyValueStore>, AppError> {
    match medium {
        StorageMedium::Json => Ok(Box::new(FileStore::new(data_dir))),
        StorageMedium::Mem => Ok(Box::new(MemStore::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
