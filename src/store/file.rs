use super::*;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Keeps each key in its own `<key>.json` file under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        Ok(Some(data))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.write_all(value.as_bytes())?;
        Ok(())
    }

    fn medium(&self) -> &str {
        "json"
    }
}
