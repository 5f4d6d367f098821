use super::*;
use std::collections::HashMap;

/// Volatile backend; contents are gone once the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    pub data: HashMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl KeyValueStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_previous_value() -> Result<(), AppError> {
        let mut store = MemStore::new();

        assert_eq!(store.get("contacts")?, None);

        store.set("contacts", "[]")?;
        store.set("contacts", "[1]")?;

        assert_eq!(store.get("contacts")?, Some("[1]".to_string()));
        assert_eq!(store.data.len(), 1);
        Ok(())
    }
}
