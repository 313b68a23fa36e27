use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::traits::KeyValueStorage;

/// In-memory key-value storage for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryConnection {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow::anyhow!("In-memory storage lock poisoned")
}

impl KeyValueStorage for MemoryConnection {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn put_value(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_value(&self, key: &str) -> Result<bool> {
        let mut values = self.values.write().map_err(poisoned)?;
        Ok(values.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_connection_crud() {
        let conn = MemoryConnection::new();

        assert_eq!(conn.get_value("k").unwrap(), None);
        conn.put_value("k", "v1").unwrap();
        conn.put_value("k", "v2").unwrap();
        assert_eq!(conn.get_value("k").unwrap().as_deref(), Some("v2"));
        assert!(conn.delete_value("k").unwrap());
        assert!(!conn.delete_value("k").unwrap());
        assert_eq!(conn.get_value("k").unwrap(), None);
    }
}
