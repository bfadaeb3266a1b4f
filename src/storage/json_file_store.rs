use super::KeyValueStore;
use crate::error::{AppResult, StorageError};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// 以单个 JSON 对象文件保存的键值存储
///
/// 每次读写都直接访问文件；文件不存在视为空存储。
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> AppResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| {
            StorageError::Serde {
                key: "*".to_string(),
                source,
            }
            .into()
        })
    }

    fn io_error(&self, source: std::io::Error) -> crate::error::AppError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
        .into()
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);

        let content = serde_json::to_string_pretty(&entries).map_err(|source| StorageError::Serde {
            key: key.to_string(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    fn list(&self) -> AppResult<Vec<String>> {
        Ok(self.read_all()?.into_keys().collect())
    }
}
