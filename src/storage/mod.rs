//! 本地持久化
//!
//! 以键值存储的形式抽象，排行榜和用户记录以 JSON 字符串保存在其中。

pub mod json_file_store;
pub mod leaderboard;

pub use json_file_store::JsonFileStore;
pub use leaderboard::{HistoryEntry, Leaderboard, LeaderboardEntry, User};

use crate::error::AppResult;
use std::collections::BTreeMap;

/// 键值存储
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> AppResult<()>;

    /// 所有键（有序）
    fn list(&self) -> AppResult<Vec<String>>;
}

/// 内存存储
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn list(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}
