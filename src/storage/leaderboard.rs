use super::KeyValueStore;
use crate::error::{AppResult, StorageError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

const LEADERBOARD_KEY: &str = "lawmaster_leaderboard";
const USER_KEY: &str = "lawmaster_user";

/// 排行榜保留的条目数
pub const LEADERBOARD_SIZE: usize = 20;

/// 排行榜条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    /// 本地日期，格式 dd/mm/YYYY
    pub date: String,
}

/// 单次测验记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub score: u32,
    pub total: u32,
}

/// 用户记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub score: u32,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// 排行榜
pub struct Leaderboard<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 记录一次成绩：按分数降序排列，只保留前 20 名
    pub fn save_score(&mut self, name: &str, score: u32) -> AppResult<Vec<LeaderboardEntry>> {
        let mut entries = self.entries()?;
        entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
            date: today(),
        });
        // 稳定排序：同分时先记录的在前
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(LEADERBOARD_SIZE);

        self.write(LEADERBOARD_KEY, &entries)?;
        tracing::debug!("排行榜已更新: {} 分 ({})", score, name);
        Ok(entries)
    }

    /// 当前排行榜，未保存过时为空
    pub fn entries(&self) -> AppResult<Vec<LeaderboardEntry>> {
        Ok(self.read(LEADERBOARD_KEY)?.unwrap_or_default())
    }

    pub fn save_user(&mut self, user: &User) -> AppResult<()> {
        self.write(USER_KEY, user)
    }

    pub fn user(&self) -> AppResult<Option<User>> {
        self.read(USER_KEY)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| {
                    StorageError::Serde {
                        key: key.to_string(),
                        source,
                    }
                    .into()
                }),
            None => Ok(None),
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serde {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, raw)
    }
}

fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}
