//! 题库来源 - 业务能力层
//!
//! 只负责"取得原始文本"能力，不解析、不兜底

use crate::error::{AppError, AppResult, SourceError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP 请求超时（秒）
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// 题库原始文本来源
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// 获取完整的题库文本
    async fn fetch_raw_text(&self) -> AppResult<String>;

    /// 来源描述（用于日志）
    fn describe(&self) -> String;
}

/// 本地文件来源
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch_raw_text(&self) -> AppResult<String> {
        let path = self.path.display().to_string();
        debug!("读取题库文件: {}", path);

        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound { path }.into())
            }
            Err(source) => Err(SourceError::ReadFailed { path, source }.into()),
        }
    }

    fn describe(&self) -> String {
        format!("文件 {}", self.path.display())
    }
}

/// HTTP 来源
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                warn!("⚠️ HTTP 客户端创建失败，改用默认客户端（无超时）: {}", e);
                reqwest::Client::new()
            });
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch_raw_text(&self) -> AppResult<String> {
        debug!("请求题库: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::source_request_failed(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::BadStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        response
            .text()
            .await
            .map_err(|e| AppError::source_request_failed(&self.url, e))
    }

    fn describe(&self) -> String {
        format!("URL {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_source_not_found() {
        let source = FileSource::new(std::env::temp_dir().join("lawmaster_no_bank.txt"));
        let result = tokio_test::block_on(source.fetch_raw_text());
        assert!(matches!(
            result,
            Err(AppError::Source(SourceError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_describe() {
        assert_eq!(FileSource::new("300 câu.txt").describe(), "文件 300 câu.txt");
        assert_eq!(
            HttpSource::new("http://localhost/bank.txt").describe(),
            "URL http://localhost/bank.txt"
        );
    }

    #[test]
    fn test_http_source_connection_refused() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let source = HttpSource::new(format!("http://127.0.0.1:{}/bank.txt", port));

        let result = tokio_test::block_on(source.fetch_raw_text());
        assert!(matches!(
            result,
            Err(AppError::Source(SourceError::RequestFailed { .. }))
        ));
    }
}
