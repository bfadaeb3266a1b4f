//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::ParsedQuestion;
use crate::utils::truncate_text;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 将解析降级（占位选项）的题目写入 warn.txt，便于人工修正原文
/// - 只处理单个题目的警告
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `question`: 降级的题目
    /// - `reason`: 降级原因
    pub fn write(&self, question: &ParsedQuestion, reason: &str) -> AppResult<()> {
        debug!("写入警告: Câu {} | {}", question.id(), reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        let warn_msg = format!(
            "Câu {} | {} | 题干: {}\n",
            question.id(),
            reason,
            truncate_text(question.prompt_text(), 80)
        );

        file.write_all(warn_msg.as_bytes())
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        Ok(())
    }

    /// 写入所有使用占位选项的题目，返回写入条数
    pub fn write_degraded(&self, questions: &[ParsedQuestion]) -> AppResult<usize> {
        let mut written = 0;
        for question in questions.iter().filter(|q| q.has_placeholder_options()) {
            self.write(question, "未解析到选项")?;
            written += 1;
        }
        Ok(written)
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
