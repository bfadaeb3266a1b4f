//! 应用编排
//!
//! 持有配置和题库加载服务，负责：加载题库 → 写出 JSON → 记录降级题目 → 输出统计。
//! 排行榜按配置的文件路径打开。

use crate::config::Config;
use crate::models::{load_questions_json, save_questions_json};
use crate::services::{
    AnnotatorChain, BankService, FileSource, HttpSource, IdRangeAnnotator, LoadedBank,
    ReferenceAnnotator, WarnWriter,
};
use crate::storage::{JsonFileStore, Leaderboard};
use crate::utils::logging::{
    init_log_file, log_bank_loaded, log_leaderboard, log_startup, print_final_stats,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    service: BankService,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法创建日志文件: {}", config.output_log_file))?;

        let annotator = build_annotator(&config).await;
        let service = match &config.source_url {
            Some(url) => BankService::new(HttpSource::new(url.clone())),
            None => BankService::new(FileSource::new(&config.questions_file)),
        }
        .with_annotator(annotator);

        log_startup(&service.source_description());

        Ok(Self { config, service })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<LoadedBank> {
        let bank = self.service.load().await;
        log_bank_loaded(&bank.origin.to_string(), &bank.report);

        if bank.is_fallback() {
            warn!("⚠️ 当前使用备用题库，只包含 {} 道题目", bank.questions.len());
        }

        save_questions_json(Path::new(&self.config.output_json), &bank.questions)
            .await
            .with_context(|| format!("无法写出题库: {}", self.config.output_json))?;

        let written = WarnWriter::with_path(&self.config.warn_file)
            .write_degraded(&bank.questions)
            .with_context(|| format!("无法写入警告文件: {}", self.config.warn_file))?;
        if written > 0 {
            info!("📝 {} 道降级题目已写入 {}", written, self.config.warn_file);
        }

        print_final_stats(
            &bank.report,
            &self.config.output_json,
            &self.config.output_log_file,
        );

        match self.leaderboard().entries() {
            Ok(entries) => log_leaderboard(&entries),
            Err(e) => warn!("⚠️ 排行榜不可读: {}", e),
        }

        Ok(bank)
    }

    /// 排行榜，保存在配置的 `leaderboard_file` 中
    pub fn leaderboard(&self) -> Leaderboard<JsonFileStore> {
        Leaderboard::new(JsonFileStore::new(&self.config.leaderboard_file))
    }
}

/// 题号范围标注 + 参考题库（如果配置且可读）
async fn build_annotator(config: &Config) -> AnnotatorChain {
    let chain = AnnotatorChain::new().then(IdRangeAnnotator);

    let Some(reference_path) = &config.reference_json else {
        return chain;
    };

    match load_questions_json(Path::new(reference_path)).await {
        Ok(reference) => {
            let annotator = ReferenceAnnotator::new(&reference);
            info!("✓ 参考题库提供 {} 个题目分类", annotator.len());
            chain.then(annotator)
        }
        Err(e) => {
            warn!("⚠️ 参考题库不可用，仅按题号范围分类: {}", e);
            chain
        }
    }
}
