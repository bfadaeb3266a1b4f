//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::Result;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::BankReport;
use crate::storage::LeaderboardEntry;

/// 初始化 tracing 订阅器
///
/// `RUST_LOG` 优先；否则按 `verbose` 选择 debug 或 info 级别
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题库转换日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `source`: 题库来源描述
pub fn log_startup(source: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库解析模式");
    info!("📄 题库来源: {}", source);
    info!("{}", "=".repeat(60));
}

/// 记录题库加载结果
pub fn log_bank_loaded(origin: &str, report: &BankReport) {
    info!("✓ 从 {} 加载 {} 道题目", origin, report.total);
    if !report.placeholder_ids.is_empty() {
        info!(
            "⚠️ {} 道题目未解析到选项，已使用占位选项",
            report.placeholder_ids.len()
        );
    }
    if !report.duplicate_ids.is_empty() {
        info!("⚠️ 重复题号: {:?}", report.duplicate_ids);
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `report`: 题库统计
/// - `output_path`: 输出 JSON 路径
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(report: &BankReport, output_path: &str, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 题库转换完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 完整: {}/{}", report.complete(), report.total);
    info!("❌ 占位选项: {}", report.placeholder_ids.len());
    info!("📝 缺少解析: {}", report.missing_explanation);
    info!("{}", "=".repeat(60));
    info!("\n题库已保存至: {}", output_path);
    info!("日志已保存至: {}", log_file_path);
}

/// 记录排行榜概况
pub fn log_leaderboard(entries: &[LeaderboardEntry]) {
    match entries.first() {
        Some(top) => info!(
            "🏆 排行榜 {} 条记录，最高分: {} ({}, {})",
            entries.len(),
            top.score,
            top.name,
            top.date
        ),
        None => info!("🏆 排行榜暂无记录"),
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
