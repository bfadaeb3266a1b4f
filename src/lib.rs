//! # LawMaster Bank
//!
//! 法律学习应用的题库处理库：把人工编写的越南语纯文本题库解析为结构化题目
//!
//! ## 架构设计
//!
//! ### ① 解析层（Parser）
//! - `parser/` - 纯函数，无 I/O，只把文本变成 `Vec<ParsedQuestion>`
//! - `segment` - 按 "Câu N:" 标记切分题块
//! - `parse_block` - 单个题块的扫描状态机
//!
//! ### ② 业务能力层（Services）
//! - `QuestionSource` - 取得原始文本（文件 / HTTP）
//! - `CategoryAnnotator` - 按题号范围或参考题库标注分类
//! - `BankService` - 取文本 → 解析 → 标注，失败时使用备用题库
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 存储层（Storage）
//! - `KeyValueStore` - 键值存储抽象
//! - `Leaderboard` - 排行榜与用户记录
//!
//! ### ④ 编排层（App）
//! - `App` - 加载题库、写出 JSON、输出统计
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod storage;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{BankReport, Category, ParsedQuestion, RawBlock};
pub use parser::{parse, parse_block, segment, QuestionBankParser};
pub use services::{BankService, LoadedBank};
