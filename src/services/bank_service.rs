//! 题库加载服务
//!
//! 流程：取得原始文本 → 解析 → 标注分类；来源失败或解析结果为空时
//! 使用内置备用题库。来源错误只记录日志，不向调用方返回。

use crate::models::{fallback_questions, BankReport, ParsedQuestion};
use crate::parser::QuestionBankParser;
use crate::services::category_annotator::{AnnotatorChain, CategoryAnnotator};
use crate::services::question_source::QuestionSource;
use tracing::{info, warn};

/// 题库数据来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankOrigin {
    /// 从来源解析得到
    Source(String),
    /// 使用内置备用题库
    Fallback { reason: String },
}

impl std::fmt::Display for BankOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankOrigin::Source(desc) => write!(f, "{}", desc),
            BankOrigin::Fallback { reason } => write!(f, "内置备用题库 ({})", reason),
        }
    }
}

/// 加载结果
#[derive(Debug, Clone)]
pub struct LoadedBank {
    pub questions: Vec<ParsedQuestion>,
    pub origin: BankOrigin,
    pub report: BankReport,
}

impl LoadedBank {
    fn new(questions: Vec<ParsedQuestion>, origin: BankOrigin) -> Self {
        let report = BankReport::inspect(&questions);
        Self {
            questions,
            origin,
            report,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, BankOrigin::Fallback { .. })
    }
}

/// 题库加载服务
pub struct BankService {
    source: Box<dyn QuestionSource>,
    annotator: Box<dyn CategoryAnnotator>,
    parser: QuestionBankParser,
}

impl BankService {
    /// 创建不做分类标注的服务
    pub fn new(source: impl QuestionSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            annotator: Box::new(AnnotatorChain::new()),
            parser: QuestionBankParser::new(),
        }
    }

    /// 指定分类标注器
    pub fn with_annotator(mut self, annotator: impl CategoryAnnotator + 'static) -> Self {
        self.annotator = Box::new(annotator);
        self
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// 加载题库，从不失败
    pub async fn load(&self) -> LoadedBank {
        let description = self.source.describe();

        let raw = match self.source.fetch_raw_text().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("⚠️ 读取题库失败，使用备用题库: {}", e);
                return LoadedBank::new(
                    fallback_questions(),
                    BankOrigin::Fallback {
                        reason: e.to_string(),
                    },
                );
            }
        };

        let parsed = self.parser.parse(&raw);
        if parsed.is_empty() {
            warn!("⚠️ {} 中没有识别到任何题目，使用备用题库", description);
            return LoadedBank::new(
                fallback_questions(),
                BankOrigin::Fallback {
                    reason: "未识别到题目".to_string(),
                },
            );
        }

        info!("✓ 解析完成，共 {} 道题目", parsed.len());
        let questions = self.annotator.assign(parsed);

        LoadedBank::new(questions, BankOrigin::Source(description))
    }
}
