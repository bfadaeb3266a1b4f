use serde::{Deserialize, Serialize};

/// 选项全部缺失时使用的占位选项
pub const PLACEHOLDER_OPTIONS: [&str; 4] = [
    "A. Đáp án 1",
    "B. Đáp án 2",
    "C. Đáp án 3",
    "D. Đáp án 4",
];

/// 题库原文中的一个题块
///
/// 从 "Câu N:" 标记的冒号之后开始，到下一个标记所在行之前结束。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// 标记中的编号，不保证唯一或连续
    pub ordinal_id: u32,
    /// 题块正文（含标记行剩余部分）
    pub body_text: &'a str,
}

impl<'a> RawBlock<'a> {
    pub fn new(ordinal_id: u32, body_text: &'a str) -> Self {
        Self {
            ordinal_id,
            body_text,
        }
    }
}

/// 解析后的题目
///
/// 构造后不可修改；分类由外部标注器通过 [`ParsedQuestion::with_category`] 生成新记录。
/// 序列化字段名与前端使用的 JSON 格式一致；反序列化同样经过 [`ParsedQuestion::new`]。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuestionRecord")]
pub struct ParsedQuestion {
    id: u32,
    category: String,
    #[serde(rename = "question")]
    prompt_text: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    correct_answer_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

/// JSON 中的原始题目记录，字段未经校验
#[derive(Deserialize)]
struct QuestionRecord {
    id: u32,
    #[serde(default)]
    category: String,
    #[serde(rename = "question")]
    prompt_text: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(rename = "correctAnswer", default)]
    correct_answer_index: usize,
    #[serde(default)]
    explanation: Option<String>,
}

impl From<QuestionRecord> for ParsedQuestion {
    fn from(record: QuestionRecord) -> Self {
        ParsedQuestion::new(
            record.id,
            record.prompt_text,
            record.options,
            record.correct_answer_index,
            record.explanation,
        )
        .with_category(record.category)
    }
}

impl ParsedQuestion {
    /// 创建题目记录
    ///
    /// - `options` 为空时替换为四个占位选项
    /// - `correct_answer_index` 被限制在 `[0, options.len() - 1]`
    pub fn new(
        id: u32,
        prompt_text: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: usize,
        explanation: Option<String>,
    ) -> Self {
        let options = if options.is_empty() {
            PLACEHOLDER_OPTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            options
        };
        let correct_answer_index = correct_answer_index.min(options.len() - 1);

        Self {
            id,
            category: String::new(),
            prompt_text: prompt_text.into(),
            options,
            correct_answer_index,
            explanation,
        }
    }

    /// 返回带有指定分类的新记录
    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// 正确选项的文本
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_answer_index)
            .map(String::as_str)
    }

    /// 是否使用了占位选项（解析降级）
    pub fn has_placeholder_options(&self) -> bool {
        self.options.len() == PLACEHOLDER_OPTIONS.len()
            && self
                .options
                .iter()
                .zip(PLACEHOLDER_OPTIONS.iter())
                .all(|(a, b)| a == b)
    }
}

impl std::fmt::Display for ParsedQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let preview = if self.prompt_text.chars().count() > 60 {
            self.prompt_text.chars().take(60).collect::<String>() + "..."
        } else {
            self.prompt_text.clone()
        };
        write!(f, "Câu {}: {} [{} 个选项]", self.id, preview, self.options.len())
    }
}
