//! 分类标注 - 业务能力层
//!
//! 解析器产出的记录分类为空，由这里按题号补充。分类表的变化不影响解析逻辑。

use crate::models::{Category, ParsedQuestion};
use std::collections::HashMap;

/// 分类标注器
pub trait CategoryAnnotator: Send + Sync {
    fn assign(&self, records: Vec<ParsedQuestion>) -> Vec<ParsedQuestion>;
}

/// 按静态题号范围标注；范围外的题目分类为空
#[derive(Debug, Clone, Copy, Default)]
pub struct IdRangeAnnotator;

impl CategoryAnnotator for IdRangeAnnotator {
    fn assign(&self, records: Vec<ParsedQuestion>) -> Vec<ParsedQuestion> {
        records
            .into_iter()
            .map(|q| {
                let name = Category::from_question_id(q.id())
                    .map(Category::name)
                    .unwrap_or_default();
                q.with_category(name)
            })
            .collect()
    }
}

/// 参照已分类的题库，按题号复制分类；找不到时保留原分类
///
/// 参考题库中的简称（如 "Quy phạm & Quan hệ PL"）统一为完整分类名，
/// 无法识别的分类名原样保留。
#[derive(Debug, Clone, Default)]
pub struct ReferenceAnnotator {
    by_id: HashMap<u32, String>,
}

impl ReferenceAnnotator {
    /// 同一题号出现多次时以第一次为准
    pub fn new(reference: &[ParsedQuestion]) -> Self {
        let mut by_id = HashMap::new();
        for q in reference {
            if !q.category().is_empty() {
                by_id
                    .entry(q.id())
                    .or_insert_with(|| canonical_name(q.category()));
            }
        }
        Self { by_id }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl CategoryAnnotator for ReferenceAnnotator {
    fn assign(&self, records: Vec<ParsedQuestion>) -> Vec<ParsedQuestion> {
        records
            .into_iter()
            .map(|q| match self.by_id.get(&q.id()) {
                Some(category) => q.with_category(category.clone()),
                None => q,
            })
            .collect()
    }
}

fn canonical_name(name: &str) -> String {
    Category::from_name(name)
        .map(|category| category.name().to_string())
        .unwrap_or_else(|| name.to_string())
}

/// 依次应用多个标注器，后者覆盖前者
#[derive(Default)]
pub struct AnnotatorChain {
    annotators: Vec<Box<dyn CategoryAnnotator>>,
}

impl AnnotatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, annotator: impl CategoryAnnotator + 'static) -> Self {
        self.annotators.push(Box::new(annotator));
        self
    }
}

impl CategoryAnnotator for AnnotatorChain {
    fn assign(&self, records: Vec<ParsedQuestion>) -> Vec<ParsedQuestion> {
        self.annotators
            .iter()
            .fold(records, |records, annotator| annotator.assign(records))
    }
}
