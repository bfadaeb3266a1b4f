use super::question::ParsedQuestion;
use std::collections::HashMap;

/// 解析质量统计
///
/// 解析器本身不报告失败，调用方通过检查结果记录得到这些指标。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankReport {
    /// 题目总数
    pub total: usize,
    /// 使用占位选项的题目编号
    pub placeholder_ids: Vec<u32>,
    /// 没有解析说明的题目数
    pub missing_explanation: usize,
    /// 重复出现的题目编号（按首次出现顺序）
    pub duplicate_ids: Vec<u32>,
}

impl BankReport {
    pub fn inspect(questions: &[ParsedQuestion]) -> Self {
        let mut seen: HashMap<u32, usize> = HashMap::new();
        let mut duplicate_ids = Vec::new();

        for q in questions {
            let count = seen.entry(q.id()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicate_ids.push(q.id());
            }
        }

        Self {
            total: questions.len(),
            placeholder_ids: questions
                .iter()
                .filter(|q| q.has_placeholder_options())
                .map(|q| q.id())
                .collect(),
            missing_explanation: questions
                .iter()
                .filter(|q| q.explanation().is_none())
                .count(),
            duplicate_ids,
        }
    }

    /// 完整解析的题目数
    pub fn complete(&self) -> usize {
        self.total - self.placeholder_ids.len()
    }
}
