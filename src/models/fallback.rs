//! 内置备用题库
//!
//! 题库来源不可用或解析结果为空时使用

use super::category::Category;
use super::question::ParsedQuestion;

fn q(
    id: u32,
    category: Category,
    prompt: &str,
    options: [&str; 4],
    correct_answer: usize,
    explanation: &str,
) -> ParsedQuestion {
    ParsedQuestion::new(
        id,
        prompt,
        options.iter().map(|s| s.to_string()).collect(),
        correct_answer,
        Some(explanation.to_string()),
    )
    .with_category(category.name())
}

/// 备用题目列表
pub fn fallback_questions() -> Vec<ParsedQuestion> {
    vec![
        q(
            1,
            Category::StateTheory,
            "Nhà nước là gì?",
            [
                "A. Tập hợp của công dân",
                "B. Tổ chức xã hội",
                "C. Tổ chức quyền lực chính trị",
                "D. Tổ chức kinh tế",
            ],
            2,
            "Nhà nước là tổ chức quyền lực chính trị.",
        ),
        q(
            2,
            Category::LawTheory,
            "Pháp luật có tính quy phạm là vì?",
            [
                "A. Có quy tắc xử sự",
                "B. Do cơ quan Nhà nước ban hành",
                "C. Dùng để điều chỉnh xã hội",
                "D. Có chế tài",
            ],
            0,
            "Pháp luật là hệ thống quy tắc xử sự do Nhà nước ban hành.",
        ),
    ]
}
