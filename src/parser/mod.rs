//! 题库文本解析器
//!
//! 将半结构化的越南语题库纯文本转换为有序的 [`ParsedQuestion`] 列表。
//!
//! ## 处理步骤
//!
//! 1. **切分**：按行扫描 "Câu N:" 标记，每个标记开始一个 [`RawBlock`]
//! 2. **选项**：标记行内的 "A." 之后为选项区域，否则收集后续各行
//! 3. **答案与解析**：扫描 "Đáp án:" 与可跨行的 "Giải thích:"
//! 4. **降级**：缺失的选项、答案、解析都使用默认值，从不返回错误
//!
//! 解析是纯函数：无 I/O，无共享状态，可并发调用。

pub mod block;
pub mod cursor;
pub mod markers;
pub mod options;

pub use block::{parse_block, ScanState};
pub use cursor::LineCursor;

use crate::models::question::{ParsedQuestion, RawBlock};
use tracing::debug;

/// 题库解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionBankParser;

impl QuestionBankParser {
    pub fn new() -> Self {
        Self
    }

    /// 解析整份题库文本
    pub fn parse(&self, raw_text: &str) -> Vec<ParsedQuestion> {
        parse(raw_text)
    }
}

/// 按题目标记切分文本
///
/// 标记必须位于行首（忽略前导空白）。题块正文从标记冒号之后开始，
/// 到下一个标记所在行之前结束，保持原文顺序。
pub fn segment(raw_text: &str) -> Vec<RawBlock<'_>> {
    let text = raw_text.strip_prefix('\u{feff}').unwrap_or(raw_text);

    // (题号, 正文起点, 标记行起点)
    let mut found = Vec::new();
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let content = line.trim_start();
        let lead = line.len() - content.len();
        if let Some((id, end)) = markers::match_question_marker(content) {
            found.push((id, offset + lead + end, offset));
        }
        offset += line.len();
    }

    found
        .iter()
        .enumerate()
        .map(|(i, &(id, body_start, _))| {
            let body_end = found
                .get(i + 1)
                .map(|&(_, _, line_start)| line_start)
                .unwrap_or(text.len());
            RawBlock::new(id, &text[body_start..body_end])
        })
        .collect()
}

/// 解析整份题库文本
///
/// 每个题目标记产生一条记录，顺序与原文一致；空输入返回空列表。
pub fn parse(raw_text: &str) -> Vec<ParsedQuestion> {
    let blocks = segment(raw_text);
    debug!("切分得到 {} 个题块", blocks.len());
    blocks.iter().map(parse_block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_round_trip() {
        let questions = parse(
            "Question 5: Prompt text A. opt1 B. opt2 C. opt3 D. opt4 Answer: C Explanation: because.",
        );

        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.id(), 5);
        assert_eq!(q.category(), "");
        assert_eq!(q.prompt_text(), "Prompt text");
        assert_eq!(q.options(), ["A. opt1", "B. opt2", "C. opt3", "D. opt4"]);
        assert_eq!(q.correct_answer_index(), 2);
        assert_eq!(q.explanation(), Some("because."));
    }

    #[test]
    fn test_order_follows_source_position() {
        let raw = "Câu 3: Ba A. x\nCâu 1: Một A. y\nCâu 9: Chín A. z\n";
        let ids: Vec<u32> = parse(raw).iter().map(|q| q.id()).collect();
        assert_eq!(ids, vec![3, 1, 9]);
    }

    #[test]
    fn test_missing_answer_defaults_to_first_option() {
        let q = &parse("Câu 1: Hỏi A. x B. y C. z D. t\nGiải thích: không có đáp án")[0];
        assert_eq!(q.correct_answer_index(), 0);
    }

    #[test]
    fn test_out_of_range_answer_is_clamped() {
        let q = &parse("Câu 1: Hỏi A. x B. y\nĐáp án: D")[0];
        assert_eq!(q.options().len(), 2);
        assert_eq!(q.correct_answer_index(), 1);
    }

    #[test]
    fn test_zero_options_fall_back_to_placeholders() {
        let q = &parse("Câu 4: Câu hỏi không có lựa chọn\nĐáp án: D\n")[0];
        assert_eq!(
            q.options(),
            ["A. Đáp án 1", "B. Đáp án 2", "C. Đáp án 3", "D. Đáp án 4"]
        );
        assert_eq!(q.correct_answer_index(), 3);
        assert_eq!(q.prompt_text(), "Câu hỏi không có lựa chọn");
    }

    #[test]
    fn test_multi_line_explanation_continuation() {
        let raw = "Câu 2: Hỏi A. x B. y\nĐáp án: B\nGiải thích: dòng một\ndòng hai\ndòng ba\n\nghi chú khác\nCâu 3: Tiếp A. z";
        let questions = parse(raw);
        assert_eq!(questions.len(), 2);
        assert_eq!(
            questions[0].explanation(),
            Some("dòng một dòng hai dòng ba")
        );
        assert_eq!(questions[1].id(), 3);
    }

    #[test]
    fn test_explanation_stops_at_next_marker() {
        let raw = "Câu 1: Hỏi A. x\nGiải thích: một\nhai\nCâu 2: Tiếp A. y";
        let questions = parse(raw);
        assert_eq!(questions[0].explanation(), Some("một hai"));
        assert_eq!(questions[1].prompt_text(), "Tiếp");
    }

    #[test]
    fn test_idempotent() {
        let raw = "Câu 1: Hỏi\nA. x\nB. y\nĐáp án: B\n\nCâu 2: Khác A. z\n";
        assert_eq!(parse(raw), parse(raw));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \r\n").is_empty());
        assert!(parse("không có câu hỏi nào").is_empty());
    }

    #[test]
    fn test_crlf_and_lf_give_same_result() {
        let lf = "Câu 1: Hỏi gì?\nA. x\nB. y\nĐáp án: B\nGiải thích: vì\nthế\n";
        let crlf = lf.replace('\n', "\r\n");
        assert_eq!(parse(lf), parse(&crlf));
        assert_eq!(parse(&crlf)[0].explanation(), Some("vì thế"));
    }

    #[test]
    fn test_multiline_prompt_whitespace_is_collapsed() {
        let q = &parse("  Câu  12 :   Nhà   nước\tlà gì?  A.  một   B. hai")[0];
        assert_eq!(q.id(), 12);
        assert_eq!(q.prompt_text(), "Nhà nước là gì?");
        assert_eq!(q.options(), ["A. một", "B. hai"]);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let questions = parse("Câu 1: a A. x\nCâu 1: b A. y");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt_text(), "a");
        assert_eq!(questions[1].prompt_text(), "b");
    }

    #[test]
    fn test_segment_bodies() {
        let raw = "\u{feff}Mở đầu\nCâu 1: một\nhai\n  Câu 2:ba";
        let blocks = segment(raw);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], RawBlock::new(1, " một\nhai\n"));
        assert_eq!(blocks[1], RawBlock::new(2, "ba"));
    }

    #[test]
    fn test_parser_struct_matches_free_function() {
        let raw = "Câu 7: Hỏi A. x B. y\nĐáp án: b";
        assert_eq!(QuestionBankParser::new().parse(raw), parse(raw));
    }
}
