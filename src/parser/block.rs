//! 单个题块的扫描状态机
//!
//! ```text
//! (标记行) ──有行内 "A."──▶ SeekAnswerOrExplanation
//!     │                          ▲        │
//!     └──否──▶ CollectOptions ───┘        ├─解析标记─▶ CollectExplanationContinuation
//!                                         │                      │
//!                                         └──行尽/下一题──▶ SeekMarker ◀──空行/行尽──┘
//! ```
//!
//! 每一步只处理游标当前行并返回下一个状态。

use super::cursor::LineCursor;
use super::markers;
use super::options::{collapse_whitespace, find_option_a, split_at_labels, split_options};
use crate::models::question::{ParsedQuestion, RawBlock};
use tracing::debug;

/// 扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// 当前题块结束，寻找下一个题目标记
    SeekMarker,
    /// 收集多行选项
    CollectOptions,
    /// 寻找答案行或解析行
    SeekAnswerOrExplanation,
    /// 解析跨行延续
    CollectExplanationContinuation,
}

/// 扫描过程中累积的题块内容
#[derive(Debug, Default)]
struct BlockDraft {
    prompt: String,
    options_region: String,
    answer_index: Option<usize>,
    explanation: Option<String>,
}

impl BlockDraft {
    /// 处理标记行剩余文本，决定初始状态
    ///
    /// 只在选项区域内查找行内答案/解析标记，题干中的同名关键字保持原样。
    /// 返回的尾部从标记开始，作为下一行继续扫描。
    fn start<'h>(&mut self, head: &'h str) -> (ScanState, Option<&'h str>) {
        match find_option_a(head) {
            Some(idx) => {
                let (region, trailer) = markers::split_trailer(head[idx..].trim());
                self.prompt = head[..idx].trim().to_string();
                self.options_region = region.to_string();
                (ScanState::SeekAnswerOrExplanation, trailer)
            }
            None => {
                self.prompt = head.trim().to_string();
                (ScanState::CollectOptions, None)
            }
        }
    }

    fn push_option_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.options_region.is_empty() {
            self.options_region.push(' ');
        }
        self.options_region.push_str(text);
    }

    fn push_explanation_line(&mut self, line: &str) {
        let explanation = self.explanation.get_or_insert_with(String::new);
        if !explanation.is_empty() {
            explanation.push(' ');
        }
        explanation.push_str(line);
    }

    /// 生成最终记录（占位选项与答案索引限制由 `ParsedQuestion::new` 保证）
    fn finish(self, id: u32) -> ParsedQuestion {
        let mut prompt = self.prompt;
        let mut options = split_options(&self.options_region);

        // 选项区域为空时，尝试直接在题干中切分
        if options.is_empty() && !prompt.is_empty() {
            let parts = split_at_labels(&prompt);
            if parts.len() > 1 {
                options = parts[1..].iter().map(|p| collapse_whitespace(p)).collect();
                prompt = parts[0].to_string();
            }
        }

        if options.is_empty() {
            debug!("Câu {}: 未解析到选项，使用占位选项", id);
        }
        if self.answer_index.is_none() {
            debug!("Câu {}: 缺少答案行，默认第一个选项", id);
        }

        ParsedQuestion::new(
            id,
            collapse_whitespace(&prompt),
            options,
            self.answer_index.unwrap_or(0),
            self.explanation,
        )
    }
}

fn collect_options(cursor: &mut LineCursor<'_>, draft: &mut BlockDraft) -> ScanState {
    let Some(line) = cursor.peek() else {
        return ScanState::SeekMarker;
    };

    if markers::is_question_marker(line) {
        return ScanState::SeekMarker;
    }
    if markers::is_answer_marker(line) || markers::is_explanation_marker(line) {
        return ScanState::SeekAnswerOrExplanation;
    }

    let (head, trailer) = markers::split_trailer(line);
    draft.push_option_text(head);
    match trailer {
        Some(tail) => cursor.replace_current(tail),
        None => cursor.advance(),
    }
    ScanState::CollectOptions
}

fn seek_answer_or_explanation(cursor: &mut LineCursor<'_>, draft: &mut BlockDraft) -> ScanState {
    let Some(line) = cursor.peek() else {
        return ScanState::SeekMarker;
    };

    if markers::is_question_marker(line) {
        return ScanState::SeekMarker;
    }

    // 多个答案行时以最后一个为准，因此匹配后继续扫描
    if let Some((index, rest)) = markers::match_answer(line) {
        draft.answer_index = Some(index);
        match markers::find_inline_explanation(rest) {
            Some(tail) => cursor.replace_current(tail),
            None => cursor.advance(),
        }
        return ScanState::SeekAnswerOrExplanation;
    }

    if let Some(text) = markers::match_explanation(line) {
        draft.explanation = Some(text.to_string());
        cursor.advance();
        return ScanState::CollectExplanationContinuation;
    }

    cursor.advance();
    ScanState::SeekAnswerOrExplanation
}

fn collect_explanation_continuation(
    cursor: &mut LineCursor<'_>,
    draft: &mut BlockDraft,
) -> ScanState {
    match cursor.peek() {
        Some(line) if !line.is_empty() && !markers::is_question_marker(line) => {
            draft.push_explanation_line(line);
            cursor.advance();
            ScanState::CollectExplanationContinuation
        }
        _ => ScanState::SeekMarker,
    }
}

/// 解析单个题块
///
/// 题块第一行是标记行冒号之后的文本，其余为后续各行。从不失败：
/// 缺失的部分按默认值降级。
pub fn parse_block(block: &RawBlock<'_>) -> ParsedQuestion {
    let mut lines = block.body_text.lines().map(str::trim);
    let header = lines.next().unwrap_or("");

    let mut draft = BlockDraft::default();
    let (mut state, trailer) = draft.start(header);
    let mut cursor = LineCursor::new(trailer.into_iter().chain(lines));

    while state != ScanState::SeekMarker {
        state = match state {
            ScanState::CollectOptions => collect_options(&mut cursor, &mut draft),
            ScanState::SeekAnswerOrExplanation => {
                seek_answer_or_explanation(&mut cursor, &mut draft)
            }
            ScanState::CollectExplanationContinuation => {
                collect_explanation_continuation(&mut cursor, &mut draft)
            }
            ScanState::SeekMarker => ScanState::SeekMarker,
        };
    }

    draft.finish(block.ordinal_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(body: &str) -> ParsedQuestion {
        parse_block(&RawBlock::new(1, body))
    }

    #[test]
    fn test_start_state_depends_on_inline_options() {
        let mut draft = BlockDraft::default();
        assert_eq!(
            draft.start("Nhà nước là gì? A. x B. y"),
            (ScanState::SeekAnswerOrExplanation, None)
        );
        assert_eq!(draft.prompt, "Nhà nước là gì?");
        assert_eq!(draft.options_region, "A. x B. y");

        let mut draft = BlockDraft::default();
        assert_eq!(
            draft.start("Nhà nước là gì?"),
            (ScanState::CollectOptions, None)
        );
        assert!(draft.options_region.is_empty());
    }

    #[test]
    fn test_start_splits_trailer_only_after_options() {
        let mut draft = BlockDraft::default();
        assert_eq!(
            draft.start("Chọn đáp án: đúng A. x B. y Đáp án: B"),
            (ScanState::SeekAnswerOrExplanation, Some("Đáp án: B"))
        );
        assert_eq!(draft.prompt, "Chọn đáp án: đúng");
        assert_eq!(draft.options_region, "A. x B. y");
    }

    #[test]
    fn test_answer_keyword_inside_prompt_keeps_inline_options() {
        let q = block(" Chọn đáp án: đúng nhất A. x B. y C. z\nĐáp án: B");
        assert_eq!(q.prompt_text(), "Chọn đáp án: đúng nhất");
        assert_eq!(q.options(), ["A. x", "B. y", "C. z"]);
        assert_eq!(q.correct_answer_index(), 1);

        let q = block(" Giải thích: nghĩa là gì? A. x B. y\nĐáp án: A");
        assert_eq!(q.prompt_text(), "Giải thích: nghĩa là gì?");
        assert_eq!(q.options(), ["A. x", "B. y"]);
        assert_eq!(q.explanation(), None);
    }

    #[test]
    fn test_collect_options_stops_at_answer_line() {
        let mut cursor = LineCursor::from_text("A. x\n\nB. y\nĐáp án: B");
        let mut draft = BlockDraft::default();

        let mut state = ScanState::CollectOptions;
        while state == ScanState::CollectOptions {
            state = collect_options(&mut cursor, &mut draft);
        }

        assert_eq!(state, ScanState::SeekAnswerOrExplanation);
        assert_eq!(cursor.peek(), Some("Đáp án: B"));
        assert_eq!(draft.options_region, "A. x B. y");
    }

    #[test]
    fn test_collect_options_splits_inline_answer() {
        let mut cursor = LineCursor::from_text("A. x B. y Đáp án: A");
        let mut draft = BlockDraft::default();

        assert_eq!(collect_options(&mut cursor, &mut draft), ScanState::CollectOptions);
        assert_eq!(cursor.peek(), Some("Đáp án: A"));
        assert_eq!(
            collect_options(&mut cursor, &mut draft),
            ScanState::SeekAnswerOrExplanation
        );
        assert_eq!(draft.options_region, "A. x B. y");
    }

    #[test]
    fn test_explanation_continuation_stops_at_blank_line() {
        let mut cursor = LineCursor::from_text("dòng 2\ndòng 3\n\ndòng 4");
        let mut draft = BlockDraft {
            explanation: Some("dòng 1".to_string()),
            ..Default::default()
        };

        let mut state = ScanState::CollectExplanationContinuation;
        while state != ScanState::SeekMarker {
            state = collect_explanation_continuation(&mut cursor, &mut draft);
        }

        assert_eq!(draft.explanation.as_deref(), Some("dòng 1 dòng 2 dòng 3"));
        assert_eq!(cursor.peek(), Some(""));
    }

    #[test]
    fn test_multiline_options_block() {
        let q = block(" Pháp luật là gì?\nA. Quy tắc\nB. Tập quán\nC. Đạo đức\nD. Tôn giáo\nĐáp án: A\nGiải thích: Vì là quy tắc.");
        assert_eq!(q.prompt_text(), "Pháp luật là gì?");
        assert_eq!(
            q.options(),
            ["A. Quy tắc", "B. Tập quán", "C. Đạo đức", "D. Tôn giáo"]
        );
        assert_eq!(q.correct_answer_index(), 0);
        assert_eq!(q.explanation(), Some("Vì là quy tắc."));
    }

    #[test]
    fn test_last_answer_line_wins() {
        let q = block(" P A. x B. y C. z\nĐáp án: A\nĐáp án: c");
        assert_eq!(q.correct_answer_index(), 2);
    }

    #[test]
    fn test_answer_after_explanation_is_ignored() {
        let q = block(" P A. x B. y C. z\nĐáp án: B\nGiải thích: vì\n\nĐáp án: C");
        assert_eq!(q.correct_answer_index(), 1);
        assert_eq!(q.explanation(), Some("vì"));
    }

    #[test]
    fn test_second_chance_split_from_prompt() {
        // 标记行没有 "A."，但题干内含其他标签
        let q = block(" Chọn đáp án đúng B. hai C. ba");
        assert_eq!(q.prompt_text(), "Chọn đáp án đúng");
        assert_eq!(q.options(), ["B. hai", "C. ba"]);
    }

    #[test]
    fn test_empty_explanation_marker() {
        let q = block(" P A. x\nGiải thích:");
        assert_eq!(q.explanation(), Some(""));

        let q = block(" P A. x\nGiải thích:\ntiếp theo");
        assert_eq!(q.explanation(), Some("tiếp theo"));
    }

    #[test]
    fn test_empty_body_degrades() {
        let q = block("");
        assert_eq!(q.prompt_text(), "");
        assert!(q.has_placeholder_options());
        assert_eq!(q.correct_answer_index(), 0);
        assert_eq!(q.explanation(), None);
    }
}
