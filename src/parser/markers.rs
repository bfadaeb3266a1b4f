//! 题库文本中的标记
//!
//! 越南语关键字与英文关键字都接受，不区分大小写，关键字内部允许多余空白。
//! 所有匹配函数都假定输入行已去除首尾空白。

use once_cell::sync::Lazy;
use regex::Regex;

/// "Câu 12:" / "Question 12:"
static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:câu|question)\s*([0-9]+)\s*:").expect("题目标记正则无效")
});

/// "Đáp án:" / "Answer:"
static ANSWER_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:đáp\s*án|answer)\s*:").expect("答案标记正则无效")
});

/// "Giải thích:" / "Explanation:"
static EXPLANATION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:giải\s*thích|explanation)\s*:").expect("解析标记正则无效")
});

/// 行内出现的答案或解析标记
static INLINE_TRAILER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:đáp\s*án|answer|giải\s*thích|explanation)\s*:")
        .expect("行内标记正则无效")
});

/// 行内出现的解析标记
static INLINE_EXPLANATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:giải\s*thích|explanation)\s*:").expect("行内解析标记正则无效")
});

/// 匹配题目标记
///
/// # 返回
/// 返回 (题号, 标记在行内的结束位置)；题号位数过多时饱和为 `u32::MAX`
pub fn match_question_marker(line: &str) -> Option<(u32, usize)> {
    let caps = QUESTION_MARKER.captures(line)?;
    let whole = caps.get(0)?;
    let id = caps
        .get(1)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(u32::MAX);
    Some((id, whole.end()))
}

pub fn is_question_marker(line: &str) -> bool {
    QUESTION_MARKER.is_match(line)
}

/// 行首是否为答案标记（不要求后面跟有字母）
pub fn is_answer_marker(line: &str) -> bool {
    ANSWER_MARKER.is_match(line)
}

pub fn is_explanation_marker(line: &str) -> bool {
    EXPLANATION_MARKER.is_match(line)
}

/// 匹配答案行并解码字母
///
/// # 返回
/// 返回 (0 起始的选项索引, 字母之后的剩余文本)；标记后不是 A-D 时返回 None
pub fn match_answer(line: &str) -> Option<(usize, &str)> {
    let marker = ANSWER_MARKER.find(line)?;
    let rest = line[marker.end()..].trim_start();
    let letter = rest.chars().next()?;
    let index = match letter.to_ascii_uppercase() {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        'D' => 3,
        _ => return None,
    };
    Some((index, &rest[letter.len_utf8()..]))
}

/// 匹配解析行，返回标记后的文本
pub fn match_explanation(line: &str) -> Option<&str> {
    let marker = EXPLANATION_MARKER.find(line)?;
    Some(line[marker.end()..].trim())
}

/// 在第一个行内答案/解析标记处切分
///
/// # 返回
/// 返回 (标记前的文本, 从标记开始的尾部)
pub fn split_trailer(text: &str) -> (&str, Option<&str>) {
    match INLINE_TRAILER.find(text) {
        Some(m) => (text[..m.start()].trim(), Some(text[m.start()..].trim())),
        None => (text, None),
    }
}

/// 查找行内解析标记，返回从标记开始的尾部
pub fn find_inline_explanation(text: &str) -> Option<&str> {
    INLINE_EXPLANATION
        .find(text)
        .map(|m| text[m.start()..].trim())
}
