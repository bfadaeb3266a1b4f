use once_cell::sync::Lazy;
use regex::Regex;

/// 选项 A 的起始标签
static OPTION_A: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bA\.").expect("选项A正则无效"));

/// A-D 选项标签
static OPTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-D]\.").expect("选项标签正则无效"));

/// 查找第一个 "A." 标签的位置
pub fn find_option_a(text: &str) -> Option<usize> {
    OPTION_A.find(text).map(|m| m.start())
}

/// 在每个 A-D 标签之前切分，去除空白并丢弃空片段
pub fn split_at_labels(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for m in OPTION_LABEL.find_iter(text) {
        pieces.push(&text[start..m.start()]);
        start = m.start();
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// 将选项区域切分为选项列表
pub fn split_options(region: &str) -> Vec<String> {
    split_at_labels(region)
        .into_iter()
        .map(collapse_whitespace)
        .collect()
}

/// 将连续空白压缩为单个空格并去除首尾空白
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
