/// 题块内的行游标
///
/// 行在构造时去除首尾空白（同时去掉 `\r`）。游标由调用方持有，
/// 每个扫描步骤通过 `&mut` 推进，不存在跨题块共享的位置。
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            lines: lines.into_iter().map(str::trim).collect(),
            pos: 0,
        }
    }

    /// 按 `\n` / `\r\n` 切分文本
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.lines())
    }

    /// 当前行
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// 用当前行的尾部替换当前行，下一步从尾部继续扫描
    pub fn replace_current(&mut self, tail: &'a str) {
        if let Some(line) = self.lines.get_mut(self.pos) {
            *line = tail.trim();
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }
}
