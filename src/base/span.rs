//! Line/column positions and line lookup for rendering.

pub use text_size::TextSize;

/// Zero-based line and byte column of a position.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    /// Counted in UTF-8 bytes.
    pub col: u32,
}

impl LineCol {
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Line number as printed in `path:line:text` output.
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }
}

/// Start offsets of every line of a source text.
#[derive(Clone, Debug)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(TextSize::from(0))
            .chain(
                text.match_indices('\n')
                    .map(|(newline, _)| TextSize::from(newline as u32 + 1)),
            )
            .collect();
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Byte range `[start, end)` of a zero-based line, trailing newline
    /// included. `None` past the last line.
    pub fn line_range(&self, line: u32) -> Option<(TextSize, TextSize)> {
        let line = line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self.line_starts.get(line + 1).copied().unwrap_or(self.len);
        Some((start, end))
    }
}
