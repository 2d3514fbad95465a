use super::{FileId, LineCol, TextSize};

/// Source location of one identifier occurrence.
///
/// Carries both the byte offset of the identifier start and its line/column
/// range so the renderer can re-extract the line without re-lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub file: FileId,
    /// Byte offset of the start of the identifier within its file
    pub offset: TextSize,
    pub start: LineCol,
    pub end: LineCol,
}

impl SourceSpan {
    pub fn new(file: FileId, offset: TextSize, start: LineCol, end: LineCol) -> Self {
        Self {
            file,
            offset,
            start,
            end,
        }
    }

    /// Span of a single-line identifier of `len` bytes.
    pub fn identifier(file: FileId, offset: u32, line: u32, col: u32, len: u32) -> Self {
        Self {
            file,
            offset: TextSize::from(offset),
            start: LineCol::new(line, col),
            end: LineCol::new(line, col + len),
        }
    }

    /// Ordering key within one file: offset first, column as tie-breaker.
    pub fn sort_key(&self) -> (TextSize, u32, u32) {
        (self.offset, self.start.line, self.start.col)
    }
}
