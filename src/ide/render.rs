//! Source line rendering for search results.
//!
//! Each occurrence is printed as `path:line:text`, the text being the whole
//! source line re-read from disk, optionally with the matched identifier
//! highlighted. Failures are per occurrence; callers keep going.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::base::{LineIndex, SourceSpan};
use crate::hir::{Occurrence, Program};

const HIGHLIGHT_START: &str = "\x1b[1;31m";
const HIGHLIGHT_END: &str = "\x1b[0m";

/// Output formatting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap the matched identifier in ANSI color codes.
    pub colors: bool,
    /// Paths under this directory are shown relative to it as `./...`.
    pub cwd: Option<PathBuf>,
}

impl RenderOptions {
    /// No colors, absolute paths.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Colors when stdout is a terminal, paths relative to the working directory.
    pub fn detect() -> Self {
        Self {
            colors: std::io::stdout().is_terminal(),
            cwd: std::env::current_dir().ok(),
        }
    }
}

/// A source line that could not be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{file}: file is not part of the program")]
    UnknownFile { file: String },

    #[error("{path}:{line}: {source}")]
    Io {
        path: String,
        line: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: line is past the end of the file")]
    LineOutOfRange { path: String, line: u32 },

    #[error("{path}:{line}: identifier extends past end of line")]
    IdentifierPastEndOfLine { path: String, line: u32 },
}

/// Render the source line of an occurrence.
pub fn render_occurrence(
    program: &Program,
    occurrence: &Occurrence,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let span = &occurrence.span;
    let path = program
        .files()
        .path(span.file)
        .ok_or_else(|| RenderError::UnknownFile {
            file: span.file.to_string(),
        })?;
    render_line(path, span, options)
}

/// Render the line of `path` containing `span`, newline-terminated.
pub fn render_line(path: &str, span: &SourceSpan, options: &RenderOptions) -> Result<String, RenderError> {
    let line_no = span.start.line_one_indexed();
    let text = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
        path: path.to_string(),
        line: line_no,
        source,
    })?;

    let index = LineIndex::new(&text);
    let (start, end) = index
        .line_range(span.start.line)
        .ok_or_else(|| RenderError::LineOutOfRange {
            path: path.to_string(),
            line: line_no,
        })?;
    let mut line = text[usize::from(start)..usize::from(end)].to_string();
    if !line.ends_with('\n') {
        line.push('\n');
    }

    let ident_start = span.start.col as usize;
    let ident_end = if span.end.line == span.start.line {
        span.end.col as usize
    } else {
        usize::MAX
    };
    if line.len() < ident_end
        || ident_start > ident_end
        || !line.is_char_boundary(ident_start)
        || !line.is_char_boundary(ident_end)
    {
        return Err(RenderError::IdentifierPastEndOfLine {
            path: path.to_string(),
            line: line_no,
        });
    }

    if options.colors {
        line = format!(
            "{}{}{}{}{}",
            &line[..ident_start],
            HIGHLIGHT_START,
            &line[ident_start..ident_end],
            HIGHLIGHT_END,
            &line[ident_end..]
        );
    }

    Ok(format!("{}:{}:{}", display_path(path, options), line_no, line))
}

fn display_path(path: &str, options: &RenderOptions) -> String {
    if let Some(cwd) = &options.cwd {
        if let Ok(relative) = Path::new(path).strip_prefix(cwd) {
            return format!("./{}", relative.display());
        }
    }
    path.to_string()
}
