//! Target path parsing.
//!
//! A target names a package-level declaration and an optional member chain:
//!
//! ```text
//! net.Listen
//! bytes.Buffer.String
//! "golang.org/x/tools/go/loader".Config.Import
//! ```
//!
//! Splitting is quote-aware: a `.` inside double quotes is literal and the
//! quotes themselves are dropped. A package path containing `.` has to be
//! quoted; there is no heuristic telling path dots from member dots.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Malformed target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetParseError {
    #[error("no target provided")]
    MissingPackage,

    #[error("no package field provided")]
    MissingDeclarationName,

    #[error("unmatched '\"'")]
    UnterminatedQuote,
}

/// A parsed target: `[package, name, member...]`, always at least two segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath {
    segments: Vec<String>,
}

impl TargetPath {
    /// Parse a quote-aware dotted target.
    pub fn parse(raw: &str) -> Result<Self, TargetParseError> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut in_quote = false;

        for c in raw.chars() {
            match c {
                '"' => in_quote = !in_quote,
                '.' if !in_quote => segments.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        if in_quote {
            return Err(TargetParseError::UnterminatedQuote);
        }
        segments.push(current);

        // An empty segment ends the path; nothing after it is kept.
        if let Some(end) = segments.iter().position(String::is_empty) {
            segments.truncate(end);
        }

        match segments.len() {
            0 => Err(TargetParseError::MissingPackage),
            1 => Err(TargetParseError::MissingDeclarationName),
            _ => Ok(Self { segments }),
        }
    }

    /// The package import path.
    pub fn package(&self) -> &str {
        &self.segments[0]
    }

    /// The top-level declaration name.
    pub fn name(&self) -> &str {
        &self.segments[1]
    }

    /// Field/method segments after the declaration name.
    pub fn members(&self) -> &[String] {
        &self.segments[2..]
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for TargetPath {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            if segment.contains('.') {
                write!(f, "\"{}\"", segment)?;
            } else {
                f.write_str(segment)?;
            }
        }
        Ok(())
    }
}
