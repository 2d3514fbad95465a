//! Package listing through an external tool.
//!
//! Patterns such as `./...` or `net/http/...` are expanded by the build
//! tool (`go list` by default) into concrete package paths.

use std::io::ErrorKind;
use std::process::Command;

use indexmap::IndexSet;

use super::error::CollaboratorError;

/// Expands package patterns into a de-duplicated list of package paths.
pub trait PackageLister {
    fn list(&self, patterns: &[String]) -> Result<Vec<String>, CollaboratorError>;
}

/// Lists packages by running an external command with the patterns appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLister {
    program: String,
    args: Vec<String>,
}

impl CommandLister {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `go list <patterns>`.
    pub fn go() -> Self {
        Self::new("go", ["list"])
    }

    /// Parse a command line like `go list` into a lister.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace();
        let program = words.next()?;
        Some(Self::new(program, words))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandLister {
    fn default() -> Self {
        Self::go()
    }
}

impl PackageLister for CommandLister {
    fn list(&self, patterns: &[String]) -> Result<Vec<String>, CollaboratorError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .args(patterns)
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => CollaboratorError::ToolNotFound {
                    program: self.program.clone(),
                },
                _ => CollaboratorError::Io(err),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CollaboratorError::ListFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let packages: IndexSet<String> = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        tracing::info!(
            "{} listed {} packages for {} patterns",
            self.program,
            packages.len(),
            patterns.len()
        );
        Ok(packages.into_iter().collect())
    }
}
