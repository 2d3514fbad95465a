//! Program loading.
//!
//! A [`FrontEnd`] turns a list of package paths into a resolved [`Program`].
//! Whatever the source of the model, [`finish_load`] applies the same load
//! policy afterwards so every front-end behaves alike.

use crate::hir::Program;

use super::error::CollaboratorError;

/// Load-time configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep occurrences located in test files.
    pub include_tests: bool,
    /// Accept packages that reported errors instead of failing the load.
    pub allow_errors: bool,
}

/// Produces a resolved program for a set of packages.
pub trait FrontEnd {
    fn load(&self, packages: &[String], options: LoadOptions) -> Result<Program, CollaboratorError>;
}

/// Apply the load policy to a freshly built program.
///
/// Every requested package must be present. Packages with errors fail the
/// load unless `allow_errors` is set; test-file occurrences are dropped
/// unless `include_tests` is set.
pub fn finish_load(
    program: Program,
    packages: &[String],
    options: LoadOptions,
) -> Result<Program, CollaboratorError> {
    for path in packages {
        let package = program
            .package_by_path(path)
            .ok_or_else(|| CollaboratorError::UnknownPackage(path.clone()))?;
        if package.has_errors() {
            if !options.allow_errors {
                return Err(CollaboratorError::PackageErrors {
                    package: path.clone(),
                    errors: package.errors.clone(),
                });
            }
            tracing::warn!(
                "package '{}' has {} errors; its results are skipped",
                path,
                package.errors.len()
            );
        }
    }

    let program = if options.include_tests {
        program
    } else {
        program.without_test_sources()
    };

    tracing::info!(
        "loaded {} packages ({} symbols, {} files)",
        program.packages().len(),
        program.symbols().len(),
        program.files().len()
    );
    Ok(program)
}

/// A front-end over a program that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticFrontEnd {
    program: Program,
}

impl StaticFrontEnd {
    pub fn new(program: Program) -> Self {
        Self { program }
    }
}

impl FrontEnd for StaticFrontEnd {
    fn load(&self, packages: &[String], options: LoadOptions) -> Result<Program, CollaboratorError> {
        finish_load(self.program.clone(), packages, options)
    }
}
