//! Symbol resolution: turning a dotted target into one canonical symbol.
//!
//! The resolver starts at a package-level declaration and then narrows
//! through a chain of field/method lookups on each intermediate symbol's
//! type. It never guesses: every step either yields exactly one symbol or
//! fails with an error naming the segment that broke.

use thiserror::Error;

use super::ids::SymbolId;
use super::lookup::LookupResult;
use super::program::Program;

/// Reasons a target cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The target package is not part of the loaded program.
    #[error("package '{package}' was not loaded")]
    UnknownPackage { package: String },

    /// The target package was loaded with errors; its scope is unreliable.
    #[error("package '{package}' had compilation errors")]
    PackageLoadError { package: String },

    /// No top-level declaration with that name.
    #[error("failed to find '{name}' in package '{package}'")]
    UnknownDeclaration { package: String, name: String },

    /// A member lookup failed. `owner_path` is the path resolved so far.
    #[error("failed to lookup field or method '{field}' on '{owner_path}'")]
    UnknownMember { owner_path: String, field: String },
}

/// Resolver for dotted targets against a loaded program.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    program: &'a Program,
}

impl<'a> Resolver<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self { program }
    }

    /// Resolve `package.name.member1.member2...` to a single symbol.
    pub fn resolve<S: AsRef<str>>(
        &self,
        package: &str,
        name: &str,
        members: &[S],
    ) -> Result<SymbolId, ResolveError> {
        let pkg = self
            .program
            .package_by_path(package)
            .ok_or_else(|| ResolveError::UnknownPackage {
                package: package.to_string(),
            })?;

        if pkg.has_errors() {
            return Err(ResolveError::PackageLoadError {
                package: package.to_string(),
            });
        }

        let mut symbol = pkg
            .lookup(name)
            .ok_or_else(|| ResolveError::UnknownDeclaration {
                package: package.to_string(),
                name: name.to_string(),
            })?;
        tracing::trace!("[RESOLVE] '{}.{}' -> {:?}", package, name, symbol);

        let mut owner_path = format!("{}.{}", package, name);
        for member in members {
            let member = member.as_ref();
            let ty = self.program.symbol(symbol).ty;
            symbol = match self.program.lookup_field_or_method(ty, member) {
                LookupResult::Found(found) => found,
                outcome => {
                    tracing::debug!(
                        "[RESOLVE] member '{}' on '{}' not resolved: {:?}",
                        member,
                        owner_path,
                        outcome
                    );
                    return Err(ResolveError::UnknownMember {
                        owner_path,
                        field: member.to_string(),
                    });
                }
            };
            tracing::trace!("[RESOLVE] '{}.{}' -> {:?}", owner_path, member, symbol);
            owner_path.push('.');
            owner_path.push_str(member);
        }

        Ok(symbol)
    }
}
