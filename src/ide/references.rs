//! Occurrence search: every place a resolved symbol is used or declared.

use std::cmp::Ordering;

use indexmap::IndexSet;
use rayon::prelude::*;

use crate::hir::{Occurrence, OccurrenceKind, Program, SymbolId};

/// Find every occurrence of `target` in `packages`.
///
/// Matching is by symbol identity, never by name. Packages that failed to
/// load are skipped silently, as are paths the program does not know. A
/// path listed twice is searched once. The result is in no particular
/// order; see [`sort_by_position`].
pub fn find_occurrences<S: AsRef<str> + Sync>(
    program: &Program,
    target: SymbolId,
    packages: &[S],
    kind: OccurrenceKind,
) -> Vec<Occurrence> {
    let paths: Vec<&str> = packages
        .iter()
        .map(AsRef::as_ref)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect();
    let per_package: Vec<Vec<Occurrence>> = paths
        .par_iter()
        .map(|&path| {
            let Some(package) = program.package_by_path(path) else {
                tracing::debug!("skipping unknown package '{}'", path);
                return Vec::new();
            };
            if package.has_errors() {
                tracing::debug!("skipping package '{}' with errors", path);
                return Vec::new();
            }
            package
                .occurrences(kind)
                .iter()
                .filter(|occ| occ.symbol == target)
                .copied()
                .collect()
        })
        .collect();

    per_package.into_iter().flatten().collect()
}

/// Sort occurrences by file path, then byte offset, then column.
pub fn sort_by_position(program: &Program, occurrences: &mut [Occurrence]) {
    occurrences.sort_by(|a, b| compare_positions(program, a, b));
}

fn compare_positions(program: &Program, a: &Occurrence, b: &Occurrence) -> Ordering {
    let files = program.files();
    let path_a = files.path(a.span.file).unwrap_or("");
    let path_b = files.path(b.span.file).unwrap_or("");
    path_a
        .cmp(path_b)
        .then_with(|| a.span.file.cmp(&b.span.file))
        .then_with(|| a.span.sort_key().cmp(&b.span.sort_key()))
}
