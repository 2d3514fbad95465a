//! Usage ranking: how often each function or method is referenced.
//!
//! Functions that nothing calls sort first, which makes the output a
//! starting list for dead-code hunting.

use std::fmt;

use indexmap::IndexSet;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::interfaces::InterfaceIndex;
use crate::hir::{Package, Program, SymbolId};

/// Names the runtime calls without any textual reference.
const IMPLICITLY_CALLED: &[&str] = &["main", "init"];

/// One ranked function or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionCount {
    pub symbol: SymbolId,
    pub qualified_name: String,
    /// Number of use occurrences resolving to the symbol.
    pub count: usize,
}

/// The ranking output line: `\t{count}\t{qualified name}`.
impl fmt::Display for DefinitionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t{}\t{}", self.count, self.qualified_name)
    }
}

/// Rank every function/method declared in `packages` by use count.
///
/// Output is ascending by count, ties broken by qualified name, so two runs
/// over the same program always agree. With `exclude_interface_satisfiers`,
/// methods that could implement a non-empty interface are left out. A
/// package listed twice is counted once.
pub fn rank_usages<S: AsRef<str> + Sync>(
    program: &Program,
    packages: &[S],
    exclude_interface_satisfiers: bool,
) -> Vec<DefinitionCount> {
    let paths: IndexSet<&str> = packages.iter().map(AsRef::as_ref).collect();
    let loaded: Vec<&Package> = paths
        .iter()
        .filter_map(|path| program.package_by_path(path))
        .filter(|package| {
            if package.has_errors() {
                tracing::debug!("skipping package '{}' with errors", package.path);
            }
            !package.has_errors()
        })
        .collect();

    let mut candidates = collect_candidates(program, &loaded);
    if exclude_interface_satisfiers {
        let index = InterfaceIndex::build(program);
        let before = candidates.len();
        candidates.retain(|&symbol| !index.satisfies(program, symbol));
        tracing::debug!(
            "excluded {} interface-satisfying methods",
            before - candidates.len()
        );
    }

    let mut counts: FxHashMap<SymbolId, usize> =
        candidates.iter().map(|&symbol| (symbol, 0)).collect();

    let partials: Vec<FxHashMap<SymbolId, usize>> = loaded
        .par_iter()
        .map(|package| {
            let mut partial = FxHashMap::default();
            for occ in &package.uses {
                if counts.contains_key(&occ.symbol) {
                    *partial.entry(occ.symbol).or_insert(0) += 1;
                }
            }
            partial
        })
        .collect();
    for partial in partials {
        for (symbol, n) in partial {
            if let Some(count) = counts.get_mut(&symbol) {
                *count += n;
            }
        }
    }

    let mut ranked: Vec<DefinitionCount> = candidates
        .into_iter()
        .map(|symbol| DefinitionCount {
            symbol,
            qualified_name: program.qualified_name(symbol),
            count: counts.get(&symbol).copied().unwrap_or(0),
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.count
            .cmp(&b.count)
            .then_with(|| a.qualified_name.cmp(&b.qualified_name))
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    ranked
}

/// Function and method definitions in `packages`, minus `main`/`init`.
fn collect_candidates(program: &Program, packages: &[&Package]) -> IndexSet<SymbolId> {
    let per_package: Vec<Vec<SymbolId>> = packages
        .par_iter()
        .map(|package| {
            package
                .defs
                .iter()
                .map(|occ| occ.symbol)
                .filter(|&symbol| {
                    let sym = program.symbol(symbol);
                    sym.kind.is_func() && !IMPLICITLY_CALLED.contains(&sym.name.as_str())
                })
                .collect()
        })
        .collect();

    per_package.into_iter().flatten().collect()
}
