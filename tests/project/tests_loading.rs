//! Listing packages and loading them through a front-end.

use crate::helpers::program_fixtures::*;
use rstest::rstest;
use symsearch::QueryError;
use symsearch::ide::{AnalysisHost, RankOptions, SearchOptions};
use symsearch::project::{CollaboratorError, CommandLister, LoadOptions, PackageLister, StaticFrontEnd};

/// Echoes each pattern back as a package path.
fn echo_lister() -> CommandLister {
    CommandLister::new("printf", ["%s\\n"])
}

#[test]
fn test_load_lists_then_loads() {
    let front_end = StaticFrontEnd::new(foo_bar_program("/src"));
    let host = AnalysisHost::load(
        &echo_lister(),
        &front_end,
        &["p".to_string(), "p".to_string()],
        LoadOptions::default(),
    )
    .unwrap();

    assert_eq!(host.packages(), ["p".to_string()]);
    assert_eq!(host.analysis().rank(RankOptions::default()).len(), 2);
}

#[rstest]
#[case(false, true)]
#[case(true, false)]
fn test_allow_errors_controls_load(#[case] allow_errors: bool, #[case] fails: bool) {
    let fixture = net_fixture("/src");
    let front_end = StaticFrontEnd::new(fixture.program);
    let options = LoadOptions {
        include_tests: false,
        allow_errors,
    };

    let result = AnalysisHost::load(
        &echo_lister(),
        &front_end,
        &["app".to_string(), "broken".to_string()],
        options,
    );
    assert_eq!(result.is_err(), fails);
    if let Err(err) = result {
        assert!(matches!(err, CollaboratorError::PackageErrors { ref package, .. } if package == "broken"));
    }
}

#[test]
fn test_allowed_error_package_is_skipped_by_search() {
    let fixture = net_fixture("/src");
    let front_end = StaticFrontEnd::new(fixture.program);
    let options = LoadOptions {
        include_tests: false,
        allow_errors: true,
    };
    let host = AnalysisHost::load(
        &echo_lister(),
        &front_end,
        &["app".to_string(), "broken".to_string()],
        options,
    )
    .unwrap();

    let uses = host
        .analysis()
        .search("net.Listen", SearchOptions::default())
        .unwrap();
    assert_eq!(uses.len(), 1);
}

#[test]
fn test_lister_failure_is_fatal() {
    let lister = CommandLister::new("sh", ["-c", "echo 'malformed import path' >&2; exit 1"]);
    let err = lister.list(&["./...".to_string()]).unwrap_err();

    let err: QueryError = err.into();
    assert_eq!(err.to_string(), "malformed import path");
}
