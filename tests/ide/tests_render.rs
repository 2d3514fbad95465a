//! Rendering search results against real files.

use crate::helpers::program_fixtures::*;
use symsearch::ide::{AnalysisHost, RenderError, RenderOptions, SearchOptions};

fn write_sources(root: &std::path::Path) {
    std::fs::create_dir_all(root.join("app")).unwrap();
    std::fs::create_dir_all(root.join("p")).unwrap();
    std::fs::write(root.join("app/main.go"), MAIN_GO).unwrap();
    std::fs::write(root.join("p/p.go"), P_GO).unwrap();
}

#[test]
fn test_render_search_results() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let root = dir.path().to_str().unwrap();

    let fixture = net_fixture(root);
    let host = AnalysisHost::new(fixture.program, vec!["app".to_string()]);
    let analysis = host.analysis();
    let uses = analysis.search("net.Listen", SearchOptions::default()).unwrap();

    let rendered = analysis.render(&uses[0], &RenderOptions::plain()).unwrap();
    assert_eq!(
        rendered,
        format!("{root}/app/main.go:6:\tln, _ := net.Listen(\"tcp\", \":0\")\n")
    );
}

#[test]
fn test_render_relative_and_highlighted() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let root = dir.path().to_str().unwrap();

    let host = AnalysisHost::new(foo_bar_program(root), vec!["p".to_string()]);
    let analysis = host.analysis();
    let uses = analysis.search("p.Foo", SearchOptions::default()).unwrap();
    let options = RenderOptions {
        colors: true,
        cwd: Some(dir.path().to_path_buf()),
    };

    let lines: Vec<String> = uses
        .iter()
        .map(|occ| analysis.render(occ, &options).unwrap())
        .collect();
    assert_eq!(
        lines,
        vec![
            "./p/p.go:6:\t\x1b[1;31mFoo\x1b[0m()\n",
            "./p/p.go:7:\t\x1b[1;31mFoo\x1b[0m()\n",
        ]
    );
}

#[test]
fn test_render_errors_are_per_occurrence() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let root = dir.path().to_str().unwrap();

    // `main_test.go` was never written.
    let fixture = net_fixture(root);
    let front_end = symsearch::project::StaticFrontEnd::new(fixture.program);
    let options = symsearch::project::LoadOptions {
        include_tests: true,
        allow_errors: false,
    };
    let program =
        symsearch::project::FrontEnd::load(&front_end, &["app".to_string()], options).unwrap();
    let host = AnalysisHost::new(program, vec!["app".to_string()]);
    let analysis = host.analysis();
    let uses = analysis.search("net.Listen", SearchOptions::default()).unwrap();
    assert_eq!(uses.len(), 2);

    let results: Vec<_> = uses
        .iter()
        .map(|occ| analysis.render(occ, &RenderOptions::plain()))
        .collect();
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(RenderError::Io { line: 6, .. })));
}
