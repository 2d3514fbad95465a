//! End-to-end queries over a JSON program model.

use crate::helpers::program_fixtures::MAIN_GO;
use symsearch::ide::{AnalysisHost, RankOptions, RenderOptions, SearchOptions};
use symsearch::interchange::{InterchangeError, JsonFrontEnd, ProgramDocument, load_program};
use symsearch::project::{CollaboratorError, CommandLister, LoadOptions};

/// `net.Listen` declared in `net`, called once from `app/main.go`.
fn document(root: &str) -> String {
    format!(
        r#"{{
            "files": [
                {{ "path": "{root}/net/net.go" }},
                {{ "path": "{root}/app/main.go" }}
            ],
            "packages": [
                {{
                    "path": "net", "name": "net",
                    "scope": {{ "Listen": 0 }},
                    "defs": [{{ "symbol": 0, "file": 0, "offset": 80, "line": 6, "col": 5, "end_col": 11 }}]
                }},
                {{
                    "path": "app", "name": "main",
                    "scope": {{ "main": 1, "helper": 2 }},
                    "defs": [
                        {{ "symbol": 1, "file": 1, "offset": 33, "line": 4, "col": 5, "end_col": 9 }},
                        {{ "symbol": 2, "file": 1, "offset": 100, "line": 10, "col": 5, "end_col": 11 }}
                    ],
                    "uses": [{{ "symbol": 0, "file": 1, "offset": 56, "line": 5, "col": 14, "end_col": 20 }}]
                }}
            ],
            "symbols": [
                {{ "name": "Listen", "kind": "func", "package": 0, "type": 0 }},
                {{ "name": "main", "kind": "func", "package": 1, "type": 0 }},
                {{ "name": "helper", "kind": "func", "package": 1, "type": 0 }}
            ],
            "types": [{{ "kind": "signature" }}]
        }}"#
    )
}

#[test]
fn test_search_and_rank_from_json_model() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    std::fs::create_dir_all(dir.path().join("app")).unwrap();
    std::fs::write(dir.path().join("app/main.go"), MAIN_GO).unwrap();
    let model = dir.path().join("program.json");
    std::fs::write(&model, document(root)).unwrap();

    let host = AnalysisHost::load(
        &CommandLister::new("printf", ["%s\\n"]),
        &JsonFrontEnd::new(model),
        &["app".to_string()],
        LoadOptions::default(),
    )
    .unwrap();
    let analysis = host.analysis();

    let uses = analysis.search("net.Listen", SearchOptions::default()).unwrap();
    assert_eq!(uses.len(), 1);
    let line = analysis.render(&uses[0], &RenderOptions::plain()).unwrap();
    assert!(line.ends_with("/app/main.go:6:\tln, _ := net.Listen(\"tcp\", \":0\")\n"));

    let ranked: Vec<String> = analysis
        .rank(RankOptions::default())
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(ranked, vec!["\t0\tapp.helper"]);
}

#[test]
fn test_dangling_symbol_is_rejected() {
    let mut doc = ProgramDocument::from_json(&document("/src")).unwrap();
    doc.packages[0].scope.insert("Dial".to_string(), 9);

    let err = load_program(&doc).unwrap_err();
    assert!(matches!(err, InterchangeError::UnresolvedReference(_)));
}

#[test]
fn test_malformed_document_is_model_error() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("program.json");
    std::fs::write(&model, "{ not json").unwrap();

    let err = symsearch::project::FrontEnd::load(
        &JsonFrontEnd::new(model),
        &[],
        LoadOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CollaboratorError::Model(_)));
    assert!(err.to_string().starts_with("failed to load program model: JSON error"));
}
