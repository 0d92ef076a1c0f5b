//! Integration test: Go fixtures through the tree-sitter parser and every
//! check.

use go_structural_core::{run, Analyzer, Report, Severity, SourceParser, Violation};
use go_structural_ts::GoParser;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn check_fixture(name: &str) -> Vec<Violation> {
    let path = fixture(name);
    let source = std::fs::read_to_string(&path).expect("fixture should exist");
    let file = GoParser::new()
        .parse(&path, &source)
        .expect("fixture should parse");
    run(&file, &path.display().to_string())
}

fn by_rule<'a>(violations: &'a [Violation], rule: &str) -> Vec<&'a Violation> {
    violations.iter().filter(|v| v.rule == rule).collect()
}

// ── no-get-prefix ──

#[test]
fn getters_bad_flags_every_get_prefixed_name() {
    let violations = check_fixture("getters_bad.go");
    let getters = by_rule(&violations, "no-get-prefix");

    let expected = [
        ("GetName() should be Name()", "Rename to Name()", 10),
        ("GetEmail() should be Email()", "Rename to Email()", 15),
        ("GetAge() should be Age()", "Rename to Age()", 20),
        (
            "GetFreeFunction() should be FreeFunction()",
            "Rename to FreeFunction()",
            25,
        ),
    ];

    assert_eq!(getters.len(), expected.len(), "{getters:#?}");
    for (v, (message, suggestion, line)) in getters.iter().zip(expected) {
        assert_eq!(v.message, message);
        assert_eq!(v.suggestion.as_deref(), Some(suggestion));
        assert_eq!(v.severity, Severity::Error);
        assert_eq!(v.line, line);
    }
}

#[test]
fn getters_good_is_clean() {
    let violations = check_fixture("getters_good.go");
    assert!(by_rule(&violations, "no-get-prefix").is_empty());
}

// ── param-count ──

#[test]
fn params_bad_flags_in_declaration_order() {
    let violations = check_fixture("params_bad.go");
    let params = by_rule(&violations, "param-count");

    let messages: Vec<&str> = params.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "TooManyParams() has 5 parameters (max 4)",
            "WayTooMany() has 7 parameters (max 4)",
        ]
    );
    assert!(params
        .iter()
        .all(|v| v.suggestion.as_deref() == Some("Use options pattern or config struct")));
}

#[test]
fn params_good_is_clean() {
    let violations = check_fixture("params_good.go");
    assert!(by_rule(&violations, "param-count").is_empty());
}

// ── file-ordering ──

#[test]
fn ordering_bad_flags_type_after_func() {
    let violations = check_fixture("ordering_bad.go");
    let ordering = by_rule(&violations, "file-ordering");

    assert_eq!(ordering.len(), 1);
    assert_eq!(
        ordering[0].message,
        "types section appears after functions section"
    );
    assert_eq!(ordering[0].line, 9);
}

#[test]
fn ordering_good_is_clean() {
    let violations = check_fixture("ordering_good.go");
    assert!(by_rule(&violations, "file-ordering").is_empty());
}

#[test]
fn init_is_allowed_after_imports() {
    let violations = check_fixture("ordering_init.go");
    assert!(by_rule(&violations, "file-ordering").is_empty());
}

#[test]
fn every_regression_is_reported() {
    let violations = check_fixture("ordering_regressions.go");
    let ordering: Vec<(usize, &str)> = by_rule(&violations, "file-ordering")
        .into_iter()
        .map(|v| (v.line, v.message.as_str()))
        .collect();

    assert_eq!(
        ordering,
        vec![
            (9, "constants section appears after functions section"),
            (11, "variables section appears after functions section"),
            (13, "types section appears after functions section"),
        ]
    );
}

// ── whole run ──

#[test]
fn clean_file_has_no_violations_from_any_check() {
    assert!(check_fixture("ordering_good.go").is_empty());
}

#[test]
fn violations_carry_the_given_filename() {
    let violations = check_fixture("ordering_bad.go");
    let expected = fixture("ordering_bad.go").display().to_string();
    assert!(violations.iter().all(|v| v.file == expected));
}

#[test]
fn run_is_deterministic() {
    assert_eq!(
        check_fixture("getters_bad.go"),
        check_fixture("getters_bad.go")
    );
}

#[test]
fn analyzer_passes_a_clean_file() {
    let result = Analyzer::builder(GoParser::new())
        .path(fixture("ordering_good.go"))
        .build()
        .analyze()
        .expect("analysis should succeed");

    let report = Report::from(&result);
    assert!(report.pass);
    assert!(report.violations.is_empty());
    assert_eq!(report.summary.files_checked, 1);
}

#[test]
fn analyzer_aggregates_across_files_in_path_order() {
    let result = Analyzer::builder(GoParser::new())
        .paths([fixture("params_bad.go"), fixture("getters_bad.go")])
        .build()
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(result.files_checked, 2);
    // getters_bad.go sorts before params_bad.go.
    assert_eq!(result.violations[0].rule, "no-get-prefix");
    assert_eq!(
        result.violations.last().map(|v| v.rule.as_str()),
        Some("param-count")
    );

    let report = Report::from(&result);
    assert!(!report.pass);
    assert_eq!(report.summary.errors, 6);
    assert_eq!(report.summary.warnings, 0);
}

#[test]
fn analyzer_aborts_on_parse_failure() {
    let err = Analyzer::builder(GoParser::new())
        .paths([fixture("ordering_good.go"), fixture("broken.go")])
        .build()
        .analyze()
        .expect_err("broken fixture should fail");

    let parse = err.as_parse_error().expect("parse error");
    assert_eq!(parse.path, fixture("broken.go"));
}
