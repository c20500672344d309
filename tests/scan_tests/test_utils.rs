//! Shared test utilities for scanner tests

use subtest_lint::scanner::{ScanResult, SubtestScanner};

/// Parse Go source code into a tree-sitter Tree
pub fn parse_go(source: &str) -> tree_sitter::Tree {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .unwrap();
    parser.parse(source, None).unwrap()
}

/// Scan Go source code and return results
pub fn scan_go(source: &str) -> ScanResult {
    let tree = parse_go(source);
    SubtestScanner::new().scan_tree(&tree, source.as_bytes(), "example_test.go")
}

/// The flagged names, in emission order
pub fn flagged_names(result: &ScanResult) -> Vec<&str> {
    result
        .diagnostics
        .iter()
        .map(|d| d.test_name.as_str())
        .collect()
}
