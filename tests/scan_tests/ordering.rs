//! Diagnostic ordering guarantees
//!
//! Diagnostics come out in document order of the call sites, with table
//! rows expanded in element order at their call site. Repeated scans of
//! the same source produce identical output.

use super::test_utils::{flagged_names, scan_go};

#[test]
fn test_document_order() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestA(t *testing.T) {
    t.Run("FirstBad", func(t *testing.T) {})
    t.Run("SecondBad", func(t *testing.T) {})
}
func TestB(t *testing.T) {
    t.Run("ThirdBad", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(
        flagged_names(&result),
        vec!["FirstBad", "SecondBad", "ThirdBad"]
    );
}

#[test]
fn test_table_rows_expand_at_call_site() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("EarlyBad", func(t *testing.T) {})
    tests := []struct{ name string }{
        {name: "RowOneBad"},
        {name: "RowTwoBad"},
    }
    for _, tt := range tests {
        t.Run(tt.name, func(t *testing.T) {})
    }
    t.Run("LateBad", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(
        flagged_names(&result),
        vec!["EarlyBad", "RowOneBad", "RowTwoBad", "LateBad"]
    );
}

#[test]
fn test_repeated_scans_are_identical() {
    let source = r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("BadName", func(t *testing.T) {})
    t.Run("AlsoBad", func(t *testing.T) {})
}
"#;
    let first = scan_go(source);
    let second = scan_go(source);
    assert_eq!(flagged_names(&first), flagged_names(&second));
    let first_pos: Vec<_> = first.diagnostics.iter().map(|d| (d.line, d.column)).collect();
    let second_pos: Vec<_> = second.diagnostics.iter().map(|d| (d.line, d.column)).collect();
    assert_eq!(first_pos, second_pos);
}
