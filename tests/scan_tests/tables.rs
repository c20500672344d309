//! Table-driven `range` loops over collection literals

use super::test_utils::{flagged_names, scan_go};

#[test]
fn test_two_row_table_flags_first_row_only() {
    let source = r#"package main

import "testing"

func TestTable(t *testing.T) {
	tests := []struct {
		name string
	}{
		{name: "invalid snake case"},
		{name: "valid_snake_case"},
	}
	for _, tt := range tests {
		t.Run(tt.name, func(t *testing.T) {})
	}
}
"#;
    let result = scan_go(source);
    assert_eq!(flagged_names(&result), vec!["invalid snake case"]);
    // Anchored at the first row's field value, not the call.
    assert_eq!(result.diagnostics[0].line, 9);
    assert_eq!(result.diagnostics[0].column, 10);
}

#[test]
fn test_rows_reported_in_element_order() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestTable(t *testing.T) {
    tests := []struct {
        name string
    }{
        {name: "FirstBad"},
        {name: "fine_name"},
        {name: "SecondBad"},
    }
    for _, tt := range tests {
        t.Run(tt.name, func(t *testing.T) {})
    }
}
"#,
    );
    assert_eq!(flagged_names(&result), vec!["FirstBad", "SecondBad"]);
}

#[test]
fn test_inline_collection_literal() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestTable(t *testing.T) {
    for _, tt := range []struct{ name string }{
        {name: "InlineBad"},
    } {
        t.Run(tt.name, func(t *testing.T) {})
    }
}
"#,
    );
    assert_eq!(flagged_names(&result), vec!["InlineBad"]);
}

#[test]
fn test_row_without_matching_field_skipped() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestTable(t *testing.T) {
    tests := []struct {
        name string
        want string
    }{
        {want: "only_want"},
        {name: "BadRow", want: "x"},
    }
    for _, tt := range tests {
        t.Run(tt.name, func(t *testing.T) {})
    }
}
"#,
    );
    assert_eq!(flagged_names(&result), vec!["BadRow"]);
}

#[test]
fn test_non_literal_collection_skipped() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestTable(t *testing.T, tests []struct{ name string }) {
    for _, tt := range tests {
        t.Run(tt.name, func(t *testing.T) {})
    }
}
"#,
    );
    assert_eq!(result.diagnostic_count(), 0);
}

#[test]
fn test_selector_outside_range_skipped() {
    // A bare selector is never treated as a direct value.
    let result = scan_go(
        r#"
package main
import "testing"
type row struct{ name string }
func TestX(t *testing.T) {
    tt := row{name: "BadName"}
    t.Run(tt.name, func(t *testing.T) {})
}
"#,
    );
    assert_eq!(result.diagnostic_count(), 0);
}

#[test]
fn test_nested_loops_bind_innermost() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestTable(t *testing.T) {
    outer := []struct{ name string }{
        {name: "OuterBad"},
    }
    inner := []struct{ name string }{
        {name: "InnerBad"},
    }
    for _, tt := range outer {
        _ = tt
        for _, tt := range inner {
            t.Run(tt.name, func(t *testing.T) {})
        }
    }
}
"#,
    );
    assert_eq!(flagged_names(&result), vec!["InnerBad"]);
}

#[test]
fn test_unrelated_loop_variable_skipped() {
    let result = scan_go(
        r#"
package main
import "testing"
type row struct{ name string }
func TestX(t *testing.T) {
    tt := row{name: "BadName"}
    for _, other := range []int{1, 2} {
        _ = other
        t.Run(tt.name, func(t *testing.T) {})
    }
}
"#,
    );
    assert_eq!(result.diagnostic_count(), 0);
}
