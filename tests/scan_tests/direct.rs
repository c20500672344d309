//! Literal and concatenation name arguments

use super::test_utils::{flagged_names, scan_go};

#[test]
fn test_interpreted_literal_invalid() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("BadName", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(flagged_names(&result), vec!["BadName"]);
}

#[test]
fn test_interpreted_literal_valid() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("good_name", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(result.diagnostic_count(), 0);
}

#[test]
fn test_raw_literal_invalid() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run(`RawBadName`, func(t *testing.T) {})
}
"#,
    );
    assert_eq!(flagged_names(&result), vec!["RawBadName"]);
}

#[test]
fn test_empty_literal_is_flagged() {
    // An empty literal resolves (it is a real value) and fails the
    // grammar, unlike an unresolvable expression which is skipped.
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(flagged_names(&result), vec![""]);
}

#[test]
fn test_escape_sequences_are_decoded() {
    // The reported value is the string's value, not its source
    // spelling: `\t` arrives as a real tab character.
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("bad\tname", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(flagged_names(&result), vec!["bad\tname"]);
}

#[test]
fn test_diagnostic_anchored_at_literal() {
    let source = "package main\n\nimport \"testing\"\n\nfunc TestX(t *testing.T) {\n\tt.Run(\"BadName\", func(t *testing.T) {})\n}\n";
    let result = scan_go(source);
    assert_eq!(result.diagnostic_count(), 1);
    assert_eq!(result.diagnostics[0].line, 6);
    assert_eq!(result.diagnostics[0].column, 8);
}

#[test]
fn test_literal_concatenation_invalid() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("invalid" + "Snake", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(flagged_names(&result), vec!["invalidSnake"]);
}

#[test]
fn test_literal_concatenation_valid() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("valid" + "_snake", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(result.diagnostic_count(), 0);
}

#[test]
fn test_concatenation_with_non_constant_skipped() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T, suffix string) {
    t.Run("Bad" + suffix, func(t *testing.T) {})
}
"#,
    );
    assert_eq!(result.diagnostic_count(), 0);
}

#[test]
fn test_function_call_argument_skipped() {
    let result = scan_go(
        r#"
package main
import (
    "fmt"
    "testing"
)
func TestX(t *testing.T) {
    t.Run(fmt.Sprintf("Case%d", 1), func(t *testing.T) {})
}
"#,
    );
    assert_eq!(result.diagnostic_count(), 0);
}

#[test]
fn test_message_template() {
    let result = scan_go(
        r#"
package main
import "testing"
func TestX(t *testing.T) {
    t.Run("BadName", func(t *testing.T) {})
}
"#,
    );
    assert_eq!(
        result.diagnostics[0].message,
        "test name \"BadName\" should use snake_case (e.g., \"my_test_case\")"
    );
}
