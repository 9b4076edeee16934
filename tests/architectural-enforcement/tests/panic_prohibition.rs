//! Integration Test: Panic Prohibition
//!
//! **Policy**: production code propagates errors. `.unwrap()` and
//! `.expect(..)` are for tests only.

use architectural_enforcement::production_lines;

#[test]
fn test_no_unwrap_or_expect_in_production_code() {
    let violations: Vec<String> = ["conductor/core/src", "tui/src"]
        .iter()
        .flat_map(|dir| production_lines(dir))
        .filter(|line| line.code.contains(".unwrap()") || line.code.contains(".expect("))
        .map(|line| format!("{}:{}: {}", line.path.display(), line.number, line.code.trim()))
        .collect();

    assert!(
        violations.is_empty(),
        "Panicking shortcuts in production code:\n{}",
        violations.join("\n")
    );
}
