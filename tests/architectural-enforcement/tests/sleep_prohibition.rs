//! Integration Test: Sleep Prohibition
//!
//! **Policy**: production code MUST NOT block a thread with
//! `std::thread::sleep`. Async sleeps are allowed only where time itself
//! is the feature:
//! - the pacing timer in the conductor (`conductor/core/src/conductor.rs`)
//! - the frame tick in the TUI event loop (`tui/src/app.rs`)

use std::path::Path;

use architectural_enforcement::production_lines;

const ASYNC_SLEEP_ALLOWED: &[&str] = &["conductor/core/src/conductor.rs", "tui/src/app.rs"];

fn sleep_lines() -> Vec<architectural_enforcement::SourceLine> {
    ["conductor/core/src", "tui/src"]
        .iter()
        .flat_map(|dir| production_lines(dir))
        .filter(|line| line.code.contains("::sleep(") || line.code.contains(".sleep("))
        .collect()
}

#[test]
fn test_no_thread_sleep_in_production_code() {
    let violations: Vec<String> = sleep_lines()
        .into_iter()
        .filter(|line| line.code.contains("thread::sleep"))
        .map(|line| format!("{}:{}: {}", line.path.display(), line.number, line.code.trim()))
        .collect();

    assert!(
        violations.is_empty(),
        "Blocking sleeps in production code:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_async_sleep_only_where_allowed() {
    let violations: Vec<String> = sleep_lines()
        .into_iter()
        .filter(|line| {
            !ASYNC_SLEEP_ALLOWED
                .iter()
                .any(|allowed| line.path == Path::new(allowed))
        })
        .map(|line| format!("{}:{}: {}", line.path.display(), line.number, line.code.trim()))
        .collect();

    assert!(
        violations.is_empty(),
        "Sleeps outside the pacing timer and frame tick:\n{}",
        violations.join("\n")
    );
}
