//! Integration Test: Layering
//!
//! **Policy**: the conductor core is headless. It must not depend on, or
//! import, any terminal UI crate. The TUI talks to it only through the
//! public API.

use std::fs;

use architectural_enforcement::{production_lines, workspace_root};

const UI_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("conductor/core/Cargo.toml"))
        .expect("core manifest readable");

    for krate in UI_CRATES {
        assert!(
            !manifest.contains(krate),
            "conductor/core/Cargo.toml must not depend on {krate}"
        );
    }
}

#[test]
fn test_core_sources_do_not_import_ui_crates() {
    let violations: Vec<String> = production_lines("conductor/core/src")
        .into_iter()
        .filter(|line| {
            UI_CRATES
                .iter()
                .any(|krate| line.code.contains(&format!("{krate}::")))
        })
        .map(|line| format!("{}:{}: {}", line.path.display(), line.number, line.code.trim()))
        .collect();

    assert!(
        violations.is_empty(),
        "UI crates used in the core:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tui_uses_the_core_through_its_crate_name() {
    let lines = production_lines("tui/src");
    assert!(
        lines.iter().any(|line| line.code.contains("wizai_conductor::")),
        "the TUI should drive the quiz through wizai_conductor"
    );
}
