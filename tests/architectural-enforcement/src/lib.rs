//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The conductor core stays free of terminal UI crates
//! - No blocking sleeps; async timers only where the design needs them
//! - No panicking shortcuts in production code
//!
//! The helpers here walk the workspace sources; the checks live in `tests/`.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (two levels above this package)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// A line of production source code
#[derive(Debug)]
pub struct SourceLine {
    /// File path relative to the workspace root
    pub path: PathBuf,
    /// 1-based line number
    pub number: usize,
    /// Code with any trailing `//` comment removed
    pub code: String,
}

/// Production lines of every `.rs` file under `dir` (relative to the root)
///
/// A file's `#[cfg(test)]` module is assumed to be its tail and is skipped,
/// as are doc and line comments.
pub fn production_lines(dir: &str) -> Vec<SourceLine> {
    let root = workspace_root();
    let mut lines = Vec::new();

    for entry in walkdir::WalkDir::new(root.join(dir))
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };
        let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();

        for (idx, line) in content.lines().enumerate() {
            if line.trim_start().starts_with("#[cfg(test)]") {
                break;
            }
            let code = line.split("//").next().unwrap_or(line);
            if code.trim().is_empty() {
                continue;
            }
            lines.push(SourceLine {
                path: relative.clone(),
                number: idx + 1,
                code: code.to_string(),
            });
        }
    }

    lines
}
