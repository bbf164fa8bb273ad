//! Provenance sidecars for JSON summaries.
//!
//! Every `--out` summary gets a `<stem>.provenance.json` next to it that
//! records which build checked which input under which check settings:
//! - `code_rev`, `foldcheck_version`: see [`header`].
//! - `command`, `input`: the subcommand and the puzzle file it read.
//! - `params`: `crossing_rule` and `close_facets` for solution checks.
//! - `callsite`, `outputs`: where the sidecar was requested and the summary path.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use foldcheck::validate::CheckCfg;

use crate::summary::rule_name;

/// What was checked, and how.
pub struct Payload {
    pub command: &'static str,
    pub input: PathBuf,
    pub params: Value,
}

impl Payload {
    pub fn problem(input: &Path) -> Self {
        Self {
            command: "problem",
            input: input.to_path_buf(),
            params: json!({}),
        }
    }

    pub fn solution(input: &Path, cfg: CheckCfg) -> Self {
        Self {
            command: "solution",
            input: input.to_path_buf(),
            params: json!({
                "crossing_rule": rule_name(cfg.crossing),
                "close_facets": cfg.close_facets,
            }),
        }
    }
}

/// Build identity shared by sidecars and `foldcheck report`.
pub fn header() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "foldcheck_version": foldcheck::VERSION,
    })
}

/// Write the sidecar for `summary` and return its path.
#[track_caller]
pub fn write_sidecar(summary: &Path, payload: Payload) -> Result<PathBuf> {
    let callsite = Location::caller();
    let path = sidecar_path(summary);
    let mut doc = header();
    doc["command"] = json!(payload.command);
    doc["input"] = json!(payload.input.to_string_lossy());
    doc["params"] = payload.params;
    doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });
    doc["outputs"] = json!([summary.to_string_lossy()]);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing provenance {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(summary: &Path) -> PathBuf {
    summary.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time) or `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldcheck::validate::CrossingRule;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_summary() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/reports/square.json")),
            Path::new("/tmp/reports/square.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("checks/square")),
            Path::new("checks/square.provenance.json")
        );
    }

    #[test]
    fn solution_sidecar_records_check_settings() {
        let dir = tempdir().unwrap();
        let summary = dir.path().join("check.json");
        fs::write(&summary, "{}").unwrap();
        let cfg = CheckCfg {
            crossing: CrossingRule::Exact,
            close_facets: true,
        };
        let path = write_sidecar(&summary, Payload::solution(Path::new("x.txt"), cfg)).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["command"], "solution");
        assert_eq!(doc["input"], "x.txt");
        assert_eq!(doc["params"]["crossing_rule"], "exact");
        assert_eq!(doc["params"]["close_facets"], true);
        assert_eq!(doc["outputs"][0], summary.to_string_lossy().as_ref());
        assert_eq!(doc["foldcheck_version"], foldcheck::VERSION);
        assert!(doc["callsite"]["line"].as_u64().unwrap() > 0);
    }

    #[test]
    fn problem_sidecar_has_no_check_settings() {
        let dir = tempdir().unwrap();
        let summary = dir.path().join("area.json");
        let path = write_sidecar(&summary, Payload::problem(Path::new("p.txt"))).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["command"], "problem");
        assert_eq!(doc["params"], json!({}));
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }
}
