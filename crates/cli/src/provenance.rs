use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand and its parameters.
pub struct Sidecar {
    pub command: &'static str,
    pub params: Value,
}

impl Sidecar {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }

    fn to_json(&self, outputs: &[String], callsite: &Location<'_>) -> Value {
        json!({
            "tool": "polygons",
            "version": polygons::VERSION,
            "code_rev": code_rev(),
            "command": self.command,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "params": self.params,
            "outputs": outputs
        })
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, sidecar: &Sidecar) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = sidecar.to_json(
        &[artifact.to_string_lossy().into_owned()],
        Location::caller(),
    );
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Provenance block for commands that produce no file.
#[track_caller]
pub fn inline_block(sidecar: &Sidecar) -> Value {
    sidecar.to_json(&[], Location::caller())
}

/// `polygons.csv` → `polygons.provenance.json`, next to the artifact.
fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit baked in at build time via `GIT_COMMIT`, else the checkout's `HEAD`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_owned)
        .or_else(head_commit)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|rev| !rev.is_empty())
}
