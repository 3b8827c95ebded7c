use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What went into and came out of one CLI run.
pub struct Payload {
    pub params: Value,
    pub result: Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            result: Value::Null,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_result(mut self, result: Value) -> Self {
        self.result = result;
        self
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.inputs.push(lossy(input.as_ref()));
        self
    }

    /// Record a file the run actually wrote. A failed run lists none.
    pub fn with_output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.outputs.push(lossy(output.as_ref()));
        self
    }
}

fn lossy(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

/// Write `<stem>.provenance.json` next to `artifact` with the git commit,
/// callsite, params, result, inputs and outputs. `artifact` names the intended
/// output; it need not exist.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let path = provenance_path(artifact.as_ref());
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating provenance dir {}", dir.display()))?;
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "tool_version": areafit::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "result": payload.result,
        "inputs": payload.inputs,
        "outputs": payload.outputs
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/parcels.geojson` -> `out/parcels.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    if artifact.file_name().is_none() {
        return artifact.join("artifact.provenance.json");
    }
    artifact.with_extension("provenance.json")
}

/// Commit of the running build: `GIT_COMMIT` at compile time, then at run time,
/// then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout).ok().map(|s| s.trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}
