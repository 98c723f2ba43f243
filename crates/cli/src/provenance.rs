use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a command ran with, recorded next to its outputs.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value, tag: Option<String>) -> Self {
        Self {
            command,
            params,
            tag,
        }
    }
}

/// Provenance document shared by sidecars and `cli report`.
pub fn document(payload: &Payload, outputs: &[String], callsite: &Location<'_>) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "kshull": kshull::VERSION,
        "command": payload.command,
        "tag": payload.tag,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "outputs": outputs
    })
}

/// Write `<artifact>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = provenance_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let doc = document(
        payload,
        &[artifact.to_string_lossy().into_owned()],
        Location::caller(),
    );
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("hull"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time) or `git`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/runs/square.json"));
        assert_eq!(derived, Path::new("/tmp/runs/square.provenance.json"));
    }

    #[test]
    fn sidecar_records_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("hull", json!({"algo": "ks"}), Some("smoke".into()));
        let path = write_sidecar(&artifact, &payload).unwrap();
        assert_eq!(path, dir.path().join("hull.provenance.json"));

        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["algo"], "ks");
        assert_eq!(parsed["tag"], "smoke");
        assert_eq!(parsed["kshull"], kshull::VERSION);
        assert!(parsed["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
    }
}
