use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Canned `terraform output -json` document with the three outputs the
/// instance commands need, in both the wrapped and the bare shape.
pub const OUTPUTS_JSON: &str = r#"{"instance_zone":{"sensitive":false,"type":"string","value":"us-central1-a"},"project_id":{"value":"proj1"},"instance_name":"vm1"}"#;

/// Write an executable stub that stands in for the `docker` binary. The body
/// runs under `sh` with the full compose argument list, so `$4` is the
/// service name and `$5` the first service argument.
pub fn fake_docker(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("docker");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write docker stub");

    let mut perms = fs::metadata(&path)
        .expect("failed to stat docker stub")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("failed to chmod docker stub");

    path
}
