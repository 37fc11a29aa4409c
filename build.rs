use std::env;
use std::process::Command;

fn main() {
    let mut version = env::var("CARGO_PKG_VERSION").unwrap_or_default();

    // Release builds get the short git hash appended; everything else is
    // marked as a dev build so bug reports are unambiguous.
    if env::var("PROFILE").as_deref() == Ok("release") {
        if let Ok(output) = Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
        {
            if output.status.success() {
                let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !hash.is_empty() {
                    version = format!("{} ({})", version, hash);
                }
            }
        }
    } else {
        version = format!("{} (dev)", version);
    }

    println!("cargo:rustc-env=GVM_BUILD_VERSION={}", version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.toml");
}
