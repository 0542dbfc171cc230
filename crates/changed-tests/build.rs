use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");

    // Builds outside a checkout (e.g. from a published tarball) report the bare version.
    let version_string = match head_short_hash() {
        Some(hash) => {
            let build_date = Utc::now().format("%Y-%m-%d");
            format!("{version} ({hash} {build_date})")
        }
        None => version.to_owned(),
    };

    println!("cargo:rustc-env=CHANGED_TESTS_VERSION={version_string}");
}

fn head_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_owned())
}
