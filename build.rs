// Build script embedding the binary's own commit and target for `--version`

use std::process::Command;

fn main() {
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string());

    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=BUILDSTAMP_GIT_HASH={git_hash}");
    println!("cargo:rustc-env=BUILDSTAMP_TARGET={target}");

    println!("cargo:rerun-if-changed=.git/HEAD");
}
