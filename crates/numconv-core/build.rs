use std::env;
use std::process::Command;

fn main() {
    // Release builds outside a git checkout (container images) pass the SHA in.
    println!("cargo:rerun-if-env-changed=NUMCONV_GIT_SHA");
    let sha = env::var("NUMCONV_GIT_SHA")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(git_short_sha)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=NUMCONV_GIT_SHA={sha}");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
}

fn git_short_sha() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
