use std::process::Command;

/// Embed `git describe` output so `studbud --version` names the exact build.
fn git_describe(dir: &str) -> Option<String> {
    let out = Command::new("git")
        .args(["-C", dir, "describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!s.is_empty()).then_some(s)
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let build = git_describe(&format!("{manifest_dir}/..")).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=STUDBUD_BUILD_SHA={build}");
}
