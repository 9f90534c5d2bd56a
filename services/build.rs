use std::process::Command;

/// Embeds build date, commit and branch as `BUILD_*` env vars for `main.rs`.
fn main() {
    println!("cargo:rustc-env=BUILD_DATE={}", chrono::Utc::now().to_rfc3339());

    for (name, args) in [
        ("BUILD_COMMIT", ["rev-parse", "--short", "HEAD"]),
        ("BUILD_BRANCH", ["rev-parse", "--abbrev-ref", "HEAD"]),
    ] {
        let value = git_output(&args).unwrap_or_else(|| "unknown".to_owned());
        println!("cargo:rustc-env={name}={value}");
    }

    println!("cargo:rerun-if-changed=../.git/HEAD");
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}
