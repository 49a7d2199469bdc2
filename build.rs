use std::process::Command;

fn main() {
    println!(
        "cargo:rustc-env=GIT_SHA={}",
        metadata("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"])
    );
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        metadata("BUILD_DATE", "date", &["+%Y-%m-%d"])
    );
}

/// Build-metadata value for `--version` output: an env var set by CI wins,
/// otherwise ask the named command, otherwise "unknown".
fn metadata(var: &str, cmd: &str, args: &[&str]) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        Command::new(cmd)
            .args(args)
            .output()
            .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    })
}
