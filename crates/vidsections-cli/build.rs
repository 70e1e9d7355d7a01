use std::process::Command;

use chrono::Local;

fn main() {
    // Short commit hash for the --version string
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output();

    let git_hash = match output {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    };

    // Uncommitted changes to tracked files make the build "dirty";
    // untracked files don't count
    let dirty = Command::new("git")
        .args(["diff", "--quiet", "HEAD"])
        .status()
        .map(|s| !s.success())
        .unwrap_or(false);

    let build_hash = if dirty {
        // Stamp dirty builds with a timestamp so they're tellable apart
        let timestamp = Local::now().format("%Y%m%d-%H%M%S");
        format!("{git_hash}-dirty-{timestamp}")
    } else {
        git_hash
    };

    println!("cargo:rustc-env=BUILD_HASH={build_hash}");

    // The workspace .git lives two directories up from this crate
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
