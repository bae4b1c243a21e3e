use std::process::Command;

/// Run a command and return its trimmed stdout, if it succeeded.
fn output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
}

fn main() {
    let sha = output("git", &["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());

    let dirty = Command::new("git")
        .args(["diff", "--quiet"])
        .status()
        .map(|s| if s.success() { "" } else { "-dirty" })
        .unwrap_or("");

    // UTC date only
    let date = output("date", &["-u", "+%Y-%m-%d"]).unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=ASANA_BUILD_INFO={sha}{dirty} {date}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
}
