use std::process::Command;

/// Commit reported by `talk-admin version`.
///
/// Release pipelines build from tarballs without `.git`, so they pass
/// `TALK_ADMIN_COMMIT` explicitly. Local builds ask git for a short hash and
/// mark uncommitted changes with `-dirty`.
fn main() {
    println!("cargo::rerun-if-changed=../../.git/HEAD");
    println!("cargo::rerun-if-changed=../../.git/index");
    println!("cargo::rerun-if-env-changed=TALK_ADMIN_COMMIT");

    let commit = std::env::var("TALK_ADMIN_COMMIT")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo::rustc-env=TALK_ADMIN_COMMIT={}", commit);
}

fn git_short_hash() -> Option<String> {
    let hash = git(&["rev-parse", "--short=12", "HEAD"])?;
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|status| !status.is_empty());
    Some(if dirty { format!("{}-dirty", hash) } else { hash })
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
