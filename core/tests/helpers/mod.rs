use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Runs git in `repo_path` and returns its standard output, whatever the exit status.
pub fn git_output(repo_path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    String::from_utf8(output.stdout).expect("git output is not UTF-8")
}

/// Runs git in `repo_path`, failing the test if the command fails.
pub fn git(repo_path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Helper to create an empty test repository whose unborn branch is `master`.
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init", "--quiet"]);
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/master"]);
    git(&repo_path, &["config", "user.name", "Test User"]);
    git(&repo_path, &["config", "user.email", "test@example.com"]);
    git(&repo_path, &["config", "commit.gpgsign", "false"]);

    (temp_dir, repo_path)
}

/// Helper to create a commit with fixed author and committer dates.
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str, epoch: i64) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    commit_at(repo_path, &["commit", "--quiet", "-m", message], epoch);
}

/// Runs a committing git command with both dates pinned to `epoch` at `+0200`.
pub fn commit_at(repo_path: &Path, args: &[&str], epoch: i64) {
    let date = format!("@{} +0200", epoch);
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
