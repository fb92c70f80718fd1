/// Commits written by the real `git` binary are read from the loose store.
/// Skipped when `git` is not installed.
use crate::common::command::{bitgraph_graph, run_git_command};
use assert_fs::TempDir;
use bitgraph::artifacts::log::cutoff::Cutoff;
use bitgraph::artifacts::log::walk;
use pretty_assertions::assert_eq;
use std::path::Path;

fn git_commit(dir: &Path, message: &str, date: &str) -> Result<(), Box<dyn std::error::Error>> {
    let status = run_git_command(dir, &["commit", "-q", "--allow-empty", "-m", message])
        .envs(vec![
            ("GIT_AUTHOR_NAME", "fake_user"),
            ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
            ("GIT_AUTHOR_DATE", date),
            ("GIT_COMMITTER_NAME", "fake_user"),
            ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
            ("GIT_COMMITTER_DATE", date),
        ])
        .status()?;
    assert!(status.success(), "git commit failed for {message}");
    Ok(())
}

#[test]
fn real_git_repository_matches_git_log() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    if run_git_command(dir.path(), &["--version"]).output().is_err() {
        return Ok(());
    }

    assert!(run_git_command(dir.path(), &["init", "-q"]).status()?.success());
    assert!(
        run_git_command(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/master"])
            .status()?
            .success()
    );
    git_commit(dir.path(), "Old one", "2023-12-30T10:00:00+00:00")?;
    git_commit(dir.path(), "Old two", "2023-12-31T23:00:00-05:00")?;
    git_commit(dir.path(), "New year", "2024-01-02T09:00:00+00:00")?;

    // 23:00 at -05:00 is already 2024-01-01 in UTC, so only one commit passes
    let graph = walk(
        dir.path(),
        "refs/heads/master",
        Cutoff::parse_date("2024-01-01")?,
    )?;
    let messages = graph.commits().map(|c| c.message()).collect::<Vec<_>>();
    assert_eq!(messages, vec!["Old one"]);

    let graph = walk(
        dir.path(),
        "refs/heads/master",
        Cutoff::parse_date("2024-01-02")?,
    )?;
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.edges().len(), 1);

    let output_path = dir.path().join("graph.dot");
    bitgraph_graph(dir.path(), &output_path, &["--quiet", "--verify-objects"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&output_path)?.contains("Old one"));

    Ok(())
}
