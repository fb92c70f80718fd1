use crate::common::CUTOFF_DATE;
use crate::common::store::SyntheticRepo;
use assert_cmd::Command;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository() -> SyntheticRepo {
    SyntheticRepo::new()
}

/// master: first (t-2) <- second (t-1) <- third (t), cutoff t
#[fixture]
pub fn linear_repository(repository: SyntheticRepo) -> SyntheticRepo {
    let t = crate::common::CUTOFF_TIMESTAMP;
    let first = repository.commit(&[], t - 2, "First commit");
    let second = repository.commit(&[&first], t - 1, "Second commit");
    let third = repository.commit(&[&second], t, "Third commit");
    repository.set_branch("master", &third);

    repository
}

pub fn run_bitgraph_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bitgraph").expect("Failed to find bitgraph binary");
    cmd.env("NO_COLOR", "1");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// `bitgraph` with the required flags filled in for `repository`
pub fn bitgraph_graph(repository: &Path, output: &Path, extra_args: &[&str]) -> Command {
    let repository = repository.to_string_lossy();
    let output = output.to_string_lossy();
    let mut args = vec![
        "--repo-path",
        &*repository,
        "--date",
        CUTOFF_DATE,
        "--output-path",
        &*output,
    ];
    args.extend_from_slice(extra_args);

    run_bitgraph_command(&args)
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> std::process::Command {
    let mut cmd = std::process::Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
