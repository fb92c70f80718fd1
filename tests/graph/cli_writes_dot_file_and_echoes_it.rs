use crate::common::command::{bitgraph_graph, linear_repository};
use crate::common::store::SyntheticRepo;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn cli_writes_dot_file_and_echoes_it(
    linear_repository: SyntheticRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = TempDir::new()?;
    let output_path = out_dir.path().join("graph.dot");

    let output = bitgraph_graph(linear_repository.path(), &output_path, &[])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph G {"))
        .stdout(predicate::str::contains("First commit"))
        .stdout(predicate::str::contains("Second commit"))
        .stdout(predicate::str::contains("Third commit").not())
        .stderr(predicate::str::contains("Graph written to"));

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let written = std::fs::read_to_string(&output_path)?;
    assert_eq!(written, stdout);

    // nothing but the graph file is left in the output directory
    let entries = std::fs::read_dir(out_dir.path())?.count();
    assert_eq!(entries, 1);

    Ok(())
}

#[rstest]
fn cli_quiet_suppresses_echo_and_decorates_labels(
    linear_repository: SyntheticRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = TempDir::new()?;
    let output_path = out_dir.path().join("graph.dot");

    bitgraph_graph(
        linear_repository.path(),
        &output_path,
        &["--quiet", "--show-dates", "--show-authors", "--rankdir", "LR"],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&output_path)?;
    assert!(written.contains("rankdir=LR;"));
    assert!(written.contains("2023-12-31 23:59:58"));
    assert!(written.contains("fake_user"));

    Ok(())
}

#[rstest]
fn cli_reports_when_no_commit_precedes_cutoff(
    #[from(crate::common::command::repository)] repository: SyntheticRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = repository.commit(&[], crate::common::CUTOFF_TIMESTAMP + 3600, "Too new");
    repository.set_branch("master", &head);
    let out_dir = TempDir::new()?;
    let output_path = out_dir.path().join("graph.dot");

    bitgraph_graph(repository.path(), &output_path, &["--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No commits before 2024-01-01"));

    let written = std::fs::read_to_string(&output_path)?;
    assert!(!written.contains("[label="));

    Ok(())
}

#[rstest]
fn cli_labels_use_first_message_line(
    #[from(crate::common::command::repository)] repository: SyntheticRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    use fake::Fake;
    use fake::faker::lorem::en::{Sentence, Words};

    let subject = Sentence(3..6).fake::<String>().replace('"', "");
    let body = Words(5..10).fake::<Vec<String>>().join("\n");
    let head = repository.commit(&[], 10, &format!("{subject}\n\n{body}"));
    repository.set_branch("master", &head);
    let out_dir = TempDir::new()?;
    let output_path = out_dir.path().join("graph.dot");

    bitgraph_graph(repository.path(), &output_path, &["--quiet"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&output_path)?;
    assert!(written.contains(&format!("[label=\"{}\\n{}\"];", &head[..7], subject)));
    for word in body.lines() {
        assert!(!written.contains(&format!("\\n{word}\"")));
    }

    Ok(())
}
