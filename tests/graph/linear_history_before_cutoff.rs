/// Three commits at t-2, t-1 and t with cutoff t: the newest one is
/// excluded, leaving two nodes joined by one edge.
use crate::common::command::linear_repository;
use crate::common::store::SyntheticRepo;
use crate::common::CUTOFF_TIMESTAMP;
use bitgraph::artifacts::graph::dot::{DotEmitter, DotOptions};
use bitgraph::artifacts::log::cutoff::Cutoff;
use bitgraph::artifacts::log::walk;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn linear_history_before_cutoff(
    linear_repository: SyntheticRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = walk(
        linear_repository.path(),
        "refs/heads/master",
        Cutoff::from_timestamp(CUTOFF_TIMESTAMP),
    )?;

    let mut messages = graph.commits().map(|c| c.message()).collect::<Vec<_>>();
    messages.sort();
    assert_eq!(messages, vec!["First commit", "Second commit"]);
    assert_eq!(graph.edges().len(), 1);

    let dot = DotEmitter::new(DotOptions::default()).emit(&graph);
    assert_eq!(dot.lines().filter(|l| l.contains("[label=")).count(), 2);
    assert_eq!(dot.lines().filter(|l| l.contains("->")).count(), 1);
    assert!(!dot.contains("Third commit"));

    Ok(())
}
