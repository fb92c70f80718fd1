/// Diamond merge (de-duplication test)
///
/// History:
/// ```text
///       A
///      / \
///     B   C
///      \ /
///       D (merge)
/// ```
///
/// A is reachable from D through both B and C and must be recorded once.
use crate::common::command::repository;
use crate::common::store::SyntheticRepo;
use crate::common::CUTOFF_TIMESTAMP;
use bitgraph::artifacts::graph::dot::{DotEmitter, DotOptions};
use bitgraph::artifacts::log::cutoff::Cutoff;
use bitgraph::artifacts::log::walk;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn diamond_merge_is_deduplicated(
    repository: SyntheticRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let t = CUTOFF_TIMESTAMP - 100;
    let a = repository.commit(&[], t, "A");
    let b = repository.commit(&[&a], t + 1, "B");
    let c = repository.commit(&[&a], t + 2, "C");
    let d = repository.commit(&[&b, &c], t + 3, "D");
    repository.set_branch("master", &d);

    let graph = walk(
        repository.path(),
        "refs/heads/master",
        Cutoff::from_timestamp(CUTOFF_TIMESTAMP),
    )?;

    let mut messages = graph.commits().map(|c| c.message()).collect::<Vec<_>>();
    messages.sort();
    assert_eq!(messages, vec!["A", "B", "C", "D"]);

    let merge = graph
        .commits()
        .find(|c| c.message() == "D")
        .ok_or("merge commit missing")?;
    assert_eq!(
        merge.parents().iter().map(|p| p.as_ref()).collect::<Vec<_>>(),
        vec![b.as_str(), c.as_str()]
    );

    let dot = DotEmitter::new(DotOptions::default()).emit(&graph);
    assert_eq!(dot.lines().filter(|l| l.contains("->")).count(), 4);
    assert_eq!(
        dot.lines()
            .filter(|l| l.contains("[label=") && l.contains(&a))
            .count(),
        1
    );

    Ok(())
}
