use crate::common::command::repository;
use crate::common::store::SyntheticRepo;
use bitgraph::artifacts::log::cutoff::Cutoff;
use bitgraph::artifacts::log::walk;
use bitgraph::errors::GraphError;
use rstest::rstest;

#[rstest]
fn corrupt_object_fails_walk(repository: SyntheticRepo) -> Result<(), Box<dyn std::error::Error>> {
    let parent = repository.commit(&[], 10, "Parent");
    let head = repository.commit(&[&parent], 20, "Head");
    repository.set_branch("master", &head);

    // overwrite the parent with bytes that are not a zlib stream
    repository.write_raw(&parent, b"definitely not zlib");

    let result = walk(
        repository.path(),
        "refs/heads/master",
        Cutoff::from_timestamp(100),
    );

    match result {
        Err(GraphError::CorruptObject { oid, .. }) => assert_eq!(oid.as_ref(), parent),
        other => panic!("expected CorruptObject, got {other:?}"),
    }

    Ok(())
}
