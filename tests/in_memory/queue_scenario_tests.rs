//! End-to-end queue scenarios against the in-memory store.

use super::helpers::{QueueHarness, harness, queue_names};
use crate::test_helpers::submission_instant;
use intake::request::{
    domain::{DisplayStatus, RequestId, RequestStatus},
    projection::StatusCounts,
    services::QueueAdminError,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submissions_are_listed_in_submission_order(harness: QueueHarness) -> eyre::Result<()> {
    harness.submit("Alice", "blue logo").await?;
    harness.submit("Bob", "red icon").await?;

    let snapshot = harness.fetch().await?;

    eyre::ensure!(queue_names(&snapshot) == ["Alice", "Bob"]);
    eyre::ensure!(
        snapshot
            .entries()
            .iter()
            .all(|entry| entry.status == DisplayStatus::Pending)
    );
    eyre::ensure!(
        snapshot.counts()
            == StatusCounts {
                pending: 2,
                in_progress: 0,
                completed: 0,
                total: 2,
            }
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_request_moves_its_count(harness: QueueHarness) -> eyre::Result<()> {
    let alice = harness.submit("Alice", "blue logo").await?;
    harness.submit("Bob", "red icon").await?;

    let snapshot = harness
        .admin
        .set_status(alice.id(), RequestStatus::Completed)
        .await?;

    let entry = snapshot
        .entry(alice.id())
        .ok_or_else(|| eyre::eyre!("Alice should still be queued"))?;
    eyre::ensure!(entry.status == DisplayStatus::Completed);
    eyre::ensure!(
        snapshot.counts()
            == StatusCounts {
                pending: 1,
                in_progress: 0,
                completed: 1,
                total: 2,
            }
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_id_leaves_counts_unchanged(harness: QueueHarness) -> eyre::Result<()> {
    harness.submit("Alice", "blue logo").await?;
    harness.submit("Bob", "red icon").await?;
    let before = harness.fetch().await?.counts();

    let result = harness
        .admin
        .set_status(RequestId::new(), RequestStatus::Completed)
        .await;

    eyre::ensure!(matches!(result, Err(QueueAdminError::NotFound(_))));
    eyre::ensure!(harness.fetch().await?.counts() == before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_can_skip_straight_to_completed_and_back(
    harness: QueueHarness,
) -> eyre::Result<()> {
    let alice = harness.submit("Alice", "blue logo").await?;

    for status in [
        RequestStatus::Completed,
        RequestStatus::InProgress,
        RequestStatus::Pending,
        RequestStatus::Pending,
    ] {
        let snapshot = harness.admin.set_status(alice.id(), status).await?;
        eyre::ensure!(snapshot.counts().of(status) == 1);
        eyre::ensure!(snapshot.counts().total == 1);
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_request_disappears_and_renumbers_queue(
    harness: QueueHarness,
) -> eyre::Result<()> {
    let alice = harness.submit("Alice", "blue logo").await?;
    let bob = harness.submit("Bob", "red icon").await?;

    let snapshot = harness.admin.delete(alice.id()).await?;

    eyre::ensure!(queue_names(&snapshot) == ["Bob"]);
    let bob_entry = snapshot
        .entry(bob.id())
        .ok_or_else(|| eyre::eyre!("Bob should still be queued"))?;
    eyre::ensure!(bob_entry.ordinal == 1);

    let second = harness.admin.delete(alice.id()).await;
    eyre::ensure!(matches!(second, Err(QueueAdminError::NotFound(id)) if id == alice.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_instant_submissions_keep_submission_order(
    harness: QueueHarness,
) -> eyre::Result<()> {
    let names: Vec<String> = (0..24).map(|index| format!("user-{index:02}")).collect();
    for name in &names {
        harness.submit(name, "a logo please").await?;
    }

    let snapshot = harness.fetch().await?;

    eyre::ensure!(
        snapshot
            .entries()
            .iter()
            .all(|entry| entry.created_at == submission_instant()),
        "fixed clock should stamp every record identically"
    );
    eyre::ensure!(queue_names(&snapshot) == names);
    let newest: Vec<&str> = snapshot
        .newest_first()
        .map(|entry| entry.name.as_str())
        .collect();
    let expected: Vec<&str> = names.iter().rev().map(String::as_str).collect();
    eyre::ensure!(newest == expected);
    Ok(())
}
