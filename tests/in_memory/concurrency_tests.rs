//! Independent workflows running concurrently against one store.

use super::helpers::{QueueHarness, harness};
use intake::request::domain::RequestStatus;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_submissions_all_land(harness: QueueHarness) -> eyre::Result<()> {
    let mut handles = Vec::new();
    for index in 0..16 {
        let submission = harness.submission.clone();
        handles.push(tokio::spawn(async move {
            submission
                .submit(format!("user-{index}"), "a logo please")
                .await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let snapshot = harness.fetch().await?;
    eyre::ensure!(snapshot.counts().total == 16);
    eyre::ensure!(snapshot.counts().pending == 16);
    let ordinals: Vec<usize> = snapshot.entries().iter().map(|entry| entry.ordinal).collect();
    eyre::ensure!(ordinals == (1..=16).collect::<Vec<_>>());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn racing_status_updates_resolve_to_one_valid_status(
    harness: QueueHarness,
) -> eyre::Result<()> {
    let alice = harness.submit("Alice", "blue logo").await?;
    let first = harness.admin.clone();
    let second = harness.admin.clone();

    let (left, right) = tokio::join!(
        first.set_status(alice.id(), RequestStatus::InProgress),
        second.set_status(alice.id(), RequestStatus::Completed),
    );
    left?;
    right?;

    let counts = harness.fetch().await?.counts();
    eyre::ensure!(counts.total == 1);
    eyre::ensure!(counts.in_progress + counts.completed == 1);
    eyre::ensure!(counts.pending == 0);
    Ok(())
}
