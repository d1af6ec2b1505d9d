//! Batch state transitions
//!
//! Applies mark-as-read and mark-as-done to the classified sets. Every
//! call is independent: a failure is reported through the sink and the
//! sweep moves on. Nothing here ever aborts the batch.

use gh_client::{GitHubClient, Notification};

use crate::progress::{MutationKind, ProgressEvent, ProgressSink};

/// Success counts of one mutation sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Threads actually marked as read
    pub read_count: usize,
    /// Threads actually marked as done
    pub complete_count: usize,
}

/// Apply both transitions sequentially, in input order
///
/// In dry-run mode no state-changing call is made; an intent event is
/// emitted per thread and the outcome is always zero. The caller derives
/// the would-be totals from the list lengths instead.
pub async fn apply(
    client: &dyn GitHubClient,
    sink: &dyn ProgressSink,
    unread: &[Notification],
    incomplete: &[Notification],
    dry_run: bool,
) -> MutationOutcome {
    if dry_run {
        for notification in unread {
            sink.emit(ProgressEvent::WouldMarkRead(notification));
        }
        for notification in incomplete {
            sink.emit(ProgressEvent::WouldMarkDone(notification));
        }
        return MutationOutcome::default();
    }

    let mut outcome = MutationOutcome::default();

    for notification in unread {
        match client.mark_notification_read(notification).await {
            Ok(()) => {
                outcome.read_count += 1;
                sink.emit(ProgressEvent::MarkedRead(notification));
            }
            Err(error) => {
                sink.emit(ProgressEvent::MutationFailed {
                    notification,
                    operation: MutationKind::MarkRead,
                    error: &error,
                });
            }
        }
    }

    for notification in incomplete {
        match client.mark_notification_done(notification).await {
            Ok(()) => {
                outcome.complete_count += 1;
                sink.emit(ProgressEvent::MarkedDone(notification));
            }
            Err(error) => {
                sink.emit(ProgressEvent::MutationFailed {
                    notification,
                    operation: MutationKind::MarkDone,
                    error: &error,
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{pr_notification, FakeClient, RecordingSink};

    #[tokio::test]
    async fn test_dry_run_mutates_nothing_and_returns_zero() {
        let client = FakeClient::default();
        let sink = RecordingSink::default();
        let unread = vec![pr_notification(1, "org/repoA", "a")];
        let incomplete = vec![pr_notification(2, "org/repoB", "b")];

        let outcome = apply(&client, &sink, &unread, &incomplete, true).await;

        assert_eq!(outcome, MutationOutcome::default());
        assert!(client.marked_read.lock().unwrap().is_empty());
        assert!(client.marked_done.lock().unwrap().is_empty());
        assert_eq!(sink.labels(), vec!["would-read:1", "would-done:2"]);
    }

    #[tokio::test]
    async fn test_live_run_counts_both_transitions() {
        let client = FakeClient::default();
        let sink = RecordingSink::default();
        let unread = vec![
            pr_notification(1, "org/repoA", "a"),
            pr_notification(2, "org/repoA", "b"),
        ];
        let incomplete = vec![pr_notification(3, "org/repoB", "c")];

        let outcome = apply(&client, &sink, &unread, &incomplete, false).await;

        assert_eq!(outcome.read_count, 2);
        assert_eq!(outcome.complete_count, 1);
        assert_eq!(*client.marked_read.lock().unwrap(), vec![1, 2]);
        assert_eq!(*client.marked_done.lock().unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn test_mark_read_failure_does_not_stop_the_sweep() {
        let client = FakeClient {
            fail_read: [1].into(),
            ..Default::default()
        };
        let sink = RecordingSink::default();
        let unread = vec![
            pr_notification(1, "org/repoA", "a"),
            pr_notification(2, "org/repoA", "b"),
        ];

        let outcome = apply(&client, &sink, &unread, &[], false).await;

        assert_eq!(outcome.read_count, 1);
        assert_eq!(*client.marked_read.lock().unwrap(), vec![2]);
        assert_eq!(sink.labels(), vec!["failed-read:1", "read:2"]);
    }

    #[tokio::test]
    async fn test_mark_done_rejection_is_isolated() {
        // Thread 1 is rejected with a 403; thread 2 still goes through
        let client = FakeClient {
            fail_done: [1].into(),
            ..Default::default()
        };
        let sink = RecordingSink::default();
        let incomplete = vec![
            pr_notification(1, "org/repoA", "a"),
            pr_notification(2, "org/repoB", "b"),
        ];

        let outcome = apply(&client, &sink, &[], &incomplete, false).await;

        assert_eq!(outcome.complete_count, 1);
        assert_eq!(*client.marked_done.lock().unwrap(), vec![2]);
        assert_eq!(sink.labels(), vec!["failed-done:1", "done:2"]);
    }

    #[tokio::test]
    async fn test_empty_input_yields_zero_outcome() {
        let client = FakeClient::default();
        let sink = RecordingSink::default();

        let outcome = apply(&client, &sink, &[], &[], false).await;

        assert_eq!(outcome, MutationOutcome::default());
        assert!(sink.labels().is_empty());
    }
}
