//! Progress reporting seam
//!
//! The classifier and mutator emit structured events through an injected
//! sink instead of writing to any particular output. The binary installs
//! `LogSink`; tests install a recording sink and assert on the sequence.

use gh_client::Notification;
use log::{debug, error, info, warn};

/// Which state transition a mutation event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Thread PATCH marking the notification as read
    MarkRead,
    /// Thread deletion marking the notification as done
    MarkDone,
}

/// One observable step of a silencing run
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// Notification passed all filters
    Classified(&'a Notification),
    /// Subject is not a pull request
    SkippedNonPullRequest(&'a Notification),
    /// Linked PR exists but its author failed the bot heuristic
    SkippedNonBot {
        notification: &'a Notification,
        author: &'a str,
    },
    /// Repository is on the exclusion list
    SkippedExcluded(&'a Notification),
    /// Pull request lookup failed; the notification is dropped
    ResolutionFailed {
        notification: &'a Notification,
        error: &'a anyhow::Error,
    },
    /// Dry run: a live run would mark this thread as read
    WouldMarkRead(&'a Notification),
    /// Dry run: a live run would mark this thread as done
    WouldMarkDone(&'a Notification),
    /// Thread marked as read
    MarkedRead(&'a Notification),
    /// Thread marked as done
    MarkedDone(&'a Notification),
    /// A state-changing call failed; the sweep continues
    MutationFailed {
        notification: &'a Notification,
        operation: MutationKind,
        error: &'a anyhow::Error,
    },
}

/// Observer for run progress
pub trait ProgressSink {
    fn emit(&self, event: ProgressEvent<'_>);
}

/// Sink that routes events through the `log` facade
///
/// Per-item classification detail lands at debug so it only shows up
/// with --verbose; dry-run intents at info; failed mutations at error
/// so they are visible at the default filter.
pub struct LogSink;

impl ProgressSink for LogSink {
    fn emit(&self, event: ProgressEvent<'_>) {
        match event {
            ProgressEvent::Classified(n) => {
                debug!("Matched {}: {}", n.repository, n.title);
            }
            ProgressEvent::SkippedNonPullRequest(n) => {
                debug!(
                    "Skipping {} ({}): not a pull request notification",
                    n.repository, n.subject_type
                );
            }
            ProgressEvent::SkippedNonBot {
                notification,
                author,
            } => {
                debug!(
                    "Skipping {}: PR opened by {}, not Renovate",
                    notification.repository, author
                );
            }
            ProgressEvent::SkippedExcluded(n) => {
                debug!("Skipping {}: repository is excluded", n.repository);
            }
            ProgressEvent::ResolutionFailed {
                notification,
                error,
            } => {
                warn!(
                    "Could not resolve pull request for {} ({}): {:#}",
                    notification.repository, notification.title, error
                );
            }
            ProgressEvent::WouldMarkRead(n) => {
                info!("Would mark as read: {} - {}", n.repository, n.title);
            }
            ProgressEvent::WouldMarkDone(n) => {
                info!("Would mark as done: {} - {}", n.repository, n.title);
            }
            ProgressEvent::MarkedRead(n) => {
                debug!("Marked as read: {} - {}", n.repository, n.title);
            }
            ProgressEvent::MarkedDone(n) => {
                debug!("Marked thread {} as done: {} - {}", n.id, n.repository, n.title);
            }
            ProgressEvent::MutationFailed {
                notification,
                operation,
                error,
            } => {
                let action = match operation {
                    MutationKind::MarkRead => "read",
                    MutationKind::MarkDone => "done",
                };
                error!(
                    "Failed to mark {} - {} as {}: {:#}",
                    notification.repository, notification.title, action, error
                );
            }
        }
    }
}
