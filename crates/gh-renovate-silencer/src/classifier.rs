//! Notification classification
//!
//! Decides which notification threads were caused by the Renovate bot.
//! Only pull request threads qualify; the linked PR is resolved lazily
//! per thread and its author checked against the bot heuristic.

use std::collections::HashSet;

use gh_client::{GitHubClient, Notification, SUBJECT_PULL_REQUEST};

use crate::progress::{ProgressEvent, ProgressSink};

/// Bot authorship heuristic
///
/// Matches when the login, lowercased, contains `renovate` or ends with
/// `[bot]`. Deliberately permissive so self-hosted Renovate accounts and
/// naming variants are caught; an exact identity match is not attempted.
pub fn is_bot_author(login: &str) -> bool {
    let login = login.to_lowercase();
    login.contains("renovate") || login.ends_with("[bot]")
}

/// Filter notifications down to bot-authored pull request threads
///
/// Non-PR subjects are dropped up front. A failed pull request lookup
/// drops that single thread and the pass continues. Threads from
/// repositories in `exclude` are dropped even when the author matches.
/// Output preserves the input order of the surviving subset.
pub async fn classify(
    client: &dyn GitHubClient,
    sink: &dyn ProgressSink,
    notifications: &[Notification],
    exclude: &HashSet<String>,
) -> Vec<Notification> {
    let mut matched = Vec::new();

    for notification in notifications {
        if notification.subject_type != SUBJECT_PULL_REQUEST {
            sink.emit(ProgressEvent::SkippedNonPullRequest(notification));
            continue;
        }

        let pull_request = match client.fetch_pull_request(notification).await {
            Ok(pr) => pr,
            Err(error) => {
                sink.emit(ProgressEvent::ResolutionFailed {
                    notification,
                    error: &error,
                });
                continue;
            }
        };

        if !is_bot_author(&pull_request.author) {
            sink.emit(ProgressEvent::SkippedNonBot {
                notification,
                author: &pull_request.author,
            });
            continue;
        }

        if exclude.contains(&notification.repository) {
            sink.emit(ProgressEvent::SkippedExcluded(notification));
            continue;
        }

        sink.emit(ProgressEvent::Classified(notification));
        matched.push(notification.clone());
    }

    matched
}

/// Identity-based set difference over two classified outputs
///
/// Returns the threads of `all` that do not appear in `unread`, by
/// thread id. This is how the incomplete set (read but not yet done)
/// is derived without a third classification pass.
pub fn subtract(all: Vec<Notification>, unread: &[Notification]) -> Vec<Notification> {
    let seen: HashSet<u64> = unread.iter().map(|n| n.id).collect();
    all.into_iter().filter(|n| !seen.contains(&n.id)).collect()
}
