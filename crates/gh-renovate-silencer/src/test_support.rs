//! Shared fixtures for classifier, mutator and run tests

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use gh_client::{ClientError, GitHubClient, Notification, PullRequest, SUBJECT_PULL_REQUEST};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::progress::{MutationKind, ProgressEvent, ProgressSink};

/// In-memory provider standing in for the GitHub API
#[derive(Default)]
pub struct FakeClient {
    /// Returned by list_notifications(false)
    pub unread: Vec<Notification>,
    /// Returned by list_notifications(true)
    pub all: Vec<Notification>,
    /// PR author per thread id; missing entries fail resolution
    pub authors: HashMap<u64, String>,
    /// Thread ids whose mark-read call fails
    pub fail_read: HashSet<u64>,
    /// Thread ids whose mark-done call is rejected with a 403
    pub fail_done: HashSet<u64>,
    /// Thread ids successfully marked read, in call order
    pub marked_read: Mutex<Vec<u64>>,
    /// Thread ids successfully marked done, in call order
    pub marked_done: Mutex<Vec<u64>>,
}

#[async_trait]
impl GitHubClient for FakeClient {
    async fn list_notifications(&self, include_read: bool) -> anyhow::Result<Vec<Notification>> {
        Ok(if include_read {
            self.all.clone()
        } else {
            self.unread.clone()
        })
    }

    async fn fetch_pull_request(
        &self,
        notification: &Notification,
    ) -> anyhow::Result<PullRequest> {
        let author = self
            .authors
            .get(&notification.id)
            .ok_or_else(|| anyhow!("pull request lookup failed for thread {}", notification.id))?;

        Ok(PullRequest {
            number: notification.id,
            title: notification.title.clone(),
            author: author.clone(),
            html_url: format!(
                "https://github.com/{}/pull/{}",
                notification.repository, notification.id
            ),
        })
    }

    async fn mark_notification_read(&self, notification: &Notification) -> anyhow::Result<()> {
        if self.fail_read.contains(&notification.id) {
            return Err(anyhow!("cannot mark thread {} as read", notification.id));
        }
        self.marked_read.lock().unwrap().push(notification.id);
        Ok(())
    }

    async fn mark_notification_done(&self, notification: &Notification) -> anyhow::Result<()> {
        if self.fail_done.contains(&notification.id) {
            return Err(ClientError::DoneRejected {
                thread: notification.id,
                status: 403,
            }
            .into());
        }
        self.marked_done.lock().unwrap().push(notification.id);
        Ok(())
    }
}

/// Sink recording a compact label per event
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn labels(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn emit(&self, event: ProgressEvent<'_>) {
        let label = match event {
            ProgressEvent::Classified(n) => format!("classified:{}", n.id),
            ProgressEvent::SkippedNonPullRequest(n) => format!("skipped-non-pr:{}", n.id),
            ProgressEvent::SkippedNonBot { notification, .. } => {
                format!("skipped-non-bot:{}", notification.id)
            }
            ProgressEvent::SkippedExcluded(n) => format!("skipped-excluded:{}", n.id),
            ProgressEvent::ResolutionFailed { notification, .. } => {
                format!("resolution-failed:{}", notification.id)
            }
            ProgressEvent::WouldMarkRead(n) => format!("would-read:{}", n.id),
            ProgressEvent::WouldMarkDone(n) => format!("would-done:{}", n.id),
            ProgressEvent::MarkedRead(n) => format!("read:{}", n.id),
            ProgressEvent::MarkedDone(n) => format!("done:{}", n.id),
            ProgressEvent::MutationFailed {
                notification,
                operation,
                ..
            } => {
                let op = match operation {
                    MutationKind::MarkRead => "read",
                    MutationKind::MarkDone => "done",
                };
                format!("failed-{}:{}", op, notification.id)
            }
        };
        self.events.lock().unwrap().push(label);
    }
}

/// Pull request notification fixture
pub fn pr_notification(id: u64, repository: &str, title: &str) -> Notification {
    notification(id, repository, SUBJECT_PULL_REQUEST, title)
}

/// Notification fixture with an arbitrary subject type
pub fn notification(id: u64, repository: &str, subject_type: &str, title: &str) -> Notification {
    Notification {
        id,
        repository: repository.to_string(),
        subject_type: subject_type.to_string(),
        title: title.to_string(),
        unread: true,
        subject_url: Some(format!(
            "https://api.github.com/repos/{}/pulls/{}",
            repository, id
        )),
        updated_at: Utc::now(),
    }
}
