//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. All calls hit the live API.

use crate::client::GitHubClient;
use crate::error::ClientError;
use crate::types::{Notification, PullRequest};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::models::NotificationId;
use octocrab::Octocrab;
use std::sync::Arc;

/// Notifications fetched per page
const PER_PAGE: u8 = 50;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client authenticated with a personal access token
    pub fn from_token(token: impl Into<String>) -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token.into())
            .build()
            .context("Failed to build Octocrab client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn list_notifications(&self, include_read: bool) -> anyhow::Result<Vec<Notification>> {
        debug!("Fetching notifications (include_read: {})", include_read);

        let mut notifications = Vec::new();
        let mut page = self
            .octocrab
            .activity()
            .notifications()
            .list()
            .all(include_read)
            .per_page(PER_PAGE)
            .send()
            .await?;

        loop {
            for thread in &page.items {
                notifications.push(convert_notification(thread));
            }

            match self
                .octocrab
                .get_page::<octocrab::models::activity::Notification>(&page.next)
                .await?
            {
                Some(next) => page = next,
                None => break,
            }
        }

        debug!("Fetched {} notifications", notifications.len());
        Ok(notifications)
    }

    async fn fetch_pull_request(
        &self,
        notification: &Notification,
    ) -> anyhow::Result<PullRequest> {
        let url = notification
            .subject_url
            .as_deref()
            .ok_or(ClientError::MissingSubjectUrl)?;
        let (owner, repo, number) = parse_pull_request_route(url)
            .ok_or_else(|| ClientError::InvalidSubjectRoute(url.to_string()))?;

        debug!(
            "Resolving {}/{}#{} for thread {}",
            owner, repo, number, notification.id
        );

        let pr = self
            .octocrab
            .pulls(owner.as_str(), repo.as_str())
            .get(number)
            .await?;
        Ok(convert_pull_request(&pr))
    }

    async fn mark_notification_read(&self, notification: &Notification) -> anyhow::Result<()> {
        debug!("Marking thread {} as read", notification.id);

        self.octocrab
            .activity()
            .notifications()
            .mark_as_read(NotificationId(notification.id))
            .await?;
        Ok(())
    }

    async fn mark_notification_done(&self, notification: &Notification) -> anyhow::Result<()> {
        debug!("Marking thread {} as done", notification.id);

        // No typed octocrab surface for thread deletion; use the raw route
        let route = format!("/notifications/threads/{}", notification.id);
        let response = self.octocrab._delete(route, None::<&()>).await?;

        let status = response.status().as_u16();
        if status != 204 {
            // 4xx/5xx responses carry a GitHub error body worth surfacing
            octocrab::map_github_error(response).await?;
            return Err(ClientError::DoneRejected {
                thread: notification.id,
                status,
            }
            .into());
        }
        Ok(())
    }
}

/// Convert octocrab notification thread to our Notification type
fn convert_notification(thread: &octocrab::models::activity::Notification) -> Notification {
    Notification {
        id: thread.id.0,
        repository: thread
            .repository
            .full_name
            .clone()
            .unwrap_or_else(|| thread.repository.name.clone()),
        subject_type: thread.subject.r#type.clone(),
        title: thread.subject.title.clone(),
        unread: thread.unread,
        subject_url: thread.subject.url.as_ref().map(|u| u.to_string()),
        updated_at: thread.updated_at,
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}

/// Extract `(owner, repo, number)` from a pull request API URL
///
/// Subject URLs look like
/// `https://api.github.com/repos/{owner}/{repo}/pulls/{number}`.
fn parse_pull_request_route(url: &str) -> Option<(String, String, u64)> {
    let rest = url.split_once("/repos/")?.1;
    let mut segments = rest.split('/');
    let owner = segments.next()?;
    let repo = segments.next()?;
    if segments.next()? != "pulls" {
        return None;
    }
    let number = segments.next()?.parse().ok()?;
    Some((owner.to_string(), repo.to_string(), number))
}
