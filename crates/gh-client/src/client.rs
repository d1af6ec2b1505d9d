//! GitHub client trait definition
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy. The trait covers exactly the
//! notification inbox surface: listing threads, resolving a thread's
//! pull request, and transitioning thread state.

use crate::types::{Notification, PullRequest};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub notifications
/// API. Implementations can be direct (hitting the API) or in-memory
/// fakes for tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, Notification};
///
/// async fn unread(client: &dyn GitHubClient) -> anyhow::Result<Vec<Notification>> {
///     client.list_notifications(false).await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// List notification threads for the authenticated user
    ///
    /// # Arguments
    ///
    /// * `include_read` - When `false`, only unread threads are returned;
    ///   when `true`, read-but-not-done threads are included as well
    ///
    /// # Returns
    ///
    /// All matching threads in API order, or an error if the listing
    /// call fails. Pagination is handled internally.
    async fn list_notifications(&self, include_read: bool) -> anyhow::Result<Vec<Notification>>;

    /// Resolve the pull request a notification thread points at
    ///
    /// # Arguments
    ///
    /// * `notification` - A thread whose subject is a pull request
    ///
    /// # Returns
    ///
    /// The pull request details, or an error when the thread carries no
    /// resolvable subject URL or the lookup fails (network, permissions).
    /// A failure here concerns this single thread only.
    async fn fetch_pull_request(&self, notification: &Notification)
        -> anyhow::Result<PullRequest>;

    /// Mark a notification thread as read
    ///
    /// # Arguments
    ///
    /// * `notification` - The thread to mark as read
    ///
    /// # Returns
    ///
    /// Ok(()) on success, error on failure
    async fn mark_notification_read(&self, notification: &Notification) -> anyhow::Result<()>;

    /// Mark a notification thread as done
    ///
    /// Done (archived) threads disappear from the inbox entirely, unlike
    /// read threads which remain listed. GitHub models this as deleting
    /// the thread resource; success is exactly a 204 No Content response
    /// and any other status is an error.
    ///
    /// # Arguments
    ///
    /// * `notification` - The thread to mark as done
    ///
    /// # Returns
    ///
    /// Ok(()) on success, error on failure
    async fn mark_notification_done(&self, notification: &Notification) -> anyhow::Result<()>;
}
