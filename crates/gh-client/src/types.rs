//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from octocrab's models to keep
//! this crate's surface small and its consumers decoupled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject type GitHub reports for pull request notification threads
pub const SUBJECT_PULL_REQUEST: &str = "PullRequest";

/// A notification thread from the GitHub API
///
/// Immutable snapshot taken at listing time. Thread state changes
/// (mark-as-read, mark-as-done) happen on the server; the snapshot
/// is never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Thread id
    pub id: u64,

    /// Full name of the owning repository (e.g., "rust-lang/rust")
    pub repository: String,

    /// Subject type (e.g., "PullRequest", "Issue", "Release")
    pub subject_type: String,

    /// Subject title
    pub title: String,

    /// Whether the thread is still unread
    pub unread: bool,

    /// API URL of the subject, when GitHub provides one
    ///
    /// For pull request threads this points at the PR resource and is
    /// what `fetch_pull_request` resolves. Absent for some subject
    /// types (e.g., repository invitations).
    pub subject_url: Option<String>,

    /// When the thread was last updated
    pub updated_at: DateTime<Utc>,
}

/// A pull request from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// Author's GitHub username
    pub author: String,

    /// PR URL for opening in browser
    pub html_url: String,
}
