//! GitHub notification API client
//!
//! This crate provides a trait-based client for the slice of the GitHub API
//! that inbox tooling needs: listing notification threads, resolving the pull
//! request a thread points at, and transitioning threads (mark-as-read,
//! mark-as-done).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - list_notifications()                          │
//! │  - fetch_pull_request()                          │
//! │  - mark_notification_read()                      │
//! │  - mark_notification_done()                      │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::from_token("token")?;
//!
//! // Unread notification threads, API ordering preserved
//! let unread = client.list_notifications(false).await?;
//!
//! for notification in &unread {
//!     let pr = client.fetch_pull_request(notification).await?;
//!     println!("{} opened by {}", notification.title, pr.author);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod token;
pub mod types;

pub use client::GitHubClient;
pub use error::ClientError;
pub use octocrab_client::OctocrabClient;
pub use token::TokenResolver;
pub use types::{Notification, PullRequest, SUBJECT_PULL_REQUEST};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
