//! Run orchestration
//!
//! One silencing pass: fetch both notification sets, classify each,
//! derive the incomplete set by thread-id difference, then apply the
//! batch transitions.

use anyhow::{Context, Result};
use gh_client::GitHubClient;
use log::{debug, info};

use crate::classifier::{classify, subtract};
use crate::config::Config;
use crate::mutator::{apply, MutationOutcome};
use crate::progress::ProgressSink;

/// What a single pass found and did
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Unread bot threads found
    pub unread_matched: usize,
    /// Read-but-not-done bot threads found
    pub incomplete_matched: usize,
    /// Success counts of the mutation sweep (zero in dry runs)
    pub outcome: MutationOutcome,
}

impl RunSummary {
    /// True when there was nothing to process at all
    pub fn is_empty(&self) -> bool {
        self.unread_matched == 0 && self.incomplete_matched == 0
    }
}

/// Execute one silencing pass
///
/// Listing failures are fatal here since nothing has been classified
/// yet; once the sweep starts, per-item failures stay local to their
/// item and the pass always returns a summary.
pub async fn run(
    client: &dyn GitHubClient,
    sink: &dyn ProgressSink,
    config: &Config,
) -> Result<RunSummary> {
    debug!("Fetching unread notifications");
    let unread = client
        .list_notifications(false)
        .await
        .context("Failed to list unread notifications")?;

    debug!("Fetching all notifications");
    let all = client
        .list_notifications(true)
        .await
        .context("Failed to list notifications")?;

    info!(
        "Found {} unread / {} total notifications",
        unread.len(),
        all.len()
    );

    let unread_bot = classify(client, sink, &unread, &config.exclude_repos).await;
    let all_bot = classify(client, sink, &all, &config.exclude_repos).await;
    let incomplete_bot = subtract(all_bot, &unread_bot);

    info!(
        "Renovate threads: {} unread, {} incomplete",
        unread_bot.len(),
        incomplete_bot.len()
    );

    let outcome = apply(client, sink, &unread_bot, &incomplete_bot, config.dry_run).await;

    Ok(RunSummary {
        unread_matched: unread_bot.len(),
        incomplete_matched: incomplete_bot.len(),
        outcome,
    })
}
