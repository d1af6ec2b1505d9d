//! Client error conditions beyond plain transport failures

use thiserror::Error;

/// Errors raised by the notification client itself
///
/// Transport and API errors surface as `octocrab` errors through
/// `anyhow`; these variants cover the conditions this crate detects
/// on its own.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The thread's subject carries no API URL to resolve
    #[error("notification subject has no pull request URL")]
    MissingSubjectUrl,

    /// The subject URL does not look like a pull request resource
    #[error("unrecognized pull request route: {0}")]
    InvalidSubjectRoute(String),

    /// The mark-as-done request returned something other than 204
    #[error("marking thread {thread} as done returned unexpected status {status}")]
    DoneRejected {
        /// Thread id the request was issued for
        thread: u64,
        /// HTTP status the API answered with
        status: u16,
    },
}
