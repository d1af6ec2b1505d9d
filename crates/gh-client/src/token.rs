//! GitHub token resolution
//!
//! Resolves the personal access token used to authenticate API calls.
//! Tries multiple sources in order:
//! 1. An explicitly supplied token (command line)
//! 2. `GITHUB_TOKEN` or `GH_TOKEN` environment variables
//! 3. `gh auth token` command

use anyhow::Result;
use log::debug;

/// Resolves the GitHub token for the current run
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    /// Cached token from GITHUB_TOKEN/GH_TOKEN
    env_token: Option<String>,
}

impl TokenResolver {
    /// Create a new token resolver, capturing the environment
    pub fn new() -> Self {
        let env_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok()
            .filter(|token| !token.trim().is_empty());

        Self { env_token }
    }

    /// Resolve a token, preferring an explicitly supplied one
    ///
    /// # Arguments
    ///
    /// * `explicit` - Token passed on the command line, if any
    ///
    /// # Errors
    ///
    /// Fails when no source yields a token. No API calls are made here;
    /// an invalid token only surfaces on the first request.
    pub async fn resolve(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(token) = explicit {
            if !token.trim().is_empty() {
                debug!("Using token from command line");
                return Ok(token.to_string());
            }
        }

        if let Some(token) = &self.env_token {
            debug!("Using token from GITHUB_TOKEN/GH_TOKEN");
            return Ok(token.clone());
        }

        // gh CLI fallback; a missing binary just means no token from here
        debug!("Trying gh auth token");
        if let Ok(output) = tokio::process::Command::new("gh")
            .args(["auth", "token"])
            .output()
            .await
        {
            if output.status.success() {
                if let Ok(token) = String::from_utf8(output.stdout) {
                    let token = token.trim();
                    if !token.is_empty() {
                        debug!("Using token from gh CLI");
                        return Ok(token.to_string());
                    }
                }
            }
        }

        Err(anyhow::anyhow!(
            "No GitHub token found. \
             Pass --token, set GITHUB_TOKEN, or run 'gh auth login'"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_explicit_token_wins() {
        let resolver = TokenResolver {
            env_token: Some("from-env".to_string()),
        };

        let token = resolver.resolve(Some("from-cli")).await.unwrap();
        assert_eq!(token, "from-cli");
    }

    #[tokio::test]
    async fn test_blank_explicit_token_falls_back_to_env() {
        let resolver = TokenResolver {
            env_token: Some("from-env".to_string()),
        };

        let token = resolver.resolve(Some("  ")).await.unwrap();
        assert_eq!(token, "from-env");
    }

    #[tokio::test]
    async fn test_env_token_used_when_no_explicit() {
        let resolver = TokenResolver {
            env_token: Some("from-env".to_string()),
        };

        let token = resolver.resolve(None).await.unwrap();
        assert_eq!(token, "from-env");
    }
}
