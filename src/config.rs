//! Immutable probe configuration shared read-only across candidate attempts
use std::time::Duration;

use tracing::error;
use url::Url;

use crate::error::ProbeError;

/// shell command embedded in the descriptor when none is specified
pub const DEFAULT_COMMAND: &str = "whoami";

/// ceiling on a single request/response exchange
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// generic client identity string sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// settings that hold for the whole probe run
///
/// constructed once, then passed by shared reference; nothing mutates it
/// after construction
///
/// # Examples
///
/// ```
/// # use action_probe::config::{ProbeConfig, DEFAULT_COMMAND};
/// # use action_probe::error::ProbeError;
/// # use std::time::Duration;
/// # fn main() -> Result<(), ProbeError> {
/// let config = ProbeConfig::new("http://localhost:3000/dashboard")?
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.command(), DEFAULT_COMMAND);
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    target: Url,
    command: String,
    timeout: Duration,
    user_agent: String,
}

impl ProbeConfig {
    /// create a configuration for the given target url, with default
    /// command, timeout, and user agent
    ///
    /// # Errors
    ///
    /// returns an error if the given target cannot be parsed as a url
    pub fn new(target: &str) -> Result<Self, ProbeError> {
        let parsed = Url::parse(target).map_err(|source| {
            error!(%target, %source, "could not parse the given target url");

            ProbeError::InvalidUrl {
                source,
                url: target.to_string(),
            }
        })?;

        Ok(Self {
            target: parsed,
            command: DEFAULT_COMMAND.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// set the shell command embedded in the action descriptor
    #[must_use]
    pub fn with_command(self, command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..self
        }
    }

    /// set the ceiling on each request/response exchange
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// set the client identity string sent with every request
    #[must_use]
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..self
        }
    }

    /// get a reference to the target url
    #[must_use]
    #[inline]
    pub const fn target(&self) -> &Url {
        &self.target
    }

    /// get the configured shell command
    #[must_use]
    #[inline]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// get the configured exchange ceiling
    #[must_use]
    #[inline]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// get the configured client identity string
    #[must_use]
    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// an unparsable target is rejected at construction time
    #[test]
    fn invalid_target_is_rejected() {
        let result = ProbeConfig::new("not a url");

        assert!(matches!(
            result,
            Err(ProbeError::InvalidUrl { url, .. }) if url == "not a url"
        ));
    }

    /// defaults match the probe's canonical settings
    #[test]
    fn defaults_are_canonical() {
        let config = ProbeConfig::new("http://localhost:3000/").unwrap();

        assert_eq!(config.command(), "whoami");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent(), "Mozilla/5.0");
    }
}
