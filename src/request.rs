//! Single-shot probe request: one candidate identifier paired with the
//! crafted payload and the fixed header set
use std::time::Duration;

use url::Url;

use crate::config::ProbeConfig;
use crate::payload::ActionPayload;

/// header naming the server action to invoke; only attached when the
/// candidate identifier is non-empty
pub const ACTION_ID_HEADER: &str = "Next-Action";

/// accept value requesting a component-stream response from the framework
pub const COMPONENT_STREAM_ACCEPT: &str = "text/x-component";

/// everything the client needs to perform one POST against the target
///
/// # Examples
///
/// ```
/// # use action_probe::config::ProbeConfig;
/// # use action_probe::payload::ActionPayload;
/// # use action_probe::request::ProbeRequest;
/// # use action_probe::error::ProbeError;
/// # fn main() -> Result<(), ProbeError> {
/// let config = ProbeConfig::new("http://localhost:3000/dashboard")?;
/// let payload = ActionPayload::build(config.command())?;
///
/// // an empty candidate means no action identifier header is attached
/// let request = ProbeRequest::new(&config, "", payload);
///
/// assert!(request.action_id().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeRequest {
    url: Url,
    action_id: Option<String>,
    payload: ActionPayload,
    timeout: Duration,
    user_agent: String,
}

impl ProbeRequest {
    /// build a request from the run configuration plus one candidate
    ///
    /// the action identifier is carried as `Some` iff the candidate string
    /// is non-empty
    #[must_use]
    pub fn new(config: &ProbeConfig, action_id: &str, payload: ActionPayload) -> Self {
        Self {
            url: config.target().clone(),
            action_id: if action_id.is_empty() {
                None
            } else {
                Some(action_id.to_string())
            },
            payload,
            timeout: config.timeout(),
            user_agent: config.user_agent().to_string(),
        }
    }

    /// get a reference to the target url
    #[must_use]
    #[inline]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// get the candidate action identifier, if one is attached
    #[must_use]
    #[inline]
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    /// get a reference to the crafted payload
    #[must_use]
    #[inline]
    pub const fn payload(&self) -> &ActionPayload {
        &self.payload
    }

    /// get the ceiling on the whole request/response exchange
    #[must_use]
    #[inline]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// get the client identity string
    #[must_use]
    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// the identifier header value is carried iff the candidate is non-empty
    #[test]
    fn action_id_present_iff_candidate_non_empty() {
        let config = ProbeConfig::new("http://localhost:3000/").unwrap();

        let with_id = ProbeRequest::new(
            &config,
            "a1b2c3d4e5f6",
            ActionPayload::build(config.command()).unwrap(),
        );
        let without_id =
            ProbeRequest::new(&config, "", ActionPayload::build(config.command()).unwrap());

        assert_eq!(with_id.action_id(), Some("a1b2c3d4e5f6"));
        assert!(without_id.action_id().is_none());
    }
}
