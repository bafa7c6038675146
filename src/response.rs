//! Received side of a probe attempt, captured from the blocking transport
use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Duration;

use tracing::{error, instrument};

use crate::error::ProbeError;

/// everything the probe keeps from a completed HTTP exchange
///
/// the body is stored raw; [`ProbeResponse::text`] performs a lossy decode
/// on demand, replacing invalid sequences rather than rejecting them
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ProbeResponse {
    status_code: u16,
    headers: HashMap<String, Vec<u8>>,
    body: Vec<u8>,
    elapsed: Duration,
}

impl ProbeResponse {
    /// Create a [`ProbeResponse`] from a [`reqwest::blocking::Response`] and
    /// the elapsed exchange time measured by the client
    ///
    /// # Errors
    ///
    /// This function returns an error if there is a problem while reading
    /// the response body
    #[instrument(skip_all, level = "trace")]
    pub fn from_reqwest_response(
        resp: reqwest::blocking::Response,
        elapsed: Duration,
    ) -> Result<Self, ProbeError> {
        let status_code = resp.status().as_u16();

        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
            .collect();

        let body = resp.bytes().map_err(|source| {
            error!(?source, "could not read response body");
            ProbeError::ResponseReadError { source }
        })?;

        Ok(Self {
            status_code,
            headers,
            body: body.as_ref().to_vec(),
            elapsed,
        })
    }

    /// get the status code
    #[must_use]
    #[inline]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// get a reference to the headers
    #[must_use]
    #[inline]
    pub const fn headers(&self) -> &HashMap<String, Vec<u8>> {
        &self.headers
    }

    /// get a reference to the raw body
    #[must_use]
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// get the full response body as unicode, invalid sequences replaced
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// amount of time elapsed between sending the request and the arrival
    /// of the response
    #[must_use]
    #[inline]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
