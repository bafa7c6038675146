//! Classified terminal results of a single probe attempt
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ProbeError;
use crate::response::ProbeResponse;

/// maximum number of characters of decoded response body preserved in an
/// outcome's preview, in every branch
pub const PREVIEW_CHARS: usize = 200;

/// one of exactly three terminal results of a candidate attempt
///
/// there is no intermediate state: a probe attempt either completed with a
/// transport-successful status, completed with an HTTP error status, or
/// failed below the HTTP layer entirely
///
/// a `Success` only means the HTTP exchange went through; whether the
/// embedded command actually ran is judged by a human reading the preview
/// for command-output-shaped text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Outcome {
    /// the exchange completed and the transport considers the status successful
    Success {
        /// http status code of the response
        status: u16,

        /// first [`PREVIEW_CHARS`] characters of the lossy-decoded body
        preview: String,
    },

    /// the exchange completed but the server answered with an error status
    HttpFailure {
        /// http status code of the response
        status: u16,

        /// first [`PREVIEW_CHARS`] characters of the lossy-decoded error body
        preview: String,
    },

    /// the exchange failed below the http response-parsing layer
    /// (connection, dns, timeout, malformed response)
    TransportFailure {
        /// stringified description of the underlying error
        message: String,
    },
}

impl Outcome {
    /// classify the result of one blocking exchange
    ///
    /// exhaustive, first match wins: a response with a status under 400 is a
    /// [`Outcome::Success`], a response with a status of 400 or above is an
    /// [`Outcome::HttpFailure`], and any transport fault is an
    /// [`Outcome::TransportFailure`]
    #[must_use]
    pub fn from_result(result: Result<ProbeResponse, ProbeError>) -> Self {
        match result {
            Ok(response) => {
                let preview = truncated(&response.text());
                let status = response.status_code();

                if status < 400 {
                    Self::Success { status, preview }
                } else {
                    Self::HttpFailure { status, preview }
                }
            }
            Err(error) => Self::TransportFailure {
                message: error.to_string(),
            },
        }
    }

    /// returns true if the exchange completed with a transport-successful status
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Success { status, preview } => write!(f, "✓ Status {status}: {preview}"),
            Self::HttpFailure { status, preview } => write!(f, "✗ HTTP {status}: {preview}"),
            Self::TransportFailure { message } => write!(f, "✗ Error: {message}"),
        }
    }
}

/// internal helper: first [`PREVIEW_CHARS`] characters, measured post-decode
fn truncated(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
