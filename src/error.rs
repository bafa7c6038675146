//! Custom error-type definitions
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::ParseError;

/// primary error-type for the action-probe library
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProbeError {
    /// Represents a failure to parse the given string into a [`url::Url`](https://docs.rs/url/latest/url/struct.Url.html).
    #[error("The url `{url}` is invalid and couldn't be parsed.")]
    InvalidUrl {
        /// underlying source error-type
        source: ParseError,

        /// the url that couldn't be parsed
        url: String,
    },

    /// Represents an empty [`CandidateList`], which isn't allowed
    ///
    /// [`CandidateList`]: crate::candidates::CandidateList
    #[error("No action identifiers were found in the CandidateList")]
    EmptyCandidateList,

    /// Represents a failure to encode the action descriptor as JSON
    #[error("Could not encode the action descriptor as JSON")]
    JsonEncodeError {
        /// underlying source error-type
        #[from]
        source: serde_json::Error,
    },

    /// Represents a failure to build the underlying HTTP client
    #[error("Could not build the underlying HTTP client")]
    ClientBuildError {
        /// underlying source error-type
        source: reqwest::Error,
    },

    /// Represents a failure to read the body of a [`reqwest::blocking::Response`] object
    #[error("Could not read the response body")]
    ResponseReadError {
        /// underlying source error-type
        #[from]
        source: reqwest::Error,
    },

    /// Represents a failure encountered during sending a request / receiving a response
    #[error("An error occurred while sending the request: {kind:?} {message}")]
    RequestError {
        /// what category of error occurred
        kind: RequestErrorKind,

        /// the underlying error message
        message: String,
    },
}

/// Used to differentiate between different types of errors that occur when making requests.
///
/// That differentiation is then used to classify a failed attempt into a transport-level
/// [`Outcome`]
///
/// [`Outcome`]: crate::outcome::Outcome
#[derive(Serialize, Deserialize, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[non_exhaustive]
pub enum RequestErrorKind {
    /// Represents a failure to read a response body
    Body(Option<u16>),

    /// Represents a failure during client connection to target
    Connect(Option<u16>),

    /// Represents a failure to decode a response body
    Decode(Option<u16>),

    /// Represents a failure to related to redirection, i.e. too many redirects
    Redirect(Option<u16>),

    /// Represents a failure related to the request
    Request(Option<u16>),

    /// Represents a timeout during the request
    Timeout(Option<u16>),

    /// Represents an unexpected error
    #[default]
    Unknown,
}
