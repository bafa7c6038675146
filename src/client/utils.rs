use crate::error::{ProbeError, RequestErrorKind};
use tracing::{error, instrument};

/// internal helper to convert [`reqwest::Error`] to [`ProbeError`]
#[allow(clippy::needless_pass_by_value)]
#[instrument(skip_all, level = "trace")]
pub(super) fn reqwest_to_probe_error(source: reqwest::Error) -> ProbeError {
    let status = source.status().map(|status_code| status_code.as_u16());

    let kind = if source.is_body() {
        RequestErrorKind::Body(status)
    } else if source.is_connect() {
        // connect is a more specific error than a request error and both
        // can be true at the same time; check it first
        RequestErrorKind::Connect(status)
    } else if source.is_decode() {
        RequestErrorKind::Decode(status)
    } else if source.is_redirect() {
        RequestErrorKind::Redirect(status)
    } else if source.is_timeout() {
        // same specificity caveat as connect; keep ahead of is_request
        RequestErrorKind::Timeout(status)
    } else if source.is_request() {
        RequestErrorKind::Request(status)
    } else {
        RequestErrorKind::Unknown
    };

    error!(?kind, "error occurred while sending request: {}", source);

    ProbeError::RequestError {
        kind,
        message: source.to_string(),
    }
}
