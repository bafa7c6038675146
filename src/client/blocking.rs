use std::time::Instant;

use reqwest::Method;
use tracing::instrument;

use super::utils::reqwest_to_probe_error;
use super::HttpProber;
use crate::error::ProbeError;
use crate::request::{ProbeRequest, ACTION_ID_HEADER, COMPONENT_STREAM_ACCEPT};
use crate::response::ProbeResponse;

/// concrete implementation of [`HttpProber`] using an underlying
/// [`reqwest::blocking::Client`]
#[derive(Clone, Default, Debug)]
pub struct BlockingClient {
    client: reqwest::blocking::Client,
}

impl HttpProber for BlockingClient {
    type ClientType = reqwest::blocking::Client;

    fn with_client(client: Self::ClientType) -> Self {
        Self { client }
    }

    /// use the underlying [`reqwest::blocking::Client`] to send a
    /// [`ProbeRequest`] in order to receive its [`ProbeResponse`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use reqwest;
    /// # use action_probe::client::{BlockingClient, HttpProber};
    /// # use action_probe::config::ProbeConfig;
    /// # use action_probe::payload::ActionPayload;
    /// # use action_probe::request::ProbeRequest;
    /// use httpmock::prelude::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let server = MockServer::start();
    /// let mocked = server.mock(|when, then| {
    ///     when.method(POST)
    ///         .path("/doctest");
    ///     then.status(200);
    /// });
    ///
    /// let config = ProbeConfig::new(&server.url("/doctest"))?;
    /// let payload = ActionPayload::build(config.command())?;
    /// let request = ProbeRequest::new(&config, "", payload);
    ///
    /// // bring your own client
    /// let req_client = reqwest::blocking::Client::builder().build()?;
    ///
    /// let client = BlockingClient::with_client(req_client);
    ///
    /// let response = client.send(&request)?;
    ///
    /// assert_eq!(mocked.hits(), 1);
    /// assert_eq!(response.status_code(), 200);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// This method fails if there was an error while sending the request, a
    /// redirect loop was detected, the redirect limit was exhausted, or the
    /// exchange exceeded the request's timeout ceiling.
    #[instrument(skip_all, level = "trace")]
    fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let reqwest_request = self.build_request(request)?;

        // start timer for the request
        let now = Instant::now();

        // fire ze missiles
        let reqwest_response = self
            .client
            .execute(reqwest_request)
            .map_err(reqwest_to_probe_error)?;

        ProbeResponse::from_reqwest_response(reqwest_response, now.elapsed())
    }
}

impl BlockingClient {
    /// restructure a [`ProbeRequest`] into one that can be sent over the wire
    ///
    /// this is because the underlying [`reqwest`] client requires its own
    /// request type to execute the http request. The method is always POST,
    /// the content type is bound to the payload's boundary, and the action
    /// identifier header is attached only when the request carries one.
    #[instrument(skip_all, level = "trace")]
    fn build_request(
        &self,
        request: &ProbeRequest,
    ) -> Result<reqwest::blocking::Request, ProbeError> {
        let mut builder = self
            .client
            .request(Method::POST, request.url().clone())
            .timeout(request.timeout())
            .header("Content-Type", request.payload().content_type())
            .header("Accept", COMPONENT_STREAM_ACCEPT)
            .header("User-Agent", request.user_agent())
            .body(request.payload().body().to_vec());

        if let Some(action_id) = request.action_id() {
            builder = builder.header(ACTION_ID_HEADER, action_id);
        }

        builder.build().map_err(reqwest_to_probe_error)
    }
}
