//! Blocking http client trait, with an implementation using [`reqwest`]
mod blocking;
mod utils;

pub use self::blocking::BlockingClient;

use crate::error::ProbeError;
use crate::request::ProbeRequest;
use crate::response::ProbeResponse;

/// trait for clients able to deliver a single [`ProbeRequest`]
///
/// the probe is strictly sequential, so one blocking `send` is the whole
/// client surface; swapping the transport means swapping the implementor
pub trait HttpProber {
    /// which concrete client will be used
    ///
    /// see [`BlockingClient`] for an example
    type ClientType;

    /// create a new client, using [`HttpProber::ClientType`] as the base
    fn with_client(client: Self::ClientType) -> Self;

    /// use the underlying [`HttpProber::ClientType`] to send a
    /// [`ProbeRequest`] in order to receive its [`ProbeResponse`]
    ///
    /// # Note
    ///
    /// This is the most likely place to populate the `elapsed` field of the
    /// resulting [`ProbeResponse`]
    ///
    /// # Errors
    ///
    /// Implementors of this function have the option to error when things go awry
    fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError>;
}
