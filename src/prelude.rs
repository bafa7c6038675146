//! typical usage:
//!
//! `use action_probe::prelude::*;`
pub use crate::candidates::{CandidateList, DEFAULT_ACTION_IDS};
pub use crate::client::{BlockingClient, HttpProber};
pub use crate::config::ProbeConfig;
pub use crate::error::{ProbeError, RequestErrorKind};
pub use crate::outcome::Outcome;
pub use crate::payload::ActionPayload;
pub use crate::probe::{ProbeResult, Prober};
pub use crate::request::ProbeRequest;
pub use crate::response::ProbeResponse;
