//! Sequential probe driver: one blocking exchange per candidate identifier
use serde::Serialize;
use tracing::{instrument, warn};

use crate::candidates::CandidateList;
use crate::client::HttpProber;
use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::outcome::Outcome;
use crate::payload::ActionPayload;
use crate::request::ProbeRequest;

/// outcome of one candidate attempt, paired with the identifier that
/// produced it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct ProbeResult {
    /// the candidate action identifier that was tried (possibly empty)
    pub action_id: String,

    /// the classified terminal result of the attempt
    pub outcome: Outcome,
}

/// A prober that operates in serial, meaning that it attempts a single
/// candidate at a time
///
/// each attempt is a single atomic exchange with exactly one of three
/// terminal outcomes; individual failures never abort the run, so every
/// candidate in the list is always attempted
#[derive(Debug, Clone)]
pub struct Prober<C>
where
    C: HttpProber,
{
    client: C,
    config: ProbeConfig,
}

impl<C> Prober<C>
where
    C: HttpProber,
{
    /// create a new prober from a client and a run configuration
    pub const fn new(client: C, config: ProbeConfig) -> Self {
        Self { client, config }
    }

    /// get a reference to the run configuration
    #[must_use]
    #[inline]
    pub const fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// attempt a single candidate identifier
    ///
    /// transport and http faults are folded into the returned
    /// [`ProbeResult`]; the only hard error is a failure to render the
    /// payload itself
    ///
    /// # Errors
    ///
    /// returns an error if the action descriptor cannot be serialized
    #[instrument(skip(self), level = "trace")]
    pub fn probe_one(&self, action_id: &str) -> Result<ProbeResult, ProbeError> {
        let payload = ActionPayload::build(self.config.command())?;
        let request = ProbeRequest::new(&self.config, action_id, payload);

        let outcome = Outcome::from_result(self.client.send(&request));

        if let Outcome::TransportFailure { message } = &outcome {
            warn!(%action_id, %message, "attempt failed below the http layer");
        }

        Ok(ProbeResult {
            action_id: action_id.to_string(),
            outcome,
        })
    }

    /// attempt every candidate in order, one blocking exchange at a time
    ///
    /// the returned results preserve candidate order; a candidate that
    /// failed at the transport layer is reported like any other and the
    /// loop continues to the next one
    ///
    /// # Errors
    ///
    /// returns an error if the action descriptor cannot be serialized
    #[instrument(skip_all, name = "probe-loop", level = "trace")]
    pub fn run(&self, candidates: &CandidateList) -> Result<Vec<ProbeResult>, ProbeError> {
        let mut results = Vec::with_capacity(candidates.len());

        for action_id in candidates {
            results.push(self.probe_one(action_id)?);
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::BlockingClient;
    use crate::request::ACTION_ID_HEADER;

    use httpmock::prelude::*;

    /// every candidate is attempted in order, and a failing candidate does
    /// not stop later ones from being tried
    #[test]
    fn run_attempts_every_candidate_in_order() {
        let srv = MockServer::start();

        let good = srv.mock(|when, then| {
            when.method(POST)
                .path("/probe")
                .header(ACTION_ID_HEADER, "good");
            then.status(200).body("root\n");
        });

        let fallback = srv.mock(|when, then| {
            when.method(POST).path("/probe");
            then.status(500).body("Internal Server Error");
        });

        let config = ProbeConfig::new(&srv.url("/probe")).unwrap();
        let client = BlockingClient::with_client(reqwest::blocking::Client::new());
        let prober = Prober::new(client, config);

        let candidates = CandidateList::new()
            .candidate("bad")
            .candidate("good")
            .candidate("")
            .build()
            .unwrap();

        let results = prober.run(&candidates).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].action_id, "bad");
        assert!(!results[0].outcome.is_success());
        assert!(results[1].outcome.is_success());
        assert!(!results[2].outcome.is_success());

        good.assert_hits(1);
        fallback.assert_hits(2);
    }

    /// a candidate that cannot even connect still yields a reported result
    #[test]
    fn unreachable_target_still_reports_each_candidate() {
        let config = ProbeConfig::new("http://127.0.0.1:1/probe").unwrap();
        let client = BlockingClient::with_client(reqwest::blocking::Client::new());
        let prober = Prober::new(client, config);

        let candidates = CandidateList::default();

        let results = prober.run(&candidates).unwrap();

        assert_eq!(results.len(), candidates.len());
        for result in &results {
            assert!(matches!(
                result.outcome,
                Outcome::TransportFailure { .. }
            ));
        }
    }
}
