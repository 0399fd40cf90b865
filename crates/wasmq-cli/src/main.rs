//! wasmq - answer contract-facing chain queries against a state snapshot.

mod output;

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wasmq_core::ChainConfig;
use wasmq_keeper::{Bech32Codec, MemoryState, QueryHandler, QueryPlugins};

#[derive(Parser, Debug)]
#[command(name = "wasmq")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON snapshot of chain state to query
    #[arg(short, long)]
    state: PathBuf,

    /// Chain configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Query envelope as JSON. Read from stdin when omitted.
    #[arg(short, long)]
    request: Option<String>,

    /// Pretty-print JSON responses
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    let level = if args.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("wasmq={level}").parse()?)
        .add_directive(format!("wasmq_keeper={level}").parse()?)
        .add_directive(format!("wasmq_core={level}").parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => ChainConfig::load(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => ChainConfig::load_or_default().wrap_err("Failed to load default config")?,
    };
    tracing::debug!(
        "Chain config: bond denom {}, prefixes {}/{}",
        config.bond_denom,
        config.account_prefix,
        config.validator_prefix
    );

    let codec = Bech32Codec::from_config(&config)?;

    let snapshot = std::fs::read_to_string(&args.state)
        .wrap_err_with(|| format!("Failed to read snapshot {}", args.state.display()))?;
    let state = Arc::new(MemoryState::from_json(&snapshot, &codec, &config.bond_denom)?);
    tracing::info!("Loaded snapshot from {}", args.state.display());

    let handler = QueryHandler::new(QueryPlugins::with_defaults(
        state.clone(),
        state.clone(),
        state,
        Arc::new(codec),
    ));

    let request = match args.request {
        Some(request) => request,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("Failed to read request from stdin")?;
            buf
        }
    };

    match handler.query_json(request.trim().as_bytes()) {
        Ok(bytes) => {
            println!("{}", output::render_response(&bytes, args.pretty));
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Query failed: {}", e);
            println!("{}", output::render_error(&e, args.pretty));
            std::process::exit(2);
        }
    }
}
