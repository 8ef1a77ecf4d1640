use anyhow::{Context, Result};
use chrono::DateTime;
use feedstream::{FeedStream, Shutdown, VecSource};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use uof::{
    capture, init_tracing, replay::sample_events, FeedConfig, FeedDecoder, MarketCatalog,
    ReplayClient, Urn, UrnType,
};
use uof_feed::bin_common::{load_config_from_env, parse_args, ReplayArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ReplayArgs::parse(parse_args())?;

    if args.show {
        for sample in sample_events() {
            println!("{:<27} {}", sample.urn, sample.description);
        }
        return Ok(());
    }

    // Load config first (before logging is initialized)
    let config = load_config_from_env()?;
    init_tracing(&config.log_level);
    config.log();

    print_banner("UOF replay");

    if args.controls_replay() {
        control_replay(&config, &args).await?;
    }

    if let Some(dir) = &args.capture_dir {
        decode_captured(&config, dir).await?;
    } else if !args.controls_replay() {
        warn!("Nothing to do\n{}", ReplayArgs::USAGE);
    }

    print_shutdown("UOF replay");
    Ok(())
}

async fn control_replay(config: &FeedConfig, args: &ReplayArgs) -> Result<()> {
    let token = config.require_token()?;
    let client = ReplayClient::from_config(&config.replay, token);
    let speed = args.speed.unwrap_or(config.replay.speed);
    let max_delay = args.max_delay.unwrap_or(config.replay.max_delay);

    if let Some(event_id) = args.event {
        let event = Urn::new(UrnType::Match, i64::from(event_id));
        client.start_event(&event, speed, max_delay).await?;
    }

    if let Some(scenario_id) = args.scenario {
        client.start_scenario(scenario_id, speed, max_delay).await?;
    }

    if args.sample {
        client.reset().await?;
        for sample in sample_events() {
            client.add(&sample.urn()?).await?;
        }
        client.play(speed, max_delay, false).await?;
        info!("Queued {} sample events", sample_events().len());
    }

    Ok(())
}

async fn decode_captured(config: &FeedConfig, dir: &Path) -> Result<()> {
    let envelopes =
        capture::load_dir(dir).with_context(|| format!("reading captures in {}", dir.display()))?;
    info!(count = envelopes.len(), dir = %dir.display(), "Decoding captured envelopes");

    let catalog = Arc::new(MarketCatalog::new(config.catalog.player_markets.iter().copied()));
    let shutdown = Shutdown::new();
    shutdown.spawn_signal_handler();
    info!("Press Ctrl+C to stop");

    let (stream, mut rx) = FeedStream::spawn(
        VecSource::new(envelopes),
        FeedDecoder::new(catalog),
        config.stream.clone(),
        shutdown,
    )?;

    while let Some(delivery) = rx.recv().await {
        match delivery {
            Ok(decoded) => {
                let at = DateTime::from_timestamp_millis(decoded.timestamp)
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_default();
                info!(
                    kind = %decoded.message.kind(),
                    routing_key = %decoded.routing_key,
                    at = %at,
                    "{}",
                    serde_json::to_string(&decoded.message)?
                );
            }
            Err(failure) => warn!("{}", failure),
        }
    }

    let metrics = stream.metrics();
    stream.finish().await?;
    info!(
        received = metrics.envelopes_received,
        delivered = metrics.messages_delivered,
        failures = metrics.decode_failures,
        "Capture decoded"
    );
    Ok(())
}

fn print_banner(name: &str) {
    info!("");
    info!("========================================");
    info!("Starting {}", name);
    info!("========================================");
    info!("");
}

fn print_shutdown(name: &str) {
    info!("");
    info!("========================================");
    info!("{} stopped gracefully", name);
    info!("========================================");
}
