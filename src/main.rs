use clap::Parser;
use loan_reminder::application::dispatcher::BatchDispatcher;
use loan_reminder::config::Config;
use loan_reminder::domain::ports::MessageRelayBox;
use loan_reminder::infrastructure::in_memory::InMemoryRelay;
use loan_reminder::infrastructure::wasender::WaSenderRelay;
use loan_reminder::interfaces::csv::outcome_writer::OutcomeWriter;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ledger to dispatch (.xlsx, .xls, .ods or .csv). Defaults to SAVE_PATH.
    ledger: Option<PathBuf>,

    /// Log every reminder instead of sending it to the relay.
    #[arg(long)]
    dry_run: bool,

    /// Pause between reminders in milliseconds (overrides DISPATCH_PACING_MS).
    #[arg(long)]
    pacing_ms: Option<u64>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::from_env().into_diagnostic()?;
    if let Some(ms) = cli.pacing_ms {
        config.pacing = Duration::from_millis(ms);
    }
    let ledger = cli.ledger.unwrap_or_else(|| config.save_path.clone());

    let relay: MessageRelayBox = if cli.dry_run {
        info!("Dry run: reminders stay in memory");
        Box::new(InMemoryRelay::new())
    } else {
        Box::new(WaSenderRelay::new(&config).into_diagnostic()?)
    };

    let dispatcher = BatchDispatcher::new(&config, relay);
    let result = dispatcher.dispatch_file(&ledger).await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    writer.write_outcomes(&result.outcomes).into_diagnostic()?;

    eprintln!(
        "done: {} sent, {} failed, {} skipped",
        result.succeeded, result.failed, result.skipped
    );

    Ok(())
}
