//! Scoreboard - Application Entry Point
//!
//! Reads contest commands from stdin (or `SCOREBOARD_INPUT`) and writes the
//! protocol to stdout. Logs go to stderr.

use tokio::io::{self, AsyncBufRead, BufReader, BufWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoreboard::{
    config::{Config, LogFormat},
    services::Scoreboard,
    session,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }

    tracing::info!(
        max_problems = config.contest.max_problems,
        "Starting scoreboard..."
    );

    let input: Box<dyn AsyncBufRead + Unpin> = match &config.input.path {
        Some(path) => {
            tracing::info!("Reading commands from {}", path.display());
            let file = tokio::fs::File::open(path).await?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut board = Scoreboard::new(config.contest.max_problems);
    let mut output = BufWriter::new(io::stdout());
    session::run(&mut board, input, &mut output).await?;

    Ok(())
}
