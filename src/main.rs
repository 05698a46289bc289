use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod border;
mod config;
mod error;
mod image_io;
mod padding;
mod report;
mod runner;

#[derive(Parser, Debug)]
#[command(name = "border-trim")]
#[command(about = "Crop uniform borders from icons and pad them with transparent margins")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Print the summary (or error) as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crop a border matching the top-left pixel color (transparent pixels count as border)
    Trim {
        /// Image to crop
        input: PathBuf,

        /// Where to write the result (defaults to overwriting the input)
        output: Option<PathBuf>,

        /// Per-channel color tolerance (0-255)
        #[arg(default_value_t = border::DEFAULT_TOLERANCE)]
        tolerance: u8,
    },

    /// Crop a near-white border
    TrimWhite {
        /// Image to crop
        input: PathBuf,

        /// Where to write the result (defaults to <name>_no_border.<ext>)
        output: Option<PathBuf>,

        /// Channels at or above this value count as white (0-255)
        #[arg(default_value_t = border::DEFAULT_WHITE_THRESHOLD)]
        threshold: u8,
    },

    /// Add a transparent margin around an icon
    Pad {
        /// Icon to pad
        input: PathBuf,

        /// Where to write the PNG result (defaults to <name>_padded.png)
        output: Option<PathBuf>,

        /// Padding on each side, as a percentage of the icon width (0-1000)
        #[arg(
            default_value_t = padding::DEFAULT_PADDING_PERCENT,
            value_parser = clap::value_parser!(u32).range(0..=1000)
        )]
        percent: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the summary
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    let config = config::Config::from(args);

    tracing::debug!("border-trim v{} {:?}", env!("CARGO_PKG_VERSION"), config);

    match runner::run(&config) {
        Ok(()) => Ok(()),
        Err(err) if config.json => {
            let body = error::ErrorResponse::from(&err);
            eprintln!("{}", serde_json::to_string(&body)?);
            std::process::exit(1);
        }
        Err(err) => Err(err),
    }
}
