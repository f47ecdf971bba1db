//! Text Avatar CLI
//!
//! Usage:
//!   text-avatar [OPTIONS] [SEED]
//!
//! Options:
//!   -o, --output <FILE>   Write the avatar to FILE (.svg or .png)
//!   -s, --size <PX>       Raster width and height
//!   -p, --palette <FILE>  Palette file (TOML format)
//!   -c, --config <FILE>   Settings file (TOML format)
//!   -h, --help            Print help

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use text_avatar::{session_from_settings, verify_source, ExportFormat, FitMode, Settings};

#[derive(Parser)]
#[command(name = "text-avatar")]
#[command(about = "Deterministic avatars derived from text")]
struct Cli {
    /// Seed text (a random 10-character seed is used if not provided)
    seed: Option<String>,

    /// Output file; the format follows the extension. Prints SVG to stdout if not provided
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format, overriding the file extension (svg or png)
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Raster width and height in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Raster fit policy (stretch or contain)
    #[arg(long)]
    fit: Option<FitMode>,

    /// Palette file (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path).unwrap_or_else(|e| {
            fail(&format!("Error loading settings '{}': {}", path.display(), e))
        }),
        None => Settings::default(),
    };
    if cli.palette.is_some() {
        settings.avatar.palette = cli.palette.clone();
    }
    if let Some(size) = cli.size {
        settings.raster.width = Some(size);
        settings.raster.height = Some(size);
    }
    if let Some(fit) = cli.fit {
        settings.raster.fit = Some(fit);
    }

    let mut session =
        session_from_settings(&settings).unwrap_or_else(|e| fail(&format!("Error: {}", e)));
    match verify_source(session.source()) {
        Ok(_) => debug!("avatar source verified"),
        Err(e) => warn!(error = %e, "avatar source verification failed"),
    }

    match &cli.seed {
        Some(text) => match session.on_seed_changed(text) {
            Ok(Some(_)) => {}
            Ok(None) => fail("Seed is empty, nothing to export"),
            Err(e) => fail(&format!("Error: {}", e)),
        },
        None => match session.on_random_requested() {
            Ok((seed, _)) => eprintln!("Seed: {}", seed),
            Err(e) => fail(&format!("Error: {}", e)),
        },
    }

    match &cli.output {
        Some(path) => {
            let format = cli
                .format
                .or_else(|| ExportFormat::from_path(path))
                .unwrap_or_else(|| {
                    fail(&format!(
                        "Cannot infer output format from '{}', use --format svg|png",
                        path.display()
                    ))
                });
            if let Err(e) = session.save_as(path, format) {
                fail(&format!("Error saving '{}': {}", path.display(), e));
            }
            eprintln!("Saved {} to {}", format.extension().to_uppercase(), path.display());
        }
        None => {
            let bytes = match cli.format.unwrap_or(ExportFormat::Svg) {
                ExportFormat::Svg => session.export_vector(),
                ExportFormat::Png if io::stdout().is_terminal() => {
                    fail("Refusing to write PNG to a terminal, use --output")
                }
                ExportFormat::Png => session.export_raster_with(session.raster_config()),
            };
            let bytes = bytes.unwrap_or_else(|e| fail(&format!("Error: {}", e)));
            if let Err(e) = io::stdout().lock().write_all(&bytes) {
                fail(&format!("Error writing to stdout: {}", e));
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "text_avatar=warn",
        1 => "text_avatar=info",
        _ => "text_avatar=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
