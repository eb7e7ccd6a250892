//! ASCII Raytracer - a mirror ball over a checkerboard, drawn in the terminal
//!
//! Usage:
//!   ascii_checker_rt                          - 250x250, every pixel
//!   ascii_checker_rt -W 80 -H 80 -p 2         - 40x40 characters
//!   ascii_checker_rt --config render.yaml     - read sizes from a file

use ascii_checker_rt::timing::{format_elapsed, timed};
use ascii_checker_rt::{RenderConfig, Renderer};
use clap::{Parser, ValueEnum};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
#[command(name = "ascii_checker_rt")]
#[command(version = "0.1.0")]
#[command(about = "Ray trace a mirror sphere over a checkerboard as ASCII art")]
struct Cli {
    /// Path to a YAML config file (defaults to ./render.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(short = 'W', long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Image height in pixels
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Sample every Nth pixel in both directions
    #[arg(short, long, allow_negative_numbers = true)]
    pixel_size: Option<i64>,

    /// Shade rows on a single thread
    #[arg(long)]
    sequential: bool,

    /// Don't print the execution time after the picture
    #[arg(long)]
    no_timing: bool,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level_filter = if let Some(level) = cli.log_level {
        level.to_string()
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
            .to_string()
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&level_filter))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config_or_exit(&cli);

    let renderer = match Renderer::new(config) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let (result, elapsed) = timed(|| renderer.draw(&mut out));
    result?;

    if !cli.no_timing {
        writeln!(out, "{}", format_elapsed(elapsed))?;
    }
    out.flush()?;

    Ok(())
}

/// Load the config file and apply CLI overrides, or exit with an error
fn load_config_or_exit(cli: &Cli) -> RenderConfig {
    let mut config = match RenderConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(pixel_size) = cli.pixel_size {
        config.pixel_size = pixel_size;
    }
    if cli.sequential {
        config.parallel = false;
    }

    let (cols, rows) = config.output_size();
    tracing::debug!(?config, cols, rows, "Effective configuration");
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "ascii_checker_rt",
            "--config",
            "/nonexistent/never-read.yaml",
            "-W",
            "40",
            "--height",
            "30",
            "-p",
            "2",
            "--sequential",
        ]);
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.height, Some(30));
        assert_eq!(cli.pixel_size, Some(2));
        assert!(cli.sequential);
        assert!(!cli.no_timing);
    }

    #[test]
    fn test_cli_accepts_negative_for_validation() {
        let cli = Cli::parse_from(["ascii_checker_rt", "--width", "-5"]);
        assert_eq!(cli.width, Some(-5));
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = Renderer::new(RenderConfig::new(80, 48, 1)).unwrap();
        assert_eq!(renderer.to_ascii().lines().count(), 48);
    }
}
