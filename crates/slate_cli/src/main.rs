//! Slate CLI
//!
//! Ask the AI service for a drawing, replay it onto a canvas, and save
//! PNG snapshots. The whiteboard without the browser.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::SlateConfig;
use slate_client::{WhiteboardClient, DEFAULT_ENDPOINT};
use slate_raster::{replay, RenderOutcome, Surface};
use slate_shapes::DrawingBatch;

#[derive(Parser)]
#[command(name = "slate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AI whiteboard CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the AI service for a drawing and save it as a PNG
    Draw {
        /// What to draw, as free text
        prompt: String,

        /// Service base URL
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Output PNG path
        #[arg(short, long, default_value = "ai-whiteboard.png")]
        output: PathBuf,
    },

    /// Replay a saved batch envelope (JSON) onto a canvas
    Render {
        /// Path to a JSON file with a `shapes` array
        input: PathBuf,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Output PNG path
        #[arg(short, long, default_value = "ai-whiteboard.png")]
        output: PathBuf,
    },

    /// Send one chat message and print the reply
    Chat {
        /// The message to send
        message: String,

        /// Service base URL
        #[arg(short, long)]
        endpoint: Option<String>,

        /// File with prior conversation to send as context
        #[arg(long)]
        context: Option<PathBuf>,
    },

    /// Write a blank white canvas
    Clear {
        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Output PNG path
        #[arg(short, long, default_value = "ai-whiteboard.png")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = SlateConfig::load_from_dir(Path::new("."))?;

    match cli.command {
        Commands::Draw {
            prompt,
            endpoint,
            width,
            height,
            output,
        } => cmd_draw(&config, &prompt, endpoint.as_deref(), width, height, &output),

        Commands::Render {
            input,
            width,
            height,
            output,
        } => cmd_render(&config, &input, width, height, &output),

        Commands::Chat {
            message,
            endpoint,
            context,
        } => cmd_chat(&config, &message, endpoint.as_deref(), context.as_deref()),

        Commands::Clear {
            width,
            height,
            output,
        } => cmd_clear(&config, width, height, &output),
    }
}

fn cmd_draw(
    config: &SlateConfig,
    prompt: &str,
    endpoint: Option<&str>,
    width: Option<u32>,
    height: Option<u32>,
    output: &Path,
) -> Result<()> {
    let endpoint = resolve_endpoint(config, endpoint);
    let (width, height) = resolve_canvas(config, width, height);

    info!("Requesting drawing from {}", endpoint);
    let client = WhiteboardClient::new(endpoint);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let batch = runtime
        .block_on(client.request_drawing(prompt, width, height))
        .context("drawing request failed (is the service running?)")?;

    if let Some(description) = &batch.description {
        info!("Service description: {}", description);
    }

    replay_and_save(&batch, width, height, output)
}

fn cmd_render(
    config: &SlateConfig,
    input: &Path,
    width: Option<u32>,
    height: Option<u32>,
    output: &Path,
) -> Result<()> {
    let (width, height) = resolve_canvas(config, width, height);

    let bytes =
        fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let batch = DrawingBatch::from_slice(&bytes)
        .with_context(|| format!("{} is not a JSON batch envelope", input.display()))?;

    replay_and_save(&batch, width, height, output)
}

fn cmd_chat(
    config: &SlateConfig,
    message: &str,
    endpoint: Option<&str>,
    context: Option<&Path>,
) -> Result<()> {
    let endpoint = resolve_endpoint(config, endpoint);
    let context = context
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        })
        .transpose()?;

    let client = WhiteboardClient::new(endpoint);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let reply = runtime
        .block_on(client.chat(message, context.as_deref()))
        .context("chat request failed (is the service running?)")?;

    println!("{}", reply.response);
    if !reply.suggestions.is_empty() {
        println!();
        println!("Follow-ups:");
        for suggestion in &reply.suggestions {
            println!("  - {}", suggestion);
        }
    }
    Ok(())
}

fn cmd_clear(
    config: &SlateConfig,
    width: Option<u32>,
    height: Option<u32>,
    output: &Path,
) -> Result<()> {
    let (width, height) = resolve_canvas(config, width, height);
    let surface = Surface::new(width, height)?;
    surface.save_png(output)?;
    info!("Wrote blank {}x{} canvas to {}", width, height, output.display());
    Ok(())
}

/// Replay a batch onto a fresh surface, log the report, write the PNG.
/// Skipped shapes are best-effort losses, never a command failure.
fn replay_and_save(batch: &DrawingBatch, width: u32, height: u32, output: &Path) -> Result<()> {
    let mut surface = Surface::new(width, height)?;
    let report = replay(&mut surface, batch);

    info!(
        "Rendered {} of {} shapes",
        report.drawn(),
        report.outcomes.len()
    );
    for (index, outcome) in report.outcomes.iter().enumerate() {
        match outcome {
            RenderOutcome::Drawn => debug!(index, "shape drawn"),
            RenderOutcome::Skipped(reason) => warn!(index, %reason, "shape skipped"),
        }
    }

    surface
        .save_png(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("Saved {}", output.display());
    Ok(())
}

fn resolve_endpoint(config: &SlateConfig, flag: Option<&str>) -> String {
    flag.map(str::to_owned)
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned())
}

fn resolve_canvas(config: &SlateConfig, width: Option<u32>, height: Option<u32>) -> (u32, u32) {
    (
        width.unwrap_or(config.canvas.width),
        height.unwrap_or(config.canvas.height),
    )
}
