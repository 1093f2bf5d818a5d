#![deny(unsafe_code)]
//! CLI binary for the geometriq generative-art toolkit.
//!
//! Subcommands:
//! - `render <sketch> <dimensions>`: draw a sketch, write SVG or a call log
//! - `list`: print available sketches, contrast themes and device sizes

mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use geometriq_backends::{RecordingSurface, SvgSurface};
use geometriq_core::recipe::{parse_dimensions, DEVICES};
use geometriq_core::{Contrast, Recipe};
use geometriq_sketches::{Sketch, SketchKind};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

#[derive(Parser)]
#[command(name = "geometriq", about = "Geometric generative art")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a sketch and write the result.
    Render {
        /// Sketch name (e.g. "hex-bloom").
        sketch: String,

        /// WIDTHxHEIGHT, WIDTH_HEIGHT, or a device name.
        dimensions: String,

        /// Contrast theme (dark, light, black, white, clear).
        #[arg(short, long, default_value = "light")]
        contrast: String,

        /// Seed for deterministic output. Defaults to the current time.
        #[arg(long, env = "GEOMETRIQ_SEED")]
        seed: Option<u64>,

        /// Sketch parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path. Defaults to `<sketch>_<w>x<h>_<seed>.<ext>`.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What to write.
        #[arg(short, long, value_enum, default_value_t = Format::Svg)]
        format: Format,
    },
    /// List available sketches, contrast themes and devices.
    List,
}

/// Output formats for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// An SVG document.
    Svg,
    /// One `canvas.<call>(...)` line per drawing call.
    Log,
    /// The recipe and every drawing call as JSON.
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Log => "log",
            Format::Json => "json",
        }
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

fn default_output(recipe: &Recipe, format: Format) -> PathBuf {
    PathBuf::from(format!("{}.{}", recipe.output_name(), format.extension()))
}

/// Renders `recipe` in `format` and writes it to `output`.
fn write_render(recipe: &Recipe, format: Format, output: &Path) -> Result<SketchKind, CliError> {
    let sketch = match format {
        Format::Svg => {
            let mut surface = SvgSurface::new(recipe.width, recipe.height).writing_to(output);
            geometriq_sketches::render(recipe, &mut surface)?
        }
        Format::Log => {
            let mut surface = RecordingSurface::new(recipe.width, recipe.height).writing_to(output);
            geometriq_sketches::render(recipe, &mut surface)?
        }
        Format::Json => {
            let mut surface = RecordingSurface::new(recipe.width, recipe.height);
            let sketch = geometriq_sketches::render(recipe, &mut surface)?;
            let doc = serde_json::json!({
                "recipe": recipe,
                "calls": surface.calls(),
            });
            std::fs::write(output, serde_json::to_string_pretty(&doc)?)
                .map_err(|e| CliError::Io(format!("{}: {e}", output.display())))?;
            sketch
        }
    };
    Ok(sketch)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let sketches = SketchKind::list_sketches();
            let contrasts: Vec<&str> = Contrast::ALL.iter().map(|c| c.name()).collect();
            if cli.json {
                let devices: Vec<_> = DEVICES
                    .iter()
                    .map(|(name, w, h)| serde_json::json!({"name": name, "width": w, "height": h}))
                    .collect();
                let info = serde_json::json!({
                    "sketches": sketches,
                    "contrasts": contrasts,
                    "devices": devices,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sketches:");
                for name in sketches {
                    println!("  {name}");
                }
                println!("Contrasts:");
                println!("  {}", contrasts.join(", "));
                println!("Devices:");
                for (name, w, h) in DEVICES {
                    println!("  {name} ({w}x{h})");
                }
            }
        }
        Command::Render {
            sketch,
            dimensions,
            contrast,
            seed,
            params,
            output,
            format,
        } => {
            let (width, height) = parse_dimensions(&dimensions)?;
            let contrast = Contrast::from_name(&contrast)?;
            let params: serde_json::Value =
                serde_json::from_str(&params).map_err(CliError::params)?;

            let mut recipe = Recipe::new(&sketch, width, height, seed.unwrap_or_else(unix_seconds));
            recipe.contrast = contrast;
            recipe.params = params;

            let output = output.unwrap_or_else(|| default_output(&recipe, format));
            let drawn = write_render(&recipe, format, &output)?;
            debug!(sketch = %recipe.sketch, seed = recipe.seed, output = %output.display(), "rendered");

            if cli.json {
                let info = serde_json::json!({
                    "sketch": recipe.sketch,
                    "width": recipe.width,
                    "height": recipe.height,
                    "contrast": recipe.contrast,
                    "seed": recipe.seed,
                    "params": drawn.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}, {}, seed {}) -> {}",
                    recipe.sketch,
                    recipe.width,
                    recipe.height,
                    recipe.contrast.name(),
                    recipe.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
