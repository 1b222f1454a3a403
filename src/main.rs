use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkgray::models::{ConfigOverrides, ConvertConfig, Dimensions, NibbleLayout, RotateMode, TileGrid};
use inkgray::services::ConvertService;

#[derive(Parser)]
#[command(name = "inkgray")]
#[command(about = "Convert images to 4-bit grayscale PNGs for e-paper panels")]
struct Cli {
    /// Input image (any format the image crate can decode)
    input: PathBuf,

    /// Output PNG path (tiles are written as <stem>_<col>_<row>.png)
    output: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// When to rotate the image 90 degrees clockwise
    #[arg(long, value_enum)]
    rotate: Option<RotateMode>,

    /// Resize to exact dimensions before conversion (e.g. 1872x1404)
    #[arg(long)]
    resize: Option<Dimensions>,

    /// Split the output into COLUMNSxROWS equal tiles (e.g. 2x4)
    #[arg(long)]
    tiles: Option<TileGrid>,

    /// Nibble placement of each pixel pair
    #[arg(long, value_enum)]
    nibble_order: Option<NibbleLayout>,

    /// Re-compress the output with oxipng
    #[arg(long)]
    optimize: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "inkgray=debug"
    } else {
        "inkgray=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = match &cli.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    let config = config.with_overrides(ConfigOverrides {
        rotate: cli.rotate,
        resize: cli.resize,
        tiles: cli.tiles,
        nibble_order: cli.nibble_order,
        optimize: cli.optimize,
    });

    let service = ConvertService::new(config);
    match service.convert(&cli.input, &cli.output) {
        Ok(files) => {
            for file in &files {
                println!(
                    "Wrote {} ({}x{}, {} bytes)",
                    file.path.display(),
                    file.width,
                    file.height,
                    file.bytes
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_decode_failure() => {
            eprintln!("inkgray: cannot read {}: {e}", cli.input.display());
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e.into()),
    }
}
