use blockmotion::io::{load_gray_image, save_gray_image};
use blockmotion::lowlevel::{load_pgm_with, save_pgm};
use blockmotion::{
    BodyPolicy, DecodeOptions, Estimate, IntensityHistogram, MotionEstimator, MotionResult,
    OwnedImage, SearchConfig, SearchRadius,
};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Block-matching motion estimation for grayscale frames")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Print the config JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long, global = true)]
    trace: bool,
    #[command(subcommand)]
    command: Option<Command>,
    /// Motion arguments used when no subcommand is given.
    #[command(flatten)]
    motion: MotionArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the movement vector of one block (default).
    Motion(MotionArgs),
    /// Print the 16-group intensity histogram of an image.
    Histogram(HistogramArgs),
    /// Write a synthetic reference/shifted frame pair.
    Synth(SynthArgs),
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Zero-fill a truncated pixel body instead of failing.
    #[arg(long)]
    allow_truncated: bool,
    /// Decode through the `image` crate (PNG, PNM) instead of the raw reader.
    #[arg(long)]
    image_io: bool,
}

#[derive(Args, Debug)]
struct MotionArgs {
    /// Row-major index of the reference block.
    #[arg(default_value_t = 0)]
    block_index: usize,
    /// Reference frame.
    #[arg(default_value = "lenna.pgm")]
    reference: PathBuf,
    /// Later frame to search in.
    #[arg(default_value = "lenna1.pgm")]
    interesting: PathBuf,
    /// JSON search config; missing fields keep their defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Score map rows in parallel.
    #[arg(long)]
    parallel: bool,
    /// Print vector, score and window as JSON.
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    decode: DecodeArgs,
}

#[derive(Args, Debug)]
struct HistogramArgs {
    /// Image to analyse.
    #[arg(default_value = "lenna.pgm")]
    image: PathBuf,
    #[command(flatten)]
    decode: DecodeArgs,
}

#[derive(Args, Debug)]
struct SynthArgs {
    /// Output path of the reference frame; `.pgm` is written raw, other
    /// extensions go through the `image` crate.
    reference: PathBuf,
    /// Output path of the shifted frame.
    interesting: PathBuf,
    #[arg(long, default_value_t = 128)]
    width: usize,
    #[arg(long, default_value_t = 128)]
    height: usize,
    /// Horizontal shift applied to the second frame.
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    dx: i64,
    /// Vertical shift applied to the second frame.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    dy: i64,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SearchConfigJson {
    block_width: usize,
    block_height: usize,
    radius_left: usize,
    radius_right: usize,
    radius_up: usize,
    radius_down: usize,
    parallel: bool,
}

impl Default for SearchConfigJson {
    fn default() -> Self {
        let cfg = SearchConfig::default();
        Self {
            block_width: cfg.block_width,
            block_height: cfg.block_height,
            radius_left: cfg.radius.left,
            radius_right: cfg.radius.right,
            radius_up: cfg.radius.up,
            radius_down: cfg.radius.down,
            parallel: cfg.parallel,
        }
    }
}

impl From<SearchConfigJson> for SearchConfig {
    fn from(value: SearchConfigJson) -> Self {
        Self {
            block_width: value.block_width,
            block_height: value.block_height,
            radius: SearchRadius {
                left: value.radius_left,
                right: value.radius_right,
                up: value.radius_up,
                down: value.radius_down,
            },
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Serialize)]
struct MotionRecord {
    dx: i64,
    dy: i64,
    score: f64,
    origin_x: usize,
    origin_y: usize,
    map_width: usize,
    map_height: usize,
    center_x: usize,
    center_y: usize,
}

impl From<&Estimate> for MotionRecord {
    fn from(value: &Estimate) -> Self {
        Self {
            dx: value.vector.dx,
            dy: value.vector.dy,
            score: value.score,
            origin_x: value.window.origin_x,
            origin_y: value.window.origin_y,
            map_width: value.map.width(),
            map_height: value.map.height(),
            center_x: value.map.center_x(),
            center_y: value.map.center_y(),
        }
    }
}

fn load_frame(path: &Path, args: &DecodeArgs) -> MotionResult<OwnedImage> {
    if args.image_io {
        return load_gray_image(path);
    }
    let body = if args.allow_truncated {
        BodyPolicy::ZeroFill
    } else {
        BodyPolicy::Strict
    };
    load_pgm_with(path, DecodeOptions { body })
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let text = fs::read_to_string(path)?;
    let cfg: SearchConfigJson = serde_json::from_str(&text)?;
    Ok(cfg.into())
}

fn run_motion(args: MotionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = load_config(args.config.as_deref())?;
    cfg.parallel |= args.parallel;

    let reference = load_frame(&args.reference, &args.decode)?;
    let interesting = load_frame(&args.interesting, &args.decode)?;
    tracing::info!(
        width = reference.width(),
        height = reference.height(),
        block_index = args.block_index,
        "frames loaded"
    );

    let estimator = MotionEstimator::new().with_config(cfg);
    let estimate =
        estimator.estimate_full(reference.view(), interesting.view(), args.block_index)?;

    if args.json {
        let json = serde_json::to_string_pretty(&MotionRecord::from(&estimate))?;
        println!("{json}");
    } else {
        println!("{}", estimate.vector);
    }
    Ok(())
}

fn run_histogram(args: HistogramArgs) -> Result<(), Box<dyn std::error::Error>> {
    let image = load_frame(&args.image, &args.decode)?;
    print!("{}", IntensityHistogram::from_view(image.view()));
    Ok(())
}

/// Deterministic texture with enough local variation for unique matches.
fn texture(x: i64, y: i64) -> u8 {
    (((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF) as u8
}

fn run_synth(args: SynthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let reference = OwnedImage::from_fn(args.width, args.height, |x, y| {
        texture(x as i64, y as i64)
    })?;
    // Content moves by (dx, dy): the new frame at p shows the old frame at p - d.
    let interesting = OwnedImage::from_fn(args.width, args.height, |x, y| {
        texture(x as i64 - args.dx, y as i64 - args.dy)
    })?;
    save_frame(&reference, &args.reference)?;
    save_frame(&interesting, &args.interesting)?;
    Ok(())
}

fn save_frame(image: &OwnedImage, path: &Path) -> MotionResult<()> {
    let is_pgm = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pgm"));
    if is_pgm {
        save_pgm(image, path)
    } else {
        save_gray_image(image, path)
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("blockmotion=info".parse()?),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    match cli.command {
        Some(Command::Motion(args)) => run_motion(args),
        Some(Command::Histogram(args)) => run_histogram(args),
        Some(Command::Synth(args)) => run_synth(args),
        None => run_motion(cli.motion),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
