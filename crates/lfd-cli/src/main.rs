//! lfd - light-field display simulation CLI
//!
//! Renders, converts and simulates image stacks for multi-projector and
//! multi-view displays.

use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lfd")]
#[command(author, version, about = "Light-field display simulation")]
#[command(long_about = "
Simulates and converts light fields between multi-view camera arrays and
multi-projector displays.

Examples:
  lfd models --out-dir data                         # Write sample descriptors
  lfd render --cameras data/cameras.json -o views   # Ray trace camera views
  lfd render --projectors data/projectors.json -o proj --format ppm
  lfd convert --projectors data/projectors.json --cameras data/cameras.json \\
      --direction views-to-projectors -i views -o proj
  lfd simulate --projectors data/projectors.json --observer 100,0,2000 -i proj -o seen.exr
  lfd info data/projectors.json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Interpolation tunables (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample projector and camera descriptors
    Models(ModelsArgs),

    /// Ray trace the sample scene for every view of a descriptor
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Resample a stack between camera and projector arrays
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Simulate what an observer sees on the projector display
    #[command(visible_alias = "s")]
    Simulate(SimulateArgs),

    /// Show descriptor, image or stack information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct ModelsArgs {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args)]
#[command(group(ArgGroup::new("model").required(true).args(["projectors", "cameras"])))]
struct RenderArgs {
    /// Projector descriptor: render one emitted image per projector
    #[arg(long)]
    projectors: Option<PathBuf>,

    /// Camera descriptor: render one pinhole view per camera
    #[arg(long)]
    cameras: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Layer format: exr, ppm
    #[arg(short, long, default_value = "exr")]
    format: String,

    /// Maximum reflection/refraction depth
    #[arg(long)]
    max_depth: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Direction {
    /// Camera stack in, projector stack out
    ViewsToProjectors,
    /// Projector stack in, camera stack out
    ProjectorsToViews,
}

#[derive(Args)]
struct ConvertArgs {
    /// Projector descriptor
    #[arg(long)]
    projectors: PathBuf,

    /// Camera descriptor
    #[arg(long)]
    cameras: PathBuf,

    /// Conversion direction
    #[arg(short, long, value_enum)]
    direction: Direction,

    /// Input stack directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output stack directory
    #[arg(short, long)]
    output: PathBuf,

    /// Layer format for input and output: exr, ppm
    #[arg(short, long, default_value = "exr")]
    format: String,
}

#[derive(Args)]
#[command(group(ArgGroup::new("viewer").required(true).args(["cameras", "observer"])))]
struct SimulateArgs {
    /// Projector descriptor
    #[arg(long)]
    projectors: PathBuf,

    /// Camera descriptor: simulate every camera position into a stack
    #[arg(long)]
    cameras: Option<PathBuf>,

    /// Single observer position as x,y,z: write one image
    #[arg(long, allow_hyphen_values = true)]
    observer: Option<String>,

    /// Input projector stack directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output image (with --observer) or directory (with --cameras)
    #[arg(short, long)]
    output: PathBuf,

    /// Keep raw weighted sums instead of normalizing
    #[arg(long)]
    no_normalize: bool,

    /// Layer format of the input stack (and output stack): exr, ppm
    #[arg(short, long, default_value = "exr")]
    format: String,
}

#[derive(Args)]
struct InfoArgs {
    /// Descriptor (.json), image, or stack directory
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Layer format when inspecting a stack directory: exr, ppm
    #[arg(short, long, default_value = "exr")]
    format: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Models(args) => commands::models::run(args, cli.verbose),
        Commands::Render(args) => commands::render::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, &config, cli.verbose),
        Commands::Simulate(args) => commands::simulate::run(args, &config, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
