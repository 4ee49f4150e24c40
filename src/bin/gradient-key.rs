use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "gradient-key", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Key a single image and write the result as a PNG.
    Key(KeyArgs),
    /// Print the default settings document.
    Defaults,
}

#[derive(Parser, Debug)]
struct KeyArgs {
    /// Input image (PNG, JPEG, ...).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Settings JSON; defaults are used when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Write an intermediate view instead of the result.
    #[arg(long, value_enum)]
    debug: Option<DebugChoice>,

    /// Spread the work over a rayon pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Write premultiplied alpha instead of straight alpha.
    #[arg(long)]
    premultiplied: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DebugChoice {
    Result,
    Matte,
    RefinedMatte,
    ColorDistance,
    SpillSuppressed,
    ColorCorrected,
}

impl From<DebugChoice> for gradient_key::DebugMode {
    fn from(v: DebugChoice) -> Self {
        match v {
            DebugChoice::Result => Self::Result,
            DebugChoice::Matte => Self::Matte,
            DebugChoice::RefinedMatte => Self::RefinedMatte,
            DebugChoice::ColorDistance => Self::ColorDistance,
            DebugChoice::SpillSuppressed => Self::SpillSuppressed,
            DebugChoice::ColorCorrected => Self::ColorCorrected,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradient_key=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Key(args) => cmd_key(args),
        Command::Defaults => cmd_defaults(),
    }
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<gradient_key::KeySettings> {
    let Some(path) = path else {
        return Ok(gradient_key::KeySettings::default());
    };
    let settings = gradient_key::KeySettings::from_path(path)
        .with_context(|| format!("load settings '{}'", path.display()))?;
    Ok(settings)
}

fn cmd_key(args: KeyArgs) -> anyhow::Result<()> {
    let mut settings = read_settings(args.settings.as_deref())?;
    if let Some(debug) = args.debug {
        settings.debug_mode = debug.into();
    }

    let img = image::open(&args.in_path)
        .with_context(|| format!("decode image '{}'", args.in_path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let frame = gradient_key::RgbaFrame::new(width, height, img.into_raw())?;

    let params = settings.resolve(frame.screen());
    let threading = gradient_key::KeyThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let keyed = gradient_key::key_frame_with(&frame, &params, &threading)?;

    let data = if args.premultiplied {
        keyed.to_premultiplied()
    } else {
        keyed.data
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &data,
        keyed.width,
        keyed.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_defaults() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&gradient_key::KeySettings::default())
        .context("serialize default settings")?;
    println!("{json}");
    Ok(())
}
