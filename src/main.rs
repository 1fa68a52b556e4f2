use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use dataset_loader::app::{DatasetLoader, DialogPicker};
use dataset_loader::config::LoaderConfig;
use eframe::CreationContext;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Upload datasets to the analysis server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server base URL, overrides the config file
    #[arg(short, long)]
    server: Option<String>,

    /// How verbose the output should be, can be set up to 3 times. Has no effect if RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn tracing_init(args: &Args) -> color_eyre::Result<()> {
    let default_directive = match args.verbose {
        0 => "dataset_loader=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_directive.parse()?)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre!("unable to set up logging: {e}"))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    tracing_init(&args)?;
    tracing::debug!(?args);

    let mut config = LoaderConfig::load(args.config.as_deref())?;
    if let Some(server) = args.server {
        config.server.base_url = server;
    }

    let runtime = Runtime::new().wrap_err("failed to start the async runtime")?;
    let loader = DatasetLoader::new(&config, runtime.handle().clone(), Box::new(DialogPicker))?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([600.0, 500.0])
            .with_min_inner_size([400.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dataset Loader",
        options,
        Box::new(move |_cc: &CreationContext| Box::new(loader)),
    )
    .map_err(|e| eyre!("failed to open the loader window: {e}"))
}
