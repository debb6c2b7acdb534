// iconforge - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (iconforge.toml, optional)
// 3. Logging initialisation (debug mode support)
// 4. Running the generator and printing status lines

use clap::Parser;
use iconforge::app::generate::{self, Progress};
use iconforge::platform::config;
use iconforge::util;
use std::path::PathBuf;

/// iconforge - Android and iOS app icon generator.
///
/// Reads the transparent source logo and writes launcher icons, adaptive
/// icon layers and the iOS appiconset into the project tree.
#[derive(Parser, Debug)]
#[command(name = "iconforge", version, about)]
struct Cli {
    /// Config file (defaults to iconforge.toml in the project root).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Project root that all relative paths are resolved against.
    #[arg(short = 'r', long = "root", default_value = ".")]
    root: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so [logging] level can take effect;
    // its problems are logged once the subscriber exists.
    let (config, warnings) = config::load_config(&cli.root, cli.config.as_deref());

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        root = %cli.root.display(),
        "iconforge starting"
    );

    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let result = generate::run(&config, |progress| match progress {
        Progress::AndroidStarted => println!("Generating Android icons..."),
        Progress::IosStarted => println!("Generating iOS icons..."),
        Progress::Finished { files } => {
            tracing::info!(files, "Generation finished");
            println!("Icon generation complete.");
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Icon generation failed");
        println!("Error: {e}");
        std::process::exit(1);
    }
}
