//! folio - a terminal portfolio with a webhook-backed contact form
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;

use folio_app::config::Settings;
use folio_core::prelude::*;
use folio_core::Profile;

/// folio - a terminal portfolio with a webhook-backed contact form
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio and send contact messages from the terminal", long_about = None)]
struct Args {
    /// Path to a profile TOML file (defaults to the built-in sample persona)
    #[arg(long, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Path to the settings file (defaults to ~/.config/folio/folio.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    folio_core::logging::init()?;

    let settings = Settings::load(args.config.as_deref())?;
    if !settings.contact.is_configured() {
        warn!("No webhook endpoint configured; contact submissions will fail locally");
    }

    let profile = match args.profile.as_deref() {
        Some(path) => Profile::load(path)?,
        None => Profile::sample(),
    };
    info!("Loaded profile for {}", profile.name);

    folio_tui::run(profile, settings).await
}
