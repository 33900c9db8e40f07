mod app;
mod error;
mod paths;
mod settings;

use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::Result;
use crate::settings::Settings;

fn main() {
    // Optional first argument: path to a settings.toml
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);

    // Errors are printed after the terminal has been restored
    if let Err(e) = run(settings_path) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(settings_path: Option<PathBuf>) -> Result<()> {
    init_logging()?;
    let settings = Settings::load(settings_path.as_deref())?;
    app::run(settings)
}

fn init_logging() -> Result<()> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&path)?)?;
    log::info!("logging to {}", path.display());
    Ok(())
}
