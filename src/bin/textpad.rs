use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};
use log::LevelFilter;
use textpad::config::Config;
use textpad::frontend;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;
    init_logging(&config)?;

    log::info!("Starting {}", env!("CARGO_PKG_NAME"));
    frontend::run(&config)
}

/// `--log-level` sets the filter and RUST_LOG refines it.
///
/// Records always go to a file because the editor draws on the terminal.
/// Logging is off when no log file location can be determined.
fn init_logging(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.log_level).parse_env("RUST_LOG");

    match config.log_path() {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.try_init().context("failed to install logger")?;
    Ok(())
}
