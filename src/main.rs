use std::env;
use anyhow::Context;
use log::{error, info};
use crate::config::load_config;
use crate::logging::setup_logger;

mod config;
mod current;
mod errors;
mod forecast;
mod icons;
mod logging;
mod manager_owm;
mod models;
mod readme;
mod render;
mod updater;

fn main() -> anyhow::Result<()> {
    let config_path = env::var("CONFIG_FILE").ok();
    let config = load_config(config_path.as_deref())
        .context("failed to load configuration")?;

    let _handle = setup_logger(&config.general)
        .context("failed to set up logging")?;

    info!("readme-weather version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = updater::run(&config) {
        error!("{}", e);
        return Err(e).context("weather update failed");
    }

    Ok(())
}
