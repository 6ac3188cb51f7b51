use chrono::{DateTime, Utc};
use log::{info, warn};
use crate::config::{api_key, Config};
use crate::current::parse_current;
use crate::errors::UpdaterError;
use crate::forecast::daily_forecast;
use crate::manager_owm::OpenWeatherMap;
use crate::readme::{update_readme, UpdateOutcome};
use crate::render::render_section;

/// Fetches weather, renders it and splices it into the README
///
/// # Arguments
///
/// * 'config' - the configuration
pub fn run(config: &Config) -> Result<UpdateOutcome, UpdaterError> {
    let api_key = api_key(&config.weather)?;
    let owm = OpenWeatherMap::new(&config.weather, &config.location, api_key);

    update(config, &owm, Utc::now())
}

/// Runs the pipeline against the given weather source
///
/// # Arguments
///
/// * 'config' - the configuration
/// * 'owm' - weather source
/// * 'now' - current time, used for skipping today and as update time stamp
pub fn update(config: &Config, owm: &OpenWeatherMap, now: DateTime<Utc>) -> Result<UpdateOutcome, UpdaterError> {
    info!("Fetching weather for {}", config.location.city);
    let current = owm.get_current()?;
    let forecast = owm.get_forecast()?;
    info!("Got current weather and {} forecast entries", forecast.list.len());

    let conditions = parse_current(&current, config.weather.units, config.readme.icon_style)?;
    let days = daily_forecast(&forecast, &config.forecast, config.readme.icon_style, now)?;

    let section = render_section(
        &config.readme,
        &config.location.display_name,
        config.weather.units,
        &conditions,
        &days,
        now);

    let outcome = update_readme(&config.readme.path, &config.readme.marker, &section)?;
    match outcome {
        UpdateOutcome::Updated => info!("Updated {} with {} forecast days", config.readme.path, days.len()),
        UpdateOutcome::Unchanged => info!("{} already up to date", config.readme.path),
        UpdateOutcome::MarkerNotFound => warn!("Marker '{}' not found in {}, nothing written",
                                               config.readme.marker, config.readme.path),
    }

    Ok(outcome)
}
