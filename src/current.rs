use crate::config::{IconStyle, Units};
use crate::icons::display_icon;
use crate::manager_owm::errors::OwmError;
use crate::models::owm_current::CurrentWeather;
use crate::models::weather::CurrentConditions;

const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Extracts what we render from a current weather response
///
/// # Arguments
///
/// * 'current' - decoded current weather response
/// * 'units' - unit system the response was requested in
/// * 'style' - icon style to render
pub fn parse_current(current: &CurrentWeather, units: Units, style: IconStyle) -> Result<CurrentConditions, OwmError> {
    let weather = current.weather.first()
        .ok_or_else(|| OwmError::Document("current weather has no weather entries".to_string()))?;

    Ok(CurrentConditions {
        description: capitalize(&weather.description),
        icon: display_icon(&weather.icon, style),
        temp: round(current.main.temp),
        feels_like: round(current.main.feels_like),
        temp_min: round(current.main.temp_min),
        temp_max: round(current.main.temp_max),
        humidity: current.main.humidity.round().clamp(0.0, 100.0) as u8,
        wind_speed: round(units.display_speed(current.wind.speed)),
        wind_direction: wind_direction(current.wind.deg),
    })
}

/// Maps wind degrees to one of eight compass labels, each label covering
/// the 45 degree sector starting at its bearing. Degrees wrap modulo 360.
///
/// # Arguments
///
/// * 'deg' - wind direction in degrees
pub fn wind_direction(deg: f64) -> &'static str {
    let idx = (deg / 45.0).floor().rem_euclid(8.0) as usize;
    DIRECTIONS[idx % 8]
}

/// Rounds to nearest integer, ties to even
///
/// # Arguments
///
/// * 'value' - value to round
pub fn round(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Upper cases the first character and lower cases the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
