use serde::Deserialize;
use crate::models::owm_current::WeatherSummary;

#[derive(Deserialize, Debug)]
pub struct EntryValues {
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Deserialize, Debug)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: EntryValues,
    pub weather: Vec<WeatherSummary>,
}

/// Response from the 5 day / 3 hour forecast endpoint
#[derive(Deserialize, Debug)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}
