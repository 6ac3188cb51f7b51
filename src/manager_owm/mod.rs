pub mod errors;
#[cfg(test)]
pub mod test_support;

use std::time::Duration;
use log::debug;
use serde::de::DeserializeOwned;
use ureq::Agent;
use crate::config::{Location, WeatherParameters};
use crate::manager_owm::errors::OwmError;
use crate::models::owm_current::CurrentWeather;
use crate::models::owm_forecast::ForecastResponse;

/// Struct for fetching current weather and forecasts from OpenWeatherMap
pub struct OpenWeatherMap {
    agent: Agent,
    base_url: String,
    api_key: String,
    units: &'static str,
    city: String,
    lat: f64,
    long: f64,
}

impl OpenWeatherMap {
    /// Returns an OpenWeatherMap struct ready for fetching weather for the given location
    ///
    /// # Arguments
    ///
    /// * 'weather' - provider parameters (base url, units, timeout)
    /// * 'location' - city name used for current weather and lat/long used for the forecast
    /// * 'api_key' - OpenWeatherMap api key
    pub fn new(weather: &WeatherParameters, location: &Location, api_key: String) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(weather.timeout_secs)))
            .build();

        let agent = config.into();

        Self {
            agent,
            base_url: weather.base_url.trim_end_matches('/').to_string(),
            api_key,
            units: weather.units.as_query(),
            city: location.city.clone(),
            lat: location.lat,
            long: location.long,
        }
    }

    /// Retrieves current weather for the configured city name
    ///
    pub fn get_current(&self) -> Result<CurrentWeather, OwmError> {
        let url = format!("{}/weather", self.base_url);
        let query = [
            ("q", self.city.clone()),
            ("appid", self.api_key.clone()),
            ("units", self.units.to_string()),
        ];

        self.get_document(&url, &query)
    }

    /// Retrieves the 5 day / 3 hour forecast for the configured coordinates
    ///
    pub fn get_forecast(&self) -> Result<ForecastResponse, OwmError> {
        let url = format!("{}/forecast", self.base_url);
        let query = [
            ("lat", format!("{:0.4}", self.lat)),
            ("lon", format!("{:0.4}", self.long)),
            ("appid", self.api_key.clone()),
            ("units", self.units.to_string()),
        ];

        self.get_document(&url, &query)
    }

    /// Sends a get request and decodes the json body into the requested type.
    /// Non 2xx responses are reported as errors by the agent.
    ///
    /// # Arguments
    ///
    /// * 'url' - endpoint url without query
    /// * 'query' - query parameters
    fn get_document<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T, OwmError> {
        let json = self.agent
            .get(url)
            .query_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
            .call()?
            .body_mut()
            .read_to_string()?;

        debug!("Received {} bytes from {}", json.len(), url);

        Ok(serde_json::from_str(&json)?)
    }
}
