use std::fs;
use std::path::Path;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub lat: f64,
    pub long: f64,
    pub display_name: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            city: "Vienna,AT".to_string(),
            lat: 48.2082,
            long: 16.3738,
            display_name: "Vienna".to_string(),
        }
    }
}

/// Unit system requested from the weather provider
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Query parameter value understood by OpenWeatherMap
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temp_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub fn speed_symbol(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            _ => "km/h",
        }
    }

    /// Converts a wind speed as reported by the provider to the speed unit we display.
    /// Metric and standard report m/s which is shown as km/h, imperial reports mph.
    ///
    /// # Arguments
    ///
    /// * 'speed' - wind speed as given by the provider
    pub fn display_speed(&self, speed: f64) -> f64 {
        match self {
            Units::Imperial => speed,
            _ => speed * 3.6,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WeatherParameters {
    pub base_url: String,
    pub api_key_env: String,
    pub units: Units,
    pub timeout_secs: u64,
}

impl Default for WeatherParameters {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key_env: "OPENWEATHER_API_KEY".to_string(),
            units: Units::Metric,
            timeout_secs: 30,
        }
    }
}

/// Time zone used when turning forecast timestamps into weekdays
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    Local,
    Utc,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ForecastParameters {
    pub skip_today: bool,
    pub day_boundary: DayBoundary,
    pub max_days: usize,
}

impl Default for ForecastParameters {
    fn default() -> Self {
        Self { skip_today: true, day_boundary: DayBoundary::Local, max_days: 5 }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Emoji,
    Image,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReadmeParameters {
    pub path: String,
    pub marker: String,
    pub intro: String,
    pub icon_style: IconStyle,
    pub show_feels_like: bool,
    pub show_updated: bool,
}

impl Default for ReadmeParameters {
    fn default() -> Self {
        Self {
            path: "README.md".to_string(),
            marker: "## 👋 Hi there!".to_string(),
            intro: "Current weather in **Vienna, Austria** 🇦🇹:".to_string(),
            icon_style: IconStyle::Emoji,
            show_feels_like: true,
            show_updated: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

impl Default for General {
    fn default() -> Self {
        Self { log_path: None, log_level: LevelFilter::Info, log_to_stdout: true }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub location: Location,
    pub weather: WeatherParameters,
    pub forecast: ForecastParameters,
    pub readme: ReadmeParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// If no path is given the default config file in the working directory is used when
/// present, otherwise built-in defaults are returned.
///
/// # Arguments
///
/// * 'config_path' - explicit path to the configuration file, if any
pub fn load_config(config_path: Option<&str>) -> Result<Config, ConfigError> {
    let path = match config_path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE,
        None => return Ok(Config::default()),
    };

    let toml = fs::read_to_string(path)
        .map_err(|e| ConfigError::File(path.to_string(), e))?;

    parse_config(&toml)
}

/// Parses a TOML configuration document, missing items are given their defaults
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(toml)?)
}

/// Reads the weather provider API key from the environment variable named in the config
///
/// # Arguments
///
/// * 'weather' - weather provider parameters holding the variable name
pub fn api_key(weather: &WeatherParameters) -> Result<String, ConfigError> {
    std::env::var(&weather.api_key_env)
        .map_err(|_| ConfigError::MissingEnv(weather.api_key_env.clone()))
}
