use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct WeatherSummary {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize, Debug)]
pub struct MainValues {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
}

#[derive(Deserialize, Debug, Default)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

/// Response from the current weather endpoint, only the parts we render
#[derive(Deserialize, Debug)]
pub struct CurrentWeather {
    pub weather: Vec<WeatherSummary>,
    pub main: MainValues,
    #[serde(default)]
    pub wind: Wind,
}
