/// Current conditions ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub description: String,
    pub icon: String,
    pub temp: i64,
    pub feels_like: i64,
    pub temp_min: i64,
    pub temp_max: i64,
    pub humidity: u8,
    pub wind_speed: i64,
    pub wind_direction: &'static str,
}

/// Summary of one forecast day
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub day: String,
    pub icon: String,
    pub description: String,
    pub min: i64,
    pub max: i64,
}
