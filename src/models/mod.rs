pub mod owm_current;
pub mod owm_forecast;
pub mod weather;
