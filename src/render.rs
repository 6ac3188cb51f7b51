use std::fmt;
use std::fmt::Formatter;
use chrono::{DateTime, Utc};
use crate::config::{ReadmeParameters, Units};
use crate::models::weather::{CurrentConditions, DayForecast};

/// The weather section of the README, rendered through Display
struct Section<'a> {
    readme: &'a ReadmeParameters,
    display_name: &'a str,
    units: Units,
    current: &'a CurrentConditions,
    days: &'a [DayForecast],
    updated: DateTime<Utc>,
}

impl fmt::Display for Section<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let t = self.units.temp_symbol();
        let current = self.current;

        write!(f, "{}\n\n", self.readme.marker)?;
        if !self.readme.intro.is_empty() {
            write!(f, "{}\n\n", self.readme.intro)?;
        }

        write!(f, "### {} {}\n\n", current.icon, current.description)?;
        write!(f, "🌡️ Temperature:\n")?;
        write!(f, "* Current: {}{}\n", current.temp, t)?;
        if self.readme.show_feels_like {
            write!(f, "* Feels like: {}{}\n", current.feels_like, t)?;
        }
        write!(f, "* Min: {}{}\n", current.temp_min, t)?;
        write!(f, "* Max: {}{}\n\n", current.temp_max, t)?;

        // Trailing double spaces are Markdown hard line breaks
        write!(f, "💧 Humidity: {}%  \n", current.humidity)?;
        write!(f, "🌬️ Wind:\n")?;
        write!(f, "* Speed: {} {}\n", current.wind_speed, self.units.speed_symbol())?;
        write!(f, "* Direction: {}  \n\n", current.wind_direction)?;

        if self.readme.show_updated {
            write!(f, "🕒 Updated: {}\n\n", self.updated.format("%Y-%m-%d %H:%M UTC"))?;
        }

        write!(f, "---\n\n")?;
        write!(f, "### 📅 {}-Day Forecast for {}\n\n", self.days.len(), self.display_name)?;
        write!(f, "| Day | Weather | Min / Max |\n|-----|---------|-----------|\n")?;
        for d in self.days {
            write!(f, "| {} | {} {} | {}{} / {}{} |\n", d.day, d.icon, d.description, d.min, t, d.max, t)?;
        }

        Ok(())
    }
}

/// Renders the weather section of the README, starting with the marker heading
///
/// # Arguments
///
/// * 'readme' - README parameters (marker, intro and what to show)
/// * 'display_name' - city name shown in the forecast heading
/// * 'units' - unit system the values are given in
/// * 'current' - current conditions
/// * 'days' - daily forecast
/// * 'updated' - time stamp to show as last update
pub fn render_section(
    readme: &ReadmeParameters,
    display_name: &str,
    units: Units,
    current: &CurrentConditions,
    days: &[DayForecast],
    updated: DateTime<Utc>) -> String {

    Section { readme, display_name, units, current, days, updated }.to_string()
}
