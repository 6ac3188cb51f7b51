use chrono::{DateTime, Datelike, Local, TimeZone, Utc, Weekday};
use crate::config::{DayBoundary, ForecastParameters, IconStyle};
use crate::current::round;
use crate::icons::display_icon;
use crate::manager_owm::errors::OwmError;
use crate::models::owm_forecast::{ForecastEntry, ForecastResponse};
use crate::models::weather::DayForecast;

struct DayGroup {
    weekday: Weekday,
    min: f64,
    max: f64,
    icon: String,
    description: String,
}

/// Compresses the 3-hourly forecast into one summary per weekday
///
/// # Arguments
///
/// * 'forecast' - decoded forecast response
/// * 'params' - forecast parameters (skip today, day boundary and max days)
/// * 'style' - icon style to render
/// * 'now' - current time, its UTC weekday is the one skipped if skipping today
pub fn daily_forecast(forecast: &ForecastResponse, params: &ForecastParameters, style: IconStyle, now: DateTime<Utc>)
    -> Result<Vec<DayForecast>, OwmError> {

    let skip_day = params.skip_today.then(|| now.weekday());

    match params.day_boundary {
        DayBoundary::Local => aggregate(&forecast.list, &Local, skip_day, params.max_days, style),
        DayBoundary::Utc => aggregate(&forecast.list, &Utc, skip_day, params.max_days, style),
    }
}

/// Groups forecast entries by weekday in order of first appearance.
///
/// Each group gets the lowest temp_min and highest temp_max of its entries, while icon
/// and description are taken from the first entry of the group. Groups are not sorted,
/// and only the first 'max_days' groups are returned.
///
/// # Arguments
///
/// * 'entries' - forecast entries
/// * 'tz' - time zone in which a timestamp is turned into a weekday
/// * 'skip_day' - entries falling on this weekday are dropped
/// * 'max_days' - max number of days to return
/// * 'style' - icon style to render
pub fn aggregate<Tz: TimeZone>(entries: &[ForecastEntry], tz: &Tz, skip_day: Option<Weekday>, max_days: usize, style: IconStyle)
    -> Result<Vec<DayForecast>, OwmError> {

    let mut groups: Vec<DayGroup> = Vec::new();

    for entry in entries {
        let weekday = weekday(entry.dt, tz)?;
        if skip_day.is_some_and(|d| d == weekday) {
            continue;
        }

        let weather = entry.weather.first()
            .ok_or_else(|| OwmError::Document(format!("forecast entry {} has no weather entries", entry.dt)))?;

        match groups.iter_mut().find(|g| g.weekday == weekday) {
            Some(group) => {
                group.min = group.min.min(entry.main.temp_min);
                group.max = group.max.max(entry.main.temp_max);
            },
            None => {
                groups.push(DayGroup {
                    weekday,
                    min: entry.main.temp_min,
                    max: entry.main.temp_max,
                    icon: weather.icon.clone(),
                    description: weather.main.clone(),
                });
            },
        }
    }

    Ok(groups
        .into_iter()
        .take(max_days)
        .map(|g| DayForecast {
            day: g.weekday.to_string(),
            icon: display_icon(&g.icon, style),
            description: g.description,
            min: round(g.min),
            max: round(g.max),
        })
        .collect())
}

fn weekday<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Result<Weekday, OwmError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.with_timezone(tz).weekday())
        .ok_or_else(|| OwmError::Document(format!("timestamp out of range: {}", timestamp)))
}
