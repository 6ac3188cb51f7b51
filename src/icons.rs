use crate::config::IconStyle;

const FALLBACK_CODE: &str = "02d";
const FALLBACK_EMOJI: &str = "🌤️";
const ICON_URL: &str = "https://openweathermap.org/img/wn";

/// OpenWeatherMap icon codes and their emoji counterparts
const EMOJI_MAP: [(&str, &str); 18] = [
    ("01d", "☀️"),
    ("01n", "🌙"),
    ("02d", "🌤️"),
    ("02n", "☁️"),
    ("03d", "☁️"),
    ("03n", "☁️"),
    ("04d", "☁️"),
    ("04n", "☁️"),
    ("09d", "🌧️"),
    ("09n", "🌧️"),
    ("10d", "🌦️"),
    ("10n", "🌦️"),
    ("11d", "🌩️"),
    ("11n", "🌩️"),
    ("13d", "❄️"),
    ("13n", "❄️"),
    ("50d", "🌫️"),
    ("50n", "🌫️"),
];

/// Translates an OpenWeatherMap icon code into something to put in the README.
/// Unknown codes give the fallback icon.
///
/// # Arguments
///
/// * 'code' - icon code from the provider, e.g. "10d"
/// * 'style' - emoji or image link
pub fn display_icon(code: &str, style: IconStyle) -> String {
    let known = EMOJI_MAP.iter().find(|(c, _)| *c == code);

    match style {
        IconStyle::Emoji => known.map_or(FALLBACK_EMOJI, |(_, e)| *e).to_string(),
        IconStyle::Image => {
            let code = known.map_or(FALLBACK_CODE, |(c, _)| *c);
            format!("![{}]({}/{}.png)", code, ICON_URL, code)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_lookup() {
        assert_eq!(display_icon("01d", IconStyle::Emoji), "☀️");
        assert_eq!(display_icon("01n", IconStyle::Emoji), "🌙");
        assert_eq!(display_icon("13n", IconStyle::Emoji), "❄️");
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(display_icon("99x", IconStyle::Emoji), FALLBACK_EMOJI);
        assert_eq!(display_icon("", IconStyle::Emoji), FALLBACK_EMOJI);
        assert_eq!(
            display_icon("99x", IconStyle::Image),
            "![02d](https://openweathermap.org/img/wn/02d.png)");
    }

    #[test]
    fn image_link() {
        assert_eq!(
            display_icon("10n", IconStyle::Image),
            "![10n](https://openweathermap.org/img/wn/10n.png)");
    }
}
