use mockito::{Matcher, Mock, ServerGuard};

pub const CURRENT_JSON: &str = r#"{
    "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
    "main": {"temp": 12.6, "feels_like": 11.4, "temp_min": 10.2, "temp_max": 14.5, "humidity": 81},
    "wind": {"speed": 5.2, "deg": 200},
    "name": "Vienna"
}"#;

/// Mocks the current weather endpoint for the default location and the given api key
pub fn mock_current(server: &mut ServerGuard, api_key: &str, status: usize, body: &str) -> Mock {
    server.mock("GET", "/weather")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Vienna,AT".into()),
            Matcher::UrlEncoded("appid".into(), api_key.into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Mocks the forecast endpoint for the default location and the given api key
pub fn mock_forecast(server: &mut ServerGuard, api_key: &str, status: usize, body: &str) -> Mock {
    server.mock("GET", "/forecast")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lat".into(), "48.2082".into()),
            Matcher::UrlEncoded("lon".into(), "16.3738".into()),
            Matcher::UrlEncoded("appid".into(), api_key.into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}
