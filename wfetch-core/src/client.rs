use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::FetchError;

const BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// Holds the API key and a reqwest handle; cloning shares the underlying
/// connection pool. Each fetch is an independent request with no timeout,
/// no retry and no custom headers.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Fetch the current weather for `location` and return the decoded JSON
    /// body verbatim.
    ///
    /// Returns `UpstreamStatus` for any non-200 answer, `Transport` if the
    /// request never produced a response, and `Decode` if a 200 body is not
    /// valid JSON.
    pub async fn fetch_weather_data(&self, location: &str) -> Result<Value, FetchError> {
        self.fetch_url(&request_url(&self.api_key, location)).await
    }

    async fn fetch_url(&self, url: &str) -> Result<Value, FetchError> {
        let res = self.http.get(url).send().await?;
        let status = res.status();
        let body = res.text().await?;

        decode_body(status, &body)
    }
}

/// Build the request URL the way the upstream API expects it: `location` and
/// `api_key` are interpolated verbatim, without validation or escaping.
pub fn request_url(api_key: &str, location: &str) -> String {
    format!("{BASE_URL}?q={location}&appid={api_key}")
}

/// Map an HTTP answer to the fetch result. Only an exact 200 counts as
/// success; the body is then decoded as untyped JSON and returned unmodified.
fn decode_body(status: StatusCode, body: &str) -> Result<Value, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::UpstreamStatus {
            code: status.as_u16(),
        });
    }

    Ok(serde_json::from_str(body)?)
}
