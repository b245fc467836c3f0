use super::DeviceError;
use crate::services::TelemetryReading;
use reqwest::{Client, Url};
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Client of the `/getData` api of the robot.
#[derive(Clone)]
pub struct DeviceClient {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl DeviceClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, DeviceError> {
        let url = Url::parse(url).map_err(|err| DeviceError::InvalidUrl(format!("{url}, {err}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeviceError::InvalidUrl(format!("{url}, unsupported scheme")));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(DeviceError::Client)?;

        Ok(Self { client, url, timeout })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request_error(&self, err: reqwest::Error) -> DeviceError {
        if err.is_timeout() {
            DeviceError::Timeout(self.timeout)
        } else {
            DeviceError::Request(err)
        }
    }

    /// Query the current reading of the device. A single attempt is made, bounded by the client timeout.
    pub async fn fetch_reading(&self) -> Result<TelemetryReading, DeviceError> {
        log::debug!("Requesting telemetry from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| self.request_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeviceError::Status(status));
        }

        let body = response.bytes().await.map_err(|err| self.request_error(err))?;
        parse_reading(&body)
    }
}

/// Parse the body returned by the device. Blank bodies and empty json values are reported as an empty response.
pub fn parse_reading(body: &[u8]) -> Result<TelemetryReading, DeviceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(DeviceError::EmptyResponse);
    }

    let value: JsonValue = serde_json::from_slice(body)?;
    let is_empty = match &value {
        JsonValue::Null => true,
        JsonValue::Object(map) => map.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::String(text) => text.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(DeviceError::EmptyResponse);
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use solarbot_test::test;

    #[test]
    fn parse_valid_reading() {
        let reading = parse_reading(br#"{"data":"X","rssi":-60}"#).unwrap();
        assert_eq!(reading, TelemetryReading::new("X", -60));
    }

    #[test]
    fn parse_drops_unknown_keys() {
        let reading = parse_reading(br#"{"data":"TOF1:12 TOF2:40","rssi":-80,"uptime":1234}"#).unwrap();
        assert_eq!(reading, TelemetryReading::new("TOF1:12 TOF2:40", -80));
    }

    #[test]
    fn parse_empty_responses() {
        for body in [&b""[..], b"  \n", b"{}", b"null", b"[]", br#""""#] {
            let err = parse_reading(body).expect_err("Empty body should be rejected");
            assert!(matches!(err, DeviceError::EmptyResponse), "{err:?}");
        }
    }

    #[test]
    fn parse_malformed_responses() {
        for body in [
            &b"<html>busy</html>"[..],
            br#"{"data":"X""#,
            br#"{"data":"X"}"#,
            br#"{"data":12,"rssi":-60}"#,
            br#"{"data":"X","rssi":"strong"}"#,
            b"42",
        ] {
            let err = parse_reading(body).expect_err("Malformed body should be rejected");
            assert!(matches!(err, DeviceError::Decode(_)), "{err:?}");
        }
    }

    #[test]
    fn invalid_urls_are_rejected() {
        let timeout = Duration::from_secs(1);
        assert!(matches!(
            DeviceClient::new("not a url", timeout),
            Err(DeviceError::InvalidUrl(_))
        ));
        assert!(matches!(
            DeviceClient::new("ftp://192.168.4.1/getData", timeout),
            Err(DeviceError::InvalidUrl(_))
        ));
        assert!(DeviceClient::new("http://192.168.4.1/getData", timeout).is_ok());
    }
}
