use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ApiError, MaintenanceApi};
use crate::models::{BookedDateSet, BookingDraft};

pub struct HttpMaintenanceApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpMaintenanceApi {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Reads the body and turns non-2xx statuses into [`ApiError::Server`].
async fn read_json(resp: reqwest::Response) -> Result<Value, ApiError> {
    let status = resp.status();
    let text = resp.text().await?;
    let data: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(Value::Null)
    };

    if !status.is_success() {
        return Err(ApiError::Server {
            status: status.as_u16(),
            message: data["message"].as_str().map(|s| s.to_string()),
        });
    }
    Ok(data)
}

/// `{ bookedDates: [...] }`; anything else counts as no bookings.
fn parse_booked_dates(data: &Value) -> BookedDateSet {
    match data["bookedDates"].as_array() {
        Some(entries) => BookedDateSet::from_strings(entries.iter().filter_map(Value::as_str)),
        None => {
            tracing::warn!("booked-dates payload has no array, treating as empty");
            BookedDateSet::new()
        }
    }
}

#[async_trait]
impl MaintenanceApi for HttpMaintenanceApi {
    async fn booked_dates(&self) -> Result<BookedDateSet, ApiError> {
        let resp = self
            .client
            .get(self.url("/api/maintenance/booked-dates"))
            .send()
            .await?;
        let data = read_json(resp).await?;
        let booked = parse_booked_dates(&data);
        tracing::debug!(count = booked.count(), "loaded booked dates");
        Ok(booked)
    }

    async fn submit_booking(&self, draft: &BookingDraft) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.url("/api/maintenance"))
            .json(draft)
            .send()
            .await?;
        read_json(resp).await?;
        Ok(())
    }

    async fn admin_login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;
        let data = read_json(resp).await?;

        data["token"]
            .as_str()
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .ok_or_else(|| ApiError::Decode("missing token in login response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_booked_dates_array() {
        let data = json!({ "bookedDates": ["2025-05-22", "2025-05-23"] });
        assert_eq!(parse_booked_dates(&data).count(), 2);
    }

    #[test]
    fn test_parse_booked_dates_missing_or_wrong_type() {
        assert_eq!(parse_booked_dates(&json!({})).count(), 0);
        assert_eq!(parse_booked_dates(&json!({ "bookedDates": "2025-05-22" })).count(), 0);
        assert_eq!(parse_booked_dates(&Value::Null).count(), 0);
    }

    #[test]
    fn test_parse_booked_dates_ignores_non_strings() {
        let data = json!({ "bookedDates": ["2025-05-22", 42, null] });
        assert_eq!(parse_booked_dates(&data).count(), 1);
    }
}
