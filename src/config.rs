use std::env;

use chrono_tz::Tz;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub api_base_url: String,
    pub shop_timezone: Tz,
    pub max_lookahead_days: i64,
    pub session_ttl_minutes: i64,
    pub shop_contact_phone: String,
    pub shop_line_id: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_base_url: env::var("API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            shop_timezone: parse_timezone(env::var("SHOP_TIMEZONE").ok().as_deref()),
            max_lookahead_days: bounded(env::var("MAX_LOOKAHEAD_DAYS").ok(), 3650, 364),
            session_ttl_minutes: bounded(env::var("SESSION_TTL_MINUTES").ok(), 10_080, 60),
            shop_contact_phone: env::var("SHOP_CONTACT_PHONE")
                .unwrap_or_else(|_| "081-234-5678".to_string()),
            shop_line_id: env::var("SHOP_LINE_ID").unwrap_or_else(|_| "@shopname".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// The shop's current calendar day.
    pub fn today(&self) -> chrono::NaiveDate {
        chrono::Utc::now()
            .with_timezone(&self.shop_timezone)
            .date_naive()
    }
}

/// Parses a positive count no larger than `max`, otherwise `default`.
fn bounded(raw: Option<String>, max: i64, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|n: &i64| (1..=max).contains(n))
        .unwrap_or(default)
}

fn parse_timezone(raw: Option<&str>) -> Tz {
    match raw {
        Some(name) => name.parse().unwrap_or_else(|_| {
            tracing::warn!("unknown SHOP_TIMEZONE {name:?}, falling back to Asia/Bangkok");
            chrono_tz::Asia::Bangkok
        }),
        None => chrono_tz::Asia::Bangkok,
    }
}
