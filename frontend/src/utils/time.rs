use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Epoch milliseconds, the unit JWT `exp` claims are compared against.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %H:%M").to_string()
}

pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}
