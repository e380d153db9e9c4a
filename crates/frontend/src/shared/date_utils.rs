/// Date and time formatting for tables (vi-VN order, `DD/MM/YYYY`)
use chrono::{DateTime, SecondsFormat, Utc};

/// Current instant as RFC 3339 UTC, as stored on mirror records
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM:SS
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%d/%m/%Y %H:%M:%S").to_string();
    }
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                return format!("{}/{}/{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Blank or missing values render as `-`.
pub fn format_optional_datetime(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_datetime(v),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59"),
            "31/12/2024 23:59:59"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_optional_datetime(None), "-");
        assert_eq!(format_optional_datetime(Some(" ")), "-");
    }

    #[test]
    fn test_now_is_parseable() {
        assert!(DateTime::parse_from_rfc3339(&now_rfc3339()).is_ok());
    }
}
