//! Утилиты форматирования даты и времени

use chrono::{DateTime, Local, Utc};

/// ISO-строка -> "DD/MM/YYYY HH:MM" в локальном часовом поясе браузера.
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 21:02" (UTC+7)
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => format_datetime_plain(datetime_str),
    }
}

/// Тот же формат без перевода часового пояса
pub fn format_datetime_plain(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let hhmm: String = time_part.chars().take(5).collect();
                return format!("{}/{}/{} {}", day, month, year, hhmm);
            }
        }
    }
    datetime_str.to_string()
}

/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_plain() {
        assert_eq!(
            format_datetime_plain("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02"
        );
        assert_eq!(format_datetime_plain("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_datetime_shape() {
        let formatted = format_datetime("2024-03-15T14:02:26.123Z");
        assert_eq!(formatted.len(), "15/03/2024 14:02".len());
        assert_eq!(&formatted[2..3], "/");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
