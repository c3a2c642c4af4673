//! Display formatting for backend timestamps (`2024-05-20T12:34:56.123`) and the
//! weekly contest period.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    // Offsets and fractional seconds vary between endpoints; the first 19 chars
    // are always `YYYY-MM-DDTHH:MM:SS` when a time is present.
    if let Some(head) = raw.get(..19) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S") {
            return Some(dt);
        }
    }
    raw.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `yy.mm.dd`; unparseable input is returned unchanged.
pub fn short_date(raw: &str) -> String {
    match parse(raw) {
        Some(dt) => dt.format("%y.%m.%d").to_string(),
        None => raw.to_string(),
    }
}

/// `yyyy.mm.dd HH:MM`; unparseable input is returned unchanged.
pub fn date_time(raw: &str) -> String {
    match parse(raw) {
        Some(dt) => dt.format("%Y.%m.%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// Monday and Sunday of the week containing `day`.
pub fn week_range(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = day - Duration::days(day.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// `mm.dd - mm.dd` for the week containing `day`.
pub fn week_label(day: NaiveDate) -> String {
    let (start, end) = week_range(day);
    format!("{} - {}", start.format("%m.%d"), end.format("%m.%d"))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-05-20T12:34:56.789"), "24.05.20");
        assert_eq!(short_date("2024-05-20"), "24.05.20");
        assert_eq!(short_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_date_time() {
        assert_eq!(date_time("2024-05-20T08:05:00"), "2024.05.20 08:05");
        assert_eq!(date_time(""), "");
    }

    #[test]
    fn test_week_range_starts_monday() {
        let wed = NaiveDate::from_ymd_opt(2024, 11, 6).unwrap();
        let (start, end) = week_range(wed);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 11, 4).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 11, 10).unwrap());
        assert_eq!(week_label(end), "11.04 - 11.10");
    }
}
