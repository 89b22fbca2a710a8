//! Plain-text rendering of a query result
//!
//! Produces the current-conditions block and the short daily forecast as a
//! string, leaving printing to the caller.

use crate::models::{DailyForecastEntry, QueryResult};
use crate::weather_code;
use std::fmt::Write;

/// Render a query result for terminal output
#[must_use]
pub fn render(result: &QueryResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", result.place_name);

    if let Some(current) = &result.current {
        let described = weather_code::describe(current.weather_code);
        let _ = writeln!(
            out,
            "Now: {} {}  {}°C, wind {} km/h",
            described.icon, described.label, current.temperature, current.wind_speed
        );
    }

    if let Some(daily) = &result.daily {
        for entry in daily {
            let _ = writeln!(out, "{}", render_day(entry));
        }
    }

    if result.current.is_none() && result.daily.is_none() {
        let _ = writeln!(out, "Nothing to show.");
    }

    out
}

fn render_day(entry: &DailyForecastEntry) -> String {
    let described = weather_code::describe(entry.weather_code);
    format!(
        "{}  {} {}  {:.0}° / {:.0}°",
        entry.date.format("%a, %b %-d"),
        described.icon,
        described.label,
        entry.temp_max,
        entry.temp_min
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrentConditions;
    use chrono::NaiveDate;

    #[test]
    fn test_render_current_conditions() {
        let result = QueryResult {
            place_name: "Delhi".to_string(),
            current: Some(CurrentConditions {
                temperature: 30.0,
                wind_speed: 10.0,
                weather_code: 0,
            }),
            daily: None,
        };
        let rendered = render(&result);
        assert!(rendered.starts_with("Delhi\n"));
        assert!(rendered.contains("☀️ Clear sky"));
        assert!(rendered.contains("30°C"));
        assert!(rendered.contains("wind 10 km/h"));
    }

    #[test]
    fn test_render_daily_entry() {
        let entry = DailyForecastEntry {
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            temp_max: 31.4,
            temp_min: 25.6,
            weather_code: 2,
        };
        let rendered = render_day(&entry);
        assert!(rendered.contains("Sun, Aug 30"));
        assert!(rendered.contains("⛅ Partly cloudy"));
        assert!(rendered.contains("31° / 26°"));
    }

    #[test]
    fn test_render_empty_result() {
        let result = QueryResult {
            place_name: "Delhi".to_string(),
            current: None,
            daily: None,
        };
        assert!(render(&result).contains("Nothing to show."));
    }
}
