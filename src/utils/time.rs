//! Time helpers
//!
//! All date -> timestamp conversion happens in the handler layer; the
//! repository layer only ever sees `i64` Unix millis.

use chrono::Utc;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Start and end of the current UTC calendar day as Unix millis.
///
/// The end bound is the next day's midnight; callers use `< end` semantics.
pub fn today_bounds_millis() -> (i64, i64) {
    let today = Utc::now().date_naive();
    let start = today
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
        .timestamp_millis();
    let end = start + 24 * 60 * 60 * 1000;
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_falls_inside_today_bounds() {
        let (start, end) = today_bounds_millis();
        let now = now_millis();
        assert!(start <= now && now < end);
        assert_eq!(end - start, 86_400_000);
    }
}
