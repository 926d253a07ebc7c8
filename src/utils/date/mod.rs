// Date utility functions

use chrono::{DateTime, Local, TimeZone};

/// Build a local timestamp from calendar components. Intended for static
/// data and tests where the components are known valid.
pub fn local_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_components() {
        use chrono::{Datelike, Timelike};

        let dt = local_datetime(2026, 6, 14, 9, 30);
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 14);
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 30);
    }
}
