use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use super::RuntimeDate;

impl RuntimeDate {
    pub fn now() -> Self {
        Self::from_time(Utc::now())
    }

    /// Returns [`None`] if `millis` is outside of the representable range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::from_time)
    }

    fn from_time(time: DateTime<Utc>) -> Self {
        Self {
            time: time.trunc_subsecs(3),
        }
    }

    pub fn millis_since_epoch(self) -> i64 {
        self.time.timestamp_millis()
    }

    /// Formats the date as `YYYY-MM-DDTHH:mm:ss.sssZ`.
    pub fn to_iso_string(self) -> String {
        self.time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl std::fmt::Display for RuntimeDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(millis: i64) -> String {
        RuntimeDate::from_millis(millis).unwrap().to_iso_string()
    }

    #[test]
    fn epoch() {
        assert_eq!(iso(0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn leap_day() {
        assert_eq!(iso(951_782_400_000), "2000-02-29T00:00:00.000Z");
    }

    #[test]
    fn time_of_day_and_dates_before_epoch() {
        assert_eq!(iso(86_400_000 + 3_723_004), "1970-01-02T01:02:03.004Z");
        assert_eq!(iso(-1), "1969-12-31T23:59:59.999Z");
    }

    #[test]
    fn millis_round_trip() {
        let date = RuntimeDate::from_millis(1_234_567_890_123).unwrap();
        assert_eq!(date.millis_since_epoch(), 1_234_567_890_123);
    }

    #[test]
    fn out_of_range_millis() {
        assert!(RuntimeDate::from_millis(i64::MAX).is_none());
    }

    #[test]
    fn now_has_millisecond_precision() {
        let now = RuntimeDate::now();
        assert!(now.millis_since_epoch() > 0);
        assert_eq!(RuntimeDate::from_millis(now.millis_since_epoch()), Some(now));
    }
}
