//! ISO-8601 rendering of range bounds

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use std::fmt::Display;

/// Render a date as `YYYY-MM-DD`
pub(crate) fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A point in time usable as an hourly range bound
pub trait IsoDateTime {
    /// ISO-8601 date-time text, time of day included
    fn iso_datetime(&self) -> String;
}

impl IsoDateTime for NaiveDateTime {
    /// `YYYY-MM-DDTHH:MM:SS`, with fractional seconds only when non-zero
    fn iso_datetime(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

impl<Tz: TimeZone> IsoDateTime for DateTime<Tz>
where
    Tz::Offset: Display,
{
    /// RFC 3339 with a numeric offset, e.g. `2023-01-01T09:00:00+09:00`
    fn iso_datetime(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }
}

impl<T: IsoDateTime + ?Sized> IsoDateTime for &T {
    fn iso_datetime(&self) -> String {
        (**self).iso_datetime()
    }
}
