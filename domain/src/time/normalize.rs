//! Date normalization with an optional zone shift.
//!
//! Point-in-time values are stamped in UTC. The historical lookup behaviour
//! reads them and then adds the host's timezone offset in minutes, so the
//! resulting instant shows the recorded calendar date on the host's local
//! clock. [`ZoneShift::Local`] reproduces that output; [`ZoneShift::None`]
//! returns the UTC instant untouched.

use super::parse::parse_time;
use crate::core::error::DomainError;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

/// Which offset is added to parsed timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneShift {
    /// Host local offset at the parsed instant (compatible output)
    #[default]
    Local,
    /// A fixed local offset, east of UTC
    Fixed(FixedOffset),
    /// No shift; the instant stays in true UTC
    None,
}

impl ZoneShift {
    /// Fixed shift from a local UTC offset in minutes (east positive)
    pub fn fixed_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(ZoneShift::Fixed)
    }

    /// Minutes to add to the parsed instant: UTC minus local, in whole minutes.
    fn offset_minutes(&self, utc: &NaiveDateTime) -> i64 {
        let local_minus_utc = match self {
            ZoneShift::Local => Local.offset_from_utc_datetime(utc).fix().local_minus_utc(),
            ZoneShift::Fixed(offset) => offset.local_minus_utc(),
            ZoneShift::None => 0,
        };
        -i64::from(local_minus_utc / 60)
    }
}

/// Converts point-in-time strings into UTC instants
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNormalizer {
    shift: ZoneShift,
}

impl DateNormalizer {
    pub fn new(shift: ZoneShift) -> Self {
        Self { shift }
    }

    /// Normalize an optional time value; absent input stays absent.
    pub fn normalize(&self, time: Option<&str>) -> Result<Option<DateTime<Utc>>, DomainError> {
        time.map(|raw| self.normalize_str(raw)).transpose()
    }

    /// Normalize a present time value
    pub fn normalize_str(&self, raw: &str) -> Result<DateTime<Utc>, DomainError> {
        let parsed = parse_time(raw)?;
        let minutes = self.shift.offset_minutes(&parsed);
        let shifted = TimeDelta::try_minutes(minutes)
            .and_then(|delta| parsed.checked_add_signed(delta))
            .ok_or_else(|| DomainError::invalid_time(raw, "shifted date out of range"))?;
        Ok(Utc.from_utc_datetime(&shifted))
    }
}
