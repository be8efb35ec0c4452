// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display window and calendar math for the planning timeline.
//!
//! The timeline shows a bounded time-of-day range per day (for example
//! 06:00-22:00). `end_hour` values above 24 represent a wrap into the next
//! calendar day (26 = 02:00 next day), so late-night shifts stay on the row
//! of the day they started.
//!
//! ## Invariants
//!
//! - `end_hour > start_hour`, `start_hour < 24`, `end_hour <= 48`
//! - Day boundaries are wall-clock times in the declared display timezone,
//!   resolved once to UTC; all geometry afterwards is UTC arithmetic
//! - Weeks start on Monday; a Sunday anchor belongs to the prior week

use crate::error::DomainError;
use crate::types::TimeRange;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Canonical start of the visible day grid.
pub const DEFAULT_START_HOUR: u32 = 6;
/// Canonical end of the visible day grid.
pub const DEFAULT_END_HOUR: u32 = 22;

/// The bounded time-of-day range the timeline displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start_hour: u32,
    end_hour: u32,
}

impl TimeWindow {
    /// Creates a display window.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimeWindow`] unless
    /// `start_hour < 24`, `end_hour <= 48` and `end_hour > start_hour`.
    pub const fn new(start_hour: u32, end_hour: u32) -> Result<Self, DomainError> {
        if start_hour >= 24 || end_hour > 48 || end_hour <= start_hour {
            return Err(DomainError::InvalidTimeWindow {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// The window's start hour of day.
    #[must_use]
    pub const fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// The window's end hour. May exceed 24 for next-day wrap.
    #[must_use]
    pub const fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Total visible minutes per day.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn total_minutes(&self) -> i64 {
        (self.end_hour as i64 - self.start_hour as i64) * 60
    }

    /// Materializes the window's absolute `[start, end)` for one display day.
    ///
    /// The start is `day` at `start_hour:00` wall-clock time; an `end_hour`
    /// of 24 or more rolls into the next calendar day.
    ///
    /// # Errors
    ///
    /// Returns an error if either boundary falls into a DST gap of the
    /// calendar's timezone.
    pub fn anchor(
        &self,
        day: NaiveDate,
        calendar: &LocalCalendar,
    ) -> Result<AnchoredWindow, DomainError> {
        let base = day.and_time(NaiveTime::MIN);
        let start = calendar.resolve(base + Duration::hours(i64::from(self.start_hour)))?;
        let end = calendar.resolve(base + Duration::hours(i64::from(self.end_hour)))?;
        Ok(AnchoredWindow { start, end })
    }

    /// Hour labels for the grid header, normalized to "HH:00".
    ///
    /// Hours of 24 or more render as next-day times (26 becomes "02:00").
    #[must_use]
    pub fn hour_labels(&self) -> Vec<String> {
        (self.start_hour..=self.end_hour)
            .map(|hour| format!("{:02}:00", if hour >= 24 { hour - 24 } else { hour }))
            .collect()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

/// A [`TimeWindow`] resolved to absolute UTC instants for one display day.
///
/// Produced by [`TimeWindow::anchor`]; consumed by the position calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredWindow {
    pub(crate) start: DateTime<Utc>,
    pub(crate) end: DateTime<Utc>,
}

impl AnchoredWindow {
    /// The window's absolute start instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The window's absolute end instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

/// Resolves wall-clock dates of a declared display timezone to UTC instants.
///
/// The original instants on shifts are UTC; only day boundaries and window
/// anchors are wall-clock concepts, so this is the single place timezone
/// resolution happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalCalendar {
    tz: Tz,
}

impl LocalCalendar {
    /// Creates a calendar from an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimezone`] if the name is unknown.
    pub fn new(timezone: &str) -> Result<Self, DomainError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self { tz })
    }

    /// Creates a calendar for a known timezone.
    #[must_use]
    pub const fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }

    /// A UTC calendar.
    #[must_use]
    pub const fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    /// The calendar's timezone.
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.tz
    }

    /// Resolves a wall-clock datetime to a UTC instant.
    ///
    /// Ambiguous wall-clock times (DST fall-back) resolve to the earlier
    /// instant.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnresolvableLocalTime`] for times inside a
    /// DST gap.
    pub fn resolve(&self, datetime: NaiveDateTime) -> Result<DateTime<Utc>, DomainError> {
        self.tz
            .from_local_datetime(&datetime)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| DomainError::UnresolvableLocalTime {
                datetime,
                timezone: self.tz.name().to_string(),
            })
    }

    /// The `[local midnight, next local midnight)` range of a calendar day.
    ///
    /// # Errors
    ///
    /// Returns an error if midnight falls into a DST gap (some zones shift
    /// at 00:00).
    pub fn day_range(&self, day: NaiveDate) -> Result<TimeRange, DomainError> {
        let start = self.resolve(day.and_time(NaiveTime::MIN))?;
        let end = self.resolve((day + Duration::days(1)).and_time(NaiveTime::MIN))?;
        Ok(TimeRange::new(start, end))
    }
}

impl Default for LocalCalendar {
    fn default() -> Self {
        Self::utc()
    }
}

/// A calendar day with its pre-resolved UTC boundary range.
///
/// Bucketing and rendering consume these so that timezone resolution
/// happens exactly once per visible day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// The wall-clock calendar day.
    pub day: NaiveDate,
    /// The day's `[midnight, next midnight)` boundaries in UTC.
    pub range: TimeRange,
}

impl DayWindow {
    /// Resolves a calendar day's boundaries.
    ///
    /// # Errors
    ///
    /// Propagates DST-gap errors from [`LocalCalendar::day_range`].
    pub fn resolve(day: NaiveDate, calendar: &LocalCalendar) -> Result<Self, DomainError> {
        Ok(Self {
            day,
            range: calendar.day_range(day)?,
        })
    }
}

/// The Monday at or before `date`.
///
/// Sunday counts as day 7 of the prior week, so a Sunday anchor returns the
/// Monday six days earlier.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The 7 calendar days of the week containing `date`, Monday first.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = start_of_week(date);
    std::array::from_fn(|index| monday + Duration::days(index as i64))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_week_from_wednesday() {
        let wednesday = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(start_of_week(wednesday), monday);
    }

    #[test]
    fn test_start_of_week_from_sunday_goes_back_six_days() {
        let sunday = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(start_of_week(sunday), monday);
    }

    #[test]
    fn test_start_of_week_from_monday_is_identity() {
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(start_of_week(monday), monday);
    }

    #[test]
    fn test_week_days_monday_first() {
        let thursday = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let days = week_days(thursday);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_time_window_rejects_inverted_bounds() {
        assert!(TimeWindow::new(22, 6).is_err());
        assert!(TimeWindow::new(6, 6).is_err());
        assert!(TimeWindow::new(25, 30).is_err());
        assert!(TimeWindow::new(6, 49).is_err());
    }

    #[test]
    fn test_time_window_allows_next_day_wrap() {
        let window = TimeWindow::new(6, 26).unwrap();
        assert_eq!(window.total_minutes(), 20 * 60);
    }

    #[test]
    fn test_default_window_is_six_to_twenty_two() {
        let window = TimeWindow::default();
        assert_eq!(window.start_hour(), 6);
        assert_eq!(window.end_hour(), 22);
        assert_eq!(window.total_minutes(), 16 * 60);
    }

    #[test]
    fn test_anchor_utc() {
        let window = TimeWindow::default();
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let anchored = window.anchor(day, &LocalCalendar::utc()).unwrap();
        assert_eq!(
            anchored.start(),
            Utc.with_ymd_and_hms(2026, 3, 2, 6, 0, 0).unwrap()
        );
        assert_eq!(
            anchored.end(),
            Utc.with_ymd_and_hms(2026, 3, 2, 22, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_anchor_rolls_end_into_next_day() {
        let window = TimeWindow::new(6, 26).unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let anchored = window.anchor(day, &LocalCalendar::utc()).unwrap();
        assert_eq!(
            anchored.end(),
            Utc.with_ymd_and_hms(2026, 3, 3, 2, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_anchor_respects_display_timezone() {
        let window = TimeWindow::default();
        let calendar = LocalCalendar::new("Europe/Paris").unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let anchored = window.anchor(day, &calendar).unwrap();
        // Paris is UTC+1 in January: 06:00 local is 05:00 UTC.
        assert_eq!(
            anchored.start(),
            Utc.with_ymd_and_hms(2026, 1, 12, 5, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_day_range_is_one_day() {
        let calendar = LocalCalendar::utc();
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let range = calendar.day_range(day).unwrap();
        assert_eq!(range.end - range.start, Duration::days(1));
    }

    #[test]
    fn test_invalid_timezone_name() {
        assert_eq!(
            LocalCalendar::new("Invalid/Zone"),
            Err(DomainError::InvalidTimezone(String::from("Invalid/Zone")))
        );
    }

    #[test]
    fn test_hour_labels_wrap_past_midnight() {
        let window = TimeWindow::new(22, 26).unwrap();
        assert_eq!(window.hour_labels(), vec![
            "22:00", "23:00", "00:00", "01:00", "02:00"
        ]);
    }
}
