use crate::dto::booking::CheckMatchesRequest;
use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Length of a booked slot, used to ask the server about overlaps.
pub const SLOT_MINUTES: i64 = 120;

/// The interval a booking starting at `start` would occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BookingWindow {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            end: start + Duration::minutes(SLOT_MINUTES),
        }
    }

    /// Builds the window from a picker timestamp in milliseconds since the
    /// epoch, as handed over by the browser.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::starting_at)
    }

    pub fn to_request(&self) -> CheckMatchesRequest {
        CheckMatchesRequest {
            date_start: iso(self.start),
            date_end: iso(self.end),
        }
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T18:00:00.000Z`.
fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Visibility of the booking form below the date picker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingGate {
    window: Option<BookingWindow>,
}

impl BookingGate {
    /// Records the picked start; clearing the picker hides the form again.
    pub fn pick(&mut self, start: Option<DateTime<Utc>>) -> Option<BookingWindow> {
        self.window = start.map(BookingWindow::starting_at);
        self.window
    }

    pub fn window(&self) -> Option<BookingWindow> {
        self.window
    }

    pub fn form_visible(&self) -> bool {
        self.window.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_window_spans_two_hours() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 23, 15, 0).unwrap();
        let window = BookingWindow::starting_at(start);
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 5, 2, 1, 15, 0).unwrap());

        let request = window.to_request();
        assert_eq!(request.date_start, "2024-05-01T23:15:00.000Z");
        assert_eq!(request.date_end, "2024-05-02T01:15:00.000Z");
    }

    #[test]
    fn test_window_from_browser_millis() {
        let window = BookingWindow::from_millis(1_714_600_800_000).unwrap();
        assert_eq!(window.to_request().date_start, "2024-05-01T22:00:00.000Z");
    }

    #[test]
    fn test_gate_shows_form_only_with_a_date() {
        let mut gate = BookingGate::default();
        assert!(!gate.form_visible());

        let start = Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();
        assert!(gate.pick(Some(start)).is_some());
        assert!(gate.form_visible());

        assert_eq!(gate.pick(None), None);
        assert!(!gate.form_visible());
    }
}
