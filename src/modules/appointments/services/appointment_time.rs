use chrono::{Duration, NaiveDateTime};

/// Appointment length used when a booking does not specify one
pub const DEFAULT_DURATION_MINUTES: i32 = 30;

/// Pure time arithmetic for appointment scheduling.
///
/// The repository performs the actual conflict query; these helpers define
/// what "conflict" means so the semantics are testable without a database.
pub struct AppointmentTimeRules;

impl AppointmentTimeRules {
    /// Take the input start when present, the fallback otherwise
    pub fn resolve_start(input: Option<NaiveDateTime>, fallback: NaiveDateTime) -> NaiveDateTime {
        input.unwrap_or(fallback)
    }

    /// Take the input duration when present, the fallback otherwise
    pub fn resolve_duration(input: Option<i32>, fallback: i32) -> i32 {
        input.unwrap_or(fallback)
    }

    /// End of a slot starting at `start`; a missing duration means the
    /// default 30 minutes
    pub fn end(start: NaiveDateTime, duration_minutes: Option<i32>) -> NaiveDateTime {
        let duration = duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
        start + Duration::minutes(duration as i64)
    }

    /// Half-open interval overlap: `[a_start, a_end)` against
    /// `[b_start, b_end)`. Back-to-back slots do not overlap.
    pub fn overlaps(
        a_start: NaiveDateTime,
        a_end: NaiveDateTime,
        b_start: NaiveDateTime,
        b_end: NaiveDateTime,
    ) -> bool {
        a_start < b_end && b_start < a_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn end_uses_explicit_duration() {
        assert_eq!(AppointmentTimeRules::end(at(9, 0), Some(45)), at(9, 45));
    }

    #[test]
    fn end_defaults_to_thirty_minutes() {
        assert_eq!(AppointmentTimeRules::end(at(9, 0), None), at(9, 30));
    }

    #[test]
    fn resolve_prefers_input_over_fallback() {
        assert_eq!(
            AppointmentTimeRules::resolve_start(Some(at(10, 0)), at(8, 0)),
            at(10, 0)
        );
        assert_eq!(AppointmentTimeRules::resolve_start(None, at(8, 0)), at(8, 0));
        assert_eq!(AppointmentTimeRules::resolve_duration(Some(60), 30), 60);
        assert_eq!(AppointmentTimeRules::resolve_duration(None, 30), 30);
    }

    #[test]
    fn overlapping_slots_conflict() {
        assert!(AppointmentTimeRules::overlaps(
            at(9, 0),
            at(9, 30),
            at(9, 15),
            at(9, 45)
        ));
        // containment counts too
        assert!(AppointmentTimeRules::overlaps(
            at(9, 0),
            at(10, 0),
            at(9, 15),
            at(9, 30)
        ));
    }

    #[test]
    fn back_to_back_slots_do_not_conflict() {
        assert!(!AppointmentTimeRules::overlaps(
            at(9, 0),
            at(9, 30),
            at(9, 30),
            at(10, 0)
        ));
        assert!(!AppointmentTimeRules::overlaps(
            at(9, 30),
            at(10, 0),
            at(9, 0),
            at(9, 30)
        ));
    }
}
