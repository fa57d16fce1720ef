// Scheduling arithmetic: end-time derivation, duration defaulting, and the
// half-open overlap rule used by the conflict query.

use chrono::{NaiveDate, NaiveDateTime};

use petshop::appointments::{AppointmentTimeRules, DEFAULT_DURATION_MINUTES};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 10)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn default_duration_is_thirty_minutes() {
    assert_eq!(DEFAULT_DURATION_MINUTES, 30);
    assert_eq!(AppointmentTimeRules::end(at(14, 0), None), at(14, 30));
}

#[test]
fn explicit_duration_wins_over_the_default() {
    assert_eq!(AppointmentTimeRules::end(at(14, 0), Some(90)), at(15, 30));
}

#[test]
fn resolve_helpers_fall_back_when_input_is_missing() {
    assert_eq!(
        AppointmentTimeRules::resolve_start(None, at(9, 0)),
        at(9, 0)
    );
    assert_eq!(
        AppointmentTimeRules::resolve_start(Some(at(11, 0)), at(9, 0)),
        at(11, 0)
    );
    assert_eq!(AppointmentTimeRules::resolve_duration(None, 45), 45);
    assert_eq!(AppointmentTimeRules::resolve_duration(Some(20), 45), 20);
}

#[test]
fn overlap_table() {
    // (a_start, a_end, b_start, b_end, expected)
    let cases = [
        // identical slots
        (at(9, 0), at(9, 30), at(9, 0), at(9, 30), true),
        // partial overlap on either side
        (at(9, 0), at(9, 30), at(9, 15), at(9, 45), true),
        (at(9, 15), at(9, 45), at(9, 0), at(9, 30), true),
        // containment
        (at(9, 0), at(10, 0), at(9, 15), at(9, 30), true),
        (at(9, 15), at(9, 30), at(9, 0), at(10, 0), true),
        // back-to-back slots share a boundary instant but do not overlap
        (at(9, 0), at(9, 30), at(9, 30), at(10, 0), false),
        (at(9, 30), at(10, 0), at(9, 0), at(9, 30), false),
        // fully disjoint
        (at(9, 0), at(9, 30), at(11, 0), at(11, 30), false),
    ];

    for (a_start, a_end, b_start, b_end, expected) in cases {
        assert_eq!(
            AppointmentTimeRules::overlaps(a_start, a_end, b_start, b_end),
            expected,
            "overlap({a_start}, {a_end}, {b_start}, {b_end})"
        );
    }
}
