//! Tests for the fluent assertion API.

use super::*;
use crate::values::{
    CalendarSystem, DayOfWeek, Duration, Instant, LocalDate, LocalDateTime, LocalTime, Offset,
    OffsetDateTime, OffsetTime, Period, ZonedDateTime,
};

fn date(year: i32, month: u8, day: u8) -> LocalDate {
    LocalDate::iso(year, month, day).unwrap()
}

fn date_time(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> LocalDateTime {
    LocalDateTime::iso(year, month, day, hour, minute, second).unwrap()
}

fn time(hour: u8, minute: u8, second: u8) -> LocalTime {
    LocalTime::new(hour, minute, second).unwrap()
}

fn offset_hours(hours: i32) -> Offset {
    Offset::from_hours(hours).unwrap()
}

fn paris_noon() -> ZonedDateTime {
    ZonedDateTime::new(date_time(2020, 6, 10, 12, 0, 0), offset_hours(2), "Europe/Paris")
}

// =========================================================================
// Equality
// =========================================================================

#[test]
fn test_to_be_passes_on_equal_dates() {
    expect("start date", date(2020, 1, 1)).to_be(date(2020, 1, 1));
}

#[test]
#[should_panic(expected = "Expected start date to be 2020-01-01, but found 2020-01-02.")]
fn test_to_be_fails_on_different_dates() {
    expect("start date", date(2020, 1, 2)).to_be(date(2020, 1, 1));
}

#[test]
#[should_panic(expected = "Expected start date to be 1736-04-22 (Coptic), but found 2020-01-01.")]
fn test_to_be_fails_across_calendars_even_for_the_same_day() {
    let iso = date(2020, 1, 1);
    let coptic = iso.with_calendar(CalendarSystem::Coptic);
    expect("start date", iso).to_be(coptic);
}

#[test]
#[should_panic(expected = "Expected start date to be 2020-01-01, but found 2020-01-01 (Gregorian).")]
fn test_to_be_fails_when_only_the_calendar_differs() {
    // ISO and Gregorian print the same fields; the calendar still differs.
    let iso = date(2020, 1, 1);
    expect("start date", iso.with_calendar(CalendarSystem::Gregorian)).to_be(iso);
}

#[test]
fn test_to_not_be_passes_on_different_dates() {
    expect("start date", date(2020, 1, 2)).to_not_be(date(2020, 1, 1));
}

#[test]
#[should_panic(expected = "Did not expect start date to be 2020-01-01, but found 2020-01-01.")]
fn test_to_not_be_fails_on_equal_dates() {
    expect("start date", date(2020, 1, 1)).to_not_be(date(2020, 1, 1));
}

#[test]
fn test_equality_is_reflexive_symmetric_for_all_families() {
    let dt = date_time(2020, 6, 10, 12, 0, 0);
    expect("dt", dt).to_be(dt);
    expect("odt", OffsetDateTime::new(dt, offset_hours(2)))
        .to_be(OffsetDateTime::new(dt, offset_hours(2)));
    expect("zoned", paris_noon()).to_be(paris_noon());
    expect("instant", Instant::from_unix_seconds(12)).to_be(Instant::from_unix_seconds(12));
}

#[test]
#[should_panic(
    expected = "Expected departure to be 2020-06-10T12:00:00+02:00, but found 2020-06-10T10:00:00Z."
)]
fn test_offset_date_time_equality_requires_same_offset() {
    // Same instant through different offsets is not equal.
    let local_noon = date_time(2020, 6, 10, 12, 0, 0);
    let utc_ten = date_time(2020, 6, 10, 10, 0, 0);
    expect("departure", OffsetDateTime::new(utc_ten, Offset::UTC))
        .to_be(OffsetDateTime::new(local_noon, offset_hours(2)));
}

#[test]
#[should_panic(
    expected = "Expected alarm to be 2020-06-10T12:00:00+02:00 (Europe/Brussels), but found 2020-06-10T12:00:00+02:00 (Europe/Paris)."
)]
fn test_zoned_date_time_equality_includes_the_zone() {
    let paris = paris_noon();
    let brussels = ZonedDateTime::new(paris.local_date_time(), paris.offset(), "Europe/Brussels");
    expect("alarm", paris).to_be(brussels);
}

// =========================================================================
// Absence
// =========================================================================

#[test]
fn test_absent_equals_absent() {
    expect_opt::<LocalDate>("end date", None).to_be_opt(None);
}

#[test]
#[should_panic(expected = "Expected end date to be 2020-01-01, but found <null>.")]
fn test_absent_local_date_against_present_expectation() {
    expect_opt("end date", None).to_be_opt(Some(date(2020, 1, 1)));
}

#[test]
#[should_panic(expected = "Expected end date to be <null>, but found 2020-01-01.")]
fn test_present_local_date_against_absent_expectation() {
    expect_opt("end date", Some(date(2020, 1, 1))).to_be_opt(None);
}

#[test]
#[should_panic(
    expected = "Expected meeting to be 2020-06-10T14:30:00, but meeting was <null>."
)]
fn test_absent_local_date_time_equality_repeats_the_name() {
    expect_opt("meeting", None).to_be(date_time(2020, 6, 10, 14, 30, 0));
}

#[test]
#[should_panic(expected = "Expected clock-in to be 09:30:00-05:00, but clock-in was <null>.")]
fn test_absent_offset_time_equality_repeats_the_name() {
    expect_opt("clock-in", None).to_be(OffsetTime::new(time(9, 30, 0), offset_hours(-5)));
}

#[test]
#[should_panic(expected = "Expected start date to have year 2020, but start date was <null>.")]
fn test_absent_local_date_field_repeats_the_name() {
    expect_opt::<LocalDate>("start date", None).to_have_year(2020);
}

#[test]
#[should_panic(expected = "Expected departure to have offset +02:00, but found <null>.")]
fn test_absent_offset_date_time_field_does_not_repeat_the_name() {
    expect_opt::<OffsetDateTime>("departure", None).to_have_offset(offset_hours(2));
}

#[test]
#[should_panic(expected = "Expected period to have 5 seconds, but found <null>.")]
fn test_absent_period_field_does_not_repeat_the_name() {
    expect_opt::<Period>("period", None).to_have_seconds(5);
}

#[test]
fn test_to_not_be_passes_on_absent_subject() {
    // Absent never equals present.
    expect_opt("end date", None).to_not_be(date(2020, 1, 1));
}

#[test]
#[should_panic(expected = "Did not expect end date to be <null>.")]
fn test_to_not_be_opt_fails_with_fixed_message_when_both_absent() {
    expect_opt::<LocalDate>("end date", None).to_not_be_opt(None);
}

#[test]
fn test_to_not_be_opt_passes_on_mixed_presence() {
    expect_opt("end date", Some(date(2020, 1, 1))).to_not_be_opt(None);
    expect_opt::<LocalDate>("end date", None).to_not_be_opt(Some(date(2020, 1, 1)));
}

// =========================================================================
// Calendar membership
// =========================================================================

#[test]
fn test_to_be_in_calendar_passes() {
    expect("start date", date(2020, 1, 1)).to_be_in_calendar(CalendarSystem::Iso);
}

#[test]
#[should_panic(
    expected = "Expected start date to be in the Coptic calendar, but found the ISO calendar."
)]
fn test_to_be_in_calendar_fails() {
    expect("start date", date(2020, 1, 1)).to_be_in_calendar(CalendarSystem::Coptic);
}

#[test]
fn test_field_assertions_use_the_subjects_own_calendar() {
    // 2020-01-01 ISO reinterpreted as Coptic reads 1736-04-22.
    let coptic = date(2020, 1, 1).with_calendar(CalendarSystem::Coptic);
    expect("feast", coptic)
        .to_have_year(1736)
        .and()
        .to_have_month(4)
        .and()
        .to_have_day(22);
}

#[test]
fn test_day_of_week_is_calendar_independent() {
    let iso = date(2020, 1, 1);
    let coptic = iso.with_calendar(CalendarSystem::Coptic);
    expect("iso", iso).to_have_day_of_week(DayOfWeek::Wednesday);
    expect("coptic", coptic).to_have_day_of_week(DayOfWeek::Wednesday);
}

// =========================================================================
// Field assertions
// =========================================================================

#[test]
fn test_date_fields() {
    expect("start date", date(2020, 3, 1))
        .to_have_year(2020)
        .and()
        .to_have_month(3)
        .and()
        .to_have_day(1)
        .and()
        .to_have_day_of_year(61);
}

#[test]
#[should_panic(expected = "Expected start date to have year 2021, but found 2020.")]
fn test_wrong_year() {
    expect("start date", date(2020, 1, 1)).to_have_year(2021);
}

#[test]
#[should_panic(expected = "Expected start date to have day of week Monday, but found Wednesday.")]
fn test_wrong_day_of_week() {
    expect("start date", date(2020, 1, 1)).to_have_day_of_week(DayOfWeek::Monday);
}

#[test]
#[should_panic(expected = "Expected start date to have day of year 60, but found 61.")]
fn test_wrong_day_of_year() {
    expect("start date", date(2020, 3, 1)).to_have_day_of_year(60);
}

#[test]
fn test_time_fields() {
    let dt = date_time(2020, 6, 10, 14, 30, 5);
    expect("meeting", dt)
        .to_have_hour(14)
        .and()
        .to_have_minute(30)
        .and()
        .to_have_second(5)
        .and()
        .to_have_millisecond(0);
}

#[test]
#[should_panic(
    expected = "Expected wake-up to have tick of day 360,000,000,000, but found 363,000,000,000."
)]
fn test_tick_of_day_renders_with_grouping() {
    // 10:05:00 is 36,300 seconds, i.e. 363,000,000,000 ticks into the day.
    expect("wake-up", time(10, 5, 0)).to_have_tick_of_day(360_000_000_000);
}

#[test]
#[should_panic(
    expected = "Expected wake-up to have nanosecond of day 36,000,000,000,000, but found 36,300,000,000,000."
)]
fn test_nanosecond_of_day_renders_with_grouping() {
    expect("wake-up", time(10, 5, 0)).to_have_nanosecond_of_day(36_000_000_000_000);
}

#[test]
#[should_panic(expected = "Expected meeting to have nanosecond of second 5, but found 0.")]
fn test_nanosecond_of_second_renders_plainly() {
    expect("meeting", date_time(2020, 6, 10, 14, 30, 5)).to_have_nanosecond_of_second(5);
}

#[test]
fn test_offset_fields() {
    let odt = OffsetDateTime::new(date_time(2020, 6, 10, 12, 0, 0), offset_hours(2));
    expect("departure", odt).to_have_offset(offset_hours(2));

    let ot = OffsetTime::new(time(9, 30, 0), offset_hours(-5));
    expect("clock-in", ot).to_have_offset(offset_hours(-5)).and().to_have_hour(9);
}

#[test]
#[should_panic(expected = "Expected departure to have offset +02:00, but found Z.")]
fn test_wrong_offset() {
    let odt = OffsetDateTime::new(date_time(2020, 6, 10, 12, 0, 0), Offset::UTC);
    expect("departure", odt).to_have_offset(offset_hours(2));
}

#[test]
fn test_zone_assertions() {
    expect("alarm", paris_noon())
        .to_be_in_zone("Europe/Paris")
        .and()
        .to_have_offset(offset_hours(2))
        .and()
        .to_be_in_calendar(CalendarSystem::Iso);
}

#[test]
#[should_panic(
    expected = "Expected alarm to be in zone Europe/Paris, but found zone Europe/Brussels."
)]
fn test_wrong_zone() {
    let paris = paris_noon();
    let brussels = ZonedDateTime::new(paris.local_date_time(), paris.offset(), "Europe/Brussels");
    expect("alarm", brussels).to_be_in_zone("Europe/Paris");
}

// =========================================================================
// Comparison operators
// =========================================================================

#[test]
fn test_strict_ordering() {
    let x = date(2020, 1, 1);
    let y = x.plus_days(1);
    expect("x", x).to_be_less_than(y);
    expect("y", y).to_be_greater_than(x);
}

#[test]
#[should_panic(expected = "Expected x to be greater than 2020-01-02, but found 2020-01-01.")]
fn test_strict_ordering_inverse_fails() {
    expect("x", date(2020, 1, 1)).to_be_greater_than(date(2020, 1, 2));
}

#[test]
#[should_panic(expected = "Expected x to be less than 2020-01-01, but found 2020-01-01.")]
fn test_equal_values_fail_strict_less_than() {
    expect("x", date(2020, 1, 1)).to_be_less_than(date(2020, 1, 1));
}

#[test]
#[should_panic(expected = "Expected x to be greater than 2020-01-01, but found 2020-01-01.")]
fn test_equal_values_fail_strict_greater_than() {
    expect("x", date(2020, 1, 1)).to_be_greater_than(date(2020, 1, 1));
}

#[test]
fn test_equal_values_pass_or_equal_variants() {
    let x = date(2020, 1, 1);
    expect("x", x).to_be_greater_than_or_equal_to(x);
    expect("x", x).to_be_less_than_or_equal_to(x);
}

#[test]
fn test_ordering_compares_absolute_position_across_calendars() {
    // The ordering is over absolute days, not over printed fields.
    let iso = date(2020, 1, 1);
    let coptic_later = iso.plus_days(1).with_calendar(CalendarSystem::Coptic);
    expect("iso", iso).to_be_less_than(coptic_later);
}

#[test]
fn test_instant_ordering() {
    let epoch = Instant::UNIX_EPOCH;
    let later = epoch + Duration::from_seconds(1);
    expect("later", later).to_be_greater_than(epoch);
    expect("epoch", epoch).to_be_less_than_or_equal_to(epoch);
}

#[test]
fn test_offset_aware_ordering() {
    // 12:00+02:00 and 10:00Z are the same instant.
    let local_noon = OffsetDateTime::new(date_time(2020, 6, 10, 12, 0, 0), offset_hours(2));
    let utc_ten = OffsetDateTime::new(date_time(2020, 6, 10, 10, 0, 0), Offset::UTC);
    expect("noon", local_noon).to_be_greater_than_or_equal_to(utc_ten);
    expect("noon", local_noon).to_be_less_than_or_equal_to(utc_ten);
}

// =========================================================================
// Instants
// =========================================================================

#[test]
fn test_to_be_close_to() {
    let launch = Instant::from_utc(2020, 1, 1, 12, 0, 0).unwrap();
    expect("launch", launch + Duration::from_seconds(3))
        .to_be_close_to(launch, Duration::from_seconds(5));
    expect("launch", launch - Duration::from_seconds(5))
        .to_be_close_to(launch, Duration::from_seconds(5));
}

#[test]
#[should_panic(
    expected = "Expected launch to be within 5s of 2020-01-01T12:00:00Z, but found 2020-01-01T12:00:10Z."
)]
fn test_to_be_close_to_fails_outside_tolerance() {
    let launch = Instant::from_utc(2020, 1, 1, 12, 0, 0).unwrap();
    expect("launch", launch + Duration::from_seconds(10))
        .to_be_close_to(launch, Duration::from_seconds(5));
}

// =========================================================================
// Periods
// =========================================================================

#[test]
fn test_period_field_assertions_are_unnormalized() {
    expect("period", Period::from_seconds(5)).to_have_seconds(5);
    // 24 hours stays 24 hours; it never becomes a day field.
    expect("period", Period::from_hours(24))
        .to_have_hours(24)
        .and()
        .to_have_days(0);
}

#[test]
#[should_panic(expected = "Expected period to have 6 seconds, but found 5.")]
fn test_period_wrong_seconds() {
    expect("period", Period::from_seconds(5)).to_have_seconds(6);
}

#[test]
fn test_period_equality_normalizes_total_length() {
    expect("period", Period::from_hours(24)).to_be(Period::from_days(1));
    expect("period", Period::from_minutes(60)).to_be(Period::from_hours(1));
}

#[test]
#[should_panic(expected = "Expected period to be P1M, but found P30D.")]
fn test_period_months_never_equal_days() {
    expect("period", Period::from_days(30)).to_be(Period::from_months(1));
}

#[test]
fn test_period_against_duration() {
    expect("period", Period::from_hours(24)).to_be_duration(Duration::from_days(1));
}

#[test]
#[should_panic(expected = "Expected period to be a duration of 86400s, but found PT23H.")]
fn test_period_against_duration_fails() {
    expect("period", Period::from_hours(23)).to_be_duration(Duration::from_days(1));
}

#[test]
#[should_panic(expected = "Expected period to be a duration of 2592000s, but found P1M.")]
fn test_period_with_months_never_equals_a_duration() {
    expect("period", Period::from_months(1)).to_be_duration(Duration::from_days(30));
}

#[test]
#[should_panic(expected = "Expected period to have 360,000,000,000 ticks, but found 363,000,000,000.")]
fn test_period_ticks_render_with_grouping() {
    expect("period", Period::from_ticks(363_000_000_000)).to_have_ticks(360_000_000_000);
}

#[test]
#[should_panic(expected = "Expected period to have 1 nanosecond, but found 0.")]
fn test_period_singular_unit() {
    expect("period", Period::ZERO).to_have_nanoseconds(1);
}

#[test]
fn test_period_zero() {
    expect("period", Period::ZERO).to_be_zero();
}

#[test]
#[should_panic(expected = "Expected period to be zero, but found PT5S.")]
fn test_period_zero_fails() {
    expect("period", Period::from_seconds(5)).to_be_zero();
}

// =========================================================================
// Cross-type comparisons
// =========================================================================

#[test]
fn test_local_date_against_chrono() {
    let naive = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    expect("start date", date(2020, 1, 1)).to_be_date(naive);
}

#[test]
#[should_panic(expected = "Expected start date to be 2020-01-01, but found 2020-01-01 (Coptic).")]
fn test_chrono_comparison_is_iso_only() {
    let naive = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let coptic = LocalDate::new(CalendarSystem::Coptic, 2020, 1, 1).unwrap();
    expect("start date", coptic).to_be_date(naive);
}

#[test]
fn test_local_date_time_against_chrono() {
    let naive = chrono::NaiveDate::from_ymd_opt(2020, 6, 10)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    expect("meeting", date_time(2020, 6, 10, 14, 30, 0)).to_be_date_time(naive);
}

#[test]
#[should_panic(
    expected = "Expected meeting to be 2020-06-10T14:31:00, but found 2020-06-10T14:30:00."
)]
fn test_to_be_date_time_fails_on_mismatch() {
    let naive = chrono::NaiveDate::from_ymd_opt(2020, 6, 10)
        .unwrap()
        .and_hms_opt(14, 31, 0)
        .unwrap();
    expect("meeting", date_time(2020, 6, 10, 14, 30, 0)).to_be_date_time(naive);
}

// =========================================================================
// Chaining and projections
// =========================================================================

#[test]
fn test_which_reads_the_validated_value() {
    let continuation = expect("start date", date(2020, 1, 1)).to_have_year(2020);
    assert_eq!(continuation.which(), &date(2020, 1, 1));
    assert_eq!(continuation.name(), "start date");
}

#[test]
fn test_date_component_projection() {
    let dt = date_time(2020, 6, 10, 14, 30, 0);
    let projected = expect("meeting", dt).to_have_date_component();
    assert_eq!(projected.which(), &date(2020, 6, 10));
    projected.and().to_have_month(6);
}

#[test]
fn test_time_component_projection() {
    let odt = OffsetDateTime::new(date_time(2020, 6, 10, 14, 30, 0), offset_hours(2));
    expect("departure", odt)
        .to_have_time_component()
        .and()
        .to_have_hour(14);
}

#[test]
fn test_zoned_projection_drops_the_zone() {
    let local = expect("alarm", paris_noon()).to_have_local_date_time();
    assert_eq!(local.which(), &date_time(2020, 6, 10, 12, 0, 0));
}

#[test]
#[should_panic(expected = "Expected meeting to have a date component, but meeting was <null>.")]
fn test_projection_fails_on_absent_subject() {
    expect_opt::<LocalDateTime>("meeting", None).to_have_date_component();
}

#[test]
#[should_panic(expected = "subject `end date` was read while absent")]
fn test_which_on_absent_continuation_is_a_precondition_error() {
    let continuation = expect_opt::<LocalDate>("end date", None).to_be_opt(None);
    let _ = continuation.which();
}
