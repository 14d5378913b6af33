use assert_matches::assert_matches;
use uuid::Uuid;

use availability_cell::models::UpdateScheduleRequest;
use availability_cell::services::ScheduleService;
use shared_models::{
    AvailabilityError, CreateLeaveRequest, DayOfWeek, LeaveInterval, WeeklySchedule,
};

fn update(day: DayOfWeek, ranges: &[&str]) -> UpdateScheduleRequest {
    UpdateScheduleRequest {
        day,
        ranges: ranges.iter().map(|r| r.to_string()).collect(),
    }
}

fn leave_request(start: &str, end: &str) -> CreateLeaveRequest {
    CreateLeaveRequest {
        start_date: start.parse().unwrap(),
        end_date: end.parse().unwrap(),
        reason: Some("vacances".to_string()),
    }
}

#[test]
fn valid_ranges_are_applied() {
    let mut schedule = WeeklySchedule::new();

    ScheduleService::set_working_hours(
        &mut schedule,
        update(DayOfWeek::Monday, &["09:00-12:00", "14:00-17:00"]),
    )
    .unwrap();

    assert_eq!(
        schedule.ranges_for(DayOfWeek::Monday),
        ["09:00-12:00", "14:00-17:00"]
    );
}

#[test]
fn range_without_separator_is_rejected_and_schedule_untouched() {
    let mut schedule = WeeklySchedule::new();
    ScheduleService::set_working_hours(&mut schedule, update(DayOfWeek::Monday, &["09:00-12:00"]))
        .unwrap();

    let result = ScheduleService::set_working_hours(
        &mut schedule,
        update(DayOfWeek::Monday, &["13:00-14:00", "15:00"]),
    );

    assert_matches!(result, Err(AvailabilityError::Validation(_)));
    assert_eq!(schedule.ranges_for(DayOfWeek::Monday), ["09:00-12:00"]);
}

#[test]
fn inverted_range_is_rejected() {
    let mut schedule = WeeklySchedule::new();

    let result = ScheduleService::set_working_hours(
        &mut schedule,
        update(DayOfWeek::Tuesday, &["17:00-09:00"]),
    );
    assert_matches!(result, Err(AvailabilityError::Validation(_)));

    let result = ScheduleService::set_working_hours(
        &mut schedule,
        update(DayOfWeek::Tuesday, &["09:00-09:00"]),
    );
    assert_matches!(result, Err(AvailabilityError::Validation(_)));
}

#[test]
fn unparseable_time_is_rejected() {
    let mut schedule = WeeklySchedule::new();

    let result = ScheduleService::set_working_hours(
        &mut schedule,
        update(DayOfWeek::Wednesday, &["9h00-12h00"]),
    );
    assert_matches!(result, Err(AvailabilityError::Validation(_)));
}

#[test]
fn empty_range_list_clears_the_day() {
    let mut schedule = WeeklySchedule::new();
    ScheduleService::set_working_hours(&mut schedule, update(DayOfWeek::Monday, &["09:00-12:00"]))
        .unwrap();

    ScheduleService::set_working_hours(&mut schedule, update(DayOfWeek::Monday, &[])).unwrap();
    assert!(schedule.is_empty());
}

#[test]
fn add_leave_records_the_interval() {
    let mut leaves: Vec<LeaveInterval> = Vec::new();
    let doctor_id = Uuid::new_v4();

    let interval = ScheduleService::add_leave(
        &mut leaves,
        doctor_id,
        leave_request("2025-07-01", "2025-07-15"),
    )
    .unwrap();

    assert_eq!(leaves.len(), 1);
    assert_eq!(interval.doctor_id, doctor_id);
    assert!(interval.contains("2025-07-10".parse().unwrap()));
}

#[test]
fn add_leave_rejects_inverted_dates() {
    let mut leaves: Vec<LeaveInterval> = Vec::new();

    let result = ScheduleService::add_leave(
        &mut leaves,
        Uuid::new_v4(),
        leave_request("2025-07-15", "2025-07-01"),
    );

    assert_matches!(result, Err(AvailabilityError::Validation(_)));
    assert!(leaves.is_empty());
}

#[test]
fn add_leave_rejects_span_already_covered() {
    let mut leaves: Vec<LeaveInterval> = Vec::new();
    let doctor_id = Uuid::new_v4();

    ScheduleService::add_leave(&mut leaves, doctor_id, leave_request("2025-07-01", "2025-07-15"))
        .unwrap();

    let result = ScheduleService::add_leave(
        &mut leaves,
        doctor_id,
        leave_request("2025-07-05", "2025-07-10"),
    );

    assert_matches!(result, Err(AvailabilityError::Validation(_)));
    assert_eq!(leaves.len(), 1);
}

#[test]
fn partially_overlapping_leave_is_allowed() {
    let mut leaves: Vec<LeaveInterval> = Vec::new();
    let doctor_id = Uuid::new_v4();

    ScheduleService::add_leave(&mut leaves, doctor_id, leave_request("2025-07-01", "2025-07-10"))
        .unwrap();
    ScheduleService::add_leave(&mut leaves, doctor_id, leave_request("2025-07-08", "2025-07-20"))
        .unwrap();

    assert_eq!(leaves.len(), 2);
}

#[test]
fn cancel_leave_removes_by_id() {
    let mut leaves: Vec<LeaveInterval> = Vec::new();
    let interval = ScheduleService::add_leave(
        &mut leaves,
        Uuid::new_v4(),
        leave_request("2025-07-01", "2025-07-15"),
    )
    .unwrap();

    ScheduleService::cancel_leave(&mut leaves, interval.id).unwrap();
    assert!(leaves.is_empty());

    let result = ScheduleService::cancel_leave(&mut leaves, interval.id);
    assert_matches!(result, Err(AvailabilityError::NotFound(_)));
}
