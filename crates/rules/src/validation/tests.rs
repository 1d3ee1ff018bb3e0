//! Tests for rule and schedule validation.

use chrono::NaiveDate;

use super::*;
use crate::schema::{CycleSchedule, NewRule, RecurrenceType, RecurringTaskRule, ScheduleVisibility};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn valid_rule() -> RecurringTaskRule {
    NewRule::new("Gym", RecurrenceType::Weekly, 1)
        .with_icon("dumbbell")
        .with_color("#10B981")
        .into_rule("r1".to_string())
}

fn valid_schedule() -> CycleSchedule {
    CycleSchedule::new(date(2024, 1, 1), date(2024, 12, 31), 5, 2)
}

fn error_paths(result: &ValidationResult) -> Vec<&str> {
    result.errors.iter().map(|e| e.path.as_str()).collect()
}

// -- rules ---------------------------------------------------------------

#[test]
fn valid_rule_passes() {
    let result = validate_rule(&valid_rule());
    assert!(result.valid, "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn blank_text_rejected() {
    for text in ["", "   ", "\t\n"] {
        let mut rule = valid_rule();
        rule.text = text.to_string();
        let result = validate_rule(&rule);
        assert!(!result.valid);
        assert_eq!(error_paths(&result), vec!["text"]);
    }
}

#[test]
fn anchors_outside_domain_rejected() {
    let cases = [
        (RecurrenceType::Weekly, 8),
        (RecurrenceType::Monthly, 0),
        (RecurrenceType::Monthly, 32),
        (RecurrenceType::Yearly, 0),
        (RecurrenceType::Yearly, 367),
        (RecurrenceType::Yearly, -5),
    ];
    for (kind, anchor) in cases {
        let mut rule = valid_rule();
        rule.recurrence_type = kind.clone();
        rule.anchor = anchor;
        let result = validate_rule(&rule);
        assert!(!result.valid, "{kind} {anchor} should be rejected");
        assert_eq!(error_paths(&result), vec!["value"]);
    }
}

#[test]
fn monthly_32_message_names_range() {
    let mut rule = valid_rule();
    rule.recurrence_type = RecurrenceType::Monthly;
    rule.anchor = 32;
    let result = validate_rule(&rule);
    assert!(result.errors[0].message.contains("1..=31"));
    assert!(result.errors[0].message.starts_with("Monthly"));
}

#[test]
fn weekly_zero_suggests_sunday_seven() {
    let mut rule = valid_rule();
    rule.anchor = 0;
    let result = validate_rule(&rule);
    assert!(!result.valid);
    assert_eq!(result.errors[0].suggestion.as_deref(), Some("Sunday is 7, not 0"));
}

#[test]
fn domain_edges_accepted() {
    let cases = [
        (RecurrenceType::Weekly, 1),
        (RecurrenceType::Weekly, 7),
        (RecurrenceType::Monthly, 1),
        (RecurrenceType::Monthly, 31),
        (RecurrenceType::Yearly, 1),
        (RecurrenceType::Yearly, 366),
    ];
    for (kind, anchor) in cases {
        let mut rule = valid_rule();
        rule.recurrence_type = kind.clone();
        rule.anchor = anchor;
        assert!(validate_rule(&rule).valid, "{kind} {anchor} should be accepted");
    }
}

#[test]
fn unknown_type_rejected_with_suggestion() {
    let mut rule = valid_rule();
    rule.recurrence_type = RecurrenceType::Unknown("daily".to_string());
    let result = validate_rule(&rule);
    assert!(!result.valid);
    assert_eq!(error_paths(&result), vec!["type"]);
    assert!(result.errors[0].suggestion.is_some());
}

#[test]
fn short_month_anchor_warns() {
    let mut rule = valid_rule();
    rule.recurrence_type = RecurrenceType::Monthly;
    rule.anchor = 30;
    let result = validate_rule(&rule);
    assert!(result.valid);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].path, "value");
}

#[test]
fn yearly_leap_drift_warns() {
    let mut rule = valid_rule();
    rule.recurrence_type = RecurrenceType::Yearly;

    rule.anchor = 59;
    assert!(validate_rule(&rule).warnings.is_empty());

    rule.anchor = 60;
    let result = validate_rule(&rule);
    assert!(result.valid);
    assert!(result.warnings[0].message.contains("leap"));

    rule.anchor = 366;
    let result = validate_rule(&rule);
    assert!(result.valid);
    assert!(result.warnings[0].message.contains("only exists in leap years"));
}

#[test]
fn unknown_icon_gets_suggestion() {
    let mut rule = valid_rule();
    rule.icon = "dumbel".into();
    let result = validate_rule(&rule);
    assert!(!result.valid);
    assert_eq!(error_paths(&result), vec!["icon"]);
    assert_eq!(
        result.errors[0].suggestion.as_deref(),
        Some("Did you mean 'dumbbell'?")
    );
}

#[test]
fn malformed_icon_rejected() {
    let mut rule = valid_rule();
    rule.icon = "Shopping Cart".into();
    let result = validate_rule(&rule);
    assert!(!result.valid);
    assert!(result.errors[0].message.contains("kebab-case"));
}

#[test]
fn non_hex_color_only_warns() {
    let mut rule = valid_rule();
    rule.color = "rebeccapurple".to_string();
    let result = validate_rule(&rule);
    assert!(result.valid);
    assert_eq!(result.warnings[0].path, "color");

    rule.color = "#abc".to_string();
    assert!(validate_rule(&rule).warnings.is_empty());
}

#[test]
fn multiple_errors_reported_together() {
    let mut rule = valid_rule();
    rule.text = String::new();
    rule.anchor = 9;
    rule.icon = "nope-nope-nope-nope".into();
    let result = validate_rule(&rule);
    assert_eq!(error_paths(&result), vec!["text", "value", "icon"]);
    let summary = result.error_summary();
    assert!(summary.starts_with("text: "));
    assert_eq!(summary.matches("; ").count(), 2);
}

#[test]
fn rule_json_parse_errors_reported() {
    let result = validate_rule_json("{not json");
    assert!(!result.valid);
    assert_eq!(result.errors[0].path, "");
    assert!(result.errors[0].message.starts_with("JSON parse error"));

    let ok = validate_rule_json(
        r##"{"id":"x","text":"Rent","type":"monthly","value":1,"icon":"wallet","color":"#fff"}"##,
    );
    assert!(ok.valid, "errors: {:?}", ok.errors);
}

// -- schedules -------------------------------------------------------------

#[test]
fn valid_schedule_passes() {
    let result = validate_schedule(&valid_schedule());
    assert!(result.valid, "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn inverted_range_rejected() {
    let schedule = CycleSchedule::new(date(2024, 2, 1), date(2024, 1, 1), 5, 2);
    let result = validate_schedule(&schedule);
    assert!(!result.valid);
    assert_eq!(error_paths(&result), vec!["to"]);
}

#[test]
fn single_day_range_accepted() {
    let schedule = CycleSchedule::new(date(2024, 2, 1), date(2024, 2, 1), 1, 1);
    assert!(validate_schedule(&schedule).valid);
}

#[test]
fn zero_cycle_rejected() {
    let schedule = CycleSchedule::new(date(2024, 1, 1), date(2024, 1, 31), 0, 0);
    let result = validate_schedule(&schedule);
    assert!(!result.valid);
    assert_eq!(error_paths(&result), vec!["workDays"]);
}

#[test]
fn one_sided_cycles_warn() {
    let no_rest = CycleSchedule::new(date(2024, 1, 1), date(2024, 1, 31), 3, 0);
    let result = validate_schedule(&no_rest);
    assert!(result.valid);
    assert_eq!(result.warnings[0].path, "restDays");

    let no_work = CycleSchedule::new(date(2024, 1, 1), date(2024, 1, 31), 0, 3);
    let result = validate_schedule(&no_work);
    assert!(result.valid);
    assert_eq!(result.warnings[0].path, "workDays");
}

#[test]
fn schedule_icons_checked() {
    let schedule = valid_schedule().with_icons("brefcase", "hoem");
    let result = validate_schedule(&schedule);
    assert_eq!(error_paths(&result), vec!["workIcon", "restIcon"]);
}

#[test]
fn fully_hidden_schedule_warns() {
    let schedule = valid_schedule().with_visibility(ScheduleVisibility::NONE);
    let result = validate_schedule(&schedule);
    assert!(result.valid);
    assert_eq!(result.warnings[0].path, "showIcons");
}

#[test]
fn result_serializes_without_empty_suggestion() {
    let mut rule = valid_rule();
    rule.text = String::new();
    let json = serde_json::to_value(validate_rule(&rule)).unwrap();
    assert_eq!(json["valid"], false);
    assert!(json["errors"][0].get("suggestion").is_none());
}
