//! Recurring task rule checks: label, anchor domain, color.

use crate::schema::RecurrenceType;

use super::ValidationResult;

pub(super) fn validate_text(text: &str, result: &mut ValidationResult) {
    if text.trim().is_empty() {
        result.error("text", "Task text must not be empty");
    }
}

pub(super) fn validate_anchor(kind: &RecurrenceType, anchor: i32, result: &mut ValidationResult) {
    let Some(domain) = kind.anchor_domain() else {
        result.error_with_suggestion(
            "type",
            format!("Unknown recurrence type '{}'", kind),
            "expected one of: weekly, monthly, yearly",
        );
        return;
    };

    if !domain.contains(&anchor) {
        let unit = match kind {
            RecurrenceType::Weekly => "day of week (1 = Monday, 7 = Sunday)",
            RecurrenceType::Monthly => "day of month",
            _ => "day of year",
        };
        if matches!(kind, RecurrenceType::Weekly) && anchor == 0 {
            result.error_with_suggestion(
                "value",
                format!("Weekly anchor 0 is out of range {}..={}", domain.start(), domain.end()),
                "Sunday is 7, not 0",
            );
        } else {
            result.error(
                "value",
                format!(
                    "{} anchor {} is out of range {}..={} ({})",
                    capitalize(kind.as_str()),
                    anchor,
                    domain.start(),
                    domain.end(),
                    unit
                ),
            );
        }
        return;
    }

    match kind {
        RecurrenceType::Monthly if anchor >= 29 => result.warn(
            "value",
            format!("Day {anchor} does not exist in every month; those months are skipped"),
        ),
        RecurrenceType::Yearly if anchor == 366 => result.warn(
            "value",
            "Day 366 only exists in leap years",
        ),
        RecurrenceType::Yearly if anchor >= 60 => result.warn(
            "value",
            format!("Day {anchor} of the year falls one calendar day earlier in leap years"),
        ),
        _ => {}
    }
}

pub(super) fn validate_color(color: &str, result: &mut ValidationResult) {
    if !is_hex_color(color) {
        result.warn(
            "color",
            format!("Color '{}' is not a hex color like '#3B82F6'", color),
        );
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
