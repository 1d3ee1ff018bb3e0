//! Write-time validation of recurring task rules and cycle schedules.
//!
//! The projector never rejects input: bad anchors or degenerate cycles just
//! never match. Validation is where such input is refused, before the stores
//! persist it. Returns a [`ValidationResult`] with errors (block save) and
//! warnings (advisory).

mod icon_checks;
mod rule_checks;
mod schedule_checks;

pub mod fuzzy;

use serde::{Deserialize, Serialize};

use crate::schema::{CycleSchedule, RecurringTaskRule};

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field name in the persisted shape, e.g. `"value"` or `"workIcon"`.
    pub path: String,
    pub message: String,
    /// Optional "Did you mean …?" suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: Some(suggestion.into()),
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }

    /// All error messages joined into one line, `path: message; ...`.
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| match &e.suggestion {
                Some(s) => format!("{}: {} ({})", e.path, e.message, s),
                None => format!("{}: {}", e.path, e.message),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a [`RecurringTaskRule`] before it is stored.
pub fn validate_rule(rule: &RecurringTaskRule) -> ValidationResult {
    let mut result = ValidationResult::new();
    rule_checks::validate_text(&rule.text, &mut result);
    rule_checks::validate_anchor(&rule.recurrence_type, rule.anchor, &mut result);
    icon_checks::validate_icon(&rule.icon, "icon", &mut result);
    rule_checks::validate_color(&rule.color, &mut result);
    result
}

/// Validate a [`CycleSchedule`] before it is stored.
pub fn validate_schedule(schedule: &CycleSchedule) -> ValidationResult {
    let mut result = ValidationResult::new();
    schedule_checks::validate_range(schedule, &mut result);
    schedule_checks::validate_cycle(schedule, &mut result);
    icon_checks::validate_icon(&schedule.work_icon, "workIcon", &mut result);
    icon_checks::validate_icon(&schedule.rest_icon, "restIcon", &mut result);
    schedule_checks::validate_visibility(schedule, &mut result);
    result
}

/// Parse a persisted rule from JSON and validate. Parse errors are reported
/// as a validation error on the empty path.
pub fn validate_rule_json(json: &str) -> ValidationResult {
    match serde_json::from_str::<RecurringTaskRule>(json) {
        Ok(rule) => validate_rule(&rule),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.error("", format!("JSON parse error: {e}"));
            result
        }
    }
}

#[cfg(test)]
mod tests;
