//! Recurring task rule and its create/update payloads.

use serde::{Deserialize, Serialize};

use super::{Icon, RecurrenceType};

/// Default display color for rules saved without one.
pub const DEFAULT_RULE_COLOR: &str = "#3B82F6";

fn default_color() -> String {
    DEFAULT_RULE_COLOR.to_string()
}

/// A user-defined task that repeats weekly, monthly or yearly.
///
/// The meaning of `anchor` depends on `recurrence_type`; see
/// [`RecurrenceType`]. Out-of-domain anchors are kept as-is and simply never
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTaskRule {
    /// Assigned at creation, never changed. Empty only in hand-edited saves;
    /// the store fills it in on load.
    #[serde(default)]
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub recurrence_type: RecurrenceType,
    #[serde(rename = "value", alias = "day", alias = "weekday")]
    pub anchor: i32,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Payload for creating a rule. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRule {
    pub text: String,
    #[serde(rename = "type")]
    pub recurrence_type: RecurrenceType,
    #[serde(rename = "value")]
    pub anchor: i32,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default = "default_color")]
    pub color: String,
}

impl NewRule {
    pub fn new(text: impl Into<String>, recurrence_type: RecurrenceType, anchor: i32) -> Self {
        Self {
            text: text.into(),
            recurrence_type,
            anchor,
            icon: Icon::default(),
            color: default_color(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Build the persisted rule under the given id.
    pub fn into_rule(self, id: String) -> RecurringTaskRule {
        RecurringTaskRule {
            id,
            text: self.text,
            recurrence_type: self.recurrence_type,
            anchor: self.anchor,
            icon: self.icon,
            color: self.color,
        }
    }
}

/// Partial update of a rule: `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub recurrence_type: Option<RecurrenceType>,
    #[serde(rename = "value", default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RuleUpdate {
    /// Return a copy of `rule` with this update applied. The id is preserved.
    pub fn apply_to(&self, rule: &RecurringTaskRule) -> RecurringTaskRule {
        RecurringTaskRule {
            id: rule.id.clone(),
            text: self.text.clone().unwrap_or_else(|| rule.text.clone()),
            recurrence_type: self
                .recurrence_type
                .clone()
                .unwrap_or_else(|| rule.recurrence_type.clone()),
            anchor: self.anchor.unwrap_or(rule.anchor),
            icon: self.icon.clone().unwrap_or_else(|| rule.icon.clone()),
            color: self.color.clone().unwrap_or_else(|| rule.color.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
