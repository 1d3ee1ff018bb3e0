//! Icon identifier check against the closed icon set.

use crate::schema::Icon;

use super::fuzzy::{fuzzy_match, is_kebab_case};
use super::ValidationResult;

pub(super) fn validate_icon(icon: &Icon, path: &str, result: &mut ValidationResult) {
    if icon.is_known() {
        return;
    }

    let name = icon.as_str();
    if !is_kebab_case(name) {
        result.error(
            path,
            format!("Icon '{}' must be kebab-case (e.g. 'shopping-cart')", name),
        );
        return;
    }

    match fuzzy_match(name, Icon::KNOWN) {
        Some(suggestion) => result.error_with_suggestion(
            path,
            format!("Unknown icon '{}'", name),
            format!("Did you mean '{}'?", suggestion),
        ),
        None => result.error(path, format!("Unknown icon '{}'", name)),
    }
}
