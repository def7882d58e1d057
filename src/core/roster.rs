//! Roster parsing and validation.
//!
//! A roster is a YAML document listing customer entries (plan request fields
//! plus optional add-ons). Validation is advisory and CLI-facing: it reports
//! every problem it finds. The build path keeps the library's soft-failure
//! policy — entries the builder rejects are skipped, not errors.

use super::addons::apply_addons;
use super::builder::build_plan;
use super::types::{Addon, MealType, Plan, PlanRequest};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One roster entry — a plan request plus the add-ons to layer on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub request: PlanRequest,

    /// Add-ons applied to this customer's plan
    #[serde(default)]
    pub addons: Vec<Addon>,
}

/// A customer roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Optional roster label
    #[serde(default)]
    pub name: Option<String>,

    /// Customer entries, in file order
    #[serde(default)]
    pub customers: Vec<RosterEntry>,
}

/// Validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse a roster file from disk.
pub fn parse_roster_file(path: &Path) -> Result<Roster, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_roster(&content)
}

/// Parse a roster from a string.
pub fn parse_roster(yaml: &str) -> Result<Roster, String> {
    serde_yaml_ng::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
}

/// Validate a parsed roster. Returns a list of errors (empty = valid).
pub fn validate_roster(roster: &Roster) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if roster.customers.is_empty() {
        errors.push(ValidationError {
            message: "roster has no customers".to_string(),
        });
    }

    for (i, entry) in roster.customers.iter().enumerate() {
        let label = if entry.request.name.is_empty() {
            format!("entry {}", i + 1)
        } else {
            format!("'{}'", entry.request.name)
        };

        if entry.request.name.is_empty() {
            errors.push(ValidationError {
                message: format!("{} has no name", label),
            });
        }

        if MealType::from_name(&entry.request.meal_type).is_none() {
            errors.push(ValidationError {
                message: format!(
                    "{} has unknown meal type '{}'",
                    label, entry.request.meal_type
                ),
            });
        }

        if entry.request.days == 0 {
            errors.push(ValidationError {
                message: format!("{} has zero billing days", label),
            });
        }

        for addon in &entry.addons {
            if !addon.is_valid() {
                errors.push(ValidationError {
                    message: format!(
                        "{} add-on '{}' has non-positive price {} (will be ignored)",
                        label, addon.name, addon.price
                    ),
                });
            }
        }
    }

    errors
}

/// Build every roster entry into a plan, applying its add-ons.
///
/// Entries the builder rejects (empty name, unknown meal type) are skipped.
pub fn build_all(roster: &Roster) -> Vec<Plan> {
    roster
        .customers
        .iter()
        .filter_map(|entry| {
            let plan = build_plan(&entry.request)?;
            apply_addons(Some(&plan), &entry.addons)
        })
        .collect()
}
