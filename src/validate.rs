//! Validation engine
//!
//! Evaluates the raw field values of an edit session against the resolved
//! schema for the selected shape. Pure and synchronous; the UI re-runs it on
//! every field change. Fields belonging to an exclusive group other than the
//! active one are skipped entirely (they are also excluded from the built
//! params), except for sequence queries which never group-filter.

use crate::fields::{ExclusiveGroup, Field, FieldSet};
use crate::schema::{self, FieldRule, ValidationSchema};
use crate::shape::QueryShape;
use std::collections::BTreeMap;

/// Outcome of validating one field set.
///
/// Per-field messages never block each other; every failing field reports
/// its own message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    /// True when no field-level check failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Per-field error messages.
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// Message for a single field, if it failed.
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    fn add(&mut self, field: Field, message: String) {
        self.errors.entry(field).or_insert(message);
    }
}

/// Whether a field participates in validation for this shape and group.
fn in_active_scope(shape: QueryShape, field: Field, active_group: ExclusiveGroup) -> bool {
    if shape == QueryShape::SequenceQuery {
        return true;
    }
    match field.exclusive_group() {
        Some(group) => group == active_group,
        None => true,
    }
}

/// Validate the field set for a shape with the given active group.
pub fn validate(shape: QueryShape, fields: &FieldSet, active_group: ExclusiveGroup) -> ValidationReport {
    let schema = schema::schema_for(shape);
    let mut report = ValidationReport::default();

    for rule in schema.rules() {
        if !in_active_scope(shape, rule.field, active_group) {
            continue;
        }
        check_rule(rule, fields, &mut report);
    }

    check_all_or_none(&schema, shape, fields, active_group, &mut report);

    report
}

/// Submission gate: the report is clean and at least one field is populated.
pub fn submission_enabled(
    shape: QueryShape,
    fields: &FieldSet,
    active_group: ExclusiveGroup,
) -> bool {
    !fields.is_empty() && validate(shape, fields, active_group).is_valid()
}

fn check_rule(rule: &FieldRule, fields: &FieldSet, report: &mut ValidationReport) {
    let value = fields.get(rule.field).trim();

    if value.is_empty() {
        if rule.required {
            report.add(
                rule.field,
                format!("{} is required", rule.field.display_label()),
            );
        }
        return;
    }

    if let Err(msg) = rule.format.check(value) {
        report.add(
            rule.field,
            format!("{} {}", rule.field.display_label(), msg),
        );
        return;
    }

    // Ordering constraints only apply when both sides parse as positions.
    if let Some(other) = rule.not_before {
        let other_value = fields.get(other).trim();
        if let (Ok(this), Ok(that)) = (value.parse::<u64>(), other_value.parse::<u64>()) {
            if this < that {
                report.add(
                    rule.field,
                    format!(
                        "{} must not be less than {}",
                        rule.field.display_label(),
                        other.display_label()
                    ),
                );
            }
        }
    }
}

/// The amino-acid triple is all-or-none: populating any member requires the
/// rest. Only enforced when the triple's group is in active scope.
fn check_all_or_none(
    schema: &ValidationSchema,
    shape: QueryShape,
    fields: &FieldSet,
    active_group: ExclusiveGroup,
    report: &mut ValidationReport,
) {
    let members = schema.all_or_none();
    if members.is_empty() {
        return;
    }
    if !members
        .iter()
        .all(|f| in_active_scope(shape, *f, active_group))
    {
        return;
    }
    if members.iter().any(|f| !fields.is_blank(*f)) {
        for field in members {
            if fields.is_blank(*field) {
                report.add(*field, format!("{} is required", field.display_label()));
            }
        }
    }
}
