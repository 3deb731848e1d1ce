//! Input validation for rosters and shift records.
//!
//! Checks structural integrity of data handed over by the persistence
//! layer before it is scheduled against. Detects:
//! - Duplicate or empty IDs
//! - Non-positive or non-finite weekly limits
//! - Shifts referencing unknown staff
//! - Shifts ending before they start

use crate::models::{Shift, Staff};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An entity has an empty ID.
    EmptyId,
    /// A weekly hours limit is zero, negative, or not a number.
    InvalidWeeklyLimit,
    /// A shift references a staff member that doesn't exist.
    UnknownStaff,
    /// A shift ends before it starts.
    ReversedInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a staff roster.
///
/// Checks:
/// 1. No empty staff IDs
/// 2. No duplicate staff IDs
/// 3. Explicit weekly limits are positive and finite (exempt contracts excluded)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &[Staff]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for staff in roster {
        if staff.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Staff '{}' has an empty ID", staff.name),
            ));
        } else if !ids.insert(staff.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", staff.id),
            ));
        }

        if let Some(limit) = staff.weekly_hours_limit {
            if !staff.is_exempt() && !(limit.is_finite() && limit > 0.0) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidWeeklyLimit,
                    format!("Staff '{}' has invalid weekly limit {limit}", staff.id),
                ));
            }
        }
    }

    finish(errors)
}

/// Validates shift records against a roster.
///
/// Checks:
/// 1. No duplicate shift IDs
/// 2. Every shift references a rostered staff member
/// 3. Scheduled and actual intervals do not end before they start
pub fn validate_shifts(shifts: &[Shift], roster: &[Staff]) -> ValidationResult {
    let mut errors = Vec::new();
    let staff_ids: HashSet<&str> = roster.iter().map(|s| s.id.as_str()).collect();
    let mut shift_ids = HashSet::new();

    for shift in shifts {
        if !shift_ids.insert(shift.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate shift ID: {}", shift.id),
            ));
        }

        if !staff_ids.contains(shift.staff_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStaff,
                format!(
                    "Shift '{}' references unknown staff '{}'",
                    shift.id, shift.staff_id
                ),
            ));
        }

        if shift.scheduled_end.is_some_and(|end| end < shift.scheduled_start) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReversedInterval,
                format!("Shift '{}' is scheduled to end before it starts", shift.id),
            ));
        }

        if let (Some(start), Some(end)) = (shift.actual_start, shift.actual_end) {
            if end < start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ReversedInterval,
                    format!("Shift '{}' was clocked out before clock-in", shift.id),
                ));
            }
        }
    }

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractType, Role};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample_roster() -> Vec<Staff> {
        vec![
            Staff::new("K1", Role::Kitchen).with_name("Cook"),
            Staff::new("W1", Role::Waiter).with_weekly_limit(30.0),
            Staff::new("M1", Role::Manager).with_contract(ContractType::Art22),
        ]
    }

    #[test]
    fn test_valid_roster() {
        assert!(validate_roster(&sample_roster()).is_ok());
        assert!(validate_roster(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_staff_id() {
        let mut roster = sample_roster();
        roster.push(Staff::new("K1", Role::Bar));
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_empty_id() {
        let errors = validate_roster(&[Staff::new("", Role::Bar)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);
    }

    #[test]
    fn test_invalid_weekly_limit() {
        let roster = vec![
            Staff::new("A", Role::Bar).with_weekly_limit(0.0),
            Staff::new("B", Role::Bar).with_weekly_limit(f64::NAN),
            // Ignored for exempt contracts
            Staff::new("C", Role::Bar)
                .with_contract(ContractType::Art22)
                .with_weekly_limit(-1.0),
        ];
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidWeeklyLimit));
    }

    #[test]
    fn test_valid_shifts() {
        let shifts = vec![
            Shift::work("K1", at(10), at(16)),
            Shift::work("W1", at(12), at(17)),
        ];
        assert!(validate_shifts(&shifts, &sample_roster()).is_ok());
    }

    #[test]
    fn test_unknown_staff_and_reversed() {
        let shifts = vec![
            Shift::work("ghost", at(10), at(16)),
            Shift::work("K1", at(16), at(10)),
            Shift::work("W1", at(10), at(16))
                .with_actual_start(at(11))
                .with_actual_end(at(10)),
        ];
        let errors = validate_shifts(&shifts, &sample_roster()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownStaff));
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::ReversedInterval)
                .count(),
            2
        );
    }

    #[test]
    fn test_duplicate_shift_id() {
        let a = Shift::work("K1", at(10), at(16));
        let b = a.clone();
        let errors = validate_shifts(&[a, b], &sample_roster()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("shift")));
    }
}
