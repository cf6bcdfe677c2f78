//! Input validation for timetable generation.
//!
//! Checks structural integrity of registry data before generation.
//! Detects:
//! - Duplicate IDs
//! - Staff referencing subjects that don't exist
//! - Locked staff with an empty teaching load
//!
//! Advisory checks: generation itself only guards against empty
//! collections, so callers run these to surface registry problems to
//! users before committing a run.

use std::collections::HashSet;

use crate::models::{Classroom, StaffMember, Subject};

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
    /// A staff member references a subject that doesn't exist.
    UnknownSubjectReference,
    /// A staff member locked an empty subject selection.
    EmptyTeachingLoad,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates registry data for a generation run.
///
/// Checks:
/// 1. No duplicate staff IDs
/// 2. No duplicate subject IDs
/// 3. No duplicate classroom IDs
/// 4. All subject references on staff point to existing subjects
/// 5. No locked staff member has an empty teaching load
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    staff: &[StaffMember],
    subjects: &[Subject],
    classrooms: &[Classroom],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect subject IDs
    let mut subject_ids = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
    }

    // Classroom IDs
    let mut classroom_ids = HashSet::new();
    for c in classrooms {
        if !classroom_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", c.id),
            ));
        }
    }

    // Staff IDs and subject references
    let mut staff_ids = HashSet::new();
    for member in staff {
        if !staff_ids.insert(member.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", member.id),
            ));
        }

        if member.subjects_locked && member.subjects.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTeachingLoad,
                format!("Staff '{}' locked an empty subject selection", member.id),
            ));
        }

        for subject_id in &member.subjects {
            if !subject_ids.contains(subject_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubjectReference,
                    format!(
                        "Staff '{}' references unknown subject '{}'",
                        member.id, subject_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
