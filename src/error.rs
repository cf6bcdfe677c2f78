//! Generation error types.
//!
//! The engine has exactly one fatal failure: generation was invoked with
//! an empty collaborator collection. Partial placement failure is not an
//! error; unplaced requests travel back as data on the
//! [`Timetable`](crate::models::Timetable).

use thiserror::Error;

/// Which collaborator collection was empty at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    /// No staff with locked subject selections.
    Staff,
    /// No subjects registered for the department.
    Subjects,
    /// No classrooms registered for the department.
    Classrooms,
}

impl std::fmt::Display for MissingInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingInput::Staff => write!(f, "no staff with locked subject selections"),
            MissingInput::Subjects => write!(f, "no subjects registered"),
            MissingInput::Classrooms => write!(f, "no classrooms registered"),
        }
    }
}

/// Top-level error returned by
/// [`TimetableGenerator::generate`](crate::scheduler::TimetableGenerator::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Raised before allocation starts when staff, subjects, or
    /// classrooms are empty. Fatal to the run; the caller must not
    /// persist anything.
    #[error("insufficient data for timetable generation: {0}")]
    InsufficientData(MissingInput),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ScheduleError::InsufficientData(MissingInput::Staff);
        assert_eq!(
            err.to_string(),
            "insufficient data for timetable generation: no staff with locked subject selections"
        );

        let err = ScheduleError::InsufficientData(MissingInput::Classrooms);
        assert!(err.to_string().contains("no classrooms registered"));
    }
}
