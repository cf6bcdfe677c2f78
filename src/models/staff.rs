//! Staff member model.
//!
//! Staff are registry collaborators: created and updated by the external
//! user registry and consumed read-only by the engine. Only staff whose
//! subject selections are locked participate in timetable generation.

use serde::{Deserialize, Serialize};

/// A staff member with teaching obligations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique staff identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Academic rank. Determines weekly slots per subject.
    pub role: StaffRole,
    /// Identifiers of the subjects this staff member teaches.
    pub subjects: Vec<String>,
    /// Whether the subject selection is finalized. Unlocked staff are
    /// skipped by generation.
    pub subjects_locked: bool,
}

/// Academic rank of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Junior rank, lighter weekly load.
    AssistantProfessor,
    /// Senior rank.
    Professor,
    /// Head of department. Scheduled like a professor.
    Hod,
}

impl StaffMember {
    /// Creates a new staff member with an unlocked, empty subject list.
    pub fn new(id: impl Into<String>, role: StaffRole) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            subjects: Vec::new(),
            subjects_locked: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a subject to the teaching list.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Replaces the teaching list.
    pub fn with_subjects(mut self, subject_ids: Vec<String>) -> Self {
        self.subjects = subject_ids;
        self
    }

    /// Marks the subject selection as finalized.
    pub fn locked(mut self) -> Self {
        self.subjects_locked = true;
        self
    }

    /// Whether this staff member teaches the given subject.
    pub fn teaches(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }

    /// Number of subjects taught.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}
