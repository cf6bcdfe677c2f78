//! Subject model.
//!
//! Subjects are registry collaborators, consumed read-only by the engine.

use serde::{Deserialize, Serialize};

/// A subject offered by a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Short display code (e.g. "CS101").
    pub code: String,
    /// Credit value from the registry. Stored for round-tripping;
    /// allocation never reads it (workload is keyed on staff role).
    pub credits: i32,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            credits: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the short code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let subject = Subject::new("SUB1")
            .with_name("Data Structures")
            .with_code("CS201")
            .with_credits(4);

        assert_eq!(subject.id, "SUB1");
        assert_eq!(subject.name, "Data Structures");
        assert_eq!(subject.code, "CS201");
        assert_eq!(subject.credits, 4);
    }

    #[test]
    fn test_subject_defaults() {
        let subject = Subject::new("SUB1");
        assert!(subject.name.is_empty());
        assert!(subject.code.is_empty());
        assert_eq!(subject.credits, 0);
    }
}
