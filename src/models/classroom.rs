//! Classroom model.
//!
//! Classrooms are registry collaborators, consumed read-only by the
//! engine. Any classroom is considered valid for any subject.

use serde::{Deserialize, Serialize};

/// A classroom available for teaching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity from the registry. Stored for round-tripping;
    /// allocation never checks it against subjects or staff.
    pub capacity: i32,
}

impl Classroom {
    /// Creates a new classroom.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }
}
