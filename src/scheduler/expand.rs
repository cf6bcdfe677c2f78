//! Obligation expansion.
//!
//! Turns each (staff, subject) teaching duty into the multiset of
//! one-slot placement requests the allocator consumes. Weekly load is a
//! fixed lookup keyed on staff role; a subject's credit value never
//! enters the computation.

use serde::{Deserialize, Serialize};

use crate::models::{PlacementRequest, StaffMember, StaffRole};

/// Weekly slots required per (staff, subject) pair, keyed by role.
///
/// Kept as a policy table rather than derived logic so the numbers can
/// be revisited without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadPolicy {
    /// Slots per subject for assistant professors.
    pub assistant_professor_slots: u32,
    /// Slots per subject for professors.
    pub professor_slots: u32,
    /// Slots per subject for heads of department.
    pub hod_slots: u32,
}

impl Default for WorkloadPolicy {
    fn default() -> Self {
        Self {
            assistant_professor_slots: 3,
            professor_slots: 4,
            hod_slots: 4,
        }
    }
}

impl WorkloadPolicy {
    /// Weekly slots per subject for the given role.
    pub fn slots_for(&self, role: StaffRole) -> u32 {
        match role {
            StaffRole::AssistantProfessor => self.assistant_professor_slots,
            StaffRole::Professor => self.professor_slots,
            StaffRole::Hod => self.hod_slots,
        }
    }
}

/// Expands teaching obligations into placement requests.
///
/// Emits `slots_for(role)` identical requests per (staff, subject) pair.
/// The input is expected to be pre-filtered to staff with locked subject
/// selections; output order is arbitrary (the allocator shuffles anyway).
pub fn expand_obligations<'a>(
    staff: impl IntoIterator<Item = &'a StaffMember>,
    policy: &WorkloadPolicy,
) -> Vec<PlacementRequest> {
    let mut requests = Vec::new();
    for member in staff {
        let slots = policy.slots_for(member.role);
        for subject_id in &member.subjects {
            for _ in 0..slots {
                requests.push(PlacementRequest::new(
                    member.id.clone(),
                    subject_id.clone(),
                ));
            }
        }
    }
    requests
}
