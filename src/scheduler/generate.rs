//! Timetable generation entry point.
//!
//! Wires the full pipeline for one department run: filter staff to
//! locked subject selections, guard against empty collaborator data,
//! expand obligations, allocate slots, and assemble the ordered
//! timetable. The run performs no I/O; persistence of the returned
//! placement list (a full replacement of any prior schedule) is the
//! caller's concern.

use rand::Rng;
use tracing::{debug, info};

use super::{expand_obligations, AllocatorConfig, SlotAllocator, WorkloadPolicy};
use crate::error::{MissingInput, ScheduleError};
use crate::models::{Classroom, StaffMember, Subject, Timetable};

/// Generates departmental timetables.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Classroom, StaffMember, StaffRole, Subject};
/// use u_timetable::scheduler::TimetableGenerator;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let staff = vec![StaffMember::new("S1", StaffRole::Professor)
///     .with_subject("CS101")
///     .locked()];
/// let subjects = vec![Subject::new("CS101").with_code("CS101")];
/// let classrooms = vec![Classroom::new("R1")];
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let timetable = TimetableGenerator::new()
///     .generate_with_rng(&staff, &subjects, &classrooms, &mut rng)
///     .unwrap();
///
/// // Every expanded request is either placed or reported unplaced.
/// assert_eq!(timetable.placement_count() + timetable.unplaced.len(), 4);
/// assert!(timetable.conflicts().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    policy: WorkloadPolicy,
    config: AllocatorConfig,
}

impl TimetableGenerator {
    /// Creates a generator with default workload and allocation policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the role-to-workload lookup.
    pub fn with_workload_policy(mut self, policy: WorkloadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the allocation constants.
    pub fn with_allocator_config(mut self, config: AllocatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the per-request draw bound.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Generates a timetable with a fresh random seed.
    ///
    /// Reruns on identical input may yield different valid timetables;
    /// use [`generate_with_rng`](Self::generate_with_rng) with a seeded
    /// generator when reproducibility matters.
    pub fn generate(
        &self,
        staff: &[StaffMember],
        subjects: &[Subject],
        classrooms: &[Classroom],
    ) -> Result<Timetable, ScheduleError> {
        self.generate_with_rng(staff, subjects, classrooms, &mut rand::rng())
    }

    /// Generates a timetable using the supplied random source.
    ///
    /// # Errors
    /// [`ScheduleError::InsufficientData`] when no staff member has a
    /// locked subject selection, or subjects or classrooms are empty.
    /// Partial placement failure is not an error; see
    /// [`Timetable::unplaced`].
    pub fn generate_with_rng<R: Rng>(
        &self,
        staff: &[StaffMember],
        subjects: &[Subject],
        classrooms: &[Classroom],
        rng: &mut R,
    ) -> Result<Timetable, ScheduleError> {
        let locked: Vec<&StaffMember> =
            staff.iter().filter(|s| s.subjects_locked).collect();

        if locked.is_empty() {
            return Err(ScheduleError::InsufficientData(MissingInput::Staff));
        }
        if subjects.is_empty() {
            return Err(ScheduleError::InsufficientData(MissingInput::Subjects));
        }
        if classrooms.is_empty() {
            return Err(ScheduleError::InsufficientData(MissingInput::Classrooms));
        }

        let requests = expand_obligations(locked.iter().copied(), &self.policy);
        debug!(
            staff = locked.len(),
            classrooms = classrooms.len(),
            requests = requests.len(),
            "expanded teaching obligations"
        );

        let outcome = SlotAllocator::new()
            .with_config(self.config)
            .allocate(requests, classrooms, rng);

        info!(
            placed = outcome.placements.len(),
            unplaced = outcome.unplaced.len(),
            "timetable generation run complete"
        );

        Ok(Timetable::assemble(outcome.placements, outcome.unplaced))
    }
}
