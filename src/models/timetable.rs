//! Timetable (solution) model.
//!
//! A timetable is the outcome of one generation run: committed placements
//! in canonical display order plus the requests that could not be placed.
//! A run produces a complete replacement for any previously stored
//! timetable of the same department; callers persist it wholesale rather
//! than merging.
//!
//! # Invariants
//! For any two placements `p != q` in the same timetable:
//! `(p.day, p.period, p.classroom_id) != (q.day, q.period, q.classroom_id)`
//! and `(p.staff_id, p.day, p.period) != (q.staff_id, q.day, q.period)`.
//! The allocator maintains both by construction; [`Timetable::conflicts`]
//! re-checks them for diagnostics and tests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Day, Period, Slot};

/// One unit of required teaching time awaiting placement.
///
/// The obligation expander emits one request per weekly slot a
/// (staff, subject) pair must fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Staff member to be scheduled.
    pub staff_id: String,
    /// Subject to be taught.
    pub subject_id: String,
}

impl PlacementRequest {
    /// Creates a new placement request.
    pub fn new(staff_id: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            staff_id: staff_id.into(),
            subject_id: subject_id.into(),
        }
    }
}

/// A committed (day, period, classroom, subject, staff) assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Teaching day.
    pub day: Day,
    /// Teaching period.
    pub period: Period,
    /// Assigned classroom ID.
    pub classroom_id: String,
    /// Subject taught in this slot.
    pub subject_id: String,
    /// Staff member teaching this slot.
    pub staff_id: String,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(
        day: Day,
        period: Period,
        classroom_id: impl Into<String>,
        subject_id: impl Into<String>,
        staff_id: impl Into<String>,
    ) -> Self {
        Self {
            day,
            period,
            classroom_id: classroom_id.into(),
            subject_id: subject_id.into(),
            staff_id: staff_id.into(),
        }
    }

    /// The grid slot this placement occupies.
    #[inline]
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.period)
    }
}

/// An invariant violation detected in a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Violation category.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of timetable conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Two placements share (day, period, classroom).
    ClassroomDoubleBooked,
    /// Two placements share (staff, day, period).
    StaffDoubleBooked,
}

impl Conflict {
    fn classroom_double_booked(placement: &Placement) -> Self {
        Self {
            kind: ConflictKind::ClassroomDoubleBooked,
            message: format!(
                "classroom '{}' double-booked at {}",
                placement.classroom_id,
                placement.slot()
            ),
        }
    }

    fn staff_double_booked(placement: &Placement) -> Self {
        Self {
            kind: ConflictKind::StaffDoubleBooked,
            message: format!(
                "staff '{}' double-booked at {}",
                placement.staff_id,
                placement.slot()
            ),
        }
    }
}

/// A departmental timetable: ordered placements plus unplaced requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed placements, sorted by day then period.
    pub placements: Vec<Placement>,
    /// Requests that exhausted their retry bound without a slot.
    pub unplaced: Vec<PlacementRequest>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a timetable from allocator output.
    ///
    /// Sorts placements by day index, then period index. The sort is
    /// stable, so placements sharing a slot in different classrooms keep
    /// the allocator's commit order.
    pub fn assemble(mut placements: Vec<Placement>, unplaced: Vec<PlacementRequest>) -> Self {
        placements.sort_by_key(|p| (p.day.index(), p.period.index()));
        Self {
            placements,
            unplaced,
        }
    }

    /// Number of committed placements.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Whether every expanded request found a slot.
    pub fn is_fully_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns all placements for a given staff member.
    pub fn placements_for_staff(&self, staff_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.staff_id == staff_id)
            .collect()
    }

    /// Returns all placements in a given classroom.
    pub fn placements_for_classroom(&self, classroom_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.classroom_id == classroom_id)
            .collect()
    }

    /// Returns all placements on a given day, in period order.
    pub fn placements_on(&self, day: Day) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.day == day).collect()
    }

    /// Re-checks the double-booking invariants.
    ///
    /// Returns one conflict per offending placement beyond the first
    /// occupant of a slot. Empty for every allocator-produced timetable.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        let mut rooms: HashSet<(Day, Period, &str)> = HashSet::new();
        let mut staff: HashSet<(&str, Day, Period)> = HashSet::new();

        for p in &self.placements {
            if !rooms.insert((p.day, p.period, p.classroom_id.as_str())) {
                conflicts.push(Conflict::classroom_double_booked(p));
            }
            if !staff.insert((p.staff_id.as_str(), p.day, p.period)) {
                conflicts.push(Conflict::staff_double_booked(p));
            }
        }

        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timetable() -> Timetable {
        Timetable::assemble(
            vec![
                Placement::new(Day::Wednesday, Period::First, "R1", "CS101", "S1"),
                Placement::new(Day::Monday, Period::Third, "R2", "CS202", "S2"),
                Placement::new(Day::Monday, Period::First, "R1", "CS101", "S1"),
                Placement::new(Day::Monday, Period::Third, "R1", "CS101", "S1"),
            ],
            vec![PlacementRequest::new("S2", "CS202")],
        )
    }

    #[test]
    fn test_assemble_sorts_by_day_then_period() {
        let t = sample_timetable();
        let order: Vec<(usize, usize)> = t
            .placements
            .iter()
            .map(|p| (p.day.index(), p.period.index()))
            .collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(t.placements[0].day, Day::Monday);
        assert_eq!(t.placements[3].day, Day::Wednesday);
    }

    #[test]
    fn test_assemble_stable_within_slot() {
        // Same slot, different classrooms: commit order survives the sort.
        let t = Timetable::assemble(
            vec![
                Placement::new(Day::Monday, Period::First, "R2", "CS202", "S2"),
                Placement::new(Day::Monday, Period::First, "R1", "CS101", "S1"),
            ],
            Vec::new(),
        );
        assert_eq!(t.placements[0].classroom_id, "R2");
        assert_eq!(t.placements[1].classroom_id, "R1");
    }

    #[test]
    fn test_queries() {
        let t = sample_timetable();
        assert_eq!(t.placement_count(), 4);
        assert!(!t.is_fully_placed());
        assert_eq!(t.placements_for_staff("S1").len(), 3);
        assert_eq!(t.placements_for_classroom("R1").len(), 3);
        assert_eq!(t.placements_on(Day::Monday).len(), 3);
        assert_eq!(t.placements_on(Day::Friday).len(), 0);
    }

    #[test]
    fn test_sample_has_no_conflicts() {
        assert!(sample_timetable().conflicts().is_empty());
    }

    #[test]
    fn test_classroom_conflict_detected() {
        let t = Timetable::assemble(
            vec![
                Placement::new(Day::Monday, Period::First, "R1", "CS101", "S1"),
                Placement::new(Day::Monday, Period::First, "R1", "CS202", "S2"),
            ],
            Vec::new(),
        );
        let conflicts = t.conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::ClassroomDoubleBooked);
    }

    #[test]
    fn test_staff_conflict_detected() {
        let t = Timetable::assemble(
            vec![
                Placement::new(Day::Monday, Period::First, "R1", "CS101", "S1"),
                Placement::new(Day::Monday, Period::First, "R2", "CS202", "S1"),
            ],
            Vec::new(),
        );
        let conflicts = t.conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::StaffDoubleBooked);
    }

    #[test]
    fn test_empty_timetable() {
        let t = Timetable::new();
        assert_eq!(t.placement_count(), 0);
        assert!(t.is_fully_placed());
        assert!(t.conflicts().is_empty());
    }

    #[test]
    fn test_placement_serde_shape() {
        let p = Placement::new(Day::Monday, Period::Third, "R1", "CS101", "S1");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["day"], "Monday");
        assert_eq!(json["period"], "11:15-12:15");
        assert_eq!(json["classroom_id"], "R1");
        assert_eq!(json["subject_id"], "CS101");
        assert_eq!(json["staff_id"], "S1");
    }
}
