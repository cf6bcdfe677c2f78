//! Timetable quality metrics.
//!
//! Computes diagnostic indicators from a generated timetable. Purely
//! informational: nothing here feeds back into allocation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | placed / (placed + unplaced) |
//! | Slots by Staff | committed slots per staff member |
//! | Slots by Classroom | committed slots per classroom |
//! | Busiest Day | day with the most placements |
//! | Grid Occupancy | placed / (grid slots × classrooms) |

use std::collections::HashMap;

use crate::models::{Day, Slot, Timetable};

/// Diagnostic indicators for a generated timetable.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Committed placements.
    pub placement_count: usize,
    /// Requests that could not be placed.
    pub unplaced_count: usize,
    /// Fraction of requests placed (1.0 for an empty run).
    pub placement_rate: f64,
    /// Committed slots per staff member.
    pub slots_by_staff: HashMap<String, usize>,
    /// Committed slots per classroom.
    pub slots_by_classroom: HashMap<String, usize>,
    /// Day carrying the most placements. Ties go to the earlier day;
    /// `None` for an empty timetable.
    pub busiest_day: Option<Day>,
    /// Fraction of the grid × classroom space in use (0.0 when the
    /// classroom count is zero).
    pub grid_occupancy: f64,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and the department's classroom count.
    pub fn calculate(timetable: &Timetable, classroom_count: usize) -> Self {
        let placement_count = timetable.placement_count();
        let unplaced_count = timetable.unplaced.len();
        let total = placement_count + unplaced_count;

        let placement_rate = if total == 0 {
            1.0
        } else {
            placement_count as f64 / total as f64
        };

        let mut slots_by_staff: HashMap<String, usize> = HashMap::new();
        let mut slots_by_classroom: HashMap<String, usize> = HashMap::new();
        let mut day_counts = [0usize; 5];
        for p in &timetable.placements {
            *slots_by_staff.entry(p.staff_id.clone()).or_insert(0) += 1;
            *slots_by_classroom.entry(p.classroom_id.clone()).or_insert(0) += 1;
            day_counts[p.day.index()] += 1;
        }

        let busiest_day = if placement_count == 0 {
            None
        } else {
            let mut best = Day::Monday;
            for day in Day::ALL {
                if day_counts[day.index()] > day_counts[best.index()] {
                    best = day;
                }
            }
            Some(best)
        };

        let capacity = Slot::COUNT * classroom_count;
        let grid_occupancy = if capacity == 0 {
            0.0
        } else {
            placement_count as f64 / capacity as f64
        };

        Self {
            placement_count,
            unplaced_count,
            placement_rate,
            slots_by_staff,
            slots_by_classroom,
            busiest_day,
            grid_occupancy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Period, Placement, PlacementRequest};

    fn sample_timetable() -> Timetable {
        Timetable::assemble(
            vec![
                Placement::new(Day::Monday, Period::First, "R1", "CS101", "S1"),
                Placement::new(Day::Monday, Period::Second, "R1", "CS101", "S1"),
                Placement::new(Day::Tuesday, Period::First, "R2", "CS202", "S2"),
            ],
            vec![PlacementRequest::new("S2", "CS202")],
        )
    }

    #[test]
    fn test_kpi_counts_and_rate() {
        let kpi = TimetableKpi::calculate(&sample_timetable(), 2);
        assert_eq!(kpi.placement_count, 3);
        assert_eq!(kpi.unplaced_count, 1);
        assert!((kpi.placement_rate - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_per_entity_loads() {
        let kpi = TimetableKpi::calculate(&sample_timetable(), 2);
        assert_eq!(kpi.slots_by_staff["S1"], 2);
        assert_eq!(kpi.slots_by_staff["S2"], 1);
        assert_eq!(kpi.slots_by_classroom["R1"], 2);
        assert_eq!(kpi.slots_by_classroom["R2"], 1);
    }

    #[test]
    fn test_kpi_busiest_day() {
        let kpi = TimetableKpi::calculate(&sample_timetable(), 2);
        assert_eq!(kpi.busiest_day, Some(Day::Monday));
    }

    #[test]
    fn test_kpi_busiest_day_tie_goes_to_earlier() {
        let t = Timetable::assemble(
            vec![
                Placement::new(Day::Friday, Period::First, "R1", "CS101", "S1"),
                Placement::new(Day::Tuesday, Period::First, "R2", "CS101", "S1"),
            ],
            Vec::new(),
        );
        let kpi = TimetableKpi::calculate(&t, 2);
        assert_eq!(kpi.busiest_day, Some(Day::Tuesday));
    }

    #[test]
    fn test_kpi_grid_occupancy() {
        // 3 placements over 35 slots × 2 classrooms.
        let kpi = TimetableKpi::calculate(&sample_timetable(), 2);
        assert!((kpi.grid_occupancy - 3.0 / 70.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_timetable() {
        let kpi = TimetableKpi::calculate(&Timetable::new(), 0);
        assert_eq!(kpi.placement_count, 0);
        assert!((kpi.placement_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.busiest_day, None);
        assert!((kpi.grid_occupancy - 0.0).abs() < 1e-10);
    }
}
