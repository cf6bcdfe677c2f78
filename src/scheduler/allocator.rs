//! Randomized greedy slot allocation.
//!
//! # Algorithm
//!
//! 1. Uniformly shuffle the request list. The permutation is the only
//!    source of run-to-run variety; reruns on identical input may yield
//!    different valid timetables.
//! 2. For each request, draw (day, period, classroom) uniformly at
//!    random, up to `max_attempts` times. The first draw that leaves the
//!    classroom free and the staff member free is committed.
//! 3. A request that exhausts its draws is recorded as unplaced and the
//!    run moves on. There is no backtracking across requests and no
//!    second pass, so a feasible instance can still lose requests to
//!    unlucky draws; callers receive the `unplaced` list instead of a
//!    guarantee.
//!
//! # Complexity
//! O(n * a) draws where n = requests, a = `max_attempts`.
//!
//! # Randomness
//! The generator is injected so fixed-seed runs are reproducible under
//! test; production entry points pass a freshly seeded RNG.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Classroom, Day, Period, Placement, PlacementRequest};

/// Tunable allocation constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Independent random draws attempted per request before it is
    /// recorded as unplaced.
    pub max_attempts: u32,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self { max_attempts: 50 }
    }
}

/// Result of one allocation run.
///
/// Partial failure is a normal outcome, never an error: a run that
/// places nothing still returns `Ok`-shaped data with every request in
/// `unplaced`.
#[derive(Debug, Clone, Default)]
pub struct AllocationOutcome {
    /// Committed placements, in commit order.
    pub placements: Vec<Placement>,
    /// Requests that exhausted their retry bound.
    pub unplaced: Vec<PlacementRequest>,
}

impl AllocationOutcome {
    /// Total requests consumed by the run.
    ///
    /// Always equals the input request count: every request is either
    /// placed or reported unplaced.
    pub fn total_requests(&self) -> usize {
        self.placements.len() + self.unplaced.len()
    }
}

/// The placement engine.
///
/// Maps each [`PlacementRequest`] to a concrete (day, period, classroom)
/// while keeping two disjointness invariants: no classroom holds two
/// placements in the same slot, and no staff member teaches twice in the
/// same slot. Occupancy state is owned by each `allocate` call, so runs
/// for different departments can proceed in parallel.
#[derive(Debug, Clone, Default)]
pub struct SlotAllocator {
    config: AllocatorConfig,
}

impl SlotAllocator {
    /// Creates an allocator with default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allocation constants.
    pub fn with_config(mut self, config: AllocatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the per-request draw bound.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Runs one allocation pass over the given requests.
    ///
    /// Consumes the request list (it is shuffled in place); classrooms
    /// are read-only. Capacity is not consulted: any classroom is valid
    /// for any subject.
    pub fn allocate<R: Rng>(
        &self,
        mut requests: Vec<PlacementRequest>,
        classrooms: &[Classroom],
        rng: &mut R,
    ) -> AllocationOutcome {
        if classrooms.is_empty() {
            warn!(requests = requests.len(), "no classrooms available, nothing placed");
            return AllocationOutcome {
                placements: Vec::new(),
                unplaced: requests,
            };
        }

        requests.shuffle(rng);

        let mut occupied_rooms: HashSet<(Day, Period, &str)> = HashSet::new();
        let mut staff_slots: HashMap<String, HashSet<(Day, Period)>> = HashMap::new();
        let mut placements = Vec::with_capacity(requests.len());
        let mut unplaced = Vec::new();

        for request in requests {
            match self.draw_slot(&request, classrooms, &occupied_rooms, &staff_slots, rng) {
                Some((day, period, classroom_id)) => {
                    occupied_rooms.insert((day, period, classroom_id));
                    staff_slots
                        .entry(request.staff_id.clone())
                        .or_default()
                        .insert((day, period));
                    placements.push(Placement::new(
                        day,
                        period,
                        classroom_id,
                        request.subject_id,
                        request.staff_id,
                    ));
                }
                None => {
                    debug!(
                        staff = %request.staff_id,
                        subject = %request.subject_id,
                        attempts = self.config.max_attempts,
                        "request exhausted its retry bound"
                    );
                    unplaced.push(request);
                }
            }
        }

        if !unplaced.is_empty() {
            warn!(
                placed = placements.len(),
                unplaced = unplaced.len(),
                "allocation run left requests unplaced"
            );
        }

        AllocationOutcome {
            placements,
            unplaced,
        }
    }

    /// Attempts up to `max_attempts` uniform draws for one request.
    ///
    /// A draw succeeds iff the (day, period, classroom) triple is free
    /// and the staff member is free at (day, period).
    fn draw_slot<'a, R: Rng>(
        &self,
        request: &PlacementRequest,
        classrooms: &'a [Classroom],
        occupied_rooms: &HashSet<(Day, Period, &'a str)>,
        staff_slots: &HashMap<String, HashSet<(Day, Period)>>,
        rng: &mut R,
    ) -> Option<(Day, Period, &'a str)> {
        let booked = staff_slots.get(&request.staff_id);

        for _ in 0..self.config.max_attempts {
            let day = Day::ALL[rng.random_range(0..Day::ALL.len())];
            let period = Period::ALL[rng.random_range(0..Period::ALL.len())];
            let classroom = &classrooms[rng.random_range(0..classrooms.len())];

            let room_free = !occupied_rooms.contains(&(day, period, classroom.id.as_str()));
            let staff_free = booked.is_none_or(|slots| !slots.contains(&(day, period)));

            if room_free && staff_free {
                return Some((day, period, classroom.id.as_str()));
            }
        }

        None
    }
}
