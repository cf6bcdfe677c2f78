//! Obligation expansion, slot allocation, and timetable generation.
//!
//! # Algorithm
//!
//! `SlotAllocator` is a randomized greedy placer: requests are shuffled,
//! then each one is committed into the first conflict-free
//! (day, period, classroom) draw, with a bounded number of draws per
//! request and no backtracking. Requests that exhaust their draws are
//! reported as unplaced rather than retried.
//!
//! `TimetableGenerator` wires the full pipeline for one department run
//! and is the only operation callers need.
//!
//! # KPI
//!
//! `TimetableKpi` computes diagnostic metrics: placement rate, per-staff
//! and per-classroom loads, busiest day, and grid occupancy.

mod allocator;
mod expand;
mod generate;
mod kpi;

pub use allocator::{AllocationOutcome, AllocatorConfig, SlotAllocator};
pub use expand::{expand_obligations, WorkloadPolicy};
pub use generate::TimetableGenerator;
pub use kpi::TimetableKpi;
