//! Timetabling domain models.
//!
//! Core data types for departmental timetable generation. The registry
//! side (`StaffMember`, `Subject`, `Classroom`) is owned by external
//! collaborators and consumed read-only; the solution side (`Placement`,
//! `Timetable`) is produced by the scheduler.
//!
//! # Domain Mapping
//!
//! | u-timetable | Registry table | Role in allocation |
//! |-------------|----------------|--------------------|
//! | StaffMember | users | obligation source, double-booking key |
//! | Subject | subjects | placement payload |
//! | Classroom | classrooms | slot resource |
//! | Slot | (fixed grid) | index domain |
//! | Placement | timetables | atomic output unit |

mod classroom;
mod grid;
mod staff;
mod subject;
mod timetable;

pub use classroom::Classroom;
pub use grid::{Day, Period, Slot};
pub use staff::{StaffMember, StaffRole};
pub use subject::Subject;
pub use timetable::{Conflict, ConflictKind, Placement, PlacementRequest, Timetable};
