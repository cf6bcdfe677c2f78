//! The weekly teaching grid.
//!
//! The grid is the Cartesian product of five teaching days and seven
//! named periods, fixed at compile time. It carries no state and no
//! operations beyond enumeration; allocation uses it as the index domain
//! for double-booking checks.
//!
//! # Time Model
//! Periods are labeled with the bell times of the teaching day. Two
//! adjacent periods straddle the lunch hour, but no period has special
//! scheduling semantics. Breaks between periods are not modeled.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A teaching day. Declaration order is grid order (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days in grid order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Position in the week (Monday = 0 .. Friday = 4).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day name as displayed in timetables.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A teaching period. Declaration order is display order.
///
/// Serialized as the bell-time label (e.g. `"9:00-10:00"`) so downstream
/// persistence and rendering see the same period names the department uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "9:00-10:00")]
    First,
    #[serde(rename = "10:00-11:00")]
    Second,
    #[serde(rename = "11:15-12:15")]
    Third,
    #[serde(rename = "12:15-1:15")]
    Fourth,
    #[serde(rename = "2:15-3:15")]
    Fifth,
    #[serde(rename = "3:15-4:15")]
    Sixth,
    #[serde(rename = "4:30-5:30")]
    Seventh,
}

impl Period {
    /// All periods in display order.
    pub const ALL: [Period; 7] = [
        Period::First,
        Period::Second,
        Period::Third,
        Period::Fourth,
        Period::Fifth,
        Period::Sixth,
        Period::Seventh,
    ];

    /// Position in the day (0 .. 6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bell-time label as displayed in timetables.
    pub fn label(self) -> &'static str {
        match self {
            Period::First => "9:00-10:00",
            Period::Second => "10:00-11:00",
            Period::Third => "11:15-12:15",
            Period::Fourth => "12:15-1:15",
            Period::Fifth => "2:15-3:15",
            Period::Sixth => "3:15-4:15",
            Period::Seventh => "4:30-5:30",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A (day, period) pair from the weekly grid.
///
/// Ordered by day, then period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Slot {
    /// Teaching day.
    pub day: Day,
    /// Teaching period.
    pub period: Period,
}

impl Slot {
    /// Number of slots in the grid (days × periods).
    pub const COUNT: usize = Day::ALL.len() * Period::ALL.len();

    /// Creates a slot.
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }

    /// Enumerates the full grid in day-then-period order.
    pub fn grid() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Period::ALL.into_iter().map(move |period| Slot { day, period }))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_cardinality() {
        assert_eq!(Slot::COUNT, 35);
        assert_eq!(Slot::grid().count(), 35);
    }

    #[test]
    fn test_day_order() {
        assert_eq!(Day::Monday.index(), 0);
        assert_eq!(Day::Friday.index(), 4);
        assert!(Day::Monday < Day::Friday);
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }

    #[test]
    fn test_period_order_and_labels() {
        assert_eq!(Period::First.index(), 0);
        assert_eq!(Period::Seventh.index(), 6);
        assert_eq!(Period::First.label(), "9:00-10:00");
        assert_eq!(Period::Fourth.label(), "12:15-1:15");
        assert_eq!(Period::Seventh.label(), "4:30-5:30");
        assert!(Period::Third < Period::Fourth);
    }

    #[test]
    fn test_slot_ordering() {
        let mon_last = Slot::new(Day::Monday, Period::Seventh);
        let tue_first = Slot::new(Day::Tuesday, Period::First);
        assert!(mon_last < tue_first);
    }

    #[test]
    fn test_grid_enumeration_order() {
        let slots: Vec<Slot> = Slot::grid().collect();
        assert_eq!(slots[0], Slot::new(Day::Monday, Period::First));
        assert_eq!(slots[6], Slot::new(Day::Monday, Period::Seventh));
        assert_eq!(slots[7], Slot::new(Day::Tuesday, Period::First));
        assert_eq!(slots[34], Slot::new(Day::Friday, Period::Seventh));
        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(slots, sorted);
    }

    #[test]
    fn test_period_serde_labels() {
        let json = serde_json::to_string(&Period::Third).unwrap();
        assert_eq!(json, "\"11:15-12:15\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Period::Third);
    }

    #[test]
    fn test_display() {
        let slot = Slot::new(Day::Wednesday, Period::Fifth);
        assert_eq!(slot.to_string(), "Wednesday 2:15-3:15");
    }
}
