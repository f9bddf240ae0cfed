// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the residue searches: how many tableaux they produced,
//! how many cells they looked at and how many of those were rejected, and
//! for shape-free searches how many candidate shapes were tried or skipped.

use std::fmt;
use std::ops::AddAssign;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    TableauxYielded,
    CellsTried,
    ResidueMismatches,
    ShapesTried,
    ShapesSkipped,
}

const NAMES: [&str; Counters::COUNT] = [
    "tableaux yielded",
    "cells tried",
    "residue mismatches",
    "shapes tried",
    "shapes skipped",
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl AddAssign<&Statistics> for Statistics {
    fn add_assign(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in NAMES.iter().zip(self.stats.iter()).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::CellsTried);
        stats.increment_counter(Counters::CellsTried);
        stats.increment_counter(Counters::TableauxYielded);
        assert_eq!(stats.get(Counters::CellsTried), 2);
        assert_eq!(stats.get(Counters::ShapesSkipped), 0);

        let mut total = Statistics::new();
        total += &stats;
        total += &stats;
        assert_eq!(total.get(Counters::CellsTried), 4);
        assert_eq!(
            stats.to_string(),
            "tableaux yielded: 1, cells tried: 2, residue mismatches: 0, shapes tried: 0, shapes skipped: 0"
        );
    }
}
