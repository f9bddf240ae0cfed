// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shape algebra: partitions, partition tuples and their cells.
//!
//! A partition is a weakly decreasing list of positive parts. A partition
//! tuple is an ordered list of partitions, one per component; its level is
//! the number of components. Cells are addressed as `(component, row,
//! column)`, all 0-based.
//!
//! # Examples
//!
//! ```
//! use tableau_tuples::shape::{Cell, PartitionTuple};
//!
//! let mu = PartitionTuple::from_rows(vec![vec![2, 1], vec![], vec![1]]).unwrap();
//! assert_eq!(mu.level(), 3);
//! assert_eq!(mu.size(), 4);
//! assert_eq!(mu.addable_cells()[0], Cell::new(0, 0, 2));
//! assert_eq!(format!("{}", mu.conjugate()), "([1], [], [2, 1])");
//! ```

mod enumerate;
mod partition;
mod partition_tuple;

pub use enumerate::{
    all_partition_tuples, compositions, partition_tuples, partition_tuples_of_level,
    partition_tuples_of_size, partitions, Compositions, PartitionTuples, Partitions,
};
pub use partition::Partition;
pub use partition_tuple::PartitionTuple;

use std::fmt;

/// A cell `(component, row, column)` of a tableau tuple or partition tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub component: usize,
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub const fn new(component: usize, row: usize, column: usize) -> Self {
        Self {
            component,
            row,
            column,
        }
    }

    /// Content of the cell relative to `charge`: `charge - row + column`.
    pub fn content(self, charge: i64) -> i64 {
        charge - self.row as i64 + self.column as i64
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.component, self.row, self.column)
    }
}

impl From<(usize, usize, usize)> for Cell {
    fn from((component, row, column): (usize, usize, usize)) -> Self {
        Self::new(component, row, column)
    }
}

/// `n!` as a `u128`; exact up to `n = 34`.
pub(crate) fn factorial(n: usize) -> u128 {
    (1..=n as u128).product()
}

/// Binomial coefficient, computed so that every intermediate value is exact.
pub(crate) fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result
}

/// Multinomial coefficient `(Σ parts)! / Π parts!`.
pub(crate) fn multinomial(parts: impl IntoIterator<Item = usize>) -> u128 {
    let mut total = 0;
    let mut result: u128 = 1;
    for part in parts {
        total += part;
        result *= binomial(total, part);
    }
    result
}
