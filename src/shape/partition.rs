// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer partitions.

use crate::error::{Result, TableauError};
use crate::tableau::Tableau;
use std::fmt;

/// A partition: a weakly decreasing sequence of positive integers.
///
/// Trailing zeros are dropped on construction, so `[3, 1, 0]` and `[3, 1]`
/// are the same partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Partition(Vec<usize>);

impl Partition {
    /// Validate and build a partition.
    pub fn new(mut parts: Vec<usize>) -> Result<Self> {
        while parts.last() == Some(&0) {
            parts.pop();
        }
        if parts.windows(2).any(|w| w[0] < w[1]) || parts.contains(&0) {
            return Err(TableauError::NotAPartition(parts));
        }
        Ok(Self(parts))
    }

    /// The empty partition of 0.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Caller guarantees `parts` is weakly decreasing with no zeros.
    pub(crate) fn from_parts_unchecked(parts: Vec<usize>) -> Self {
        debug_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
        debug_assert!(!parts.contains(&0));
        Self(parts)
    }

    pub fn parts(&self) -> &[usize] {
        &self.0
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.0.iter().sum()
    }

    /// Length of row `r`, zero beyond the last row.
    pub fn row_length(&self, r: usize) -> usize {
        self.0.get(r).copied().unwrap_or(0)
    }

    pub fn contains_cell(&self, row: usize, column: usize) -> bool {
        column < self.row_length(row)
    }

    /// All cells `(row, column)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(r, &len)| (0..len).map(move |c| (r, c)))
    }

    /// The transpose, whose rows are the columns of `self`.
    pub fn conjugate(&self) -> Partition {
        let width = self.row_length(0);
        let parts = (0..width)
            .map(|c| self.0.iter().take_while(|&&len| len > c).count())
            .collect();
        Self(parts)
    }

    /// Cells that can be added keeping a partition, top row first.
    pub fn addable_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(self.len() + 1);
        for (r, &len) in self.0.iter().enumerate() {
            if r == 0 || len < self.0[r - 1] {
                cells.push((r, len));
            }
        }
        cells.push((self.len(), 0));
        cells
    }

    /// Cells that can be removed keeping a partition, top row first.
    pub fn removable_cells(&self) -> Vec<(usize, usize)> {
        (0..self.len())
            .filter(|&r| self.row_length(r) > self.row_length(r + 1))
            .map(|r| (r, self.0[r] - 1))
            .collect()
    }

    pub fn is_addable(&self, row: usize, column: usize) -> bool {
        column == self.row_length(row) && (row == 0 || column < self.row_length(row - 1))
    }

    pub fn is_removable(&self, row: usize, column: usize) -> bool {
        let len = self.row_length(row);
        len > 0 && column + 1 == len && len > self.row_length(row + 1)
    }

    /// The partition with the addable cell in row `row` added.
    pub fn add_cell(&self, row: usize) -> Option<Partition> {
        let column = self.row_length(row);
        if !self.is_addable(row, column) {
            return None;
        }
        let mut parts = self.0.clone();
        if row == parts.len() {
            parts.push(1);
        } else {
            parts[row] += 1;
        }
        Some(Self(parts))
    }

    /// The partition with the removable cell in row `row` removed.
    pub fn remove_cell(&self, row: usize) -> Option<Partition> {
        let len = self.row_length(row);
        if len == 0 || !self.is_removable(row, len - 1) {
            return None;
        }
        let mut parts = self.0.clone();
        parts[row] -= 1;
        if parts[row] == 0 {
            parts.pop();
        }
        Some(Self(parts))
    }

    /// Dominance order: every prefix sum of `self` is at least that of `other`.
    pub fn dominates(&self, other: &Partition) -> bool {
        let rows = self.len().max(other.len());
        let mut ours = 0;
        let mut theirs = 0;
        for r in 0..rows {
            ours += self.row_length(r);
            theirs += other.row_length(r);
            if theirs > ours {
                return false;
            }
        }
        true
    }

    /// Hook length of the cell `(row, column)`.
    pub fn hook_length(&self, row: usize, column: usize) -> usize {
        let arm = self.row_length(row) - column - 1;
        let leg = self.0[row + 1..]
            .iter()
            .take_while(|&&len| len > column)
            .count();
        arm + leg + 1
    }

    /// Number of standard tableaux of this shape, by the hook length formula.
    ///
    /// Each hook is cancelled against the factors of `n!` before anything is
    /// multiplied, so the result is exact whenever it fits in a `u128`.
    pub fn dimension(&self) -> u128 {
        let mut factors: Vec<usize> = (1..=self.size()).collect();
        for (r, c) in self.cells() {
            let mut hook = self.hook_length(r, c);
            for factor in factors.iter_mut() {
                if hook == 1 {
                    break;
                }
                let g = gcd(*factor, hook);
                *factor /= g;
                hook /= g;
            }
        }
        factors.into_iter().map(|f| f as u128).product()
    }

    /// `Σ i·λ_i` with rows counted from 0.
    pub fn weighted_size(&self) -> usize {
        self.0.iter().enumerate().map(|(i, &len)| i * len).sum()
    }

    /// The tableau of this shape with `1..=n` entered along the rows.
    pub fn initial_tableau(&self) -> Tableau {
        let mut next = 1;
        let rows = self
            .0
            .iter()
            .map(|&len| {
                let row: Vec<usize> = (next..next + len).collect();
                next += len;
                row
            })
            .collect();
        Tableau::from_rows_unchecked(rows)
    }

    /// Compact form: `3,2,1`, or `-` for the empty partition.
    pub fn compact(&self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let parts: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        parts.join(",")
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl fmt::Display for Partition {
    /// Format as a list, `[3, 2, 1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<usize>> for Partition {
    type Error = TableauError;

    fn try_from(parts: Vec<usize>) -> Result<Self> {
        Self::new(parts)
    }
}
