// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single tableaux.
//!
//! A [`Tableau`] is a left justified array of rows whose lengths weakly
//! decrease. Entries are positive integers; nothing here requires them to
//! be distinct or increasing. Tableau tuples are built from these.
//!
//! # Examples
//!
//! ```
//! use tableau_tuples::tableau::Tableau;
//!
//! let t = Tableau::new(vec![vec![1, 3, 4], vec![2]]).unwrap();
//! assert_eq!(t.shape().parts(), &[3, 1]);
//! assert!(t.is_row_strict() && t.is_column_strict());
//! assert_eq!(t.conjugate().to_string(), "[[1, 2], [3], [4]]");
//! assert_eq!(t.restrict(2).unwrap().compact(), "1/2");
//! ```

mod display;

use crate::error::{Result, TableauError};
use crate::shape::Partition;

/// A left justified array of rows of weakly decreasing length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tableau {
    rows: Vec<Vec<usize>>,
}

impl Tableau {
    /// Validate and build a tableau. Trailing empty rows are dropped.
    pub fn new(rows: Vec<Vec<usize>>) -> Result<Self> {
        Self::for_component(rows, 0)
    }

    /// As [`Tableau::new`], reporting failures against component `component`.
    pub(crate) fn for_component(mut rows: Vec<Vec<usize>>, component: usize) -> Result<Self> {
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        if let Some(r) = (1..rows.len()).find(|&r| rows[r].len() > rows[r - 1].len()) {
            return Err(TableauError::MalformedShape {
                component,
                reason: format!("row {} is longer than row {}", r, r - 1),
            });
        }
        Ok(Self { rows })
    }

    /// Caller guarantees the row lengths weakly decrease and none is zero.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<usize>>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].len() >= w[1].len()));
        debug_assert!(rows.iter().all(|row| !row.is_empty()));
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn size(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn shape(&self) -> Partition {
        Partition::from_parts_unchecked(self.rows.iter().map(Vec::len).collect())
    }

    pub fn entry(&self, row: usize, column: usize) -> Option<usize> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Entries read along the rows, top to bottom.
    pub fn entries(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Cells `(row, column)` holding `value`, bottom row first.
    pub fn cells_containing(&self, value: usize) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .rev()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(_, &v)| v == value)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    /// First cell, row by row, whose right hand neighbour is not larger.
    pub fn first_row_descent(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.windows(2)
                .position(|w| w[0] >= w[1])
                .map(|c| (r, c))
        })
    }

    /// First cell, row by row, whose lower neighbour is not larger.
    pub fn first_column_descent(&self) -> Option<(usize, usize)> {
        self.rows.windows(2).enumerate().find_map(|(r, pair)| {
            pair[1]
                .iter()
                .zip(pair[0].iter())
                .position(|(below, above)| above >= below)
                .map(|c| (r, c))
        })
    }

    pub fn is_row_strict(&self) -> bool {
        self.first_row_descent().is_none()
    }

    pub fn is_column_strict(&self) -> bool {
        self.first_column_descent().is_none()
    }

    /// The subtableau of entries at most `m`; fails when the rows left over
    /// no longer decrease in length.
    pub fn restrict(&self, m: usize) -> Result<Tableau> {
        self.restrict_in(m, 0)
    }

    pub(crate) fn restrict_in(&self, m: usize, component: usize) -> Result<Tableau> {
        Self::for_component(self.filtered_rows(m), component)
    }

    /// Restriction of a tableau whose rows and columns increase, which is
    /// always a tableau.
    pub(crate) fn restrict_increasing(&self, m: usize) -> Tableau {
        let mut rows = self.filtered_rows(m);
        rows.retain(|row| !row.is_empty());
        Self { rows }
    }

    fn filtered_rows(&self, m: usize) -> Vec<Vec<usize>> {
        self.rows
            .iter()
            .map(|row| row.iter().copied().filter(|&v| v <= m).collect())
            .collect()
    }

    /// The transpose.
    pub fn conjugate(&self) -> Tableau {
        let width = self.rows.first().map_or(0, Vec::len);
        let rows = (0..width)
            .map(|c| {
                self.rows
                    .iter()
                    .take_while(|row| row.len() > c)
                    .map(|row| row[c])
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Replace every entry `v` by `f(v)`, keeping the shape.
    pub fn map_entries(&self, mut f: impl FnMut(usize) -> usize) -> Tableau {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|&v| f(v)).collect())
            .collect();
        Self { rows }
    }

    /// Add `value` at `(row, column)`, which must be an addable cell.
    pub(crate) fn push_entry(&mut self, row: usize, value: usize) {
        if row == self.rows.len() {
            self.rows.push(vec![value]);
        } else {
            self.rows[row].push(value);
        }
    }

    /// Undo [`Tableau::push_entry`] for the same row.
    pub(crate) fn pop_entry(&mut self, row: usize) {
        if let Some(entries) = self.rows.get_mut(row) {
            entries.pop();
            if entries.is_empty() {
                self.rows.truncate(row);
            }
        }
    }

    pub(crate) fn set_entry(&mut self, row: usize, column: usize, value: usize) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl TryFrom<Vec<Vec<usize>>> for Tableau {
    type Error = TableauError;

    fn try_from(rows: Vec<Vec<usize>>) -> Result<Self> {
        Self::new(rows)
    }
}
