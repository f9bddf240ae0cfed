// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row standard and standard tableau tuples.

use super::{AnyTableauTuple, TableauTuple};
use crate::error::{Result, TableauError};
use crate::residue::{check_multicharge, ResidueSequence};
use crate::shape::{Cell, PartitionTuple};
use crate::tableau::Tableau;
use std::fmt;
use std::ops::Deref;

/// A tableau tuple with increasing rows and entries `1, 2, ..., n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowStandardTableauTuple(TableauTuple);

impl RowStandardTableauTuple {
    pub fn new(t: TableauTuple) -> Result<Self> {
        if !t.is_row_strict() {
            return Err(TableauError::NotRowStrict);
        }
        if !t.has_bijective_entries() {
            return Err(TableauError::NotBijection);
        }
        Ok(Self(t))
    }

    pub fn from_rows(components: Vec<Vec<Vec<usize>>>) -> Result<Self> {
        Self::new(TableauTuple::from_rows(components)?)
    }

    pub(crate) fn new_unchecked(t: TableauTuple) -> Self {
        debug_assert!(t.is_row_standard());
        Self(t)
    }

    pub fn as_tableau_tuple(&self) -> &TableauTuple {
        &self.0
    }

    pub fn into_inner(self) -> TableauTuple {
        self.0
    }

    /// The cell holding `k`.
    pub fn inverse(&self, k: usize) -> Result<Cell> {
        self.0.find(k).ok_or(TableauError::ValueNotFound(k))
    }

    /// Residues of the cells holding `1, 2, ..., n`.
    pub fn residue_sequence(&self, e: usize, multicharge: &[i64]) -> Result<ResidueSequence> {
        check_multicharge(multicharge, self.level())?;
        let mut residues = vec![0; self.size()];
        for (k, t) in self.components().iter().enumerate() {
            for (r, row) in t.rows().iter().enumerate() {
                for (c, &v) in row.iter().enumerate() {
                    residues[v - 1] = Cell::new(k, r, c).content(multicharge[k]);
                }
            }
        }
        ResidueSequence::new(e, multicharge.to_vec(), residues)
    }

    /// Drop the entries larger than `m`. Any `m` is accepted; this fails when
    /// a row is emptied, or shortened, below a row that keeps more entries,
    /// as `[[2, 3], [1]]` does at `m = 1`.
    pub fn restrict(&self, m: usize) -> Result<RowStandardTableauTuple> {
        Ok(Self(self.0.restrict(m)?))
    }

    pub fn conjugate(&self) -> AnyTableauTuple {
        self.0.conjugate().classify()
    }
}

impl Deref for RowStandardTableauTuple {
    type Target = TableauTuple;

    fn deref(&self) -> &TableauTuple {
        &self.0
    }
}

impl fmt::Display for RowStandardTableauTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RowStandardTableauTuple> for TableauTuple {
    fn from(t: RowStandardTableauTuple) -> Self {
        t.0
    }
}

impl TryFrom<TableauTuple> for RowStandardTableauTuple {
    type Error = TableauError;

    fn try_from(t: TableauTuple) -> Result<Self> {
        Self::new(t)
    }
}

impl PartialEq<Tableau> for RowStandardTableauTuple {
    fn eq(&self, other: &Tableau) -> bool {
        self.0 == *other
    }
}

/// A row standard tableau tuple whose columns also increase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardTableauTuple(RowStandardTableauTuple);

impl StandardTableauTuple {
    pub fn new(t: TableauTuple) -> Result<Self> {
        let row_standard = RowStandardTableauTuple::new(t)?;
        if !row_standard.is_column_strict() {
            return Err(TableauError::NotColumnStrict);
        }
        Ok(Self(row_standard))
    }

    pub fn from_rows(components: Vec<Vec<Vec<usize>>>) -> Result<Self> {
        Self::new(TableauTuple::from_rows(components)?)
    }

    pub(crate) fn new_unchecked(t: TableauTuple) -> Self {
        debug_assert!(t.is_standard());
        Self(RowStandardTableauTuple(t))
    }

    pub fn as_tableau_tuple(&self) -> &TableauTuple {
        &self.0 .0
    }

    pub fn into_inner(self) -> TableauTuple {
        self.0 .0
    }

    pub fn to_row_standard(&self) -> RowStandardTableauTuple {
        self.0.clone()
    }

    /// Drop the entries larger than `m`; the result is again standard.
    pub fn restrict(&self, m: usize) -> StandardTableauTuple {
        let components = self
            .components()
            .iter()
            .map(|t| t.restrict_increasing(m))
            .collect();
        Self::new_unchecked(TableauTuple::from_components_unchecked(components))
    }

    pub fn restrict_last(&self) -> StandardTableauTuple {
        self.restrict(self.size().saturating_sub(1))
    }

    pub fn conjugate(&self) -> StandardTableauTuple {
        Self::new_unchecked(self.as_tableau_tuple().conjugate())
    }

    /// Whether the shape of every restriction of `self` dominates the shape
    /// of the matching restriction of `other`.
    pub fn dominates(&self, other: &StandardTableauTuple) -> bool {
        (1..=self.size()).all(|m| {
            self.restrict(m)
                .shape()
                .dominates(&other.restrict(m).shape())
        })
    }

    /// The shapes of the restrictions to `0, 1, ..., n`.
    pub fn to_chain(&self) -> Vec<PartitionTuple> {
        (0..=self.size()).map(|m| self.restrict(m).shape()).collect()
    }
}

impl Deref for StandardTableauTuple {
    type Target = RowStandardTableauTuple;

    fn deref(&self) -> &RowStandardTableauTuple {
        &self.0
    }
}

impl fmt::Display for StandardTableauTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tableau_tuple())
    }
}

impl From<StandardTableauTuple> for TableauTuple {
    fn from(t: StandardTableauTuple) -> Self {
        t.into_inner()
    }
}

impl From<StandardTableauTuple> for RowStandardTableauTuple {
    fn from(t: StandardTableauTuple) -> Self {
        t.0
    }
}

impl TryFrom<TableauTuple> for StandardTableauTuple {
    type Error = TableauError;

    fn try_from(t: TableauTuple) -> Result<Self> {
        Self::new(t)
    }
}

impl PartialEq<Tableau> for StandardTableauTuple {
    fn eq(&self, other: &Tableau) -> bool {
        *self.as_tableau_tuple() == *other
    }
}
