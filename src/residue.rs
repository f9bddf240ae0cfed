// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Residue sequences.
//!
//! For a quantum characteristic `e` and a multicharge `(a_0, ..., a_{l-1})`
//! the residue of the cell `(k, r, c)` is `a_k - r + c`, reduced modulo `e`
//! when `e > 0`. The residue sequence of a row standard tableau tuple lists
//! the residues of the cells containing `1, 2, ..., n` in turn.
//!
//! # Examples
//!
//! ```
//! use tableau_tuples::residue::ResidueSequence;
//!
//! let res = ResidueSequence::new(3, vec![0, 0], vec![2, 0, 0, 1, 0]).unwrap();
//! assert_eq!(res.to_string(), "3-residue sequence (2,0,0,1,0) with multicharge (0,0)");
//! assert_eq!(res.restrict(2).residues(), &[2, 0]);
//! ```

use crate::enumerate::{RowStandardResidueTableaux, StandardResidueTableaux};
use crate::error::{Result, TableauError};
use crate::shape::PartitionTuple;
use std::collections::BTreeMap;
use std::fmt;

/// Reduce `value` into `0..e`; `e == 0` leaves it alone.
pub fn reduce(e: usize, value: i64) -> i64 {
    if e == 0 {
        value
    } else {
        value.rem_euclid(e as i64)
    }
}

/// A multicharge must have exactly one entry per component.
pub fn check_multicharge(multicharge: &[i64], level: usize) -> Result<()> {
    if multicharge.len() != level {
        return Err(TableauError::MultichargeLevelMismatch {
            multicharge: multicharge.len(),
            level,
        });
    }
    Ok(())
}

/// The residues of `1, 2, ..., n` for a fixed `e` and multicharge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueSequence {
    e: usize,
    multicharge: Vec<i64>,
    residues: Vec<i64>,
}

impl ResidueSequence {
    /// Build a residue sequence; residues are reduced modulo `e`.
    pub fn new(e: usize, multicharge: Vec<i64>, residues: Vec<i64>) -> Result<Self> {
        if multicharge.is_empty() {
            return Err(TableauError::OutOfDomain(
                "the multicharge must have at least one entry".to_string(),
            ));
        }
        let residues = residues.into_iter().map(|r| reduce(e, r)).collect();
        Ok(Self {
            e,
            multicharge,
            residues,
        })
    }

    /// The quantum characteristic.
    pub fn e(&self) -> usize {
        self.e
    }

    pub fn multicharge(&self) -> &[i64] {
        &self.multicharge
    }

    pub fn residues(&self) -> &[i64] {
        &self.residues
    }

    pub fn level(&self) -> usize {
        self.multicharge.len()
    }

    pub fn size(&self) -> usize {
        self.residues.len()
    }

    /// Residue of `k`, counting from 1.
    pub fn residue(&self, k: usize) -> Option<i64> {
        k.checked_sub(1).and_then(|i| self.residues.get(i).copied())
    }

    /// The first `m` residues.
    pub fn restrict(&self, m: usize) -> ResidueSequence {
        Self {
            e: self.e,
            multicharge: self.multicharge.clone(),
            residues: self.residues[..m.min(self.size())].to_vec(),
        }
    }

    /// Exchange the residues of `i` and `j`, counting from 1.
    pub fn swap_residues(&self, i: usize, j: usize) -> Result<ResidueSequence> {
        let n = self.size();
        if i == 0 || j == 0 || i > n || j > n {
            return Err(TableauError::IndexOutOfRange { index: i.max(j) });
        }
        let mut swapped = self.clone();
        swapped.residues.swap(i - 1, j - 1);
        Ok(swapped)
    }

    /// Residue → multiplicity.
    pub fn block(&self) -> BTreeMap<i64, usize> {
        let mut block = BTreeMap::new();
        for &r in &self.residues {
            *block.entry(r).or_insert(0) += 1;
        }
        block
    }

    /// Standard tableau tuples with this residue sequence, of `shape` if given.
    pub fn standard_tableaux(&self, shape: Option<PartitionTuple>) -> Result<StandardResidueTableaux> {
        StandardResidueTableaux::new(self.clone(), shape)
    }

    /// Row standard tableau tuples with this residue sequence, of `shape` if given.
    pub fn row_standard_tableaux(
        &self,
        shape: Option<PartitionTuple>,
    ) -> Result<RowStandardResidueTableaux> {
        RowStandardResidueTableaux::new(self.clone(), shape)
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for ResidueSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-residue sequence ({}) with multicharge ({})",
            self.e,
            join(&self.residues),
            join(&self.multicharge)
        )
    }
}
