// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graded degrees of row standard tableau tuples.
//!
//! Both degrees start from the degree of an initial tableau and then walk
//! a reduced word that sorts the entries back into that initial tableau.
//! Each simple transposition `s_r` changes the degree according to the
//! residues currently in positions `r` and `r + 1`:
//!
//! - equal residues: `-2`
//! - residues one apart modulo `e`: `+1`, or `+2` when `e == 2`
//! - otherwise: no change
//!
//! and then swaps those two residues.

use super::RowStandardTableauTuple;
use crate::error::Result;
use crate::perm::leftmost_descent_word;
use crate::residue::reduce;

impl RowStandardTableauTuple {
    /// The lexicographically least reduced word taking the row reading
    /// `1, 2, ..., n` of the initial tableau to the row reading of `self`.
    ///
    /// ```
    /// use tableau_tuples::tuple::StandardTableauTuple;
    ///
    /// let t = StandardTableauTuple::from_rows(vec![
    ///     vec![vec![1, 2], vec![3]],
    ///     vec![vec![4, 5, 8], vec![6, 9], vec![7]],
    /// ])
    /// .unwrap();
    /// assert_eq!(t.reduced_row_word(), vec![6, 8, 7]);
    /// ```
    pub fn reduced_row_word(&self) -> Vec<usize> {
        leftmost_descent_word(&self.entries())
    }

    /// The reduced row word of the conjugate.
    pub fn reduced_column_word(&self) -> Vec<usize> {
        leftmost_descent_word(&self.as_tableau_tuple().conjugate().entries())
    }

    /// The graded degree for quantum characteristic `e` and `multicharge`.
    pub fn degree(&self, e: usize, multicharge: &[i64]) -> Result<i64> {
        let shape = self.shape();
        let initial = shape.initial_degree(e, multicharge)?;
        if self.size() == 0 {
            return Ok(0);
        }
        let residues = initial_residues(&shape.initial_tableau(), e, multicharge)?;
        Ok(fold_degree(initial, residues, &self.reduced_row_word(), e))
    }

    /// The graded codegree: the degree computed from the conjugate shape,
    /// with the multicharge negated and reversed to match the reversed
    /// components.
    pub fn codegree(&self, e: usize, multicharge: &[i64]) -> Result<i64> {
        let conjugate = self.as_tableau_tuple().conjugate();
        let conjugate_charge: Vec<i64> = multicharge.iter().rev().map(|&m| -m).collect();
        let initial = conjugate
            .shape()
            .initial_degree(e, &conjugate_charge)?;
        if self.size() == 0 {
            return Ok(0);
        }
        let residues = initial_residues(
            &self.shape().initial_column_tableau(),
            e,
            multicharge,
        )?;
        Ok(fold_degree(
            initial,
            residues,
            &leftmost_descent_word(&conjugate.entries()),
            e,
        ))
    }
}

fn initial_residues(
    initial: &super::TableauTuple,
    e: usize,
    multicharge: &[i64],
) -> Result<Vec<i64>> {
    Ok(RowStandardTableauTuple::new_unchecked(initial.clone())
        .residue_sequence(e, multicharge)?
        .residues()
        .to_vec())
}

fn fold_degree(mut degree: i64, mut residues: Vec<i64>, word: &[usize], e: usize) -> i64 {
    let step = if e == 2 { 2 } else { 1 };
    for &r in word {
        let (a, b) = (residues[r - 1], residues[r]);
        if a == b {
            degree -= 2;
        } else if reduce(e, a - b) == reduce(e, 1) || reduce(e, b - a) == reduce(e, 1) {
            degree += step;
        }
        residues.swap(r - 1, r);
    }
    degree
}
