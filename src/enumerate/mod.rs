// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumerators of tableau tuples.
//!
//! There are two ways to pick out a finite family of (row) standard tableau
//! tuples:
//!
//! - by shape: [`StandardShapeTableaux`] walks every standard filling of a
//!   shape with an in-place exchange step, and [`RowStandardShapeTableaux`]
//!   walks the [`LinearExtensions`] of the poset of row positions;
//! - by residue sequence, optionally with a shape as well:
//!   [`StandardResidueTableaux`] and [`RowStandardResidueTableaux`] search
//!   cell by cell, keeping only cells of the required residue.
//!
//! Every family implements [`TableauFamily`], which gives counting, ranked
//! access and a membership test on top of iteration. Iteration is lazy and
//! each call starts afresh.
//!
//! # Examples
//!
//! ```
//! use tableau_tuples::enumerate::{StandardShapeTableaux, TableauFamily};
//! use tableau_tuples::shape::PartitionTuple;
//!
//! let shape = PartitionTuple::from_rows(vec![vec![2], vec![1], vec![]]).unwrap();
//! let family = StandardShapeTableaux::new(shape);
//! let all: Vec<String> = family.iter().map(|t| t.to_string()).collect();
//! assert_eq!(
//!     all,
//!     vec!["([[1, 2]], [[3]], [])", "([[1, 3]], [[2]], [])", "([[2, 3]], [[1]], [])"]
//! );
//! assert_eq!(family.slice(1, 5).len(), 2);
//! ```

mod linear_extension;
mod residue;
mod row_standard_shape;
mod search;
mod standard_shape;

pub use linear_extension::LinearExtensions;
pub use residue::{
    RowStandardResidueIter, RowStandardResidueTableaux, StandardResidueIter,
    StandardResidueTableaux,
};
pub use row_standard_shape::{RowStandardShapeIter, RowStandardShapeTableaux};
pub use standard_shape::{StandardShapeIter, StandardShapeTableaux};

use crate::error::{Result, TableauError};
use crate::tuple::TableauTuple;

/// A family of tableau tuples that can be listed in a fixed order.
///
/// Only [`TableauFamily::iter`] and [`TableauFamily::contains`] are
/// required. The remaining methods walk the iterator, so families with a
/// closed form or an infinite order override them.
pub trait TableauFamily {
    type Item;

    /// The members, in order, from the start.
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_>;

    fn contains(&self, t: &TableauTuple) -> bool;

    fn is_finite(&self) -> bool {
        true
    }

    /// Number of members; `None` for an infinite family.
    fn cardinality(&self) -> Option<u128> {
        self.is_finite().then(|| self.iter().count() as u128)
    }

    fn first(&self) -> Option<Self::Item> {
        self.iter().next()
    }

    /// The last member; `None` for an infinite family.
    fn last(&self) -> Option<Self::Item> {
        if self.is_finite() {
            self.iter().last()
        } else {
            None
        }
    }

    /// The member at `index`, counting from 0.
    fn unrank(&self, index: usize) -> Result<Self::Item> {
        self.iter()
            .nth(index)
            .ok_or(TableauError::IndexOutOfRange { index })
    }

    /// Up to `count` members starting at `start`.
    fn slice(&self, start: usize, count: usize) -> Vec<Self::Item> {
        self.iter().skip(start).take(count).collect()
    }

    /// Every member; fails for an infinite family.
    fn list(&self) -> Result<Vec<Self::Item>> {
        if !self.is_finite() {
            return Err(TableauError::OutOfDomain(
                "this is an infinite set of tableaux".to_string(),
            ));
        }
        Ok(self.iter().collect())
    }

    /// A typical member: the fifth if there are more than four, else the
    /// last.
    fn an_element(&self) -> Option<Self::Item> {
        typical_member(self)
    }
}

pub(crate) fn typical_member<F: TableauFamily + ?Sized>(family: &F) -> Option<F::Item> {
    match family.cardinality() {
        Some(c) if c > 4 => family.unrank(4).ok(),
        Some(c) if c > 1 => family.last(),
        _ => family.first(),
    }
}
