// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row standard tableau tuples of a fixed shape.
//!
//! Number the positions of the shape `1..=n` along the rows, first
//! component first. Filling the shape row strictly is the same as choosing
//! a linear extension of the poset in which each position lies below the
//! one to its right. An extension lists the positions in the order the
//! entries `1, 2, ..., n` go into them, so its inverse is the flat filling.

use super::standard_shape::inflate;
use super::{LinearExtensions, TableauFamily};
use crate::shape::PartitionTuple;
use crate::tuple::{RowStandardTableauTuple, TableauTuple};
use rand::seq::SliceRandom;
use rand::Rng;

/// All row standard tableau tuples of one shape.
///
/// ```
/// use tableau_tuples::enumerate::RowStandardShapeTableaux;
/// use tableau_tuples::shape::PartitionTuple;
///
/// let shape = PartitionTuple::from_rows(vec![vec![2, 1]]).unwrap();
/// let all: Vec<String> = RowStandardShapeTableaux::new(shape)
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(all, vec!["[[2, 3], [1]]", "[[1, 2], [3]]", "[[1, 3], [2]]"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStandardShapeTableaux {
    shape: PartitionTuple,
}

impl RowStandardShapeTableaux {
    pub fn new(shape: PartitionTuple) -> Self {
        crate::trace!("[ShapeEnumerator] row standard tableaux of shape {}", shape);
        Self { shape }
    }

    pub fn shape(&self) -> &PartitionTuple {
        &self.shape
    }

    pub fn iter(&self) -> RowStandardShapeIter {
        let mut relations = Vec::new();
        let mut position = 1;
        for p in self.shape.components() {
            for &len in p.parts() {
                relations.extend((position..position + len - 1).map(|x| (x, x + 1)));
                position += len;
            }
        }
        RowStandardShapeIter {
            shape: self.shape.clone(),
            extensions: LinearExtensions::new(self.shape.size(), &relations),
        }
    }

    /// A uniformly random filling, each row then sorted.
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> RowStandardTableauTuple {
        let mut flat: Vec<usize> = (1..=self.shape.size()).collect();
        flat.shuffle(rng);
        let mut rest = flat.as_mut_slice();
        for p in self.shape.components() {
            for &len in p.parts() {
                let (row, tail) = std::mem::take(&mut rest).split_at_mut(len);
                row.sort_unstable();
                rest = tail;
            }
        }
        RowStandardTableauTuple::new_unchecked(inflate(&self.shape, &flat))
    }
}

impl TableauFamily for RowStandardShapeTableaux {
    type Item = RowStandardTableauTuple;

    fn iter(&self) -> Box<dyn Iterator<Item = RowStandardTableauTuple> + '_> {
        Box::new(RowStandardShapeTableaux::iter(self))
    }

    fn cardinality(&self) -> Option<u128> {
        Some(self.shape.row_standard_count())
    }

    fn contains(&self, t: &TableauTuple) -> bool {
        t.shape() == self.shape && t.is_row_standard()
    }
}

impl<'a> IntoIterator for &'a RowStandardShapeTableaux {
    type Item = RowStandardTableauTuple;
    type IntoIter = RowStandardShapeIter;

    fn into_iter(self) -> RowStandardShapeIter {
        self.iter()
    }
}

/// Iterator for [`RowStandardShapeTableaux`].
#[derive(Debug)]
pub struct RowStandardShapeIter {
    shape: PartitionTuple,
    extensions: LinearExtensions,
}

impl Iterator for RowStandardShapeIter {
    type Item = RowStandardTableauTuple;

    fn next(&mut self) -> Option<RowStandardTableauTuple> {
        let extension = self.extensions.next()?;
        let mut flat = vec![0; extension.len()];
        for (i, &p) in extension.iter().enumerate() {
            flat[p - 1] = i + 1;
        }
        Some(RowStandardTableauTuple::new_unchecked(inflate(
            &self.shape,
            &flat,
        )))
    }
}
