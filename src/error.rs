// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for tableau construction, editing and enumeration.
//!
//! Every failure is local and synchronous: it is reported where it is
//! detected and nothing is retried or repaired internally.

use crate::shape::Cell;
use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Errors raised while building, editing or enumerating tableau tuples.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum TableauError {
    /// A component is not a list of rows of weakly decreasing length.
    #[error("component {component} is not a valid tableau: {reason}")]
    MalformedShape { component: usize, reason: String },

    /// A list of parts is not weakly decreasing.
    #[error("{0:?} is not a partition")]
    NotAPartition(Vec<usize>),

    /// A shape has no components.
    #[error("a partition tuple must have at least one component")]
    NotAPartitionTuple,

    #[error("tableaux must be row strict")]
    NotRowStrict,

    #[error("tableaux must be column strict")]
    NotColumnStrict,

    #[error("entries must be in bijection with {{1,2,...,n}}")]
    NotBijection,

    #[error("the cell {0} is not contained in the tableau")]
    CellOutOfRange(Cell),

    #[error("{0} must be contained in the tableaux")]
    ValueNotFound(usize),

    #[error("{0} is not an addable cell of the tableau")]
    NotAddable(Cell),

    /// A residue sequence and a shape of different sizes.
    #[error("the size of the shape ({shape}) and the length of the residue sequence ({residues}) must coincide")]
    ResidueShapeMismatch { residues: usize, shape: usize },

    #[error("the multicharge has {multicharge} entries but the level is {level}")]
    MultichargeLevelMismatch { multicharge: usize, level: usize },

    /// Factory arguments that contradict each other.
    #[error("conflicting specification: {0}")]
    ConflictingSpecification(String),

    /// A factory argument outside its domain.
    #[error("{0}")]
    OutOfDomain(String),

    /// Slice-like access past the end of a finite enumeration.
    #[error("value out of range: index {index}")]
    IndexOutOfRange { index: usize },

    #[error("{0:?} is not a permutation")]
    NotAPermutation(Vec<usize>),

    #[error("the evaluation of the word must be a partition")]
    ContentNotPartition,
}

pub type Result<T> = std::result::Result<T, TableauError>;

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_messages() {
        assert_eq!(
            TableauError::NotRowStrict.to_string(),
            "tableaux must be row strict"
        );
        assert_eq!(
            TableauError::NotBijection.to_string(),
            "entries must be in bijection with {1,2,...,n}"
        );
        assert_eq!(
            TableauError::CellOutOfRange(Cell::new(0, 2, 1)).to_string(),
            "the cell (0, 2, 1) is not contained in the tableau"
        );
        assert_eq!(
            TableauError::OutOfDomain("the level must be a positive integer".into()).to_string(),
            "the level must be a positive integer"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_ne!(TableauError::NotRowStrict, TableauError::NotColumnStrict);
        assert_ne!(TableauError::NotRowStrict, TableauError::NotBijection);
        assert_eq!(TableauError::COUNT, 16);
    }
}
