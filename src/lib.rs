// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tableau tuples: construction, validation and enumeration.
//!
//! A tableau tuple is an ordered list of tableaux, one per component of a
//! partition tuple. The tuples whose rows increase and whose entries are
//! `1, 2, ..., n` are *row standard*; if the columns increase as well they
//! are *standard*. These index bases of Specht modules of cyclotomic Hecke
//! algebras, and this crate supplies the combinatorics behind them.
//!
//! # Architecture
//!
//! ## Values
//!
//! - [`shape`]: partitions and partition tuples, with addable and removable
//!   cells, conjugation, dominance, residues and counting formulas.
//! - [`tableau`]: a single tableau.
//! - [`tuple`]: [`TableauTuple`] and the two stricter kinds,
//!   [`RowStandardTableauTuple`] and [`StandardTableauTuple`], each a
//!   checked wrapper of the one below. Degree and codegree live here.
//! - [`perm`]: permutations, reduced words, row and column stabilizers and
//!   the charge statistic of words.
//! - [`residue`]: residue sequences for a quantum characteristic `e` and a
//!   multicharge.
//!
//! All values are immutable and compare by structure.
//!
//! ## Enumeration
//!
//! - [`enumerate`]: every (row) standard tableau tuple of a shape, or of a
//!   residue sequence, as a lazy iterator behind the
//!   [`TableauFamily`](enumerate::TableauFamily) trait.
//! - [`family`]: families chosen by level, size and shape, some of them
//!   infinite.
//!
//! ## Odds and ends
//!
//! - [`segments`]: the `seg` statistic of crystal tableaux.
//! - [`config`]: display styles. [`stats`]: search counters.
//!
//! # Diagnostics
//!
//! Building with the `trace` feature makes the enumerators write tagged
//! progress lines (`[ShapeEnumerator]`, `[LinearExtensions]`,
//! `[ResidueSearch]`, `[Factory]`) to standard error.
//!
//! # Example
//!
//! ```
//! use tableau_tuples::enumerate::{StandardShapeTableaux, TableauFamily};
//! use tableau_tuples::shape::PartitionTuple;
//!
//! let shape = PartitionTuple::from_rows(vec![vec![2, 1], vec![2]]).unwrap();
//! let family = StandardShapeTableaux::new(shape);
//! assert_eq!(family.cardinality(), Some(20));
//! for t in family.iter() {
//!     assert_eq!(t.conjugate().conjugate(), t);
//! }
//! ```
//!
//! # References
//!
//! - Brundan, J., Kleshchev, A. and Wang, W. (2011). "Graded Specht modules."
//!   J. reine angew. Math. 655, 61–87.
//! - Pruesse, G. and Ruskey, F. (1994). "Generating linear extensions fast."
//!   SIAM J. Comput. 23(2), 373–386.

/// Tagged progress line on stderr, compiled in with the `trace` feature.
macro_rules! trace {
    ($($arg:tt)*) => {
        if cfg!(feature = "trace") {
            eprintln!($($arg)*);
        }
    };
}
pub(crate) use trace;

pub mod config;
pub mod enumerate;
pub mod error;
pub mod family;
pub mod perm;
pub mod residue;
pub mod segments;
pub mod shape;
pub mod stats;
pub mod tableau;
pub mod tuple;

// Re-export commonly used types
pub use error::{Result, TableauError};
pub use residue::ResidueSequence;
pub use shape::{Cell, Partition, PartitionTuple};
pub use tableau::Tableau;
pub use tuple::{AnyTableauTuple, RowStandardTableauTuple, StandardTableauTuple, TableauTuple};
