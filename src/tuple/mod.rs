// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tableau tuples.
//!
//! A [`TableauTuple`] is an ordered list of [`Tableau`] components whose
//! shapes form a [`PartitionTuple`]. Values are immutable: every edit
//! returns a new tuple.
//!
//! Two stricter kinds wrap the same data:
//!
//! - [`RowStandardTableauTuple`]: rows increase and the entries are
//!   `1, 2, ..., n`, each once.
//! - [`StandardTableauTuple`]: columns increase as well.
//!
//! Edits that may break the stricter invariants return an
//! [`AnyTableauTuple`], which carries the tightest kind that still holds.
//!
//! # Examples
//!
//! ```
//! use tableau_tuples::tuple::{StandardTableauTuple, TableauKind, TableauTuple};
//! use tableau_tuples::shape::Cell;
//!
//! let t = TableauTuple::from_rows(vec![vec![vec![5]], vec![vec![1, 2], vec![3, 4]]]).unwrap();
//! assert_eq!(t.level(), 2);
//! assert_eq!(t.entry(Cell::new(1, 1, 0)), Ok(3));
//! assert_eq!(t.content(3, &[0, 1]), Ok(0));
//! assert_eq!(t.kind(), TableauKind::Standard);
//!
//! let s = StandardTableauTuple::new(t).unwrap();
//! assert_eq!(s.restrict(3).to_string(), "([], [[1, 2], [3]])");
//! ```

mod degree;
mod display;
mod kind;
mod parse;
mod standard;

pub use kind::{AnyTableauTuple, TableauKind};
pub use standard::{RowStandardTableauTuple, StandardTableauTuple};

use crate::error::{Result, TableauError};
use crate::perm::word;
use crate::perm::{Permutation, PermutationGroup};
use crate::residue::{check_multicharge, reduce};
use crate::shape::{Cell, PartitionTuple};
use crate::tableau::Tableau;

/// An ordered tuple of tableaux; the level is the number of components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableauTuple {
    components: Vec<Tableau>,
}

impl TableauTuple {
    /// A tuple of the given components; there must be at least one.
    pub fn new(components: Vec<Tableau>) -> Result<Self> {
        if components.is_empty() {
            return Err(TableauError::NotAPartitionTuple);
        }
        Ok(Self { components })
    }

    /// Validate raw rows, one list of rows per component.
    pub fn from_rows(components: Vec<Vec<Vec<usize>>>) -> Result<Self> {
        let components = components
            .into_iter()
            .enumerate()
            .map(|(k, rows)| Tableau::for_component(rows, k))
            .collect::<Result<Vec<_>>>()?;
        Self::new(components)
    }

    /// The level one tuple holding `t`.
    pub fn from_tableau(t: Tableau) -> Self {
        Self {
            components: vec![t],
        }
    }

    pub(crate) fn from_components_unchecked(components: Vec<Tableau>) -> Self {
        debug_assert!(!components.is_empty());
        Self { components }
    }

    /// The tuple of `level` empty tableaux.
    pub fn empty(level: usize) -> Self {
        Self {
            components: vec![Tableau::empty(); level.max(1)],
        }
    }

    pub fn level(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[Tableau] {
        &self.components
    }

    pub fn component(&self, k: usize) -> Option<&Tableau> {
        self.components.get(k)
    }

    pub fn into_components(self) -> Vec<Tableau> {
        self.components
    }

    /// The single component of a level one tuple.
    pub fn as_tableau(&self) -> Option<&Tableau> {
        match self.components.as_slice() {
            [t] => Some(t),
            _ => None,
        }
    }

    pub fn shape(&self) -> PartitionTuple {
        PartitionTuple::from_components_unchecked(
            self.components.iter().map(Tableau::shape).collect(),
        )
    }

    pub fn size(&self) -> usize {
        self.components.iter().map(Tableau::size).sum()
    }

    pub fn entry(&self, cell: Cell) -> Result<usize> {
        self.components
            .get(cell.component)
            .and_then(|t| t.entry(cell.row, cell.column))
            .ok_or(TableauError::CellOutOfRange(cell))
    }

    /// Entries read along the rows, component by component.
    pub fn entries(&self) -> Vec<usize> {
        self.components.iter().flat_map(Tableau::entries).collect()
    }

    /// Cells holding `m`, component by component, bottom row first.
    pub fn cells_containing(&self, m: usize) -> Vec<Cell> {
        self.components
            .iter()
            .enumerate()
            .flat_map(|(k, t)| {
                t.cells_containing(m)
                    .into_iter()
                    .map(move |(r, c)| Cell::new(k, r, c))
            })
            .collect()
    }

    /// Cell holding `k`, scanning components and rows in order.
    pub(crate) fn find(&self, k: usize) -> Option<Cell> {
        self.components.iter().enumerate().find_map(|(l, t)| {
            t.rows().iter().enumerate().find_map(|(r, row)| {
                row.iter().position(|&v| v == k).map(|c| Cell::new(l, r, c))
            })
        })
    }

    /// Reverse the components and transpose each of them.
    pub fn conjugate(&self) -> TableauTuple {
        Self {
            components: self.components.iter().rev().map(Tableau::conjugate).collect(),
        }
    }

    /// Drop every entry larger than `m`. Fails when some component is left
    /// with a row longer than the one above it.
    pub fn restrict(&self, m: usize) -> Result<TableauTuple> {
        let components = self
            .components
            .iter()
            .enumerate()
            .map(|(k, t)| t.restrict_in(m, k))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { components })
    }

    /// Drop the largest entry, `size`.
    pub fn restrict_last(&self) -> Result<TableauTuple> {
        self.restrict(self.size().saturating_sub(1))
    }

    /// Set the entry of `cell` to `value`, growing the shape when `cell` is
    /// addable.
    pub fn add_entry(&self, cell: Cell, value: usize) -> Result<TableauTuple> {
        let mut components = self.components.clone();
        let Some(t) = components.get_mut(cell.component) else {
            return Err(TableauError::NotAddable(cell));
        };
        if !t.set_entry(cell.row, cell.column, value) {
            if !t.shape().is_addable(cell.row, cell.column) {
                return Err(TableauError::NotAddable(cell));
            }
            t.push_entry(cell.row, value);
        }
        Ok(Self { components })
    }

    /// Every tuple obtained by putting `n + 1` in an addable cell; `n`
    /// defaults to the size.
    pub fn up(&self, n: Option<usize>) -> impl Iterator<Item = TableauTuple> + '_ {
        let value = n.unwrap_or_else(|| self.size()) + 1;
        self.shape()
            .addable_cells()
            .into_iter()
            .map(move |cell| {
                let mut components = self.components.clone();
                components[cell.component].push_entry(cell.row, value);
                Self { components }
            })
    }

    /// Entries of every component read row by row from the bottom, last
    /// component first.
    pub fn to_word_by_row(&self) -> Vec<usize> {
        self.components
            .iter()
            .rev()
            .flat_map(|t| t.rows().iter().rev().flat_map(|row| row.iter().copied()))
            .collect()
    }

    /// The row reading of the conjugate, each conjugate row reversed.
    pub fn to_word_by_column(&self) -> Vec<usize> {
        self.conjugate()
            .components
            .iter()
            .flat_map(|t| t.rows().iter().flat_map(|row| row.iter().rev().copied()))
            .collect()
    }

    pub fn to_word(&self) -> Vec<usize> {
        self.to_word_by_row()
    }

    /// The row reading word as a permutation.
    pub fn to_permutation(&self) -> Result<Permutation> {
        Permutation::from_word(self.to_word_by_row())
    }

    /// Generated by the transpositions of horizontally adjacent entries.
    pub fn row_stabilizer(&self) -> PermutationGroup {
        let degree = self.entries().into_iter().max().unwrap_or(0);
        let generators: Vec<(usize, usize)> = self
            .components
            .iter()
            .flat_map(|t| t.rows().iter())
            .flat_map(|row| row.windows(2).map(|w| (w[0], w[1])))
            .collect();
        PermutationGroup::from_transpositions(degree, generators)
    }

    pub fn column_stabilizer(&self) -> PermutationGroup {
        self.conjugate().row_stabilizer()
    }

    pub fn charge(&self) -> Result<usize> {
        word::charge(&self.to_word_by_row())
    }

    pub fn cocharge(&self) -> Result<usize> {
        word::cocharge(&self.to_word_by_row())
    }

    /// `multicharge[k] - r + c` for the first cell `(k, r, c)` holding `value`.
    pub fn content(&self, value: usize, multicharge: &[i64]) -> Result<i64> {
        check_multicharge(multicharge, self.level())?;
        let cell = self
            .find(value)
            .ok_or(TableauError::ValueNotFound(value))?;
        Ok(cell.content(multicharge[cell.component]))
    }

    /// The content of `value` reduced modulo `e`.
    pub fn residue(&self, value: usize, e: usize, multicharge: &[i64]) -> Result<i64> {
        Ok(reduce(e, self.content(value, multicharge)?))
    }

    pub fn first_row_descent(&self) -> Option<Cell> {
        self.components.iter().enumerate().find_map(|(k, t)| {
            t.first_row_descent().map(|(r, c)| Cell::new(k, r, c))
        })
    }

    pub fn first_column_descent(&self) -> Option<Cell> {
        self.components.iter().enumerate().find_map(|(k, t)| {
            t.first_column_descent().map(|(r, c)| Cell::new(k, r, c))
        })
    }

    pub fn is_row_strict(&self) -> bool {
        self.components.iter().all(Tableau::is_row_strict)
    }

    pub fn is_column_strict(&self) -> bool {
        self.components.iter().all(Tableau::is_column_strict)
    }

    /// Whether the entries are `1, 2, ..., n`, each exactly once.
    pub fn has_bijective_entries(&self) -> bool {
        let mut entries = self.entries();
        entries.sort_unstable();
        entries.iter().enumerate().all(|(i, &v)| v == i + 1)
    }

    pub fn is_row_standard(&self) -> bool {
        self.is_row_strict() && self.has_bijective_entries()
    }

    pub fn is_standard(&self) -> bool {
        self.is_row_standard() && self.is_column_strict()
    }

    /// Replace each entry `a` by `w(a)`, where `w` fixes points past its degree.
    pub fn symmetric_group_action_on_entries(&self, w: &Permutation) -> AnyTableauTuple {
        let w = w.padded(self.size());
        let components = self
            .components
            .iter()
            .map(|t| t.map_entries(|a| w.apply(a)))
            .collect();
        Self { components }.classify()
    }

    /// The tightest kind this tuple satisfies.
    pub fn kind(&self) -> TableauKind {
        if !self.is_row_standard() {
            TableauKind::General
        } else if self.is_column_strict() {
            TableauKind::Standard
        } else {
            TableauKind::RowStandard
        }
    }

    /// Wrap the tuple in the tightest kind it satisfies.
    pub fn classify(self) -> AnyTableauTuple {
        match self.kind() {
            TableauKind::General => AnyTableauTuple::General(self),
            TableauKind::RowStandard => {
                AnyTableauTuple::RowStandard(RowStandardTableauTuple::new_unchecked(self))
            }
            TableauKind::Standard => {
                AnyTableauTuple::Standard(StandardTableauTuple::new_unchecked(self))
            }
        }
    }
}

impl From<Tableau> for TableauTuple {
    fn from(t: Tableau) -> Self {
        Self::from_tableau(t)
    }
}

/// A level one tuple equals its only component.
impl PartialEq<Tableau> for TableauTuple {
    fn eq(&self, other: &Tableau) -> bool {
        self.as_tableau() == Some(other)
    }
}

impl PartialEq<TableauTuple> for Tableau {
    fn eq(&self, other: &TableauTuple) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tt(rows: Vec<Vec<Vec<usize>>>) -> TableauTuple {
        TableauTuple::from_rows(rows).unwrap()
    }

    fn sample() -> TableauTuple {
        tt(vec![
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![5, 6, 7], vec![8]],
            vec![vec![9, 10], vec![11], vec![12]],
        ])
    }

    #[test]
    fn test_construction() {
        assert_eq!(TableauTuple::new(vec![]), Err(TableauError::NotAPartitionTuple));
        assert_eq!(
            TableauTuple::from_rows(vec![vec![vec![1]], vec![vec![2], vec![3, 4]]]),
            Err(TableauError::MalformedShape {
                component: 1,
                reason: "row 1 is longer than row 0".to_string()
            })
        );
        let t = tt(vec![vec![vec![1, 2, 3], vec![4, 5]]]);
        let plain = Tableau::new(vec![vec![1, 2, 3], vec![4, 5]]).unwrap();
        assert_eq!(t, plain);
        assert_eq!(plain, t);
        assert_eq!(t.level(), 1);
        assert_eq!(TableauTuple::empty(3).size(), 0);
    }

    #[test]
    fn test_queries() {
        let t = sample();
        assert_eq!(t.size(), 12);
        assert_eq!(t.shape().compact(), "2,2|3,1|2,1,1");
        assert_eq!(t.entry(Cell::new(1, 0, 0)), Ok(5));
        assert_eq!(
            t.entry(Cell::new(1, 1, 1)),
            Err(TableauError::CellOutOfRange(Cell::new(1, 1, 1)))
        );
        assert_eq!(t.entries(), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_words() {
        let t = sample();
        assert_eq!(t.to_word_by_row(), vec![12, 11, 9, 10, 8, 5, 6, 7, 3, 4, 1, 2]);
        assert_eq!(t.to_word_by_column(), vec![12, 11, 9, 10, 8, 5, 6, 7, 3, 1, 4, 2]);
        assert_eq!(
            t.to_permutation().unwrap().one_line(),
            &[12, 11, 9, 10, 8, 5, 6, 7, 3, 4, 1, 2]
        );
    }

    #[test]
    fn test_cells_containing() {
        let t = tt(vec![
            vec![vec![4, 5]],
            vec![vec![1, 1, 2, 4], vec![2, 4, 4], vec![4]],
            vec![vec![1, 3, 4], vec![3, 4]],
        ]);
        assert_eq!(
            t.cells_containing(4),
            vec![
                Cell::new(0, 0, 0),
                Cell::new(1, 2, 0),
                Cell::new(1, 1, 1),
                Cell::new(1, 1, 2),
                Cell::new(1, 0, 3),
                Cell::new(2, 1, 1),
                Cell::new(2, 0, 2)
            ]
        );
        assert!(t.cells_containing(6).is_empty());
        assert_eq!(t.charge(), Err(TableauError::ContentNotPartition));
    }

    #[test]
    fn test_stabilizers() {
        let t = tt(vec![
            vec![vec![1, 2, 3], vec![4, 5]],
            vec![vec![6, 7]],
            vec![vec![8], vec![9]],
        ]);
        let rs = t.row_stabilizer();
        assert_eq!(rs.order(), 24);
        assert_eq!(rs.degree(), 9);
        let p = Permutation::from_cycles(9, &[vec![1, 3, 2], vec![4, 5]]).unwrap();
        let q = Permutation::from_cycles(9, &[vec![1, 4]]).unwrap();
        assert!(rs.contains(&p));
        assert!(!rs.contains(&q));
        let cs = t.column_stabilizer();
        assert_eq!(cs.order(), 8);
        assert!(!cs.contains(&p));
        assert!(cs.contains(&q));
    }

    #[test]
    fn test_add_entry() {
        let s = tt(vec![
            vec![vec![3, 4, 7], vec![6, 8]],
            vec![vec![9, 13], vec![12]],
            vec![vec![1, 5], vec![2, 11], vec![10]],
        ]);
        let t = s.add_entry(Cell::new(0, 0, 3), 14).unwrap();
        assert_eq!(t.kind(), TableauKind::Standard);
        let t = s.add_entry(Cell::new(0, 0, 3), 15).unwrap();
        assert_eq!(t.kind(), TableauKind::General);
        let t = s.add_entry(Cell::new(1, 1, 1), 14).unwrap();
        assert_eq!(t.kind(), TableauKind::Standard);
        let t = s.add_entry(Cell::new(2, 1, 1), 14).unwrap();
        assert_eq!(t.kind(), TableauKind::General);
        assert_eq!(
            s.add_entry(Cell::new(2, 1, 2), 14),
            Err(TableauError::NotAddable(Cell::new(2, 1, 2)))
        );
        assert!(s.add_entry(Cell::new(3, 0, 0), 14).is_err());
    }

    #[test]
    fn test_restrict() {
        let t = tt(vec![vec![vec![5]], vec![vec![1, 2], vec![3, 4]]]);
        assert_eq!(t.restrict_last().unwrap().to_string(), "([], [[1, 2], [3, 4]])");
        assert_eq!(t.restrict(6), Ok(t.clone()));
        assert_eq!(t.restrict(3).unwrap().to_string(), "([], [[1, 2], [3]])");
        assert_eq!(t.restrict(0).unwrap().to_string(), "([], [])");
        let bad = tt(vec![vec![vec![1]], vec![vec![2, 5], vec![3, 4]]]);
        assert!(matches!(
            bad.restrict(4),
            Err(TableauError::MalformedShape { component: 1, .. })
        ));
    }

    #[test]
    fn test_up() {
        let t = tt(vec![vec![vec![1, 2]], vec![vec![3]]]);
        let ups: Vec<String> = t.up(None).map(|s| s.to_string()).collect();
        assert_eq!(
            ups,
            vec![
                "([[1, 2, 4]], [[3]])",
                "([[1, 2], [4]], [[3]])",
                "([[1, 2]], [[3, 4]])",
                "([[1, 2]], [[3], [4]])"
            ]
        );
    }

    #[test]
    fn test_content_and_residue() {
        let t = tt(vec![vec![vec![5]], vec![vec![1, 2], vec![3, 4]]]);
        assert_eq!(t.content(3, &[0, 0]), Ok(-1));
        assert_eq!(t.content(3, &[0, 1]), Ok(0));
        assert_eq!(t.content(3, &[0, 2]), Ok(1));
        assert_eq!(t.content(6, &[0, 2]), Err(TableauError::ValueNotFound(6)));
        assert_eq!(
            TableauError::ValueNotFound(6).to_string(),
            "6 must be contained in the tableaux"
        );
        assert_eq!(t.residue(1, 3, &[0, 0]), Ok(0));
        assert_eq!(t.residue(1, 3, &[0, 1]), Ok(1));
        assert_eq!(t.residue(1, 3, &[0, 2]), Ok(2));
        assert!(t.content(1, &[0]).is_err());
    }

    #[test]
    fn test_symmetric_group_action() {
        let t = tt(vec![vec![vec![1, 2], vec![4]], vec![vec![3, 5]]]);
        let swap45 = Permutation::from_cycles(5, &[vec![4, 5]]).unwrap();
        let moved = t.symmetric_group_action_on_entries(&swap45);
        assert_eq!(moved.to_string(), "([[1, 2], [5]], [[3, 4]])");
        assert_eq!(moved.kind(), TableauKind::Standard);
        let swap12 = Permutation::from_word(vec![2, 1]).unwrap();
        let moved = t.symmetric_group_action_on_entries(&swap12);
        assert_eq!(moved.to_string(), "([[2, 1], [4]], [[3, 5]])");
        assert_eq!(moved.kind(), TableauKind::General);
    }

    #[test]
    fn test_standardness() {
        assert!(tt(vec![vec![vec![5, 7], vec![8]], vec![vec![1, 3], vec![2, 4]], vec![vec![6]]]).is_standard());
        assert!(!tt(vec![vec![vec![1, 2], vec![2, 4]], vec![vec![4, 5, 6], vec![7, 8]]]).is_standard());
        assert!(!tt(vec![vec![vec![1]], vec![vec![2, 3], vec![2, 4]]]).is_standard());
        assert!(!tt(vec![vec![vec![1]], vec![vec![2, 2], vec![4, 5]]]).is_row_strict());
        assert_eq!(
            tt(vec![vec![vec![3, 5, 6], vec![2, 4, 5]], vec![vec![1, 4, 5], vec![2, 3]]])
                .first_column_descent(),
            Some(Cell::new(0, 0, 0))
        );
        assert_eq!(
            tt(vec![vec![vec![1, 2, 3], vec![4]], vec![vec![5, 6, 7], vec![8, 9]]])
                .first_column_descent(),
            None
        );
        let rs = tt(vec![vec![vec![2, 3], vec![1]], vec![vec![4]]]);
        assert_eq!(rs.kind(), TableauKind::RowStandard);
        assert_eq!(rs.first_column_descent(), Some(Cell::new(0, 0, 0)));
    }
}
