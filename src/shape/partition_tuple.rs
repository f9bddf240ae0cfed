// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partition tuples: the shapes of tableau tuples.

use super::{factorial, multinomial, Cell, Partition};
use crate::error::{Result, TableauError};
use crate::residue::{check_multicharge, reduce};
use crate::tableau::Tableau;
use crate::tuple::TableauTuple;
use std::collections::BTreeMap;
use std::fmt;

/// An ordered tuple of partitions; the level is the number of components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionTuple(Vec<Partition>);

impl PartitionTuple {
    /// Build a partition tuple from its components; the level must be positive.
    pub fn new(components: Vec<Partition>) -> Result<Self> {
        if components.is_empty() {
            return Err(TableauError::NotAPartitionTuple);
        }
        Ok(Self(components))
    }

    /// Validate raw row lengths, one list per component.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        let components = rows
            .into_iter()
            .map(Partition::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(components)
    }

    /// The tuple of `level` empty partitions.
    pub fn empty(level: usize) -> Self {
        Self(vec![Partition::empty(); level.max(1)])
    }

    pub(crate) fn from_components_unchecked(components: Vec<Partition>) -> Self {
        debug_assert!(!components.is_empty());
        Self(components)
    }

    pub fn level(&self) -> usize {
        self.0.len()
    }

    pub fn size(&self) -> usize {
        self.0.iter().map(Partition::size).sum()
    }

    pub fn components(&self) -> &[Partition] {
        &self.0
    }

    pub fn component(&self, k: usize) -> Option<&Partition> {
        self.0.get(k)
    }

    /// All cells, component by component and row by row.
    pub fn cells(&self) -> Vec<Cell> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(k, p)| p.cells().map(move |(r, c)| Cell::new(k, r, c)))
            .collect()
    }

    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.0
            .get(cell.component)
            .is_some_and(|p| p.contains_cell(cell.row, cell.column))
    }

    /// Addable cells of every component, in component order.
    pub fn addable_cells(&self) -> Vec<Cell> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(k, p)| {
                p.addable_cells()
                    .into_iter()
                    .map(move |(r, c)| Cell::new(k, r, c))
            })
            .collect()
    }

    /// Removable cells of every component, in component order.
    pub fn removable_cells(&self) -> Vec<Cell> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(k, p)| {
                p.removable_cells()
                    .into_iter()
                    .map(move |(r, c)| Cell::new(k, r, c))
            })
            .collect()
    }

    pub fn is_addable(&self, cell: Cell) -> bool {
        self.0
            .get(cell.component)
            .is_some_and(|p| p.is_addable(cell.row, cell.column))
    }

    /// The shape with an addable cell added.
    pub fn add_cell(&self, cell: Cell) -> Result<PartitionTuple> {
        let grown = self
            .0
            .get(cell.component)
            .filter(|p| p.is_addable(cell.row, cell.column))
            .and_then(|p| p.add_cell(cell.row))
            .ok_or(TableauError::NotAddable(cell))?;
        let mut components = self.0.clone();
        components[cell.component] = grown;
        Ok(Self(components))
    }

    /// The shape with a removable cell removed.
    pub fn remove_cell(&self, cell: Cell) -> Result<PartitionTuple> {
        let shrunk = self
            .0
            .get(cell.component)
            .filter(|p| p.is_removable(cell.row, cell.column))
            .and_then(|p| p.remove_cell(cell.row))
            .ok_or(TableauError::CellOutOfRange(cell))?;
        let mut components = self.0.clone();
        components[cell.component] = shrunk;
        Ok(Self(components))
    }

    /// Reverse the components and conjugate each of them.
    pub fn conjugate(&self) -> PartitionTuple {
        Self(self.0.iter().rev().map(Partition::conjugate).collect())
    }

    /// Dominance for partition tuples.
    ///
    /// Rows are compared in reading order across components; once a
    /// component of one tuple runs out of rows, the rest of the longer
    /// component is added at once.
    pub fn dominates(&self, other: &PartitionTuple) -> bool {
        if self == other {
            return true;
        }
        let mut ours = 0;
        let mut theirs = 0;
        for (mine, yours) in self.0.iter().zip(other.0.iter()) {
            let common = mine.len().min(yours.len());
            for r in 0..common {
                ours += mine.parts()[r];
                theirs += yours.parts()[r];
                if theirs > ours {
                    return false;
                }
            }
            ours += mine.parts()[common..].iter().sum::<usize>();
            theirs += yours.parts()[common..].iter().sum::<usize>();
            if theirs > ours {
                return false;
            }
        }
        true
    }

    /// Residue of `cell` for quantum characteristic `e` and `multicharge`.
    pub fn cell_residue(&self, cell: Cell, e: usize, multicharge: &[i64]) -> Result<i64> {
        check_multicharge(multicharge, self.level())?;
        Ok(reduce(e, cell.content(multicharge[cell.component])))
    }

    /// The multiset of cell residues, as residue → multiplicity.
    pub fn block(&self, e: usize, multicharge: &[i64]) -> Result<BTreeMap<i64, usize>> {
        check_multicharge(multicharge, self.level())?;
        let mut block = BTreeMap::new();
        for cell in self.cells() {
            *block
                .entry(reduce(e, cell.content(multicharge[cell.component])))
                .or_insert(0) += 1;
        }
        Ok(block)
    }

    /// Degree of the initial tableau of this shape.
    ///
    /// When `e > 0` every row of length `l` contributes `l / e`. Each cell
    /// then contributes one for every later component whose charge has the
    /// same residue as the cell.
    pub fn initial_degree(&self, e: usize, multicharge: &[i64]) -> Result<i64> {
        check_multicharge(multicharge, self.level())?;
        let mut degree: i64 = if e == 0 {
            0
        } else {
            self.0
                .iter()
                .flat_map(|p| p.parts().iter())
                .map(|&len| (len / e) as i64)
                .sum()
        };
        let charges: Vec<i64> = multicharge.iter().map(|&m| reduce(e, m)).collect();
        for cell in self.cells() {
            let residue = reduce(e, cell.content(multicharge[cell.component]));
            degree += charges[cell.component + 1..]
                .iter()
                .filter(|&&charge| charge == residue)
                .count() as i64;
        }
        Ok(degree)
    }

    /// The tableau with `1..=n` entered along the rows, first component first.
    pub fn initial_tableau(&self) -> TableauTuple {
        let mut next = 1;
        let components = self
            .0
            .iter()
            .map(|p| {
                let rows = p
                    .parts()
                    .iter()
                    .map(|&len| {
                        let row: Vec<usize> = (next..next + len).collect();
                        next += len;
                        row
                    })
                    .collect();
                Tableau::from_rows_unchecked(rows)
            })
            .collect();
        TableauTuple::from_components_unchecked(components)
    }

    /// The tableau with `1..=n` entered down the columns, last component first.
    pub fn initial_column_tableau(&self) -> TableauTuple {
        self.conjugate().initial_tableau().conjugate()
    }

    /// Number of standard tableau tuples of this shape.
    pub fn standard_count(&self) -> u128 {
        multinomial(self.0.iter().map(Partition::size))
            * self.0.iter().map(Partition::dimension).product::<u128>()
    }

    /// Number of row standard tableau tuples of this shape.
    pub fn row_standard_count(&self) -> u128 {
        multinomial(self.0.iter().flat_map(|p| p.parts().iter().copied()))
    }

    /// `n!`, the number of fillings of the shape by `1..=n`.
    pub fn fillings(&self) -> u128 {
        factorial(self.size())
    }

    /// Compact form: `2,1|-|1`.
    pub fn compact(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(Partition::compact).collect();
        parts.join("|")
    }
}

impl fmt::Display for PartitionTuple {
    /// Format as `([2, 1], [], [1])`; level one shapes print as a partition.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level() == 1 {
            return write!(f, "{}", self.0[0]);
        }
        write!(f, "(")?;
        for (k, p) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ")")
    }
}

impl From<Partition> for PartitionTuple {
    fn from(p: Partition) -> Self {
        Self(vec![p])
    }
}
