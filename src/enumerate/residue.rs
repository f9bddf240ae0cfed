// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tableau tuples with a fixed residue sequence.
//!
//! Without a shape, standard tableau tuples are grown from the empty tuple:
//! entry `m` goes into each addable cell whose residue is the `m`-th
//! residue of the sequence. With a shape, the shape is peeled instead: the
//! largest entry left comes out of each removable cell of matching residue.
//! Both searches run on [`SearchEngine`], so iteration is lazy and can be
//! abandoned at any point.
//!
//! Row standard tableau tuples of a shape are the standard tableau tuples
//! of the shape with every row split off into its own component, the charge
//! of row `r` of component `k` being `multicharge[k] - r`. Without a shape,
//! every partition tuple of the right level and size whose block matches
//! the residue sequence is tried in turn.

use super::search::{SearchEngine, SearchProblem};
use super::TableauFamily;
use crate::error::{Result, TableauError};
use crate::residue::{check_multicharge, reduce, ResidueSequence};
use crate::shape::{partition_tuples, Cell, PartitionTuple, PartitionTuples};
use crate::stats::{Counters, Statistics};
use crate::tableau::Tableau;
use crate::tuple::{RowStandardTableauTuple, StandardTableauTuple, TableauTuple};
use std::collections::BTreeMap;

/// Grow a standard tableau tuple one entry at a time.
#[derive(Debug)]
struct AddableSearch {
    e: usize,
    multicharge: Vec<i64>,
    residues: Vec<i64>,
    components: Vec<Tableau>,
    placed: usize,
}

impl AddableSearch {
    fn new(residue: &ResidueSequence) -> Self {
        Self {
            e: residue.e(),
            multicharge: residue.multicharge().to_vec(),
            residues: residue.residues().to_vec(),
            components: vec![Tableau::empty(); residue.level()],
            placed: 0,
        }
    }
}

impl SearchProblem for AddableSearch {
    type Move = Cell;
    type Solution = TableauTuple;

    fn candidates(&mut self, stats: &mut Statistics) -> Vec<Cell> {
        let target = self.residues[self.placed];
        let shape = PartitionTuple::from_components_unchecked(
            self.components.iter().map(Tableau::shape).collect(),
        );
        let mut cells = Vec::new();
        for cell in shape.addable_cells() {
            stats.increment_counter(Counters::CellsTried);
            if reduce(self.e, cell.content(self.multicharge[cell.component])) == target {
                cells.push(cell);
            } else {
                stats.increment_counter(Counters::ResidueMismatches);
            }
        }
        cells
    }

    fn apply(&mut self, cell: Cell) {
        self.placed += 1;
        self.components[cell.component].push_entry(cell.row, self.placed);
    }

    fn undo(&mut self, cell: Cell) {
        self.components[cell.component].pop_entry(cell.row);
        self.placed -= 1;
    }

    fn is_complete(&self) -> bool {
        self.placed == self.residues.len()
    }

    fn solution(&self) -> TableauTuple {
        TableauTuple::from_components_unchecked(self.components.clone())
    }
}

/// Empty a fixed shape one cell at a time, largest entry first.
///
/// The solution is the filled grid, component by component.
#[derive(Debug)]
struct RemovableSearch {
    e: usize,
    charges: Vec<i64>,
    residues: Vec<i64>,
    /// Row lengths of the full shape.
    parts: Vec<Vec<usize>>,
    /// Row lengths still to be emptied.
    remaining: Vec<Vec<usize>>,
    /// `cells[i]` holds the entry `n - i`.
    cells: Vec<Cell>,
}

impl RemovableSearch {
    fn new(e: usize, charges: Vec<i64>, residues: Vec<i64>, parts: Vec<Vec<usize>>) -> Self {
        Self {
            e,
            charges,
            residues,
            remaining: parts.clone(),
            parts,
            cells: Vec::new(),
        }
    }
}

impl SearchProblem for RemovableSearch {
    type Move = Cell;
    type Solution = Vec<Vec<Vec<usize>>>;

    fn candidates(&mut self, stats: &mut Statistics) -> Vec<Cell> {
        let target = self.residues[self.residues.len() - self.cells.len() - 1];
        let mut cells = Vec::new();
        for (k, rows) in self.remaining.iter().enumerate() {
            for (r, &len) in rows.iter().enumerate() {
                if len == 0 || rows.get(r + 1).is_some_and(|&next| next == len) {
                    continue;
                }
                stats.increment_counter(Counters::CellsTried);
                let cell = Cell::new(k, r, len - 1);
                if reduce(self.e, cell.content(self.charges[k])) == target {
                    cells.push(cell);
                } else {
                    stats.increment_counter(Counters::ResidueMismatches);
                }
            }
        }
        cells
    }

    fn apply(&mut self, cell: Cell) {
        self.remaining[cell.component][cell.row] -= 1;
        self.cells.push(cell);
    }

    fn undo(&mut self, cell: Cell) {
        self.remaining[cell.component][cell.row] += 1;
        self.cells.pop();
    }

    fn is_complete(&self) -> bool {
        self.cells.len() == self.residues.len()
    }

    fn solution(&self) -> Vec<Vec<Vec<usize>>> {
        let n = self.residues.len();
        let mut grid: Vec<Vec<Vec<usize>>> = self
            .parts
            .iter()
            .map(|rows| rows.iter().map(|&len| vec![0; len]).collect())
            .collect();
        for (i, cell) in self.cells.iter().enumerate() {
            grid[cell.component][cell.row][cell.column] = n - i;
        }
        grid
    }
}

fn check_shape(residue: &ResidueSequence, shape: Option<&PartitionTuple>) -> Result<()> {
    let Some(shape) = shape else {
        return Ok(());
    };
    check_multicharge(residue.multicharge(), shape.level())?;
    if shape.size() != residue.size() {
        return Err(TableauError::ResidueShapeMismatch {
            residues: residue.size(),
            shape: shape.size(),
        });
    }
    Ok(())
}

fn parts(shape: &PartitionTuple) -> Vec<Vec<usize>> {
    shape.components().iter().map(|p| p.parts().to_vec()).collect()
}

fn has_residues(t: &RowStandardTableauTuple, residue: &ResidueSequence) -> bool {
    t.residue_sequence(residue.e(), residue.multicharge())
        .is_ok_and(|found| found == *residue)
}

fn matches_target(
    t: &TableauTuple,
    residue: &ResidueSequence,
    shape: Option<&PartitionTuple>,
) -> bool {
    t.level() == residue.level()
        && t.size() == residue.size()
        && shape.map_or(true, |mu| t.shape() == *mu)
}

/// The standard tableau tuples with a given residue sequence, and of a
/// given shape if there is one.
///
/// ```
/// use tableau_tuples::enumerate::TableauFamily;
/// use tableau_tuples::residue::ResidueSequence;
///
/// let res = ResidueSequence::new(3, vec![0, 1], vec![0, 2, 1, 1]).unwrap();
/// let family = res.standard_tableaux(None).unwrap();
/// assert_eq!(family.cardinality(), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardResidueTableaux {
    residue: ResidueSequence,
    shape: Option<PartitionTuple>,
}

impl StandardResidueTableaux {
    /// Fails when the shape does not fit the residue sequence.
    pub fn new(residue: ResidueSequence, shape: Option<PartitionTuple>) -> Result<Self> {
        check_shape(&residue, shape.as_ref())?;
        crate::trace!("[ResidueSearch] standard tableaux with {}", residue);
        Ok(Self { residue, shape })
    }

    pub fn residue(&self) -> &ResidueSequence {
        &self.residue
    }

    pub fn shape(&self) -> Option<&PartitionTuple> {
        self.shape.as_ref()
    }

    pub fn iter(&self) -> StandardResidueIter {
        let search = match &self.shape {
            None => Search::Addable(SearchEngine::new(AddableSearch::new(&self.residue))),
            Some(shape) => Search::Removable(SearchEngine::new(RemovableSearch::new(
                self.residue.e(),
                self.residue.multicharge().to_vec(),
                self.residue.residues().to_vec(),
                parts(shape),
            ))),
        };
        StandardResidueIter { search }
    }
}

impl TableauFamily for StandardResidueTableaux {
    type Item = StandardTableauTuple;

    fn iter(&self) -> Box<dyn Iterator<Item = StandardTableauTuple> + '_> {
        Box::new(StandardResidueTableaux::iter(self))
    }

    fn contains(&self, t: &TableauTuple) -> bool {
        matches_target(t, &self.residue, self.shape.as_ref())
            && StandardTableauTuple::new(t.clone())
                .is_ok_and(|s| has_residues(&s, &self.residue))
    }

    /// The first member; the search is not run any further.
    fn an_element(&self) -> Option<StandardTableauTuple> {
        self.first()
    }
}

impl<'a> IntoIterator for &'a StandardResidueTableaux {
    type Item = StandardTableauTuple;
    type IntoIter = StandardResidueIter;

    fn into_iter(self) -> StandardResidueIter {
        self.iter()
    }
}

enum Search {
    Addable(SearchEngine<AddableSearch>),
    Removable(SearchEngine<RemovableSearch>),
}

/// Iterator for [`StandardResidueTableaux`].
pub struct StandardResidueIter {
    search: Search,
}

impl StandardResidueIter {
    /// Counters for the search so far.
    pub fn stats(&self) -> Statistics {
        match &self.search {
            Search::Addable(engine) => engine.stats().clone(),
            Search::Removable(engine) => engine.stats().clone(),
        }
    }
}

impl Iterator for StandardResidueIter {
    type Item = StandardTableauTuple;

    fn next(&mut self) -> Option<StandardTableauTuple> {
        let found = match &mut self.search {
            Search::Addable(engine) => engine.next_solution(),
            Search::Removable(engine) => engine.next_solution().map(|grid| {
                TableauTuple::from_components_unchecked(
                    grid.into_iter().map(Tableau::from_rows_unchecked).collect(),
                )
            }),
        };
        if found.is_none() {
            crate::trace!("[ResidueSearch] exhausted: {}", self.stats());
        }
        found.map(StandardTableauTuple::new_unchecked)
    }
}

/// The row standard tableau tuples with a given residue sequence, and of a
/// given shape if there is one.
///
/// ```
/// use tableau_tuples::residue::ResidueSequence;
///
/// let res = ResidueSequence::new(3, vec![0, 1], vec![2, 0, 1, 1]).unwrap();
/// let family = res.row_standard_tableaux(None).unwrap();
/// let first = family.iter().next().unwrap();
/// assert_eq!(first.to_string(), "([[2, 4], [1], [3]], [])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStandardResidueTableaux {
    residue: ResidueSequence,
    shape: Option<PartitionTuple>,
}

impl RowStandardResidueTableaux {
    /// Fails when the shape does not fit the residue sequence.
    pub fn new(residue: ResidueSequence, shape: Option<PartitionTuple>) -> Result<Self> {
        check_shape(&residue, shape.as_ref())?;
        crate::trace!("[ResidueSearch] row standard tableaux with {}", residue);
        Ok(Self { residue, shape })
    }

    pub fn residue(&self) -> &ResidueSequence {
        &self.residue
    }

    pub fn shape(&self) -> Option<&PartitionTuple> {
        self.shape.as_ref()
    }

    pub fn iter(&self) -> RowStandardResidueIter {
        let mut iter = RowStandardResidueIter {
            residue: self.residue.clone(),
            block: self.residue.block(),
            shapes: None,
            current: None,
            row_counts: Vec::new(),
            stats: Statistics::new(),
        };
        match &self.shape {
            Some(shape) => iter.start(shape),
            None => {
                iter.shapes = Some(partition_tuples(self.residue.level(), self.residue.size()))
            }
        }
        iter
    }
}

impl TableauFamily for RowStandardResidueTableaux {
    type Item = RowStandardTableauTuple;

    fn iter(&self) -> Box<dyn Iterator<Item = RowStandardTableauTuple> + '_> {
        Box::new(RowStandardResidueTableaux::iter(self))
    }

    fn contains(&self, t: &TableauTuple) -> bool {
        matches_target(t, &self.residue, self.shape.as_ref())
            && RowStandardTableauTuple::new(t.clone())
                .is_ok_and(|s| has_residues(&s, &self.residue))
    }

    /// The first member; the search is not run any further.
    fn an_element(&self) -> Option<RowStandardTableauTuple> {
        self.first()
    }
}

impl<'a> IntoIterator for &'a RowStandardResidueTableaux {
    type Item = RowStandardTableauTuple;
    type IntoIter = RowStandardResidueIter;

    fn into_iter(self) -> RowStandardResidueIter {
        self.iter()
    }
}

/// Iterator for [`RowStandardResidueTableaux`].
pub struct RowStandardResidueIter {
    residue: ResidueSequence,
    block: BTreeMap<i64, usize>,
    shapes: Option<PartitionTuples>,
    current: Option<SearchEngine<RemovableSearch>>,
    /// Number of rows in each component of the current shape.
    row_counts: Vec<usize>,
    /// Counters of the searches already finished.
    stats: Statistics,
}

impl RowStandardResidueIter {
    /// Search the shape with every row as its own component.
    fn start(&mut self, shape: &PartitionTuple) {
        let mut charges = Vec::new();
        let mut rows = Vec::new();
        for (p, &charge) in shape.components().iter().zip(self.residue.multicharge()) {
            for (r, &len) in p.parts().iter().enumerate() {
                charges.push(charge - r as i64);
                rows.push(vec![len]);
            }
        }
        self.row_counts = shape.components().iter().map(|p| p.len()).collect();
        self.current = Some(SearchEngine::new(RemovableSearch::new(
            self.residue.e(),
            charges,
            self.residue.residues().to_vec(),
            rows,
        )));
    }

    /// Counters for the search so far, over every shape tried.
    pub fn stats(&self) -> Statistics {
        let mut stats = self.stats.clone();
        if let Some(engine) = &self.current {
            stats += engine.stats();
        }
        stats
    }
}

/// Put the single rows of a stretched grid back into their components.
fn regroup(grid: Vec<Vec<Vec<usize>>>, row_counts: &[usize]) -> TableauTuple {
    let mut rows = grid.into_iter().flatten();
    let components = row_counts
        .iter()
        .map(|&count| Tableau::from_rows_unchecked(rows.by_ref().take(count).collect()))
        .collect();
    TableauTuple::from_components_unchecked(components)
}

impl Iterator for RowStandardResidueIter {
    type Item = RowStandardTableauTuple;

    fn next(&mut self) -> Option<RowStandardTableauTuple> {
        loop {
            if let Some(engine) = &mut self.current {
                if let Some(grid) = engine.next_solution() {
                    return Some(RowStandardTableauTuple::new_unchecked(regroup(
                        grid,
                        &self.row_counts,
                    )));
                }
                self.stats += engine.stats();
                self.current = None;
            }
            let Some(shape) = self.shapes.as_mut().and_then(Iterator::next) else {
                crate::trace!("[ResidueSearch] exhausted: {}", self.stats);
                return None;
            };
            self.stats.increment_counter(Counters::ShapesTried);
            let block = shape.block(self.residue.e(), self.residue.multicharge());
            if block.ok().as_ref() != Some(&self.block) {
                self.stats.increment_counter(Counters::ShapesSkipped);
                continue;
            }
            self.start(&shape);
        }
    }
}
