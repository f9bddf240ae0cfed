// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Standard tableau tuples of a fixed shape.
//!
//! A tableau of the shape is held as a flat list `tab`: `tab[p]` is the
//! entry at position `p`, positions running along the rows, first component
//! first. The first tableau is the initial one, `tab = [1, 2, ..., n]`.
//!
//! Columns are numbered right to left from the last component to the first,
//! so that every column of an earlier component has a larger number than
//! every column of a later one; `cols[v]` is the column number of entry
//! `v`. A tableau is the last one exactly when `cols` is weakly increasing.
//! Otherwise the next tableau is found from the first descent `r` of
//! `cols`: `r` replaces the largest `s < r` lying further right in the same
//! or an earlier component, and `1, ..., r - 1` are refilled into the
//! leftmost free positions whose lower bound `mins` allows them.

use super::TableauFamily;
use crate::shape::{Cell, PartitionTuple};
use crate::tableau::Tableau;
use crate::tuple::{StandardTableauTuple, TableauTuple};
use rand::Rng;

/// All standard tableau tuples of one shape.
///
/// ```
/// use tableau_tuples::enumerate::{StandardShapeTableaux, TableauFamily};
/// use tableau_tuples::shape::PartitionTuple;
///
/// let shape = PartitionTuple::from_rows(vec![vec![2], vec![2, 1]]).unwrap();
/// let family = StandardShapeTableaux::new(shape);
/// assert_eq!(family.cardinality(), Some(20));
/// assert_eq!(family.iter().count(), 20);
/// assert_eq!(family.an_element().unwrap().to_string(), "([[2, 4]], [[1, 3], [5]])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardShapeTableaux {
    shape: PartitionTuple,
}

impl StandardShapeTableaux {
    pub fn new(shape: PartitionTuple) -> Self {
        crate::trace!("[ShapeEnumerator] standard tableaux of shape {}", shape);
        Self { shape }
    }

    pub fn shape(&self) -> &PartitionTuple {
        &self.shape
    }

    pub fn iter(&self) -> StandardShapeIter {
        StandardShapeIter::new(self.shape.clone())
    }

    /// Build a tableau by repeatedly putting the next entry into a randomly
    /// chosen addable cell inside the shape.
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> StandardTableauTuple {
        let components = self.shape.components();
        let mut rows: Vec<Vec<Vec<usize>>> = vec![Vec::new(); components.len()];
        let mut addable: Vec<Cell> = components
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_empty())
            .map(|(k, _)| Cell::new(k, 0, 0))
            .collect();
        for m in 1..=self.shape.size() {
            if addable.is_empty() {
                break;
            }
            let cell = addable.swap_remove(rng.gen_range(0..addable.len()));
            let Cell {
                component: k,
                row: r,
                column: c,
            } = cell;
            let tab = &mut rows[k];
            if r == tab.len() {
                tab.push(vec![m]);
            } else {
                tab[r].push(m);
            }
            let shape = &components[k];
            if shape.contains_cell(r, c + 1) && (r == 0 || tab[r - 1].len() > c + 1) {
                addable.push(Cell::new(k, r, c + 1));
            }
            if shape.contains_cell(r + 1, c)
                && (c == 0 || (tab.len() > r + 1 && tab[r + 1].len() == c))
            {
                addable.push(Cell::new(k, r + 1, c));
            }
        }
        let components = rows.into_iter().map(Tableau::from_rows_unchecked).collect();
        StandardTableauTuple::new_unchecked(TableauTuple::from_components_unchecked(components))
    }
}

impl TableauFamily for StandardShapeTableaux {
    type Item = StandardTableauTuple;

    fn iter(&self) -> Box<dyn Iterator<Item = StandardTableauTuple> + '_> {
        Box::new(StandardShapeTableaux::iter(self))
    }

    fn cardinality(&self) -> Option<u128> {
        Some(self.shape.standard_count())
    }

    fn contains(&self, t: &TableauTuple) -> bool {
        t.shape() == self.shape && t.is_standard()
    }

    /// The conjugate of the first tableau of the conjugate shape.
    fn last(&self) -> Option<StandardTableauTuple> {
        Some(StandardTableauTuple::new_unchecked(
            self.shape.initial_column_tableau(),
        ))
    }
}

impl<'a> IntoIterator for &'a StandardShapeTableaux {
    type Item = StandardTableauTuple;
    type IntoIter = StandardShapeIter;

    fn into_iter(self) -> StandardShapeIter {
        self.iter()
    }
}

/// Iterator for [`StandardShapeTableaux`].
#[derive(Debug, Clone)]
pub struct StandardShapeIter {
    shape: PartitionTuple,
    tab: Vec<usize>,
    cols: Vec<usize>,
    mins: Vec<usize>,
    /// 1-based component of each position.
    component: Vec<usize>,
    /// Cumulative component sizes, starting at 0.
    boundaries: Vec<usize>,
    started: bool,
    done: bool,
}

impl StandardShapeIter {
    fn new(shape: PartitionTuple) -> Self {
        let n = shape.size();
        let mut cols = vec![0; n + 1];
        let mut mins = vec![0; n];
        let initial = shape.initial_tableau();
        let mut offset = 0;
        for t in initial.components().iter().rev() {
            for (r, row) in t.rows().iter().enumerate() {
                for (c, &v) in row.iter().enumerate() {
                    cols[v] = c + offset;
                    mins[v - 1] = r + c;
                }
            }
            offset += t.rows().first().map_or(0, Vec::len);
        }
        let mut component = Vec::with_capacity(n);
        let mut boundaries = vec![0];
        for (k, p) in shape.components().iter().enumerate() {
            component.extend(std::iter::repeat(k + 1).take(p.size()));
            boundaries.push(boundaries[k] + p.size());
        }
        Self {
            shape,
            tab: (1..=n).collect(),
            cols,
            mins,
            component,
            boundaries,
            started: false,
            done: false,
        }
    }

    fn position_of(&self, v: usize) -> Option<usize> {
        self.tab.iter().position(|&x| x == v)
    }

    /// The largest entry less than `r` lying right of `r`, searching the
    /// component of `r` first and then earlier components.
    fn max_row(&self, r: usize) -> Option<usize> {
        let mut c = self.component[self.position_of(r)?];
        while c > 0 {
            let block = &self.tab[self.boundaries[c - 1]..self.boundaries[c]];
            let found = block
                .iter()
                .copied()
                .filter(|&m| m < r && self.cols[m] > self.cols[r])
                .last();
            if found.is_some() {
                return found;
            }
            c -= 1;
        }
        None
    }

    fn advance(&mut self) -> Option<()> {
        let n = self.tab.len();
        let r = (1..=n).find(|&r| self.cols[r - 1] > self.cols[r])?;
        let s = self.max_row(r)?;
        let mut tab = self.tab.clone();
        let mut cols = self.cols.clone();
        let at = self.position_of(s)?;
        tab[at] = r;
        cols[r] = self.cols[s];
        let mut changed = vec![usize::MAX; r];
        changed[r - 1] = at;
        for t in 1..r {
            let i = (0..n).find(|&i| {
                t > self.mins[i] && self.tab[i] <= r && !changed.contains(&i)
            })?;
            tab[i] = t;
            cols[t] = self.cols[self.tab[i]];
            changed[t - 1] = i;
        }
        self.tab = tab;
        self.cols = cols;
        Some(())
    }

    fn current(&self) -> StandardTableauTuple {
        StandardTableauTuple::new_unchecked(inflate(&self.shape, &self.tab))
    }
}

impl Iterator for StandardShapeIter {
    type Item = StandardTableauTuple;

    fn next(&mut self) -> Option<StandardTableauTuple> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        if self.advance().is_none() {
            crate::trace!("[ShapeEnumerator] exhausted shape {}", self.shape);
            self.done = true;
            return None;
        }
        Some(self.current())
    }
}

/// Cut a flat list of entries into rows of `shape`.
pub(crate) fn inflate(shape: &PartitionTuple, flat: &[usize]) -> TableauTuple {
    let mut rest = flat;
    let components = shape
        .components()
        .iter()
        .map(|p| {
            let rows = p
                .parts()
                .iter()
                .map(|&len| {
                    let (row, tail) = rest.split_at(len);
                    rest = tail;
                    row.to_vec()
                })
                .collect();
            Tableau::from_rows_unchecked(rows)
        })
        .collect();
    TableauTuple::from_components_unchecked(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn shape(rows: Vec<Vec<usize>>) -> PartitionTuple {
        PartitionTuple::from_rows(rows).unwrap()
    }

    fn strings(family: &StandardShapeTableaux) -> Vec<String> {
        family.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_level_one() {
        let family = StandardShapeTableaux::new(shape(vec![vec![2, 1]]));
        assert_eq!(strings(&family), vec!["[[1, 2], [3]]", "[[1, 3], [2]]"]);
    }

    #[test]
    fn test_singletons() {
        let family = StandardShapeTableaux::new(shape(vec![vec![1], vec![1]]));
        assert_eq!(strings(&family), vec!["([[1]], [[2]])", "([[2]], [[1]])"]);
    }

    #[test]
    fn test_counts_and_uniqueness() {
        for (rows, count) in [
            (vec![vec![2, 1], vec![2, 1, 1]], 210),
            (vec![vec![3, 2, 1], vec![]], 16),
            (vec![vec![2, 1], vec![1], vec![1]], 40),
            (vec![vec![], vec![2, 1]], 2),
            (vec![vec![1, 1], vec![], vec![2]], 6),
        ] {
            let mu = shape(rows);
            let family = StandardShapeTableaux::new(mu.clone());
            let all: Vec<StandardTableauTuple> = family.iter().collect();
            assert_eq!(all.len(), count);
            assert_eq!(family.cardinality(), Some(count as u128));
            let distinct: BTreeSet<&StandardTableauTuple> = all.iter().collect();
            assert_eq!(distinct.len(), count);
            assert!(all.iter().all(|t| t.shape() == mu && t.is_standard()));
        }
    }

    #[test]
    fn test_empty_shape() {
        let family = StandardShapeTableaux::new(PartitionTuple::empty(3));
        assert_eq!(strings(&family), vec!["([], [], [])"]);
        assert_eq!(family.cardinality(), Some(1));
    }

    #[test]
    fn test_first_last_and_an_element() {
        let family = StandardShapeTableaux::new(shape(vec![vec![2], vec![2, 2]]));
        assert_eq!(family.first().unwrap().to_string(), "([[1, 2]], [[3, 4], [5, 6]])");
        assert_eq!(family.last().unwrap().to_string(), "([[5, 6]], [[1, 3], [2, 4]])");
        assert_eq!(family.last(), family.iter().last());
        let family = StandardShapeTableaux::new(shape(vec![vec![2], vec![2, 1]]));
        assert_eq!(family.an_element(), family.unrank(4).ok());
    }

    #[test]
    fn test_random_element() {
        let mu = shape(vec![vec![3, 1], vec![2, 2], vec![1]]);
        let family = StandardShapeTableaux::new(mu.clone());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let t = family.random_element(&mut rng);
            assert_eq!(t.shape(), mu);
            assert!(family.contains(&t));
        }
    }

    #[test]
    fn test_inflate() {
        let mu = shape(vec![vec![2, 1], vec![], vec![1]]);
        assert_eq!(
            inflate(&mu, &[4, 1, 2, 3]).to_string(),
            "([[4, 1], [2]], [], [[3]])"
        );
    }
}
