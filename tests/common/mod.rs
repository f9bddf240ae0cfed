// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use tableau_tuples::residue::reduce;
use tableau_tuples::shape::{partition_tuples, Cell, PartitionTuple};
use tableau_tuples::tuple::{StandardTableauTuple, TableauTuple};

pub fn shape(rows: Vec<Vec<usize>>) -> PartitionTuple {
    PartitionTuple::from_rows(rows).unwrap()
}

pub fn tuple(text: &str) -> TableauTuple {
    text.parse().unwrap()
}

pub fn strings<T: ToString>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    items.into_iter().map(|t| t.to_string()).collect()
}

/// Every partition tuple of level at most `max_level` and size at most
/// `max_size`.
pub fn small_shapes(max_level: usize, max_size: usize) -> Vec<PartitionTuple> {
    (1..=max_level)
        .flat_map(|level| (0..=max_size).flat_map(move |size| partition_tuples(level, size)))
        .collect()
}

/// Every filling of `shape` with `1..=n`, each used once.
pub fn all_fillings(shape: &PartitionTuple) -> Vec<TableauTuple> {
    let n = shape.size();
    let mut out = Vec::new();
    let mut used = vec![false; n + 1];
    let mut flat = Vec::with_capacity(n);
    fill(shape, n, &mut used, &mut flat, &mut out);
    out
}

fn fill(
    shape: &PartitionTuple,
    n: usize,
    used: &mut [bool],
    flat: &mut Vec<usize>,
    out: &mut Vec<TableauTuple>,
) {
    if flat.len() == n {
        out.push(inflate(shape, flat));
        return;
    }
    for v in 1..=n {
        if !used[v] {
            used[v] = true;
            flat.push(v);
            fill(shape, n, used, flat, out);
            flat.pop();
            used[v] = false;
        }
    }
}

fn inflate(shape: &PartitionTuple, flat: &[usize]) -> TableauTuple {
    let mut rest = flat;
    let components = shape
        .components()
        .iter()
        .map(|p| {
            p.parts()
                .iter()
                .map(|&len| {
                    let (row, tail) = rest.split_at(len);
                    rest = tail;
                    row.to_vec()
                })
                .collect()
        })
        .collect();
    TableauTuple::from_rows(components).unwrap()
}

fn cell_residue(cell: Cell, e: usize, multicharge: &[i64]) -> i64 {
    reduce(e, cell.content(multicharge[cell.component]))
}

/// `cell` is below `other`: in a later component, or lower in the same one.
fn is_below(cell: Cell, other: Cell) -> bool {
    cell.component > other.component
        || (cell.component == other.component && cell.row > other.row)
}

/// The degree or codegree straight from the definition: for each `m`, the
/// addable cells minus the removable cells (other than the cell of `m`) of
/// the shape of `t` restricted to `m` that have the residue of `m` and lie
/// below it, or above it for the codegree.
fn graded_count(t: &StandardTableauTuple, e: usize, multicharge: &[i64], below: bool) -> i64 {
    let mut total = 0;
    for m in 1..=t.size() {
        let node = t.inverse(m).unwrap();
        let residue = cell_residue(node, e, multicharge);
        let mu = t.restrict(m).shape();
        let counts = |cell: Cell| {
            cell != node
                && cell_residue(cell, e, multicharge) == residue
                && if below {
                    is_below(cell, node)
                } else {
                    is_below(node, cell)
                }
        };
        let addable = mu.addable_cells().into_iter().filter(|&c| counts(c)).count() as i64;
        let removable = mu.removable_cells().into_iter().filter(|&c| counts(c)).count() as i64;
        total += addable - removable;
    }
    total
}

pub fn defined_degree(t: &StandardTableauTuple, e: usize, multicharge: &[i64]) -> i64 {
    graded_count(t, e, multicharge, true)
}

pub fn defined_codegree(t: &StandardTableauTuple, e: usize, multicharge: &[i64]) -> i64 {
    graded_count(t, e, multicharge, false)
}
