// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of partitions, compositions and partition tuples.
//!
//! # Order
//!
//! Partitions of `n` come in reverse lexicographic order: `[n]`,
//! `[n-1, 1]`, `[n-2, 2]`, `[n-2, 1, 1]`, ... Partition tuples of a given
//! level and size run over the compositions of the size into `level` parts
//! in reverse lexicographic order and, for each composition, over the
//! product of the component partitions with the last component varying
//! fastest.
//!
//! The level-only, size-only and unrestricted families are infinite and
//! their iterators never finish.

use super::{Partition, PartitionTuple};

/// Partitions of `n` in reverse lexicographic order.
#[derive(Debug, Clone)]
pub struct Partitions {
    next: Option<Vec<usize>>,
}

/// All partitions of `n`.
pub fn partitions(n: usize) -> Partitions {
    let first = if n == 0 { Vec::new() } else { vec![n] };
    Partitions { next: Some(first) }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let current = self.next.take()?;
        self.next = successor(&current);
        Some(Partition::from_parts_unchecked(current))
    }
}

/// Decrement the last part bigger than one and refill greedily.
fn successor(parts: &[usize]) -> Option<Vec<usize>> {
    let pivot = parts.iter().rposition(|&p| p > 1)?;
    let mut next = parts[..pivot].to_vec();
    let cap = parts[pivot] - 1;
    let mut remaining = parts[pivot..].iter().sum::<usize>();
    while remaining > 0 {
        let part = cap.min(remaining);
        next.push(part);
        remaining -= part;
    }
    Some(next)
}

/// Weak compositions of `n` into `k` parts, reverse lexicographic order.
#[derive(Debug, Clone)]
pub struct Compositions {
    next: Option<Vec<usize>>,
}

pub fn compositions(n: usize, k: usize) -> Compositions {
    let next = (k > 0).then(|| {
        let mut first = vec![0; k];
        first[0] = n;
        first
    });
    Compositions { next }
}

impl Iterator for Compositions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let k = current.len();
        let mut following = current.clone();
        let tail = following[k - 1];
        following[k - 1] = 0;
        if let Some(i) = following[..k - 1].iter().rposition(|&c| c > 0) {
            following[i] -= 1;
            following[i + 1] = tail + 1;
            self.next = Some(following);
        }
        Some(current)
    }
}

/// Partition tuples of a fixed level and size.
#[derive(Debug, Clone)]
pub struct PartitionTuples {
    compositions: Compositions,
    /// Partitions available to each component for the current composition.
    choices: Vec<Vec<Partition>>,
    /// Odometer over `choices`; `None` once the composition is exhausted.
    odometer: Option<Vec<usize>>,
}

/// All partition tuples of the given level and size.
pub fn partition_tuples(level: usize, size: usize) -> PartitionTuples {
    PartitionTuples {
        compositions: compositions(size, level),
        choices: Vec::new(),
        odometer: None,
    }
}

impl Iterator for PartitionTuples {
    type Item = PartitionTuple;

    fn next(&mut self) -> Option<PartitionTuple> {
        loop {
            if let Some(odometer) = self.odometer.as_mut() {
                let tuple = PartitionTuple::from_components_unchecked(
                    odometer
                        .iter()
                        .zip(self.choices.iter())
                        .map(|(&i, options)| options[i].clone())
                        .collect(),
                );
                // advance, last component fastest
                let mut position = odometer.len();
                let mut carried = true;
                while carried && position > 0 {
                    position -= 1;
                    odometer[position] += 1;
                    if odometer[position] < self.choices[position].len() {
                        carried = false;
                    } else {
                        odometer[position] = 0;
                    }
                }
                if carried {
                    self.odometer = None;
                }
                return Some(tuple);
            }
            let composition = self.compositions.next()?;
            self.choices = composition
                .iter()
                .map(|&part| partitions(part).collect())
                .collect();
            self.odometer = Some(vec![0; composition.len()]);
        }
    }
}

/// Partition tuples of a fixed level, by increasing size; infinite.
pub fn partition_tuples_of_level(level: usize) -> impl Iterator<Item = PartitionTuple> {
    (0..).flat_map(move |size| partition_tuples(level, size))
}

/// Partition tuples of a fixed size, by increasing level; infinite.
pub fn partition_tuples_of_size(size: usize) -> impl Iterator<Item = PartitionTuple> {
    (1..).flat_map(move |level| partition_tuples(level, size))
}

/// Every partition tuple, grouped by `size + level - 1`; infinite.
pub fn all_partition_tuples() -> impl Iterator<Item = PartitionTuple> {
    (0usize..).flat_map(|total| {
        (1..=total + 1).flat_map(move |level| partition_tuples(level, total + 1 - level))
    })
}
