// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations of `{1, ..., n}`, the groups generated by transpositions,
//! and the charge statistic on words.
//!
//! Permutations are given in one line notation: `[3, 1, 2]` sends `1` to
//! `3`, `2` to `1` and `3` to `2`. Both the map and its inverse are kept so
//! that either can be read in constant time.
//!
//! # Examples
//!
//! ```
//! use tableau_tuples::perm::Permutation;
//!
//! let p = Permutation::from_word(vec![3, 1, 2]).unwrap();
//! assert_eq!(p.apply(1), 3);
//! assert_eq!(p.inverse().one_line(), &[2, 3, 1]);
//! assert_eq!(p.length(), 2);
//! assert_eq!(p.reduced_word_lexmin(), vec![2, 1]);
//! ```

mod group;
pub mod word;

pub use group::PermutationGroup;

use crate::error::{Result, TableauError};
use std::fmt;

/// A permutation in one line notation, with its inverse cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    map: Vec<usize>,
    inv: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self {
            map: (1..=n).collect(),
            inv: (1..=n).collect(),
        }
    }

    /// Validate a one line word: it must hold each of `1..=n` exactly once.
    pub fn from_word(word: Vec<usize>) -> Result<Self> {
        let n = word.len();
        let mut inv = vec![0; n];
        for (i, &v) in word.iter().enumerate() {
            if v == 0 || v > n || inv[v - 1] != 0 {
                return Err(TableauError::NotAPermutation(word));
            }
            inv[v - 1] = i + 1;
        }
        Ok(Self { map: word, inv })
    }

    /// The product of disjoint cycles, as a permutation of `1..=degree`.
    pub fn from_cycles(degree: usize, cycles: &[Vec<usize>]) -> Result<Self> {
        let mut map: Vec<usize> = (1..=degree).collect();
        let mut seen = vec![false; degree];
        for cycle in cycles {
            for (i, &a) in cycle.iter().enumerate() {
                let b = cycle[(i + 1) % cycle.len()];
                if a == 0 || a > degree || b == 0 || b > degree || seen[a - 1] {
                    return Err(TableauError::NotAPermutation(cycle.clone()));
                }
                seen[a - 1] = true;
                map[a - 1] = b;
            }
        }
        Self::from_word(map)
    }

    pub fn one_line(&self) -> &[usize] {
        &self.map
    }

    /// Number of points moved or fixed.
    pub fn degree(&self) -> usize {
        self.map.len()
    }

    /// Image of `i`; points beyond the degree are fixed.
    pub fn apply(&self, i: usize) -> usize {
        match i.checked_sub(1).and_then(|k| self.map.get(k)) {
            Some(&image) => image,
            None => i,
        }
    }

    pub fn inverse(&self) -> Self {
        Self {
            map: self.inv.clone(),
            inv: self.map.clone(),
        }
    }

    /// `self ∘ other`: apply `other` first.
    pub fn compose(&self, other: &Self) -> Self {
        let n = self.degree().max(other.degree());
        let map: Vec<usize> = (1..=n).map(|i| self.apply(other.apply(i))).collect();
        let mut inv = vec![0; n];
        for (i, &v) in map.iter().enumerate() {
            inv[v - 1] = i + 1;
        }
        Self { map, inv }
    }

    /// The same permutation on `1..=n`, fixing the extra points.
    pub fn padded(&self, n: usize) -> Self {
        if n <= self.degree() {
            return self.clone();
        }
        let mut map = self.map.clone();
        let mut inv = self.inv.clone();
        map.extend(self.degree() + 1..=n);
        inv.extend(self.degree() + 1..=n);
        Self { map, inv }
    }

    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &v)| v == i + 1)
    }

    /// Number of inversions.
    pub fn length(&self) -> usize {
        let n = self.degree();
        (0..n)
            .map(|i| (i + 1..n).filter(|&j| self.map[i] > self.map[j]).count())
            .sum()
    }

    /// The lexicographically least reduced word, as indices of adjacent
    /// transpositions `s_i = (i, i+1)`.
    ///
    /// The word is read off the inverse: sort its one line notation by
    /// always swapping the leftmost adjacent descent.
    pub fn reduced_word_lexmin(&self) -> Vec<usize> {
        leftmost_descent_word(&self.inv)
    }
}

/// Bubble `one_line` into order by always swapping the leftmost descent,
/// recording the 1-based position of each swap.
pub(crate) fn leftmost_descent_word(one_line: &[usize]) -> Vec<usize> {
    let mut p = one_line.to_vec();
    let mut word = Vec::new();
    let mut i = 0;
    while i + 1 < p.len() {
        if p[i] > p[i + 1] {
            p.swap(i, i + 1);
            word.push(i + 1);
            // only the pair ending at the swap can have become a descent
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
    word
}

impl fmt::Display for Permutation {
    /// One line notation, `[3, 1, 2]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = TableauError;

    fn try_from(word: Vec<usize>) -> Result<Self> {
        Self::from_word(word)
    }
}
