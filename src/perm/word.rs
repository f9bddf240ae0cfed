// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Charge and cocharge of words in positive integers.
//!
//! Charge is computed by the cyclic reading of Lascoux and Schützenberger:
//! starting from the right, find the smallest letter, then read leftwards,
//! wrapping round as often as needed, for the next letter up. Each wrap adds
//! one to the index of the letters found afterwards and the charge of that
//! standard subword is the sum of the indices. The subword is removed and
//! the process repeats until the word is empty.
//!
//! ```
//! use tableau_tuples::perm::word::{charge, cocharge};
//!
//! assert_eq!(charge(&[1, 1, 2, 2, 3]), Ok(4));
//! assert_eq!(cocharge(&[1, 1, 2, 2, 3]), Ok(0));
//! assert!(charge(&[1, 2, 2]).is_err());
//! ```

use crate::error::{Result, TableauError};
use crate::shape::Partition;
use std::collections::BTreeMap;

/// Letter → number of occurrences.
pub fn evaluation(word: &[usize]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for &letter in word {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

/// The content of `word` as a partition.
///
/// The letters must form an interval and occur weakly less often as they
/// increase.
fn content(word: &[usize]) -> Result<Partition> {
    let counts = evaluation(word);
    let gapless = counts
        .keys()
        .zip(counts.keys().skip(1))
        .all(|(a, b)| b - a == 1);
    if !gapless {
        return Err(TableauError::ContentNotPartition);
    }
    Partition::new(counts.into_values().collect()).map_err(|_| TableauError::ContentNotPartition)
}

pub fn charge(word: &[usize]) -> Result<usize> {
    content(word)?;
    let mut w = word.to_vec();
    let mut charge = 0;
    while let Some(&smallest) = w.iter().min() {
        let mut i = w.len() - 1;
        let mut letter = smallest;
        let mut index = 0;
        while let Some(&largest) = w.iter().max() {
            if letter > largest {
                break;
            }
            while w[i] != letter {
                if i == 0 {
                    i = w.len() - 1;
                    index += 1;
                } else {
                    i -= 1;
                }
            }
            charge += index;
            letter += 1;
            w.remove(i);
            if i == 0 {
                if w.is_empty() {
                    break;
                }
                i = w.len() - 1;
                index += 1;
            } else {
                i -= 1;
            }
        }
    }
    Ok(charge)
}

/// `n(μ) - charge`, where `μ` is the content and `n(μ) = Σ i·μ_i`.
pub fn cocharge(word: &[usize]) -> Result<usize> {
    let mu = content(word)?;
    Ok(mu.weighted_size() - charge(word)?)
}
