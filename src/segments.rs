// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `seg` statistic of tableaux in the crystal `B(∞)`.
//!
//! Entries are signed: `1..=n`, `0` and the barred letters `-n..=-1`. Row
//! `r` (counting from 0) always starts with its run of `r + 1`s, which is
//! not counted. A *segment* is any other maximal run of equal entries in
//! one row, and `seg'` is the number of segments. Then:
//!
//! - types A and C: `seg = seg'`;
//! - types B and G2: subtract the rows holding both `0` and `-(r + 1)`;
//! - type D: add the rows holding `-(r + 1)` but neither `n` nor `-n`.
//!
//! ```
//! use tableau_tuples::segments::{seg, CartanType};
//!
//! let rows = vec![
//!     vec![1, 1, 1, 1, 1, 1, 3, -2, -1],
//!     vec![2, 2, 2, 4, -2],
//!     vec![3, 3],
//!     vec![4],
//! ];
//! let d4: CartanType = "D4".parse().unwrap();
//! assert_eq!(seg(&rows, d4), 6);
//! ```

use crate::error::{Result, TableauError};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CartanFamily {
    A,
    B,
    C,
    D,
    G,
}

/// A finite Cartan type such as `A3` or `G2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartanType {
    pub family: CartanFamily,
    pub rank: usize,
}

impl CartanType {
    pub fn new(family: CartanFamily, rank: usize) -> Result<Self> {
        let valid = match family {
            CartanFamily::G => rank == 2,
            CartanFamily::D => rank >= 2,
            _ => rank >= 1,
        };
        if !valid {
            return Err(TableauError::OutOfDomain(format!(
                "there is no Cartan type {}{}",
                family, rank
            )));
        }
        Ok(Self { family, rank })
    }
}

impl FromStr for CartanType {
    type Err = TableauError;

    fn from_str(text: &str) -> Result<Self> {
        let bad = || TableauError::OutOfDomain(format!("not a Cartan type: {:?}", text));
        let text = text.trim();
        let split = text.find(|ch: char| ch.is_ascii_digit()).ok_or_else(bad)?;
        let (letter, rank) = text.split_at(split);
        let family = letter.trim().parse::<CartanFamily>().map_err(|_| bad())?;
        let rank = rank.parse::<usize>().map_err(|_| bad())?;
        CartanType::new(family, rank)
    }
}

impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.rank)
    }
}

/// Number of maximal runs of equal entries, other than `r + 1`, in each
/// row `r`.
pub fn seg_prime(rows: &[Vec<i64>]) -> usize {
    rows.iter()
        .enumerate()
        .map(|(r, row)| {
            let own = r as i64 + 1;
            row.iter()
                .enumerate()
                .filter(|&(c, &v)| v != own && (c == 0 || row[c - 1] != v))
                .count()
        })
        .sum()
}

pub fn seg(rows: &[Vec<i64>], cartan: CartanType) -> usize {
    let segments = seg_prime(rows);
    let bar = |r: usize| -(r as i64 + 1);
    match cartan.family {
        CartanFamily::A | CartanFamily::C => segments,
        CartanFamily::B | CartanFamily::G => {
            let merged = rows
                .iter()
                .enumerate()
                .filter(|(r, row)| row.contains(&0) && row.contains(&bar(*r)))
                .count();
            segments - merged
        }
        CartanFamily::D => {
            let n = cartan.rank as i64;
            let extra = rows
                .iter()
                .enumerate()
                .filter(|(r, row)| {
                    row.contains(&bar(*r)) && !row.contains(&n) && !row.contains(&-n)
                })
                .count();
            segments + extra
        }
    }
}
