// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subgroups of the symmetric group generated by transpositions.
//!
//! Such a group is the direct product of the symmetric groups on its orbits,
//! so the orbits determine everything: the order is the product of the
//! orbit factorials and a permutation belongs to the group exactly when it
//! maps every orbit to itself. Row and column stabilizers of tableaux are
//! groups of this kind.

use super::Permutation;
use crate::shape::factorial;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationGroup {
    degree: usize,
    generators: Vec<(usize, usize)>,
    /// Orbit representative of each point, 0-based.
    orbit_of: Vec<usize>,
}

impl PermutationGroup {
    /// The group on `1..=degree` generated by `generators`.
    ///
    /// Transpositions naming points outside `1..=degree` are ignored.
    pub fn from_transpositions(
        degree: usize,
        generators: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let generators: Vec<(usize, usize)> = generators
            .into_iter()
            .filter(|&(a, b)| a >= 1 && b >= 1 && a <= degree && b <= degree && a != b)
            .collect();
        let mut parent: Vec<usize> = (0..degree).collect();
        for &(a, b) in &generators {
            let ra = find(&mut parent, a - 1);
            let rb = find(&mut parent, b - 1);
            if ra != rb {
                parent[ra.max(rb)] = ra.min(rb);
            }
        }
        let orbit_of = (0..degree).map(|i| find(&mut parent, i)).collect();
        Self {
            degree,
            generators,
            orbit_of,
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn generators(&self) -> &[(usize, usize)] {
        &self.generators
    }

    /// Orbits of size at least one, each sorted, ordered by least element.
    pub fn orbits(&self) -> Vec<Vec<usize>> {
        let mut orbits: Vec<Vec<usize>> = Vec::new();
        let mut index_of_root = vec![usize::MAX; self.degree];
        for (i, &root) in self.orbit_of.iter().enumerate() {
            if index_of_root[root] == usize::MAX {
                index_of_root[root] = orbits.len();
                orbits.push(Vec::new());
            }
            orbits[index_of_root[root]].push(i + 1);
        }
        orbits
    }

    pub fn order(&self) -> u128 {
        self.orbits().iter().map(|orbit| factorial(orbit.len())).product()
    }

    /// Whether `p` maps every orbit into itself.
    pub fn contains(&self, p: &Permutation) -> bool {
        (1..=p.degree().max(self.degree)).all(|i| {
            let image = p.apply(i);
            if i > self.degree || image > self.degree {
                image == i
            } else {
                self.orbit_of[i - 1] == self.orbit_of[image - 1]
            }
        })
    }

    pub fn one(&self) -> Permutation {
        Permutation::identity(self.degree)
    }
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}
