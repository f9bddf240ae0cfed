// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

/* The shape enumerators are checked against brute force: every filling of
  a small shape by 1..n is generated and the (row) standard ones kept.
*/

mod common;

use common::{all_fillings, shape, small_shapes, strings, tuple};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use tableau_tuples::enumerate::{RowStandardShapeTableaux, StandardShapeTableaux, TableauFamily};
use tableau_tuples::family::{FamilyOptions, RowStandardTableauTuples, StandardTableauTuples};
use tableau_tuples::tableau::Tableau;
use tableau_tuples::tuple::TableauTuple;

#[test]
fn test_standard_matches_brute_force() {
    for mu in small_shapes(3, 5) {
        let family = StandardShapeTableaux::new(mu.clone());
        let listed: Vec<TableauTuple> = family.iter().map(|t| t.into_inner()).collect();
        let distinct: BTreeSet<TableauTuple> = listed.iter().cloned().collect();
        assert_eq!(distinct.len(), listed.len(), "repeats for shape {}", mu);
        let expected: BTreeSet<TableauTuple> = all_fillings(&mu)
            .into_iter()
            .filter(TableauTuple::is_standard)
            .collect();
        assert_eq!(distinct, expected, "shape {}", mu);
        assert_eq!(family.cardinality(), Some(expected.len() as u128));
    }
}

#[test]
fn test_row_standard_matches_brute_force() {
    for mu in small_shapes(3, 5) {
        let family = RowStandardShapeTableaux::new(mu.clone());
        let listed: Vec<TableauTuple> = family.iter().map(|t| t.into_inner()).collect();
        let distinct: BTreeSet<TableauTuple> = listed.iter().cloned().collect();
        assert_eq!(distinct.len(), listed.len(), "repeats for shape {}", mu);
        let expected: BTreeSet<TableauTuple> = all_fillings(&mu)
            .into_iter()
            .filter(TableauTuple::is_row_standard)
            .collect();
        assert_eq!(distinct, expected, "shape {}", mu);
        assert_eq!(family.cardinality(), Some(expected.len() as u128));
    }
}

#[test]
fn test_last_is_conjugate_of_first_of_conjugate() {
    for mu in small_shapes(3, 6) {
        let family = StandardShapeTableaux::new(mu.clone());
        let last = family.iter().last();
        assert_eq!(family.last(), last, "shape {}", mu);
        let conjugate_first = StandardShapeTableaux::new(mu.conjugate())
            .first()
            .map(|t| t.conjugate());
        assert_eq!(conjugate_first, last, "shape {}", mu);
    }
}

#[test]
fn test_singleton_rows_order() {
    let family = RowStandardShapeTableaux::new(shape(vec![vec![1], vec![1], vec![1]]));
    assert_eq!(
        strings(family.iter()),
        vec![
            "([[3]], [[2]], [[1]])",
            "([[2]], [[3]], [[1]])",
            "([[1]], [[3]], [[2]])",
            "([[1]], [[2]], [[3]])",
            "([[2]], [[1]], [[3]])",
            "([[3]], [[1]], [[2]])"
        ]
    );
}

#[test]
fn test_hook_length_cardinality() {
    // [2, 1] has 2 standard tableaux and [2] has 1; choose 3 of the 5 entries.
    let family = StandardShapeTableaux::new(shape(vec![vec![2, 1], vec![2]]));
    assert_eq!(family.cardinality(), Some(10 * 2));
    assert_eq!(family.iter().count(), 20);
    let rows = RowStandardShapeTableaux::new(shape(vec![vec![2, 1], vec![2]]));
    assert_eq!(rows.cardinality(), Some(120 / (2 * 2)));
}

#[test]
fn test_random_elements() {
    let mut rng = StdRng::seed_from_u64(2025);
    for mu in small_shapes(3, 6) {
        let standard = StandardShapeTableaux::new(mu.clone());
        let row_standard = RowStandardShapeTableaux::new(mu.clone());
        for _ in 0..5 {
            let t = standard.random_element(&mut rng);
            assert!(standard.contains(&t), "{} not in shape {}", t, mu);
            let s = row_standard.random_element(&mut rng);
            assert!(row_standard.contains(&s), "{} not in shape {}", s, mu);
        }
    }
}

#[test]
fn test_families_concatenate_shapes() {
    for level in 1..=3 {
        for size in 0..=4 {
            let options = FamilyOptions::new().with_level(level).with_size(size);
            let standard = StandardTableauTuples::new(&options).unwrap();
            let listed = standard.list().unwrap();
            assert_eq!(standard.cardinality(), Some(listed.len() as u128));
            assert!(listed.iter().all(|t| standard.contains(t)));
            let row_standard = RowStandardTableauTuples::new(&options).unwrap();
            assert_eq!(
                row_standard.cardinality(),
                Some(row_standard.iter().count() as u128)
            );
        }
    }
}

#[test]
fn test_level_one_tuples_equal_tableaux() {
    let t = TableauTuple::from_rows(vec![vec![vec![1, 2, 3], vec![4, 5]]]).unwrap();
    let tableau = Tableau::new(vec![vec![1, 2, 3], vec![4, 5]]).unwrap();
    assert_eq!(t.level(), 1);
    assert_eq!(t, tableau);
    assert_eq!(t.to_string(), tableau.to_string());

    let family =
        StandardTableauTuples::new(&FamilyOptions::new().with_level(1).with_size(5)).unwrap();
    let found = family.iter().find(|s| *s == tableau).unwrap();
    assert_eq!(found.level(), 1);
    assert_eq!(*found.as_tableau_tuple(), t);
}

#[test]
fn test_shape_family_slices() {
    let family =
        StandardTableauTuples::new(&FamilyOptions::new().with_shape(vec![vec![2], vec![2, 2]]))
            .unwrap();
    assert_eq!(
        family.first().unwrap().into_inner(),
        tuple("([[1, 2]], [[3, 4], [5, 6]])")
    );
    assert_eq!(
        family.last().unwrap().into_inner(),
        tuple("([[5, 6]], [[1, 3], [2, 4]])")
    );
    let all = family.list().unwrap();
    assert_eq!(family.slice(3, 4), all[3..7].to_vec());
    assert!(family.unrank(all.len()).is_err());
}
