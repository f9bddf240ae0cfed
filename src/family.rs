// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Families of tableau tuples selected by level, size and shape.
//!
//! A [`FamilyOptions`] value says which of the three are fixed. The factory
//! types check the options once and then behave as one family:
//!
//! | fixed           | members                               | finite |
//! |-----------------|---------------------------------------|--------|
//! | shape           | the tuples of that shape              | yes    |
//! | level and size  | every shape of that level and size    | yes    |
//! | level           | sizes `0, 1, 2, ...`                  | no     |
//! | size            | levels `1, 2, 3, ...`                 | no     |
//! | nothing         | level and size with `level + size` growing | no |
//!
//! Standard and row standard families run the shape enumerators over the
//! shapes in that order. General [`TableauTuples`], whose entries are
//! unconstrained, can only test membership and offer an element.
//!
//! ```
//! use tableau_tuples::enumerate::TableauFamily;
//! use tableau_tuples::family::{FamilyOptions, StandardTableauTuples};
//!
//! let family = StandardTableauTuples::new(&FamilyOptions::new().with_level(3).with_size(3)).unwrap();
//! assert_eq!(family.cardinality(), Some(54));
//! assert_eq!(family.first().unwrap().to_string(), "([[1, 2, 3]], [], [])");
//! assert_eq!(family.to_string(), "Standard tableau tuples of level 3 and size 3");
//!
//! let infinite = StandardTableauTuples::new(&FamilyOptions::new().with_size(2)).unwrap();
//! assert_eq!(infinite.cardinality(), None);
//! assert!(infinite.list().is_err());
//! ```

use crate::enumerate::{
    typical_member, RowStandardShapeTableaux, StandardShapeTableaux, TableauFamily,
};
use crate::error::{Result, TableauError};
use crate::shape::{
    all_partition_tuples, partition_tuples, partition_tuples_of_level, partition_tuples_of_size,
    PartitionTuple,
};
use crate::tableau::Tableau;
use crate::tuple::{RowStandardTableauTuple, StandardTableauTuple, TableauTuple};
use std::fmt;

/// Which of level, size and shape a family fixes.
///
/// Level and size are signed so that out of range requests can be reported
/// rather than made unrepresentable; the shape is given as raw rows and is
/// checked when the family is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyOptions {
    pub level: Option<i64>,
    pub size: Option<i64>,
    pub shape: Option<Vec<Vec<usize>>>,
}

impl FamilyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_shape(mut self, shape: Vec<Vec<usize>>) -> Self {
        self.shape = Some(shape);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Shape(PartitionTuple),
    LevelSize(usize, usize),
    Level(usize),
    Size(usize),
    All,
}

fn out_of_domain(message: &str) -> TableauError {
    TableauError::OutOfDomain(message.to_string())
}

fn conflict(message: &str) -> TableauError {
    TableauError::ConflictingSpecification(message.to_string())
}

impl Selection {
    fn new(options: &FamilyOptions) -> Result<Self> {
        let level = options
            .level
            .map(|l| {
                usize::try_from(l)
                    .ok()
                    .filter(|&l| l > 0)
                    .ok_or_else(|| out_of_domain("the level must be a positive integer"))
            })
            .transpose()?;
        let size = options
            .size
            .map(|s| {
                usize::try_from(s)
                    .map_err(|_| out_of_domain("the size must be a nonnegative integer"))
            })
            .transpose()?;
        if let Some(rows) = &options.shape {
            let shape = PartitionTuple::from_rows(rows.clone())
                .map_err(|_| out_of_domain("the shape must be a partition tuple"))?;
            if level.is_some_and(|l| l != shape.level()) {
                return Err(conflict("the shape and level must agree"));
            }
            if size.is_some_and(|s| s != shape.size()) {
                return Err(conflict("the shape and size must agree"));
            }
            return Ok(Selection::Shape(shape));
        }
        Ok(match (level, size) {
            (Some(l), Some(s)) => Selection::LevelSize(l, s),
            (Some(l), None) => Selection::Level(l),
            (None, Some(s)) => Selection::Size(s),
            (None, None) => Selection::All,
        })
    }

    fn shapes(&self) -> Box<dyn Iterator<Item = PartitionTuple>> {
        match self {
            Selection::Shape(shape) => Box::new(std::iter::once(shape.clone())),
            &Selection::LevelSize(level, size) => Box::new(partition_tuples(level, size)),
            &Selection::Level(level) => Box::new(partition_tuples_of_level(level)),
            &Selection::Size(size) => Box::new(partition_tuples_of_size(size)),
            Selection::All => Box::new(all_partition_tuples()),
        }
    }

    fn is_finite(&self) -> bool {
        matches!(self, Selection::Shape(_) | Selection::LevelSize(..))
    }

    fn level(&self) -> Option<usize> {
        match self {
            Selection::Shape(shape) => Some(shape.level()),
            &Selection::LevelSize(level, _) | &Selection::Level(level) => Some(level),
            _ => None,
        }
    }

    fn size(&self) -> Option<usize> {
        match self {
            Selection::Shape(shape) => Some(shape.size()),
            &Selection::LevelSize(_, size) | &Selection::Size(size) => Some(size),
            _ => None,
        }
    }

    fn admits(&self, t: &TableauTuple) -> bool {
        match self {
            Selection::Shape(shape) => t.shape() == *shape,
            _ => {
                self.level().map_or(true, |l| t.level() == l)
                    && self.size().map_or(true, |s| t.size() == s)
            }
        }
    }

    /// A standard member chosen without enumerating, where the family has
    /// a fixed pick.
    fn standard_element(&self) -> Option<StandardTableauTuple> {
        let components = match *self {
            Selection::Shape(_) | Selection::LevelSize(1, _) => return None,
            Selection::LevelSize(level, size) => {
                let pick = match size {
                    0 => vec![],
                    1 => vec![vec![vec![1]]],
                    2 => vec![vec![vec![1], vec![2]]],
                    _ => vec![vec![vec![1]], vec![(2..size).collect(), vec![size]]],
                };
                // Empty components come first.
                let mut components = vec![vec![]; level.saturating_sub(pick.len())];
                components.extend(pick);
                components
            }
            Selection::Level(level) => doubling_rows(level),
            Selection::Size(size) => {
                let mut components = match size {
                    0 => vec![],
                    1 => vec![vec![vec![1]]],
                    _ => vec![vec![vec![1]], vec![(2..=size).collect()]],
                };
                components.resize(4, vec![]);
                components
            }
            Selection::All => doubling_rows(3).into_iter().rev().collect(),
        };
        Some(StandardTableauTuple::new_unchecked(tuple(components)))
    }
}

/// Component `i` is the single row `2^i, ..., 2^(i+1) - 1`.
fn doubling_rows(level: usize) -> Vec<Vec<Vec<usize>>> {
    (0..level)
        .map(|i| vec![((1 << i)..(1 << (i + 1))).collect()])
        .collect()
}

fn tuple(components: Vec<Vec<Vec<usize>>>) -> TableauTuple {
    TableauTuple::from_components_unchecked(
        components.into_iter().map(Tableau::from_rows_unchecked).collect(),
    )
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Shape(shape) => write!(f, " of shape {}", shape),
            Selection::LevelSize(level, size) => {
                write!(f, " of level {} and size {}", level, size)
            }
            Selection::Level(level) => write!(f, " of level {}", level),
            Selection::Size(size) => write!(f, " of size {}", size),
            Selection::All => Ok(()),
        }
    }
}

/// Standard tableau tuples of a fixed level, size or shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardTableauTuples {
    selection: Selection,
}

impl StandardTableauTuples {
    pub fn new(options: &FamilyOptions) -> Result<Self> {
        let selection = Selection::new(options)?;
        crate::trace!("[Factory] standard tableau tuples{}", selection);
        Ok(Self { selection })
    }

    pub fn level(&self) -> Option<usize> {
        self.selection.level()
    }

    pub fn size(&self) -> Option<usize> {
        self.selection.size()
    }

    pub fn shape(&self) -> Option<&PartitionTuple> {
        match &self.selection {
            Selection::Shape(shape) => Some(shape),
            _ => None,
        }
    }
}

impl TableauFamily for StandardTableauTuples {
    type Item = StandardTableauTuple;

    fn iter(&self) -> Box<dyn Iterator<Item = StandardTableauTuple> + '_> {
        Box::new(
            self.selection
                .shapes()
                .flat_map(|shape| StandardShapeTableaux::new(shape).iter()),
        )
    }

    fn contains(&self, t: &TableauTuple) -> bool {
        self.selection.admits(t) && t.is_standard()
    }

    fn is_finite(&self) -> bool {
        self.selection.is_finite()
    }

    fn cardinality(&self) -> Option<u128> {
        self.is_finite().then(|| {
            self.selection
                .shapes()
                .map(|shape| shape.standard_count())
                .sum()
        })
    }

    fn an_element(&self) -> Option<StandardTableauTuple> {
        self.selection
            .standard_element()
            .or_else(|| typical_member(self))
    }
}

impl fmt::Display for StandardTableauTuples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Standard tableau tuples{}", self.selection)
    }
}

/// Row standard tableau tuples of a fixed level, size or shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStandardTableauTuples {
    selection: Selection,
}

impl RowStandardTableauTuples {
    pub fn new(options: &FamilyOptions) -> Result<Self> {
        let selection = Selection::new(options)?;
        crate::trace!("[Factory] row standard tableau tuples{}", selection);
        Ok(Self { selection })
    }

    pub fn level(&self) -> Option<usize> {
        self.selection.level()
    }

    pub fn size(&self) -> Option<usize> {
        self.selection.size()
    }

    pub fn shape(&self) -> Option<&PartitionTuple> {
        match &self.selection {
            Selection::Shape(shape) => Some(shape),
            _ => None,
        }
    }
}

impl TableauFamily for RowStandardTableauTuples {
    type Item = RowStandardTableauTuple;

    fn iter(&self) -> Box<dyn Iterator<Item = RowStandardTableauTuple> + '_> {
        Box::new(
            self.selection
                .shapes()
                .flat_map(|shape| RowStandardShapeTableaux::new(shape).iter()),
        )
    }

    fn contains(&self, t: &TableauTuple) -> bool {
        self.selection.admits(t) && t.is_row_standard()
    }

    fn is_finite(&self) -> bool {
        self.selection.is_finite()
    }

    fn cardinality(&self) -> Option<u128> {
        self.is_finite().then(|| {
            self.selection
                .shapes()
                .map(|shape| shape.row_standard_count())
                .sum()
        })
    }

    fn an_element(&self) -> Option<RowStandardTableauTuple> {
        match self.selection.standard_element() {
            Some(t) => Some(t.into()),
            None => typical_member(self),
        }
    }
}

impl fmt::Display for RowStandardTableauTuples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row standard tableau tuples{}", self.selection)
    }
}

/// Tableau tuples of a fixed level or size, with any positive entries.
///
/// There are infinitely many of these however much is fixed, so the family
/// is not enumerable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableauTuples {
    selection: Selection,
}

impl TableauTuples {
    pub fn new(level: Option<i64>, size: Option<i64>) -> Result<Self> {
        let selection = Selection::new(&FamilyOptions {
            level,
            size,
            shape: None,
        })?;
        crate::trace!("[Factory] tableau tuples{}", selection);
        Ok(Self { selection })
    }

    pub fn level(&self) -> Option<usize> {
        self.selection.level()
    }

    pub fn size(&self) -> Option<usize> {
        self.selection.size()
    }

    pub fn contains(&self, t: &TableauTuple) -> bool {
        self.selection.admits(t)
    }

    pub fn an_element(&self) -> TableauTuple {
        let components = match self.selection {
            Selection::LevelSize(level, 0) | Selection::Level(level) => vec![vec![]; level],
            Selection::LevelSize(level, size) => {
                let mut components = vec![vec![(1..=size).collect()]];
                components.resize(level, vec![]);
                components
            }
            Selection::Size(0) => vec![vec![]; 3],
            Selection::Size(size) => vec![vec![], vec![(1..=size).collect()], vec![]],
            Selection::All | Selection::Shape(_) => (1..=7).map(|v| vec![vec![v]]).collect(),
        };
        tuple(components)
    }
}

impl fmt::Display for TableauTuples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tableau tuples{}", self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings<T: ToString>(items: impl Iterator<Item = T>) -> Vec<String> {
        items.map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_validation() {
        let bad_level = FamilyOptions::new().with_level(0);
        assert_eq!(
            StandardTableauTuples::new(&bad_level),
            Err(out_of_domain("the level must be a positive integer"))
        );
        assert_eq!(
            TableauTuples::new(None, Some(-1)),
            Err(out_of_domain("the size must be a nonnegative integer"))
        );
        let bad_shape = FamilyOptions::new().with_shape(vec![vec![1, 2]]);
        assert_eq!(
            RowStandardTableauTuples::new(&bad_shape),
            Err(out_of_domain("the shape must be a partition tuple"))
        );
        let clash = FamilyOptions::new().with_shape(vec![vec![2], vec![1]]).with_level(3);
        assert_eq!(
            StandardTableauTuples::new(&clash),
            Err(conflict("the shape and level must agree"))
        );
        let clash = FamilyOptions::new().with_shape(vec![vec![2], vec![1]]).with_size(4);
        assert_eq!(
            StandardTableauTuples::new(&clash),
            Err(conflict("the shape and size must agree"))
        );
        let agree = FamilyOptions::new()
            .with_shape(vec![vec![2], vec![1]])
            .with_size(3)
            .with_level(2);
        assert!(StandardTableauTuples::new(&agree).is_ok());
    }

    #[test]
    fn test_level_and_size_order() {
        let family =
            StandardTableauTuples::new(&FamilyOptions::new().with_level(3).with_size(3)).unwrap();
        assert_eq!(
            strings(family.iter().take(8)),
            vec![
                "([[1, 2, 3]], [], [])",
                "([[1, 2], [3]], [], [])",
                "([[1, 3], [2]], [], [])",
                "([[1], [2], [3]], [], [])",
                "([[1, 2]], [[3]], [])",
                "([[1, 3]], [[2]], [])",
                "([[2, 3]], [[1]], [])",
                "([[1], [2]], [[3]], [])"
            ]
        );
        assert_eq!(family.iter().count(), 54);
        let row = RowStandardTableauTuples::new(&FamilyOptions::new().with_level(2).with_size(3))
            .unwrap();
        assert_eq!(row.cardinality(), Some(row.iter().count() as u128));
    }

    #[test]
    fn test_shape_family() {
        let options = FamilyOptions::new().with_shape(vec![vec![2], vec![2, 1]]);
        let family = StandardTableauTuples::new(&options).unwrap();
        assert_eq!(family.cardinality(), Some(20));
        assert_eq!(
            family.an_element().unwrap().to_string(),
            "([[2, 4]], [[1, 3], [5]])"
        );
        assert_eq!(family.level(), Some(2));
        assert_eq!(family.size(), Some(5));
        let row = RowStandardTableauTuples::new(&options).unwrap();
        assert_eq!(row.cardinality(), Some(30));
        assert_eq!(
            row.an_element().unwrap().to_string(),
            "([[4, 5]], [[1, 3], [2]])"
        );
    }

    #[test]
    fn test_infinite_orders() {
        let by_level = StandardTableauTuples::new(&FamilyOptions::new().with_level(2)).unwrap();
        assert_eq!(
            strings(by_level.iter().take(4)),
            vec!["([], [])", "([[1]], [])", "([], [[1]])", "([[1, 2]], [])"]
        );
        let by_size = RowStandardTableauTuples::new(&FamilyOptions::new().with_size(1)).unwrap();
        assert_eq!(
            strings(by_size.iter().take(4)),
            vec!["[[1]]", "([[1]], [])", "([], [[1]])", "([[1]], [], [])"]
        );
        let all = StandardTableauTuples::new(&FamilyOptions::new()).unwrap();
        assert_eq!(
            strings(all.iter().take(4)),
            vec!["[]", "[[1]]", "([], [])", "[[1, 2]]"]
        );
        assert_eq!(all.last(), None);
        assert!(all.unrank(10).is_ok());
    }

    #[test]
    fn test_an_element_of_infinite_families() {
        let level = StandardTableauTuples::new(&FamilyOptions::new().with_level(3)).unwrap();
        assert_eq!(
            level.an_element().unwrap().to_string(),
            "([[1]], [[2, 3]], [[4, 5, 6, 7]])"
        );
        let size = StandardTableauTuples::new(&FamilyOptions::new().with_size(4)).unwrap();
        assert_eq!(
            size.an_element().unwrap().to_string(),
            "([[1]], [[2, 3, 4]], [], [])"
        );
        let size = RowStandardTableauTuples::new(&FamilyOptions::new().with_size(0)).unwrap();
        assert_eq!(size.an_element().unwrap().to_string(), "([], [], [], [])");
        let all = RowStandardTableauTuples::new(&FamilyOptions::new()).unwrap();
        assert_eq!(
            all.an_element().unwrap().to_string(),
            "([[4, 5, 6, 7]], [[2, 3]], [[1]])"
        );
        let finite =
            StandardTableauTuples::new(&FamilyOptions::new().with_level(2).with_size(4)).unwrap();
        assert_eq!(
            finite.an_element().unwrap().to_string(),
            "([[1]], [[2, 3], [4]])"
        );
        for family in [level, size_family(5), finite] {
            assert!(family.contains(&family.an_element().unwrap()));
        }
    }

    fn size_family(size: i64) -> StandardTableauTuples {
        StandardTableauTuples::new(&FamilyOptions::new().with_size(size)).unwrap()
    }

    #[test]
    fn test_an_element_fills_the_last_components() {
        let options = |level, size| FamilyOptions::new().with_level(level).with_size(size);
        for (level, size, expected) in [
            (5, 2, "([], [], [], [], [[1], [2]])"),
            (3, 4, "([], [[1]], [[2, 3], [4]])"),
            (3, 1, "([], [], [[1]])"),
            (2, 0, "([], [])"),
        ] {
            let standard = StandardTableauTuples::new(&options(level, size)).unwrap();
            let element = standard.an_element().unwrap();
            assert_eq!(element.to_string(), expected);
            assert!(standard.contains(&element));
            let row = RowStandardTableauTuples::new(&options(level, size)).unwrap();
            assert_eq!(row.an_element().unwrap().to_string(), expected);
        }
    }

    #[test]
    fn test_contains() {
        let family = StandardTableauTuples::new(&FamilyOptions::new().with_level(2)).unwrap();
        let yes: TableauTuple = "([[1, 3]], [[2]])".parse().unwrap();
        let row_only: TableauTuple = "([[2, 3], [1]], [])".parse().unwrap();
        let wrong_level: TableauTuple = "[[1, 2]]".parse().unwrap();
        assert!(family.contains(&yes));
        assert!(!family.contains(&row_only));
        assert!(!family.contains(&wrong_level));
        let row = RowStandardTableauTuples::new(&FamilyOptions::new().with_size(3)).unwrap();
        assert!(row.contains(&row_only));
        assert!(row.contains(&yes));
    }

    #[test]
    fn test_level_one_family() {
        let family =
            StandardTableauTuples::new(&FamilyOptions::new().with_level(1).with_size(3)).unwrap();
        let all = family.list().unwrap();
        assert_eq!(all.len(), 4);
        let tableau = Tableau::new(vec![vec![1, 2], vec![3]]).unwrap();
        assert!(all.iter().any(|t| *t == tableau));
        assert_eq!(family.an_element(), family.last());
    }

    #[test]
    fn test_general_families() {
        let all = TableauTuples::new(None, None).unwrap();
        assert_eq!(
            all.an_element().to_string(),
            "([[1]], [[2]], [[3]], [[4]], [[5]], [[6]], [[7]])"
        );
        let level = TableauTuples::new(Some(3), None).unwrap();
        assert_eq!(level.an_element().to_string(), "([], [], [])");
        let size = TableauTuples::new(None, Some(3)).unwrap();
        assert_eq!(size.an_element().to_string(), "([], [[1, 2, 3]], [])");
        let both = TableauTuples::new(Some(3), Some(2)).unwrap();
        assert_eq!(both.an_element().to_string(), "([[1, 2]], [], [])");
        let unconstrained: TableauTuple = "([[5, 5]], [], [[1]])".parse().unwrap();
        assert!(level.contains(&unconstrained));
        assert!(!both.contains(&unconstrained));
        assert_eq!(both.to_string(), "Tableau tuples of level 3 and size 2");
    }
}
