// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text renderings of tableau tuples. Level one tuples print exactly as
//! their only component does.

use super::TableauTuple;
use crate::config::{Convention, DisplayOptions, DisplayStyle};
use std::fmt;

const COMPONENT_GAP: &str = "   ";

impl TableauTuple {
    /// Components in compact form, joined by `|`: `1,2,3/4,5|-|6`.
    pub fn compact(&self) -> String {
        self.components()
            .iter()
            .map(|t| t.compact())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// The components drawn side by side.
    ///
    /// ```
    /// use tableau_tuples::config::Convention;
    /// use tableau_tuples::tuple::TableauTuple;
    ///
    /// let t = TableauTuple::from_rows(vec![
    ///     vec![vec![2, 3]],
    ///     vec![vec![1]],
    ///     vec![vec![4], vec![5]],
    ///     vec![],
    /// ])
    /// .unwrap();
    /// assert_eq!(
    ///     t.diagram(Convention::English),
    ///     "  2  3     1     4     -\n                 5"
    /// );
    /// ```
    pub fn diagram(&self, convention: Convention) -> String {
        if let Some(t) = self.as_tableau() {
            return t.diagram(convention);
        }
        let columns: Vec<Vec<String>> = self
            .components()
            .iter()
            .map(|t| t.diagram_lines(Convention::English))
            .collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        let mut lines: Vec<String> = (0..height)
            .map(|r| {
                let line = columns
                    .iter()
                    .map(|lines| {
                        let width = lines[0].len();
                        match lines.get(r) {
                            Some(l) => format!("{:<width$}", l, width = width),
                            None => " ".repeat(width),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(COMPONENT_GAP);
                line.trim_end().to_string()
            })
            .collect();
        if convention == Convention::French {
            lines.reverse();
        }
        lines.join("\n")
    }

    /// Render according to `options`.
    pub fn render(&self, options: &DisplayOptions) -> String {
        match options.style {
            DisplayStyle::List => self.to_string(),
            DisplayStyle::Compact => self.compact(),
            DisplayStyle::Diagram => self.diagram(options.convention),
        }
    }
}

impl fmt::Display for TableauTuple {
    /// The list form, `([[1, 2], [3]], [])`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(t) = self.as_tableau() {
            return write!(f, "{}", t);
        }
        write!(f, "(")?;
        for (k, t) in self.components().iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", t)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableauTuple {
        TableauTuple::from_rows(vec![
            vec![vec![1, 2, 3], vec![4, 5]],
            vec![],
            vec![vec![6]],
            vec![],
        ])
        .unwrap()
    }

    #[test]
    fn test_list_and_compact() {
        let t = sample();
        assert_eq!(t.to_string(), "([[1, 2, 3], [4, 5]], [], [[6]], [])");
        assert_eq!(t.compact(), "1,2,3/4,5|-|6|-");
        assert_eq!(TableauTuple::empty(4).to_string(), "([], [], [], [])");
        assert_eq!(TableauTuple::empty(1).to_string(), "[]");
        let single = TableauTuple::from_rows(vec![vec![vec![1, 2], vec![3]]]).unwrap();
        assert_eq!(single.to_string(), "[[1, 2], [3]]");
        assert_eq!(single.compact(), "1,2/3");
    }

    #[test]
    fn test_diagrams() {
        let t = TableauTuple::from_rows(vec![
            vec![vec![2, 3]],
            vec![vec![1]],
            vec![vec![4], vec![5]],
            vec![],
        ])
        .unwrap();
        assert_eq!(
            t.diagram(Convention::French),
            "                 5\n  2  3     1     4     -"
        );
        let single = TableauTuple::from_rows(vec![vec![vec![1, 2], vec![3]]]).unwrap();
        assert_eq!(single.diagram(Convention::English), "  1  2\n  3");
        assert_eq!(TableauTuple::empty(2).diagram(Convention::English), "  -     -");
    }

    #[test]
    fn test_render() {
        let t = sample();
        let compact = DisplayOptions::new(DisplayStyle::Compact, Convention::English);
        assert_eq!(t.render(&compact), "1,2,3/4,5|-|6|-");
        assert_eq!(t.render(&DisplayOptions::default()), t.to_string());
        let diagram = DisplayOptions::new(DisplayStyle::Diagram, Convention::English);
        assert_eq!(
            t.render(&diagram),
            "  1  2  3     -     6     -\n  4  5"
        );
    }
}
