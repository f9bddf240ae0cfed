// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text renderings of a single tableau.

use super::Tableau;
use crate::config::Convention;
use std::fmt;

impl Tableau {
    /// Rows joined by `/`, entries by `,`; `-` when empty.
    pub fn compact(&self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The diagram, one line per row.
    ///
    /// Columns are right aligned and at least two characters wide. The
    /// empty tableau is drawn as `  -`.
    pub fn diagram(&self, convention: Convention) -> String {
        self.diagram_lines(convention).join("\n")
    }

    pub(crate) fn diagram_lines(&self, convention: Convention) -> Vec<String> {
        if self.is_empty() {
            return vec!["  -".to_string()];
        }
        let mut widths = vec![2; self.rows()[0].len()];
        for row in self.rows() {
            for (c, v) in row.iter().enumerate() {
                widths[c] = widths[c].max(v.to_string().len());
            }
        }
        let mut lines: Vec<String> = self
            .rows()
            .iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(c, v)| format!("{:>width$}", v, width = widths[c]))
                    .collect();
                format!(" {}", cells.join(" "))
            })
            .collect();
        if convention == Convention::French {
            lines.reverse();
        }
        lines
    }
}

impl fmt::Display for Tableau {
    /// The list form, `[[1, 2], [3]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_compact() {
        let t = Tableau::new(vec![vec![1, 2, 3], vec![4, 5]]).unwrap();
        assert_eq!(t.to_string(), "[[1, 2, 3], [4, 5]]");
        assert_eq!(t.compact(), "1,2,3/4,5");
        assert_eq!(Tableau::empty().to_string(), "[]");
        assert_eq!(Tableau::empty().compact(), "-");
    }

    #[test]
    fn test_diagram() {
        let t = Tableau::new(vec![vec![1, 2, 10], vec![4]]).unwrap();
        assert_eq!(t.diagram(Convention::English), "  1  2 10\n  4");
        assert_eq!(t.diagram(Convention::French), "  4\n  1  2 10");
        assert_eq!(Tableau::empty().diagram(Convention::English), "  -");
    }
}
