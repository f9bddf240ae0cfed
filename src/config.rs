// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Display configuration.
//!
//! Tableau tuples print in one of three styles. Diagrams follow either the
//! English convention (first row on top) or the French one (first row at
//! the bottom). Both settings parse from strings, ignoring case:
//!
//! ```
//! use tableau_tuples::config::{Convention, DisplayOptions, DisplayStyle};
//!
//! let style: DisplayStyle = "Compact".parse().unwrap();
//! assert_eq!(style, DisplayStyle::Compact);
//! assert_eq!(Convention::French.to_string(), "french");
//! assert_eq!(DisplayOptions::default().style, DisplayStyle::List);
//! ```

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumString};

/// How a tableau tuple is rendered as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumCountMacro)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisplayStyle {
    /// `([[1, 2], [3]], [])`
    #[default]
    List,
    /// `1,2/3|-`
    Compact,
    /// Components drawn side by side.
    Diagram,
}

/// Which way up diagrams are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumCountMacro)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Convention {
    #[default]
    English,
    French,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub style: DisplayStyle,
    pub convention: Convention,
}

impl DisplayOptions {
    pub fn new(style: DisplayStyle, convention: Convention) -> Self {
        Self { style, convention }
    }
}
