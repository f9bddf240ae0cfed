// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use super::{RowStandardTableauTuple, StandardTableauTuple, TableauTuple};
use std::fmt;
use std::ops::Deref;
use strum_macros::EnumCount as EnumCountMacro;

/// How strict a tableau tuple is, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCountMacro)]
pub enum TableauKind {
    General,
    RowStandard,
    Standard,
}

impl fmt::Display for TableauKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableauKind::General => write!(f, "tableau tuple"),
            TableauKind::RowStandard => write!(f, "row standard tableau tuple"),
            TableauKind::Standard => write!(f, "standard tableau tuple"),
        }
    }
}

/// A tableau tuple tagged with the tightest kind it satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyTableauTuple {
    General(TableauTuple),
    RowStandard(RowStandardTableauTuple),
    Standard(StandardTableauTuple),
}

impl AnyTableauTuple {
    pub fn kind(&self) -> TableauKind {
        match self {
            AnyTableauTuple::General(_) => TableauKind::General,
            AnyTableauTuple::RowStandard(_) => TableauKind::RowStandard,
            AnyTableauTuple::Standard(_) => TableauKind::Standard,
        }
    }

    pub fn as_tableau_tuple(&self) -> &TableauTuple {
        match self {
            AnyTableauTuple::General(t) => t,
            AnyTableauTuple::RowStandard(t) => t.as_tableau_tuple(),
            AnyTableauTuple::Standard(t) => t.as_tableau_tuple(),
        }
    }

    pub fn into_tableau_tuple(self) -> TableauTuple {
        match self {
            AnyTableauTuple::General(t) => t,
            AnyTableauTuple::RowStandard(t) => t.into_inner(),
            AnyTableauTuple::Standard(t) => t.into_inner(),
        }
    }

    /// The row standard view, if the tuple is at least row standard.
    pub fn as_row_standard(&self) -> Option<RowStandardTableauTuple> {
        match self {
            AnyTableauTuple::General(_) => None,
            AnyTableauTuple::RowStandard(t) => Some(t.clone()),
            AnyTableauTuple::Standard(t) => Some(t.to_row_standard()),
        }
    }

    pub fn as_standard(&self) -> Option<&StandardTableauTuple> {
        match self {
            AnyTableauTuple::Standard(t) => Some(t),
            _ => None,
        }
    }
}

impl Deref for AnyTableauTuple {
    type Target = TableauTuple;

    fn deref(&self) -> &TableauTuple {
        self.as_tableau_tuple()
    }
}

impl fmt::Display for AnyTableauTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tableau_tuple())
    }
}

impl From<AnyTableauTuple> for TableauTuple {
    fn from(t: AnyTableauTuple) -> Self {
        t.into_tableau_tuple()
    }
}
