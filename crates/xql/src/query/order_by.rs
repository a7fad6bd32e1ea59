//! `ORDER BY` sort keys.

use xql_core::{Node, Renderer};

use crate::expr::Expr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// `ASC`
    Asc,
    /// `DESC`
    Desc,
}

/// Placement of nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    /// `NULLS FIRST`
    First,
    /// `NULLS LAST`
    Last,
}

/// `expr [ASC|DESC] [NULLS FIRST|NULLS LAST]`
///
/// Without an explicit direction the database default (ascending) applies
/// and nothing is written.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    /// Sort expression.
    pub expr: Expr,
    /// Explicit direction.
    pub ordering: Option<Ordering>,
    /// Explicit null placement.
    pub nulls: Option<NullOrdering>,
}

impl SortKey {
    /// Creates a sort key with default ordering.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self {
            expr,
            ordering: None,
            nulls: None,
        }
    }

    /// Sorts ascending.
    #[must_use]
    pub const fn asc(mut self) -> Self {
        self.ordering = Some(Ordering::Asc);
        self
    }

    /// Sorts descending.
    #[must_use]
    pub const fn desc(mut self) -> Self {
        self.ordering = Some(Ordering::Desc);
        self
    }

    /// Puts nulls first.
    #[must_use]
    pub const fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullOrdering::First);
        self
    }

    /// Puts nulls last.
    #[must_use]
    pub const fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullOrdering::Last);
        self
    }
}

impl Node for SortKey {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.expr.accept(r);
        if let Some(ordering) = self.ordering {
            r.ws().keyword(match ordering {
                Ordering::Asc => "ASC",
                Ordering::Desc => "DESC",
            });
        }
        if let Some(nulls) = self.nulls {
            r.ws().keyword(match nulls {
                NullOrdering::First => "NULLS FIRST",
                NullOrdering::Last => "NULLS LAST",
            });
        }
        r
    }
}

impl From<Expr> for SortKey {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}

impl_display!(SortKey);
