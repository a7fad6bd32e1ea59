//! `DELETE`.

use xql_core::primitives::Ident;
use xql_core::{Node, Renderer};

use crate::expr::Expr;
use crate::name::TableName;
use crate::update::Filter;

/// `DELETE FROM [ONLY] table [AS alias] [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Target table.
    pub table: TableName,
    /// Excludes descendant tables.
    pub only: bool,
    /// Correlation name.
    pub alias: Option<Ident>,
    /// Row filter.
    pub filter: Option<Filter>,
}

impl Delete {
    /// Starts a delete from `table`.
    #[must_use]
    pub fn new(table: impl Into<TableName>) -> Self {
        Self {
            table: table.into(),
            only: false,
            alias: None,
            filter: None,
        }
    }

    /// Adds `ONLY`.
    #[must_use]
    pub const fn only(mut self) -> Self {
        self.only = true;
        self
    }

    /// Sets the correlation name.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<Ident>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// `WHERE cond`
    #[must_use]
    pub fn where_clause(mut self, cond: impl Into<Expr>) -> Self {
        self.filter = Some(Filter::Search(cond.into()));
        self
    }

    /// `WHERE CURRENT OF cursor`
    #[must_use]
    pub fn where_current_of(mut self, cursor: impl Into<Ident>) -> Self {
        self.filter = Some(Filter::CurrentOf(cursor.into()));
        self
    }
}

impl Node for Delete {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("DELETE FROM").ws();
        if self.only {
            r.keyword("ONLY").ws();
        }
        self.table.accept(r);
        if let Some(alias) = &self.alias {
            r.ws().keyword("AS").ws();
            alias.accept(r);
        }
        if let Some(filter) = &self.filter {
            filter.accept(r.ws());
        }
        r
    }
}

impl_display!(Delete);
