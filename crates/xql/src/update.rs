//! `UPDATE`.
//!
//! ```rust
//! use xql::{col, Update};
//!
//! let stmt = Update::new("products").set("price", 10).where_clause(col("price").eq(5));
//! assert_eq!(stmt.to_string(), "UPDATE products SET price = 10 WHERE price = 5");
//! ```

use xql_core::primitives::{Ident, Raw, Sep};
use xql_core::{Node, RenderError, Renderer};

use crate::expr::Expr;
use crate::name::TableName;

/// The row filter of a searched or positioned `UPDATE`/`DELETE`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `WHERE cond`
    Search(Expr),
    /// `WHERE CURRENT OF cursor`
    CurrentOf(Ident),
}

impl Node for Filter {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("WHERE").ws();
        match self {
            Self::Search(cond) => cond.accept(r),
            Self::CurrentOf(cursor) => {
                r.keyword("CURRENT OF").ws();
                cursor.accept(r)
            }
        }
    }
}

/// One entry of a `SET` list.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// `column = value`
    Column {
        /// Target column.
        column: Ident,
        /// New value.
        value: Expr,
    },
    /// `(a, b) = row`
    Row {
        /// Target columns.
        columns: Vec<Ident>,
        /// Row value.
        row: Expr,
    },
    /// Assignments written verbatim.
    Raw(Raw),
}

impl Node for Assignment {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Column { column, value } => {
                column.accept(r).ws().token('=').ws();
                value.accept(r)
            }
            Self::Row { columns, row } => {
                r.token('(');
                r.require("assignment", "column", columns)
                    .token(')')
                    .ws()
                    .token('=')
                    .ws();
                row.accept(r)
            }
            Self::Raw(text) => text.accept(r),
        }
    }
}

/// `UPDATE table [AS alias] SET assignments [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Target table.
    pub table: TableName,
    /// Correlation name.
    pub alias: Option<Ident>,
    /// `SET` list. Must not be empty.
    pub assignments: Vec<Assignment>,
    /// Row filter.
    pub filter: Option<Filter>,
}

impl Update {
    /// Starts an update of `table`.
    #[must_use]
    pub fn new(table: impl Into<TableName>) -> Self {
        Self {
            table: table.into(),
            alias: None,
            assignments: Vec::new(),
            filter: None,
        }
    }

    /// Sets the correlation name.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<Ident>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Appends `column = value`.
    #[must_use]
    pub fn set(mut self, column: impl Into<Ident>, value: impl Into<Expr>) -> Self {
        self.assignments.push(Assignment::Column {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Appends `(columns) = row`.
    #[must_use]
    pub fn set_row<I, S>(mut self, columns: I, row: impl Into<Expr>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        self.assignments.push(Assignment::Row {
            columns: columns.into_iter().map(Into::into).collect(),
            row: row.into(),
        });
        self
    }

    /// Appends assignments written verbatim.
    #[must_use]
    pub fn set_raw(mut self, text: &'static str) -> Self {
        self.assignments.push(Assignment::Raw(Raw::new(text)));
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

impl Node for Update {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        if self.assignments.is_empty() {
            return r.fail(RenderError::missing("UPDATE", "assignment"));
        }
        r.keyword("UPDATE").ws();
        self.table.accept(r);
        if let Some(alias) = &self.alias {
            r.ws().keyword("AS").ws();
            alias.accept(r);
        }
        r.ws().keyword("SET").ws().join(&self.assignments, &Sep);
        if let Some(filter) = &self.filter {
            filter.accept(r.ws());
        }
        r
    }
}

impl_display!(Filter, Assignment, Update);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::col;
    use crate::value::Value;

    #[test]
    fn test_searched_update() {
        assert_eq!(
            Update::new("products")
                .set("price", 10)
                .where_clause(col("price").eq(5))
                .to_string(),
            "UPDATE products SET price = 10 WHERE price = 5"
        );
    }

    #[test]
    fn test_raw_assignments() {
        assert_eq!(
            Update::new("mytable")
                .set_raw("a = 5, b = 3, c = 1")
                .where_clause(col("a").gt(0))
                .to_string(),
            "UPDATE mytable SET a = 5, b = 3, c = 1 WHERE a > 0"
        );
    }

    #[test]
    fn test_row_assignment_and_alias() {
        assert_eq!(
            Update::new("weather")
                .alias("w")
                .set_row(["temp_lo", "temp_hi"], Value::row([1, 2]))
                .set("prcp", Value::Default)
                .to_string(),
            "UPDATE weather AS w SET (temp_lo, temp_hi) = ROW(1, 2), prcp = DEFAULT"
        );
    }

    #[test]
    fn test_positioned_update() {
        assert_eq!(
            Update::new("films")
                .set("kind", "Dramatic")
                .where_current_of("c_films")
                .to_string(),
            "UPDATE films SET kind = 'Dramatic' WHERE CURRENT OF c_films"
        );
    }

    #[test]
    fn test_update_without_assignments_fails() {
        let err = xql_core::render(&Update::new("t").where_clause(col("a").eq(1))).unwrap_err();
        assert_eq!(err, RenderError::missing("UPDATE", "assignment"));
    }
}
