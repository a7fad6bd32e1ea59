//! Table references and joins.

use xql_core::primitives::{Ident, Ws};
use xql_core::{Node, Renderer};

use super::Query;
use crate::expr::Expr;
use crate::name::TableName;
use crate::types::keyword_enum;

/// `AS alias [(columns)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Correlation name.
    pub name: Ident,
    /// Derived column names.
    pub columns: Vec<Ident>,
}

impl Alias {
    /// Creates an alias without column names.
    #[must_use]
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
        }
    }

    /// Renames the columns of the aliased table.
    #[must_use]
    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Ident>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

impl Node for Alias {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("AS").ws().visit(&[&self.name]);
        if !self.columns.is_empty() {
            r.ws().paren(&[&self.columns]);
        }
        r
    }
}

impl From<&'static str> for Alias {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

keyword_enum! {
    /// How rows are picked by `TABLESAMPLE`.
    pub enum SampleMethod {
        Bernoulli => "BERNOULLI",
        System => "SYSTEM",
    }
}

/// `TABLESAMPLE method (percent) [REPEATABLE (seed)]`
#[derive(Debug, Clone, PartialEq)]
pub struct TableSample {
    /// Sampling method.
    pub method: SampleMethod,
    /// Percentage of rows to keep.
    pub percent: Expr,
    /// Seed making the sample reproducible.
    pub repeatable: Option<Expr>,
}

impl TableSample {
    /// `TABLESAMPLE BERNOULLI (percent)`
    #[must_use]
    pub fn bernoulli(percent: impl Into<Expr>) -> Self {
        Self {
            method: SampleMethod::Bernoulli,
            percent: percent.into(),
            repeatable: None,
        }
    }

    /// `TABLESAMPLE SYSTEM (percent)`
    #[must_use]
    pub fn system(percent: impl Into<Expr>) -> Self {
        Self {
            method: SampleMethod::System,
            percent: percent.into(),
            repeatable: None,
        }
    }

    /// `REPEATABLE (seed)`
    #[must_use]
    pub fn repeatable(mut self, seed: impl Into<Expr>) -> Self {
        self.repeatable = Some(seed.into());
        self
    }
}

impl Node for TableSample {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("TABLESAMPLE").ws();
        self.method.accept(r).ws().paren(&[&self.percent]);
        if let Some(seed) = &self.repeatable {
            r.ws().keyword("REPEATABLE").ws().paren(&[seed]);
        }
        r
    }
}

/// The kind of a qualified or natural join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    /// `JOIN`
    #[default]
    Inner,
    /// `LEFT JOIN`
    Left,
    /// `RIGHT JOIN`
    Right,
    /// `FULL JOIN`
    Full,
}

impl JoinKind {
    const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Inner => None,
            Self::Left => Some("LEFT"),
            Self::Right => Some("RIGHT"),
            Self::Full => Some("FULL"),
        }
    }
}

/// How the rows of a qualified join are matched.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinSpec {
    /// `ON condition`
    On(Expr),
    /// `USING (columns)`
    Using(Vec<Ident>),
}

impl JoinSpec {
    /// `ON condition`
    #[must_use]
    pub const fn on(cond: Expr) -> Self {
        Self::On(cond)
    }

    /// `USING (columns)`
    #[must_use]
    pub fn using<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Ident>,
    {
        Self::Using(columns.into_iter().map(Into::into).collect())
    }
}

impl Node for JoinSpec {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::On(cond) => r.keyword("ON").ws().visit(&[cond]),
            Self::Using(columns) => {
                r.keyword("USING").ws().token('(');
                r.require("USING", "column", columns).token(')')
            }
        }
    }
}

/// A joined table.
#[derive(Debug, Clone, PartialEq)]
pub enum Join {
    /// `left CROSS JOIN right`
    Cross {
        /// Left side.
        left: TableRef,
        /// Right side.
        right: TableRef,
    },
    /// `left [kind] JOIN right spec`
    Qualified {
        /// Left side.
        left: TableRef,
        /// Join kind.
        kind: JoinKind,
        /// Right side.
        right: TableRef,
        /// Join condition.
        spec: JoinSpec,
    },
    /// `left NATURAL [kind] JOIN right`
    Natural {
        /// Left side.
        left: TableRef,
        /// Join kind.
        kind: JoinKind,
        /// Right side.
        right: TableRef,
    },
}

fn write_kind(r: &mut Renderer, kind: JoinKind) {
    if let Some(keyword) = kind.keyword() {
        r.keyword(keyword).ws();
    }
}

impl Node for Join {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Cross { left, right } => {
                left.accept(r).ws().keyword("CROSS JOIN").ws();
                right.accept(r)
            }
            Self::Qualified {
                left,
                kind,
                right,
                spec,
            } => {
                left.accept(r).ws();
                write_kind(r, *kind);
                r.keyword("JOIN").ws().visit(&[right, &Ws, spec])
            }
            Self::Natural { left, kind, right } => {
                left.accept(r).ws().keyword("NATURAL").ws();
                write_kind(r, *kind);
                r.keyword("JOIN").ws().visit(&[right])
            }
        }
    }
}

/// An entry of a `FROM` list.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// `[ONLY] name [AS alias] [TABLESAMPLE ...]`
    Table {
        /// Whether descendant tables are excluded.
        only: bool,
        /// Table name.
        name: TableName,
        /// Optional alias.
        alias: Option<Alias>,
        /// Optional sample clause.
        sample: Option<TableSample>,
    },
    /// `(query) AS alias`
    Derived {
        /// Subquery.
        query: Box<Query>,
        /// Alias, required for derived tables.
        alias: Option<Alias>,
    },
    /// A joined table.
    Join(Box<Join>),
    /// `(table) [AS alias]`
    Nested {
        /// Parenthesized table, usually a join.
        table: Box<TableRef>,
        /// Optional alias.
        alias: Option<Alias>,
    },
}

/// Creates a table reference.
#[must_use]
pub fn table(name: impl Into<TableName>) -> TableRef {
    TableRef::Table {
        only: false,
        name: name.into(),
        alias: None,
        sample: None,
    }
}

impl TableRef {
    /// Creates a derived table from a subquery.
    #[must_use]
    pub fn derived(query: impl Into<Query>, alias: impl Into<Alias>) -> Self {
        Self::Derived {
            query: Box::new(query.into()),
            alias: Some(alias.into()),
        }
    }

    /// Sets the alias of this table.
    ///
    /// A joined table cannot carry an alias directly, so it is parenthesized
    /// first: `(a JOIN b USING (id)) AS j`.
    #[must_use]
    pub fn alias(self, name: impl Into<Alias>) -> Self {
        let alias = Some(name.into());
        match self {
            Self::Table {
                only, name, sample, ..
            } => Self::Table {
                only,
                name,
                alias,
                sample,
            },
            Self::Derived { query, .. } => Self::Derived { query, alias },
            Self::Nested { table, .. } => Self::Nested { table, alias },
            join @ Self::Join(_) => Self::Nested {
                table: Box::new(join),
                alias,
            },
        }
    }

    /// Wraps this table in parentheses.
    #[must_use]
    pub fn nested(self) -> Self {
        Self::Nested {
            table: Box::new(self),
            alias: None,
        }
    }

    /// Excludes descendant tables: `ONLY name`.
    ///
    /// Only named tables have descendants. On any other table reference this
    /// is a no-op.
    #[must_use]
    pub fn only(mut self) -> Self {
        if let Self::Table { only, .. } = &mut self {
            *only = true;
        }
        self
    }

    /// Samples the rows of a named table.
    ///
    /// Like [`only`](Self::only), this is a no-op on anything but a named
    /// table.
    #[must_use]
    pub fn sample(mut self, clause: TableSample) -> Self {
        if let Self::Table { sample, .. } = &mut self {
            *sample = Some(clause);
        }
        self
    }

    /// `self CROSS JOIN right`
    #[must_use]
    pub fn cross_join(self, right: impl Into<Self>) -> Self {
        Self::Join(Box::new(Join::Cross {
            left: self,
            right: right.into(),
        }))
    }

    /// `self [kind] JOIN right spec`
    #[must_use]
    pub fn join_with(self, kind: JoinKind, right: impl Into<Self>, spec: JoinSpec) -> Self {
        Self::Join(Box::new(Join::Qualified {
            left: self,
            kind,
            right: right.into(),
            spec,
        }))
    }

    /// `self JOIN right spec`
    #[must_use]
    pub fn join(self, right: impl Into<Self>, spec: JoinSpec) -> Self {
        self.join_with(JoinKind::Inner, right, spec)
    }

    /// `self LEFT JOIN right spec`
    #[must_use]
    pub fn left_join(self, right: impl Into<Self>, spec: JoinSpec) -> Self {
        self.join_with(JoinKind::Left, right, spec)
    }

    /// `self RIGHT JOIN right spec`
    #[must_use]
    pub fn right_join(self, right: impl Into<Self>, spec: JoinSpec) -> Self {
        self.join_with(JoinKind::Right, right, spec)
    }

    /// `self FULL JOIN right spec`
    #[must_use]
    pub fn full_join(self, right: impl Into<Self>, spec: JoinSpec) -> Self {
        self.join_with(JoinKind::Full, right, spec)
    }

    /// `self NATURAL [kind] JOIN right`
    #[must_use]
    pub fn natural_join(self, kind: JoinKind, right: impl Into<Self>) -> Self {
        Self::Join(Box::new(Join::Natural {
            left: self,
            kind,
            right: right.into(),
        }))
    }
}

impl Node for TableRef {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Table {
                only,
                name,
                alias,
                sample,
            } => {
                if *only {
                    r.keyword("ONLY").ws();
                }
                name.accept(r).visit(&[&Ws, alias]).visit(&[&Ws, sample])
            }
            Self::Derived { query, alias } => {
                r.paren(&[&**query]).ws();
                r.require("derived table", "alias", alias)
            }
            Self::Join(join) => join.accept(r),
            Self::Nested { table, alias } => r.paren(&[&**table]).visit(&[&Ws, alias]),
        }
    }
}

impl From<&'static str> for TableRef {
    fn from(name: &'static str) -> Self {
        table(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        table(name)
    }
}

impl From<TableName> for TableRef {
    fn from(name: TableName) -> Self {
        table(name)
    }
}

impl From<crate::name::SchemaQualifiedName> for TableRef {
    fn from(name: crate::name::SchemaQualifiedName) -> Self {
        table(name)
    }
}

impl_display!(TableRef, Join, JoinSpec, Alias, TableSample);
