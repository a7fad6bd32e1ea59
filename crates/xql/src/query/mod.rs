//! Query specifications.
//!
//! [`Query`] is the plain data of a `SELECT` statement. [`Select`] builds
//! one with the clause order checked at compile time.

mod from;
mod group_by;
mod limit;
mod lock;
pub(crate) mod order_by;
mod select;
mod window;

pub use from::{table, Alias, Join, JoinKind, JoinSpec, SampleMethod, TableRef, TableSample};
pub use group_by::{GroupBy, GroupingElement};
pub use limit::{Fetch, Offset, RowsKeyword};
pub use lock::{ForLock, LockMode, LockWait};
pub use order_by::{NullOrdering, Ordering, SortKey};
pub use select::{
    select_all_from, CanFetch, CanFilter, CanGroup, CanHave, CanLimit, CanLock, CanOffset,
    CanOrder, CanWindow, Fetched, Filtered, Grouped, Limited, Locked, Ordered, Projected,
    Restricted, Select, Skipped, Sourced, Windowed,
};
pub use window::{FrameBound, FrameExclusion, FrameUnits, WindowDef, WindowFrame, WindowSpec};

use xql_core::primitives::{Ident, Keyword, Uint, Ws};
use xql_core::{Node, Renderer};

use crate::expr::Expr;
use crate::name::{ColumnRef, TableName};

/// `ALL` or `DISTINCT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantifier {
    /// `ALL`
    All,
    /// `DISTINCT`
    Distinct,
}

impl Node for SetQuantifier {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword(match self {
            Self::All => "ALL",
            Self::Distinct => "DISTINCT",
        })
    }
}

/// An entry of a select list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// `*`
    All,
    /// `table.*`
    AllOf(TableName),
    /// `expr [AS alias]`
    Expr {
        /// Selected expression.
        expr: Expr,
        /// Optional alias.
        alias: Option<Ident>,
    },
}

impl Node for SelectItem {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::All => r.token('*'),
            Self::AllOf(name) => name.accept(r).token('.').token('*'),
            Self::Expr { expr, alias } => expr
                .accept(r)
                .visit(&[&Ws, &Keyword("AS"), &Ws, alias]),
        }
    }
}

impl From<Expr> for SelectItem {
    fn from(expr: Expr) -> Self {
        Self::Expr { expr, alias: None }
    }
}

impl From<ColumnRef> for SelectItem {
    fn from(column: ColumnRef) -> Self {
        Expr::Column(column).into()
    }
}

impl From<&'static str> for SelectItem {
    fn from(column: &'static str) -> Self {
        ColumnRef::new(column).into()
    }
}

/// A `SELECT` statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    /// `ALL` or `DISTINCT`.
    pub quantifier: Option<SetQuantifier>,
    /// Select list.
    pub items: Vec<SelectItem>,
    /// `FROM` list.
    pub from: Vec<TableRef>,
    /// `WHERE` condition.
    pub where_clause: Option<Expr>,
    /// `GROUP BY` clause.
    pub group_by: Option<GroupBy>,
    /// `HAVING` condition.
    pub having: Option<Expr>,
    /// `WINDOW` definitions.
    pub window: Vec<WindowDef>,
    /// `ORDER BY` keys.
    pub order_by: Vec<SortKey>,
    /// `LIMIT` row count.
    pub limit: Option<u64>,
    /// `OFFSET` clause.
    pub offset: Option<Offset>,
    /// `FETCH` clause.
    pub fetch: Option<Fetch>,
    /// Locking clause.
    pub lock: Option<ForLock>,
}

impl Node for Query {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("SELECT")
            .visit(&[&Ws, &self.quantifier])
            .ws()
            .require("SELECT", "select list", &self.items)
            .visit(&[&Ws, &Keyword("FROM"), &Ws, &self.from])
            .visit(&[&Ws, &Keyword("WHERE"), &Ws, &self.where_clause])
            .visit(&[&Ws, &self.group_by])
            .visit(&[&Ws, &Keyword("HAVING"), &Ws, &self.having])
            .visit(&[&Ws, &Keyword("WINDOW"), &Ws, &self.window])
            .visit(&[&Ws, &Keyword("ORDER BY"), &Ws, &self.order_by])
            .visit(&[&Ws, &Keyword("LIMIT"), &Ws, &self.limit.map(Uint)])
            .visit(&[&Ws, &self.offset])
            .visit(&[&Ws, &self.fetch])
            .visit(&[&Ws, &self.lock])
    }
}

impl_display!(Query, SelectItem);
