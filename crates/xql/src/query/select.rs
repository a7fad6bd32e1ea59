//! `SELECT` builder using the typestate pattern.
//!
//! Each clause moves the builder into a new state, and each state only
//! exposes the clauses that may still follow. Writing `WHERE` after
//! `ORDER BY`, or `HAVING` twice, does not compile.

use std::fmt;
use std::marker::PhantomData;

use xql_core::{Node, Renderer};

use super::{
    Fetch, ForLock, GroupBy, GroupingElement, Offset, Query, SelectItem, SetQuantifier, SortKey,
    TableRef, WindowDef,
};
use crate::expr::Expr;

// Typestate markers (zero-sized types)

/// Marker: select list specified.
#[derive(Debug, Clone, Copy)]
pub struct Projected;
/// Marker: `FROM` specified.
#[derive(Debug, Clone, Copy)]
pub struct Sourced;
/// Marker: `WHERE` specified.
#[derive(Debug, Clone, Copy)]
pub struct Filtered;
/// Marker: `GROUP BY` specified.
#[derive(Debug, Clone, Copy)]
pub struct Grouped;
/// Marker: `HAVING` specified.
#[derive(Debug, Clone, Copy)]
pub struct Restricted;
/// Marker: `WINDOW` specified.
#[derive(Debug, Clone, Copy)]
pub struct Windowed;
/// Marker: `ORDER BY` specified.
#[derive(Debug, Clone, Copy)]
pub struct Ordered;
/// Marker: `LIMIT` specified.
#[derive(Debug, Clone, Copy)]
pub struct Limited;
/// Marker: `OFFSET` specified.
#[derive(Debug, Clone, Copy)]
pub struct Skipped;
/// Marker: `FETCH` specified.
#[derive(Debug, Clone, Copy)]
pub struct Fetched;
/// Marker: locking clause specified.
#[derive(Debug, Clone, Copy)]
pub struct Locked;

mod sealed {
    pub trait Sealed {}
}

/// States that accept `WHERE`.
pub trait CanFilter: sealed::Sealed {}
/// States that accept `GROUP BY`.
pub trait CanGroup: sealed::Sealed {}
/// States that accept `HAVING`.
pub trait CanHave: sealed::Sealed {}
/// States that accept `WINDOW`.
pub trait CanWindow: sealed::Sealed {}
/// States that accept `ORDER BY`.
pub trait CanOrder: sealed::Sealed {}
/// States that accept `LIMIT`.
pub trait CanLimit: sealed::Sealed {}
/// States that accept `OFFSET`.
pub trait CanOffset: sealed::Sealed {}
/// States that accept `FETCH`.
pub trait CanFetch: sealed::Sealed {}
/// States that accept a locking clause.
pub trait CanLock: sealed::Sealed {}

macro_rules! allow {
    ($trait:path: $($state:ty),+) => {$(
        impl $trait for $state {}
    )+};
}

allow!(sealed::Sealed: Projected, Sourced, Filtered, Grouped, Restricted, Windowed, Ordered, Limited, Skipped, Fetched, Locked);
allow!(CanFilter: Sourced);
allow!(CanGroup: Sourced, Filtered);
allow!(CanHave: Sourced, Filtered, Grouped);
allow!(CanWindow: Sourced, Filtered, Grouped, Restricted);
allow!(CanOrder: Projected, Sourced, Filtered, Grouped, Restricted, Windowed);
allow!(CanLimit: Projected, Sourced, Filtered, Grouped, Restricted, Windowed, Ordered);
allow!(CanOffset: Projected, Sourced, Filtered, Grouped, Restricted, Windowed, Ordered, Limited);
allow!(CanFetch: Projected, Sourced, Filtered, Grouped, Restricted, Windowed, Ordered, Skipped);
allow!(CanLock: Projected, Sourced, Filtered, Grouped, Restricted, Windowed, Ordered, Limited, Skipped, Fetched);

/// A `SELECT` statement builder.
///
/// ```rust
/// use xql::{col, Select};
///
/// let query = Select::new([col("a").alias("value"), col("b").plus(col("c")).alias("sum")])
///     .from("table1");
/// assert_eq!(query.to_string(), "SELECT a AS value, b + c AS sum FROM table1");
/// ```
#[derive(Debug, Clone)]
pub struct Select<S = Projected> {
    query: Query,
    _state: PhantomData<S>,
}

impl<S> Select<S> {
    fn step<T>(self) -> Select<T> {
        Select {
            query: self.query,
            _state: PhantomData,
        }
    }

    /// Returns the query built so far.
    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// Consumes the builder and returns the query.
    #[must_use]
    pub fn into_query(self) -> Query {
        self.query
    }
}

impl Select<Projected> {
    /// Creates a `SELECT` with the given select list.
    #[must_use]
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SelectItem>,
    {
        Self {
            query: Query {
                items: items.into_iter().map(Into::into).collect(),
                ..Query::default()
            },
            _state: PhantomData,
        }
    }

    /// Creates `SELECT *`.
    #[must_use]
    pub fn all() -> Self {
        Self::new([SelectItem::All])
    }

    /// Adds `DISTINCT`.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.query.quantifier = Some(SetQuantifier::Distinct);
        self
    }

    /// Adds an explicit set quantifier.
    #[must_use]
    pub const fn quantifier(mut self, quantifier: SetQuantifier) -> Self {
        self.query.quantifier = Some(quantifier);
        self
    }

    /// Specifies the table to select from.
    #[must_use]
    pub fn from(self, table: impl Into<TableRef>) -> Select<Sourced> {
        self.from_tables([table])
    }

    /// Specifies several tables to select from.
    #[must_use]
    pub fn from_tables<I, T>(mut self, tables: I) -> Select<Sourced>
    where
        I: IntoIterator<Item = T>,
        T: Into<TableRef>,
    {
        self.query.from = tables.into_iter().map(Into::into).collect();
        self.step()
    }
}

impl<S: CanFilter> Select<S> {
    /// Adds a `WHERE` clause.
    #[must_use]
    pub fn where_clause(mut self, cond: Expr) -> Select<Filtered> {
        self.query.where_clause = Some(cond);
        self.step()
    }
}

impl<S: CanGroup> Select<S> {
    /// Adds a `GROUP BY` clause.
    #[must_use]
    pub fn group_by<I, E>(self, elements: I) -> Select<Grouped>
    where
        I: IntoIterator<Item = E>,
        E: Into<GroupingElement>,
    {
        self.group_by_clause(GroupBy::new(elements))
    }

    /// Adds a prebuilt `GROUP BY` clause.
    #[must_use]
    pub fn group_by_clause(mut self, group_by: GroupBy) -> Select<Grouped> {
        self.query.group_by = Some(group_by);
        self.step()
    }
}

impl<S: CanHave> Select<S> {
    /// Adds a `HAVING` clause.
    #[must_use]
    pub fn having(mut self, cond: Expr) -> Select<Restricted> {
        self.query.having = Some(cond);
        self.step()
    }
}

impl<S: CanWindow> Select<S> {
    /// Adds a `WINDOW` clause.
    #[must_use]
    pub fn window(mut self, windows: impl IntoIterator<Item = WindowDef>) -> Select<Windowed> {
        self.query.window = windows.into_iter().collect();
        self.step()
    }
}

impl<S: CanOrder> Select<S> {
    /// Adds an `ORDER BY` clause.
    #[must_use]
    pub fn order_by<I, K>(mut self, keys: I) -> Select<Ordered>
    where
        I: IntoIterator<Item = K>,
        K: Into<SortKey>,
    {
        self.query.order_by = keys.into_iter().map(Into::into).collect();
        self.step()
    }
}

impl<S: CanLimit> Select<S> {
    /// Adds a `LIMIT` clause.
    #[must_use]
    pub fn limit(mut self, count: u64) -> Select<Limited> {
        self.query.limit = Some(count);
        self.step()
    }
}

impl<S: CanOffset> Select<S> {
    /// Adds an `OFFSET` clause.
    #[must_use]
    pub fn offset(mut self, offset: impl Into<Offset>) -> Select<Skipped> {
        self.query.offset = Some(offset.into());
        self.step()
    }
}

impl<S: CanFetch> Select<S> {
    /// Adds a `FETCH` clause.
    #[must_use]
    pub fn fetch(mut self, fetch: Fetch) -> Select<Fetched> {
        self.query.fetch = Some(fetch);
        self.step()
    }
}

impl<S: CanLock> Select<S> {
    /// Adds a locking clause.
    #[must_use]
    pub fn lock(mut self, lock: ForLock) -> Select<Locked> {
        self.query.lock = Some(lock);
        self.step()
    }

    /// Adds `FOR UPDATE`.
    #[must_use]
    pub fn for_update(self) -> Select<Locked> {
        self.lock(ForLock::update())
    }
}

/// `SELECT * FROM table`
#[must_use]
pub fn select_all_from(table: impl Into<TableRef>) -> Select<Sourced> {
    Select::all().from(table)
}

impl<S> Node for Select<S> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.query.accept(r)
    }
}

impl<S> From<Select<S>> for Query {
    fn from(select: Select<S>) -> Self {
        select.query
    }
}

impl<S> fmt::Display for Select<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)
    }
}
