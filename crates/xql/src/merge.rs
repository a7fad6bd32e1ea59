//! `MERGE`.
//!
//! ```rust
//! use xql::merge::{Merge, MergeInsert, WhenMatched, WhenNotMatched};
//! use xql::{raw, table};
//!
//! let stmt = Merge::into("customer_account")
//!     .alias("ca")
//!     .using(table("recent_transactions").alias("t"))
//!     .on(raw("t.customer_id = ca.customer_id"))
//!     .when(WhenMatched::new().then_set("balance", raw("balance + t.amount")))
//!     .when(WhenNotMatched::new().then_insert(
//!         MergeInsert::values([raw("t.customer_id"), raw("t.amount")])
//!             .columns(["customer_id", "balance"]),
//!     ));
//! assert_eq!(
//!     stmt.to_string(),
//!     "MERGE INTO customer_account AS ca USING recent_transactions AS t \
//!      ON t.customer_id = ca.customer_id \
//!      WHEN MATCHED THEN UPDATE SET balance = balance + t.amount \
//!      WHEN NOT MATCHED THEN INSERT (customer_id, balance) VALUES (t.customer_id, t.amount)"
//! );
//! ```

use xql_core::primitives::{Ident, Sep};
use xql_core::{Node, RenderError, Renderer};

use crate::expr::Expr;
use crate::insert::Overriding;
use crate::name::TableName;
use crate::query::TableRef;
use crate::update::Assignment;

/// What happens to a target row that has a matching source row.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchedAction {
    /// `UPDATE SET assignments`
    Update(Vec<Assignment>),
    /// `DELETE`
    Delete,
    /// `DO NOTHING`
    DoNothing,
}

impl Node for MatchedAction {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Update(assignments) => {
                r.keyword("UPDATE SET").ws();
                r.require("UPDATE SET", "assignment", assignments)
            }
            Self::Delete => r.keyword("DELETE"),
            Self::DoNothing => r.keyword("DO NOTHING"),
        }
    }
}

/// `WHEN MATCHED [AND cond] THEN action`
#[derive(Debug, Clone, PartialEq)]
pub struct WhenMatched {
    /// Extra search condition.
    pub cond: Option<Expr>,
    /// Action taken.
    pub action: MatchedAction,
}

impl WhenMatched {
    /// A clause that does nothing until an action is set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cond: None,
            action: MatchedAction::DoNothing,
        }
    }

    /// `AND cond`
    #[must_use]
    pub fn and(mut self, cond: impl Into<Expr>) -> Self {
        self.cond = Some(cond.into());
        self
    }

    /// Appends `column = value` to the `UPDATE SET` action.
    #[must_use]
    pub fn then_set(mut self, column: impl Into<Ident>, value: impl Into<Expr>) -> Self {
        let assignment = Assignment::Column {
            column: column.into(),
            value: value.into(),
        };
        match &mut self.action {
            MatchedAction::Update(assignments) => assignments.push(assignment),
            action => *action = MatchedAction::Update(vec![assignment]),
        }
        self
    }

    /// `THEN UPDATE SET assignments`
    #[must_use]
    pub fn then_update(mut self, assignments: impl IntoIterator<Item = Assignment>) -> Self {
        self.action = MatchedAction::Update(assignments.into_iter().collect());
        self
    }

    /// `THEN DELETE`
    #[must_use]
    pub fn then_delete(mut self) -> Self {
        self.action = MatchedAction::Delete;
        self
    }

    /// `THEN DO NOTHING`
    #[must_use]
    pub fn then_do_nothing(mut self) -> Self {
        self.action = MatchedAction::DoNothing;
        self
    }
}

impl Default for WhenMatched {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for WhenMatched {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("WHEN MATCHED").ws();
        if let Some(cond) = &self.cond {
            r.keyword("AND").ws();
            cond.accept(r).ws();
        }
        r.keyword("THEN").ws();
        self.action.accept(r)
    }
}

/// The `INSERT` action of a `WHEN NOT MATCHED` clause.
///
/// `values: None` stands for `DEFAULT VALUES`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeInsert {
    /// Target columns.
    pub columns: Vec<Ident>,
    /// Overriding clause.
    pub overriding: Option<Overriding>,
    /// The inserted row.
    pub values: Option<Vec<Expr>>,
}

impl MergeInsert {
    /// `INSERT VALUES (values)`
    #[must_use]
    pub fn values<I, E>(values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Self {
            columns: Vec::new(),
            overriding: None,
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    /// `INSERT DEFAULT VALUES`
    #[must_use]
    pub const fn default_values() -> Self {
        Self {
            columns: Vec::new(),
            overriding: None,
            values: None,
        }
    }

    /// Sets the target columns.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the overriding clause.
    #[must_use]
    pub const fn overriding(mut self, overriding: Overriding) -> Self {
        self.overriding = Some(overriding);
        self
    }
}

impl Node for MergeInsert {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        let Some(values) = &self.values else {
            if !self.columns.is_empty() {
                return r.fail(RenderError::invalid(
                    "INSERT",
                    "a column list cannot be combined with DEFAULT VALUES",
                ));
            }
            return r.keyword("INSERT DEFAULT VALUES");
        };
        if !self.columns.is_empty() && !values.is_empty() && values.len() != self.columns.len() {
            let noun = if values.len() == 1 { "value" } else { "values" };
            return r.fail(RenderError::invalid(
                "INSERT",
                format!(
                    "row has {} {noun}, expected {}",
                    values.len(),
                    self.columns.len()
                ),
            ));
        }

        r.keyword("INSERT").ws();
        if !self.columns.is_empty() {
            r.token('(').join(&self.columns, &Sep).token(')').ws();
        }
        if let Some(overriding) = self.overriding {
            overriding.accept(r).ws();
        }
        r.keyword("VALUES").ws().token('(');
        r.require("VALUES", "value", values).token(')')
    }
}

/// What happens to a source row with no matching target row.
#[derive(Debug, Clone, PartialEq)]
pub enum NotMatchedAction {
    /// `INSERT ...`
    Insert(MergeInsert),
    /// `DO NOTHING`
    DoNothing,
}

impl Node for NotMatchedAction {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Insert(insert) => insert.accept(r),
            Self::DoNothing => r.keyword("DO NOTHING"),
        }
    }
}

/// `WHEN NOT MATCHED [AND cond] THEN action`
#[derive(Debug, Clone, PartialEq)]
pub struct WhenNotMatched {
    /// Extra search condition.
    pub cond: Option<Expr>,
    /// Action taken.
    pub action: NotMatchedAction,
}

impl WhenNotMatched {
    /// A clause that does nothing until an action is set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cond: None,
            action: NotMatchedAction::DoNothing,
        }
    }

    /// `AND cond`
    #[must_use]
    pub fn and(mut self, cond: impl Into<Expr>) -> Self {
        self.cond = Some(cond.into());
        self
    }

    /// `THEN INSERT ...`
    #[must_use]
    pub fn then_insert(mut self, insert: MergeInsert) -> Self {
        self.action = NotMatchedAction::Insert(insert);
        self
    }

    /// `THEN DO NOTHING`
    #[must_use]
    pub fn then_do_nothing(mut self) -> Self {
        self.action = NotMatchedAction::DoNothing;
        self
    }
}

impl Default for WhenNotMatched {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for WhenNotMatched {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("WHEN NOT MATCHED").ws();
        if let Some(cond) = &self.cond {
            r.keyword("AND").ws();
            cond.accept(r).ws();
        }
        r.keyword("THEN").ws();
        self.action.accept(r)
    }
}

/// One `WHEN` clause of a `MERGE`.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeWhen {
    /// `WHEN MATCHED ...`
    Matched(WhenMatched),
    /// `WHEN NOT MATCHED ...`
    NotMatched(WhenNotMatched),
}

impl Node for MergeWhen {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Matched(clause) => clause.accept(r),
            Self::NotMatched(clause) => clause.accept(r),
        }
    }
}

impl From<WhenMatched> for MergeWhen {
    fn from(clause: WhenMatched) -> Self {
        Self::Matched(clause)
    }
}

impl From<WhenNotMatched> for MergeWhen {
    fn from(clause: WhenNotMatched) -> Self {
        Self::NotMatched(clause)
    }
}

/// `MERGE INTO target [AS alias] USING source ON cond when...`
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    /// Target table.
    pub target: TableName,
    /// Correlation name of the target.
    pub alias: Option<Ident>,
    /// Source table. Required.
    pub source: Option<TableRef>,
    /// Join condition. Required.
    pub on: Option<Expr>,
    /// `WHEN` clauses, applied in order. At least one is required.
    pub when: Vec<MergeWhen>,
}

impl Merge {
    /// Starts a merge into `target`.
    #[must_use]
    pub fn into(target: impl Into<TableName>) -> Self {
        Self {
            target: target.into(),
            alias: None,
            source: None,
            on: None,
            when: Vec::new(),
        }
    }

    /// Sets the correlation name of the target.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<Ident>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// `USING source`
    #[must_use]
    pub fn using(mut self, source: impl Into<TableRef>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// `ON cond`
    #[must_use]
    pub fn on(mut self, cond: impl Into<Expr>) -> Self {
        self.on = Some(cond.into());
        self
    }

    /// Appends a `WHEN` clause.
    #[must_use]
    pub fn when(mut self, clause: impl Into<MergeWhen>) -> Self {
        self.when.push(clause.into());
        self
    }
}

impl Node for Merge {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("MERGE INTO").ws();
        self.target.accept(r);
        if let Some(alias) = &self.alias {
            r.ws().keyword("AS").ws();
            alias.accept(r);
        }
        r.ws().keyword("USING").ws();
        r.require("MERGE", "source", &self.source)
            .ws()
            .keyword("ON")
            .ws();
        r.require("MERGE", "join condition", &self.on).ws();
        r.require("MERGE", "WHEN clause", &Clauses(&self.when))
    }
}

/// `WHEN` clauses separated by whitespace.
struct Clauses<'a>(&'a [MergeWhen]);

impl Node for Clauses<'_> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        for (i, clause) in self.0.iter().enumerate() {
            if i > 0 {
                r.ws();
            }
            clause.accept(r);
        }
        r
    }

    fn is_absent(&self) -> bool {
        self.0.is_empty()
    }
}

impl_display!(
    Merge,
    MergeWhen,
    WhenMatched,
    WhenNotMatched,
    MatchedAction,
    NotMatchedAction,
    MergeInsert,
);
