//! Column and table constraints.
//!
//! ```rust
//! use xql::constraint::{ColumnConstraint, References, ReferentialAction, TableConstraint};
//!
//! assert_eq!(
//!     ColumnConstraint::references(References::new("cities").columns(["name"])).to_string(),
//!     "REFERENCES cities (name)"
//! );
//! assert_eq!(
//!     TableConstraint::foreign_key(["city"], References::new("cities").on_delete(ReferentialAction::Cascade))
//!         .to_string(),
//!     "FOREIGN KEY (city) REFERENCES cities ON DELETE CASCADE"
//! );
//! ```

use xql_core::primitives::{Ident, Keyword, Ws};
use xql_core::{Node, Renderer};

use crate::expr::Expr;
use crate::name::{SchemaQualifiedName, TableName};
use crate::types::keyword_enum;

fn idents<I, S>(names: I) -> Vec<Ident>
where
    I: IntoIterator<Item = S>,
    S: Into<Ident>,
{
    names.into_iter().map(Into::into).collect()
}

keyword_enum! {
    /// When a deferrable constraint is checked.
    pub enum CheckTime {
        InitiallyDeferred => "INITIALLY DEFERRED",
        InitiallyImmediate => "INITIALLY IMMEDIATE",
    }
}

/// Constraint characteristics, e.g. `INITIALLY DEFERRED DEFERRABLE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Characteristics {
    /// Check time.
    pub check_time: Option<CheckTime>,
    /// `DEFERRABLE` (true) or `NOT DEFERRABLE` (false).
    pub deferrable: Option<bool>,
    /// `ENFORCED` (true) or `NOT ENFORCED` (false).
    pub enforced: Option<bool>,
}

impl Characteristics {
    /// Creates empty characteristics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            check_time: None,
            deferrable: None,
            enforced: None,
        }
    }

    /// Sets the check time.
    #[must_use]
    pub const fn check_time(mut self, check_time: CheckTime) -> Self {
        self.check_time = Some(check_time);
        self
    }

    /// Sets deferrability.
    #[must_use]
    pub const fn deferrable(mut self, deferrable: bool) -> Self {
        self.deferrable = Some(deferrable);
        self
    }

    /// Sets enforcement.
    #[must_use]
    pub const fn enforced(mut self, enforced: bool) -> Self {
        self.enforced = Some(enforced);
        self
    }
}

impl Node for Characteristics {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        let deferrable = self
            .deferrable
            .map(|d| Keyword(if d { "DEFERRABLE" } else { "NOT DEFERRABLE" }));
        let enforced = self
            .enforced
            .map(|e| Keyword(if e { "ENFORCED" } else { "NOT ENFORCED" }));
        let parts: [&dyn Node; 3] = [&self.check_time, &deferrable, &enforced];
        let mut first = true;
        for part in parts.into_iter().filter(|p| !p.is_absent()) {
            if !first {
                r.ws();
            }
            first = false;
            part.accept(r);
        }
        r
    }

    fn is_absent(&self) -> bool {
        self.check_time.is_none() && self.deferrable.is_none() && self.enforced.is_none()
    }
}

keyword_enum! {
    /// `MATCH` type of a foreign key.
    pub enum MatchType {
        Simple => "SIMPLE",
        Full => "FULL",
        Partial => "PARTIAL",
    }
}

keyword_enum! {
    /// Action taken when a referenced row changes.
    pub enum ReferentialAction {
        NoAction => "NO ACTION",
        Cascade => "CASCADE",
        SetNull => "SET NULL",
        SetDefault => "SET DEFAULT",
        Restrict => "RESTRICT",
    }
}

/// `REFERENCES table [(columns)] [MATCH m] [ON UPDATE a] [ON DELETE a]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct References {
    /// Referenced table.
    pub table: TableName,
    /// Referenced columns.
    pub columns: Vec<Ident>,
    /// Match type.
    pub match_type: Option<MatchType>,
    /// Update action.
    pub on_update: Option<ReferentialAction>,
    /// Delete action.
    pub on_delete: Option<ReferentialAction>,
}

impl References {
    /// References `table` by its primary key.
    #[must_use]
    pub fn new(table: impl Into<TableName>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            match_type: None,
            on_update: None,
            on_delete: None,
        }
    }

    /// Sets the referenced columns.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        self.columns = idents(columns);
        self
    }

    /// Sets the match type.
    #[must_use]
    pub const fn match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    /// Sets the update action.
    #[must_use]
    pub const fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }

    /// Sets the delete action.
    #[must_use]
    pub const fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }
}

impl Node for References {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("REFERENCES").ws().visit(&[&self.table]);
        if !self.columns.is_empty() {
            r.ws().paren(&[&self.columns]);
        }
        r.visit(&[&Ws, &Keyword("MATCH"), &Ws, &self.match_type])
            .visit(&[&Ws, &Keyword("ON UPDATE"), &Ws, &self.on_update])
            .visit(&[&Ws, &Keyword("ON DELETE"), &Ws, &self.on_delete])
    }
}

keyword_enum! {
    /// Uniqueness kind.
    pub enum UniqueKind {
        Unique => "UNIQUE",
        PrimaryKey => "PRIMARY KEY",
    }
}

/// The body of a column constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraintKind {
    /// `NOT NULL`
    NotNull,
    /// `UNIQUE` or `PRIMARY KEY`
    Unique(UniqueKind),
    /// `REFERENCES ...`
    References(References),
    /// `CHECK (cond)`
    Check(Expr),
}

/// `[CONSTRAINT name] constraint [characteristics]` attached to a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConstraint {
    /// Constraint name.
    pub name: Option<SchemaQualifiedName>,
    /// Constraint body.
    pub kind: ColumnConstraintKind,
    /// Characteristics.
    pub characteristics: Option<Characteristics>,
}

impl ColumnConstraint {
    /// Creates an unnamed constraint.
    #[must_use]
    pub const fn new(kind: ColumnConstraintKind) -> Self {
        Self {
            name: None,
            kind,
            characteristics: None,
        }
    }

    /// `NOT NULL`
    #[must_use]
    pub const fn not_null() -> Self {
        Self::new(ColumnConstraintKind::NotNull)
    }

    /// `UNIQUE`
    #[must_use]
    pub const fn unique() -> Self {
        Self::new(ColumnConstraintKind::Unique(UniqueKind::Unique))
    }

    /// `PRIMARY KEY`
    #[must_use]
    pub const fn primary_key() -> Self {
        Self::new(ColumnConstraintKind::Unique(UniqueKind::PrimaryKey))
    }

    /// `REFERENCES ...`
    #[must_use]
    pub const fn references(references: References) -> Self {
        Self::new(ColumnConstraintKind::References(references))
    }

    /// `CHECK (cond)`
    #[must_use]
    pub const fn check(cond: Expr) -> Self {
        Self::new(ColumnConstraintKind::Check(cond))
    }

    /// Names the constraint.
    #[must_use]
    pub fn named(mut self, name: impl Into<SchemaQualifiedName>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the characteristics.
    #[must_use]
    pub const fn characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics = Some(characteristics);
        self
    }
}

impl Node for ColumnConstraint {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.visit(&[&Keyword("CONSTRAINT"), &Ws, &self.name, &Ws]);
        match &self.kind {
            ColumnConstraintKind::NotNull => r.keyword("NOT NULL"),
            ColumnConstraintKind::Unique(kind) => kind.accept(r),
            ColumnConstraintKind::References(references) => references.accept(r),
            ColumnConstraintKind::Check(cond) => r.keyword("CHECK").ws().paren(&[cond]),
        };
        r.visit(&[&Ws, &self.characteristics])
    }
}

/// The body of a table constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind {
    /// `UNIQUE (columns)` or `PRIMARY KEY (columns)`
    Unique {
        /// Uniqueness kind.
        kind: UniqueKind,
        /// Constrained columns.
        columns: Vec<Ident>,
    },
    /// `FOREIGN KEY (columns) REFERENCES ...`
    ForeignKey {
        /// Referencing columns.
        columns: Vec<Ident>,
        /// Referenced table.
        references: References,
    },
    /// `CHECK (cond)`
    Check(Expr),
}

/// `[CONSTRAINT name] constraint [characteristics]` as a table element.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    /// Constraint name.
    pub name: Option<SchemaQualifiedName>,
    /// Constraint body.
    pub kind: TableConstraintKind,
    /// Characteristics.
    pub characteristics: Option<Characteristics>,
}

impl TableConstraint {
    /// Creates an unnamed constraint.
    #[must_use]
    pub const fn new(kind: TableConstraintKind) -> Self {
        Self {
            name: None,
            kind,
            characteristics: None,
        }
    }

    /// `UNIQUE (columns)`
    #[must_use]
    pub fn unique<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self::new(TableConstraintKind::Unique {
            kind: UniqueKind::Unique,
            columns: idents(columns),
        })
    }

    /// `PRIMARY KEY (columns)`
    #[must_use]
    pub fn primary_key<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self::new(TableConstraintKind::Unique {
            kind: UniqueKind::PrimaryKey,
            columns: idents(columns),
        })
    }

    /// `FOREIGN KEY (columns) REFERENCES ...`
    #[must_use]
    pub fn foreign_key<I, S>(columns: I, references: References) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self::new(TableConstraintKind::ForeignKey {
            columns: idents(columns),
            references,
        })
    }

    /// `CHECK (cond)`
    #[must_use]
    pub const fn check(cond: Expr) -> Self {
        Self::new(TableConstraintKind::Check(cond))
    }

    /// Names the constraint.
    #[must_use]
    pub fn named(mut self, name: impl Into<SchemaQualifiedName>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the characteristics.
    #[must_use]
    pub const fn characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics = Some(characteristics);
        self
    }
}

impl Node for TableConstraint {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.visit(&[&Keyword("CONSTRAINT"), &Ws, &self.name, &Ws]);
        match &self.kind {
            TableConstraintKind::Unique { kind, columns } => {
                kind.accept(r).ws().token('(');
                r.require("table constraint", "column", columns).token(')')
            }
            TableConstraintKind::ForeignKey {
                columns,
                references,
            } => {
                r.keyword("FOREIGN KEY").ws().token('(');
                r.require("foreign key", "column", columns)
                    .token(')')
                    .ws();
                references.accept(r)
            }
            TableConstraintKind::Check(cond) => r.keyword("CHECK").ws().paren(&[cond]),
        };
        r.visit(&[&Ws, &self.characteristics])
    }
}

impl_display!(
    CheckTime,
    Characteristics,
    MatchType,
    ReferentialAction,
    References,
    UniqueKind,
    ColumnConstraint,
    TableConstraint,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::col;

    #[test]
    fn test_column_constraints() {
        assert_eq!(ColumnConstraint::not_null().to_string(), "NOT NULL");
        assert_eq!(
            ColumnConstraint::primary_key().named("firstkey").to_string(),
            "CONSTRAINT firstkey PRIMARY KEY"
        );
        assert_eq!(
            ColumnConstraint::check(col("price").gt(0)).to_string(),
            "CHECK (price > 0)"
        );
    }

    #[test]
    fn test_references() {
        let refs = References::new("weather")
            .columns(["city", "date"])
            .match_type(MatchType::Full)
            .on_update(ReferentialAction::SetNull)
            .on_delete(ReferentialAction::Restrict);
        assert_eq!(
            refs.to_string(),
            "REFERENCES weather (city, date) MATCH FULL ON UPDATE SET NULL ON DELETE RESTRICT"
        );
    }

    #[test]
    fn test_characteristics() {
        let c = Characteristics::new()
            .check_time(CheckTime::InitiallyDeferred)
            .deferrable(true)
            .enforced(false);
        assert_eq!(c.to_string(), "INITIALLY DEFERRED DEFERRABLE NOT ENFORCED");
        assert_eq!(
            ColumnConstraint::unique()
                .characteristics(Characteristics::new().deferrable(false))
                .to_string(),
            "UNIQUE NOT DEFERRABLE"
        );
        assert_eq!(
            ColumnConstraint::unique()
                .characteristics(Characteristics::new())
                .to_string(),
            "UNIQUE"
        );
    }

    #[test]
    fn test_table_constraints() {
        assert_eq!(
            TableConstraint::unique(["date_prod"]).named("production").to_string(),
            "CONSTRAINT production UNIQUE (date_prod)"
        );
        assert_eq!(
            TableConstraint::primary_key(["a", "b"]).to_string(),
            "PRIMARY KEY (a, b)"
        );
        assert_eq!(
            TableConstraint::check(col("len").gt(0)).to_string(),
            "CHECK (len > 0)"
        );
    }

    #[test]
    fn test_table_constraint_without_columns_fails() {
        let err = xql_core::render(&TableConstraint::unique(Vec::<Ident>::new())).unwrap_err();
        assert_eq!(err, xql_core::RenderError::missing("table constraint", "column"));
    }
}
