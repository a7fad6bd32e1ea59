//! Column definitions.
//!
//! A [`ColumnDef`] is built from its name and a list of options. Options
//! that set a single-valued field (type, value, collation) overwrite each
//! other, last one wins. Constraint options append.
//!
//! ```rust
//! use xql::column::{default, not_null, ty};
//! use xql::types::IntType;
//! use xql::ColumnDef;
//!
//! let col = ColumnDef::new("qty", [ty(IntType::Integer), default(0), not_null()]);
//! assert_eq!(col.to_string(), "qty INTEGER DEFAULT 0 NOT NULL");
//! ```

use xql_core::primitives::{Ident, Keyword, Ws};
use xql_core::{build, Node, Opt, RenderError, Renderer};

use crate::constraint::{ColumnConstraint, References};
use crate::default::DefaultClause;
use crate::expr::Expr;
use crate::name::{SchemaQualifiedName, TableName};
use crate::seq::Identity;
use crate::types::{Collate, DataType};

/// How a column obtains its value when none is given.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// `DEFAULT ...`
    Default(DefaultClause),
    /// `GENERATED ... AS IDENTITY`
    Identity(Identity),
    /// `GENERATED ALWAYS AS (expr)`
    Generated(Expr),
    /// `GENERATED ALWAYS AS ROW START`
    RowStart,
    /// `GENERATED ALWAYS AS ROW END`
    RowEnd,
}

impl Node for ColumnValue {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Default(clause) => clause.accept(r),
            Self::Identity(identity) => identity.accept(r),
            Self::Generated(expr) => r.keyword("GENERATED ALWAYS AS").ws().paren(&[expr]),
            Self::RowStart => r.keyword("GENERATED ALWAYS AS ROW START"),
            Self::RowEnd => r.keyword("GENERATED ALWAYS AS ROW END"),
        }
    }
}

/// `name [type] [value] [constraints...] [COLLATE c]`
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name.
    pub name: Ident,
    /// Data type or domain.
    pub ty: Option<DataType>,
    /// Value specification.
    pub value: Option<ColumnValue>,
    /// Constraints, in declaration order.
    pub constraints: Vec<ColumnConstraint>,
    /// Collation.
    pub collate: Option<Collate>,
}

impl ColumnDef {
    /// Creates a column definition.
    #[must_use]
    pub fn new(name: impl Into<Ident>, opts: impl IntoIterator<Item = Opt<Self>>) -> Self {
        build(
            Self {
                name: name.into(),
                ty: None,
                value: None,
                constraints: Vec::new(),
                collate: None,
            },
            opts,
        )
    }

    /// Converts this column into column options of a typed table.
    ///
    /// The name and constraints carry over, and so does the value when it
    /// is a default clause.
    #[must_use]
    pub fn with_options(self) -> ColumnOptions {
        let default = match self.value {
            Some(ColumnValue::Default(clause)) => Some(clause),
            _ => None,
        };
        ColumnOptions {
            name: self.name,
            scope: None,
            default,
            constraints: self.constraints,
        }
    }
}

impl Node for ColumnDef {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.name.accept(r);
        r.visit(&[&Ws, &self.ty])
            .visit(&[&Ws, &self.value])
            .visit_if_present(&self.constraints, &[&Ws])
            .join(&self.constraints, &Ws)
            .visit(&[&Ws, &self.collate])
    }
}

/// Sets the data type.
#[must_use]
pub fn ty(ty: impl Into<DataType>) -> Opt<ColumnDef> {
    let ty = ty.into();
    Opt::new(move |c: &mut ColumnDef| c.ty = Some(ty))
}

/// Sets a domain as the data type.
#[must_use]
pub fn domain(name: impl Into<SchemaQualifiedName>) -> Opt<ColumnDef> {
    ty(DataType::user_defined(name))
}

/// Sets the value specification.
#[must_use]
pub fn value(value: ColumnValue) -> Opt<ColumnDef> {
    Opt::new(move |c: &mut ColumnDef| c.value = Some(value))
}

/// `DEFAULT ...`
#[must_use]
pub fn default(clause: impl Into<DefaultClause>) -> Opt<ColumnDef> {
    value(ColumnValue::Default(clause.into()))
}

/// `GENERATED ... AS IDENTITY`
#[must_use]
pub fn identity(identity: Identity) -> Opt<ColumnDef> {
    value(ColumnValue::Identity(identity))
}

/// `GENERATED ALWAYS AS (expr)`
#[must_use]
pub fn generated(expr: impl Into<Expr>) -> Opt<ColumnDef> {
    value(ColumnValue::Generated(expr.into()))
}

/// `GENERATED ALWAYS AS ROW START`
#[must_use]
pub fn row_start() -> Opt<ColumnDef> {
    value(ColumnValue::RowStart)
}

/// `GENERATED ALWAYS AS ROW END`
#[must_use]
pub fn row_end() -> Opt<ColumnDef> {
    value(ColumnValue::RowEnd)
}

/// Appends a constraint.
#[must_use]
pub fn constraint(constraint: ColumnConstraint) -> Opt<ColumnDef> {
    Opt::new(move |c: &mut ColumnDef| c.constraints.push(constraint))
}

/// `NOT NULL`
#[must_use]
pub fn not_null() -> Opt<ColumnDef> {
    constraint(ColumnConstraint::not_null())
}

/// `UNIQUE`
#[must_use]
pub fn unique() -> Opt<ColumnDef> {
    constraint(ColumnConstraint::unique())
}

/// `PRIMARY KEY`
#[must_use]
pub fn primary_key() -> Opt<ColumnDef> {
    constraint(ColumnConstraint::primary_key())
}

/// `REFERENCES ...`
#[must_use]
pub fn references(references: References) -> Opt<ColumnDef> {
    constraint(ColumnConstraint::references(references))
}

/// `CHECK (cond)`
#[must_use]
pub fn check(cond: impl Into<Expr>) -> Opt<ColumnDef> {
    constraint(ColumnConstraint::check(cond.into()))
}

/// `COLLATE c`
#[must_use]
pub fn collate(collate: impl Into<Collate>) -> Opt<ColumnDef> {
    let collate = collate.into();
    Opt::new(move |c: &mut ColumnDef| c.collate = Some(collate))
}

/// `name WITH OPTIONS [SCOPE t] [DEFAULT ...] [constraints...]`, an element
/// of a typed table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnOptions {
    /// Column name.
    pub name: Ident,
    /// Referenceable table of a `REF` column.
    pub scope: Option<TableName>,
    /// Default clause.
    pub default: Option<DefaultClause>,
    /// Constraints.
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnOptions {
    /// Creates column options with nothing set.
    #[must_use]
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            scope: None,
            default: None,
            constraints: Vec::new(),
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, table: impl Into<TableName>) -> Self {
        self.scope = Some(table.into());
        self
    }

    /// Sets the default.
    #[must_use]
    pub fn default(mut self, clause: impl Into<DefaultClause>) -> Self {
        self.default = Some(clause.into());
        self
    }

    /// Appends a constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

impl Node for ColumnOptions {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        if self.scope.is_none() && self.default.is_none() && self.constraints.is_empty() {
            return r.fail(RenderError::invalid(
                "column options",
                format!("`{}` has no options", self.name.as_str()),
            ));
        }
        self.name.accept(r).ws().keyword("WITH OPTIONS");
        r.visit(&[&Ws, &Keyword("SCOPE"), &Ws, &self.scope])
            .visit(&[&Ws, &self.default])
            .visit_if_present(&self.constraints, &[&Ws])
            .join(&self.constraints, &Ws)
    }
}

impl From<ColumnDef> for ColumnOptions {
    fn from(def: ColumnDef) -> Self {
        def.with_options()
    }
}

impl_display!(ColumnValue, ColumnDef, ColumnOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ReferentialAction;
    use crate::expr::col;
    use crate::seq::SequenceOption;
    use crate::types::{CharType, DateTimeType, IntType, NumericType};

    #[test]
    fn test_name_only() {
        assert_eq!(ColumnDef::new("a", []).to_string(), "a");
    }

    #[test]
    fn test_field_order() {
        let c = ColumnDef::new(
            "name",
            [
                collate("C"),
                not_null(),
                ty(CharType::varchar(80)),
                default("anon"),
                unique(),
            ],
        );
        assert_eq!(
            c.to_string(),
            "name VARCHAR(80) DEFAULT 'anon' NOT NULL UNIQUE COLLATE C"
        );
    }

    #[test]
    fn test_single_valued_options_last_wins() {
        let c = ColumnDef::new(
            "n",
            [ty(IntType::Int), ty(IntType::BigInt), default(1), row_start()],
        );
        assert_eq!(c.to_string(), "n BIGINT GENERATED ALWAYS AS ROW START");
    }

    #[test]
    fn test_identity_and_generation() {
        let id = ColumnDef::new(
            "id",
            [
                ty(IntType::BigInt),
                identity(Identity::always().option(SequenceOption::StartWith(1))),
                primary_key(),
            ],
        );
        assert_eq!(
            id.to_string(),
            "id BIGINT GENERATED ALWAYS AS IDENTITY (START WITH 1) PRIMARY KEY"
        );

        let total = ColumnDef::new(
            "total",
            [ty(NumericType::numeric(10, 2)), generated(col("price").plus(col("tax")))],
        );
        assert_eq!(
            total.to_string(),
            "total NUMERIC(10, 2) GENERATED ALWAYS AS (price + tax)"
        );
    }

    #[test]
    fn test_system_time_columns() {
        let from = ColumnDef::new(
            "ValidFrom",
            [ty(DateTimeType::datetime2()), row_start(), not_null()],
        );
        assert_eq!(
            from.to_string(),
            "ValidFrom DATETIME2 GENERATED ALWAYS AS ROW START NOT NULL"
        );
        assert_eq!(
            ColumnDef::new("ValidTo", [ty(DateTimeType::datetime2()), row_end()]).to_string(),
            "ValidTo DATETIME2 GENERATED ALWAYS AS ROW END"
        );
    }

    #[test]
    fn test_references_and_check() {
        let c = ColumnDef::new(
            "city",
            [
                ty(CharType::varchar(80)),
                references(
                    References::new("cities")
                        .columns(["name"])
                        .on_delete(ReferentialAction::Cascade),
                ),
                check(col("city").not_eq("")),
            ],
        );
        assert_eq!(
            c.to_string(),
            "city VARCHAR(80) REFERENCES cities (name) ON DELETE CASCADE CHECK (city <> '')"
        );
    }

    #[test]
    fn test_domain() {
        assert_eq!(
            ColumnDef::new("zip", [domain("us_postal_code")]).to_string(),
            "zip us_postal_code"
        );
    }

    #[test]
    fn test_with_options() {
        let opts = ColumnDef::new("salary", [default(1000)]).with_options();
        assert_eq!(opts.to_string(), "salary WITH OPTIONS DEFAULT 1000");

        let opts = ColumnOptions::new("mgr")
            .scope("employees")
            .constraint(ColumnConstraint::not_null());
        assert_eq!(opts.to_string(), "mgr WITH OPTIONS SCOPE employees NOT NULL");
    }

    #[test]
    fn test_with_options_drops_non_default_value() {
        let opts = ColumnDef::new("v", [row_start(), not_null()]).with_options();
        assert_eq!(opts.default, None);
        assert_eq!(opts.to_string(), "v WITH OPTIONS NOT NULL");
    }

    #[test]
    fn test_empty_options_fail() {
        let err = xql_core::render(&ColumnOptions::new("x")).unwrap_err();
        assert!(matches!(err, RenderError::Invalid { node: "column options", .. }));
    }
}
