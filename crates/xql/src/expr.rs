//! Value expressions.
//!
//! Expressions are written the way the caller builds them. Operator
//! precedence is not inferred: wrap a sub-expression with [`Expr::paren`]
//! to parenthesize it.

use std::borrow::Cow;

use xql_core::primitives::{Ident, Raw, Sep};
use xql_core::{Node, Renderer};

use crate::name::ColumnRef;
use crate::query::order_by::SortKey;
use crate::query::SelectItem;
use crate::value::Value;

/// A value expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Text written verbatim.
    Raw(Raw),
    /// A column reference.
    Column(ColumnRef),
    /// A literal.
    Value(Value),
    /// A function call.
    Call {
        /// Function name.
        name: Raw,
        /// Arguments.
        args: Vec<Expr>,
    },
    /// `left op right`
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: &'static str,
        /// Right operand.
        right: Box<Expr>,
    },
    /// `NOT expr`
    Not(Box<Expr>),
    /// `expr IS [NOT] NULL`
    IsNull {
        /// Tested expression.
        expr: Box<Expr>,
        /// Whether the test is negated.
        negated: bool,
    },
    /// `expr IN (values...)`
    InList {
        /// Tested expression.
        expr: Box<Expr>,
        /// Candidate values.
        values: Vec<Expr>,
    },
    /// `(expr)`
    Nested(Box<Expr>),
    /// `expr OVER window`, a call over a named window.
    Over {
        /// Window function call.
        call: Box<Expr>,
        /// Name of a window declared in the `WINDOW` clause.
        window: Ident,
    },
}

/// Creates a column reference expression.
#[must_use]
pub fn col(name: impl Into<ColumnRef>) -> Expr {
    Expr::Column(name.into())
}

/// Creates a raw expression, written verbatim.
#[must_use]
pub fn raw(text: &'static str) -> Expr {
    Expr::Raw(Raw::new(text))
}

/// Creates a function call expression.
#[must_use]
pub fn func<I, E>(name: impl Into<Cow<'static, str>>, args: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: Into<Expr>,
{
    Expr::Call {
        name: Raw::new(name),
        args: args.into_iter().map(Into::into).collect(),
    }
}

impl Expr {
    /// Creates a binary expression with an arbitrary operator.
    #[must_use]
    pub fn binary(self, op: &'static str, right: impl Into<Self>) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right.into()),
        }
    }

    /// `self = right`
    #[must_use]
    pub fn eq(self, right: impl Into<Self>) -> Self {
        self.binary("=", right)
    }

    /// `self <> right`
    #[must_use]
    pub fn not_eq(self, right: impl Into<Self>) -> Self {
        self.binary("<>", right)
    }

    /// `self < right`
    #[must_use]
    pub fn lt(self, right: impl Into<Self>) -> Self {
        self.binary("<", right)
    }

    /// `self <= right`
    #[must_use]
    pub fn lt_eq(self, right: impl Into<Self>) -> Self {
        self.binary("<=", right)
    }

    /// `self > right`
    #[must_use]
    pub fn gt(self, right: impl Into<Self>) -> Self {
        self.binary(">", right)
    }

    /// `self >= right`
    #[must_use]
    pub fn gt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(">=", right)
    }

    /// `self LIKE pattern`
    #[must_use]
    pub fn like(self, pattern: impl Into<Self>) -> Self {
        self.binary("LIKE", pattern)
    }

    /// `self + right`
    #[must_use]
    pub fn plus(self, right: impl Into<Self>) -> Self {
        self.binary("+", right)
    }

    /// `self BETWEEN low AND high`
    #[must_use]
    pub fn between(self, low: impl Into<Self>, high: impl Into<Self>) -> Self {
        self.binary("BETWEEN", low).binary("AND", high)
    }

    /// `self IN (values...)`
    #[must_use]
    pub fn in_list<I, E>(self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Self>,
    {
        Self::InList {
            expr: Box::new(self),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `self AND right`
    #[must_use]
    pub fn and(self, right: impl Into<Self>) -> Self {
        self.binary("AND", right)
    }

    /// `self OR right`
    #[must_use]
    pub fn or(self, right: impl Into<Self>) -> Self {
        self.binary("OR", right)
    }

    /// `NOT self`
    #[must_use]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// `self IS NULL`
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    /// `self IS NOT NULL`
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }

    /// `(self)`
    #[must_use]
    pub fn paren(self) -> Self {
        Self::Nested(Box::new(self))
    }

    /// `self OVER window`
    #[must_use]
    pub fn over(self, window: impl Into<Ident>) -> Self {
        Self::Over {
            call: Box::new(self),
            window: window.into(),
        }
    }

    /// `self AS alias`, for select lists.
    #[must_use]
    pub fn alias(self, alias: impl Into<Ident>) -> SelectItem {
        SelectItem::Expr {
            expr: self,
            alias: Some(alias.into()),
        }
    }

    /// Sorts ascending.
    #[must_use]
    pub fn asc(self) -> SortKey {
        SortKey::new(self).asc()
    }

    /// Sorts descending.
    #[must_use]
    pub fn desc(self) -> SortKey {
        SortKey::new(self).desc()
    }
}

impl Node for Expr {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Raw(text) => text.accept(r),
            Self::Column(column) => column.accept(r),
            Self::Value(value) => value.accept(r),
            Self::Call { name, args } => {
                name.accept(r).token('(');
                r.join(args, &Sep).token(')')
            }
            Self::Binary { left, op, right } => {
                left.accept(r).ws().keyword(op).ws();
                right.accept(r)
            }
            Self::Not(expr) => {
                r.keyword("NOT").ws();
                expr.accept(r)
            }
            Self::IsNull { expr, negated } => {
                expr.accept(r).ws().keyword("IS").ws();
                if *negated {
                    r.keyword("NOT").ws();
                }
                r.keyword("NULL")
            }
            Self::InList { expr, values } => {
                expr.accept(r).ws().keyword("IN").ws().token('(');
                r.require("IN", "value", values).token(')')
            }
            Self::Nested(expr) => r.paren(&[&**expr]),
            Self::Over { call, window } => {
                call.accept(r).ws().keyword("OVER").ws();
                window.accept(r)
            }
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<ColumnRef> for Expr {
    fn from(column: ColumnRef) -> Self {
        Self::Column(column)
    }
}

impl From<Raw> for Expr {
    fn from(text: Raw) -> Self {
        Self::Raw(text)
    }
}

macro_rules! expr_from_value {
    ($($ty:ty),+) => {$(
        impl From<$ty> for Expr {
            fn from(v: $ty) -> Self {
                Self::Value(Value::from(v))
            }
        }
    )+};
}

expr_from_value!(bool, i32, i64, u32, u64, f64, &str, String);

impl_display!(Expr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparisons() {
        assert_eq!(col("price").eq(5).to_string(), "price = 5");
        assert_eq!(col("name").not_eq("x").to_string(), "name <> 'x'");
        assert_eq!(col("a").lt_eq(col("b")).to_string(), "a <= b");
        assert_eq!(col("active").eq(true).to_string(), "active = TRUE");
    }

    #[test]
    fn test_logical() {
        let cond = col("a")
            .gt(1)
            .and(col("b").lt(2).or(col("c").is_null()).paren());
        assert_eq!(cond.to_string(), "a > 1 AND (b < 2 OR c IS NULL)");
        assert_eq!(col("d").is_not_null().not().to_string(), "NOT d IS NOT NULL");
        assert_eq!(
            col("price").between(1, 10).to_string(),
            "price BETWEEN 1 AND 10"
        );
        assert_eq!(
            col("id").in_list([1, 2, 3]).to_string(),
            "id IN (1, 2, 3)"
        );
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(func("random", Vec::<Expr>::new()).to_string(), "random()");
        assert_eq!(
            func("coalesce", [col("a"), Expr::from(0)]).to_string(),
            "coalesce(a, 0)"
        );
    }

    #[test]
    fn test_raw_and_quoted_columns() {
        assert_eq!(raw("3 + 4").to_string(), "3 + 4");
        assert_eq!(col("select").eq(1).to_string(), "select = 1");
        assert_eq!(col("unit price").plus(1).to_string(), "`unit price` + 1");
    }

    #[test]
    fn test_call_over_named_window() {
        assert_eq!(
            func("rank", Vec::<Expr>::new()).over("w").to_string(),
            "rank() OVER w"
        );
    }
}
