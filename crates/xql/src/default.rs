//! Default clauses and the value functions usable inside them.

use xql_core::primitives::Raw;
use xql_core::{Node, Renderer};

use crate::types::keyword_enum;
use crate::value::Value;

keyword_enum! {
    /// Session values that can serve as a column default.
    pub enum SessionValue {
        User => "USER",
        CurrentUser => "CURRENT_USER",
        CurrentRole => "CURRENT_ROLE",
        SessionUser => "SESSION_USER",
        SystemUser => "SYSTEM_USER",
        CurrentCatalog => "CURRENT_CATALOG",
        CurrentSchema => "CURRENT_SCHEMA",
        CurrentPath => "CURRENT_PATH",
    }
}

keyword_enum! {
    /// Date-time value functions.
    pub enum DateTimeFunctionKind {
        CurrentDate => "CURRENT_DATE",
        CurrentTime => "CURRENT_TIME",
        LocalTime => "LOCALTIME",
        CurrentTimestamp => "CURRENT_TIMESTAMP",
        LocalTimestamp => "LOCALTIMESTAMP",
    }
}

/// A date-time value function, e.g. `CURRENT_TIMESTAMP(3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeFunction {
    /// Function.
    pub kind: DateTimeFunctionKind,
    /// Fractional seconds precision. Ignored by `CURRENT_DATE`.
    pub precision: Option<u64>,
}

impl DateTimeFunction {
    /// `CURRENT_DATE`
    pub const CURRENT_DATE: Self = Self::new(DateTimeFunctionKind::CurrentDate);
    /// `CURRENT_TIME`
    pub const CURRENT_TIME: Self = Self::new(DateTimeFunctionKind::CurrentTime);
    /// `LOCALTIME`
    pub const LOCALTIME: Self = Self::new(DateTimeFunctionKind::LocalTime);
    /// `CURRENT_TIMESTAMP`
    pub const CURRENT_TIMESTAMP: Self = Self::new(DateTimeFunctionKind::CurrentTimestamp);
    /// `LOCALTIMESTAMP`
    pub const LOCALTIMESTAMP: Self = Self::new(DateTimeFunctionKind::LocalTimestamp);

    /// Creates a function call without precision.
    #[must_use]
    pub const fn new(kind: DateTimeFunctionKind) -> Self {
        Self {
            kind,
            precision: None,
        }
    }

    /// Sets the precision.
    #[must_use]
    pub const fn precision(mut self, precision: u64) -> Self {
        self.precision = Some(precision);
        self
    }
}

impl Node for DateTimeFunction {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.kind.accept(r);
        match self.precision {
            Some(p) if self.kind != DateTimeFunctionKind::CurrentDate => {
                r.token('(').uint(p).token(')')
            }
            _ => r,
        }
    }
}

/// The value of a default clause.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultOption {
    /// A literal, including `NULL`.
    Value(Value),
    /// Text written verbatim.
    Raw(Raw),
    /// A session value such as `CURRENT_USER`.
    Session(SessionValue),
    /// A date-time value function.
    DateTime(DateTimeFunction),
    /// `ARRAY[]`
    EmptyArray,
    /// `MULTISET[]`
    EmptyMultiset,
}

impl Node for DefaultOption {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Value(value) => value.accept(r),
            Self::Raw(text) => text.accept(r),
            Self::Session(value) => value.accept(r),
            Self::DateTime(func) => func.accept(r),
            Self::EmptyArray => r.keyword("ARRAY").bracket(&[]),
            Self::EmptyMultiset => r.keyword("MULTISET").bracket(&[]),
        }
    }
}

/// `DEFAULT option`
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultClause(pub DefaultOption);

impl DefaultClause {
    /// `DEFAULT NULL`
    #[must_use]
    pub const fn null() -> Self {
        Self(DefaultOption::Value(Value::Null))
    }

    /// `DEFAULT ARRAY[]`
    #[must_use]
    pub const fn empty_array() -> Self {
        Self(DefaultOption::EmptyArray)
    }

    /// `DEFAULT MULTISET[]`
    #[must_use]
    pub const fn empty_multiset() -> Self {
        Self(DefaultOption::EmptyMultiset)
    }

    /// A default written verbatim, e.g. `DEFAULT nextval('seq')`.
    #[must_use]
    pub fn raw(text: &'static str) -> Self {
        Self(DefaultOption::Raw(Raw::new(text)))
    }
}

impl Node for DefaultClause {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("DEFAULT").ws();
        self.0.accept(r)
    }
}

impl From<DefaultOption> for DefaultClause {
    fn from(option: DefaultOption) -> Self {
        Self(option)
    }
}

impl From<SessionValue> for DefaultClause {
    fn from(value: SessionValue) -> Self {
        Self(DefaultOption::Session(value))
    }
}

impl From<DateTimeFunction> for DefaultClause {
    fn from(func: DateTimeFunction) -> Self {
        Self(DefaultOption::DateTime(func))
    }
}

impl From<Raw> for DefaultClause {
    fn from(text: Raw) -> Self {
        Self(DefaultOption::Raw(text))
    }
}

macro_rules! default_from_value {
    ($($ty:ty),+) => {$(
        impl From<$ty> for DefaultClause {
            fn from(v: $ty) -> Self {
                Self(DefaultOption::Value(Value::from(v)))
            }
        }
    )+};
}

default_from_value!(Value, bool, i32, i64, u32, u64, f64, &str, String);

impl_display!(SessionValue, DateTimeFunctionKind, DateTimeFunction, DefaultOption, DefaultClause);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_defaults() {
        assert_eq!(DefaultClause::from(1000).to_string(), "DEFAULT 1000");
        assert_eq!(DefaultClause::from("n/a").to_string(), "DEFAULT 'n/a'");
        assert_eq!(DefaultClause::from(false).to_string(), "DEFAULT FALSE");
        assert_eq!(DefaultClause::null().to_string(), "DEFAULT NULL");
        assert_eq!(
            DefaultClause::raw("nextval('seq')").to_string(),
            "DEFAULT nextval('seq')"
        );
    }

    #[test]
    fn test_collection_defaults() {
        assert_eq!(DefaultClause::empty_array().to_string(), "DEFAULT ARRAY[]");
        assert_eq!(
            DefaultClause::empty_multiset().to_string(),
            "DEFAULT MULTISET[]"
        );
    }

    #[test]
    fn test_session_defaults() {
        assert_eq!(
            DefaultClause::from(SessionValue::CurrentUser).to_string(),
            "DEFAULT CURRENT_USER"
        );
        assert_eq!(SessionValue::CurrentPath.to_string(), "CURRENT_PATH");
    }

    #[test]
    fn test_date_time_functions() {
        assert_eq!(DateTimeFunction::CURRENT_DATE.to_string(), "CURRENT_DATE");
        assert_eq!(
            DateTimeFunction::CURRENT_DATE.precision(3).to_string(),
            "CURRENT_DATE"
        );
        assert_eq!(
            DateTimeFunction::LOCALTIMESTAMP.precision(0).to_string(),
            "LOCALTIMESTAMP(0)"
        );
        assert_eq!(
            DefaultClause::from(DateTimeFunction::CURRENT_TIMESTAMP.precision(6)).to_string(),
            "DEFAULT CURRENT_TIMESTAMP(6)"
        );
    }
}
