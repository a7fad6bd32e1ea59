//! Literal values.

use xql_core::primitives::Sep;
use xql_core::{Node, Renderer};

/// A literal SQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `NULL`
    Null,
    /// `DEFAULT`, valid in `INSERT` and `UPDATE`.
    Default,
    /// `TRUE` or `FALSE`
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Float.
    Float(f64),
    /// String literal, single-quoted.
    Text(String),
    /// Binary literal, `X'..'`.
    Blob(Vec<u8>),
    /// Row value constructor, `ROW(a, b)`.
    Row(Vec<Value>),
}

impl Value {
    /// Creates a row value.
    #[must_use]
    pub fn row<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Row(values.into_iter().map(Into::into).collect())
    }
}

/// Writes values separated by the list separator.
fn write_values<'r>(r: &'r mut Renderer, values: &[Value]) -> &'r mut Renderer {
    r.join(values, &Sep)
}

impl Node for Value {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Null => r.keyword("NULL"),
            Self::Default => r.keyword("DEFAULT"),
            Self::Bool(true) => r.keyword("TRUE"),
            Self::Bool(false) => r.keyword("FALSE"),
            Self::Int(n) => r.int(*n),
            Self::Uint(n) => r.uint(*n),
            Self::Float(n) => r.float(*n),
            Self::Text(s) => r.string(s),
            Self::Blob(bytes) => {
                let hex: String = bytes.iter().map(|byte| format!("{byte:02X}")).collect();
                r.token('X').token('\'').raw(&hex).token('\'')
            }
            Self::Row(values) => {
                r.keyword("ROW").token('(');
                write_values(r, values).token(')')
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Uint(u64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Blob(bytes)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl_display!(Value);

#[cfg(test)]
mod tests {
    use super::*;
    use xql_core::RenderError;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Default.to_string(), "DEFAULT");
        assert_eq!(Value::from(true).to_string(), "TRUE");
        assert_eq!(Value::from(false).to_string(), "FALSE");
        assert_eq!(Value::from(-42).to_string(), "-42");
        assert_eq!(Value::from(42_u64).to_string(), "42");
        assert_eq!(Value::from(9.99).to_string(), "9.99");
        assert_eq!(Value::from(1.0).to_string(), "1");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(Value::from("Cheese").to_string(), "'Cheese'");
        assert_eq!(
            Value::from("'; DROP TABLE users; --").to_string(),
            "'''; DROP TABLE users; --'"
        );
    }

    #[test]
    fn test_blob() {
        assert_eq!(Value::from(vec![0xDE, 0xAD, 0x01]).to_string(), "X'DEAD01'");
        assert_eq!(Value::Blob(vec![]).to_string(), "X''");
    }

    #[test]
    fn test_option_maps_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".into()));
    }

    #[test]
    fn test_row() {
        assert_eq!(Value::row([1, 2]).to_string(), "ROW(1, 2)");
        assert_eq!(
            Value::Row(vec![Value::from(1), Value::from("x"), Value::Null]).to_string(),
            "ROW(1, 'x', NULL)"
        );
        assert_eq!(Value::Row(vec![]).to_string(), "ROW()");
    }

    #[test]
    fn test_non_finite_floats_fail() {
        let err = crate::ToSql::to_sql(&Value::from(f64::NAN)).unwrap_err();
        assert_eq!(err, RenderError::invalid("float", "NaN is not finite"));

        let row = Value::row([Value::from(1.5), Value::from(f64::INFINITY)]);
        assert!(crate::ToSql::to_sql(&row).is_err());
    }
}
