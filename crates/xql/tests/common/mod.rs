#![allow(dead_code)]

use xql::xql_core::{Dialect, Node};
use xql::{RenderError, ToSql};

pub fn sql<N: Node + ?Sized>(node: &N) -> String {
    node.to_sql()
        .unwrap_or_else(|e| panic!("Failed to render: {e}"))
}

pub fn sql_in<N: Node + ?Sized>(node: &N, dialect: &dyn Dialect) -> String {
    node.to_sql_with(dialect)
        .unwrap_or_else(|e| panic!("Failed to render for {}: {e}", dialect.name()))
}

pub fn sql_err<N: Node + ?Sized>(node: &N) -> RenderError {
    match node.to_sql() {
        Ok(text) => panic!("Expected render error, got: {text}"),
        Err(err) => err,
    }
}
