mod common;

use std::thread;

use common::{content, sql, sql_with};
use pretty_assertions::assert_eq;
use xql_core::primitives::{bracket, paren, Ident, Int, Keyword, Sep, Uint, Ws};
use xql_core::{node_fn, render, Absent, Either, Node, RenderConfig, RenderError, Renderer};

/// `SELECT <cols> FROM <table> [LIMIT <n>]`
struct Query {
    cols: Vec<Ident>,
    table: Option<Ident>,
    limit: Option<Uint>,
}

impl Node for Query {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("SELECT")
            .ws()
            .visit(&[&self.cols])
            .ws()
            .keyword("FROM")
            .ws()
            .require("SELECT", "FROM table", &self.table)
            .visit(&[&Ws, &Keyword("LIMIT"), &Ws, &self.limit])
    }
}

fn query(limit: Option<u64>) -> Query {
    Query {
        cols: vec![Ident::new("product_no"), Ident::new("unit-price")],
        table: Some(Ident::new("products")),
        limit: limit.map(Uint),
    }
}

#[test]
fn test_identifiers_end_to_end() {
    let names = ["products", "4foobar2", "42", "foo`bar", "测试"];
    let rendered: Vec<String> = names.iter().map(|n| sql(&Ident::new(*n))).collect();
    assert_eq!(rendered, vec!["products", "4foobar2", "`42`", "`foo``bar`", "测试"]);
}

#[test]
fn test_empty_array_default() {
    let node = node_fn(|r| {
        r.visit(&[&Keyword("DEFAULT"), &Ws, &Keyword("ARRAY"), &bracket(&[])]);
    });
    assert_eq!(sql(&node), "DEFAULT ARRAY[]");
}

#[test]
fn test_either_right_renders_alone() {
    let name: Either<Ident, Ident> = Either::Right(Ident::new("products"));
    let node = node_fn(|r| {
        r.keyword("TABLE").ws().visit(&[&name]);
    });
    assert_eq!(sql(&node), "TABLE products");
}

#[test]
fn test_optional_clause() {
    assert_eq!(sql(&query(None)), "SELECT product_no, `unit-price` FROM products");
    assert_eq!(
        sql(&query(Some(0))),
        "SELECT product_no, `unit-price` FROM products LIMIT 0"
    );
}

#[test]
fn test_missing_child_fails_loudly() {
    let mut q = query(Some(10));
    q.table = None;
    assert_eq!(
        render(&q),
        Err(RenderError::missing("SELECT", "FROM table"))
    );
}

#[test]
fn test_configuration_only_changes_formatting() {
    let q = query(Some(5));
    let default = RenderConfig::default();
    let tabbed = RenderConfig::new('\t', ';', '"');

    let a = sql_with(&q, default);
    let b = sql_with(&q, tabbed);
    assert_eq!(b, "SELECT\tproduct_no;\t\"unit-price\"\tFROM\tproducts\tLIMIT\t5");
    assert_eq!(
        content(&a, default).replace('`', "\""),
        content(&b, tabbed)
    );
}

#[test]
fn test_nested_groups() {
    let node = node_fn(|r| {
        r.visit(&[
            &Keyword("ROW"),
            &paren(&[&Int(1), &Sep, &paren(&[]), &Sep, &bracket(&[&Int(2)])]),
        ]);
    });
    assert_eq!(sql(&node), "ROW(1, (), [2])");

    let node = node_fn(|r| {
        r.visit(&[&Keyword("ROW"), &paren(&[&Int(1), &Absent])]);
    });
    assert_eq!(sql(&node), "ROW()");
}

#[test]
fn test_concurrent_renders_share_a_tree() {
    let q = query(Some(3));
    let expected = sql(&q);

    let outputs: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| sql(&q))).collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| panic!("render thread panicked")))
            .collect()
    });

    assert!(outputs.iter().all(|out| *out == expected));
}
