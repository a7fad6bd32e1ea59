//! Tests for SELECT: reference examples, derived tables, grouping, locking,
//! and rendering through dialects.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use xql::query::{
    select_all_from as select_all, Alias, Fetch, ForLock, GroupingElement, JoinSpec, LockMode,
    Offset,
};
use xql::xql_core::{GenericDialect, MySqlDialect};
use xql::{
    col, func, raw, table, Expr, Query, RenderError, SchemaQualifiedName, Select, TableRef,
};

#[test]
fn reference_examples() {
    assert_eq!(sql(&select_all("table1")), "SELECT * FROM table1");
    assert_eq!(
        sql(&Select::all().distinct().from("table1")),
        "SELECT DISTINCT * FROM table1"
    );
    assert_eq!(sql(&Select::new([raw("3 + 4").alias("sum")])), "SELECT 3 + 4 AS sum");
    assert_eq!(
        sql(&Select::new([func("random", Vec::<Expr>::new())])),
        "SELECT random()"
    );
    assert_eq!(
        sql(&Select::new([col("a").alias("value"), raw("b + c").alias("sum")]).from("table1")),
        "SELECT a AS value, b + c AS sum FROM table1"
    );

    let tbl1 = SchemaQualifiedName::new("tbl1");
    let tbl2 = SchemaQualifiedName::new("tbl2");
    let query = Select::new([tbl1.column("a"), tbl2.column("a"), tbl2.column("b")])
        .from_tables([tbl1, tbl2]);
    assert_eq!(sql(&query), "SELECT tbl1.a, tbl2.a, tbl2.b FROM tbl1, tbl2");
}

#[test]
fn derived_table() {
    let inner = Select::new([col("city").into(), func("max", [col("temp_lo")]).alias("hi")])
        .from("weather")
        .group_by([GroupingElement::column("city")]);
    let query = Select::all().from(TableRef::derived(inner, Alias::new("w")));
    assert_eq!(
        sql(&query),
        "SELECT * FROM (SELECT city, max(temp_lo) AS hi FROM weather GROUP BY city) AS w"
    );
}

#[test]
fn grouping_sets() {
    let query = Select::new([col("brand"), col("size"), func("sum", [col("sales")])])
        .from("items_sold")
        .group_by([GroupingElement::grouping_sets([
            GroupingElement::column("brand"),
            GroupingElement::column("size"),
            GroupingElement::Empty,
        ])]);
    assert_eq!(
        sql(&query),
        "SELECT brand, size, sum(sales) FROM items_sold \
         GROUP BY GROUPING SETS (brand, size, ())"
    );
}

#[test]
fn pagination_and_locking() {
    let query = select_all("products")
        .where_clause(col("stock").gt(0))
        .order_by([col("price").asc(), col("name").desc()])
        .offset(Offset::rows(20))
        .fetch(Fetch::next(10).with_ties())
        .lock(
            ForLock::new(LockMode::NoKeyUpdate)
                .of(["products"])
                .skip_locked(),
        );
    assert_eq!(
        sql(&query),
        "SELECT * FROM products WHERE stock > 0 ORDER BY price ASC, name DESC \
         OFFSET 20 ROWS FETCH NEXT 10 ROWS WITH TIES FOR NO KEY UPDATE OF products SKIP LOCKED"
    );
}

#[test]
fn joins_across_schemas() {
    let orders = SchemaQualifiedName::new("orders").schema("sales");
    let customer = SchemaQualifiedName::new("c");
    let query = Select::new([orders.column("id"), customer.column("name")])
        .from(table(orders).left_join(
            table("customers").alias("c"),
            JoinSpec::on(raw("c.id = orders.customer_id")),
        ))
        .limit(5);
    assert_eq!(
        sql(&query),
        "SELECT sales.orders.id, c.name FROM sales.orders \
         LEFT JOIN customers AS c ON c.id = orders.customer_id LIMIT 5"
    );
}

#[test]
fn quoting_follows_dialect() {
    let query = Select::new(["unit price"]).from("order items");
    assert_eq!(sql(&query), "SELECT `unit price` FROM `order items`");
    assert_eq!(
        sql_in(&query, &GenericDialect),
        "SELECT \"unit price\" FROM \"order items\""
    );
    assert_eq!(
        sql_in(&query, &MySqlDialect),
        "SELECT `unit price` FROM `order items`"
    );
}

#[test]
fn empty_select_list_fails() {
    let query = Query::default();
    let err = sql_err(&query);
    assert_eq!(err.node(), "SELECT");
}

#[test]
fn empty_using_list_fails() {
    let query = select_all(table("t1").join("t2", JoinSpec::using(Vec::<&str>::new())));
    assert_eq!(sql_err(&query), RenderError::missing("USING", "column"));
}

#[test]
fn empty_in_list_fails() {
    let query = select_all("t").where_clause(col("id").in_list(Vec::<Expr>::new()));
    assert_eq!(sql_err(&query), RenderError::missing("IN", "value"));
}

#[test]
fn empty_grouping_lists_fail() {
    let grouped = |element: GroupingElement| Select::new(["a"]).from("t").group_by([element]);

    assert_eq!(
        sql_err(&grouped(GroupingElement::rollup(Vec::<&str>::new()))),
        RenderError::missing("ROLLUP", "column")
    );
    assert_eq!(
        sql_err(&grouped(GroupingElement::cube(Vec::<&str>::new()))),
        RenderError::missing("CUBE", "column")
    );
    assert_eq!(
        sql_err(&grouped(GroupingElement::grouping_sets([]))),
        RenderError::missing("GROUPING SETS", "grouping element")
    );
    assert_eq!(
        sql_err(&grouped(GroupingElement::set(Vec::<&str>::new()))),
        RenderError::missing("grouping set", "column")
    );
    assert_eq!(
        sql(&grouped(GroupingElement::Empty)),
        "SELECT a FROM t GROUP BY ()"
    );
}
