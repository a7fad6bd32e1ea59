//! Tests for CREATE TABLE: element blocks, temporary tables, system-time
//! periods, typed tables, LIKE, and malformed definitions.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use xql::column::{constraint, default, identity, not_null, primary_key, references, row_end, row_start, ty};
use xql::constraint::{ColumnConstraint, References, ReferentialAction, TableConstraint};
use xql::seq::{Identity, SequenceOption};
use xql::table::{self, LikeOption, LikeProperty, OnCommit, Period};
use xql::types::{CharType, DateTimeField, DateTimeType, IntType, IntervalType, NumericType};
use xql::xql_core::MySqlDialect;
use xql::{ColumnDef, CreateTable, RenderError};

#[test]
fn films() {
    let t = CreateTable::new(
        "films",
        [
            ColumnDef::new(
                "code",
                [
                    ty(CharType::char().length(5)),
                    constraint(ColumnConstraint::primary_key().named("firstkey")),
                ],
            )
            .into(),
            ColumnDef::new("title", [ty(CharType::varchar(40)), not_null()]).into(),
            ColumnDef::new("did", [ty(IntType::Integer), not_null()]).into(),
            ColumnDef::new("date_prod", [ty(DateTimeType::date())]).into(),
            ColumnDef::new("kind", [ty(CharType::varchar(10))]).into(),
            ColumnDef::new(
                "len",
                [ty(DateTimeField::hour().to(DateTimeField::minute()))],
            )
            .into(),
            TableConstraint::unique(["date_prod"])
                .named("production")
                .into(),
        ],
    );
    assert_eq!(
        sql(&t),
        "CREATE TABLE films (\n\
         \tcode CHAR(5) CONSTRAINT firstkey PRIMARY KEY,\n\
         \ttitle VARCHAR(40) NOT NULL,\n\
         \tdid INTEGER NOT NULL,\n\
         \tdate_prod DATE,\n\
         \tkind VARCHAR(10),\n\
         \tlen INTERVAL HOUR TO MINUTE,\n\
         \tCONSTRAINT production UNIQUE (date_prod)\n\
         )"
    );
}

#[test]
fn temporary_table() {
    let t = CreateTable::temporary(
        "temp_cities",
        [
            ColumnDef::new("name", [ty(CharType::varchar(80)), primary_key(), not_null()]).into(),
            table::on_commit(OnCommit::DeleteRows),
        ],
    );
    assert_eq!(
        sql(&t),
        "CREATE TEMPORARY TABLE temp_cities (\n\
         \tname VARCHAR(80) PRIMARY KEY NOT NULL\n\
         ) ON COMMIT DELETE ROWS"
    );
}

#[test]
fn system_time_period() {
    let t = CreateTable::new(
        "Department",
        [
            ColumnDef::new("DeptID", [ty(IntType::Int), not_null(), primary_key()]).into(),
            ColumnDef::new("DeptName", [ty(CharType::varchar(50)), not_null()]).into(),
            ColumnDef::new(
                "ValidFrom",
                [ty(DateTimeType::datetime2()), row_start(), not_null()],
            )
            .into(),
            ColumnDef::new("ValidTo", [ty(DateTimeType::datetime2()), row_end(), not_null()])
                .into(),
            Period::system_time("ValidFrom", "ValidTo").into(),
            table::system_versioning_on(),
        ],
    );
    assert_eq!(
        sql(&t),
        "CREATE TABLE Department (\n\
         \tDeptID INT NOT NULL PRIMARY KEY,\n\
         \tDeptName VARCHAR(50) NOT NULL,\n\
         \tValidFrom DATETIME2 GENERATED ALWAYS AS ROW START NOT NULL,\n\
         \tValidTo DATETIME2 GENERATED ALWAYS AS ROW END NOT NULL,\n\
         \tPERIOD FOR SYSTEM_TIME (ValidFrom, ValidTo)\n\
         ) WITH (SYSTEM_VERSIONING = ON)"
    );
}

#[test]
fn application_time_period() {
    let t = CreateTable::new(
        "t1",
        [
            ColumnDef::new("name", [ty(CharType::varchar(50))]).into(),
            ColumnDef::new("date_1", [ty(DateTimeType::date())]).into(),
            ColumnDef::new("date_2", [ty(DateTimeType::date())]).into(),
            Period::application_time("date_period", "date_1", "date_2").into(),
        ],
    );
    assert_eq!(
        sql(&t),
        "CREATE TABLE t1 (\n\
         \tname VARCHAR(50),\n\
         \tdate_1 DATE,\n\
         \tdate_2 DATE,\n\
         \tPERIOD FOR date_period (date_1, date_2)\n\
         )"
    );
}

#[test]
fn typed_table() {
    let t = CreateTable::new(
        "employees",
        [table::of(
            "employee_type",
            [
                TableConstraint::primary_key(["name"]).into(),
                ColumnDef::new("salary", [default(1000)]).into(),
            ],
        )],
    );
    assert_eq!(
        sql(&t),
        "CREATE TABLE employees OF employee_type (\n\
         \tPRIMARY KEY (name),\n\
         \tsalary WITH OPTIONS DEFAULT 1000\n\
         )"
    );
}

#[test]
fn like_clause() {
    let t = CreateTable::new(
        "bar",
        [xql::table::Like::new(
            "foo",
            [
                LikeOption::including(LikeProperty::All),
                LikeOption::excluding(LikeProperty::Defaults),
            ],
        )
        .into()],
    );
    assert_eq!(
        sql(&t),
        "CREATE TABLE bar (\n\tLIKE foo INCLUDING ALL EXCLUDING DEFAULTS\n)"
    );
}

#[test]
fn identity_and_foreign_keys() {
    let t = CreateTable::new(
        "orders",
        [
            ColumnDef::new(
                "id",
                [
                    ty(IntType::BigInt),
                    identity(
                        Identity::by_default()
                            .option(SequenceOption::StartWith(100))
                            .option(SequenceOption::MaxValue(None)),
                    ),
                    primary_key(),
                ],
            )
            .into(),
            ColumnDef::new(
                "customer_id",
                [
                    ty(IntType::BigInt),
                    not_null(),
                    references(
                        References::new("customers")
                            .columns(["id"])
                            .on_delete(ReferentialAction::Cascade),
                    ),
                ],
            )
            .into(),
            ColumnDef::new("total", [ty(NumericType::numeric(12, 2)), default(0)]).into(),
            ColumnDef::new("placed", [ty(IntervalType::single(DateTimeField::day()))]).into(),
        ],
    );
    assert_eq!(
        sql(&t),
        "CREATE TABLE orders (\n\
         \tid BIGINT GENERATED BY DEFAULT AS IDENTITY (START WITH 100, NO MAXVALUE) PRIMARY KEY,\n\
         \tcustomer_id BIGINT NOT NULL REFERENCES customers (id) ON DELETE CASCADE,\n\
         \ttotal NUMERIC(12, 2) DEFAULT 0,\n\
         \tplaced INTERVAL DAY\n\
         )"
    );
}

#[test]
fn identifiers_follow_the_dialect() {
    let t = CreateTable::new(
        "order items",
        [ColumnDef::new("group", [ty(IntType::Int)]).into()],
    );
    assert_eq!(
        sql(&t),
        "CREATE TABLE `order items` (\n\tgroup INT\n)"
    );
    assert_eq!(
        sql_in(&t, &xql::xql_core::GenericDialect),
        "CREATE TABLE \"order items\" (\n\tgroup INT\n)"
    );
    assert_eq!(
        sql_in(&t, &MySqlDialect),
        "CREATE TABLE `order items` (\n\tgroup INT\n)"
    );
}

#[test]
fn malformed_element_fails_the_whole_statement() {
    let t = CreateTable::new(
        "t",
        [
            ColumnDef::new("a", [ty(IntType::Int)]).into(),
            TableConstraint::primary_key(Vec::<&'static str>::new()).into(),
        ],
    );
    assert_eq!(
        sql_err(&t),
        RenderError::missing("table constraint", "column")
    );
}
