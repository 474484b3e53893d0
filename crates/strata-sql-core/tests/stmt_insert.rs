//! Tests for assembled INSERT statements: column lists and named
//! placeholders.

use strata_sql_core::{column_spec, insert, QueryOptions, Rows};

#[test]
fn insert_single_row_named_placeholders() {
    let opts = QueryOptions::new().values(Rows::Single(column_spec! {
        "title" => "water plants",
        "date" => 2021,
    }));
    let sql = insert("todo", &opts).unwrap();
    assert_eq!(
        sql,
        "insert into todo (date, title) values(:date, :title)"
    );
}

#[test]
fn insert_many_rows_use_first_row_schema() {
    let opts = QueryOptions::new().values(Rows::Many(vec![
        column_spec! { "title" => "a", "date" => 1 },
        column_spec! { "title" => "b", "date" => 2 },
    ]));
    let sql = insert("todo", &opts).unwrap();
    assert_eq!(
        sql,
        "insert into todo (date, title) values(:date, :title)"
    );
}

#[test]
fn insert_without_values_is_bare() {
    let sql = insert("todo", &QueryOptions::new()).unwrap();
    assert_eq!(sql, "insert into todo");
}

#[test]
fn insert_unnamed_uses_positional_placeholders() {
    let opts = QueryOptions::new()
        .values(Rows::Single(column_spec! {
            "title" => "water plants",
            "date" => 2021,
        }))
        .named(false);
    let sql = insert("todo", &opts).unwrap();
    assert_eq!(sql, "insert into todo (date, title) values(?, ?)");
}

#[test]
fn insert_empty_rows_emit_no_clauses() {
    let opts = QueryOptions::new().values(Rows::Many(vec![]));
    let sql = insert("todo", &opts).unwrap();
    assert_eq!(sql, "insert into todo");
}
