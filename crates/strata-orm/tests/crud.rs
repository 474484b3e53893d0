//! End-to-end CRUD tests against an in-memory SQLite database.

use sqlx::SqlitePool;
use strata_orm::{ColumnSpec, Model, OrmError};
use strata_sql_core::column_spec;

#[derive(Debug, PartialEq, sqlx::FromRow)]
struct Todo {
    id: i64,
    title: String,
    act: String,
    date: i64,
}

impl Model for Todo {
    const NAME: &'static str = "todo";
    const COLUMNS: &'static [&'static str] = &["id", "title", "act", "date"];

    type PrimaryKey = i64;

    fn pk_column() -> &'static str {
        "id"
    }

    fn pk(&self) -> i64 {
        self.id
    }

    fn to_columns(&self) -> ColumnSpec {
        // id is auto-assigned by the store
        column_spec! {
            "title" => self.title.clone(),
            "act" => self.act.clone(),
            "date" => self.date,
        }
    }
}

fn todo(title: &str, act: &str, date: i64) -> Todo {
    Todo {
        id: 0,
        title: String::from(title),
        act: String::from(act),
        date,
    }
}

async fn setup() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::query(
        "create table todo (
            id integer primary key autoincrement,
            title text not null,
            act text not null,
            date integer not null
        )",
    )
    .execute(&pool)
    .await
    .expect("create table");
    pool
}

#[tokio::test]
async fn insert_and_get() {
    let pool = setup().await;

    let id = Todo::objects()
        .insert(&pool, &todo("water plants", "open", 2021))
        .await
        .unwrap();

    let fetched = Todo::objects().get(&pool, id).await.unwrap();
    assert_eq!(fetched.title, "water plants");
    assert_eq!(fetched.act, "open");
    assert_eq!(fetched.date, 2021);
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let pool = setup().await;
    let err = Todo::objects().get(&pool, 99).await.unwrap_err();
    assert!(matches!(err, OrmError::NotFound));
    assert!(Todo::objects()
        .get_or_none(&pool, 99)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn find_with_disjunction_filter() {
    let pool = setup().await;
    let manager = Todo::objects();
    manager
        .insert_many(
            &pool,
            &[
                todo("a", "done", 2020),
                todo("b", "overdue", 2021),
                todo("c", "open", 2021),
            ],
        )
        .await
        .unwrap();

    let finished = manager
        .find(&pool, column_spec! { "act" => vec!["done", "overdue"] })
        .await
        .unwrap();
    assert_eq!(finished.len(), 2);

    let late = manager
        .find(
            &pool,
            column_spec! { "act" => vec!["done", "overdue"], "date" => 2021 },
        )
        .await
        .unwrap();
    assert_eq!(late.len(), 1);
    assert_eq!(late[0].title, "b");
}

#[tokio::test]
async fn update_and_count() {
    let pool = setup().await;
    let manager = Todo::objects();
    let id = manager
        .insert(&pool, &todo("water plants", "open", 2020))
        .await
        .unwrap();

    let affected = manager
        .update(
            &pool,
            column_spec! { "date" => 2021, "act" => "done" },
            column_spec! { "id" => id },
        )
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let updated = manager.get(&pool, id).await.unwrap();
    assert_eq!(updated.date, 2021);
    assert_eq!(updated.act, "done");

    assert_eq!(manager.count(&pool, None).await.unwrap(), 1);
    assert!(manager
        .exists(&pool, column_spec! { "act" => "done" })
        .await
        .unwrap());
}

#[tokio::test]
async fn delete_filtered_and_all() {
    let pool = setup().await;
    let manager = Todo::objects();
    manager
        .insert_many(
            &pool,
            &[
                todo("a", "done", 2020),
                todo("b", "open", 2021),
                todo("c", "open", 2021),
            ],
        )
        .await
        .unwrap();

    let removed = manager
        .delete(&pool, column_spec! { "act" => "done" })
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(manager.count(&pool, None).await.unwrap(), 2);

    let removed = manager.delete_all(&pool).await.unwrap();
    assert_eq!(removed, 2);
    assert_eq!(manager.count(&pool, None).await.unwrap(), 0);
}

#[tokio::test]
async fn text_with_embedded_quote_round_trips() {
    let pool = setup().await;
    let manager = Todo::objects();
    manager
        .insert(&pool, &todo("o'brien's plants", "open", 2021))
        .await
        .unwrap();

    let found = manager
        .find(&pool, column_spec! { "title" => "o'brien's plants" })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}
