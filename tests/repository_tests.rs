//! Runs against a real Postgres database named by `APP_TEST_DATABASE_URL`.
//! Ignored by default: `cargo test -- --ignored` with the variable set.


use chrono::{SubsecRound, Utc};
use sqlx::PgPool;
use student_registry::{
    db::postgres::run_migrations,
    entities::student::StudentInsert,
    repositories::{sqlx_repo::SqlxStudentRepo, student::StudentRepository},
};
use test_utils::details;

async fn test_repo() -> SqlxStudentRepo {
    dotenv::dotenv().ok();
    let url = std::env::var("APP_TEST_DATABASE_URL")
        .expect("APP_TEST_DATABASE_URL must be set for repository tests");

    let pool = PgPool::connect(&url).await.expect("Failed to connect to test database");
    run_migrations(&pool).await.expect("Failed to run migrations");
    sqlx::query("TRUNCATE student RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("Failed to clean student table");

    SqlxStudentRepo::new(pool)
}

fn row(name: &str, email: &str, age: i32) -> StudentInsert {
    StudentInsert::new(details(name, email, age), Utc::now().trunc_subsecs(6))
}

#[tokio::test]
#[ignore]
async fn insert_then_find_round_trips() {
    let repo = test_repo().await;
    let insert = row("Kim", "kim@example.com", 20);

    let id = repo.insert(&insert).await.unwrap();
    let found = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(found, insert.into_student(id));
}

#[tokio::test]
#[ignore]
async fn find_all_is_newest_first() {
    let repo = test_repo().await;
    for i in 1..=3 {
        repo.insert(&row(&format!("Student {i}"), &format!("s{i}@example.com"), 20 + i))
            .await
            .unwrap();
    }

    let all = repo.find_all().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|s| s.id).collect();

    assert_eq!(all.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
#[ignore]
async fn update_persists_fields() {
    let repo = test_repo().await;
    let id = repo.insert(&row("Kim", "kim@example.com", 20)).await.unwrap();

    let mut student = repo.find_by_id(id).await.unwrap().unwrap();
    student.name = "Lee".to_string();
    student.age = 25;
    student.updated_at = Utc::now().trunc_subsecs(6);

    assert_eq!(repo.update(&student).await.unwrap(), 1);
    assert_eq!(repo.find_by_id(id).await.unwrap().unwrap(), student);
}

#[tokio::test]
#[ignore]
async fn delete_removes_and_repeats_quietly() {
    let repo = test_repo().await;
    let id = repo.insert(&row("Kim", "kim@example.com", 20)).await.unwrap();

    assert_eq!(repo.delete_by_id(id).await.unwrap(), 1);
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert_eq!(repo.delete_by_id(id).await.unwrap(), 0);
}

#[tokio::test]
#[ignore]
async fn connectivity_probes_answer() {
    let repo = test_repo().await;

    repo.check_connection().await.unwrap();
    assert!(!repo.database_name().await.unwrap().is_empty());
}
