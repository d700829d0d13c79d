use async_trait::async_trait;

use crate::{
    entities::student::{Student, StudentInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxStudentRepo,
};

/// Typed access to the `student` table.
///
/// Absence is reported as `Ok(None)` (or zero affected rows), never as an error.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn database_name(&self) -> Result<String, AppError>;
    /// Inserts the row and returns the generated id.
    async fn insert(&self, student: &StudentInsert) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;
    /// All rows, most recently created (highest id) first.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;
    async fn update(&self, student: &Student) -> Result<u64, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError>;
}

impl SqlxStudentRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxStudentRepo { pool }
    }
}

#[async_trait]
impl StudentRepository for SqlxStudentRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn database_name(&self) -> Result<String, AppError> {
        let name: String = sqlx::query_scalar("SELECT current_database()")
            .fetch_one(&self.pool)
            .await?;

        Ok(name)
    }

    async fn insert(&self, student: &StudentInsert) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO student (name, email, age, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.age)
        .bind(student.created_at)
        .bind(student.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, email, age, created_at, updated_at FROM student WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, age, created_at, updated_at FROM student ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn update(&self, student: &Student) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE student
            SET name = $1, email = $2, age = $3, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.age)
        .bind(student.updated_at)
        .bind(student.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM student WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
