use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};

use crate::{
    entities::student::{Student, StudentDetails, StudentInsert},
    errors::AppError,
    repositories::student::StudentRepository,
};

/// Id that always fails lookup, used to exercise the error logging path.
pub const FORCED_ERROR_ID: i64 = 999;
pub const FORCED_ERROR_MESSAGE: &str = "forced error for aspect testing";

#[async_trait]
pub trait StudentService: Send + Sync {
    async fn create_student(&self, details: StudentDetails) -> Result<Student, AppError>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;
    async fn get_all_students(&self) -> Result<Vec<Student>, AppError>;
    async fn update_student(&self, id: i64, details: StudentDetails) -> Result<Option<Student>, AppError>;
    async fn delete_student(&self, id: i64) -> Result<(), AppError>;
}

pub struct StudentHandler<R>
where
    R: StudentRepository,
{
    pub student_repo: R,
}

impl<R> StudentHandler<R>
where
    R: StudentRepository,
{
    pub fn new(student_repo: R) -> Self {
        StudentHandler { student_repo }
    }
}

/// Postgres keeps microseconds, so stamps are truncated up front to make the
/// returned record match what a later read yields.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[async_trait]
impl<R> StudentService for StudentHandler<R>
where
    R: StudentRepository,
{
    /// Stamps both timestamps and inserts the student
    async fn create_student(&self, details: StudentDetails) -> Result<Student, AppError> {
        let insert = StudentInsert::new(details, now());

        let id = self.student_repo.insert(&insert).await?;

        Ok(insert.into_student(id))
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        if id == FORCED_ERROR_ID {
            return Err(AppError::InternalError(FORCED_ERROR_MESSAGE.to_string()));
        }

        self.student_repo.find_by_id(id).await
    }

    async fn get_all_students(&self) -> Result<Vec<Student>, AppError> {
        self.student_repo.find_all().await
    }

    /// Replaces name/email/age and refreshes `updated_at`; `None` if the id is unknown
    async fn update_student(&self, id: i64, details: StudentDetails) -> Result<Option<Student>, AppError> {
        let Some(mut student) = self.student_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        student.name = details.name;
        student.email = details.email;
        student.age = details.age;
        student.updated_at = now().max(student.updated_at);

        let affected = self.student_repo.update(&student).await?;
        if affected == 0 {
            tracing::warn!("Student {} vanished before update", id);
        }

        Ok(Some(student))
    }

    async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        let affected = self.student_repo.delete_by_id(id).await?;
        if affected == 0 {
            tracing::debug!("Delete of student {} matched no rows", id);
        }
        Ok(())
    }
}
