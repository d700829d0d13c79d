use std::{fmt::Debug, future::Future, time::Instant};

use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    entities::student::{Student, StudentDetails},
    errors::AppError,
    use_cases::student::StudentService,
};

/// Wraps a `StudentService` and logs every call: the signature on entry, then
/// the elapsed time with either the returned value or the error message.
/// Results and errors are passed through untouched.
pub struct LoggedStudentService<S> {
    inner: S,
}

impl<S> LoggedStudentService<S>
where
    S: StudentService,
{
    pub fn new(inner: S) -> Self {
        LoggedStudentService { inner }
    }
}

async fn around<T, F>(signature: String, call: F) -> Result<T, AppError>
where
    T: Debug,
    F: Future<Output = Result<T, AppError>>,
{
    info!("--- [service] start: {}", signature);
    let started = Instant::now();

    match call.await {
        Ok(value) => {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            info!(elapsed_ms, "--- [service] ok: {}, took {}ms", signature, elapsed_ms);
            info!("--- [service] returned: {:?}", value);
            Ok(value)
        }
        Err(e) => {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            error!(elapsed_ms, "--- [service] failed: {}, took {}ms", signature, elapsed_ms);
            error!("--- [service] error: {}", e);
            Err(e)
        }
    }
}

#[async_trait]
impl<S> StudentService for LoggedStudentService<S>
where
    S: StudentService,
{
    async fn create_student(&self, details: StudentDetails) -> Result<Student, AppError> {
        around(
            format!("StudentService::create_student({:?})", details),
            self.inner.create_student(details),
        )
        .await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        around(
            format!("StudentService::get_student_by_id({})", id),
            self.inner.get_student_by_id(id),
        )
        .await
    }

    async fn get_all_students(&self) -> Result<Vec<Student>, AppError> {
        around(
            "StudentService::get_all_students()".to_string(),
            self.inner.get_all_students(),
        )
        .await
    }

    async fn update_student(&self, id: i64, details: StudentDetails) -> Result<Option<Student>, AppError> {
        around(
            format!("StudentService::update_student({}, {:?})", id, details),
            self.inner.update_student(id, details),
        )
        .await
    }

    async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        around(
            format!("StudentService::delete_student({})", id),
            self.inner.delete_student(id),
        )
        .await
    }
}
