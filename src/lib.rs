use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{cors, db, telemetry, templates};

use middlewares::service_logging::LoggedStudentService;
use repositories::{sqlx_repo::SqlxStudentRepo, student::StudentRepository};
use use_cases::student::{StudentHandler, StudentService};

/// Shared handler state. The service is stored behind its trait so the
/// HTTP layer can be exercised against a mock.
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<dyn StudentService>,
    pub student_repo: Arc<dyn StudentRepository>,
}

pub type AppStudentService = LoggedStudentService<StudentHandler<SqlxStudentRepo>>;

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let student_repo = SqlxStudentRepo::new(pool);
        let student_service: AppStudentService =
            LoggedStudentService::new(StudentHandler::new(student_repo.clone()));

        AppState::from_parts(Arc::new(student_service), Arc::new(student_repo))
    }

    pub fn from_parts(
        student_service: Arc<dyn StudentService>,
        student_repo: Arc<dyn StudentRepository>,
    ) -> Self {
        AppState {
            student_service,
            student_repo,
        }
    }
}
