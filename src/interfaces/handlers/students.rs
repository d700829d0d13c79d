use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::student::{StudentDetails, StudentForm}, errors::AppError, AppState};

#[instrument(skip(state, data))]
pub async fn create_student(
    state: web::Data<AppState>,
    data: web::Json<StudentForm>
) -> Result<impl Responder, AppError> {
    let details = StudentDetails::try_from(data.into_inner())?;

    let student = state.student_service.create_student(details).await?;

    Ok(HttpResponse::Created().json(student))
}

#[instrument(skip(state))]
pub async fn get_student_by_id(
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = match state.student_service.get_student_by_id(student_id.into_inner()).await? {
        Some(student) => HttpResponse::Ok().json(student),
        None => HttpResponse::NotFound().finish(),
    };

    Ok(response)
}

#[instrument(skip(state))]
pub async fn get_all_students(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let students = state.student_service.get_all_students().await?;

    Ok(HttpResponse::Ok().json(students))
}

#[instrument(skip(state, data))]
pub async fn update_student(
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<StudentForm>,
) -> Result<impl Responder, AppError> {
    let details = StudentDetails::try_from(data.into_inner())?;

    let response = match state.student_service.update_student(student_id.into_inner(), details).await? {
        Some(student) => HttpResponse::Ok().json(student),
        None => HttpResponse::NotFound().finish(),
    };

    Ok(response)
}

#[instrument(skip(state))]
pub async fn delete_student(
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.student_service.delete_student(student_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
