use std::collections::BTreeMap;

use actix_web::{http::header, web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::student::{StudentForm, StudentPageForm},
    errors::AppError,
    templates,
    AppState,
};

const LIST_PATH: &str = "/students";

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LIST_PATH))
        .finish()
}

#[instrument(skip(state))]
pub async fn list_students(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let students = state.student_service.get_all_students().await?;
    Ok(html(templates::student_list(&students)))
}

pub async fn new_student_form() -> HttpResponse {
    html(templates::new_student(&StudentForm::default(), &BTreeMap::new()))
}

/// Re-renders the form with field messages when validation fails
#[instrument(skip(state, form))]
pub async fn create_student(
    state: web::Data<AppState>,
    form: web::Form<StudentPageForm>,
) -> Result<HttpResponse, AppError> {
    let form = StudentForm::from(form.into_inner());

    let details = match form.validated() {
        Ok(details) => details,
        Err(AppError::ValidationError(errors)) => {
            return Ok(html(templates::new_student(&form, &errors)));
        }
        Err(e) => return Err(e),
    };

    state.student_service.create_student(details).await?;
    Ok(redirect_to_list())
}

#[instrument(skip(state))]
pub async fn edit_student_form(
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = student_id.into_inner();

    match state.student_service.get_student_by_id(id).await? {
        Some(student) => Ok(html(templates::edit_student(
            id,
            &StudentForm::from(&student),
            &BTreeMap::new(),
        ))),
        None => Ok(redirect_to_list()),
    }
}

#[instrument(skip(state, form))]
pub async fn update_student(
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
    form: web::Form<StudentPageForm>,
) -> Result<HttpResponse, AppError> {
    let id = student_id.into_inner();
    let form = StudentForm::from(form.into_inner());

    let details = match form.validated() {
        Ok(details) => details,
        Err(AppError::ValidationError(errors)) => {
            return Ok(html(templates::edit_student(id, &form, &errors)));
        }
        Err(e) => return Err(e),
    };

    if state.student_service.update_student(id, details).await?.is_none() {
        tracing::info!("Student {} not found for update, returning to list", id);
    }
    Ok(redirect_to_list())
}

#[instrument(skip(state))]
pub async fn delete_student(
    student_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.student_service.delete_student(student_id.into_inner()).await?;
    Ok(redirect_to_list())
}
