use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    /// Field name to the first violation message for that field.
    ValidationError(BTreeMap<String, String>),
    Conflict(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|(field, message)| format!("{}:{}", field, message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => serde_json::json!(errors),
            _ => serde_json::json!({"error": self.to_string()}),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Keeps the first violation per field; fields come out in name order.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                errors.first().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    (field.to_string(), message)
                })
            })
            .collect();

        AppError::ValidationError(field_errors)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Database conflict occurred".into())
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23503")) => {
                AppError::Conflict("Foreign key violation".into())
            }
            _ => AppError::InternalError(format!("Database error: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn first_violation_per_field_wins() {
        let mut errors = ValidationErrors::new();
        let mut blank = ValidationError::new("not_blank");
        blank.message = Some("email is required".into());
        let mut syntax = ValidationError::new("email");
        syntax.message = Some("email must be a valid email address".into());
        errors.add("email", blank);
        errors.add("email", syntax);
        errors.add("age", ValidationError::new("range"));

        let AppError::ValidationError(fields) = AppError::from(errors) else {
            panic!("expected a validation error");
        };

        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["age", "email"]);
        assert_eq!(fields["email"], "email is required");
        assert_eq!(fields["age"], "age is invalid");
    }

    #[test]
    fn validation_error_renders_field_map_as_body() {
        let err = AppError::ValidationError(
            [("name".to_string(), "name is required".to_string())].into(),
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "validation error: name:name is required");
    }

    #[test]
    fn conflict_maps_to_409_with_error_body() {
        let err = AppError::Conflict("Database conflict occurred".into());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Conflict: Database conflict occurred");
    }

    #[test]
    fn internal_error_maps_to_500() {
        let err = AppError::InternalError("boom".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
