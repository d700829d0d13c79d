use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::AppError;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentInsert {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentInsert {
    /// Builds the row to insert, stamping both timestamps with `now`.
    pub fn new(details: StudentDetails, now: DateTime<Utc>) -> Self {
        StudentInsert {
            name: details.name,
            email: details.email,
            age: details.age,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ───── Request Payloads ──────────────────────────────────────────────

/// Client payload for create and update.
///
/// Missing or `null` `name`/`email` deserialize to empty strings so they surface as
/// "required" violations rather than JSON errors. Server-controlled fields
/// (`id`, `createdAt`, `updatedAt`) are not part of the payload and are
/// silently dropped if sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct StudentForm {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_not_blank", message = "name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "validate_not_blank", message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(
        required(message = "age is required"),
        range(min = 1, message = "age must be at least 1")
    )]
    pub age: Option<i32>,
}

impl StudentForm {
    /// Validates the payload and returns the fields the service works with.
    pub fn validated(&self) -> Result<StudentDetails, AppError> {
        self.validate()?;

        let age = self.age.ok_or_else(|| {
            AppError::ValidationError([("age".to_string(), "age is required".to_string())].into())
        })?;

        Ok(StudentDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            age,
        })
    }
}

impl TryFrom<StudentForm> for StudentDetails {
    type Error = AppError;

    fn try_from(form: StudentForm) -> Result<Self, Self::Error> {
        form.validated()
    }
}

impl From<&Student> for StudentForm {
    fn from(student: &Student) -> Self {
        StudentForm {
            name: student.name.clone(),
            email: student.email.clone(),
            age: Some(student.age),
        }
    }
}

/// Raw HTML form submission. Every field arrives as text, so `age` is parsed
/// here and an unparseable value is treated as missing.
#[derive(Debug, Deserialize)]
pub struct StudentPageForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: String,
}

impl From<StudentPageForm> for StudentForm {
    fn from(form: StudentPageForm) -> Self {
        StudentForm {
            name: form.name,
            email: form.email,
            age: form.age.trim().parse().ok(),
        }
    }
}

/// Validated name/email/age, the only fields a client controls.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDetails {
    pub name: String,
    pub email: String,
    pub age: i32,
}

// ───── Validators ────────────────────────────────────────────────────

/// An explicit `null` reads as an empty string so it is reported as blank.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rejects empty and whitespace-only strings.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, age: Option<i32>) -> StudentForm {
        StudentForm {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    #[test]
    fn valid_form_yields_details() {
        let details = form("Kim", "kim@example.com", Some(20)).validated().unwrap();
        assert_eq!(details.name, "Kim");
        assert_eq!(details.email, "kim@example.com");
        assert_eq!(details.age, 20);
    }

    #[test]
    fn every_violated_field_is_reported() {
        let err = form("  ", "not-an-email", Some(0)).validated().unwrap_err();
        let AppError::ValidationError(fields) = err else {
            panic!("expected a validation error, got {err:?}");
        };
        assert_eq!(fields.get("name").map(String::as_str), Some("name is required"));
        assert_eq!(
            fields.get("email").map(String::as_str),
            Some("email must be a valid email address")
        );
        assert_eq!(fields.get("age").map(String::as_str), Some("age must be at least 1"));
    }

    #[test]
    fn missing_age_is_required() {
        let err = form("Kim", "kim@example.com", None).validated().unwrap_err();
        let AppError::ValidationError(fields) = err else {
            panic!("expected a validation error, got {err:?}");
        };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("age").map(String::as_str), Some("age is required"));
    }

    #[test]
    fn missing_json_fields_become_blank_violations() {
        let form: StudentForm = serde_json::from_str(r#"{"age": 3}"#).unwrap();
        let AppError::ValidationError(fields) = form.validated().unwrap_err() else {
            panic!("expected a validation error");
        };
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("age"));
    }

    #[test]
    fn null_json_fields_become_blank_violations() {
        let form: StudentForm =
            serde_json::from_str(r#"{"name": null, "email": null, "age": null}"#).unwrap();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        let AppError::ValidationError(fields) = form.validated().unwrap_err() else {
            panic!("expected a validation error");
        };
        assert_eq!(fields.get("name").map(String::as_str), Some("name is required"));
        assert_eq!(fields.get("email").map(String::as_str), Some("email is required"));
        assert_eq!(fields.get("age").map(String::as_str), Some("age is required"));
    }

    #[test]
    fn page_form_parses_age_text() {
        let parsed = StudentForm::from(StudentPageForm {
            name: "Kim".into(),
            email: "kim@example.com".into(),
            age: " 21 ".into(),
        });
        assert_eq!(parsed.age, Some(21));

        let garbage = StudentForm::from(StudentPageForm {
            name: "Kim".into(),
            email: "kim@example.com".into(),
            age: "twenty".into(),
        });
        assert_eq!(garbage.age, None);
    }

    #[test]
    fn student_serializes_in_camel_case() {
        let now = Utc::now();
        let student = StudentInsert::new(
            StudentDetails { name: "Kim".into(), email: "kim@example.com".into(), age: 20 },
            now,
        )
        .into_student(7);

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
