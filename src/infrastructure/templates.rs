//! Server-rendered pages for the student views.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::entities::student::{Student, StudentForm};

/// Escapes text for use in element bodies and quoted attribute values.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = title,
        body = body,
    )
}

/// The student list, newest first, with edit links and delete buttons.
pub fn student_list(students: &[Student]) -> String {
    let mut body = String::from("<h1>Students</h1>\n<p><a href=\"/students/new\">New student</a></p>\n");

    if students.is_empty() {
        body.push_str("<p>No students yet.</p>\n");
        return layout("Students", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>ID</th><th>Name</th><th>Email</th><th>Age</th>\
         <th>Created</th><th>Updated</th><th></th></tr></thead>\n<tbody>\n",
    );

    for student in students {
        let _ = write!(
            body,
            "<tr><td>{id}</td><td>{name}</td><td>{email}</td><td>{age}</td>\
             <td>{created}</td><td>{updated}</td>\
             <td><a href=\"/students/{id}/edit\">Edit</a> \
             <form method=\"post\" action=\"/students/{id}/delete\" style=\"display:inline\">\
             <button type=\"submit\">Delete</button></form></td></tr>\n",
            id = student.id,
            name = escape(&student.name),
            email = escape(&student.email),
            age = student.age,
            created = student.created_at.format("%Y-%m-%d %H:%M:%S"),
            updated = student.updated_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }

    body.push_str("</tbody>\n</table>\n");
    layout("Students", &body)
}

/// Create form, refilled with `form` and annotated with `errors` after a failed submit.
pub fn new_student(form: &StudentForm, errors: &BTreeMap<String, String>) -> String {
    let body = format!(
        "<h1>New student</h1>\n{}",
        student_fields("/students", "Create", form, errors)
    );
    layout("New student", &body)
}

pub fn edit_student(id: i64, form: &StudentForm, errors: &BTreeMap<String, String>) -> String {
    let body = format!(
        "<h1>Edit student #{}</h1>\n{}",
        id,
        student_fields(&format!("/students/{}", id), "Save", form, errors)
    );
    layout("Edit student", &body)
}

fn student_fields(
    action: &str,
    submit_label: &str,
    form: &StudentForm,
    errors: &BTreeMap<String, String>,
) -> String {
    let age = form.age.map(|a| a.to_string()).unwrap_or_default();

    let mut html = format!("<form method=\"post\" action=\"{}\">\n", action);
    html.push_str(&field("name", "Name", "text", &form.name, errors));
    html.push_str(&field("email", "Email", "email", &form.email, errors));
    html.push_str(&field("age", "Age", "number", &age, errors));
    let _ = write!(
        html,
        "<p><button type=\"submit\">{}</button> <a href=\"/students\">Back to list</a></p>\n</form>\n",
        submit_label
    );
    html
}

fn field(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    errors: &BTreeMap<String, String>,
) -> String {
    let mut html = format!(
        "<p><label for=\"{name}\">{label}</label> \
         <input id=\"{name}\" name=\"{name}\" type=\"{input_type}\" value=\"{value}\">",
        name = name,
        label = label,
        input_type = input_type,
        value = escape(value),
    );
    if let Some(message) = errors.get(name) {
        let _ = write!(html, " <span class=\"error\">{}</span>", message);
    }
    html.push_str("</p>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn student(id: i64, name: &str) -> Student {
        let now = Utc::now();
        Student {
            id,
            name: name.to_string(),
            email: "kim@example.com".to_string(),
            age: 20,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;&#47;b&gt;");
    }

    #[test]
    fn list_escapes_student_fields() {
        let page = student_list(&[student(3, "<script>alert(1)</script>")]);
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("/students/3/edit"));
        assert!(page.contains("/students/3/delete"));
    }

    #[test]
    fn empty_list_says_so() {
        assert!(student_list(&[]).contains("No students yet."));
    }

    #[test]
    fn form_shows_values_and_errors() {
        let form = StudentForm { name: String::new(), email: "kim@example.com".into(), age: Some(0) };
        let errors = BTreeMap::from([("name".to_string(), "name is required".to_string())]);
        let page = new_student(&form, &errors);

        assert!(page.contains("action=\"/students\""));
        assert!(page.contains("value=\"kim@example.com\""));
        assert!(page.contains("value=\"0\""));
        assert!(page.contains("<span class=\"error\">name is required</span>"));
    }

    #[test]
    fn edit_form_posts_to_student_path() {
        let page = edit_student(5, &StudentForm::from(&student(5, "Kim")), &BTreeMap::new());
        assert!(page.contains("Edit student #5"));
        assert!(page.contains("value=\"Kim\""));
    }
}
