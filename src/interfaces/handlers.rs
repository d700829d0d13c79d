pub mod student_pages;
pub mod students;
pub mod system;
