use actix_web::web;

mod json_error;
mod student_pages;
mod students;
mod system;

/// Registers every route; shared by the server binary and the integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(json_error::config_routes);
    cfg.configure(system::config_routes);

    cfg.service(
        web::scope("/api")
            .configure(students::config_routes)
    );

    cfg.configure(student_pages::config_routes);
}
