use actix_web::web;

use crate::handlers::student_pages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(student_pages::list_students))
    );

    // "/new" must be registered ahead of "/{student_id}".
    cfg.service(
        web::scope("/students")
            .service(
                web::resource("")
                    .route(web::get().to(student_pages::list_students))
                    .route(web::post().to(student_pages::create_student))
            )
            .service(
                web::resource("/new")
                    .route(web::get().to(student_pages::new_student_form))
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::post().to(student_pages::update_student))
            )
            .service(
                web::resource("/{student_id}/edit")
                    .route(web::get().to(student_pages::edit_student_form))
            )
            .service(
                web::resource("/{student_id}/delete")
                    .route(web::post().to(student_pages::delete_student))
            )
    );
}
