use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Builds the CORS policy from the configured origins; `*` allows any origin.
pub fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::default()
            .allow_any_origin()
            .allowed_methods(allowed_methods())
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);
    }

    origins.iter().fold(
        Cors::default()
            .allowed_methods(allowed_methods())
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::PUT, Method::DELETE]
}
