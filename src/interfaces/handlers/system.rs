use actix_web::{web, get, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize, Clone, Default)]
struct HealthCheckResponse {
    status: String,
    version: String,
    uptime: String,
    started_at: String,
    timestamp: String,
    database: String,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let database = match state.student_repo.check_connection().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::warn!("Health check database probe failed: {}", e);
            "Unavailable"
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: human_uptime.to_string(),
        started_at: START_TIME.to_rfc3339(),
        timestamp: now_utc.to_rfc3339(),
        database: database.to_string(),
    })
}

/// Plain-text connectivity probe.
#[get("/dbconn")]
pub async fn db_connection(state: web::Data<AppState>) -> impl Responder {
    match state.student_repo.database_name().await {
        Ok(name) => {
            tracing::info!("DB connection OK: {}", name);
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(format!("DB connection OK: {}", name))
        }
        Err(e) => {
            tracing::error!("DB connection failed: {}", e);
            HttpResponse::ServiceUnavailable()
                .content_type("text/plain; charset=utf-8")
                .body("DB connection failed")
        }
    }
}
