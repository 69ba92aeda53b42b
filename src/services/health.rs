use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::trace;

/// Process start time, stored as app data at startup.
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(app_start_time: web::Data<AppStartTime>) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(json!({
                "ok": true,
                "version": env!("CARGO_PKG_VERSION"),
                "uptime": uptime_seconds,
            }))
    }
}
