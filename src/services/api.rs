//! HTTP handlers for the link management API (`/api/links`).

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::errors::LinkletError;
use crate::repository::LinkStore;
use crate::services::links::{CreateLinkRequest, LinkRecord, LinkService};

#[derive(Debug, Clone, Deserialize)]
pub struct ListLinksQuery {
    /// Case-insensitive substring match against code or target URL.
    pub q: Option<String>,
}

/// Maps service errors onto the wire: structured JSON with the status the
/// taxonomy prescribes. Database errors stay opaque to the caller.
fn error_response(err: &LinkletError) -> HttpResponse {
    match err {
        LinkletError::Validation(msg) => HttpResponse::BadRequest().json(json!({
            "error": "invalid_input",
            "message": msg,
        })),
        LinkletError::DuplicateCode(msg) => HttpResponse::Conflict().json(json!({
            "error": "duplicate_code",
            "message": msg,
        })),
        LinkletError::NotFound(msg) => HttpResponse::NotFound().json(json!({
            "error": "not_found",
            "message": msg,
        })),
        _ => {
            error!("Store error: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "error": "internal_error",
                "message": "Internal server error",
            }))
        }
    }
}

pub struct ApiService;

impl ApiService {
    pub async fn post_link(
        store: web::Data<Arc<dyn LinkStore>>,
        request: web::Json<CreateLinkRequest>,
    ) -> impl Responder {
        match LinkService::create_link(store.as_ref().as_ref(), &request).await {
            Ok(result) => {
                info!(
                    "API: link created - {} (generated: {})",
                    result.link.code, result.generated_code
                );
                HttpResponse::Created().json(LinkRecord::from(&result.link))
            }
            Err(e) => error_response(&e),
        }
    }

    pub async fn get_all_links(
        store: web::Data<Arc<dyn LinkStore>>,
        query: web::Query<ListLinksQuery>,
    ) -> impl Responder {
        match LinkService::list_links(store.as_ref().as_ref(), query.q.as_deref()).await {
            Ok(links) => {
                let records: Vec<LinkRecord> = links.iter().map(LinkRecord::from).collect();
                HttpResponse::Ok().json(records)
            }
            Err(e) => error_response(&e),
        }
    }

    pub async fn get_link(
        store: web::Data<Arc<dyn LinkStore>>,
        code: web::Path<String>,
    ) -> impl Responder {
        match LinkService::get_link(store.as_ref().as_ref(), &code).await {
            Ok(link) => HttpResponse::Ok().json(LinkRecord::from(&link)),
            Err(e) => error_response(&e),
        }
    }

    pub async fn delete_link(
        store: web::Data<Arc<dyn LinkStore>>,
        code: web::Path<String>,
    ) -> impl Responder {
        match LinkService::delete_link(store.as_ref().as_ref(), &code).await {
            Ok(()) => {
                info!("API: link deleted - {}", code);
                HttpResponse::NoContent().finish()
            }
            Err(e) => error_response(&e),
        }
    }
}
