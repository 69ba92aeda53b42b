//! Redirect handler: the `GET /{code}` hot path.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, error};

use crate::errors::LinkletError;
use crate::repository::LinkStore;

pub struct RedirectService;

impl RedirectService {
    /// Matches any single path segment not claimed by a fixed route.
    /// Lookup miss is a 404; on a hit the click must be recorded before
    /// the 302 goes out, and a store failure during either step is a 500
    /// rather than a silently skipped count.
    pub async fn handle_redirect(
        path: web::Path<String>,
        store: web::Data<Arc<dyn LinkStore>>,
    ) -> impl Responder {
        let code = path.into_inner();

        let link = match store.get(&code).await {
            Ok(link) => link,
            Err(LinkletError::NotFound(_)) => {
                debug!("Redirect link not found: {}", code);
                return Self::not_found_response();
            }
            Err(e) => {
                error!("Redirect lookup failed for {}: {}", code, e);
                return Self::server_error_response();
            }
        };

        if let Err(e) = store.record_click(&code).await {
            // The row may have been deleted between lookup and update.
            return match e {
                LinkletError::NotFound(_) => Self::not_found_response(),
                _ => {
                    error!("Click recording failed for {}: {}", code, e);
                    Self::server_error_response()
                }
            };
        }

        HttpResponse::build(StatusCode::FOUND)
            .insert_header(("Location", link.target_url))
            .finish()
    }

    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }

    fn server_error_response() -> HttpResponse {
        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body("Internal Server Error")
    }
}
