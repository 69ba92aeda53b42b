pub mod api;
pub mod health;
pub mod links;
pub mod pages;
pub mod redirect;

pub use api::ApiService;
pub use health::{AppStartTime, HealthService};
pub use links::{CreateLinkRequest, LinkCreateResult, LinkRecord, LinkService};
pub use pages::PageService;
pub use redirect::RedirectService;

use actix_web::web;

/// Registers the full HTTP surface. Fixed routes are claimed first; the
/// catch-all single-segment redirect route comes last so it can never
/// shadow them. Reserved codes are additionally rejected at creation.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(HealthService::health_check))
        .service(
            web::scope("/api")
                .route("/links", web::get().to(ApiService::get_all_links))
                .route("/links", web::post().to(ApiService::post_link))
                .route("/links/{code}", web::get().to(ApiService::get_link))
                .route("/links/{code}", web::delete().to(ApiService::delete_link)),
        )
        .route("/", web::get().to(PageService::dashboard))
        .route("/code/{code}", web::get().to(PageService::stats))
        .route("/{code}", web::get().to(RedirectService::handle_redirect))
        .route("/{code}", web::head().to(RedirectService::handle_redirect));
}
