use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linklet::config::Config;
use linklet::repository::{LinkStore, SeaOrmRepository};
use linklet::services::{self, AppStartTime};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let repository = SeaOrmRepository::new(&config.database_url)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let store: Arc<dyn LinkStore> = Arc::new(repository);

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(services::routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
