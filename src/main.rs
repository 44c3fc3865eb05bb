use actix_cors::Cors;
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use course_registry::config::EnvConfig;
use course_registry::db::postgres_service::PostgresService;
use course_registry::routes::configure_routes;
use course_registry::utils::session::SESSION_COOKIE;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let key = match config.session_key.as_deref() {
        Some(secret) => Key::derive_from(secret.as_bytes()),
        None => {
            warn!("SESSION_KEY not set, using an ephemeral session key");
            Key::generate()
        }
    };

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name(SESSION_COOKIE.to_string())
            .cookie_path("/".to_string())
            // plain-HTTP deployment, the relay talks to us over localhost
            .cookie_secure(false)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        App::new()
            .wrap(Cors::permissive())
            .wrap(session)
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
