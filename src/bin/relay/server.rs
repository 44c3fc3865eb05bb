use actix_web::{web, App, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use course_registry::config::EnvConfig;
use course_registry::relay::client::ApiClient;
use course_registry::relay::routes::configure_relay_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.relay.port);

    println!("Starting relay on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(ApiClient::new(
                config.relay.api_base_url.clone(),
            )))
            .configure(configure_relay_routes)
    })
    .bind(addr)?
    .run()
    .await
}
