use std::io;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use jsonwebtoken::Algorithm;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_core::{AuthGate, JwksCache, TokenVerifier};
use casting_service::app_state::AppState;
use casting_service::config::Settings;
use casting_service::db::{create_pool, run_migrations};
use casting_service::routes::configure_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env().expect("Failed to load configuration");
    tracing::info!("Starting casting-service v{}", env!("CARGO_PKG_VERSION"));

    let algorithms = settings
        .auth
        .algorithms
        .iter()
        .map(|name| name.parse::<Algorithm>())
        .collect::<Result<Vec<_>, _>>()
        .expect("Invalid AUTH_ALGORITHMS entry");

    let keys = JwksCache::new(
        &settings.auth.domain,
        Duration::from_secs(settings.auth.jwks_ttl_seconds),
    );
    let verifier = TokenVerifier::new(
        &settings.auth.domain,
        settings.auth.audience.clone(),
        algorithms,
        keys,
    );
    let gate = AuthGate::new(verifier);
    tracing::info!(
        domain = %settings.auth.domain,
        audience = %settings.auth.audience,
        "Token verification configured"
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .expect("Failed to create database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!(
        "Database pool created with {} max connections",
        settings.database.max_connections
    );

    let state = AppState { pool, gate };
    let bind_addr = (settings.server.host.clone(), settings.server.port);
    tracing::info!("Listening on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION]);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
