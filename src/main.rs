use std::sync::Arc;

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use once_cell::sync::Lazy;
use portfolio_api::{
    constants::START_TIME,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    middlewares::cors::build_cors,
    repositories::{
        experience::ExperienceRepository,
        in_memory::InMemoryExperienceRepo,
        sqlx_repo::{RepositoryConfig, SqlxExperienceRepo},
    },
    routes::configure_routes,
    settings::{AppConfig, StorageBackend},
    telemetry::init_tracing,
    AppState
};
use tracing_actix_web::TracingLogger;

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn ExperienceRepository>> {
    match config.storage {
        StorageBackend::Postgres => {
            let pool = create_pool(config)
                .await
                .context("Failed to create database connection pool")?;

            if config.run_migrations {
                run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
            }

            let repo_config = RepositoryConfig {
                query_timeout: config.query_timeout(),
            };
            Ok(Arc::new(SqlxExperienceRepo::new(pool, repo_config)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; experiences will not survive a restart");
            Ok(Arc::new(InMemoryExperienceRepo::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    Lazy::force(&START_TIME);

    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(config.log_json);
    tracing::info!("Loaded configuration: {:?}", config);

    let experience_repo = build_repository(&config).await?;

    let app_state = web::Data::new(AppState::new(&config, experience_repo));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    tokio::select! {
        res = server => res.context("HTTP server error")?,
        _ = shutdown_signal() => {},
    }

    tracing::info!("Server stopped");
    Ok(())
}
