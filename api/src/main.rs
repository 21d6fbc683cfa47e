use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use acct_api::{config::load_config, create_app, AppState};
use acct_core::repositories::{AccountRepository, InMemoryAccountRepository};
use acct_core::services::{
    CredentialCodec, TokenService, TokenServiceConfig, UserCountReporter, UserCountReporterConfig,
};
use acct_infra::{DatabasePool, MySqlAccountRepository};
use acct_shared::config::{AppConfig, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = load_config().context("failed to load configuration")?;

    init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "starting account service"
    );

    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.auth))
            .context("failed to initialize token service")?,
    );

    match config.database.url.as_deref() {
        None => {
            warn!("database.url is not set, accounts are kept in memory and lost on restart");
            let repository = Arc::new(InMemoryAccountRepository::new());
            serve(&config, repository, token_service).await
        }
        Some(_) => {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("failed to connect to database")?;
            pool.run_migrations()
                .await
                .context("failed to run database migrations")?;
            info!(pool = %pool.get_statistics(), "database ready");

            let repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
            let result = serve(&config, repository, token_service).await;
            pool.close().await;
            result
        }
    }
}

/// Run the HTTP server until it is stopped
async fn serve<R>(
    config: &AppConfig,
    repository: Arc<R>,
    token_service: Arc<TokenService>,
) -> anyhow::Result<()>
where
    R: AccountRepository + 'static,
{
    let state = web::Data::new(AppState::new(
        Arc::clone(&repository),
        token_service,
        CredentialCodec::default(),
    ));

    let reporter = Arc::new(UserCountReporter::new(
        repository,
        UserCountReporterConfig::from(&config.reporting),
    ));
    let report_task = reporter.start_background_task();

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), cors.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "server listening");

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error")?;

    if let Some(task) = report_task {
        task.abort();
    }

    info!("server stopped");
    Ok(())
}

/// Install the global tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
