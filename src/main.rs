//! permalist server binary.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use permalist::adapters::http::{app_router, AppState, SessionSettings};
use permalist::adapters::password::BcryptPasswordHasher;
use permalist::adapters::postgres::{self, PostgresItemRepository, PostgresUserRepository};
use permalist::adapters::session::{InMemorySessionStore, RedisSessionStore};
use permalist::config::{AppConfig, ServerConfig, SessionBackend, ValidationError};
use permalist::ports::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let pool = postgres::connect(&config.database).await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "database pool ready"
    );

    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let sessions = session_store(&config).await?;
    let state = AppState::new(
        Arc::new(PostgresItemRepository::new(pool.clone())),
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(BcryptPasswordHasher::new(config.session.bcrypt_cost)),
        sessions,
        SessionSettings::from_config(&config.session)?,
        config.features,
    );

    let app = app_router(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %listener.local_addr()?, "permalist listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if server.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn session_store(config: &AppConfig) -> Result<Arc<dyn SessionStore>, Box<dyn Error>> {
    match config.session.backend {
        SessionBackend::Memory => {
            tracing::info!("using in-memory session store");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
        SessionBackend::Redis => {
            let url = config
                .redis
                .url
                .as_deref()
                .ok_or(ValidationError::MissingRequired("REDIS_URL"))?;
            let client = redis::Client::open(url)?;
            let conn = tokio::time::timeout(
                config.redis.timeout(),
                client.get_multiplexed_tokio_connection(),
            )
            .await??;
            tracing::info!("using redis session store");
            Ok(Arc::new(
                RedisSessionStore::new(conn).with_key_prefix(config.redis.key_prefix.clone()),
            ))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
