//! taskboard HTTP server entry point.
//!
//! Wires the `PostgreSQL` repository into the task service and serves the
//! API. Configuration comes from the environment:
//!
//! - `DATABASE_URL` (required): `PostgreSQL` connection string. The
//!   `tasks` table must exist; migrations live under `migrations/` and
//!   are applied with the Diesel CLI.
//! - `TASKBOARD_ADDR` (optional): bind address, defaults to
//!   `0.0.0.0:8080`.
//! - `RUST_LOG` (optional): tracing filter, defaults to `info`.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use taskboard::http::{self, AppState};
use taskboard::task::{adapters::postgres::PostgresTaskRepository, services::TaskService};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
enum ServerError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),

    #[error("failed to build connection pool: {0}")]
    Pool(#[source] diesel::r2d2::PoolError),

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

struct ServerConfig {
    database_url: String,
    addr: SocketAddr,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ServerError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ServerError::MissingDatabaseUrl)?;
        let addr_raw =
            env::var("TASKBOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
        let addr = addr_raw
            .parse::<SocketAddr>()
            .map_err(|_| ServerError::InvalidBindAddr(addr_raw.clone()))?;
        Ok(Self { database_url, addr })
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_tracing();
    let config = ServerConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager).map_err(ServerError::Pool)?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = Arc::new(TaskService::new(repository, Arc::new(DefaultClock)));
    let state = AppState::new(service);

    http::serve(config.addr, state)
        .await
        .map_err(ServerError::Serve)
}
