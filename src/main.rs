
mod config;
mod diagnostic;
mod error;
mod model;
mod web;

#[cfg(test)]
mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::config;

use crate::model::ModelManager;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

const PORT: u16 = 4000;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config();

    // Detached: serving never waits on, or reads from, the review summary.
    diagnostic::spawn_review_summary(config);

    let mm = ModelManager::new();
    let routes_all = web::routes(mm, &config.WEB_FOLDER);

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{:<12} - {addr}", "LISTENING");
    info!("Running a GraphQL API server at localhost:{PORT}/graphql");

    axum::serve(listener, routes_all).await?;
    Ok(())
}
