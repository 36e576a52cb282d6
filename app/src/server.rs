//! FILENAME: app/src/server.rs
// PURPOSE: HTTP server wiring for the dashboard API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::commands;
use crate::AppState;

pub struct Server {
    router: Router,
}

impl Server {
    pub fn new(state: Arc<AppState>) -> Self {
        let router = Router::new()
            .route("/api/dashboard", get(commands::get_dashboard))
            .route("/api/countries", post(commands::set_countries))
            .route("/api/measure", post(commands::set_measure))
            .route("/api/zoom", post(commands::zoom))
            .with_state(state);
        Server { router }
    }

    pub async fn run(self, addr: SocketAddr) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("listening on {addr}");
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
