use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, management::JobContext};

pub async fn start_api_server(ctx: Arc<JobContext>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/", post(api::trigger).layer(Extension(ctx)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
