use std::sync::Arc;

use crate::{config, error, info, management::JobContext, server::start_api_server};

pub async fn serve() {
    let ctx = match JobContext::from_env() {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => error!("Cannot prepare ingestion job. Err: {}", e),
    };

    info!("Trigger server listening on {}", config::server_addr());
    start_api_server(ctx).await;
}
