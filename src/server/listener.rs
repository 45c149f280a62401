use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, SiteConfig};
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let site = cfg.site()?;
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!(
        "Listening on {}, serving {}",
        cfg.listen_addr,
        cfg.document_root.display()
    );

    serve(listener, site).await
}

/// Accept loop over an already bound listener; one task per connection.
pub async fn serve(listener: TcpListener, site: SiteConfig) -> anyhow::Result<()> {
    let site = Arc::new(site);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let site = Arc::clone(&site);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, site);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
