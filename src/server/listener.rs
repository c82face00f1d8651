use tokio::net::TcpListener;
use tracing::{error, info};

use crate::http::connection::Connection;

/// Accepts connections on `listen_addr` until the task is cancelled.
pub async fn run(listen_addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    serve(listener).await
}

/// Runs the accept loop on an already bound listener.
///
/// Every connection gets its own task, so a stalled client never holds up
/// the loop.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Accept error");
                continue;
            }
        };
        info!(%peer, "Accepted connection");

        tokio::spawn(async move {
            if let Err(e) = Connection::new(socket).run().await {
                error!(%peer, error = %format!("{:#}", e), "Connection error");
            }
        });
    }
}
