use std::future::Future;

use tokio::sync::watch;
use tokio::task::JoinError;
use tokio::task::JoinHandle;

pub type ServerHandle = JoinHandle<anyhow::Result<()>>;

/// Run the HTTP and gRPC servers until a shutdown signal arrives or either
/// server exits on its own.
///
/// Whichever comes first, `shutdown_tx` is notified and the remaining server
/// is awaited before returning. The first server error, if any, is returned.
pub async fn supervise<S>(
    mut http_server: ServerHandle,
    mut grpc_server: ServerHandle,
    shutdown_tx: watch::Sender<bool>,
    signal: S,
) -> anyhow::Result<()>
where
    S: Future<Output = ()>,
{
    let (http_joined, grpc_joined) = tokio::select! {
        _ = signal => {
            tracing::info!("Shutdown signal received, stopping servers");
            let _ = shutdown_tx.send(true);
            (http_server.await, grpc_server.await)
        }
        joined = &mut http_server => {
            tracing::warn!(protocol = "http", "Server exited early, stopping remaining servers");
            let _ = shutdown_tx.send(true);
            (joined, grpc_server.await)
        }
        joined = &mut grpc_server => {
            tracing::warn!(protocol = "grpc", "Server exited early, stopping remaining servers");
            let _ = shutdown_tx.send(true);
            (http_server.await, joined)
        }
    };

    let http_result = server_result("http", http_joined);
    let grpc_result = server_result("grpc", grpc_joined);
    tracing::info!("Servers exited");

    http_result.and(grpc_result)
}

fn server_result(
    protocol: &'static str,
    joined: Result<anyhow::Result<()>, JoinError>,
) -> anyhow::Result<()> {
    let result = joined.map_err(anyhow::Error::from).and_then(|served| served);
    if let Err(e) = &result {
        tracing::error!(error = %e, protocol, "Server error");
    }
    result
}
