use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{
    sync::{Mutex, oneshot},
    task::JoinHandle,
};

use crate::{Res, api, config, types::PkceToken, warning};

/// Handle to the running OAuth callback server.
pub struct CallbackServer {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl CallbackServer {
    /// Stops accepting connections and waits until the server has finished.
    ///
    /// Connections still open after a few seconds are dropped.
    pub async fn stop(self) {
        let mut handle = self.handle;
        let _ = self.shutdown.send(());
        match tokio::time::timeout(Duration::from_secs(5), &mut handle).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warning!("Callback server task failed: {}", e),
            Err(_) => handle.abort(),
        }
    }
}

/// Binds the OAuth callback server and serves it in the background.
///
/// The bound address is part of the returned handle so the caller can build
/// the redirect URI from the port the OS picked.
pub async fn start_api_server(state: Arc<Mutex<Option<PkceToken>>>) -> Res<CallbackServer> {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/", get(api::callback).layer(Extension(state)));

    let listener = tokio::net::TcpListener::bind(config::server_addr()).await?;
    let addr = listener.local_addr()?;
    let (shutdown, signal) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = signal.await;
        });
        if let Err(e) = server.await {
            warning!("Callback server stopped: {}", e);
        }
    });

    Ok(CallbackServer {
        addr,
        shutdown,
        handle,
    })
}
