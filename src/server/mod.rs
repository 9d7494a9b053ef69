// Local HTTP server for the Moodify page
//
// Serves the embedded single-page UI plus the /api endpoints on the loopback
// interface. One process-wide piece of shared state: the Gemini client
// holding the API credential, injected once at startup.

pub mod routes;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::ai::GeminiClient;

pub const DEFAULT_PORT: u16 = 8384;

/// Shared state for the page server
pub struct AppState {
    pub client: GeminiClient,
}

/// Start the HTTP server on the given port and serve until Ctrl-C.
pub async fn start_server(port: u16, client: GeminiClient) -> Result<(), String> {
    let state = Arc::new(AppState { client });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(
            "*".parse::<HeaderValue>()
                .map_err(|e| format!("Invalid origin: {}", e))?,
        );

    let app = routes::api_routes().layer(cors).with_state(state);

    let listener = try_bind(port).await?;
    let actual_addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get local addr: {}", e))?;

    eprintln!("[moodify] Serving on http://{}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            eprintln!("[moodify] Shutdown signal received");
        })
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    eprintln!("[moodify] Server stopped");
    Ok(())
}

/// Bind the given port, with fallback to nearby ports then OS-assigned.
/// Returns the live listener so the chosen port cannot be stolen before
/// serving starts.
async fn try_bind(preferred_port: u16) -> Result<tokio::net::TcpListener, String> {
    let addr = SocketAddr::from(([127, 0, 0, 1], preferred_port));
    if let Ok(listener) = tokio::net::TcpListener::bind(addr).await {
        return Ok(listener);
    }

    // Try ports preferred+1 through preferred+10
    for offset in 1..=10u16 {
        let port = preferred_port.saturating_add(offset);
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        if let Ok(listener) = tokio::net::TcpListener::bind(addr).await {
            eprintln!(
                "[moodify] Port {} unavailable, using {}",
                preferred_port, port
            );
            return Ok(listener);
        }
    }

    // Fall back to OS-assigned port
    let addr = SocketAddr::from(([127, 0, 0, 1], 0u16));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            let actual = listener.local_addr().map_err(|e| e.to_string())?;
            eprintln!(
                "[moodify] All preferred ports unavailable, OS assigned port {}",
                actual.port()
            );
            Ok(listener)
        }
        Err(_) => Err("Failed to bind to any port".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_try_bind_returns_live_listener() {
        // Port 0 asks the OS for any free port; the listener comes back
        // already bound, holding its port
        let listener = try_bind(0).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }
}
