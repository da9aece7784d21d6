//! Application entry point and server initialization
//!
//! This module contains the main function that:
//! - Loads environment configuration
//! - Sets up the playlist store and the upstream relay
//! - Starts the HTTP server with graceful shutdown support

use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

// Module declarations
mod error;
mod handler;
mod model;
mod route;
mod store;
mod upstream;

use route::create_app;
use store::{AppState, PlaylistStore};
use upstream::{VideoRelay, DEFAULT_VIDEO_API_URL};

/// Application entry point
///
/// This asynchronous main function:
/// 1. Loads environment variables from .env file
/// 2. Reads configuration (PORT, PLAYLISTS_FILE and VIDEO_API_URL)
/// 3. Creates the application state and router
/// 4. Starts the HTTP server with graceful shutdown handling
///
/// # Environment Variables
///
/// - `PORT` - Server port number (default: 8080)
/// - `PLAYLISTS_FILE` - Path of the playlist document (default: "playlists.json")
/// - `VIDEO_API_URL` - Base URL of the upstream video API
#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("playlister=debug,tower_http=debug")
        .init();

    // Read and parse the server port from environment
    let port_str = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let port: u16 = port_str.parse().unwrap_or(8080);

    // Read the playlist document path from environment
    let playlists_file = env::var("PLAYLISTS_FILE").unwrap_or_else(|_| "playlists.json".to_string());

    // Read the upstream video API base URL from environment
    let video_api_url =
        env::var("VIDEO_API_URL").unwrap_or_else(|_| DEFAULT_VIDEO_API_URL.to_string());

    // Create application state with the store and the upstream relay
    let state = AppState {
        store: Arc::new(PlaylistStore::new(&playlists_file)),
        relay: Arc::new(VideoRelay::new(&video_api_url)),
    };

    // Create the Axum router with all routes configured
    let app = create_app(state).layer(TraceLayer::new_for_http());

    // Bind to all network interfaces on the specified port
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await.unwrap();

    // Print startup information
    println!("🚀 Server running at http://localhost:{}", port);
    println!("📂 Using playlist document: {}", playlists_file);
    println!("📡 Upstream video API: {}", video_api_url);

    // Start the server with graceful shutdown support
    // The server will continue running until it receives SIGTERM or SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// Handles graceful shutdown signals
///
/// This function listens for shutdown signals and returns when one is received:
/// - SIGINT (Ctrl+C) - Interrupt signal from terminal
/// - SIGTERM - Termination signal (common in Docker/Kubernetes)
///
/// When a signal is received the function returns, open connections are
/// allowed to complete and any in-flight playlist document write finishes
/// before the process exits.
async fn shutdown_signal() {
    // Handle Ctrl+C (SIGINT)
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    // Handle SIGTERM on Unix systems (Linux, macOS)
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    // On non-Unix systems (Windows), only handle Ctrl+C
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // Wait for either signal to be received
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("\n🛑 Shutdown signal received, stopping server.");
}
