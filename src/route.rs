//! Route definitions for the playlist backend API
//!
//! This module configures all HTTP routes and maps them to their respective
//! handlers. It creates the Axum router with the application state.

use axum::routing::{delete, get};
use axum::Router;

use crate::handler::{
    create_playlist, delete_playlist, get_playlist, list_playlists, list_videos, remove_video,
};
use crate::store::AppState;

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// - `GET /videos` - Lists upstream videos with paging and search
/// - `GET /playlists` - Returns the full playlist mapping
/// - `POST /playlists` - Creates or replaces a playlist
/// - `GET /playlists/{name}` - Returns a single playlist's videos
/// - `DELETE /playlists/{name}` - Deletes a playlist
/// - `DELETE /playlists/{name}/videos/{video_id}` - Removes one video
///
/// # Arguments
///
/// * `state` - Application state holding the playlist store and the
///   upstream relay
///
/// # Returns
///
/// Configured Axum Router ready to handle requests
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Upstream listing pass-through with local filtering
        .route("/videos", get(list_videos))
        // Whole-store read and playlist upsert
        .route("/playlists", get(list_playlists).post(create_playlist))
        // Single-playlist read and delete
        .route("/playlists/{name}", get(get_playlist).delete(delete_playlist))
        // Single-video removal from a playlist
        .route(
            "/playlists/{name}/videos/{video_id}",
            delete(remove_video),
        )
        // Inject the application state into all handlers
        .with_state(state)
}
