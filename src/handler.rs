//! HTTP request handlers for the playlist backend API
//!
//! This module implements all the endpoint logic:
//! - Listing videos through the upstream relay with local search filtering
//! - Reading the full playlist mapping or a single playlist
//! - Creating/replacing playlists
//! - Deleting playlists and removing single videos from them
//!
//! Handlers stay thin and delegate to the store or the relay. Failures
//! propagate as [`Error`](crate::error::Error) and are rendered to JSON by
//! its `IntoResponse` impl.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::Result;
use crate::model::{CreatePlaylistRequest, PlaylistVideoRecord, VideoListParams, VideoListing};
use crate::store::{AppState, PlaylistDocument};

/// Lists one page of upstream videos, optionally filtered by search text
///
/// # Query Parameters
///
/// - `page` (optional) - Upstream page number, minimum 1 (default: 1)
/// - `q` (optional) - Case-insensitive search over title and description
///
/// # Example Request
///
/// `GET /videos?page=2&q=cats`
///
/// # Response
///
/// - **200 OK** - `{"videos": [...], "meta": {"total": ..., "page": ...}}`
/// - **502 Bad Gateway** - Upstream call failed or returned malformed data
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<VideoListParams>,
) -> Result<Json<VideoListing>> {
    // Ensure page is at least 1
    let page = params.page.unwrap_or(1).max(1);
    let query = params.q.unwrap_or_default();

    let listing = state.relay.list_videos(page, &query).await?;
    Ok(Json(listing))
}

/// Returns the full mapping of playlist name -> video records
///
/// # Response
///
/// - **200 OK** - JSON object keyed by playlist name
pub async fn list_playlists(State(state): State<AppState>) -> Result<Json<PlaylistDocument>> {
    Ok(Json(state.store.list_all().await?))
}

/// Creates a playlist or wholesale-replaces an existing one
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Faves",
///   "videos": [
///     { "id": "v1", "title": "Hello" }
///   ]
/// }
/// ```
///
/// # Response
///
/// - **200 OK** - `{"message": "Playlist 'Faves' updated successfully"}`
/// - **422 Unprocessable Entity** - A video is missing `id` or `title`
///
/// Replacement is not a merge: whatever was stored under this name before
/// is discarded, and every record gets fresh timestamps.
pub async fn create_playlist(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlaylistRequest>,
) -> Result<Json<Value>> {
    state.store.upsert(&payload.name, payload.videos).await?;

    Ok(Json(json!({
        "message": format!("Playlist '{}' updated successfully", payload.name)
    })))
}

/// Returns the video records of a single playlist
///
/// # Response
///
/// - **200 OK** - JSON array of video records
/// - **404 Not Found** - `{"error": "Playlist not found"}`
pub async fn get_playlist(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PlaylistVideoRecord>>> {
    Ok(Json(state.store.get(&name).await?))
}

/// Deletes a playlist by name
///
/// # Response
///
/// - **200 OK** - `{"message": "Playlist '<name>' deleted successfully"}`
/// - **404 Not Found** - `{"error": "Playlist not found"}`
pub async fn delete_playlist(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    state.store.delete(&name).await?;

    Ok(Json(json!({
        "message": format!("Playlist '{}' deleted successfully", name)
    })))
}

/// Removes a single video from a playlist
///
/// Removing a video id that is not in the playlist still succeeds; only a
/// missing playlist is an error.
///
/// # Response
///
/// - **200 OK** - `{"message": "Video removed from playlist '<name>'"}`
/// - **404 Not Found** - `{"error": "Playlist not found"}`
pub async fn remove_video(
    Path((name, video_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    state.store.remove_video(&name, &video_id).await?;

    Ok(Json(json!({
        "message": format!("Video removed from playlist '{}'", name)
    })))
}
