//! Data models for the playlist backend
//!
//! This module defines all the data structures used throughout the application,
//! including stored playlist records, request/response models and the shapes
//! returned by the upstream video API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single video stored inside a playlist
///
/// This structure contains all information kept per playlist entry:
/// - The video identifier (kept twice, see `video_id`)
/// - Display metadata (title, description, thumbnail)
/// - Counters (views from the input, likes/comments always zero)
/// - Insertion timestamps
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlaylistVideoRecord {
    /// Video identifier as supplied by the client
    pub id: String,

    /// Duplicate of `id` under the upstream API's field name
    /// Kept so stored documents stay compatible with consumers that
    /// read `video_id`
    pub video_id: String,

    /// Video title
    pub title: String,

    /// Video description, empty string when the input omitted it
    pub description: String,

    /// Thumbnail image URL, may be empty
    pub thumbnail_url: String,

    /// View count carried over from the input
    /// Defaults to 0 if not present during deserialization
    #[serde(default)]
    pub views: u64,

    /// Like count, not sourced from upstream
    #[serde(default)]
    pub likes: u64,

    /// Comment count, not sourced from upstream
    #[serde(default)]
    pub comments: u64,

    /// Timestamp when this record was written into its playlist
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last write; equals `created_at` because every
    /// upsert restamps the whole playlist
    pub updated_at: DateTime<Utc>,
}

impl PlaylistVideoRecord {
    /// Builds a stored record from a client-supplied video reference
    ///
    /// All defaults are applied here rather than scattered across handlers.
    /// Likes and comments are always 0 regardless of input. Both timestamps
    /// are set to `now` so one upsert stamps every record with the same
    /// instant.
    pub fn from_input(input: VideoInput, now: DateTime<Utc>) -> Self {
        Self {
            video_id: input.id.clone(),
            id: input.id,
            title: input.title,
            description: input.description,
            thumbnail_url: input.thumbnail_url,
            views: input.views,
            likes: 0,
            comments: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A single video reference inside a playlist creation request
///
/// `id` and `title` are required; requests missing either are rejected
/// before they reach the store. Everything else defaults.
#[derive(Deserialize, Debug, Clone)]
pub struct VideoInput {
    /// Video identifier from the upstream listing
    pub id: String,

    /// Video title
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Optional thumbnail URL
    #[serde(default)]
    pub thumbnail_url: String,

    /// Optional view count
    #[serde(default)]
    pub views: u64,
}

/// Request payload for creating or replacing a playlist
///
/// # Example
/// ```json
/// {
///   "name": "Faves",
///   "videos": [
///     { "id": "v1", "title": "Hello", "views": 120 }
///   ]
/// }
/// ```
#[derive(Deserialize)]
pub struct CreatePlaylistRequest {
    /// Playlist name, the unique key within the store
    pub name: String,

    /// Videos to store under this name
    /// An empty (or absent) list is accepted and stored as an empty playlist
    #[serde(default)]
    pub videos: Vec<VideoInput>,
}

/// Query parameters for the video listing endpoint
///
/// # Example
/// Query string: `?page=2&q=cats`
#[derive(Deserialize)]
pub struct VideoListParams {
    /// Upstream page number (starts from 1)
    /// Defaults to 1 if not provided
    pub page: Option<u32>,

    /// Search text matched case-insensitively against title and description
    /// Defaults to no filtering if not provided
    pub q: Option<String>,
}

/// One page of videos as returned by the upstream API
///
/// Only the fields the relay interprets are typed; everything else the
/// upstream sends is preserved via `flatten` and passed through unchanged.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VideoListing {
    /// Videos on this page, in upstream order
    pub videos: Vec<UpstreamVideo>,

    /// Paging metadata
    pub meta: ListingMeta,
}

/// A video entry from the upstream listing
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpstreamVideo {
    pub title: String,
    pub description: String,

    /// Remaining upstream fields (id, thumbnail_url, views, ...) passed
    /// through without interpretation
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Paging metadata from the upstream listing
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListingMeta {
    /// Result count; recomputed locally when a search filter is applied,
    /// in which case it only covers the current page
    pub total: u64,

    /// Current page number, passed through from upstream
    pub page: u32,

    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}
