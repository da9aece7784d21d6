//! Playlist document persistence
//!
//! This module owns the single JSON document that holds every playlist,
//! keyed by name. Each operation reloads the document from disk, mutates it
//! in memory and writes the whole thing back, so the file on disk is always
//! a complete, self-contained snapshot of the store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::model::{PlaylistVideoRecord, VideoInput};
use crate::upstream::VideoRelay;

/// The full persisted mapping: playlist name -> ordered video records
///
/// Serialized as one JSON object. A `BTreeMap` keeps the on-disk key order
/// deterministic across rewrites.
pub type PlaylistDocument = BTreeMap<String, Vec<PlaylistVideoRecord>>;

/// Application state shared across all request handlers
///
/// Both collaborators are behind `Arc` so the state stays cheaply cloneable
/// for Axum, and so tests can inject a temp-file store and a mock upstream.
#[derive(Clone)]
pub struct AppState {
    /// Playlist document store
    pub store: Arc<PlaylistStore>,

    /// Upstream video API client
    pub relay: Arc<VideoRelay>,
}

/// File-backed store for the playlist document
///
/// The store never caches between calls: every read hits the disk and every
/// mutation rewrites the full document. The mutex serializes mutating calls
/// within this process so two concurrent read-modify-write cycles cannot
/// silently drop each other's changes.
pub struct PlaylistStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PlaylistStore {
    /// Creates a store backed by the document at `path`
    ///
    /// The file is not touched here; a missing document simply reads as an
    /// empty mapping until the first mutation creates it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the full document, treating a missing file as empty
    fn load(&self) -> Result<PlaylistDocument> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PlaylistDocument::new()),
            Err(e) => Err(Error::Persistence(e)),
        }
    }

    /// Writes the full document back to disk
    ///
    /// The document is written to a sibling temp file first and renamed over
    /// the target, so a crash mid-write leaves the previous snapshot intact.
    fn save(&self, doc: &PlaylistDocument) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(doc)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Returns the whole mapping of playlist name -> video records
    pub async fn list_all(&self) -> Result<PlaylistDocument> {
        self.load()
    }

    /// Creates or wholesale-replaces the playlist named `name`
    ///
    /// Every input video becomes a fresh [`PlaylistVideoRecord`] stamped
    /// with the current time, even when the name already existed; there is
    /// no per-record change detection. Names and video lists are not
    /// validated here, an empty playlist is a storable state.
    pub async fn upsert(&self, name: &str, videos: Vec<VideoInput>) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load()?;

        let now = Utc::now();
        let records = videos
            .into_iter()
            .map(|video| PlaylistVideoRecord::from_input(video, now))
            .collect();

        doc.insert(name.to_string(), records);
        self.save(&doc)
    }

    /// Returns the video records of the playlist named `name`
    pub async fn get(&self, name: &str) -> Result<Vec<PlaylistVideoRecord>> {
        self.load()?.remove(name).ok_or(Error::PlaylistNotFound)
    }

    /// Removes the playlist named `name` from the document
    pub async fn delete(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load()?;

        if doc.remove(name).is_none() {
            return Err(Error::PlaylistNotFound);
        }

        self.save(&doc)
    }

    /// Removes every record with the given `video_id` from a playlist
    ///
    /// Removing an id that is not in the playlist is a successful no-op;
    /// only a missing playlist is an error. The (possibly unchanged)
    /// document is persisted either way.
    pub async fn remove_video(&self, name: &str, video_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load()?;

        let playlist = doc.get_mut(name).ok_or(Error::PlaylistNotFound)?;
        playlist.retain(|record| record.video_id != video_id);

        self.save(&doc)
    }
}
