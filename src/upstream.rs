//! Upstream video API client
//!
//! The relay forwards a page number to the remote video listing API and
//! applies search filtering locally, on the fetched page only. Nothing is
//! cached and failed calls are not retried.

use reqwest::Client;

use crate::error::Result;
use crate::model::VideoListing;

/// Default upstream endpoint, overridable via `VIDEO_API_URL`.
pub const DEFAULT_VIDEO_API_URL: &str =
    "https://mock-youtube-api-f3d0c17f0e38.herokuapp.com/api/videos";

/// Client for the upstream video listing API
pub struct VideoRelay {
    client: Client,
    base_url: String,
}

impl VideoRelay {
    /// Creates a relay pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches one page of videos, optionally filtered by search text
    ///
    /// The upstream page size is opaque to the relay; `page` is forwarded
    /// as-is. When `query` is non-empty the fetched page is filtered down
    /// to videos whose title or description contains the query
    /// (case-insensitive substring match) and `meta.total` is recomputed
    /// as the filtered count. That recount only covers the current page,
    /// not the whole upstream corpus.
    pub async fn list_videos(&self, page: u32, query: &str) -> Result<VideoListing> {
        let mut listing: VideoListing = self
            .client
            .get(&self.base_url)
            .query(&[("page", page)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !query.is_empty() {
            let needle = query.to_lowercase();
            listing.videos.retain(|video| {
                video.title.to_lowercase().contains(&needle)
                    || video.description.to_lowercase().contains(&needle)
            });
            listing.meta.total = listing.videos.len() as u64;
        }

        Ok(listing)
    }
}
