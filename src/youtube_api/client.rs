//! YouTube Data API v3 client: cursor pagination, the video listing
//! pipeline, and publish-status write-back.

use crate::model::Video;
use crate::url::build_url;
use crate::youtube_api::channels::Channel;
use crate::youtube_api::playlist_items::PlaylistItem;
use crate::youtube_api::types::ListResponse;
use crate::youtube_api::videos::{VideoResource, VideoUpdateRequest};
use eyre::Context;
use http::Method;
use jiff::Timestamp;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Production base URL for the YouTube Data API v3.
const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Upper bound on pages followed per listing.
///
/// A conforming server terminates a listing by omitting `nextPageToken`; a
/// server that returns a cursor forever would otherwise hang the caller, so
/// exceeding this bound is reported as an error instead.
const MAX_PAGES: u32 = 100;

/// Results requested per page; 50 is the API maximum.
const DEFAULT_PAGE_SIZE: u32 = 50;

/// Client for the YouTube Data API v3.
///
/// Wraps an opaque OAuth2 access token, sent as the `access_token` query
/// parameter on every request. All calls are strictly sequential; pagination
/// in particular never issues two requests concurrently, since each request
/// depends on the previous response's cursor.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests.
    client: reqwest::Client,
    access_token: String,
    base_url: String,
    page_size: u32,
}

impl YouTubeClient {
    /// Creates a client for the production API using the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.into(),
            base_url: API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Points the client at a different API base, e.g. a local stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the number of results requested per list page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fetches every page of a list endpoint, following the continuation
    /// cursor until the server omits it.
    ///
    /// Each request carries `params` plus `maxResults`, the `access_token`
    /// credential, and (from the second request on) the previous response's
    /// `nextPageToken`. Items accumulate in response order. Any transport or
    /// decode failure on any page aborts the whole listing with no partial
    /// result and no retry.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> eyre::Result<Vec<T>> {
        let base = format!("{}/{}", self.base_url, resource);
        let page_size = self.page_size.to_string();
        let mut page_token: Option<String> = None;
        let mut items = Vec::new();

        for page in 0..MAX_PAGES {
            let url = build_url(
                &base,
                params
                    .iter()
                    .map(|&(key, value)| (key, Some(value)))
                    .chain([
                        ("maxResults", Some(page_size.as_str())),
                        ("pageToken", page_token.as_deref()),
                        ("access_token", Some(self.access_token.as_str())),
                    ]),
            );

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .with_context(|| format!("send {resource} list request"))?;

            let status_code = response.status();
            if !status_code.is_success() {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(eyre::eyre!(
                    "YouTube API {resource} listing failed with status {status_code}: {error_text}"
                ));
            }

            let page_response: ListResponse<T> = response
                .json()
                .await
                .with_context(|| format!("parse {resource} list response as JSON"))?;

            tracing::debug!(
                resource,
                page,
                returned_items = page_response.items.len(),
                "fetched list page"
            );
            items.extend(page_response.items);

            match page_response.next_page_token {
                Some(token) => page_token = Some(token),
                None => return Ok(items),
            }
        }

        Err(eyre::eyre!(
            "{resource} listing exceeded {MAX_PAGES} pages without exhausting the cursor"
        ))
    }

    /// Fetches the authenticated user's uploaded, still-private videos.
    ///
    /// Composes three paginated listings: the user's channel (for its
    /// uploads playlist id), the playlist's items (filtered to entries that
    /// are both private and videos), and finally the videos themselves. The
    /// id list goes into a single `videos.list` call; callers with more
    /// uploads than the API's batch limit are out of scope (no chunking).
    ///
    /// A video's `status.publishAt`, when present, populates both publish
    /// instants of the returned [`Video`]; they diverge only through later
    /// local edits.
    pub async fn fetch_videos(&self) -> eyre::Result<Vec<Video>> {
        let channels: Vec<Channel> = self
            .fetch_all(
                "channels",
                &[("part", "snippet,contentDetails"), ("mine", "true")],
            )
            .await
            .context("list channels of authenticated user")?;
        let channel = channels
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("no channel found for authenticated user"))?;
        let uploads_playlist = channel.content_details.related_playlists.uploads;

        let playlist_items: Vec<PlaylistItem> = self
            .fetch_all(
                "playlistItems",
                &[
                    ("part", "snippet,status"),
                    ("playlistId", uploads_playlist.as_str()),
                ],
            )
            .await
            .with_context(|| format!("list items of uploads playlist {uploads_playlist}"))?;
        let video_ids: Vec<String> = playlist_items
            .into_iter()
            .filter(|item| {
                item.status.privacy_status == "private"
                    && item.snippet.resource_id.kind == "youtube#video"
            })
            .filter_map(|item| item.snippet.resource_id.video_id)
            .collect();

        let ids = video_ids.join(",");
        let resources: Vec<VideoResource> = self
            .fetch_all("videos", &[("part", "snippet,status"), ("id", ids.as_str())])
            .await
            .context("list videos by id")?;

        tracing::debug!(
            returned_items = resources.len(),
            "fetched schedulable videos"
        );

        resources.into_iter().map(video_from_resource).collect()
    }

    /// Writes back a single video's publish status.
    ///
    /// Sends a partial update scoped to `part=status`: the video's status
    /// bag overlaid with `publishAt` set to the UTC form of
    /// `client_publish_at` (removed when unset) and `privacyStatus` set to
    /// `"private"` unconditionally — scheduling a video always (re)marks it
    /// private.
    ///
    /// Fire and forget: the resource is not re-read, so the caller's
    /// `server_publish_at` is left untouched.
    pub async fn update_video(&self, video: &Video) -> eyre::Result<()> {
        let mut status = video.status.clone();
        match video.client_publish_at {
            Some(at) => {
                status.insert("publishAt".to_string(), Value::String(at.to_string()));
            }
            None => {
                status.remove("publishAt");
            }
        }
        status.insert(
            "privacyStatus".to_string(),
            Value::String("private".to_string()),
        );

        let url = build_url(
            &format!("{}/videos", self.base_url),
            [
                ("part", Some("status")),
                ("access_token", Some(self.access_token.as_str())),
            ],
        );
        let body = VideoUpdateRequest {
            id: video.id.clone(),
            status,
        };

        let response = self
            .client
            .request(Method::PUT, &url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .with_context(|| format!("send status update for video {}", video.id))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "YouTube API video update failed with status {status_code}: {error_text}"
            ));
        }

        tracing::debug!(video_id = video.id, "updated video publish status");
        Ok(())
    }
}

/// Maps a raw `video` resource to the local model.
fn video_from_resource(resource: VideoResource) -> eyre::Result<Video> {
    let publish_at = match resource.status.get("publishAt") {
        Some(Value::String(raw)) => Some(
            raw.parse::<Timestamp>()
                .with_context(|| format!("parse publishAt of video {}", resource.id))?,
        ),
        _ => None,
    };
    Ok(Video {
        id: resource.id,
        name: resource.snippet.title,
        thumbnail: resource
            .snippet
            .thumbnails
            .default
            .map(|thumbnail| thumbnail.url)
            .unwrap_or_default(),
        status: resource.status,
        server_publish_at: publish_at,
        client_publish_at: publish_at,
    })
}
