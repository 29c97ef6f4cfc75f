//! YouTube Videos API resource types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A `video` resource, projected to the display fields this crate needs
/// plus the opaque status bag.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Deserialize)]
pub struct VideoResource {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Basic details about the video.
    pub snippet: VideoSnippet,
    /// Upload, processing, privacy, and scheduling fields, kept as an open
    /// map so unknown fields survive a write-back.
    #[serde(default)]
    pub status: Map<String, Value>,
}

/// The snippet object contains basic details about the video.
#[derive(Debug, Deserialize)]
pub struct VideoSnippet {
    /// The video's title.
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Thumbnail images associated with a video.
#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    /// The default (smallest) thumbnail; absent while the upload is still
    /// processing.
    pub default: Option<Thumbnail>,
}

/// A single thumbnail image.
#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Body of a `videos.update` call scoped to `part=status`.
///
/// Only the `status` sub-object is written; everything else on the remote
/// resource is left untouched.
#[derive(Debug, Serialize)]
pub struct VideoUpdateRequest {
    pub id: String,
    pub status: Map<String, Value>,
}
