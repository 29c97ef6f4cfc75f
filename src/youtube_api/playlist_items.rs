//! YouTube PlaylistItems API resource types.

use serde::Deserialize;

/// A `playlistItem` resource identifying one entry of a playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
    pub status: PlaylistItemStatus,
}

/// Basic details about the playlist entry.
#[derive(Debug, Deserialize)]
pub struct PlaylistItemSnippet {
    /// The resource the entry points at; not necessarily a video.
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

/// Identifier of the resource a playlist item refers to.
#[derive(Debug, Deserialize)]
pub struct ResourceId {
    /// The resource's type, e.g. `youtube#video`.
    pub kind: String,
    /// Set when `kind` is `youtube#video`.
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Privacy information about the playlist entry.
#[derive(Debug, Deserialize)]
pub struct PlaylistItemStatus {
    #[serde(rename = "privacyStatus")]
    pub privacy_status: String,
}
