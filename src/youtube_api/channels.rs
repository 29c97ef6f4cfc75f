//! YouTube Channels API resource types.

use serde::Deserialize;

/// A `channel` resource, projected to the fields this crate needs.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    /// Channel-level content information.
    #[serde(rename = "contentDetails")]
    pub content_details: ChannelContentDetails,
}

/// The `contentDetails` object for a channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#contentDetails>
#[derive(Debug, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

/// Playlists associated with the channel.
#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    /// The playlist containing the channel's uploaded videos.
    pub uploads: String,
}
