//! Credential classification and session-level store selection.

use crate::dummy::DummyStore;
use crate::model::Video;
use crate::youtube_api::YouTubeClient;

/// Sentinel credential value that selects the demo store.
const DUMMY_CREDENTIAL: &str = "dummy";

/// The caller's credential, classified once at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Demo mode; no remote access.
    Dummy,
    /// An opaque OAuth access token for the real API.
    AccessToken(String),
}

impl Credential {
    /// Classifies a raw credential string.
    pub fn classify(raw: &str) -> Self {
        if raw == DUMMY_CREDENTIAL {
            Self::Dummy
        } else {
            Self::AccessToken(raw.to_string())
        }
    }
}

/// One of the two implementations of the video capability set, selected by
/// [`Credential::classify`] at session start rather than branched on inside
/// every operation.
#[derive(Debug, Clone)]
pub enum VideoStore {
    Remote(YouTubeClient),
    Dummy(DummyStore),
}

impl VideoStore {
    pub fn for_credential(credential: Credential) -> Self {
        match credential {
            Credential::Dummy => Self::Dummy(DummyStore::new()),
            Credential::AccessToken(token) => Self::Remote(YouTubeClient::new(token)),
        }
    }

    /// Fetches the caller's schedulable videos from the selected backend.
    pub async fn fetch_videos(&self) -> eyre::Result<Vec<Video>> {
        match self {
            Self::Remote(client) => client.fetch_videos().await,
            Self::Dummy(store) => store.fetch_videos().await,
        }
    }

    /// Writes back a single video's publish status.
    pub async fn update_video(&self, video: &Video) -> eyre::Result<()> {
        match self {
            Self::Remote(client) => client.update_video(video).await,
            Self::Dummy(store) => store.update_video(video).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_dummy_sentinel_selects_demo_mode() {
        assert_eq!(Credential::classify("dummy"), Credential::Dummy);
        assert_eq!(
            Credential::classify("ya29.a0AfH6"),
            Credential::AccessToken("ya29.a0AfH6".to_string())
        );
        assert!(matches!(
            VideoStore::for_credential(Credential::Dummy),
            VideoStore::Dummy(_)
        ));
        assert!(matches!(
            VideoStore::for_credential(Credential::classify("ya29.a0AfH6")),
            VideoStore::Remote(_)
        ));
    }
}
