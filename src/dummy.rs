//! File-backed stand-in for the remote video store, used in demo mode.
//!
//! Selected by the `dummy` credential sentinel. State is a JSON array of
//! [`Video`] records (instants as RFC 3339 strings) in a single fixed-name
//! file in the working directory.

use crate::model::Video;
use eyre::Context;
use jiff::{Span, Timestamp, Zoned};
use std::path::PathBuf;

/// Fixed location of the persisted demo state.
const STATE_FILE: &str = "scheduler-state.json";

/// Hour offsets of the irregular "B" seed group, relative to the seed base.
const APERIODIC_OFFSET_HOURS: [i64; 3] = [21, 49, 100];

/// Drop-in substitute for the remote store, backed by a local JSON file.
///
/// No lock protects the file; concurrent processes can race and lose
/// updates, matching the host-storage semantics this mode emulates.
#[derive(Debug, Clone)]
pub struct DummyStore {
    path: PathBuf,
}

impl DummyStore {
    /// A store persisting at the fixed default location.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(STATE_FILE),
        }
    }

    /// A store persisting at `path` instead of the fixed location.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the persisted video list, reseeding first when the stored
    /// state predates the current seed shape.
    ///
    /// Staleness heuristic: a stored list more than three entries shorter
    /// than a fresh seed is replaced by the seed. The chosen list is
    /// persisted back before returning.
    pub async fn fetch_videos(&self) -> eyre::Result<Vec<Video>> {
        let seeded = seed_videos()?;
        let stored = self.read_state().await?;
        let videos = match stored {
            Some(stored) if stored.len() + 3 >= seeded.len() => stored,
            _ => seeded,
        };
        self.write_state(&videos).await?;
        Ok(videos)
    }

    /// Replaces any stored video with the same id and persists the list.
    pub async fn update_video(&self, video: &Video) -> eyre::Result<()> {
        let mut videos = self.read_state().await?.unwrap_or_default();
        videos.retain(|stored| stored.id != video.id);
        videos.push(video.clone());
        self.write_state(&videos).await
    }

    async fn read_state(&self) -> eyre::Result<Option<Vec<Video>>> {
        if !tokio::fs::try_exists(&self.path)
            .await
            .context("probe demo state file")?
        {
            return Ok(None);
        }
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .context("read demo state file")?;
        let videos = serde_json::from_str(&raw).context("parse demo state file")?;
        Ok(Some(videos))
    }

    async fn write_state(&self, videos: &[Video]) -> eyre::Result<()> {
        let json = serde_json::to_string(videos).context("serialize demo state")?;
        tokio::fs::write(&self.path, json)
            .await
            .context("write demo state file")
    }
}

impl Default for DummyStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the synthetic seed set: five unscheduled "A" videos, three "B"
/// videos at irregular hour offsets from a common base, and five "C" videos
/// on a daily cadence 90 minutes past the base.
pub fn seed_videos() -> eyre::Result<Vec<Video>> {
    // Five days out, pinned to 10:30 local time.
    let base = Zoned::now()
        .checked_add(Span::new().days(5))
        .context("compute seed base")?
        .with()
        .hour(10)
        .minute(30)
        .second(0)
        .subsec_nanosecond(0)
        .build()
        .context("pin seed base to 10:30")?;

    let mut videos = Vec::new();
    for index in 0..5 {
        videos.push(seed_video("A", index, None));
    }
    for (index, hours) in APERIODIC_OFFSET_HOURS.into_iter().enumerate() {
        let at = base
            .checked_add(Span::new().hours(hours))
            .context("offset B-group seed")?;
        videos.push(seed_video("B", index, Some(at.timestamp())));
    }
    for index in 0..5 {
        let at = base
            .checked_add(Span::new().days(index as i64).minutes(90))
            .context("offset C-group seed")?;
        videos.push(seed_video("C", index, Some(at.timestamp())));
    }
    Ok(videos)
}

fn seed_video(group: &str, index: usize, publish_at: Option<Timestamp>) -> Video {
    Video {
        id: format!("{group}{index}"),
        name: format!("{group} {index}"),
        thumbnail: String::new(),
        status: serde_json::Map::new(),
        server_publish_at: publish_at,
        client_publish_at: publish_at,
    }
}
