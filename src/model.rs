//! Track and video data model, plus the pure transforms over it.
//!
//! Instants are [`jiff::Timestamp`] values: immutable and `Copy` by
//! construction, so `#[derive(Clone)]` on these types is already a deep copy
//! with no shared mutable state between a value and its clones.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One remote video resource, mirrored locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Opaque stable identifier; primary key, immutable.
    pub id: String,
    /// The video's title, server-authoritative.
    pub name: String,
    /// URL of the default thumbnail, server-authoritative.
    pub thumbnail: String,
    /// Server-defined status fields, passed through unmodified except for
    /// the two fields this system rewrites (`publishAt`, `privacyStatus`).
    #[serde(default)]
    pub status: Map<String, Value>,
    /// Last publish time read from the server; absent means not scheduled
    /// or already public. Mutated only by a fresh fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_publish_at: Option<Timestamp>,
    /// The user's in-progress edit; diverges from `server_publish_at` until
    /// the video is written back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_publish_at: Option<Timestamp>,
}

/// A fixed publication cadence carried by periodic tracks.
///
/// Defines the candidate publish instants `start + k * period_in_days` days
/// for `k = 0, 1, 2, …`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// First candidate publish instant.
    pub start: Timestamp,
    /// Days between consecutive candidate instants; positive.
    pub period_in_days: u32,
}

impl Schedule {
    /// The `k`-th candidate publish instant, counting fixed 24-hour days
    /// from `start`.
    pub fn nth(&self, k: u32) -> Timestamp {
        let seconds = i64::from(k) * i64::from(self.period_in_days) * 86_400;
        self.start
            .checked_add(jiff::Span::new().seconds(seconds))
            .expect("seconds-only span is valid for timestamps")
    }
}

/// Scheduling policy of a [`Track`].
///
/// Only the periodic kind carries a [`Schedule`]; the type rules out a
/// schedule on any other kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TrackKind {
    /// No publish time assigned to any video.
    Unscheduled,
    /// Each video has an independent publish time.
    Aperiodic,
    /// Freshly discovered, not yet categorized.
    New,
    /// Videos are auto-scheduled at a fixed cadence.
    Periodic(Schedule),
}

/// A named grouping of videos sharing a scheduling policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(flatten)]
    pub kind: TrackKind,
    pub videos: Vec<Video>,
}

/// Returns the videos sorted ascending by `client_publish_at`.
///
/// The sort is stable, so videos with equal publish times keep their
/// original relative order. Callers are expected to pre-filter videos
/// without a client publish time; absent values order before all others.
pub fn to_sorted_videos(videos: &[Video]) -> Vec<Video> {
    let mut sorted = videos.to_vec();
    sorted.sort_by_key(|video| video.client_publish_at);
    sorted
}

/// Formats an instant as a short date+time in the viewer's time zone, or an
/// empty string when absent.
pub fn format_publish_at(at: Option<Timestamp>) -> String {
    format_publish_at_in(at, &TimeZone::system())
}

/// [`format_publish_at`] with an explicit time zone.
pub fn format_publish_at_in(at: Option<Timestamp>, tz: &TimeZone) -> String {
    match at {
        Some(at) => at
            .to_zoned(tz.clone())
            .strftime("%-m/%-d/%Y, %-I:%M %p")
            .to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ts(raw: &str) -> Timestamp {
        raw.parse().unwrap()
    }

    fn video(id: &str, client_publish_at: Option<Timestamp>) -> Video {
        Video {
            id: id.to_string(),
            name: format!("video {id}"),
            thumbnail: String::new(),
            status: Map::new(),
            server_publish_at: client_publish_at,
            client_publish_at,
        }
    }

    #[test]
    fn sort_is_ascending_by_client_publish_time() {
        let videos = [
            video("late", Some(ts("2024-03-01T00:00:00Z"))),
            video("early", Some(ts("2024-01-01T00:00:00Z"))),
            video("middle", Some(ts("2024-02-01T00:00:00Z"))),
        ];
        let sorted = to_sorted_videos(&videos);
        let ids: Vec<_> = sorted.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["early", "middle", "late"]);
        assert!(
            sorted
                .windows(2)
                .all(|pair| pair[0].client_publish_at <= pair[1].client_publish_at)
        );
    }

    #[test]
    fn sort_is_stable_for_equal_instants() {
        let at = Some(ts("2024-01-01T00:00:00Z"));
        let videos = [video("first", at), video("second", at), video("third", at)];
        let ids: Vec<_> = to_sorted_videos(&videos)
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn clones_share_nothing_mutable() {
        let mut original = video("a", Some(ts("2024-01-01T00:00:00Z")));
        original
            .status
            .insert("privacyStatus".to_string(), json!("private"));

        let mut clone = original.clone();
        clone
            .status
            .insert("privacyStatus".to_string(), json!("public"));
        clone.status.insert("embeddable".to_string(), json!(true));
        clone.client_publish_at = Some(ts("2030-06-01T12:00:00Z"));
        clone.name = "renamed".to_string();

        assert_eq!(original.status["privacyStatus"], json!("private"));
        assert!(!original.status.contains_key("embeddable"));
        assert_eq!(original.client_publish_at, Some(ts("2024-01-01T00:00:00Z")));
        assert_eq!(original.name, "video a");
    }

    #[test]
    fn track_clones_are_independent() {
        let original = Track {
            name: "weekly".to_string(),
            kind: TrackKind::Periodic(Schedule {
                start: ts("2024-01-01T10:30:00Z"),
                period_in_days: 7,
            }),
            videos: vec![video("a", Some(ts("2024-01-01T10:30:00Z")))],
        };

        let mut clone = original.clone();
        clone.kind = TrackKind::Unscheduled;
        clone.videos[0].client_publish_at = None;
        clone.videos[0]
            .status
            .insert("privacyStatus".to_string(), json!("public"));

        assert!(matches!(original.kind, TrackKind::Periodic(_)));
        assert_eq!(
            original.videos[0].client_publish_at,
            Some(ts("2024-01-01T10:30:00Z"))
        );
        assert!(original.videos[0].status.is_empty());
    }

    #[test]
    fn schedule_yields_an_arithmetic_sequence() {
        let schedule = Schedule {
            start: ts("2024-01-01T10:30:00Z"),
            period_in_days: 2,
        };
        assert_eq!(schedule.nth(0), ts("2024-01-01T10:30:00Z"));
        assert_eq!(schedule.nth(1), ts("2024-01-03T10:30:00Z"));
        assert_eq!(schedule.nth(3), ts("2024-01-07T10:30:00Z"));
    }

    #[test]
    fn formats_short_local_date_time() {
        let at = Some(ts("2024-01-05T14:30:00Z"));
        assert_eq!(format_publish_at_in(at, &TimeZone::UTC), "1/5/2024, 2:30 PM");
        assert_eq!(format_publish_at_in(None, &TimeZone::UTC), "");
    }

    #[test]
    fn serializes_publish_instants_under_camel_case_keys() {
        let serialized = serde_json::to_value(video("a", Some(ts("2024-01-01T00:00:00Z")))).unwrap();
        assert_eq!(serialized["serverPublishAt"], json!("2024-01-01T00:00:00Z"));
        assert_eq!(serialized["clientPublishAt"], json!("2024-01-01T00:00:00Z"));

        let unscheduled = serde_json::to_value(video("b", None)).unwrap();
        assert!(unscheduled.get("serverPublishAt").is_none());
        assert!(unscheduled.get("clientPublishAt").is_none());
    }
}
