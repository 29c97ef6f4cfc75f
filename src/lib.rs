//! Scheduling core for YouTube video publication.
//!
//! Lets a channel owner list their uploaded (still-private) videos, assign a
//! desired publish time distinct from what is currently set on the server,
//! and push that change back through the YouTube Data API. A file-backed
//! demo store stands in for the remote API when no real credential is
//! present.
//!
//! The pieces:
//! - [`youtube_api`]: hand-rolled Data API v3 client with cursor pagination
//! - [`dummy`]: the drop-in demo store
//! - [`store`]: credential classification and backend selection
//! - [`model`]: tracks, videos, and the pure transforms over them
//! - [`auth`]: the implicit-flow authorization URL

pub mod auth;
pub mod dummy;
pub mod model;
pub mod store;
pub mod url;
pub mod youtube_api;

pub use dummy::DummyStore;
pub use model::{Schedule, Track, TrackKind, Video};
pub use store::{Credential, VideoStore};
pub use youtube_api::YouTubeClient;
