//! YouTube Data API v3 client library.
//!
//! Hand-rolled bindings for the handful of endpoints the scheduler
//! consumes: `channels.list`, `playlistItems.list`, `videos.list`, and
//! `videos.update`. All list endpoints share the envelope in
//! [`types::ListResponse`]; cursor pagination and the video
//! fetch/write-back pipeline live in [`client::YouTubeClient`].

pub mod channels;
pub mod client;
pub mod playlist_items;
pub mod types;
pub mod videos;

pub use client::YouTubeClient;
pub use types::{ListResponse, PageInfo};
