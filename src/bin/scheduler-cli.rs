use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_publish_scheduler::model::{format_publish_at, to_sorted_videos};
use youtube_publish_scheduler::{Credential, VideoStore, auth};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let raw = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("YT_ACCESS_TOKEN").ok());

    let Some(raw) = raw else {
        // No credential: hand the user the implicit-flow URL. The access
        // token comes back in the redirect URL's fragment.
        let url = auth::authorization_url("http://localhost");
        eprintln!("no credential given; authorize at:\n  {url}");
        eprintln!("then re-run with the access token, or with `dummy` for demo data");
        if let Err(e) = webbrowser::open(&url) {
            tracing::warn!("could not open browser: {e}");
        }
        return Ok(());
    };

    let store = VideoStore::for_credential(Credential::classify(&raw));
    let videos = store.fetch_videos().await.context("fetch videos")?;
    tracing::info!(count = videos.len(), "fetched videos");

    let (unscheduled, scheduled): (Vec<_>, Vec<_>) = videos
        .into_iter()
        .partition(|video| video.client_publish_at.is_none());

    eprintln!("==> unscheduled");
    for video in &unscheduled {
        eprintln!("  {:12} {}", video.id, video.name);
    }

    eprintln!("==> scheduled");
    for video in to_sorted_videos(&scheduled) {
        let client = format_publish_at(video.client_publish_at);
        let server = format_publish_at(video.server_publish_at);
        // Pending local edits show as client/server divergence.
        let marker = if video.client_publish_at == video.server_publish_at {
            ' '
        } else {
            '*'
        };
        eprintln!(
            "  {:12} {client}{marker} (server: {server}) {}",
            video.id, video.name
        );
    }

    Ok(())
}
