use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info, spotify, success,
    types::{CreatePlaylistRequest, PlaylistTableRow, TrackTableRow},
    uri::{ResourceKind, SpotifyUri},
    utils, warning,
};

/// Lists the authenticated user's playlists, owned and followed alike.
pub async fn list_playlists(limit: Option<u32>, offset: Option<u32>) {
    let token = super::access_token().await;

    match spotify::playlists::get_current_user_playlists(&token, limit, offset).await {
        Ok(page) => {
            if page.items.is_empty() {
                info!("No playlists found.");
                return;
            }

            let rows: Vec<PlaylistTableRow> = page
                .items
                .iter()
                .map(|p| PlaylistTableRow {
                    name: p.name.clone(),
                    public: match p.public {
                        Some(true) => "yes".to_string(),
                        Some(false) => "no".to_string(),
                        None => String::new(),
                    },
                    collaborative: if p.collaborative { "yes" } else { "no" }.to_string(),
                })
                .collect();

            println!(
                "{table}\nShowing {shown} of {total} playlists.",
                table = Table::new(rows),
                shown = page.items.len(),
                total = page.total
            );
        }
        Err(e) => error!("Failed to list playlists: {}", e),
    }
}

/// Shows a playlist with its first page of tracks.
pub async fn show_playlist(input: String) {
    let uri = match SpotifyUri::parse(&input, ResourceKind::Playlist) {
        Ok(uri) => uri,
        Err(e) => error!("{}", e),
    };

    let token = super::access_token().await;

    match spotify::playlists::get_playlist(&token, &uri).await {
        Ok(Some(playlist)) => {
            println!("{}", playlist.name);
            if let Some(description) = &playlist.description {
                if !description.is_empty() {
                    println!("{}", description);
                }
            }

            let rows: Vec<TrackTableRow> = playlist
                .tracks
                .items
                .iter()
                .filter_map(|entry| entry.track.as_ref())
                .map(|t| TrackTableRow {
                    name: t.name.clone(),
                    artists: t
                        .artists
                        .iter()
                        .map(|a| a.name.clone())
                        .collect::<Vec<String>>()
                        .join(", "),
                    album: t.album.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
                    duration: utils::format_duration_ms(t.duration_ms),
                })
                .collect();

            if rows.is_empty() {
                info!("The playlist has no playable tracks.");
            } else {
                println!(
                    "{table}\nShowing {shown} of {total} tracks.",
                    table = Table::new(rows),
                    shown = playlist.tracks.items.len(),
                    total = playlist.tracks.total
                );
            }
        }
        Ok(None) => warning!("No playlist found for {}.", uri),
        Err(e) => error!("Failed to fetch playlist: {}", e),
    }
}

/// Creates a playlist for the authenticated user.
///
/// Creation is append-only on the API side, so an existing playlist with
/// the same name stops the command instead of silently duplicating it.
pub async fn create_playlist(
    name: String,
    description: Option<String>,
    public: bool,
    collaborative: bool,
) {
    let token = super::access_token().await;

    let playlist_exists = match spotify::playlists::exists(&token, &name).await {
        Ok(exists) => exists,
        Err(e) => {
            warning!("Failed to check if playlist exists: {}", e);
            false
        }
    };

    if playlist_exists {
        info!("Playlist {} already exists.", name);
        return;
    }

    let request = CreatePlaylistRequest {
        name: name.clone(),
        description: description.unwrap_or_default(),
        public,
        collaborative,
    };

    match spotify::playlists::create(&token, request).await {
        Ok(created) => success!("Playlist {} created ({}).", name, created.id),
        Err(e) => error!("Failed to create playlist: {}", e),
    }
}

/// Adds tracks to a playlist, batching 100 per request.
pub async fn add_playlist_tracks(playlist: String, tracks: Vec<String>) {
    let playlist_uri = match SpotifyUri::parse(&playlist, ResourceKind::Playlist) {
        Ok(uri) => uri,
        Err(e) => error!("{}", e),
    };

    let mut uris = Vec::with_capacity(tracks.len());
    for input in &tracks {
        match SpotifyUri::parse_any(input, &ResourceKind::PLAYABLE) {
            Ok(uri) => uris.push(uri),
            Err(e) => error!("{}", e),
        }
    }

    let token = super::access_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Adding {} tracks...", uris.len()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let total = uris.len();
    let mut added = 0;
    for chunk in uris.chunks(100) {
        match spotify::playlists::add_tracks(&token, &playlist_uri, chunk.to_vec()).await {
            Ok(_snapshot) => {
                added += chunk.len();
                pb.set_message(format!("Added {added}/{total} tracks..."));
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to add tracks to playlist: {}", e);
            }
        }
    }

    pb.finish_and_clear();
    success!("Added {} tracks to {}.", added, playlist_uri);
}
