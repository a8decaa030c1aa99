use reqwest::Client;

use crate::{
    config,
    errors::{SpotifyError, SpotifyResult, optional},
    spotify::{send_json, users},
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatePlaylistResponse, FullPlaylist, Page,
        Playlist, SnapshotResponse,
    },
    uri::{ResourceKind, SpotifyUri},
};

/// Retrieves a playlist with its first page of tracks, or `None` when the
/// playlist does not exist.
///
/// The API reports an unknown playlist id as a 400, which is folded into
/// `None` here. Deleted entries inside the track page decode as absent
/// tracks and are kept in place, so offsets stay meaningful.
pub async fn get_playlist(token: &str, uri: &SpotifyUri) -> SpotifyResult<Option<FullPlaylist>> {
    if uri.kind() != ResourceKind::Playlist {
        return Err(SpotifyError::InvalidIdentifier {
            kind: uri.kind(),
            input: uri.to_string(),
        });
    }

    let api_url = format!(
        "{api}/playlists/{id}",
        api = &config::spotify_apiurl(),
        id = uri.id()
    );

    let client = Client::new();
    optional(send_json(client.get(&api_url).bearer_auth(token)).await)
}

/// Retrieves one page of the authenticated user's playlists, owned and
/// followed alike.
pub async fn get_current_user_playlists(
    token: &str,
    limit: Option<u32>,
    offset: Option<u32>,
) -> SpotifyResult<Page<Playlist>> {
    let mut api_url = format!("{uri}/me/playlists", uri = &config::spotify_apiurl());

    let mut sep = '?';
    if let Some(limit) = limit {
        api_url.push_str(&format!("{}limit={}", sep, limit));
        sep = '&';
    }
    if let Some(offset) = offset {
        api_url.push_str(&format!("{}offset={}", sep, offset));
    }

    let client = Client::new();
    send_json(client.get(&api_url).bearer_auth(token)).await
}

/// Checks whether the user already has a playlist with the given name.
///
/// Walks the user's playlists page by page until a name matches or the
/// listing is exhausted. Name comparison is exact.
pub async fn exists(token: &str, name: &str) -> SpotifyResult<bool> {
    let mut offset = 0;
    loop {
        let page = get_current_user_playlists(token, Some(50), Some(offset)).await?;
        if page.items.iter().any(|p| p.name == name) {
            return Ok(true);
        }
        if page.next.is_none() {
            return Ok(false);
        }
        offset += page.limit;
    }
}

/// Creates a playlist for the authenticated user.
///
/// The owning user id is resolved through the profile endpoint, so the
/// caller only supplies the playlist attributes. The API treats creation as
/// append-only; creating the same name twice yields two playlists, which is
/// why callers that care check [`exists`] first.
pub async fn create(
    token: &str,
    request: CreatePlaylistRequest,
) -> SpotifyResult<CreatePlaylistResponse> {
    let profile = users::get_current_profile(token).await?;

    let api_url = format!(
        "{api}/users/{user_id}/playlists",
        api = &config::spotify_apiurl(),
        user_id = profile.id
    );

    let client = Client::new();
    send_json(client.post(&api_url).bearer_auth(token).json(&request)).await
}

/// Appends tracks to a playlist (at most 100 per call) and returns the new
/// snapshot id.
pub async fn add_tracks(
    token: &str,
    playlist: &SpotifyUri,
    uris: Vec<SpotifyUri>,
) -> SpotifyResult<String> {
    if playlist.kind() != ResourceKind::Playlist {
        return Err(SpotifyError::InvalidIdentifier {
            kind: playlist.kind(),
            input: playlist.to_string(),
        });
    }
    if let Some(bad) = uris.iter().find(|u| !u.is_playable()) {
        return Err(SpotifyError::InvalidIdentifier {
            kind: bad.kind(),
            input: bad.to_string(),
        });
    }

    let api_url = format!(
        "{api}/playlists/{id}/tracks",
        api = &config::spotify_apiurl(),
        id = playlist.id()
    );
    let body = AddTracksRequest { uris };

    let client = Client::new();
    let response: SnapshotResponse =
        send_json(client.post(&api_url).bearer_auth(token).json(&body)).await?;

    Ok(response.snapshot_id)
}
