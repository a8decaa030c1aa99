use reqwest::Client;

use crate::{
    config,
    errors::{SpotifyError, SpotifyResult},
    spotify::{send_empty, send_json, send_optional_json},
    types::{
        CurrentlyPlaying, Device, DevicesResponse, PlayHistory, PlaybackContext, PlaybackOffset,
        RecentlyPlayedResponse, RepeatState, StartPlaybackRequest, TransferPlaybackRequest,
    },
    uri::SpotifyUri,
};

/// What to start playing: a context (album, artist, playlist, show) or an
/// explicit list of playable items. The two request forms are mutually
/// exclusive on the wire, so they are mutually exclusive here.
#[derive(Debug, Clone)]
pub enum PlaybackTarget {
    Context(SpotifyUri),
    Tracks(Vec<SpotifyUri>),
}

/// Where inside the target to start: a zero-based position or the URI of a
/// specific item. Exclusive on the wire, exclusive here.
#[derive(Debug, Clone)]
pub enum PlayOffset {
    Position(u32),
    Uri(SpotifyUri),
}

/// Retrieves the devices currently available to the authenticated user.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Device>)` - Available playback devices, active or not
/// - `Err(SpotifyError)` - Network error, API error, or authorization failure
///
/// # Example
///
/// ```
/// let devices = get_devices(&token).await?;
/// for device in devices {
///     println!("{} ({})", device.name, device.device_type);
/// }
/// ```
pub async fn get_devices(token: &str) -> SpotifyResult<Vec<Device>> {
    let api_url = format!("{uri}/me/player/devices", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response: DevicesResponse = send_json(client.get(&api_url).bearer_auth(token)).await?;

    Ok(response.devices)
}

/// Starts or restarts playback of a context or an explicit track list.
///
/// The target determines the request body: a context URI for albums, artists,
/// playlists and shows, or a `uris` array of playable items. An optional
/// offset selects where inside the target playback begins, either by position
/// or by item URI. The command is accepted asynchronously; observable state
/// must be re-fetched by the caller.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `target` - Context or track list to play
/// * `device_id` - Optional target device; the active device when omitted
/// * `offset` - Optional starting point within the target
/// * `position_ms` - Optional seek position within the first item
///
/// # Errors
///
/// Fails locally with `InvalidIdentifier` when a context target is not a
/// context kind or a track-list target contains a non-playable URI. API
/// failures (no active device is a 404) propagate unchanged.
pub async fn start_playback(
    token: &str,
    target: PlaybackTarget,
    device_id: Option<&str>,
    offset: Option<PlayOffset>,
    position_ms: Option<u64>,
) -> SpotifyResult<()> {
    let (context_uri, uris) = match target {
        PlaybackTarget::Context(uri) => {
            if !uri.is_context() {
                return Err(SpotifyError::InvalidIdentifier {
                    kind: uri.kind(),
                    input: uri.to_string(),
                });
            }
            (Some(uri), None)
        }
        PlaybackTarget::Tracks(list) => {
            if let Some(bad) = list.iter().find(|u| !u.is_playable()) {
                return Err(SpotifyError::InvalidIdentifier {
                    kind: bad.kind(),
                    input: bad.to_string(),
                });
            }
            (None, Some(list))
        }
    };

    let offset = offset.map(|o| match o {
        PlayOffset::Position(position) => PlaybackOffset {
            position: Some(position),
            uri: None,
        },
        PlayOffset::Uri(uri) => PlaybackOffset {
            position: None,
            uri: Some(uri),
        },
    });

    let body = StartPlaybackRequest {
        context_uri,
        uris,
        offset,
        position_ms,
    };

    let mut api_url = format!("{uri}/me/player/play", uri = &config::spotify_apiurl());
    if let Some(device_id) = device_id {
        api_url.push_str(&format!("?device_id={}", device_id));
    }

    let client = Client::new();
    send_empty(client.put(&api_url).bearer_auth(token).json(&body)).await
}

/// Pauses playback on the active (or given) device.
pub async fn pause(token: &str, device_id: Option<&str>) -> SpotifyResult<()> {
    let mut api_url = format!("{uri}/me/player/pause", uri = &config::spotify_apiurl());
    if let Some(device_id) = device_id {
        api_url.push_str(&format!("?device_id={}", device_id));
    }

    let client = Client::new();
    send_empty(client.put(&api_url).bearer_auth(token)).await
}

/// Resumes playback without changing the current context.
///
/// This is the body-less form of the play endpoint; the device keeps its
/// queue and position.
pub async fn resume(token: &str, device_id: Option<&str>) -> SpotifyResult<()> {
    let mut api_url = format!("{uri}/me/player/play", uri = &config::spotify_apiurl());
    if let Some(device_id) = device_id {
        api_url.push_str(&format!("?device_id={}", device_id));
    }

    let client = Client::new();
    send_empty(client.put(&api_url).bearer_auth(token)).await
}

/// Seeks to a position in the currently playing item.
pub async fn seek(token: &str, position_ms: u64, device_id: Option<&str>) -> SpotifyResult<()> {
    let mut api_url = format!(
        "{uri}/me/player/seek?position_ms={position_ms}",
        uri = &config::spotify_apiurl(),
        position_ms = position_ms
    );
    if let Some(device_id) = device_id {
        api_url.push_str(&format!("&device_id={}", device_id));
    }

    let client = Client::new();
    send_empty(client.put(&api_url).bearer_auth(token)).await
}

/// Skips to the next item in the play queue.
pub async fn skip_forward(token: &str) -> SpotifyResult<()> {
    let api_url = format!("{uri}/me/player/next", uri = &config::spotify_apiurl());

    let client = Client::new();
    send_empty(client.post(&api_url).bearer_auth(token)).await
}

/// Skips back to the previous item in the play queue.
pub async fn skip_behind(token: &str) -> SpotifyResult<()> {
    let api_url = format!("{uri}/me/player/previous", uri = &config::spotify_apiurl());

    let client = Client::new();
    send_empty(client.post(&api_url).bearer_auth(token)).await
}

/// Sets the playback volume in percent (0-100).
pub async fn set_volume(token: &str, percent: u8, device_id: Option<&str>) -> SpotifyResult<()> {
    let mut api_url = format!(
        "{uri}/me/player/volume?volume_percent={percent}",
        uri = &config::spotify_apiurl(),
        percent = percent.min(100)
    );
    if let Some(device_id) = device_id {
        api_url.push_str(&format!("&device_id={}", device_id));
    }

    let client = Client::new();
    send_empty(client.put(&api_url).bearer_auth(token)).await
}

/// Sets the repeat mode: track, context, or off.
pub async fn set_repeat_mode(
    token: &str,
    state: RepeatState,
    device_id: Option<&str>,
) -> SpotifyResult<()> {
    let mut api_url = format!(
        "{uri}/me/player/repeat?state={state}",
        uri = &config::spotify_apiurl(),
        state = state
    );
    if let Some(device_id) = device_id {
        api_url.push_str(&format!("&device_id={}", device_id));
    }

    let client = Client::new();
    send_empty(client.put(&api_url).bearer_auth(token)).await
}

/// Toggles shuffle on or off.
pub async fn toggle_shuffle(
    token: &str,
    shuffle: bool,
    device_id: Option<&str>,
) -> SpotifyResult<()> {
    let mut api_url = format!(
        "{uri}/me/player/shuffle?state={state}",
        uri = &config::spotify_apiurl(),
        state = shuffle
    );
    if let Some(device_id) = device_id {
        api_url.push_str(&format!("&device_id={}", device_id));
    }

    let client = Client::new();
    send_empty(client.put(&api_url).bearer_auth(token)).await
}

/// Transfers playback to another device.
///
/// When `play` is true the target device starts playing immediately;
/// otherwise the current playback state is kept.
pub async fn transfer_playback(token: &str, device_id: &str, play: bool) -> SpotifyResult<()> {
    let api_url = format!("{uri}/me/player", uri = &config::spotify_apiurl());
    let body = TransferPlaybackRequest {
        device_ids: vec![device_id.to_string()],
        play,
    };

    let client = Client::new();
    send_empty(client.put(&api_url).bearer_auth(token).json(&body)).await
}

/// Retrieves the full playback state, or `None` when nothing is active.
///
/// A 204 response means no active playback session exists anywhere. For
/// episode playback both `context` and `track` may be absent while
/// `is_playing` is true; the `currently_playing_type` field is the reliable
/// discriminator, never the presence of `track` or `context`.
pub async fn get_current_playback(token: &str) -> SpotifyResult<Option<PlaybackContext>> {
    let api_url = format!("{uri}/me/player", uri = &config::spotify_apiurl());

    let client = Client::new();
    send_optional_json(client.get(&api_url).bearer_auth(token)).await
}

/// Retrieves the currently playing item, or `None` when nothing is playing.
///
/// Same 204 and episode semantics as [`get_current_playback`], without the
/// device and mode fields.
pub async fn get_currently_playing(token: &str) -> SpotifyResult<Option<CurrentlyPlaying>> {
    let api_url = format!(
        "{uri}/me/player/currently-playing",
        uri = &config::spotify_apiurl()
    );

    let client = Client::new();
    send_optional_json(client.get(&api_url).bearer_auth(token)).await
}

/// Retrieves the user's recently played tracks (cursor paged, newest first).
pub async fn get_recently_played(token: &str, limit: u32) -> SpotifyResult<Vec<PlayHistory>> {
    let api_url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = limit
    );

    let client = Client::new();
    let response: RecentlyPlayedResponse =
        send_json(client.get(&api_url).bearer_auth(token)).await?;

    Ok(response.items)
}

/// Appends a playable item to the active play queue.
pub async fn add_to_queue(
    token: &str,
    uri: &SpotifyUri,
    device_id: Option<&str>,
) -> SpotifyResult<()> {
    if !uri.is_playable() {
        return Err(SpotifyError::InvalidIdentifier {
            kind: uri.kind(),
            input: uri.to_string(),
        });
    }

    let mut api_url = format!(
        "{api}/me/player/queue?uri={uri}",
        api = &config::spotify_apiurl(),
        uri = uri
    );
    if let Some(device_id) = device_id {
        api_url.push_str(&format!("&device_id={}", device_id));
    }

    let client = Client::new();
    send_empty(client.post(&api_url).bearer_auth(token)).await
}
