use tabled::Table;

use crate::{
    error, info, spotify, success,
    types::{
        CurrentlyPlayingType, DeviceTableRow, HistoryTableRow, PlaybackContext, RepeatState,
        Track,
    },
    uri::{ResourceKind, SpotifyUri},
    utils,
};

/// Lists the devices currently available for playback.
pub async fn devices() {
    let token = super::access_token().await;

    match spotify::player::get_devices(&token).await {
        Ok(devices) => {
            if devices.is_empty() {
                info!("No devices available. Open a Spotify client somewhere first.");
                return;
            }

            let rows: Vec<DeviceTableRow> = devices
                .into_iter()
                .map(|d| DeviceTableRow {
                    name: d.name,
                    device_type: d.device_type,
                    active: if d.is_active { "yes" } else { "no" }.to_string(),
                    volume: d
                        .volume_percent
                        .map(|v| format!("{}%", v))
                        .unwrap_or_default(),
                })
                .collect();

            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to list devices: {}", e),
    }
}

/// Starts playback of a context or an explicit list of tracks.
///
/// The context and the track list are mutually exclusive; the CLI rejects
/// the combination before parsing. Offsets only make sense inside a
/// context, but that is left to the API to enforce.
pub async fn play(
    context: Option<String>,
    tracks: Vec<String>,
    device: Option<String>,
    offset: Option<u32>,
    offset_uri: Option<String>,
    position_ms: Option<u64>,
) {
    let target = if !tracks.is_empty() {
        let mut uris = Vec::with_capacity(tracks.len());
        for input in &tracks {
            match SpotifyUri::parse_any(input, &ResourceKind::PLAYABLE) {
                Ok(uri) => uris.push(uri),
                Err(e) => error!("{}", e),
            }
        }
        spotify::player::PlaybackTarget::Tracks(uris)
    } else if let Some(input) = context {
        match SpotifyUri::parse_any(&input, &ResourceKind::CONTEXT) {
            Ok(uri) => spotify::player::PlaybackTarget::Context(uri),
            Err(e) => error!("{}", e),
        }
    } else {
        error!("Nothing to play. Pass a context URI or at least one --track.");
    };

    let offset = match (offset, offset_uri) {
        (Some(position), None) => Some(spotify::player::PlayOffset::Position(position)),
        (None, Some(input)) => match SpotifyUri::parse_any(&input, &ResourceKind::PLAYABLE) {
            Ok(uri) => Some(spotify::player::PlayOffset::Uri(uri)),
            Err(e) => error!("{}", e),
        },
        (None, None) => None,
        (Some(_), Some(_)) => {
            error!("--offset and --offset-uri are mutually exclusive.");
        }
    };

    let token = super::access_token().await;

    match spotify::player::start_playback(&token, target, device.as_deref(), offset, position_ms)
        .await
    {
        Ok(()) => success!("Playback started."),
        Err(e) => error!("Failed to start playback: {}", e),
    }
}

/// Pauses playback on the active (or given) device.
pub async fn pause(device: Option<String>) {
    let token = super::access_token().await;

    match spotify::player::pause(&token, device.as_deref()).await {
        Ok(()) => success!("Playback paused."),
        Err(e) => error!("Failed to pause playback: {}", e),
    }
}

/// Resumes playback without changing the current context.
pub async fn resume(device: Option<String>) {
    let token = super::access_token().await;

    match spotify::player::resume(&token, device.as_deref()).await {
        Ok(()) => success!("Playback resumed."),
        Err(e) => error!("Failed to resume playback: {}", e),
    }
}

/// Seeks to a position in the currently playing item.
pub async fn seek(position_ms: u64, device: Option<String>) {
    let token = super::access_token().await;

    match spotify::player::seek(&token, position_ms, device.as_deref()).await {
        Ok(()) => success!(
            "Seeked to {}.",
            utils::format_duration_ms(position_ms)
        ),
        Err(e) => error!("Failed to seek: {}", e),
    }
}

/// Skips to the next item in the play queue.
pub async fn next() {
    let token = super::access_token().await;

    match spotify::player::skip_forward(&token).await {
        Ok(()) => success!("Skipped forward."),
        Err(e) => error!("Failed to skip forward: {}", e),
    }
}

/// Skips back to the previous item in the play queue.
pub async fn previous() {
    let token = super::access_token().await;

    match spotify::player::skip_behind(&token).await {
        Ok(()) => success!("Skipped back."),
        Err(e) => error!("Failed to skip back: {}", e),
    }
}

/// Sets the playback volume in percent.
pub async fn volume(percent: u8, device: Option<String>) {
    let token = super::access_token().await;

    match spotify::player::set_volume(&token, percent, device.as_deref()).await {
        Ok(()) => success!("Volume set to {}%.", percent.min(100)),
        Err(e) => error!("Failed to set volume: {}", e),
    }
}

/// Sets the repeat mode: track, context, or off.
pub async fn repeat(state: RepeatState, device: Option<String>) {
    let token = super::access_token().await;

    match spotify::player::set_repeat_mode(&token, state, device.as_deref()).await {
        Ok(()) => success!("Repeat mode set to {}.", state),
        Err(e) => error!("Failed to set repeat mode: {}", e),
    }
}

/// Toggles shuffle on or off.
pub async fn shuffle(state: bool, device: Option<String>) {
    let token = super::access_token().await;

    match spotify::player::toggle_shuffle(&token, state, device.as_deref()).await {
        Ok(()) => success!("Shuffle {}.", if state { "on" } else { "off" }),
        Err(e) => error!("Failed to set shuffle: {}", e),
    }
}

/// Transfers playback to another device.
pub async fn transfer(device_id: String, play: bool) {
    let token = super::access_token().await;

    match spotify::player::transfer_playback(&token, &device_id, play).await {
        Ok(()) => success!("Playback transferred."),
        Err(e) => error!("Failed to transfer playback: {}", e),
    }
}

/// Appends a track or episode to the active play queue.
pub async fn queue(input: String, device: Option<String>) {
    let uri = match SpotifyUri::parse_any(&input, &ResourceKind::PLAYABLE) {
        Ok(uri) => uri,
        Err(e) => error!("{}", e),
    };

    let token = super::access_token().await;

    match spotify::player::add_to_queue(&token, &uri, device.as_deref()).await {
        Ok(()) => success!("Added {} to the queue.", uri),
        Err(e) => error!("Failed to queue item: {}", e),
    }
}

/// Shows the full playback state: device, modes, and the current item.
pub async fn status() {
    let token = super::access_token().await;

    match spotify::player::get_current_playback(&token).await {
        Ok(Some(playback)) => print_status(&playback),
        Ok(None) => info!("No active playback."),
        Err(e) => error!("Failed to fetch playback state: {}", e),
    }
}

/// Shows only the currently playing item.
pub async fn now() {
    let token = super::access_token().await;

    match spotify::player::get_currently_playing(&token).await {
        Ok(Some(playing)) => {
            let state = if playing.is_playing { "Playing" } else { "Paused" };
            println!(
                "{state}: {item}",
                state = state,
                item = describe_item(playing.track.as_ref(), playing.currently_playing_type)
            );
            if let (Some(progress), Some(track)) = (playing.progress_ms, &playing.track) {
                println!(
                    "  {progress} / {duration}",
                    progress = utils::format_duration_ms(progress),
                    duration = utils::format_duration_ms(track.duration_ms)
                );
            }
        }
        Ok(None) => info!("Nothing is playing."),
        Err(e) => error!("Failed to fetch the currently playing item: {}", e),
    }
}

/// Lists recently played tracks, newest first.
pub async fn recent(limit: u32) {
    let token = super::access_token().await;

    match spotify::player::get_recently_played(&token, limit).await {
        Ok(history) => {
            if history.is_empty() {
                info!("No listening history yet.");
                return;
            }

            let rows: Vec<HistoryTableRow> = history
                .into_iter()
                .map(|h| HistoryTableRow {
                    played_at: h.played_at,
                    name: h.track.name.clone(),
                    artists: artist_names(&h.track),
                })
                .collect();

            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to fetch listening history: {}", e),
    }
}

fn print_status(playback: &PlaybackContext) {
    let state = if playback.is_playing { "Playing" } else { "Paused" };
    println!(
        "{state} on {device} ({device_type})",
        state = state,
        device = playback.device.name,
        device_type = playback.device.device_type
    );
    println!(
        "  {item}",
        item = describe_item(playback.track.as_ref(), playback.currently_playing_type)
    );

    if let (Some(progress), Some(track)) = (playback.progress_ms, &playback.track) {
        println!(
            "  {progress} / {duration}",
            progress = utils::format_duration_ms(progress),
            duration = utils::format_duration_ms(track.duration_ms)
        );
    }

    println!(
        "  repeat: {repeat}\tshuffle: {shuffle}",
        repeat = playback.repeat_state,
        shuffle = if playback.shuffle_state { "on" } else { "off" }
    );

    if let Some(context) = &playback.context {
        println!("  context: {}", context.uri);
    }
}

/// Renders the current item, falling back to the playing type when the
/// item payload is absent (episodes without the right scope, ads).
fn describe_item(track: Option<&Track>, playing_type: CurrentlyPlayingType) -> String {
    match (track, playing_type) {
        (Some(track), _) => format!("{} - {}", track.name, artist_names(track)),
        (None, CurrentlyPlayingType::Episode) => "an episode (details not available)".to_string(),
        (None, CurrentlyPlayingType::Ad) => "an advertisement".to_string(),
        (None, _) => "unknown item".to_string(),
    }
}

fn artist_names(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<String>>()
        .join(", ")
}
