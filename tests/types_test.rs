use spotctl::types::{
    CurrentlyPlaying, CurrentlyPlayingType, DevicesResponse, PlaybackContext, PlaybackOffset,
    RepeatState, SearchResponse, StartPlaybackRequest,
};
use spotctl::uri::{ResourceKind, SpotifyUri};

const TRACK_ID: &str = "4iV5W9uYEdYUVa79Axb7Rh";
const ALBUM_ID: &str = "6akEvsycLGftJxYudPjmqK";

fn track_uri() -> SpotifyUri {
    SpotifyUri::parse(TRACK_ID, ResourceKind::Track).unwrap()
}

#[test]
fn test_devices_response_decodes_wire_names() {
    let json = r#"{
        "devices": [
            {
                "id": "74ASZWbe4lXaubB36ztrGX",
                "name": "Kitchen speaker",
                "type": "Speaker",
                "is_active": false,
                "volume_percent": 54
            },
            {
                "id": null,
                "name": "Restricted device",
                "type": "Unknown",
                "is_active": true,
                "volume_percent": null
            }
        ]
    }"#;

    let response: DevicesResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.devices.len(), 2);

    // `type` on the wire maps to device_type
    assert_eq!(response.devices[0].device_type, "Speaker");
    assert_eq!(response.devices[0].volume_percent, Some(54));

    // restricted devices have no id and no volume
    assert!(response.devices[1].id.is_none());
    assert!(response.devices[1].volume_percent.is_none());
}

#[test]
fn test_playback_context_decodes_track_snapshot() {
    let json = format!(
        r#"{{
            "device": {{
                "id": "74ASZWbe4lXaubB36ztrGX",
                "name": "Office",
                "type": "Computer",
                "is_active": true,
                "volume_percent": 100
            }},
            "repeat_state": "context",
            "shuffle_state": true,
            "context": {{
                "type": "album",
                "uri": "spotify:album:{album}"
            }},
            "progress_ms": 42000,
            "is_playing": true,
            "item": {{
                "id": "{track}",
                "name": "Some Track",
                "uri": "spotify:track:{track}",
                "duration_ms": 207959,
                "explicit": false,
                "artists": [{{"id": "abc", "name": "Someone"}}],
                "album": null
            }},
            "currently_playing_type": "track"
        }}"#,
        album = ALBUM_ID,
        track = TRACK_ID
    );

    let playback: PlaybackContext = serde_json::from_str(&json).unwrap();
    assert_eq!(playback.repeat_state, RepeatState::Context);
    assert!(playback.shuffle_state);
    assert_eq!(playback.currently_playing_type, CurrentlyPlayingType::Track);

    // `item` on the wire maps to track
    let track = playback.track.unwrap();
    assert_eq!(track.id, TRACK_ID);
    assert_eq!(track.uri, track_uri());

    let context = playback.context.unwrap();
    assert_eq!(context.uri.kind(), ResourceKind::Album);
}

#[test]
fn test_episode_snapshot_with_absent_item_and_context() {
    // Without the right scope the API reports an episode as playing while
    // hiding both the item and the context. The playing type is the only
    // reliable discriminator.
    let json = r#"{
        "context": null,
        "progress_ms": 13000,
        "is_playing": true,
        "item": null,
        "currently_playing_type": "episode"
    }"#;

    let playing: CurrentlyPlaying = serde_json::from_str(json).unwrap();
    assert!(playing.is_playing);
    assert!(playing.track.is_none());
    assert!(playing.context.is_none());
    assert_eq!(
        playing.currently_playing_type,
        CurrentlyPlayingType::Episode
    );
}

#[test]
fn test_unknown_playing_type_does_not_fail_decode() {
    let json = r#"{
        "context": null,
        "progress_ms": null,
        "is_playing": false,
        "item": null,
        "currently_playing_type": "hologram"
    }"#;

    let playing: CurrentlyPlaying = serde_json::from_str(json).unwrap();
    assert_eq!(
        playing.currently_playing_type,
        CurrentlyPlayingType::Unknown
    );
}

#[test]
fn test_search_response_keeps_unrequested_kinds_absent() {
    let json = r#"{
        "tracks": {
            "items": [],
            "total": 0,
            "limit": 20,
            "offset": 0,
            "next": null,
            "previous": null
        }
    }"#;

    let response: SearchResponse = serde_json::from_str(json).unwrap();
    assert!(response.tracks.is_some());
    assert!(response.albums.is_none());
    assert!(response.artists.is_none());
    assert!(response.playlists.is_none());
    assert!(response.shows.is_none());
    assert!(response.episodes.is_none());
}

#[test]
fn test_start_playback_request_context_form() {
    let album = SpotifyUri::parse(ALBUM_ID, ResourceKind::Album).unwrap();
    let request = StartPlaybackRequest {
        context_uri: Some(album),
        uris: None,
        offset: Some(PlaybackOffset {
            position: Some(3),
            uri: None,
        }),
        position_ms: None,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json["context_uri"],
        format!("spotify:album:{}", ALBUM_ID)
    );
    assert_eq!(json["offset"]["position"], 3);

    // absent fields are omitted, not serialized as null
    assert!(json.get("uris").is_none());
    assert!(json.get("position_ms").is_none());
    assert!(json["offset"].get("uri").is_none());
}

#[test]
fn test_start_playback_request_uris_form() {
    let request = StartPlaybackRequest {
        context_uri: None,
        uris: Some(vec![track_uri()]),
        offset: None,
        position_ms: Some(15000),
    };

    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("context_uri").is_none());
    assert!(json.get("offset").is_none());
    assert_eq!(json["position_ms"], 15000);
    assert_eq!(json["uris"][0], format!("spotify:track:{}", TRACK_ID));
}

#[test]
fn test_repeat_state_parse_and_display() {
    assert_eq!("track".parse::<RepeatState>().unwrap(), RepeatState::Track);
    assert_eq!(
        "CONTEXT".parse::<RepeatState>().unwrap(),
        RepeatState::Context
    );
    assert_eq!("off".parse::<RepeatState>().unwrap(), RepeatState::Off);
    assert!("sometimes".parse::<RepeatState>().is_err());

    assert_eq!(RepeatState::Track.to_string(), "track");
    assert_eq!(RepeatState::Context.to_string(), "context");
    assert_eq!(RepeatState::Off.to_string(), "off");
}
