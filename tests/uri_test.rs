use spotctl::errors::SpotifyError;
use spotctl::uri::{ResourceKind, SpotifyUri};

const TRACK_ID: &str = "4iV5W9uYEdYUVa79Axb7Rh";

#[test]
fn test_parse_canonical_uri() {
    let uri =
        SpotifyUri::parse(&format!("spotify:track:{}", TRACK_ID), ResourceKind::Track).unwrap();
    assert_eq!(uri.kind(), ResourceKind::Track);
    assert_eq!(uri.id(), TRACK_ID);
}

#[test]
fn test_parse_bare_id_falls_back_to_expected_kind() {
    let uri = SpotifyUri::parse(TRACK_ID, ResourceKind::Playlist).unwrap();
    assert_eq!(uri.kind(), ResourceKind::Playlist);
    assert_eq!(uri.to_string(), format!("spotify:playlist:{}", TRACK_ID));
}

#[test]
fn test_kind_mismatch_is_rejected() {
    let result = SpotifyUri::parse(&format!("spotify:album:{}", TRACK_ID), ResourceKind::Track);
    assert!(matches!(
        result,
        Err(SpotifyError::InvalidIdentifier {
            kind: ResourceKind::Track,
            ..
        })
    ));
}

#[test]
fn test_malformed_inputs_are_rejected() {
    for input in [
        "",
        "spotify:track:",
        "spotify:track",
        "abc",
        "spotify:track:not-base62!",
        "spotify:banana:4iV5W9uYEdYUVa79Axb7Rh",
    ] {
        assert!(SpotifyUri::parse(input, ResourceKind::Track).is_err());
    }
}

#[test]
fn test_display_round_trips() {
    let input = format!("spotify:episode:{}", TRACK_ID);
    let uri = SpotifyUri::parse(&input, ResourceKind::Episode).unwrap();
    assert_eq!(uri.to_string(), input);

    let reparsed = SpotifyUri::parse(&uri.to_string(), ResourceKind::Episode).unwrap();
    assert_eq!(reparsed, uri);
}

#[test]
fn test_parse_any_prefers_embedded_type() {
    let uri = SpotifyUri::parse_any(
        &format!("spotify:episode:{}", TRACK_ID),
        &[ResourceKind::Track, ResourceKind::Episode],
    )
    .unwrap();
    assert_eq!(uri.kind(), ResourceKind::Episode);

    let bare =
        SpotifyUri::parse_any(TRACK_ID, &[ResourceKind::Track, ResourceKind::Episode]).unwrap();
    assert_eq!(bare.kind(), ResourceKind::Track);
}

#[test]
fn test_context_and_playable_classification() {
    let album = SpotifyUri::parse(TRACK_ID, ResourceKind::Album).unwrap();
    assert!(album.is_context());
    assert!(!album.is_playable());

    let track = SpotifyUri::parse(TRACK_ID, ResourceKind::Track).unwrap();
    assert!(track.is_playable());
    assert!(!track.is_context());

    let episode = SpotifyUri::parse(TRACK_ID, ResourceKind::Episode).unwrap();
    assert!(episode.is_playable());
    assert!(!episode.is_context());
}

#[test]
fn test_serde_round_trip() {
    let uri = SpotifyUri::parse(TRACK_ID, ResourceKind::Track).unwrap();
    let json = serde_json::to_string(&uri).unwrap();
    assert_eq!(json, format!("\"spotify:track:{}\"", TRACK_ID));

    let decoded: SpotifyUri = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, uri);
}

#[test]
fn test_serde_rejects_bare_id() {
    // The wire format is always canonical; bare ids are a CLI convenience.
    let result = serde_json::from_str::<SpotifyUri>(&format!("\"{}\"", TRACK_ID));
    assert!(result.is_err());
}
