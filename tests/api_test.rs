use std::sync::{Mutex, MutexGuard, OnceLock};

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use spotctl::errors::SpotifyError;
use spotctl::spotify::{player, playlists, search, tracks, users};
use spotctl::types::RepeatState;
use spotctl::uri::{ResourceKind, SpotifyUri};
use spotctl::utils::parse_search_kinds;

const TOKEN: &str = "test-token";
const TRACK_ID: &str = "4iV5W9uYEdYUVa79Axb7Rh";
const ALBUM_ID: &str = "6akEvsycLGftJxYudPjmqK";

/// The endpoint layer reads its base URL from the environment, which is
/// process-global. Every test that points it at a mock server holds this
/// lock for its whole body so the tests can run on any thread layout.
fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

fn point_api_at(server: &MockServer) {
    // SAFETY: callers hold env_lock for the duration of the test
    unsafe { std::env::set_var("SPOTIFY_API_URL", server.uri()) };
}

fn track_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "uri": format!("spotify:track:{}", id),
        "duration_ms": 207959,
        "explicit": false,
        "artists": [{"id": "abc", "name": "Someone"}],
        "album": null
    })
}

fn empty_page() -> serde_json::Value {
    json!({
        "items": [],
        "total": 0,
        "limit": 20,
        "offset": 0,
        "next": null,
        "previous": null
    })
}

#[tokio::test]
async fn test_search_rejects_empty_query_locally() {
    // No server: the empty query must fail before any request is sent.
    let result = search::search(TOKEN, "   ", &parse_search_kinds("track").unwrap(), None, None, None)
        .await;
    assert!(matches!(result, Err(SpotifyError::BadRequest(_))));
}

#[tokio::test]
async fn test_search_sends_requested_kinds_and_decodes_pages() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "tania bowra"))
        .and(query_param("type", "track,album"))
        .and(query_param("limit", "10"))
        .and(header("authorization", format!("Bearer {}", TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": {
                "items": [track_json(TRACK_ID, "All I Want")],
                "total": 1,
                "limit": 10,
                "offset": 0,
                "next": null,
                "previous": null
            },
            "albums": empty_page()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let kinds = parse_search_kinds("track,album").unwrap();
    let response = search::search(TOKEN, "tania bowra", &kinds, None, Some(10), None)
        .await
        .unwrap();

    let page = response.tracks.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "All I Want");

    assert!(response.albums.unwrap().items.is_empty());
    // kinds that were not requested stay absent
    assert!(response.artists.is_none());
    assert!(response.episodes.is_none());
}

#[tokio::test]
async fn test_per_kind_search_rejects_empty_query_locally() {
    let result = search::search_tracks(TOKEN, "", None, None, None).await;
    assert!(matches!(result, Err(SpotifyError::BadRequest(_))));
}

#[tokio::test]
async fn test_get_track_decodes_to_some() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path(format!("/tracks/{}", TRACK_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_json(TRACK_ID, "All I Want")))
        .mount(&server)
        .await;

    let uri = SpotifyUri::parse(TRACK_ID, ResourceKind::Track).unwrap();
    let track = tracks::get_track(TOKEN, &uri, None).await.unwrap();
    assert_eq!(track.unwrap().name, "All I Want");
}

#[tokio::test]
async fn test_optional_keeps_404_as_error() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path(format!("/playlists/{}", ALBUM_ID)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"status": 404, "message": "Not found."}
        })))
        .mount(&server)
        .await;

    // only a 400 folds into None; a 404 still propagates
    let playlist = SpotifyUri::parse(ALBUM_ID, ResourceKind::Playlist).unwrap();
    let result = playlists::get_playlist(TOKEN, &playlist).await;
    assert!(matches!(result, Err(SpotifyError::NotFound(_))));
}

#[tokio::test]
async fn test_optional_folds_400_into_none() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path("/users/nosuchuser"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"status": 400, "message": "Invalid user id"}
        })))
        .mount(&server)
        .await;

    let profile = users::get_profile(TOKEN, "nosuchuser").await.unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_authorization_error_propagates() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"status": 401, "message": "The access token expired"}
        })))
        .mount(&server)
        .await;

    let result = users::get_current_profile(TOKEN).await;
    match result {
        Err(SpotifyError::Authorization { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "The access token expired");
        }
        other => panic!("expected Authorization error, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_rate_limit_propagates_with_retry_after() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "7")
                .set_body_json(json!({
                    "error": {"status": 429, "message": "Rate limit exceeded"}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    // exactly one request: the wrapper never sleeps or retries
    let result = player::get_devices(TOKEN).await;
    assert!(matches!(
        result,
        Err(SpotifyError::RateLimited {
            retry_after: Some(7)
        })
    ));
}

#[tokio::test]
async fn test_no_content_decodes_to_none() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path("/me/player"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let playback = player::get_current_playback(TOKEN).await.unwrap();
    assert!(playback.is_none());
}

#[tokio::test]
async fn test_start_playback_sends_context_body_and_device_query() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("PUT"))
        .and(path("/me/player/play"))
        .and(query_param("device_id", "abc123"))
        .and(body_partial_json(json!({
            "context_uri": format!("spotify:album:{}", ALBUM_ID),
            "offset": {"position": 3}
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let album = SpotifyUri::parse(ALBUM_ID, ResourceKind::Album).unwrap();
    player::start_playback(
        TOKEN,
        player::PlaybackTarget::Context(album),
        Some("abc123"),
        Some(player::PlayOffset::Position(3)),
        None,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_start_playback_sends_uris_body() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("PUT"))
        .and(path("/me/player/play"))
        .and(body_partial_json(json!({
            "uris": [format!("spotify:track:{}", TRACK_ID)]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let track = SpotifyUri::parse(TRACK_ID, ResourceKind::Track).unwrap();
    player::start_playback(
        TOKEN,
        player::PlaybackTarget::Tracks(vec![track]),
        None,
        None,
        None,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_start_playback_rejects_non_context_uri_locally() {
    // No server: validation happens before the URL is even built.
    let track = SpotifyUri::parse(TRACK_ID, ResourceKind::Track).unwrap();
    let result = player::start_playback(
        TOKEN,
        player::PlaybackTarget::Context(track),
        None,
        None,
        None,
    )
    .await;

    assert!(matches!(
        result,
        Err(SpotifyError::InvalidIdentifier {
            kind: ResourceKind::Track,
            ..
        })
    ));
}

#[tokio::test]
async fn test_queue_rejects_context_uri_locally() {
    let album = SpotifyUri::parse(ALBUM_ID, ResourceKind::Album).unwrap();
    let result = player::add_to_queue(TOKEN, &album, None).await;

    assert!(matches!(
        result,
        Err(SpotifyError::InvalidIdentifier {
            kind: ResourceKind::Album,
            ..
        })
    ));
}

#[tokio::test]
async fn test_set_repeat_mode_sends_state_query() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("PUT"))
        .and(path("/me/player/repeat"))
        .and(query_param("state", "context"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    player::set_repeat_mode(TOKEN, RepeatState::Context, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_several_tracks_drops_unknown_ids() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json(TRACK_ID, "Known Track"), null]
        })))
        .mount(&server)
        .await;

    let known = SpotifyUri::parse(TRACK_ID, ResourceKind::Track).unwrap();
    let unknown = SpotifyUri::parse("0000000000000000000000", ResourceKind::Track).unwrap();

    let result = tracks::get_several_tracks(TOKEN, &[known, unknown], None)
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Known Track");
}

#[tokio::test]
async fn test_add_tracks_returns_snapshot_id() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("POST"))
        .and(path(format!("/playlists/{}/tracks", ALBUM_ID)))
        .and(body_partial_json(json!({
            "uris": [format!("spotify:track:{}", TRACK_ID)]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "snapshot_id": "MTAsYjM0ZDc4"
        })))
        .mount(&server)
        .await;

    let playlist = SpotifyUri::parse(ALBUM_ID, ResourceKind::Playlist).unwrap();
    let track = SpotifyUri::parse(TRACK_ID, ResourceKind::Track).unwrap();

    let snapshot = playlists::add_tracks(TOKEN, &playlist, vec![track])
        .await
        .unwrap();
    assert_eq!(snapshot, "MTAsYjM0ZDc4");
}

#[tokio::test]
async fn test_server_error_classification() {
    let _guard = env_lock();
    let server = MockServer::start().await;
    point_api_at(&server);

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    // a 502 is reported, never retried
    let result = users::get_current_profile(TOKEN).await;
    assert!(matches!(
        result,
        Err(SpotifyError::Server { status: 502 })
    ));
}
