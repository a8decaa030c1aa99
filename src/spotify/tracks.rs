use reqwest::Client;

use crate::{
    config,
    errors::{SpotifyError, SpotifyResult, optional},
    spotify::send_json,
    types::{SeveralTracksResponse, Track},
    uri::{ResourceKind, SpotifyUri},
};

/// Looks up a single track, or `None` when the id is unknown to the catalog.
///
/// An unknown (but well-formed) id comes back from the API as a 400 with an
/// "invalid id" message, which is folded into `None`. A malformed identifier
/// never reaches the network; it fails locally as `InvalidIdentifier`.
pub async fn get_track(
    token: &str,
    uri: &SpotifyUri,
    market: Option<&str>,
) -> SpotifyResult<Option<Track>> {
    if uri.kind() != ResourceKind::Track {
        return Err(SpotifyError::InvalidIdentifier {
            kind: uri.kind(),
            input: uri.to_string(),
        });
    }

    let mut api_url = format!(
        "{api}/tracks/{id}",
        api = &config::spotify_apiurl(),
        id = uri.id()
    );
    if let Some(market) = market {
        api_url.push_str(&format!("?market={}", market));
    }

    let client = Client::new();
    optional(send_json(client.get(&api_url).bearer_auth(token)).await)
}

/// Looks up several tracks in one request (at most 50 ids).
///
/// Unknown ids are dropped from the result rather than failing the batch;
/// the API marks them with `null` entries and those are filtered out. The
/// order of the surviving tracks follows the order of the input ids.
pub async fn get_several_tracks(
    token: &str,
    uris: &[SpotifyUri],
    market: Option<&str>,
) -> SpotifyResult<Vec<Track>> {
    if let Some(bad) = uris.iter().find(|u| u.kind() != ResourceKind::Track) {
        return Err(SpotifyError::InvalidIdentifier {
            kind: bad.kind(),
            input: bad.to_string(),
        });
    }

    let ids = uris
        .iter()
        .map(|u| u.id())
        .collect::<Vec<_>>()
        .join(",");

    let mut api_url = format!(
        "{api}/tracks?ids={ids}",
        api = &config::spotify_apiurl(),
        ids = ids
    );
    if let Some(market) = market {
        api_url.push_str(&format!("&market={}", market));
    }

    let client = Client::new();
    let response: SeveralTracksResponse =
        send_json(client.get(&api_url).bearer_auth(token)).await?;

    Ok(response.tracks.into_iter().flatten().collect())
}
