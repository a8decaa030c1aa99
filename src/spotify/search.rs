use reqwest::Client;
use serde::de::Error as _;

use crate::{
    config,
    errors::{SpotifyError, SpotifyResult},
    spotify::send_json,
    types::{Album, Artist, Episode, Page, Playlist, SearchResponse, Show, Track},
    utils::{SearchKind, SearchKinds},
};

/// Searches the Spotify catalog across the requested kinds.
///
/// The response populates one page per requested kind; kinds that were not
/// requested stay absent, never empty. An empty or whitespace-only query is
/// rejected locally with `BadRequest` before any request is sent, since the
/// API would answer the same way for every kind.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `query` - Free-text search query
/// * `kinds` - Which catalog kinds to search
/// * `market` - Optional ISO 3166-1 market filter
/// * `limit` - Page size per kind (1-50, API default 20)
/// * `offset` - Page offset per kind
///
/// # Example
///
/// ```
/// let kinds = utils::parse_search_kinds("track,album")?;
/// let result = search(&token, "tania bowra", &kinds, None, Some(10), None).await?;
/// assert!(result.artists.is_none()); // not requested, not present
/// ```
pub async fn search(
    token: &str,
    query: &str,
    kinds: &SearchKinds,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> SpotifyResult<SearchResponse> {
    if query.trim().is_empty() {
        return Err(SpotifyError::BadRequest(
            "search query must not be empty".to_string(),
        ));
    }

    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let mut params: Vec<(&str, String)> = vec![
        ("q", query.to_string()),
        ("type", kinds.to_string()),
    ];
    if let Some(market) = market {
        params.push(("market", market.to_string()));
    }
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }
    if let Some(offset) = offset {
        params.push(("offset", offset.to_string()));
    }

    let client = Client::new();
    send_json(client.get(&api_url).bearer_auth(token).query(&params)).await
}

pub async fn search_tracks(
    token: &str,
    query: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> SpotifyResult<Page<Track>> {
    let kinds = SearchKinds::single(SearchKind::Track);
    let response = search(token, query, &kinds, market, limit, offset).await?;
    page_or_missing(response.tracks, SearchKind::Track)
}

pub async fn search_albums(
    token: &str,
    query: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> SpotifyResult<Page<Album>> {
    let kinds = SearchKinds::single(SearchKind::Album);
    let response = search(token, query, &kinds, market, limit, offset).await?;
    page_or_missing(response.albums, SearchKind::Album)
}

pub async fn search_artists(
    token: &str,
    query: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> SpotifyResult<Page<Artist>> {
    let kinds = SearchKinds::single(SearchKind::Artist);
    let response = search(token, query, &kinds, market, limit, offset).await?;
    page_or_missing(response.artists, SearchKind::Artist)
}

pub async fn search_playlists(
    token: &str,
    query: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> SpotifyResult<Page<Playlist>> {
    let kinds = SearchKinds::single(SearchKind::Playlist);
    let response = search(token, query, &kinds, market, limit, offset).await?;
    page_or_missing(response.playlists, SearchKind::Playlist)
}

pub async fn search_shows(
    token: &str,
    query: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> SpotifyResult<Page<Show>> {
    let kinds = SearchKinds::single(SearchKind::Show);
    let response = search(token, query, &kinds, market, limit, offset).await?;
    page_or_missing(response.shows, SearchKind::Show)
}

pub async fn search_episodes(
    token: &str,
    query: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> SpotifyResult<Page<Episode>> {
    let kinds = SearchKinds::single(SearchKind::Episode);
    let response = search(token, query, &kinds, market, limit, offset).await?;
    page_or_missing(response.episodes, SearchKind::Episode)
}

fn page_or_missing<T>(page: Option<Page<T>>, kind: SearchKind) -> SpotifyResult<Page<T>> {
    page.ok_or_else(|| {
        SpotifyError::Parse(serde_json::Error::custom(format!(
            "search response is missing the requested {} page",
            kind
        )))
    })
}
