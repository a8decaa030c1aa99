//! # Spotify Integration Module
//!
//! This module provides a typed interface to the Spotify Web API, implementing
//! authentication, playback control, search, and catalog retrieval. It serves as
//! the primary integration layer between spotctl and Spotify's services, handling
//! all HTTP communication, authentication flows, and error classification.
//!
//! ## Overview
//!
//! The Spotify module implements an SDK-like interface for the Web API
//! operations spotctl needs. It abstracts away the mechanics of HTTP requests,
//! OAuth flows, and the API's error envelope, providing a clean Rust interface
//! for higher-level application logic.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule handles a
//! specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Player Operations (Devices, Playback Control, State)
//!     ├── Search (Multi-kind catalog search)
//!     ├── Users (Profiles)
//!     ├── Playlists (Create, List, Modify)
//!     └── Tracks (Catalog lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: code verifier/challenge generation, local
//!   callback server coordination, browser launch, token exchange and refresh
//! - [`player`] - Device listing, playback start/pause/resume, seeking, skip,
//!   volume, repeat and shuffle modes, transfer, queueing, and playback state
//!   snapshots
//! - [`search`] - Catalog search across tracks, albums, artists, playlists,
//!   shows, and episodes, with per-kind convenience wrappers
//! - [`users`] - Current user and public user profiles
//! - [`playlists`] - Playlist retrieval, listing, creation, and track addition
//! - [`tracks`] - Single and batched track lookups
//!
//! ## Error Handling Philosophy
//!
//! Every non-2xx response is classified exactly once through
//! [`SpotifyError::from_response`] into the taxonomy in [`crate::errors`]:
//!
//! - **400** becomes [`SpotifyError::BadRequest`]; call sites that treat a 400
//!   as "no such resource" opt in explicitly via [`crate::errors::optional`]
//! - **401/403** become [`SpotifyError::Authorization`] and surface verbatim
//! - **429** becomes [`SpotifyError::RateLimited`] with the `Retry-After`
//!   header captured; the wrapper never sleeps or retries on its own
//! - **5xx** become [`SpotifyError::Server`]
//!
//! There is no internal retry or backoff anywhere in this layer. Callers see
//! every failure and decide for themselves.
//!
//! ## Playback State Semantics
//!
//! Control commands (`play`, `pause`, `seek`, ...) return `()` on acceptance.
//! The API applies them asynchronously on the target device, so observable
//! state is eventually consistent: callers who want to confirm an effect
//! re-fetch via [`player::get_current_playback`] after their own delay.
//! A 204 response from the state endpoints means "no active playback" and
//! decodes to `None`.
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use:
//! - All operations use async/await for non-blocking I/O
//! - One logical network call per operation; no shared mutable state
//! - OAuth state during the callback dance uses Arc<Mutex<>> for safe access

use serde::de::DeserializeOwned;

use crate::errors::{SpotifyError, SpotifyResult};

pub mod auth;
pub mod player;
pub mod playlists;
pub mod search;
pub mod tracks;
pub mod users;

/// Sends a request and decodes the JSON body, classifying non-2xx statuses.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> SpotifyResult<T> {
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(SpotifyError::from_response(response).await);
    }

    Ok(response.json::<T>().await?)
}

/// Sends a request where 204 or an empty body means "nothing there".
pub(crate) async fn send_optional_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> SpotifyResult<Option<T>> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SpotifyError::from_response(response).await);
    }

    if status == reqwest::StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&body)?))
}

/// Sends a request whose response body is irrelevant.
pub(crate) async fn send_empty(request: reqwest::RequestBuilder) -> SpotifyResult<()> {
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(SpotifyError::from_response(response).await);
    }

    Ok(())
}
