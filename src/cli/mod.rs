//! # CLI Module
//!
//! This module provides the command-line interface layer for spotctl, a
//! remote control for Spotify playback. It implements all user-facing CLI
//! commands and coordinates between the endpoint layer, token management,
//! and terminal output.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the spotctl
//! functionality. It provides commands for:
//!
//! - **Authentication Management**: OAuth 2.0 PKCE flow for Spotify API access
//! - **Playback Control**: Start, pause, resume, seek, skip, volume, repeat,
//!   shuffle, transfer, and queueing
//! - **Playback Observation**: Current state, currently playing item, and
//!   listening history
//! - **Catalog Search**: Multi-kind search with tabular output
//! - **Playlist Operations**: Listing, inspection, creation, and track
//!   addition
//! - **Profile Queries**: The authenticated user's account data
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!
//! ### Playback Control
//!
//! - [`devices`] - Lists the devices available for playback
//! - [`play`] - Starts a context or an explicit list of tracks
//! - [`pause`] / [`resume`] - Suspends and continues playback
//! - [`seek`] / [`next`] / [`previous`] - Moves within and between items
//! - [`volume`] / [`repeat`] / [`shuffle`] - Adjusts playback modes
//! - [`transfer`] - Moves playback to another device
//! - [`queue`] - Appends an item to the play queue
//!
//! ### Playback Observation
//!
//! - [`status`] - Full playback state including device and modes
//! - [`now`] - The currently playing item only
//! - [`recent`] - Recently played tracks, newest first
//!
//! ### Catalog and Library
//!
//! - [`search`] - Searches the catalog across the requested kinds
//! - [`list_playlists`] / [`show_playlist`] / [`create_playlist`] /
//!   [`add_playlist_tracks`] - Playlist operations
//! - [`me`] - The authenticated user's profile
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Token Cache)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command loads a valid token, delegates to the endpoint layer,
//! and renders the result. Control commands report acceptance; they never
//! poll for the resulting state. Observation is always its own command.
//!
//! ## Error Handling Philosophy
//!
//! Failures surface exactly as the endpoint layer classified them. A missing
//! token cache points the user at `spotctl auth`; a rate limit reports the
//! advised wait without sleeping; everything else prints the classified
//! error and exits. There is no retry anywhere in the command path.
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::management`] - OAuth token cache
//! - [`crate::types`] - Data structures and type definitions
//! - [`crate::utils`] - Identifier parsing and formatting helpers

mod auth;
mod player;
mod playlist;
mod search;
mod user;

pub use auth::auth;
pub use player::{
    devices, next, now, pause, play, previous, queue, recent, repeat, resume, seek, shuffle,
    status, transfer, volume,
};
pub use playlist::{add_playlist_tracks, create_playlist, list_playlists, show_playlist};
pub use search::search;
pub use user::me;

use crate::{error, management::TokenManager};

/// Loads the cached token and returns an access token that is valid now.
///
/// Exits with a pointer to `spotctl auth` when no usable token exists.
pub(crate) async fn access_token() -> String {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotctl auth\n Error: {}",
                e
            );
        }
    };

    match token_mgr.get_valid_token().await {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to obtain a valid access token: {}", e);
        }
    }
}
