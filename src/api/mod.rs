//! # API Module
//!
//! This module provides HTTP API endpoints for the spotctl application's web
//! server functionality. It implements essential endpoints for OAuth
//! authentication and health monitoring.
//!
//! ## Overview
//!
//! The API module serves as the web interface layer for spotctl, a
//! command-line remote control for Spotify playback. It provides HTTP
//! endpoints that handle:
//!
//! - **OAuth Authentication Flow**: Implements the Spotify OAuth 2.0 PKCE
//!   (Proof Key for Code Exchange) callback handler for secure token exchange
//! - **Health Monitoring**: Provides a health check endpoint for system
//!   monitoring and deployment verification
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server. This endpoint completes the PKCE authentication
//!   flow by exchanging authorization codes for access tokens.
//!
//! ### Monitoring
//!
//! - [`health`] - Provides a health check endpoint that returns application
//!   status and version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is implemented as an async function that plugs into Axum's
//! routing system. The server only runs for the duration of the auth flow.
//!
//! ## Security Considerations
//!
//! - Uses OAuth 2.0 PKCE flow for enhanced security without exposing client
//!   secrets
//! - Implements proper state management for temporary authentication data
//! - Handles authentication failures gracefully with appropriate error
//!   responses
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotctl::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::types`] - Type definitions for authentication tokens

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
