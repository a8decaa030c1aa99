use reqwest::Client;

use crate::{
    config,
    errors::{SpotifyResult, optional},
    spotify::send_json,
    types::{PrivateUser, PublicUser},
};

/// Retrieves the profile of the user the token belongs to.
///
/// The optional fields (`email`, `country`, `product`) are only populated
/// when the token carries the matching scopes; missing scopes do not fail
/// the call.
pub async fn get_current_profile(token: &str) -> SpotifyResult<PrivateUser> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    send_json(client.get(&api_url).bearer_auth(token)).await
}

/// Retrieves the public profile of any user, or `None` when the user does
/// not exist.
///
/// The API answers a lookup of an unknown user id with a 400 rather than a
/// 404, so that one status is folded into `None` here. Every other failure
/// propagates unchanged.
pub async fn get_profile(token: &str, user_id: &str) -> SpotifyResult<Option<PublicUser>> {
    let api_url = format!(
        "{uri}/users/{user_id}",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let client = Client::new();
    optional(send_json(client.get(&api_url).bearer_auth(token)).await)
}
