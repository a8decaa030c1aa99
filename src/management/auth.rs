use std::path::PathBuf;

use chrono::Utc;

use crate::{
    errors::{SpotifyError, SpotifyResult},
    spotify,
    types::Token,
    warning,
};

/// Owns the persisted OAuth token and keeps it fresh.
///
/// The token lives in the local data directory and is refreshed 240 seconds
/// before its actual expiry, so a token handed out by [`get_valid_token`]
/// never expires mid-request.
///
/// [`get_valid_token`]: TokenManager::get_valid_token
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Loads the persisted token from the cache file.
    ///
    /// A missing or unreadable cache surfaces as `Token`; the caller decides
    /// whether that means "run the auth flow first".
    pub async fn load() -> SpotifyResult<Self> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| SpotifyError::Token(format!("failed to read token cache: {}", e)))?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> SpotifyResult<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| SpotifyError::Token(format!("failed to create cache dir: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| SpotifyError::Token(format!("failed to write token cache: {}", e)))
    }

    /// Returns an access token that is valid for at least the next few
    /// minutes, refreshing and re-persisting it when needed.
    ///
    /// A failed persist after a successful refresh only warns; the fresh
    /// token is still usable for this process.
    pub async fn get_valid_token(&mut self) -> SpotifyResult<String> {
        if self.is_expired() {
            let new_token = spotify::auth::refresh_token(&self.token.refresh_token).await?;
            self.token = new_token;
            if let Err(e) = self.persist().await {
                warning!("Failed to persist refreshed token: {}", e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in - 240
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotctl/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
