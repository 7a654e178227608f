//! Configuration management for songsync.
//!
//! Configuration values come from environment variables, optionally loaded
//! from a `.env` file in the local data directory. Variables already present
//! in the process environment take priority over the file.
//!
//! Only the OAuth client credentials are required. Their absence is not
//! checked here; the login fails at the authorization server instead.

use std::{env, path::PathBuf};

/// OAuth scope granting full read/write access to the user's YouTube data.
pub const YOUTUBE_SCOPE: &str = "https://www.googleapis.com/auth/youtube.force-ssl";

/// Default name of the local song list file.
pub const DEFAULT_SONGS_FILE: &str = "songs_to_add.json";

/// Default title of the synchronized playlist.
pub const DEFAULT_PLAYLIST_TITLE: &str = "Reggaeton playlist created by songsync";

/// Description given to a newly created playlist.
pub const PLAYLIST_DESCRIPTION: &str = "A playlist created by songsync";

/// Default language given to a newly created playlist.
pub const PLAYLIST_LANGUAGE: &str = "en";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/songsync/.env`
/// - macOS: `~/Library/Application Support/songsync/.env`
/// - Windows: `%LOCALAPPDATA%/songsync/.env`
///
/// A missing file is not an error, the process environment is used as is.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songsync/.env");
    path
}

/// Returns the address the local OAuth callback server binds to.
///
/// Defaults to `127.0.0.1:0`, letting the OS pick a free port.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:0".to_string())
}

/// Returns the OAuth client id from `YOUTUBE_CLIENT_ID`, empty when unset.
pub fn youtube_client_id() -> String {
    env::var("YOUTUBE_CLIENT_ID").unwrap_or_default()
}

/// Returns the OAuth client secret from `YOUTUBE_CLIENT_SECRET`, empty when unset.
///
/// # Security Note
///
/// The client secret should never be exposed in logs.
pub fn youtube_client_secret() -> String {
    env::var("YOUTUBE_CLIENT_SECRET").unwrap_or_default()
}

/// Returns the YouTube Data API base URL.
///
/// ```
/// let api_url = youtube_apiurl(); // e.g., "https://www.googleapis.com/youtube/v3"
/// ```
pub fn youtube_apiurl() -> String {
    env::var("YOUTUBE_API_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".to_string())
}

/// Returns the OAuth authorization endpoint users are sent to.
pub fn google_auth_url() -> String {
    env::var("GOOGLE_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
}

/// Returns the OAuth token endpoint used to exchange authorization codes.
pub fn google_token_url() -> String {
    env::var("GOOGLE_TOKEN_URL")
        .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
}
