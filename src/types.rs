use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One line of the local song list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    pub song: String,
    pub singer: String,
}

impl SongEntry {
    pub fn new(song: impl Into<String>, singer: impl Into<String>) -> Self {
        Self {
            song: song.into(),
            singer: singer.into(),
        }
    }
}

/// A video as it currently sits in the remote playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEntry {
    pub video_id: String,
    pub title: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "video")]
    pub video_id: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub scope: String,
    pub expires_in: i64,
    pub obtained_at: i64,
}

impl Token {
    /// Moment the access token stops working. There is no refresh.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.obtained_at + self.expires_in, 0)
    }

    /// Whether the space separated granted scopes contain `scope`.
    pub fn grants(&self, scope: &str) -> bool {
        self.scope.split_whitespace().any(|s| s == scope)
    }
}

/// Login state shared between the auth flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub redirect_uri: String,
    pub token: Option<Token>,
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistListResponse {
    #[serde(default)]
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStatus {
    pub privacy_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub snippet: PlaylistSnippet,
    pub status: PlaylistStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub id: String,
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub playlist_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: String,
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddVideoToPlaylistRequest {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
}

/// Search hits can be videos, channels or playlists; only videos carry a `videoId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub kind: String,
    pub video_id: Option<String>,
}
