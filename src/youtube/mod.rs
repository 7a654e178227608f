//! # YouTube Integration Module
//!
//! Thin client for the parts of the YouTube Data API v3 songsync consumes,
//! plus the playlist and search operations built on top of it.
//!
//! ```text
//! cli::sync (interactive session)
//!          ↓
//! playlist / search (lookup, create, read, add, resolve)
//!          ↓
//! YouTubeApi trait ── YouTubeClient (reqwest, bearer token)
//!          ↓
//! YouTube Data API v3
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - OAuth 2.0 installed-app login with PKCE and a loopback callback
//! - [`playlist`] - Find, create, read and extend the synchronized playlist
//! - [`search`] - Resolve a song entry to the top matching video
//!
//! ## Limits
//!
//! Listing calls request a single page of at most 50 results. Playlists past
//! the first page are not seen, neither are playlist items past the 50th.
//!
//! ## Errors
//!
//! Every non-success HTTP status is turned into an error with
//! `error_for_status` and propagated. Nothing is retried.

pub mod auth;
pub mod playlist;
pub mod search;

use reqwest::Client;

use crate::{
    Res, config,
    types::{
        AddVideoToPlaylistRequest, CreatePlaylistRequest, Playlist, PlaylistItem,
        PlaylistItemListResponse, PlaylistListResponse, SearchListResponse, SearchResult, Token,
    },
};

/// Largest page size the list endpoints accept.
pub const MAX_RESULTS: u32 = 50;

/// The YouTube Data API endpoints used by songsync.
///
/// [`YouTubeClient`] talks to the real service; tests provide in-memory
/// implementations.
#[allow(async_fn_in_trait)]
pub trait YouTubeApi {
    /// `playlists.list` with `mine=true`.
    async fn list_my_playlists(&self, max_results: u32) -> Res<Vec<Playlist>>;

    /// `playlists.insert` with `part=snippet,status`.
    async fn insert_playlist(&self, request: &CreatePlaylistRequest) -> Res<Playlist>;

    /// `playlistItems.list` for one playlist.
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Res<Vec<PlaylistItem>>;

    /// `playlistItems.insert`.
    async fn insert_playlist_item(&self, request: &AddVideoToPlaylistRequest)
    -> Res<PlaylistItem>;

    /// `search.list` with a free-text query.
    async fn search(&self, query: &str, max_results: u32) -> Res<Vec<SearchResult>>;
}

pub struct YouTubeClient {
    client: Client,
    api_url: String,
    token: Token,
}

impl YouTubeClient {
    pub fn new(token: Token) -> Self {
        Self::with_api_url(token, config::youtube_apiurl())
    }

    pub fn with_api_url(token: Token, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            token,
        }
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{uri}/{resource}", uri = self.api_url.trim_end_matches('/'))
    }
}

impl YouTubeApi for YouTubeClient {
    async fn list_my_playlists(&self, max_results: u32) -> Res<Vec<Playlist>> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(self.endpoint("playlists"))
            .query(&[
                ("part", "snippet"),
                ("maxResults", max_results.as_str()),
                ("mine", "true"),
            ])
            .bearer_auth(&self.token.access_token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<PlaylistListResponse>().await?;
        Ok(res.items)
    }

    async fn insert_playlist(&self, request: &CreatePlaylistRequest) -> Res<Playlist> {
        let response = self
            .client
            .post(self.endpoint("playlists"))
            .query(&[("part", "snippet,status")])
            .bearer_auth(&self.token.access_token)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Playlist>().await?)
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Res<Vec<PlaylistItem>> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(self.endpoint("playlistItems"))
            .query(&[
                ("part", "snippet"),
                ("maxResults", max_results.as_str()),
                ("playlistId", playlist_id),
            ])
            .bearer_auth(&self.token.access_token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<PlaylistItemListResponse>().await?;
        Ok(res.items)
    }

    async fn insert_playlist_item(
        &self,
        request: &AddVideoToPlaylistRequest,
    ) -> Res<PlaylistItem> {
        let response = self
            .client
            .post(self.endpoint("playlistItems"))
            .query(&[("part", "snippet")])
            .bearer_auth(&self.token.access_token)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<PlaylistItem>().await?)
    }

    async fn search(&self, query: &str, max_results: u32) -> Res<Vec<SearchResult>> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(self.endpoint("search"))
            .query(&[
                ("part", "snippet"),
                ("maxResults", max_results.as_str()),
                ("q", query),
            ])
            .bearer_auth(&self.token.access_token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<SearchListResponse>().await?;
        Ok(res.items)
    }
}
