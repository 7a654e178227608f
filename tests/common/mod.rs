use std::{cell::RefCell, collections::HashMap};

use songsync::{
    Res,
    types::{
        AddVideoToPlaylistRequest, CreatePlaylistRequest, Playlist, PlaylistItem,
        PlaylistItemSnippet, PlaylistSnippet, ResourceId, SearchResult, SearchResultId,
    },
    youtube::YouTubeApi,
};

/// In-memory stand-in for the YouTube Data API that records every write.
#[derive(Default)]
pub struct FakeYouTube {
    pub playlists: RefCell<Vec<Playlist>>,
    pub items: RefCell<Vec<PlaylistItem>>,
    pub search_hits: HashMap<String, SearchResultId>,
    pub failing_queries: Vec<String>,
    pub searches: RefCell<Vec<String>>,
    pub created: RefCell<Vec<CreatePlaylistRequest>>,
    pub inserted: RefCell<Vec<AddVideoToPlaylistRequest>>,
    pub playlist_page_sizes: RefCell<Vec<u32>>,
    pub item_page_sizes: RefCell<Vec<u32>>,
    pub search_page_sizes: RefCell<Vec<u32>>,
}

#[allow(dead_code)]
impl FakeYouTube {
    pub fn with_playlist(mut self, id: &str, title: &str) -> Self {
        self.playlists.get_mut().push(Playlist {
            id: id.to_string(),
            snippet: PlaylistSnippet {
                title: title.to_string(),
                ..Default::default()
            },
        });
        self
    }

    pub fn with_item(mut self, playlist_id: &str, video_id: &str, title: &str) -> Self {
        self.items.get_mut().push(item(playlist_id, video_id, Some(title)));
        self
    }

    pub fn with_video_hit(mut self, query: &str, video_id: &str) -> Self {
        self.search_hits.insert(
            query.to_string(),
            SearchResultId {
                kind: "youtube#video".to_string(),
                video_id: Some(video_id.to_string()),
            },
        );
        self
    }

    pub fn with_channel_hit(mut self, query: &str) -> Self {
        self.search_hits.insert(
            query.to_string(),
            SearchResultId {
                kind: "youtube#channel".to_string(),
                video_id: None,
            },
        );
        self
    }

    pub fn with_failing_query(mut self, query: &str) -> Self {
        self.failing_queries.push(query.to_string());
        self
    }

    pub fn inserted_video_ids(&self) -> Vec<String> {
        self.inserted
            .borrow()
            .iter()
            .map(|r| r.snippet.resource_id.video_id.clone())
            .collect()
    }
}

fn item(playlist_id: &str, video_id: &str, title: Option<&str>) -> PlaylistItem {
    PlaylistItem {
        id: format!("item-{}", video_id),
        snippet: PlaylistItemSnippet {
            playlist_id: playlist_id.to_string(),
            title: title.map(str::to_string),
            resource_id: ResourceId {
                kind: "youtube#video".to_string(),
                video_id: video_id.to_string(),
            },
        },
    }
}

impl YouTubeApi for FakeYouTube {
    async fn list_my_playlists(&self, max_results: u32) -> Res<Vec<Playlist>> {
        self.playlist_page_sizes.borrow_mut().push(max_results);
        Ok(self
            .playlists
            .borrow()
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }

    async fn insert_playlist(&self, request: &CreatePlaylistRequest) -> Res<Playlist> {
        self.created.borrow_mut().push(request.clone());
        let playlist = Playlist {
            id: format!("PL{}", self.playlists.borrow().len() + 1),
            snippet: request.snippet.clone(),
        };
        self.playlists.borrow_mut().push(playlist.clone());
        Ok(playlist)
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Res<Vec<PlaylistItem>> {
        self.item_page_sizes.borrow_mut().push(max_results);
        Ok(self
            .items
            .borrow()
            .iter()
            .filter(|i| i.snippet.playlist_id == playlist_id)
            .take(max_results as usize)
            .cloned()
            .collect())
    }

    async fn insert_playlist_item(
        &self,
        request: &AddVideoToPlaylistRequest,
    ) -> Res<PlaylistItem> {
        self.inserted.borrow_mut().push(request.clone());
        let snippet = &request.snippet;
        let inserted = item(
            &snippet.playlist_id,
            &snippet.resource_id.video_id,
            Some(&snippet.resource_id.video_id),
        );
        self.items.borrow_mut().push(inserted.clone());
        Ok(inserted)
    }

    async fn search(&self, query: &str, max_results: u32) -> Res<Vec<SearchResult>> {
        self.searches.borrow_mut().push(query.to_string());
        self.search_page_sizes.borrow_mut().push(max_results);
        if self.failing_queries.iter().any(|q| q == query) {
            return Err(format!("quotaExceeded for {}", query).into());
        }

        Ok(self
            .search_hits
            .get(query)
            .map(|id| SearchResult { id: id.clone() })
            .into_iter()
            .take(max_results as usize)
            .collect())
    }
}
