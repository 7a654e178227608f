use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res, config, info,
    types::{
        AddVideoToPlaylistRequest, CreatePlaylistRequest, PlaylistEntry, PlaylistItemSnippet,
        PlaylistSnippet, PlaylistStatus, ResourceId, SongEntry,
    },
    warning,
    youtube::{MAX_RESULTS, YouTubeApi, search},
};

/// Returns the id of the first of the user's playlists titled exactly `title`.
///
/// Only the first page of 50 playlists is searched.
pub async fn find<A: YouTubeApi>(api: &A, title: &str) -> Res<Option<String>> {
    let playlists = api.list_my_playlists(MAX_RESULTS).await?;

    Ok(playlists
        .into_iter()
        .find(|p| p.snippet.title == title)
        .map(|p| p.id))
}

/// Creates a private playlist with the fixed description and language.
pub async fn create<A: YouTubeApi>(api: &A, title: &str) -> Res<String> {
    let request = CreatePlaylistRequest {
        snippet: PlaylistSnippet {
            title: title.to_string(),
            description: config::PLAYLIST_DESCRIPTION.to_string(),
            default_language: Some(config::PLAYLIST_LANGUAGE.to_string()),
        },
        status: PlaylistStatus {
            privacy_status: "private".to_string(),
        },
    };

    let playlist = api.insert_playlist(&request).await?;
    Ok(playlist.id)
}

pub async fn find_or_create<A: YouTubeApi>(api: &A, title: &str) -> Res<String> {
    match find(api, title).await? {
        Some(id) => {
            info!("Using playlist {} ({})", title, id);
            Ok(id)
        }
        None => {
            let id = create(api, title).await?;
            info!("Created playlist {} ({})", title, id);
            Ok(id)
        }
    }
}

/// Fetches the first 50 videos of a playlist as `(video id, title)` entries.
pub async fn entries<A: YouTubeApi>(api: &A, playlist_id: &str) -> Res<Vec<PlaylistEntry>> {
    let items = api.list_playlist_items(playlist_id, MAX_RESULTS).await?;

    Ok(items
        .into_iter()
        .map(|item| PlaylistEntry {
            video_id: item.snippet.resource_id.video_id,
            title: item.snippet.title.unwrap_or_default(),
        })
        .collect())
}

pub async fn add_video<A: YouTubeApi>(api: &A, playlist_id: &str, video_id: &str) -> Res<()> {
    let request = AddVideoToPlaylistRequest {
        snippet: PlaylistItemSnippet {
            playlist_id: playlist_id.to_string(),
            title: None,
            resource_id: ResourceId {
                kind: "youtube#video".to_string(),
                video_id: video_id.to_string(),
            },
        },
    };

    api.insert_playlist_item(&request).await?;
    Ok(())
}

/// Resolves every song and adds the videos the playlist does not contain yet.
///
/// The playlist is read once up front and only that snapshot is checked, so
/// two songs resolving to the same new video both insert it. Songs without a
/// search hit are skipped. The first failing call aborts the rest
/// of the batch. Returns the number of inserted videos.
pub async fn add_songs<A: YouTubeApi>(
    api: &A,
    playlist_id: &str,
    songs: &[SongEntry],
) -> Res<usize> {
    let known_ids: HashSet<String> = entries(api, playlist_id)
        .await?
        .into_iter()
        .map(|e| e.video_id)
        .collect();

    let pb = ProgressBar::new(songs.len() as u64);
    pb.enable_steady_tick(Duration::from_millis(100));
    let template = "{spinner:.blue} [{bar:30.blue}] {pos}/{len} {msg}";
    if let Ok(style) = ProgressStyle::with_template(template) {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏").progress_chars("=> "));
    }

    let mut added = 0;
    for song in songs {
        pb.set_message(format!("{} - {}", song.singer, song.song));

        let video_id = match search::resolve_song(api, song).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                pb.suspend(|| warning!("No video found for {} {}", song.song, song.singer));
                pb.inc(1);
                continue;
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        if known_ids.contains(&video_id) {
            pb.inc(1);
            continue;
        }

        if let Err(e) = add_video(api, playlist_id, &video_id).await {
            pb.finish_and_clear();
            return Err(e);
        }

        added += 1;
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(added)
}
