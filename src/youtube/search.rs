use crate::{Res, types::SongEntry, utils, youtube::YouTubeApi};

/// Resolves a song entry to the video id of the single top search hit.
///
/// The hit is accepted as is, there is no relevance check. Returns `None`
/// when the search is empty or the top hit is not a video.
pub async fn resolve_song<A: YouTubeApi>(api: &A, song: &SongEntry) -> Res<Option<String>> {
    let query = utils::song_query(song);
    let results = api.search(&query, 1).await?;

    Ok(results
        .into_iter()
        .next()
        .and_then(|result| result.id.video_id))
}
