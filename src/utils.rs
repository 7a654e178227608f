use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{PlaylistEntry, PlaylistTableRow, SongEntry};

const TITLE_DELIMITER: &str = " - ";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Infers a song entry from a video title shaped like `"Singer - Song"`.
///
/// Only the first `" - "` separates singer from song, so `"A - B - C"` yields
/// singer `"A"` and song `"B - C"`. A title without the delimiter becomes the
/// song name with an empty singer. Both parts are trimmed.
pub fn split_title(title: &str) -> SongEntry {
    match title.split_once(TITLE_DELIMITER) {
        Some((singer, song)) => SongEntry::new(song.trim(), singer.trim()),
        None => SongEntry::new(title.trim(), ""),
    }
}

/// Rebuilds the local song list from the playlist contents.
///
/// Every entry is mapped, in playlist order, whether or not its video is
/// already known locally.
pub fn reconcile(entries: &[PlaylistEntry]) -> Vec<SongEntry> {
    entries.iter().map(|e| split_title(&e.title)).collect()
}

/// Free-text search query for a song entry.
pub fn song_query(song: &SongEntry) -> String {
    format!("{} {}", song.song, song.singer)
}

pub fn playlist_table_rows(entries: &[PlaylistEntry]) -> Vec<PlaylistTableRow> {
    entries
        .iter()
        .map(|e| PlaylistTableRow {
            video_id: e.video_id.clone(),
            title: e.title.clone(),
        })
        .collect()
}
