use songsync::types::{PlaylistEntry, SongEntry};
use songsync::utils::*;

fn entry(video_id: &str, title: &str) -> PlaylistEntry {
    PlaylistEntry {
        video_id: video_id.to_string(),
        title: title.to_string(),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    assert_eq!(verifier.len(), 128);
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let challenge = generate_code_challenge("test_verifier_123");

    // SHA-256 digest, base64 url-safe without padding
    assert_eq!(challenge.len(), 43);
    assert_eq!(challenge, generate_code_challenge("test_verifier_123"));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_split_title_with_delimiter() {
    assert_eq!(
        split_title("Artist - Song Name"),
        SongEntry::new("Song Name", "Artist")
    );
}

#[test]
fn test_split_title_without_delimiter() {
    assert_eq!(
        split_title("NoDelimiterTitle"),
        SongEntry::new("NoDelimiterTitle", "")
    );
}

#[test]
fn test_split_title_only_first_delimiter() {
    let song = split_title("A - B - C");
    assert_eq!(song.singer, "A");
    assert_eq!(song.song, "B - C");
}

#[test]
fn test_split_title_trims_parts() {
    assert_eq!(
        split_title("  Daddy Yankee  -  Gasolina  "),
        SongEntry::new("Gasolina", "Daddy Yankee")
    );
    assert_eq!(split_title("  Lonely Title "), SongEntry::new("Lonely Title", ""));
}

#[test]
fn test_split_title_hyphen_without_spaces_is_not_a_delimiter() {
    assert_eq!(split_title("Jay-Z"), SongEntry::new("Jay-Z", ""));
}

#[test]
fn test_reconcile_maps_every_entry_in_order() {
    let entries = vec![
        entry("v1", "Bad Bunny - Tití Me Preguntó"),
        entry("v2", "Instrumental"),
        entry("v1", "Bad Bunny - Tití Me Preguntó"),
    ];

    let songs = reconcile(&entries);

    assert_eq!(
        songs,
        vec![
            SongEntry::new("Tití Me Preguntó", "Bad Bunny"),
            SongEntry::new("Instrumental", ""),
            SongEntry::new("Tití Me Preguntó", "Bad Bunny"),
        ]
    );
}

#[test]
fn test_reconcile_is_idempotent() {
    let entries = vec![entry("v1", "Karol G - Provenza"), entry("v2", "A - B - C")];

    assert_eq!(reconcile(&entries), reconcile(&entries));
}

#[test]
fn test_reconcile_empty_playlist() {
    assert!(reconcile(&[]).is_empty());
}

#[test]
fn test_song_query_joins_song_and_singer() {
    assert_eq!(
        song_query(&SongEntry::new("Song A", "Singer A")),
        "Song A Singer A"
    );
    assert_eq!(song_query(&SongEntry::new("Solo", "")), "Solo ");
}

#[test]
fn test_playlist_table_rows() {
    let rows = playlist_table_rows(&[entry("abc123", "Artist - Song")]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].video_id, "abc123");
    assert_eq!(rows[0].title, "Artist - Song");
}
