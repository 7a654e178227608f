use std::{
    fmt,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::{
    types::{PlaylistEntry, SongEntry},
    utils,
};

#[derive(Debug)]
pub enum SongListError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for SongListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SongListError::IoError(e) => write!(f, "song list io error: {}", e),
            SongListError::SerdeError(e) => write!(f, "song list is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for SongListError {}

impl From<Error> for SongListError {
    fn from(err: Error) -> Self {
        SongListError::IoError(err)
    }
}

impl From<serde_json::Error> for SongListError {
    fn from(err: serde_json::Error) -> Self {
        SongListError::SerdeError(err)
    }
}

/// Records found in the local list file.
///
/// The startup snapshot writes playlist entries as they are; those are turned
/// back into songs through the title split when the file is read again.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Song(SongEntry),
    Snapshot(PlaylistEntry),
}

impl StoredRecord {
    fn into_song(self) -> SongEntry {
        match self {
            StoredRecord::Song(song) => song,
            StoredRecord::Snapshot(entry) => utils::split_title(&entry.title),
        }
    }
}

/// The local song list file and its in-memory contents.
pub struct SongListManager {
    path: PathBuf,
    songs: Vec<SongEntry>,
}

impl SongListManager {
    pub fn new(path: impl Into<PathBuf>, songs: Option<Vec<SongEntry>>) -> Self {
        Self {
            path: path.into(),
            songs: songs.unwrap_or_default(),
        }
    }

    /// Reads the list at `path`. A file that does not exist yields an empty list.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, SongListError> {
        let path = path.into();
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(Self::new(path, None));
            }
            Err(e) => return Err(SongListError::IoError(e)),
        };

        let records: Vec<StoredRecord> = serde_json::from_str(&content)?;
        let songs = records.into_iter().map(StoredRecord::into_song).collect();
        Ok(Self { path, songs })
    }

    /// Overwrites the file with the current list.
    pub async fn persist(&self) -> Result<(), SongListError> {
        write_json(&self.path, &self.songs).await
    }

    /// Overwrites the file with the playlist entries exactly as fetched.
    pub async fn persist_snapshot(&self, entries: &[PlaylistEntry]) -> Result<(), SongListError> {
        write_json(&self.path, entries).await
    }

    pub fn add_song(&mut self, song: SongEntry) -> &mut Self {
        self.songs.push(song);
        self
    }

    pub fn replace_songs(&mut self, songs: Vec<SongEntry>) -> &mut Self {
        self.songs = songs;
        self
    }

    pub fn get_songs(&self) -> &[SongEntry] {
        &self.songs
    }

    pub fn count(&self) -> usize {
        self.songs.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), SongListError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            async_fs::create_dir_all(parent).await?;
        }
    }

    // four-space indent, non-ASCII kept as is
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    async_fs::write(path, buf).await?;
    Ok(())
}
