mod songs;

pub use songs::SongListError;
pub use songs::SongListManager;
