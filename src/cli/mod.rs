//! # CLI Module
//!
//! The user-facing layer of songsync: the interactive sync session and the
//! console prompt it reads from.
//!
//! ## Session flow
//!
//! ```text
//! login ─► find or create playlist ─► load local list ─► fetch playlist
//!       ─► snapshot playlist into local file ─► menu
//!             1: rebuild local list from playlist titles
//!             2: add songs locally, save, push missing videos
//! ```
//!
//! Exactly one menu branch runs per session. Invalid menu input is answered
//! with a warning and the menu is shown again.
//!
//! ## Dependencies
//!
//! - [`crate::youtube`] - login and playlist operations
//! - [`crate::management`] - local song list file
//! - [`crate::utils`] - title split heuristic

mod prompt;
mod sync;

pub use prompt::Prompt;
pub use sync::MenuChoice;
pub use sync::run;
pub use sync::sync;
