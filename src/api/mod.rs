//! # API Module
//!
//! HTTP endpoints of the short-lived local server that receives the OAuth
//! redirect during login.
//!
//! ## Endpoints
//!
//! - [`callback`] - Served at `/`, the loopback redirect target. Exchanges the
//!   authorization code for an access token and stores it in the shared login
//!   state.
//! - [`health`] - Served at `/health`, reports status and version.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use songsync::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
