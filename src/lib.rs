//! songsync library
//!
//! Keeps a local JSON list of songs in sync with a YouTube playlist. The
//! library contains the OAuth loopback login, a thin YouTube Data API client,
//! the local song list store and the interactive sync session.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `cli` - Interactive sync session and console prompts
//! - `config` - Configuration management and environment variables
//! - `management` - Local song list persistence
//! - `server` - Local HTTP server for OAuth callbacks
//! - `youtube` - YouTube Data API client and playlist operations
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE helpers and the title split heuristic
//!
//! # Example
//!
//! ```
//! use songsync::{config, youtube};
//!
//! #[tokio::main]
//! async fn main() -> songsync::Res<()> {
//!     config::load_env().await?;
//!     let token = youtube::auth::authenticate().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;
pub mod youtube;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object so HTTP, IO and serialization
/// errors can all be propagated with `?`. The `Send + Sync` bounds keep it
/// usable across the async runtime.
///
/// # Example
///
/// ```
/// use songsync::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Starting authentication process...");
/// info!("Found {} songs", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// success!("Added {} songs", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing, so it is
/// only meant for fatal errors at the top of the program.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the user should notice, like an invalid menu
/// choice or a song without a search hit.
///
/// # Example
///
/// ```
/// warning!("Invalid choice. Please enter either 1 or 2.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
