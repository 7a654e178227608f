use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res, error, info,
    management::SongListManager,
    success,
    types::{PlaylistEntry, SongEntry},
    utils, warning,
    youtube::{self, YouTubeApi, YouTubeClient, playlist},
};

use super::prompt::Prompt;

const MENU: &str = "What would you like to do?
1. Update the local song list from the songs in the playlist.
2. Add new songs to the playlist and update the local song list.
Enter your choice (1 or 2): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Rewrite the local list from the playlist contents.
    Reconcile,
    /// Append songs locally, then push the whole list to the playlist.
    AppendAndPush,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Reconcile),
            "2" => Some(MenuChoice::AppendAndPush),
            _ => None,
        }
    }
}

/// Logs in, then runs one interactive sync session on the console.
pub async fn sync(songs_file: PathBuf, playlist_title: String) {
    let token = match youtube::auth::authenticate().await {
        Ok(token) => token,
        Err(e) => error!("Cannot authenticate with YouTube. Err: {}", e),
    };

    let api = YouTubeClient::new(token);
    let mut prompt = Prompt::stdio();

    if let Err(e) = run(&api, &mut prompt, &songs_file, &playlist_title).await {
        error!("Sync failed. Err: {}", e);
    }
}

/// One sync session against an authenticated API.
///
/// Resolves the playlist, loads the local list, snapshots the playlist into
/// the local file, then runs exactly one of the two menu branches.
pub async fn run<A, R, W>(
    api: &A,
    prompt: &mut Prompt<R, W>,
    songs_file: &Path,
    playlist_title: &str,
) -> Res<()>
where
    A: YouTubeApi,
    R: BufRead,
    W: Write,
{
    let pb = spinner("Looking up playlist...");
    let playlist_id = playlist::find_or_create(api, playlist_title).await;
    pb.finish_and_clear();
    let playlist_id = playlist_id?;

    let mut song_list = SongListManager::load(songs_file).await?;
    info!(
        "Loaded {} songs from {}",
        song_list.count(),
        song_list.path().display()
    );

    let pb = spinner("Fetching playlist entries...");
    let entries = playlist::entries(api, &playlist_id).await;
    pb.finish_and_clear();
    let entries = entries?;

    show_entries(&entries);
    song_list.persist_snapshot(&entries).await?;

    match read_choice(prompt)? {
        MenuChoice::Reconcile => {
            song_list.replace_songs(utils::reconcile(&entries));
            song_list.persist().await?;
            success!(
                "Local song list updated with {} songs from the playlist",
                song_list.count()
            );
        }
        MenuChoice::AppendAndPush => {
            while prompt.confirm("Would you like to add a new song to the list? (Y/N): ")? {
                let song = prompt.ask("Enter the name of the song: ")?;
                let singer = prompt.ask("Enter the name of the singer: ")?;
                song_list.add_song(SongEntry::new(song, singer));
            }
            song_list.persist().await?;

            let added = playlist::add_songs(api, &playlist_id, song_list.get_songs()).await?;
            success!("Added {} new videos to {}", added, playlist_title);
        }
    }

    Ok(())
}

fn read_choice<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Res<MenuChoice> {
    loop {
        let answer = prompt.ask(MENU)?;
        match MenuChoice::parse(&answer) {
            Some(choice) => return Ok(choice),
            None => warning!("Invalid choice. Please enter either 1 or 2."),
        }
    }
}

fn show_entries(entries: &[PlaylistEntry]) {
    if entries.is_empty() {
        info!("The playlist is empty");
        return;
    }

    let table = Table::new(utils::playlist_table_rows(entries));
    println!("{}", table);
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
