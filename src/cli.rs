use clap::{Parser, Subcommand};
use log::info;
use rtunes::cache::{ConfigBuilder, ResultCache};
use rtunes::clients::entities::Song;
use rtunes::clients::errors::Result;
use rtunes::player::PlaybackSelector;

#[derive(Parser)]
#[command(name = "rtunes")]
#[command(version, about = "Search, cache and play songs from a remote music API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch trending songs and replace the cached list
    Trending {},
    /// Search songs and merge the results into the cached list
    Search { query: String },
    /// Print the cached list
    List {},
    /// Remove one song from the cached list by stream address
    Remove { song_url: String },
    /// Clear the cached list and restore trending songs
    Clear {},
    /// Select a stream address for playback
    Play { song_url: String },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigBuilder::new().build()?;
    let mut cache = ResultCache::from_config(config);

    match &cli.command {
        Commands::Trending {} => {
            cache.fetch_trending().await?;
            print_songs(cache.songs());
        }
        Commands::Search { query } => {
            cache.initialize().await?;
            cache.search(query).await?;
            print_songs(cache.songs());
        }
        Commands::List {} => {
            cache.initialize().await?;
            print_songs(cache.songs());
        }
        Commands::Remove { song_url } => {
            cache.initialize().await?;
            cache.remove_song(song_url).await?;
            print_songs(cache.songs());
        }
        Commands::Clear {} => {
            cache.clear().await?;
            print_songs(cache.songs());
        }
        Commands::Play { song_url } => {
            let mut selector = PlaybackSelector::new();
            selector.select(song_url.as_str());
            if let Some(url) = selector.current() {
                info!("Selected {url} for playback");
                println!("Playing {url}");
            }
        }
    }
    Ok(())
}

fn print_songs(songs: &[Song]) {
    if songs.is_empty() {
        println!("No songs found");
        return;
    }
    for song in songs {
        println!("{} - {}  [{}]", song.artist_name, song.song_title, song.song_url);
    }
}
