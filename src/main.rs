use std::sync::Arc;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotctl::{cli, config, error, types::PkceToken, types::RepeatState, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// List available playback devices
    Devices,

    /// Start playback of a context or explicit tracks
    Play(PlayOptions),

    /// Pause playback
    Pause(DeviceOption),

    /// Resume playback without changing the context
    Resume(DeviceOption),

    /// Seek within the currently playing item
    Seek(SeekOptions),

    /// Skip to the next item
    Next,

    /// Skip back to the previous item
    Previous,

    /// Set the playback volume
    Volume(VolumeOptions),

    /// Set the repeat mode
    Repeat(RepeatOptions),

    /// Toggle shuffle
    Shuffle(ShuffleOptions),

    /// Transfer playback to another device
    Transfer(TransferOptions),

    /// Append a track or episode to the play queue
    Queue(QueueOptions),

    /// Show the full playback state
    Status,

    /// Show the currently playing item
    Now,

    /// List recently played tracks
    Recent(RecentOptions),

    /// Search the Spotify catalog
    Search(SearchOptions),

    /// Manage playlists
    Playlist(PlaylistOptions),

    /// Show the authenticated user's profile
    Me,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Context to play: album, artist, playlist or show URI (or bare id)
    pub context: Option<String>,

    /// Play this track or episode instead of a context; can be repeated
    #[clap(
        long = "track",
        action = ArgAction::Append,
        num_args = 1,
        conflicts_with = "context"
    )]
    pub tracks: Vec<String>,

    /// Target device id
    #[clap(long)]
    pub device: Option<String>,

    /// Zero-based position within the context to start at
    #[clap(long, conflicts_with = "offset_uri")]
    pub offset: Option<u32>,

    /// URI of the item within the context to start at
    #[clap(long = "offset-uri")]
    pub offset_uri: Option<String>,

    /// Position in milliseconds within the first item
    #[clap(long = "position-ms")]
    pub position_ms: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeviceOption {
    /// Target device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SeekOptions {
    /// Position in milliseconds
    pub position_ms: u64,

    /// Target device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct VolumeOptions {
    /// Volume in percent (0-100)
    pub percent: u8,

    /// Target device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RepeatOptions {
    /// Repeat mode: track, context, or off
    pub state: RepeatState,

    /// Target device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShuffleOptions {
    /// Shuffle state: on or off
    #[clap(value_parser = clap::builder::BoolishValueParser::new())]
    pub state: bool,

    /// Target device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TransferOptions {
    /// Device id to transfer playback to
    pub device_id: String,

    /// Start playing on the target device immediately
    #[clap(long)]
    pub play: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct QueueOptions {
    /// Track or episode URI (or bare id)
    pub uri: String,

    /// Target device id
    #[clap(long)]
    pub device: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecentOptions {
    /// Number of tracks to show
    #[clap(long, default_value = "20")]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text search query
    pub query: String,

    /// Catalog kind(s) to search: comma-separated list or `all`
    #[clap(
        long = "type",
        default_value = "track",
        value_parser = utils::parse_search_kinds
    )]
    pub kinds: utils::SearchKinds,

    /// ISO 3166-1 market filter
    #[clap(long)]
    pub market: Option<String>,

    /// Page size per kind (1-50)
    #[clap(long)]
    pub limit: Option<u32>,

    /// Page offset per kind
    #[clap(long)]
    pub offset: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    #[command(subcommand)]
    pub command: PlaylistSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistSubcommand {
    /// List the user's playlists
    List(PlaylistListOpts),

    /// Show a playlist with its tracks
    Show(PlaylistShowOpts),

    /// Create a new playlist
    Create(PlaylistCreateOpts),

    /// Add tracks to a playlist
    Add(PlaylistAddOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistListOpts {
    /// Page size (1-50)
    #[clap(long)]
    pub limit: Option<u32>,

    /// Page offset
    #[clap(long)]
    pub offset: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistShowOpts {
    /// Playlist URI (or bare id)
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistCreateOpts {
    /// Playlist name
    pub name: String,

    /// Playlist description
    #[clap(long)]
    pub description: Option<String>,

    /// Make the playlist public
    #[clap(long)]
    pub public: bool,

    /// Make the playlist collaborative
    #[clap(long)]
    pub collaborative: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistAddOpts {
    /// Playlist URI (or bare id)
    pub playlist: String,

    /// Track or episode URIs to add
    #[clap(required = true)]
    pub tracks: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Devices => cli::devices().await,
        Command::Play(opt) => {
            cli::play(
                opt.context,
                opt.tracks,
                opt.device,
                opt.offset,
                opt.offset_uri,
                opt.position_ms,
            )
            .await
        }
        Command::Pause(opt) => cli::pause(opt.device).await,
        Command::Resume(opt) => cli::resume(opt.device).await,
        Command::Seek(opt) => cli::seek(opt.position_ms, opt.device).await,
        Command::Next => cli::next().await,
        Command::Previous => cli::previous().await,
        Command::Volume(opt) => cli::volume(opt.percent, opt.device).await,
        Command::Repeat(opt) => cli::repeat(opt.state, opt.device).await,
        Command::Shuffle(opt) => cli::shuffle(opt.state, opt.device).await,
        Command::Transfer(opt) => cli::transfer(opt.device_id, opt.play).await,
        Command::Queue(opt) => cli::queue(opt.uri, opt.device).await,
        Command::Status => cli::status().await,
        Command::Now => cli::now().await,
        Command::Recent(opt) => cli::recent(opt.limit).await,
        Command::Search(opt) => {
            cli::search(opt.query, opt.kinds, opt.market, opt.limit, opt.offset).await
        }
        Command::Playlist(opt) => match opt.command {
            PlaylistSubcommand::List(o) => cli::list_playlists(o.limit, o.offset).await,
            PlaylistSubcommand::Show(o) => cli::show_playlist(o.playlist).await,
            PlaylistSubcommand::Create(o) => {
                cli::create_playlist(o.name, o.description, o.public, o.collaborative).await
            }
            PlaylistSubcommand::Add(o) => cli::add_playlist_tracks(o.playlist, o.tracks).await,
        },
        Command::Me => cli::me().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
