use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info, spotify,
    types::{
        AlbumTableRow, ArtistTableRow, EpisodeTableRow, Page, PlaylistTableRow, SearchResponse,
        ShowTableRow, Track, TrackTableRow,
    },
    utils::{self, SearchKinds},
};

/// Searches the catalog and prints one table per requested kind.
///
/// Kinds that were requested but came back empty still get a heading, so
/// the user sees the search ran rather than silently dropped a kind.
pub async fn search(
    query: String,
    kinds: SearchKinds,
    market: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
) {
    let token = super::access_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Searching for '{}'...", query));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let response = match spotify::search::search(
        &token,
        &query,
        &kinds,
        market.as_deref(),
        limit,
        offset,
    )
    .await
    {
        Ok(response) => {
            pb.finish_and_clear();
            response
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Search failed: {}", e);
        }
    };

    print_results(&response);
}

fn print_results(response: &SearchResponse) {
    let mut printed = false;

    if let Some(tracks) = &response.tracks {
        print_page("Tracks", tracks, |t: &Track| TrackTableRow {
            name: t.name.clone(),
            artists: t
                .artists
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<String>>()
                .join(", "),
            album: t.album.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
            duration: utils::format_duration_ms(t.duration_ms),
        });
        printed = true;
    }

    if let Some(albums) = &response.albums {
        print_page("Albums", albums, |a| AlbumTableRow {
            name: a.name.clone(),
            artists: a
                .artists
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<String>>()
                .join(", "),
            released: a.release_date.clone().unwrap_or_default(),
        });
        printed = true;
    }

    if let Some(artists) = &response.artists {
        print_page("Artists", artists, |a| ArtistTableRow {
            name: a.name.clone(),
            genres: a.genres.join(", "),
        });
        printed = true;
    }

    if let Some(playlists) = &response.playlists {
        print_page("Playlists", playlists, |p| PlaylistTableRow {
            name: p.name.clone(),
            public: render_flag(p.public),
            collaborative: if p.collaborative { "yes" } else { "no" }.to_string(),
        });
        printed = true;
    }

    if let Some(shows) = &response.shows {
        print_page("Shows", shows, |s| ShowTableRow {
            name: s.name.clone(),
            publisher: s.publisher.clone().unwrap_or_default(),
        });
        printed = true;
    }

    if let Some(episodes) = &response.episodes {
        print_page("Episodes", episodes, |e| EpisodeTableRow {
            name: e.name.clone(),
            duration: utils::format_duration_ms(e.duration_ms),
        });
        printed = true;
    }

    if !printed {
        info!("The search response contained none of the requested kinds.");
    }
}

fn print_page<T, R, F>(heading: &str, page: &Page<T>, to_row: F)
where
    R: tabled::Tabled,
    F: Fn(&T) -> R,
{
    if page.items.is_empty() {
        println!("{heading}: no matches\n", heading = heading);
        return;
    }

    let rows: Vec<R> = page.items.iter().map(to_row).collect();
    println!(
        "{heading} ({shown} of {total})\n{table}\n",
        heading = heading,
        shown = page.items.len(),
        total = page.total,
        table = Table::new(rows)
    );
}

fn render_flag(flag: Option<bool>) -> String {
    match flag {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => String::new(),
    }
}
