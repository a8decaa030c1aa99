use std::{collections::BTreeSet, fmt};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchKind {
    Track,
    Album,
    Artist,
    Playlist,
    Show,
    Episode,
}

impl SearchKind {
    pub const ALL: [SearchKind; 6] = [
        SearchKind::Track,
        SearchKind::Album,
        SearchKind::Artist,
        SearchKind::Playlist,
        SearchKind::Show,
        SearchKind::Episode,
    ];
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchKind::Track => "track",
            SearchKind::Album => "album",
            SearchKind::Artist => "artist",
            SearchKind::Playlist => "playlist",
            SearchKind::Show => "show",
            SearchKind::Episode => "episode",
        };
        write!(f, "{}", s)
    }
}

/// The set of catalog kinds a search request asks for.
///
/// Renders as the comma-joined lowercase list the search endpoint expects in
/// its `type` parameter. The set is ordered, so rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKinds(pub BTreeSet<SearchKind>);

impl SearchKinds {
    pub fn iter(&self) -> impl Iterator<Item = SearchKind> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, kind: SearchKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn single(kind: SearchKind) -> Self {
        let mut set = BTreeSet::new();
        set.insert(kind);
        SearchKinds(set)
    }
}

impl Default for SearchKinds {
    fn default() -> Self {
        Self::single(SearchKind::Track)
    }
}

impl fmt::Display for SearchKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)
    }
}

/// Parses a comma-separated list of search kinds, as given on the CLI.
///
/// Accepts the kind names in any case, with surrounding whitespace, and the
/// keyword `all` for every kind. Duplicates collapse into the set.
pub fn parse_search_kinds(input: &str) -> Result<SearchKinds, String> {
    if input.trim().is_empty() {
        return Err("search kind list cannot be empty".to_string());
    }

    let mut set = BTreeSet::new();
    for segment in input.split(',') {
        let segment = segment.trim().to_lowercase();
        if segment.is_empty() {
            return Err("search kind list contains an empty segment".to_string());
        }

        if segment == "all" {
            set.extend(SearchKind::ALL);
            continue;
        }

        let kind = match segment.as_str() {
            "track" => SearchKind::Track,
            "album" => SearchKind::Album,
            "artist" => SearchKind::Artist,
            "playlist" => SearchKind::Playlist,
            "show" => SearchKind::Show,
            "episode" => SearchKind::Episode,
            other => return Err(format!("invalid value '{}' for search kind", other)),
        };
        set.insert(kind);
    }

    Ok(SearchKinds(set))
}

/// Renders a millisecond duration as `m:ss` for table output.
pub fn format_duration_ms(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
