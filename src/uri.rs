//! Spotify URI parsing and normalization.
//!
//! Every identifier that reaches the endpoint layer is a [`SpotifyUri`]:
//! a resource kind plus a validated base62 id. Parsing accepts either the
//! canonical `spotify:<type>:<id>` form or a bare id, and fails locally with
//! [`SpotifyError::InvalidIdentifier`] before any network call is made.
//! `Display` re-serializes the canonical form, so parse and render round-trip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{SpotifyError, SpotifyResult};

/// Length of a Spotify base62 resource id.
const ID_LEN: usize = 22;

/// The resource types a Spotify URI can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Track,
    Album,
    Artist,
    Playlist,
    Show,
    Episode,
}

impl ResourceKind {
    /// Kinds that can serve as a playback context.
    pub const CONTEXT: [ResourceKind; 4] = [
        ResourceKind::Album,
        ResourceKind::Artist,
        ResourceKind::Playlist,
        ResourceKind::Show,
    ];

    /// Kinds that are directly playable items.
    pub const PLAYABLE: [ResourceKind; 2] = [ResourceKind::Track, ResourceKind::Episode];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Track => "track",
            ResourceKind::Album => "album",
            ResourceKind::Artist => "artist",
            ResourceKind::Playlist => "playlist",
            ResourceKind::Show => "show",
            ResourceKind::Episode => "episode",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "track" => Ok(ResourceKind::Track),
            "album" => Ok(ResourceKind::Album),
            "artist" => Ok(ResourceKind::Artist),
            "playlist" => Ok(ResourceKind::Playlist),
            "show" => Ok(ResourceKind::Show),
            "episode" => Ok(ResourceKind::Episode),
            other => Err(format!("unknown resource type '{}'", other)),
        }
    }
}

/// A validated Spotify resource identifier.
///
/// The kind is fixed at construction; the id is the bare base62 part. The
/// canonical string form is `spotify:<type>:<id>` and is what serde and
/// `Display` produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpotifyUri {
    kind: ResourceKind,
    id: String,
}

impl SpotifyUri {
    /// Parses an identifier expected to be of a specific kind.
    ///
    /// Accepts the canonical `spotify:<type>:<id>` form, where `<type>` must
    /// match `kind`, or a bare 22-character base62 id. Anything else fails
    /// with [`SpotifyError::InvalidIdentifier`].
    pub fn parse(input: &str, kind: ResourceKind) -> SpotifyResult<Self> {
        let invalid = || SpotifyError::InvalidIdentifier {
            kind,
            input: input.to_string(),
        };

        if let Some(rest) = input.strip_prefix("spotify:") {
            let mut parts = rest.splitn(2, ':');
            let type_part = parts.next().unwrap_or("");
            let id_part = parts.next().ok_or_else(invalid)?;

            let parsed_kind = ResourceKind::from_str(type_part).map_err(|_| invalid())?;
            if parsed_kind != kind || !is_base62_id(id_part) {
                return Err(invalid());
            }

            return Ok(Self {
                kind,
                id: id_part.to_string(),
            });
        }

        if is_base62_id(input) {
            return Ok(Self {
                kind,
                id: input.to_string(),
            });
        }

        Err(invalid())
    }

    /// Parses an identifier that may be any of the given kinds, in order.
    ///
    /// The first kind that accepts the input wins; canonical inputs resolve
    /// to their embedded type, bare ids to the first candidate. Fails with
    /// [`SpotifyError::InvalidIdentifier`] against the first kind when none
    /// match.
    pub fn parse_any(input: &str, kinds: &[ResourceKind]) -> SpotifyResult<Self> {
        for kind in kinds {
            if let Ok(uri) = Self::parse(input, *kind) {
                return Ok(uri);
            }
        }

        Err(SpotifyError::InvalidIdentifier {
            kind: kinds.first().copied().unwrap_or(ResourceKind::Track),
            input: input.to_string(),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// The bare base62 id, as used in REST paths.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this URI addresses a playback context (album, artist,
    /// playlist, show).
    pub fn is_context(&self) -> bool {
        ResourceKind::CONTEXT.contains(&self.kind)
    }

    /// Whether this URI addresses a playable item (track, episode).
    pub fn is_playable(&self) -> bool {
        ResourceKind::PLAYABLE.contains(&self.kind)
    }
}

impl fmt::Display for SpotifyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spotify:{}:{}", self.kind, self.id)
    }
}

impl TryFrom<String> for SpotifyUri {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let rest = value
            .strip_prefix("spotify:")
            .ok_or_else(|| format!("not a spotify URI: '{}'", value))?;

        let mut parts = rest.splitn(2, ':');
        let kind = parts
            .next()
            .unwrap_or("")
            .parse::<ResourceKind>()
            .map_err(|e| format!("{} in '{}'", e, value))?;
        let id = parts
            .next()
            .filter(|id| is_base62_id(id))
            .ok_or_else(|| format!("malformed spotify URI: '{}'", value))?;

        Ok(Self {
            kind,
            id: id.to_string(),
        })
    }
}

impl From<SpotifyUri> for String {
    fn from(uri: SpotifyUri) -> Self {
        uri.to_string()
    }
}

fn is_base62_id(s: &str) -> bool {
    s.len() == ID_LEN && s.chars().all(|c| c.is_ascii_alphanumeric())
}
