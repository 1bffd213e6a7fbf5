use serde::{Deserialize, Serialize};

/// One decoded player snapshot.
///
/// The wire format is a flat JSON object produced by an external metadata
/// command once per poll.  Field names are an external contract: every field
/// except `title` is optional, unknown fields are ignored, and older
/// producers that emit `track_name` instead of `title` still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    #[serde(default, alias = "track_name")]
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    /// Absent means playing.
    #[serde(default)]
    pub is_playing: Option<bool>,
    /// Absent means running.
    #[serde(default)]
    pub player_running: Option<bool>,
    /// Local artwork file, preferred over the remote URL while a fresh
    /// download is still in flight.
    #[serde(default)]
    pub artwork_path: Option<String>,
    #[serde(default)]
    pub artwork_url: Option<String>,
    /// Epoch seconds at which the producer last refreshed this snapshot.
    #[serde(default)]
    pub last_updated: Option<i64>,
}

impl Track {
    /// False only when the producer explicitly reported a dead player.
    pub fn is_running(&self) -> bool {
        self.player_running.unwrap_or(true)
    }

    /// True only when the producer explicitly reported a pause.
    pub fn is_paused(&self) -> bool {
        self.is_playing == Some(false)
    }

    /// Artwork reference to paint: local path first, remote URL as fallback.
    pub fn artwork(&self) -> Option<&str> {
        self.artwork_path
            .as_deref()
            .or(self.artwork_url.as_deref())
    }
}

/// The single value the host keeps alive between polls.
///
/// The core never holds onto this itself: `decode` takes the previous state
/// by value and returns the next one, and `present` only borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WidgetState {
    pub track: Option<Track>,
}

impl WidgetState {
    pub fn with_track(track: Track) -> Self {
        Self { track: Some(track) }
    }
}
