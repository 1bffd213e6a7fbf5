//! Presentation formatting: widget state into a paintable display model.

use tracing::debug;

use crate::title::{format_title, TitleSpan};
use crate::track::WidgetState;

/// Snapshots older than this are not trusted for display.  Twice the
/// nominal 5 s poll cadence: if the producer stalls or the player quits
/// uncleanly, cached data must not linger on screen.
pub const STALE_AFTER_SECS: i64 = 10;

/// What the host should paint this cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// Render nothing at all.
    Hidden,
    Visible(NowPlaying),
}

/// Fields for the visible widget: artwork layer, artist/album lines, and
/// the segmented title.  `paused` maps to the renderer's dimmed state.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub artist: String,
    pub album: String,
    pub title: Vec<TitleSpan>,
    pub paused: bool,
    pub artwork: Option<String>,
}

/// Decide what to show for the current state at `now_epoch` seconds.
///
/// `now_epoch` is injected rather than read from the wall clock so callers
/// (and tests) control time.  Negative ages from clock skew count as fresh;
/// only the upper bound is checked.
pub fn present(state: &WidgetState, now_epoch: i64) -> Display {
    let Some(track) = state.track.as_ref() else {
        return Display::Hidden;
    };

    if !track.is_running() {
        return Display::Hidden;
    }

    // Producers that don't stamp snapshots skip the freshness check.
    if let Some(last_updated) = track.last_updated {
        let age = now_epoch - last_updated;
        if age > STALE_AFTER_SECS {
            debug!("snapshot is stale ({age}s old), hiding widget");
            return Display::Hidden;
        }
    }

    Display::Visible(NowPlaying {
        artist: track.artist.clone().unwrap_or_default(),
        album: track.album.clone().unwrap_or_default(),
        title: format_title(&track.title),
        paused: track.is_paused(),
        artwork: track.artwork().map(str::to_owned),
    })
}
