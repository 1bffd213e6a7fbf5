//! Snapshot decoding: folds one poll's raw output into widget state.
//!
//! The host runs the metadata command on its own cadence and calls
//! [`decode`] with whatever came back, then stores the returned state until
//! the next cycle.  Decoding never panics and never surfaces an error: the
//! worst outcome is keeping the previous state for one more cycle.

use tracing::{debug, warn};

use crate::track::{Track, WidgetState};

/// Decode one raw snapshot into the next widget state.
///
/// - Empty output is a legitimate quiet poll: the previous state is returned
///   unchanged.
/// - A valid JSON object fully replaces the previous track, including
///   clearing optional fields the new payload does not carry.
/// - Anything unparseable is logged and the previous state is kept (which is
///   the null-track fallback when there was no previous track).
pub fn decode(raw: &str, previous: WidgetState) -> WidgetState {
    if raw.is_empty() {
        return previous;
    }

    let sanitized = escape_backslashes(raw);
    match serde_json::from_str::<Track>(&sanitized) {
        Ok(track) => {
            debug!("now playing: {}", track.title);
            WidgetState::with_track(track)
        }
        Err(err) => {
            warn!("failed to parse track snapshot: {err}");
            previous
        }
    }
}

/// Double every literal backslash before structural parsing.
///
/// The upstream shell producer embeds unescaped `\` characters (Windows
/// paths, stray escapes in titles) that would otherwise abort the JSON
/// parse.
fn escape_backslashes(raw: &str) -> String {
    raw.replace('\\', "\\\\")
}
