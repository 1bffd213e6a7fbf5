//! Core pipeline for a now-playing desktop widget.
//!
//! The host runtime owns the poll loop and the single state slot; this crate
//! owns everything pure in between:
//!
//! ```text
//!   poll output ──► snapshot::decode ──► WidgetState (host keeps it)
//!                                             │
//!                             redraw ──► present::present ──► Display
//! ```
//!
//! `decode` folds one raw snapshot into the next state (falling back to the
//! previous state on malformed input), and `present` turns held state into
//! either a hidden widget or a paintable `NowPlaying` model with a
//! staleness check and a segmented title.

pub mod config;
pub mod present;
pub mod snapshot;
pub mod title;
pub mod track;

pub use config::Config;
pub use present::{present, Display, NowPlaying, STALE_AFTER_SECS};
pub use snapshot::decode;
pub use title::{format_title, Emphasis, TitleSpan};
pub use track::{Track, WidgetState};
