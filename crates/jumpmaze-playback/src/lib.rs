//! Playback and rendering for recorded jumpmaze searches.
//!
//! - [`Playback`]: drives a search forward on a fixed interval, with pause,
//!   single-step and step-back controls.
//! - [`CellMark`] / [`render_text`]: classify and draw the cells of a
//!   recorded [`SearchStep`](jumpmaze_search::SearchStep).

pub mod mark;
pub mod playback;
pub mod render;

pub use mark::CellMark;
pub use playback::{Playback, PlaybackAction, PlaybackConfig};
pub use render::{render_text, status_text};
