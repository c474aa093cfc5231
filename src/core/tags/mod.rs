//! core/tags/mod.rs
//! Metadata IO: ID3 tag reading, embedded artwork, duration probing.
//! Everything here is best-effort; a file with no readable tags still
//! plays, it just shows up as its filename.

mod art;
mod duration;
mod read;

pub use art::read_embedded_art;
pub use duration::probe_duration_ms;
pub use read::{read_track_row, read_track_rows};
