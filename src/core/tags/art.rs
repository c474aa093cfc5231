//! core/tags/art.rs

use std::path::Path;

use id3::Tag;
use id3::frame::Content;

/// Bytes of the first embedded picture (APIC/PIC), if any.
/// The GUI hands these straight to an image widget, so the mime type
/// is not needed; the decoder sniffs the format.
pub fn read_embedded_art(path: &Path) -> Option<Vec<u8>> {
    let tag = Tag::read_from_path(path).ok()?;

    for f in tag.frames() {
        if f.id() != "APIC" && f.id() != "PIC" {
            continue;
        }
        if let Content::Picture(p) = f.content() {
            return Some(p.data.clone());
        }
    }

    None
}
