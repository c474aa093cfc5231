//! Small pure helper functions used by the GUI.
//! - no widgets, no state mutation

use std::path::Path;

use crate::core::types::Track;

/// Filename without extension, used as a fallback title.
/// Ex: 'song.mp3' -> 'song'
pub(crate) fn filename_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown Title")
        .to_string()
}

pub(crate) fn display_title(t: &Track) -> String {
    t.title.clone().unwrap_or_else(|| filename_stem(&t.path))
}

pub(crate) fn display_artist(t: &Track) -> String {
    t.artist.clone().unwrap_or_else(|| "Unknown Artist".to_string())
}

/// Case-insensitive match against title, artist and filename.
/// An empty query matches everything.
pub(crate) fn matches_search(t: &Track, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    display_title(t).to_lowercase().contains(&query)
        || display_artist(t).to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn stem_falls_back_for_title() {
        let t = Track::bare(PathBuf::from("/music/My Song.mp3"));
        assert_eq!(display_title(&t), "My Song");
        assert_eq!(display_artist(&t), "Unknown Artist");
    }

    #[test]
    fn search_matches_title_artist_or_nothing() {
        let mut t = Track::bare(PathBuf::from("/music/track01.mp3"));
        t.title = Some("Blue Train".into());
        t.artist = Some("John Coltrane".into());

        assert!(matches_search(&t, ""));
        assert!(matches_search(&t, "blue"));
        assert!(matches_search(&t, "COLTRANE"));
        assert!(!matches_search(&t, "miles"));
    }
}
