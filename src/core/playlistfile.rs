//! core/playlistfile.rs
//! Playlist persistence in two formats:
//! - JSON: `{ "name": ..., "files": [...] }`
//! - M3U:  `#EXTM3U` header, one path per line
//!
//! The format is chosen by file extension. Loading only parses; the
//! queue is what filters out entries that no longer exist on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    Json,
    M3u,
}

pub fn format_for_path(path: &Path) -> Option<PlaylistFormat> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("json") {
        Some(PlaylistFormat::Json)
    } else if ext.eq_ignore_ascii_case("m3u") || ext.eq_ignore_ascii_case("m3u8") {
        Some(PlaylistFormat::M3u)
    } else {
        None
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PlaylistFile {
    name: String,
    files: Vec<PathBuf>,
}

pub fn save(path: &Path, files: &[PathBuf]) -> Result<(), String> {
    let format = format_for_path(path)
        .ok_or_else(|| format!("Unsupported playlist extension: {}", path.display()))?;

    let body = match format {
        PlaylistFormat::Json => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("playlist")
                .to_string();

            let pl = PlaylistFile {
                name,
                files: files.to_vec(),
            };
            serde_json::to_string_pretty(&pl).map_err(|e| e.to_string())?
        }
        PlaylistFormat::M3u => {
            let mut lines = vec!["#EXTM3U".to_string()];
            lines.extend(files.iter().map(|p| p.display().to_string()));
            lines.join("\n") + "\n"
        }
    };

    std::fs::write(path, body).map_err(|e| format!("{}: {e}", path.display()))
}

/// Parse a playlist file into paths. Relative entries are resolved
/// against the playlist's own directory (the convention M3U players
/// follow, applied to both formats for consistency).
pub fn load(path: &Path) -> Result<Vec<PathBuf>, String> {
    let format = format_for_path(path)
        .ok_or_else(|| format!("Unsupported playlist extension: {}", path.display()))?;

    let content =
        std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let entries = match format {
        PlaylistFormat::Json => {
            let pl: PlaylistFile = serde_json::from_str(&content)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            pl.files
        }
        PlaylistFormat::M3u => content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(PathBuf::from)
            .collect(),
    };

    Ok(entries
        .into_iter()
        .map(|p| {
            if p.is_absolute() {
                p
            } else {
                base_dir.join(p)
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection() {
        assert_eq!(
            format_for_path(Path::new("a.json")),
            Some(PlaylistFormat::Json)
        );
        assert_eq!(
            format_for_path(Path::new("a.M3U")),
            Some(PlaylistFormat::M3u)
        );
        assert_eq!(
            format_for_path(Path::new("a.m3u8")),
            Some(PlaylistFormat::M3u)
        );
        assert_eq!(format_for_path(Path::new("a.txt")), None);
        assert_eq!(format_for_path(Path::new("noext")), None);
    }

    #[test]
    fn m3u_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let pl = tmp.path().join("mix.m3u");
        let files = vec![PathBuf::from("/music/a.mp3"), PathBuf::from("/music/b.ogg")];

        save(&pl, &files).unwrap();

        let body = std::fs::read_to_string(&pl).unwrap();
        assert!(body.starts_with("#EXTM3U\n"));

        assert_eq!(load(&pl).unwrap(), files);
    }

    #[test]
    fn m3u_skips_comments_and_blanks_and_resolves_relative() {
        let tmp = tempfile::tempdir().unwrap();
        let pl = tmp.path().join("mix.m3u");
        std::fs::write(
            &pl,
            "#EXTM3U\n\n#EXTINF:123,Some Song\nsub/tune.mp3\n/abs/other.mp3\n",
        )
        .unwrap();

        let loaded = load(&pl).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], tmp.path().join("sub/tune.mp3"));
        assert_eq!(loaded[1], PathBuf::from("/abs/other.mp3"));
    }

    #[test]
    fn json_roundtrip_keeps_files_and_names_after_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let pl = tmp.path().join("favorites.json");
        let files = vec![PathBuf::from("/music/a.mp3")];

        save(&pl, &files).unwrap();

        let body = std::fs::read_to_string(&pl).unwrap();
        assert!(body.contains("\"favorites\""));

        assert_eq!(load(&pl).unwrap(), files);
    }

    #[test]
    fn unsupported_extension_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let pl = tmp.path().join("mix.txt");
        assert!(save(&pl, &[]).is_err());
        assert!(load(&pl).is_err());
    }

    #[test]
    fn malformed_json_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let pl = tmp.path().join("broken.json");
        std::fs::write(&pl, "[1, 2").unwrap();
        assert!(load(&pl).is_err());
    }
}
