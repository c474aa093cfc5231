//! core/library.rs
//! Filesystem discovery of audio files.

use std::path::{Path, PathBuf};

/// Extensions the player accepts. Decoding is rodio's problem; this
/// list only gates what we let into the queue.
pub const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "wav", "ogg", "m4a", "flac"];

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| AUDIO_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

/// Audio files directly inside `dir` (non-recursive), sorted by path.
/// This is the "Add Folder" operation.
pub fn list_audio_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = std::fs::read_dir(dir).map_err(|e| format!("{}: {e}", dir.display()))?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();
        if path.is_file() && is_audio_file(&path) {
            out.push(path);
        }
    }

    out.sort();
    Ok(out)
}

/// Audio files anywhere under `root` (recursive), sorted by path.
/// This is the "Scan Directory" operation.
pub fn walk_audio_files(root: &Path) -> Result<Vec<PathBuf>, String> {
    let mut out = Vec::new();
    walk_dir(root, &mut out)?;
    out.sort();
    Ok(out)
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = std::fs::read_dir(dir).map_err(|e| format!("{}: {e}", dir.display()))?;

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();

        if path.is_dir() {
            walk_dir(&path, out)?;
        } else if is_audio_file(&path) {
            out.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(is_audio_file(Path::new("a.mp3")));
        assert!(is_audio_file(Path::new("a.MP3")));
        assert!(is_audio_file(Path::new("a.FlAc")));
        assert!(!is_audio_file(Path::new("a.txt")));
        assert!(!is_audio_file(Path::new("no_extension")));
    }

    #[test]
    fn list_is_non_recursive() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("one.mp3"), b"x").unwrap();
        fs::write(tmp.path().join("skip.txt"), b"x").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/two.mp3"), b"x").unwrap();

        let found = list_audio_files(tmp.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("one.mp3"));
    }

    #[test]
    fn walk_is_recursive_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("b")).unwrap();
        fs::write(tmp.path().join("b/deep.ogg"), b"x").unwrap();
        fs::write(tmp.path().join("a.wav"), b"x").unwrap();

        let found = walk_audio_files(tmp.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("a.wav"));
        assert!(found[1].ends_with("deep.ogg"));
    }

    #[test]
    fn missing_dir_is_an_error() {
        assert!(list_audio_files(Path::new("/definitely/not/here")).is_err());
    }
}
