//! core/tags/duration.rs
//! Track length via a symphonia container probe.
//!
//! rodio's decoder reports `total_duration` for some formats and not
//! others; probing the container directly gives the queue a duration
//! it can show before a track has ever been played.

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

pub fn probe_duration_ms(path: &Path) -> Option<u64> {
    let file = File::open(path).ok()?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .ok()?;

    let track = probed.format.default_track()?;
    let time_base = track.codec_params.time_base?;
    let n_frames = track.codec_params.n_frames?;

    let time = time_base.calc_time(n_frames);
    Some(time.seconds * 1000 + (time.frac * 1000.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_file_is_none() {
        assert_eq!(probe_duration_ms(Path::new("/nope/missing.mp3")), None);

        let tmp = tempfile::tempdir().unwrap();
        let bogus = tmp.path().join("bogus.mp3");
        std::fs::write(&bogus, b"this is not audio").unwrap();
        assert_eq!(probe_duration_ms(&bogus), None);
    }
}
