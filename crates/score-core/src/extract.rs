// score-core/src/extract.rs
//! Text extraction

use std::fs;
use std::io;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Read a text file, detecting its encoding when it is not UTF-8.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes, path))
}

fn decode_text(bytes: &[u8], path: &Path) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let detected_encoding: &'static Encoding = detector.guess(None, true);

    tracing::debug!("detected encoding {} for {:?}", detected_encoding.name(), path);

    let (decoded, encoding_used, had_errors) = detected_encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            "{:?} decoded as {} with errors, matches may be missed",
            path,
            encoding_used.name()
        );
    }

    decoded.into_owned()
}
