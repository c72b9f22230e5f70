use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// The only content coding this server produces.
pub const GZIP: &str = "gzip";

/// Returns `true` if the given `Accept-Encoding` header value lists `gzip`.
///
/// The value is read as a comma-separated list; each entry is trimmed and compared exactly, so
/// `gzip;q=0.5` does not count as a match.
pub fn accepts_gzip(accept_encoding: Option<&str>) -> bool {
    accept_encoding
        .map(|value| value.split(',').any(|token| token.trim() == GZIP))
        .unwrap_or(false)
}

/// Compresses `data` into a complete gzip member.
pub fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
