//! Image file loading
//!
//! Used only to load the default post image at startup; a read failure
//! propagates to the caller, which treats it as fatal.

use crate::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Read an image file and return its contents base64-encoded
/// (standard alphabet).
pub fn encode_image_base64(path: impl AsRef<Path>) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn encodes_file_contents() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"not really a png").expect("write");

        let encoded = encode_image_base64(file.path()).expect("encode");
        assert_eq!(encoded, STANDARD.encode(b"not really a png"));
    }

    #[test]
    fn missing_file_propagates_error() {
        assert!(encode_image_base64("does/not/exist.png").is_err());
    }
}
