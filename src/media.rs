//! Image reading, content sniffing, and base64 encoding.
//!
//! The content type is sniffed from the file bytes, never from the extension.
//! Only JPEG and PNG are accepted — the pins API rejects everything else.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use std::path::Path;

use crate::error::{Error, Result};

/// MIME types the pins API accepts for base64 media.
pub const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// An image ready for the wire: base64 payload plus its sniffed MIME type.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub data: String,
    pub content_type: &'static str,
}

/// Read an image file, sniff its format from the byte content, and
/// base64-encode it. Rejects anything that is not JPEG or PNG.
pub fn encode_image(path: &Path) -> Result<EncodedImage> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = image::guess_format(&bytes).map_err(|_| Error::Validation {
        path: path.to_path_buf(),
        detected: "unknown".to_string(),
    })?;

    let content_type = match format {
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Png => "image/png",
        other => {
            return Err(Error::Validation {
                path: path.to_path_buf(),
                detected: other.to_mime_type().to_string(),
            });
        }
    };

    Ok(EncodedImage {
        data: STANDARD.encode(&bytes),
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const GIF_MAGIC: &[u8] = b"GIF89a\x01\x00\x01\x00";

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn accepts_jpeg_by_content() {
        let dir = TempDir::new().unwrap();
        // Wrong extension on purpose: sniffing must win.
        let path = write_file(&dir, "photo.png", JPEG_MAGIC);

        let encoded = encode_image(&path).unwrap();
        assert_eq!(encoded.content_type, "image/jpeg");
        assert_eq!(encoded.data, STANDARD.encode(JPEG_MAGIC));
    }

    #[test]
    fn accepts_png_by_content() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "image.jpg", PNG_MAGIC);

        let encoded = encode_image(&path).unwrap();
        assert_eq!(encoded.content_type, "image/png");
    }

    #[test]
    fn rejects_gif() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "anim.gif", GIF_MAGIC);

        match encode_image(&path) {
            Err(Error::Validation { detected, .. }) => assert_eq!(detected, "image/gif"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unrecognized_content() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.jpg", b"just some text");

        match encode_image(&path) {
            Err(Error::Validation { detected, .. }) => assert_eq!(detected, "unknown"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepted_types_are_exactly_jpeg_and_png() {
        let dir = TempDir::new().unwrap();
        for (name, bytes) in [("a.bin", JPEG_MAGIC), ("b.bin", PNG_MAGIC)] {
            let path = write_file(&dir, name, bytes);
            let encoded = encode_image(&path).unwrap();
            assert!(ACCEPTED_CONTENT_TYPES.contains(&encoded.content_type));
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.jpg");

        assert!(matches!(encode_image(&path), Err(Error::Io { .. })));
    }
}
