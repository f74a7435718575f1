//! Multipart body construction for the upload endpoint.

use reqwest::blocking::multipart::{Form, Part};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{CaptionError, Result};

/// Multipart field name the upload endpoint expects.
pub const UPLOAD_FIELD: &str = "file";

const FALLBACK_MIME: &str = "application/octet-stream";

/// Guess a MIME type from the file extension (case-insensitive).
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg" | "jpe") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("heic") => "image/heic",
        Some("avif") => "image/avif",
        other => {
            tracing::warn!(
                "Unknown image extension {:?} for {}, sending as {FALLBACK_MIME}",
                other,
                path.display()
            );
            FALLBACK_MIME
        }
    }
}

/// Open `path` and wrap it in a single-part form. The file is streamed by
/// the transport rather than read into memory here.
pub(crate) fn build_form(path: &Path) -> Result<Form> {
    let io_err = |source: io::Error| CaptionError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CaptionError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(io_err(e)),
    };
    if !metadata.is_file() {
        return Err(io_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    let file = File::open(path).map_err(io_err)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| UPLOAD_FIELD.to_string());
    let mime = mime_type_for(path);

    let part = Part::reader_with_length(file, metadata.len())
        .file_name(file_name)
        .mime_str(mime)
        .map_err(|e| CaptionError::Upload {
            message: format!("invalid MIME type {mime}"),
            status_code: None,
            source: Some(e),
        })?;

    Ok(Form::new().part(UPLOAD_FIELD, part))
}
