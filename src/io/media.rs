// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading (images and videos).
//!
//! This module reads operator-picked files into embeddable `data:` URIs,
//! enforcing size limits before anything is encoded, and turns image
//! references (remote URLs or `data:` URIs) into RGBA pixels for display.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("{name} is too large ({size} bytes, limit {limit} bytes)")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a data URI")]
    NotDataUri,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("download failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, MediaError>;

/// A file picked by the operator, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPayload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl MediaPayload {
    /// Encode as `data:<mime>;base64,<payload>`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Decoded image ready for texture upload.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Read a file, refusing anything over `limit` bytes before reading it.
pub fn read_media_file(path: &Path, limit: u64) -> Result<MediaPayload> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let size = std::fs::metadata(path)?.len();
    if size > limit {
        return Err(MediaError::TooLarge { name, size, limit });
    }

    let bytes = std::fs::read(path)?;
    Ok(MediaPayload {
        mime: mime_for(path).to_string(),
        name,
        bytes,
    })
}

/// Guess a MIME type from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("ogv") | Some("ogg") => "video/ogg",
        _ => "application/octet-stream",
    }
}

/// Split a base64 `data:` URI into its MIME type and decoded bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:").ok_or(MediaError::NotDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(MediaError::NotDataUri)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(MediaError::NotDataUri)?;
    let bytes = STANDARD.decode(payload.trim())?;
    Ok((mime.to_string(), bytes))
}

pub fn is_data_uri(reference: &str) -> bool {
    reference.starts_with("data:")
}

/// Decoded size of a `data:` URI payload, without decoding it.
pub fn data_uri_size(uri: &str) -> Option<usize> {
    let (_, payload) = uri.split_once(',')?;
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    Some(((payload.len() / 4) * 3).saturating_sub(padding.min(2)))
}

/// Decode image bytes into RGBA pixels.
pub fn load_image_bytes(bytes: &[u8]) -> Result<LoadedImage> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    Ok(LoadedImage {
        width: img.width(),
        height: img.height(),
        pixels: img.into_raw(),
    })
}

/// Load an image from a `data:` URI, an http(s) URL or a local path.
///
/// Blocks on network access; call from a worker thread.
pub fn load_image(reference: &str) -> Result<LoadedImage> {
    let bytes = if is_data_uri(reference) {
        decode_data_uri(reference)?.1
    } else if reference.starts_with("http://") || reference.starts_with("https://") {
        let response = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?
            .get(reference)
            .send()?
            .error_for_status()?;
        response.bytes()?.to_vec()
    } else {
        std::fs::read(PathBuf::from(reference))?
    };
    load_image_bytes(&bytes)
}
