// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video reference normalization.
//!
//! Turns whatever the operator pasted into a video field into something the
//! project view can play: a canonical YouTube/Vimeo embed URL, a direct file
//! reference, or an unavailable entry with a reason. Malformed input never
//! produces an error, only an invalid descriptor.

use once_cell::sync::Lazy;
use regex::Regex;

/// Captures the 11-character id from watch, embed, shorts, /v/ and youtu.be links.
static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?|shorts)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("valid YouTube pattern")
});

/// Captures the numeric id from vimeo.com/<id>, vimeo.com/<segments>/<id>
/// and player.vimeo.com/video/<id>.
static VIMEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)vimeo\.com/(?:video/|(?:[^/?#\s]+/)*)([0-9]+)(?:[/?#]|$)")
        .expect("valid Vimeo pattern")
});

/// How a video should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoHost {
    YouTube,
    Vimeo,
    /// A playable file: remote URL or embedded `data:` payload.
    File,
}

/// Playable form of a raw video reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedDescriptor {
    /// Canonical embed URL, or the trimmed input for files and failures.
    pub url: String,
    pub host: VideoHost,
    pub valid: bool,
    /// Set when the host was recognised but no id could be extracted.
    pub error: Option<String>,
}

impl EmbedDescriptor {
    /// True for a direct file player, false for an embedded frame.
    pub fn is_file(&self) -> bool {
        self.host == VideoHost::File
    }

    pub fn is_embed(&self) -> bool {
        !self.is_file()
    }
}

/// Normalize a raw video reference.
///
/// Returns `None` for blank input, which is not a video at all. Embedded
/// `data:` payloads are always files. Otherwise anything mentioning "youtu"
/// is treated as YouTube, then anything mentioning "vimeo" as Vimeo; the
/// rest passes through as a direct file.
pub fn normalize(raw: &str) -> Option<EmbedDescriptor> {
    let clean = raw.trim();
    if clean.is_empty() {
        return None;
    }
    // Base64 payloads can contain the host markers by chance
    if clean.starts_with("data:") {
        return Some(valid(VideoHost::File, clean.to_string()));
    }

    let lower = clean.to_ascii_lowercase();
    let descriptor = if lower.contains("youtu") {
        match capture_id(&YOUTUBE_ID, clean) {
            Some(id) => valid(
                VideoHost::YouTube,
                format!("https://www.youtube.com/embed/{id}?rel=0&autoplay=0"),
            ),
            None => invalid(VideoHost::YouTube, clean, "Invalid YouTube URL format"),
        }
    } else if lower.contains("vimeo") {
        match capture_id(&VIMEO_ID, clean) {
            Some(id) => valid(
                VideoHost::Vimeo,
                format!("https://player.vimeo.com/video/{id}?title=0&byline=0&portrait=0"),
            ),
            None => invalid(VideoHost::Vimeo, clean, "Invalid Vimeo URL format"),
        }
    } else {
        valid(VideoHost::File, clean.to_string())
    };
    Some(descriptor)
}

fn capture_id<'a>(pattern: &Regex, input: &'a str) -> Option<&'a str> {
    pattern
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn valid(host: VideoHost, url: String) -> EmbedDescriptor {
    EmbedDescriptor {
        url,
        host,
        valid: true,
        error: None,
    }
}

fn invalid(host: VideoHost, raw: &str, reason: &str) -> EmbedDescriptor {
    EmbedDescriptor {
        url: raw.to_string(),
        host,
        valid: false,
        error: Some(reason.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YT_EMBED: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&autoplay=0";

    #[test]
    fn test_short_domain_youtube() {
        let d = normalize("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(d.url, YT_EMBED);
        assert!(d.valid);
        assert!(d.is_embed());
        assert_eq!(d.error, None);
    }

    #[test]
    fn test_all_youtube_forms_agree() {
        let forms = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=10",
            "  https://m.youtube.com/watch?v=dQw4w9WgXcQ  ",
        ];
        for form in forms {
            let d = normalize(form).unwrap();
            assert_eq!(d.url, YT_EMBED, "form {form}");
            assert_eq!(d.host, VideoHost::YouTube);
            assert!(d.valid);
        }
    }

    #[test]
    fn test_youtube_without_id_is_invalid() {
        let d = normalize("https://www.youtube.com/channel").unwrap();
        assert!(!d.valid);
        assert_eq!(d.host, VideoHost::YouTube);
        assert_eq!(d.url, "https://www.youtube.com/channel");
        assert_eq!(d.error.as_deref(), Some("Invalid YouTube URL format"));

        // Too short an id
        let d = normalize("https://youtu.be/abc").unwrap();
        assert!(!d.valid);
    }

    #[test]
    fn test_vimeo_forms() {
        let expected = "https://player.vimeo.com/video/1140451752?title=0&byline=0&portrait=0";
        for form in [
            "https://vimeo.com/1140451752?fl=ip&fe=ec",
            "https://vimeo.com/1140451752",
            "https://player.vimeo.com/video/1140451752",
            "https://vimeo.com/channels/staffpicks/1140451752",
            "vimeo.com/1140451752#t=30",
        ] {
            let d = normalize(form).unwrap();
            assert_eq!(d.url, expected, "form {form}");
            assert_eq!(d.host, VideoHost::Vimeo);
            assert!(d.valid);
        }
    }

    #[test]
    fn test_vimeo_without_numeric_id_is_invalid() {
        let d = normalize("https://vimeo.com/about").unwrap();
        assert!(!d.valid);
        assert_eq!(d.error.as_deref(), Some("Invalid Vimeo URL format"));
    }

    #[test]
    fn test_youtube_marker_wins_over_vimeo() {
        let d = normalize("https://youtu.be/dQw4w9WgXcQ?ref=vimeo.com/123").unwrap();
        assert_eq!(d.host, VideoHost::YouTube);
        assert_eq!(d.url, YT_EMBED);

        // Classified as YouTube even though only the Vimeo part would parse
        let d = normalize("https://vimeo.com/123?from=youtube").unwrap();
        assert_eq!(d.host, VideoHost::YouTube);
        assert!(!d.valid);
    }

    #[test]
    fn test_other_links_pass_through_as_files() {
        for raw in [
            "https://cdn.example.com/trailer.mp4",
            "data:video/mp4;base64,AAAAIGZ0eXBpc29t",
            "not even a url",
        ] {
            let d = normalize(raw).unwrap();
            assert!(d.is_file());
            assert!(d.valid);
            assert_eq!(d.url, raw);
        }
    }

    #[test]
    fn test_embedded_payload_is_never_a_host_link() {
        let raw = "data:video/mp4;base64,AAAAyoUtUbeVIMEOaaaa";
        let d = normalize(raw).unwrap();
        assert!(d.is_file());
        assert!(d.valid);
        assert_eq!(d.url, raw);
    }

    #[test]
    fn test_blank_is_not_a_video() {
        assert!(normalize("").is_none());
        assert!(normalize("   \n").is_none());
    }
}
