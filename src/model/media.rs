//! Media attachments: photos, animated GIFs and videos.
//!
//! Every attachment shares one set of fields ([`Medium`]); what differs between
//! the three kinds lives in the [`MediumKind`] tag.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::IntRange;

/// How a rendition was scaled to its breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resize {
    Fit,
    Thumb,
    Crop,
}

impl Resize {
    /// Looks up a resize policy by name, ignoring ASCII case.
    ///
    /// ```rust
    /// use tweetpack::model::Resize;
    ///
    /// assert_eq!(Resize::from_name("fit"), Some(Resize::Fit));
    /// assert_eq!(Resize::from_name("CROP"), Some(Resize::Crop));
    /// assert_eq!(Resize::from_name("stretch"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "FIT" => Some(Resize::Fit),
            "THUMB" => Some(Resize::Thumb),
            "CROP" => Some(Resize::Crop),
            _ => None,
        }
    }
}

impl fmt::Display for Resize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resize::Fit => write!(f, "fit"),
            Resize::Thumb => write!(f, "thumb"),
            Resize::Crop => write!(f, "crop"),
        }
    }
}

/// One rendering of a medium at a named breakpoint ("thumb", "small", "large", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u64,
    pub height: u64,
    pub resize: Resize,
}

/// One encoded rendition of a GIF or video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub url: String,
    /// Absent for HLS playlists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u64>,
    pub content_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRatio {
    pub width: u64,
    pub height: u64,
}

/// The kind-specific part of a [`Medium`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediumKind {
    Photo,
    AnimatedGif {
        variants: Vec<Variant>,
        aspect_ratio: AspectRatio,
    },
    Video {
        variants: Vec<Variant>,
        aspect_ratio: AspectRatio,
        duration_millis: u64,
        monetizable: bool,
    },
}

impl MediumKind {
    /// The export's `type` discriminant for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            MediumKind::Photo => "photo",
            MediumKind::AnimatedGif { .. } => "animated_gif",
            MediumKind::Video { .. } => "video",
        }
    }
}

/// A media attachment referenced by a tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Medium {
    pub display_url: String,
    pub expanded_url: String,
    pub id: u64,
    pub indices: IntRange,
    pub media_url_https: String,
    /// Breakpoint name to rendition, ordered by name.
    pub sizes: BTreeMap<String, Size>,
    /// Set when the medium was attached to another tweet first (retweets, reuse).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_status_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_user_id: Option<u64>,
    pub url: String,
    #[serde(flatten)]
    pub kind: MediumKind,
}

impl Medium {
    pub fn is_photo(&self) -> bool {
        matches!(self.kind, MediumKind::Photo)
    }

    pub fn is_animated_gif(&self) -> bool {
        matches!(self.kind, MediumKind::AnimatedGif { .. })
    }

    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediumKind::Video { .. })
    }

    /// Encoded renditions; empty for photos.
    pub fn variants(&self) -> &[Variant] {
        match &self.kind {
            MediumKind::Photo => &[],
            MediumKind::AnimatedGif { variants, .. } | MediumKind::Video { variants, .. } => {
                variants
            }
        }
    }

    /// The rendition with the highest bitrate, if any carries one.
    pub fn best_variant(&self) -> Option<&Variant> {
        self.variants()
            .iter()
            .filter(|v| v.bitrate.is_some())
            .max_by_key(|v| v.bitrate)
    }

    /// The `http://` form of [`media_url_https`](Self::media_url_https).
    pub fn media_url(&self) -> String {
        match self.media_url_https.strip_prefix("https://") {
            Some(rest) => format!("http://{rest}"),
            None => self.media_url_https.clone(),
        }
    }
}
