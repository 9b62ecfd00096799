use crate::error::LtsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Target social platform.
///
/// Declaration order is the order platforms appear in a [`GenerationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    Twitter,
    Facebook,
    Linkedin,
    Pinterest,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Twitter,
        Platform::Facebook,
        Platform::Linkedin,
        Platform::Pinterest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Linkedin => "linkedin",
            Self::Pinterest => "pinterest",
        }
    }

    /// Image-first platforms get alt text.
    pub fn is_image_first(&self) -> bool {
        matches!(self, Self::Instagram | Self::Pinterest)
    }

    /// Hard ceiling on content length, in characters.
    pub fn content_ceiling(&self) -> usize {
        match self {
            Self::Twitter => 280,
            Self::Pinterest => 500,
            Self::Tiktok => 2200,
            Self::Instagram => 2200,
            Self::Linkedin => 3000,
            Self::Facebook => 5000,
        }
    }

    /// Maximum number of hashtags kept after deduplication.
    pub fn hashtag_cap(&self) -> usize {
        match self {
            Self::Twitter => 3,
            Self::Linkedin => 5,
            Self::Facebook => 5,
            Self::Tiktok => 6,
            Self::Pinterest => 10,
            Self::Instagram => 20,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = LtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, "platforms", &Self::ALL, Self::as_str)
    }
}

/// Voice of the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Elegant,
    Playful,
    Adventurous,
    Romantic,
    Minimal,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Elegant,
        Tone::Playful,
        Tone::Adventurous,
        Tone::Romantic,
        Tone::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elegant => "elegant",
            Self::Playful => "playful",
            Self::Adventurous => "adventurous",
            Self::Romantic => "romantic",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = LtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, "tone", &Self::ALL, Self::as_str)
    }
}

/// Who the copy is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Affluent,
    Honeymooners,
    Family,
    Solo,
    Business,
}

impl Audience {
    pub const ALL: [Audience; 5] = [
        Audience::Affluent,
        Audience::Honeymooners,
        Audience::Family,
        Audience::Solo,
        Audience::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Affluent => "affluent",
            Self::Honeymooners => "honeymooners",
            Self::Family => "family",
            Self::Solo => "solo",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = LtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, "audience", &Self::ALL, Self::as_str)
    }
}

/// Output length. Maps to a fragment count, not a character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// short = hook, medium = hook + body, long = hook + body + closing.
    pub fn fragment_count(&self) -> usize {
        match self {
            Self::Short => 1,
            Self::Medium => 2,
            Self::Long => 3,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Length {
    type Err = LtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, "length", &Self::ALL, Self::as_str)
    }
}

fn parse_variant<T: Copy>(
    s: &str,
    field: &'static str,
    all: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, LtsError> {
    let wanted = s.trim();
    all.iter()
        .find(|v| name(v) == wanted)
        .copied()
        .ok_or_else(|| {
            let allowed: Vec<&str> = all.iter().map(name).collect();
            LtsError::validation(
                field,
                format!("unrecognized value {:?}, expected one of: {}", s, allowed.join(", ")),
            )
        })
}

/// Ready-to-post copy for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

/// Request-wide output shared by every platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universal {
    pub keywords: Vec<String>,
}

/// Full generation bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub by_platform: BTreeMap<Platform, PlatformOutput>,
    pub universal: Universal,
}

impl GenerationResult {
    pub fn get(&self, platform: Platform) -> Option<&PlatformOutput> {
        self.by_platform.get(&platform)
    }

    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.by_platform.keys().copied()
    }
}
