use lts_core::{Audience, Length, Platform, Tone};

/// Composite lookup key into the template table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub platform: Platform,
    pub tone: Tone,
    pub audience: Audience,
    pub length: Length,
}

impl TemplateKey {
    pub fn new(platform: Platform, tone: Tone, audience: Audience, length: Length) -> Self {
        Self { platform, tone, audience, length }
    }

    /// Every combination, 6 x 5 x 5 x 3.
    pub fn all() -> impl Iterator<Item = TemplateKey> {
        Platform::ALL.into_iter().flat_map(|platform| {
            Tone::ALL.into_iter().flat_map(move |tone| {
                Audience::ALL.into_iter().flat_map(move |audience| {
                    Length::ALL
                        .into_iter()
                        .map(move |length| TemplateKey::new(platform, tone, audience, length))
                })
            })
        })
    }
}

/// How a platform wraps the tone family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformStyle {
    /// Caption-length fragments.
    Condensed,
    /// Formal fragments, elegant or minimal only.
    Professional,
    Standard,
}

impl PlatformStyle {
    pub fn of(platform: Platform) -> Self {
        match platform {
            Platform::Twitter | Platform::Tiktok => Self::Condensed,
            Platform::Linkedin => Self::Professional,
            Platform::Instagram | Platform::Facebook | Platform::Pinterest => Self::Standard,
        }
    }

    /// Joins fragments inside the content.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Condensed => " ",
            Self::Professional | Self::Standard => "\n\n",
        }
    }
}

/// Phrase fragments and per-platform extras for one key.
///
/// `fragments` already honours the length policy and has the audience clause
/// baked in; only `{destination}`, `{brand}` and `{link}` remain.
#[derive(Debug, Clone)]
pub struct Template {
    pub key: TemplateKey,
    pub style: PlatformStyle,
    /// Tone after platform and audience adjustments.
    pub effective_tone: Tone,
    pub title: Option<String>,
    pub fragments: Vec<String>,
    pub brand: Option<&'static str>,
    pub link: &'static str,
    pub cta: Option<&'static str>,
    pub alt_phrase: Option<&'static str>,
    pub emojis: &'static [&'static str],
}

/// Composer output for one platform, before hashtags are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub title: Option<String>,
    pub content: String,
    pub cta: Option<String>,
    pub alt_text: Option<String>,
}
