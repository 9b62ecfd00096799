//! Request Normalizer: raw wire payload in, fully defaulted request out.

use crate::error::{LtsError, Result};
use crate::types::{Audience, Length, Platform, Tone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

pub const MAX_DESTINATION_CHARS: usize = 120;
pub const MAX_BRAND_CHARS: usize = 60;
/// Leaves a whole twitter hook room beside the link line.
pub const MAX_LINK_CHARS: usize = 100;

/// Request as it arrives on the wire. Nothing is validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub include_emojis: Option<bool>,
    #[serde(default)]
    pub include_hashtags: Option<bool>,
}

impl RawRequest {
    pub fn new(destination: impl Into<String>, platforms: &[&str]) -> Self {
        Self {
            destination: Some(destination.into()),
            platforms: Some(platforms.iter().map(|p| p.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn brand_name(mut self, brand: impl Into<String>) -> Self {
        self.brand_name = Some(brand.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn include_emojis(mut self, on: bool) -> Self {
        self.include_emojis = Some(on);
        self
    }

    pub fn include_hashtags(mut self, on: bool) -> Self {
        self.include_hashtags = Some(on);
        self
    }

    /// Shorthand for [`normalize`].
    pub fn normalize(self) -> Result<GenerationRequest> {
        normalize(self)
    }
}

/// Validated, defaulted request. Only obtainable through [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    destination: String,
    tone: Tone,
    audience: Audience,
    platforms: BTreeSet<Platform>,
    length: Length,
    brand_name: Option<String>,
    link: Option<String>,
    include_emojis: bool,
    include_hashtags: bool,
}

impl GenerationRequest {
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    /// Never empty.
    pub fn platforms(&self) -> &BTreeSet<Platform> {
        &self.platforms
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn brand_name(&self) -> Option<&str> {
        self.brand_name.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn include_emojis(&self) -> bool {
        self.include_emojis
    }

    pub fn include_hashtags(&self) -> bool {
        self.include_hashtags
    }

    /// Copy of this request targeting other platforms. `platforms` must not be empty.
    pub fn with_platforms(&self, platforms: impl IntoIterator<Item = Platform>) -> Result<Self> {
        let platforms: BTreeSet<Platform> = platforms.into_iter().collect();
        if platforms.is_empty() {
            return Err(LtsError::validation("platforms", "at least one platform is required"));
        }
        Ok(Self { platforms, ..self.clone() })
    }

    pub fn with_emojis(&self, on: bool) -> Self {
        Self { include_emojis: on, ..self.clone() }
    }

    pub fn with_hashtags(&self, on: bool) -> Self {
        Self { include_hashtags: on, ..self.clone() }
    }
}

/// Fill defaults and validate. Every check runs before anything is generated.
pub fn normalize(raw: RawRequest) -> Result<GenerationRequest> {
    let destination = raw
        .destination
        .as_deref()
        .map(collapse_whitespace)
        .unwrap_or_default();
    if destination.is_empty() {
        return Err(LtsError::validation("destination", "must not be empty"));
    }
    check_max("destination", &destination, MAX_DESTINATION_CHARS)?;

    let tone = parse_or_default::<Tone>(raw.tone.as_deref())?;
    let audience = parse_or_default::<Audience>(raw.audience.as_deref())?;
    let length = parse_or_default::<Length>(raw.length.as_deref())?;

    let names = raw.platforms.unwrap_or_default();
    if names.is_empty() {
        return Err(LtsError::validation("platforms", "at least one platform is required"));
    }
    let mut platforms = BTreeSet::new();
    for name in &names {
        match name.parse::<Platform>() {
            Ok(p) => {
                platforms.insert(p);
            }
            Err(_) => debug!(platform = %name, "dropping unsupported platform"),
        }
    }
    if platforms.is_empty() {
        return Err(LtsError::validation(
            "platforms",
            format!("none of the requested platforms are supported: {}", names.join(", ")),
        ));
    }

    let brand_name = raw
        .brand_name
        .as_deref()
        .map(collapse_whitespace)
        .filter(|b| !b.is_empty());
    if let Some(brand) = &brand_name {
        check_max("brandName", brand, MAX_BRAND_CHARS)?;
    }

    let link = raw
        .link
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string);
    if let Some(link) = &link {
        check_max("link", link, MAX_LINK_CHARS)?;
        if link.chars().any(char::is_whitespace) {
            return Err(LtsError::validation("link", "must not contain whitespace"));
        }
    }

    Ok(GenerationRequest {
        destination,
        tone,
        audience,
        platforms,
        length,
        brand_name,
        link,
        include_emojis: raw.include_emojis.unwrap_or(true),
        include_hashtags: raw.include_hashtags.unwrap_or(true),
    })
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T>
where
    T: std::str::FromStr<Err = LtsError> + Default,
{
    value.map(str::parse::<T>).transpose().map(Option::unwrap_or_default)
}

fn check_max(field: &'static str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(LtsError::validation(
            field,
            format!("{} characters exceeds the limit of {}", len, max),
        ));
    }
    Ok(())
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
