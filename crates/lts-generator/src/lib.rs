//! Luxury Travel Social Agent generator: one validated request in, ready-to-post
//! copy for every requested platform out.
//!
//! Per platform the pipeline runs:
//! 1. Template selection from the static table
//! 2. Composition (placeholders, length ceiling, emojis, CTA, alt text)
//! 3. Hashtag synthesis
//!
//! Keywords are synthesized once per request and shared by every platform.

pub mod composer;
pub mod hashtags;
pub mod selector;
pub mod templates;
pub mod types;

pub use composer::compose;
pub use hashtags::{hashtags, keywords};
pub use selector::select;
pub use templates::TEMPLATES;
pub use types::*;

use lts_core::{
    normalize, GenerationRequest, GenerationResult, Platform, PlatformOutput, RawRequest, Result,
    Universal,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Generate copy for every platform in `request`.
///
/// Either every platform succeeds or the whole call fails; no partial bundle
/// is ever returned.
pub fn generate(request: &GenerationRequest) -> Result<GenerationResult> {
    let by_platform = request
        .platforms()
        .iter()
        .map(|&platform| generate_platform(platform, request).map(|out| (platform, out)))
        .collect::<Result<BTreeMap<Platform, PlatformOutput>>>()?;

    Ok(GenerationResult {
        by_platform,
        universal: Universal { keywords: keywords(request) },
    })
}

/// Normalize then generate.
pub fn generate_raw(raw: RawRequest) -> Result<GenerationResult> {
    let request = normalize(raw)?;
    generate(&request)
}

/// Select, compose and tag a single platform.
pub fn generate_platform(platform: Platform, request: &GenerationRequest) -> Result<PlatformOutput> {
    let template = select(platform, request.tone(), request.audience(), request.length())?;
    let composition = compose(template, request)?;
    debug!(
        platform = %platform,
        tone = %template.effective_tone,
        chars = composition.content.chars().count(),
        "composed platform copy"
    );

    Ok(PlatformOutput {
        title: composition.title,
        content: composition.content,
        hashtags: hashtags(platform, request),
        alt_text: composition.alt_text,
        cta: composition.cta,
    })
}
