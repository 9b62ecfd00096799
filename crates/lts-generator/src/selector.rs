//! Template selection from the static table.

use crate::templates::TEMPLATES;
use crate::types::{Template, TemplateKey};
use lts_core::{Audience, Length, LtsError, Platform, Result, Tone};
use std::collections::HashMap;

/// Select the template for one platform.
pub fn select(
    platform: Platform,
    tone: Tone,
    audience: Audience,
    length: Length,
) -> Result<&'static Template> {
    select_from(&TEMPLATES, TemplateKey::new(platform, tone, audience, length))
}

/// Look up `key` in an explicit table. A missing entry is a defect, not a
/// reason to fall back to some other template.
pub fn select_from(table: &HashMap<TemplateKey, Template>, key: TemplateKey) -> Result<&Template> {
    table.get(&key).ok_or_else(|| {
        LtsError::internal(format!(
            "no template for {}/{}/{}/{}",
            key.platform, key.tone, key.audience, key.length
        ))
    })
}
