//! Content Composer: fills a template, enforces the platform ceiling and
//! places emojis at fragment boundaries.

use crate::types::{Composition, Template};
use lts_core::{GenerationRequest, LtsError, Result};

pub const ELLIPSIS: &str = "\u{2026}";
pub const TITLE_CEILING: usize = 100;
/// A space followed by one single-code-point emoji.
pub const EMOJI_TOKEN_CHARS: usize = 2;

/// Instantiate `template` for `request`.
pub fn compose(template: &Template, request: &GenerationRequest) -> Result<Composition> {
    let destination = request.destination();
    let heading = title_case(destination);
    let separator = template.style.separator();

    let mut plain = String::new();
    let mut boundaries = Vec::with_capacity(template.fragments.len());
    for fragment in &template.fragments {
        if !plain.is_empty() {
            plain.push_str(separator);
        }
        plain.push_str(&fragment.replace("{destination}", destination));
        boundaries.push(plain.len());
    }
    if let (Some(pattern), Some(brand)) = (template.brand, request.brand_name()) {
        plain.push_str(separator);
        plain.push_str(&pattern.replace("{brand}", brand));
    }

    let link_line = request
        .link()
        .map(|link| format!("\n{}", template.link.replace("{link}", link)));

    // Room for the link and every emoji slot is reserved even with emojis off,
    // so both variants truncate at the same place.
    let reserve = EMOJI_TOKEN_CHARS * boundaries.len()
        + link_line.as_deref().map_or(0, |l| l.chars().count());
    let budget = template.key.platform.content_ceiling().saturating_sub(reserve);
    let (kept, truncated) = word_prefix(&plain, budget);

    let mut content = String::with_capacity(kept + reserve + ELLIPSIS.len());
    let mut written = 0;
    if request.include_emojis() && !template.emojis.is_empty() {
        for (i, &boundary) in boundaries.iter().enumerate() {
            let whole = boundary < kept || (!truncated && boundary <= kept);
            if !whole {
                break;
            }
            content.push_str(&plain[written..boundary]);
            content.push(' ');
            content.push_str(template.emojis[i % template.emojis.len()]);
            written = boundary;
        }
    }
    content.push_str(&plain[written..kept]);
    if truncated {
        content.push_str(ELLIPSIS);
    }
    if let Some(line) = &link_line {
        content.push_str(line);
    }

    if content.trim().is_empty() {
        return Err(LtsError::internal(format!(
            "empty content composed for {}",
            template.key.platform
        )));
    }

    let title = template
        .title
        .as_deref()
        .map(|pattern| truncate_at_word(&pattern.replace("{destination}", &heading), TITLE_CEILING));

    let alt_text = template
        .alt_phrase
        .map(|phrase| sanitize_alt_text(&format!("{}, {}.", heading, phrase)));

    Ok(Composition {
        title,
        content,
        cta: template.cta.map(str::to_string),
        alt_text,
    })
}

/// Upper-case the first letter of every word, leave the rest as typed.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Byte length of the longest prefix of `text` that fits in `max` characters.
///
/// When `text` is too long the prefix ends on a word boundary and leaves room
/// for the ellipsis; the flag reports whether anything was cut. A first word
/// longer than the room is cut mid-word rather than dropped.
pub fn word_prefix(text: &str, max: usize) -> (usize, bool) {
    if text.chars().count() <= max {
        return (text.len(), false);
    }
    let limit = max.saturating_sub(ELLIPSIS.chars().count());
    let mut boundary = 0;
    let mut hard_end = text.len();
    for (count, (idx, ch)) in text.char_indices().enumerate() {
        if count == limit {
            hard_end = idx;
        }
        if count > limit {
            break;
        }
        if ch.is_whitespace() {
            boundary = idx;
        }
    }
    let end = match text[..boundary].trim_end().len() {
        0 => text[..hard_end].trim_end().len(),
        kept => kept,
    };
    (end, true)
}

/// Cut `text` to at most `max` characters on a word boundary, marking the cut.
pub fn truncate_at_word(text: &str, max: usize) -> String {
    match word_prefix(text, max) {
        (end, false) => text[..end].to_string(),
        (end, true) => format!("{}{}", &text[..end], ELLIPSIS),
    }
}

/// Alt text is read aloud: no hashtags, no emojis, single spaces.
pub fn sanitize_alt_text(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '#' && !is_emoji(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0xFE0F | 0x200D
    )
}
