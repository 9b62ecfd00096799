//! Template table: phrase families per tone, wrapped per platform style.

use crate::types::{PlatformStyle, Template, TemplateKey};
use lts_core::{Audience, Platform, Tone};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Hook, body, closing.
struct Family {
    hook: &'static str,
    body: &'static str,
    closing: &'static str,
}

fn standard_family(tone: Tone) -> Family {
    match tone {
        Tone::Elegant => Family {
            hook: "Discover {destination}, where every moment is composed with quiet grace.",
            body: "Impeccable service, serene surroundings and thoughtful details, {audience}.",
            closing: "Some journeys are simply meant to be savored.",
        },
        Tone::Playful => Family {
            hook: "Plot twist: your next getaway is {destination}!",
            body: "Sun-soaked days, spontaneous detours and zero schedules, {audience}.",
            closing: "Pack light, laugh often and let the good times roll.",
        },
        Tone::Adventurous => Family {
            hook: "Chase the horizon all the way to {destination}.",
            body: "Wild landscapes, bold routes and stories worth telling, {audience}.",
            closing: "The map ends here. Your adventure does not.",
        },
        Tone::Romantic => Family {
            hook: "Fall in love all over again at {destination}.",
            body: "Candlelit evenings, golden sunsets and moments that linger, {audience}.",
            closing: "Some places are made for two hearts and one unforgettable story.",
        },
        Tone::Minimal => Family {
            hook: "{destination}. Nothing more needed.",
            body: "Space, light and calm, {audience}.",
            closing: "Less noise. More presence.",
        },
    }
}

fn condensed_family(tone: Tone) -> Family {
    match tone {
        Tone::Elegant => Family {
            hook: "{destination}: quiet luxury, perfected.",
            body: "Effortless elegance, {audience}.",
            closing: "Savor every moment.",
        },
        Tone::Playful => Family {
            hook: "POV: you just landed in {destination}!",
            body: "Good vibes only, {audience}.",
            closing: "Who's coming?",
        },
        Tone::Adventurous => Family {
            hook: "{destination} is calling. Answer boldly.",
            body: "Wild views, {audience}.",
            closing: "Go further.",
        },
        Tone::Romantic => Family {
            hook: "{destination}, made for falling in love.",
            body: "Golden hours, {audience}.",
            closing: "Say yes to the view.",
        },
        Tone::Minimal => Family {
            hook: "{destination}. Simply.",
            body: "Calm, {audience}.",
            closing: "Be here.",
        },
    }
}

/// Only elegant and minimal reach here; see [`effective_tone`].
fn professional_family(tone: Tone) -> Family {
    match tone {
        Tone::Minimal => Family {
            hook: "{destination}: focused, understated, exceptional.",
            body: "A considered experience, {audience}.",
            closing: "Details available on request.",
        },
        _ => Family {
            hook: "{destination} sets a new benchmark for considered luxury travel.",
            body: "From arrival to departure, every touchpoint is curated with precision, {audience}.",
            closing: "We would welcome the opportunity to tailor an itinerary for you.",
        },
    }
}

fn family(style: PlatformStyle, tone: Tone) -> Family {
    match style {
        PlatformStyle::Standard => standard_family(tone),
        PlatformStyle::Condensed => condensed_family(tone),
        PlatformStyle::Professional => professional_family(tone),
    }
}

fn audience_clause(style: PlatformStyle, audience: Audience) -> &'static str {
    match (style, audience) {
        (PlatformStyle::Condensed, Audience::Affluent) => "without compromise",
        (PlatformStyle::Condensed, Audience::Honeymooners) => "made for two",
        (PlatformStyle::Condensed, Audience::Family) => "for the whole family",
        (PlatformStyle::Condensed, Audience::Solo) => "on your own terms",
        (PlatformStyle::Condensed, Audience::Business) => "between meetings",
        (_, Audience::Affluent) => "reserved for those who expect the exceptional",
        (_, Audience::Honeymooners) => "made for two",
        (_, Audience::Family) => "with room for every generation",
        (_, Audience::Solo) => "for the independent traveler",
        (_, Audience::Business) => "with seamless connectivity between meetings",
    }
}

/// Appended to the hook so even hook-only copy speaks to its audience.
fn audience_hook_tag(style: PlatformStyle, audience: Audience) -> Option<&'static str> {
    let tag = match (style, audience) {
        (_, Audience::Affluent) => return None,
        (PlatformStyle::Condensed, Audience::Honeymooners) => "Just the two of you.",
        (PlatformStyle::Condensed, Audience::Family) => "Bring everyone.",
        (PlatformStyle::Condensed, Audience::Solo) => "Go solo.",
        (PlatformStyle::Condensed, Audience::Business) => "Work, elevated.",
        (PlatformStyle::Professional, Audience::Honeymooners) => "Tailored for couples.",
        (PlatformStyle::Professional, Audience::Family) => "Tailored for families.",
        (PlatformStyle::Professional, Audience::Solo) => "Tailored for independent travelers.",
        (PlatformStyle::Professional, Audience::Business) => "Tailored for executive travel.",
        (PlatformStyle::Standard, Audience::Honeymooners) => "A honeymoon written in starlight.",
        (PlatformStyle::Standard, Audience::Family) => "Memories for every generation.",
        (PlatformStyle::Standard, Audience::Solo) => "A journey entirely your own.",
        (PlatformStyle::Standard, Audience::Business) => "Productive by day, restored by night.",
    };
    Some(tag)
}

/// Business audiences never get playful copy; the professional style keeps
/// to elegant or minimal phrasing whatever the requested tone.
pub fn effective_tone(style: PlatformStyle, tone: Tone, audience: Audience) -> Tone {
    let tone = match (audience, tone) {
        (Audience::Business, Tone::Playful) => Tone::Minimal,
        _ => tone,
    };
    match style {
        PlatformStyle::Professional => match tone {
            Tone::Playful | Tone::Minimal => Tone::Minimal,
            Tone::Elegant | Tone::Adventurous | Tone::Romantic => Tone::Elegant,
        },
        PlatformStyle::Condensed | PlatformStyle::Standard => tone,
    }
}

/// Honeymooners close on the romantic note outside the professional style.
fn closing_tone(style: PlatformStyle, tone: Tone, audience: Audience) -> Tone {
    match (style, audience) {
        (PlatformStyle::Professional, _) => tone,
        (_, Audience::Honeymooners) => Tone::Romantic,
        _ => tone,
    }
}

fn title_pattern(platform: Platform, style: PlatformStyle, tone: Tone) -> Option<&'static str> {
    if platform == Platform::Twitter {
        return None;
    }
    let pattern = match (style, tone) {
        (PlatformStyle::Professional, Tone::Minimal) => "{destination}: Considered Travel",
        (PlatformStyle::Professional, _) => "{destination}: A New Standard in Luxury Travel",
        (_, Tone::Elegant) => "{destination}: Quiet Luxury, Perfected",
        (_, Tone::Playful) => "{destination}: Your Next Favorite Escape",
        (_, Tone::Adventurous) => "{destination}: Beyond the Beaten Path",
        (_, Tone::Romantic) => "{destination}: A Love Story",
        (_, Tone::Minimal) => "{destination}",
    };
    Some(pattern)
}

fn brand_pattern(style: PlatformStyle) -> &'static str {
    match style {
        PlatformStyle::Condensed => "via {brand}",
        PlatformStyle::Professional => "Presented by {brand}.",
        PlatformStyle::Standard => "Curated by {brand}.",
    }
}

fn link_pattern(style: PlatformStyle) -> &'static str {
    match style {
        PlatformStyle::Professional => "Learn more: {link}",
        PlatformStyle::Condensed | PlatformStyle::Standard => "{link}",
    }
}

fn cta(platform: Platform, tone: Tone) -> Option<&'static str> {
    let phrase = match (platform, tone) {
        (Platform::Instagram, Tone::Minimal) => "Link in bio",
        (Platform::Instagram, Tone::Playful) => "Tap the link in bio and pack your bags",
        (Platform::Instagram, _) => "Tap the link in bio to book your escape",
        (Platform::Tiktok, Tone::Adventurous) => "Save this for your next trip",
        (Platform::Tiktok, _) => "Follow for your next escape",
        (Platform::Twitter, Tone::Minimal) => "Reserve now",
        (Platform::Twitter, _) => "Book your escape",
        (Platform::Facebook, Tone::Playful) => "Tag who you're taking",
        (Platform::Facebook, Tone::Romantic) => "Share this with your someone special",
        (Platform::Facebook, _) => "Plan your getaway today",
        (Platform::Linkedin, Tone::Minimal) => return None,
        (Platform::Linkedin, _) => "Inquire today",
        (Platform::Pinterest, _) => "Save this pin for your next escape",
    };
    Some(phrase)
}

fn alt_phrase(tone: Tone) -> &'static str {
    match tone {
        Tone::Elegant => "framed in soft golden light with refined, uncluttered details",
        Tone::Playful => "bright and sunlit, with vivid colors and a lively atmosphere",
        Tone::Adventurous => "a sweeping landscape of rugged terrain under an open sky",
        Tone::Romantic => "at sunset, with warm glowing light and an intimate setting for two",
        Tone::Minimal => "a calm, spacious scene with clean lines and muted tones",
    }
}

/// Single code point each, so an emoji token is always two characters.
pub fn emoji_set(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Elegant => &["\u{2728}", "\u{1F942}", "\u{1F319}"],
        Tone::Playful => &["\u{1F389}", "\u{1F334}", "\u{1F60E}"],
        Tone::Adventurous => &["\u{1F9ED}", "\u{1F30B}", "\u{1F30D}"],
        Tone::Romantic => &["\u{1F339}", "\u{1F4AB}", "\u{1F305}"],
        Tone::Minimal => &["\u{1F90D}", "\u{1F33F}", "\u{1F30A}"],
    }
}

fn build_template(key: TemplateKey) -> Template {
    let style = PlatformStyle::of(key.platform);
    let tone = effective_tone(style, key.tone, key.audience);
    let base = family(style, tone);
    let closing = family(style, closing_tone(style, tone, key.audience)).closing;
    let clause = audience_clause(style, key.audience);

    let hook = match audience_hook_tag(style, key.audience) {
        Some(tag) => format!("{} {}", base.hook, tag),
        None => base.hook.to_string(),
    };

    let fragments = [hook.as_str(), base.body, closing]
        .into_iter()
        .take(key.length.fragment_count())
        .map(|f| f.replace("{audience}", clause))
        .collect();

    Template {
        key,
        style,
        effective_tone: tone,
        title: title_pattern(key.platform, style, tone).map(str::to_string),
        fragments,
        brand: Some(brand_pattern(style)),
        link: link_pattern(style),
        cta: cta(key.platform, tone),
        alt_phrase: key.platform.is_image_first().then(|| alt_phrase(tone)),
        emojis: emoji_set(tone),
    }
}

/// Build the full table, one entry per [`TemplateKey::all`] combination.
pub fn build_template_table() -> HashMap<TemplateKey, Template> {
    TemplateKey::all().map(|key| (key, build_template(key))).collect()
}

/// The process-wide table, built on first use and never mutated.
pub static TEMPLATES: LazyLock<HashMap<TemplateKey, Template>> = LazyLock::new(build_template_table);
