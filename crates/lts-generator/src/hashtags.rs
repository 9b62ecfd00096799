//! Hashtag & Keyword Synthesizer.
//!
//! Hashtags and keywords share one ordered candidate list: destination
//! first, then audience, tone and finally the domain defaults.

use lts_core::{Audience, GenerationRequest, Platform, Tone};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("static pattern compiles"));

const MIN_TOKEN_CHARS: usize = 3;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "into", "near", "via", "our", "your", "des", "del", "los",
    "las", "les",
];

const DOMAIN_TERMS: &[&str] = &["luxury travel", "travel goals", "wanderlust", "bucket list"];

fn audience_terms(audience: Audience) -> &'static [&'static str] {
    match audience {
        Audience::Affluent => &["affluent travel", "luxury lifestyle"],
        Audience::Honeymooners => &["honeymooners", "honeymoon", "romantic getaway"],
        Audience::Family => &["family travel", "travel with kids"],
        Audience::Solo => &["solo travel", "solo adventures"],
        Audience::Business => &["business travel", "bleisure"],
    }
}

fn tone_terms(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Elegant => &["elegant escapes", "timeless elegance"],
        Tone::Playful => &["playful travel", "travel fun"],
        Tone::Adventurous => &["adventurous travel", "adventure awaits"],
        Tone::Romantic => &["romantic travel", "romantic getaway"],
        Tone::Minimal => &["minimal travel", "slow travel"],
    }
}

/// The whole destination as one phrase, then its significant words.
pub fn destination_terms(destination: &str) -> Vec<String> {
    let cleaned = NON_ALPHANUMERIC.replace_all(destination, " ");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Vec::new();
    }
    let mut terms = vec![cleaned.to_string()];
    terms.extend(
        cleaned
            .split(' ')
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|t| !STOP_WORDS.contains(&t.to_lowercase().as_str()))
            .map(str::to_string),
    );
    terms
}

/// Candidate terms in priority order, duplicates included.
pub fn candidate_terms(request: &GenerationRequest) -> Vec<String> {
    let mut terms = destination_terms(request.destination());
    terms.extend(audience_terms(request.audience()).iter().map(|t| t.to_string()));
    terms.extend(tone_terms(request.tone()).iter().map(|t| t.to_string()));
    terms.extend(DOMAIN_TERMS.iter().map(|t| t.to_string()));
    terms
}

/// `amalfi coast` -> `#AmalfiCoast`.
pub fn to_hashtag(term: &str) -> String {
    let mut tag = String::with_capacity(term.len() + 1);
    tag.push('#');
    for word in term.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            tag.extend(first.to_uppercase());
            tag.push_str(chars.as_str());
        }
    }
    tag
}

/// Drop case-insensitive repeats, keeping the first casing seen.
pub fn dedup_case_insensitive<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

/// Hashtags for one platform, capped per platform. Empty when disabled.
pub fn hashtags(platform: Platform, request: &GenerationRequest) -> Vec<String> {
    if !request.include_hashtags() {
        return Vec::new();
    }
    let tags = candidate_terms(request).into_iter().map(|term| to_hashtag(&term));
    let mut tags = dedup_case_insensitive(tags);
    tags.truncate(platform.hashtag_cap());
    tags
}

/// Request-wide keywords. Independent of the requested platforms.
pub fn keywords(request: &GenerationRequest) -> Vec<String> {
    dedup_case_insensitive(candidate_terms(request))
}
