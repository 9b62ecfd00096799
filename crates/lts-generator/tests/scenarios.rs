//! End-to-end scenarios for the generator, driven through the raw wire shape.

use lts_core::{LtsError, Platform, RawRequest};
use lts_generator::generate_raw;
use serde_json::Value;

fn amalfi() -> RawRequest {
    RawRequest::new("Amalfi Coast private yacht", &["twitter", "instagram"])
        .tone("elegant")
        .audience("affluent")
        .length("short")
        .include_emojis(true)
        .include_hashtags(true)
}

#[test]
fn test_amalfi_twitter_and_instagram() {
    let out = generate_raw(amalfi()).unwrap();
    let json = serde_json::to_value(&out).unwrap();

    let keys: Vec<&String> = json["byPlatform"].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.iter().any(|k| *k == "twitter"));
    assert!(keys.iter().any(|k| *k == "instagram"));

    let twitter = out.get(Platform::Twitter).unwrap();
    assert!(twitter.content.chars().count() <= Platform::Twitter.content_ceiling());

    for platform in [Platform::Twitter, Platform::Instagram] {
        let tags = &out.get(platform).unwrap().hashtags;
        assert!(!tags.is_empty());
        assert!(tags.iter().any(|t| t == "#AmalfiCoastPrivateYacht"));
    }

    let keywords = &out.universal.keywords;
    assert!(keywords.iter().any(|k| k.contains("Amalfi Coast")));
    assert!(keywords.iter().any(|k| k.contains("elegant")));
    assert!(keywords.iter().any(|k| k.contains("affluent")));
    assert!(json["universal"]["keywords"].is_array());
}

#[test]
fn test_amalfi_without_hashtags_keeps_content() {
    let on = generate_raw(amalfi()).unwrap();
    let off = generate_raw(amalfi().include_hashtags(false)).unwrap();

    for platform in [Platform::Twitter, Platform::Instagram] {
        let a = on.get(platform).unwrap();
        let b = off.get(platform).unwrap();
        assert!(b.hashtags.is_empty());
        assert_eq!(a.content, b.content);
    }

    let json = serde_json::to_value(&off).unwrap();
    assert_eq!(json["byPlatform"]["twitter"]["hashtags"], Value::Array(vec![]));
}

#[test]
fn test_unsupported_platform_is_dropped() {
    let out = generate_raw(RawRequest::new("Kyoto ryokan", &["instagram", "snapchat"])).unwrap();
    let platforms: Vec<Platform> = out.platforms().collect();
    assert_eq!(platforms, vec![Platform::Instagram]);
}

#[test]
fn test_empty_destination_fails() {
    let err = generate_raw(RawRequest::new("   ", &["instagram"])).unwrap_err();
    assert!(matches!(err, LtsError::Validation { field: "destination", .. }));
}

#[test]
fn test_instagram_carries_alt_text_and_cta() {
    let out = generate_raw(amalfi()).unwrap();
    let ig = out.get(Platform::Instagram).unwrap();
    assert_eq!(
        ig.alt_text.as_deref(),
        Some("Amalfi Coast Private Yacht, framed in soft golden light with refined, uncluttered details.")
    );
    assert_eq!(ig.cta.as_deref(), Some("Tap the link in bio to book your escape"));
    assert_eq!(ig.title.as_deref(), Some("Amalfi Coast Private Yacht: Quiet Luxury, Perfected"));
    assert!(out.get(Platform::Twitter).unwrap().alt_text.is_none());
}

#[test]
fn test_short_twitter_copy_is_exact() {
    let out = generate_raw(amalfi()).unwrap();
    assert_eq!(
        out.get(Platform::Twitter).unwrap().content,
        "Amalfi Coast private yacht: quiet luxury, perfected. \u{2728}"
    );
    let plain = generate_raw(amalfi().include_emojis(false)).unwrap();
    assert_eq!(
        plain.get(Platform::Twitter).unwrap().content,
        "Amalfi Coast private yacht: quiet luxury, perfected."
    );
}

#[test]
fn test_unbroken_destination_with_longest_link_keeps_hook() {
    let destination = "a".repeat(120);
    let link = format!("https://example.com/{}", "x".repeat(80));
    let out = generate_raw(RawRequest::new(destination.clone(), &["twitter"]).link(link.clone())).unwrap();
    let content = &out.get(Platform::Twitter).unwrap().content;
    assert!(content.chars().count() <= Platform::Twitter.content_ceiling());
    assert!(content.starts_with(&format!("{destination}: quiet luxury, perfected.")), "{content}");
    assert!(content.ends_with(&format!("\n{link}")));
}

#[test]
fn test_link_over_limit_is_rejected() {
    let link = format!("https://example.com/{}", "x".repeat(180));
    let err = generate_raw(RawRequest::new("Kyoto ryokan", &["twitter"]).link(link)).unwrap_err();
    assert!(matches!(err, LtsError::Validation { field: "link", .. }));
}
