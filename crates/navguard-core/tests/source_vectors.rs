//! Whitelist input normalization tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use navguard_core::{ApplyOutcome, SharedWhitelist, WhitelistSource};

#[test]
fn classify_inputs() {
    assert_eq!(
        WhitelistSource::from_value(&json!(["a.com", "b.com"])),
        WhitelistSource::List(vec!["a.com".into(), "b.com".into()])
    );
    assert_eq!(
        WhitelistSource::from_value(&json!("[\"a.com\",\"b.com\"]")),
        WhitelistSource::EncodedList(vec!["a.com".into(), "b.com".into()])
    );
    assert_eq!(
        WhitelistSource::from_value(&json!("a.com")),
        WhitelistSource::SingleDomain("a.com".into())
    );
    assert_eq!(WhitelistSource::from_value(&json!("")), WhitelistSource::Empty);
    assert_eq!(WhitelistSource::from_value(&json!("   ")), WhitelistSource::Empty);
    assert_eq!(
        WhitelistSource::from_value(&json!(42)),
        WhitelistSource::Unrecognized("number")
    );
    assert_eq!(
        WhitelistSource::from_value(&json!({ "a": 1 })),
        WhitelistSource::Unrecognized("object")
    );
    assert!(matches!(
        WhitelistSource::from_value(&json!(["a.com", 1])),
        WhitelistSource::Unrecognized(_)
    ));
}

#[test]
fn encoded_array_with_non_strings_is_one_domain() {
    let raw = "[\"a.com\", 7]";
    assert_eq!(
        WhitelistSource::from_value(&json!(raw)),
        WhitelistSource::SingleDomain(raw.into())
    );
}

#[test]
fn encoded_list_behaves_like_direct_configure() {
    let direct = SharedWhitelist::new();
    direct.configure(["a.com", "b.com"], true);

    let via = SharedWhitelist::new();
    let out = via.apply(WhitelistSource::from_value(&json!("[\"a.com\",\"b.com\"]")), true);
    assert_eq!(out, ApplyOutcome::Configured(2));

    for u in ["https://a.com", "https://x.b.com", "https://c.com"] {
        assert_eq!(via.is_allowed(u), direct.is_allowed(u), "url={u}");
    }
}

#[test]
fn bare_string_behaves_like_single_pattern() {
    let direct = SharedWhitelist::new();
    direct.configure(["a.com"], false);

    let via = SharedWhitelist::new();
    let out = via.apply(WhitelistSource::from_value(&json!("A.com")), false);
    assert_eq!(out, ApplyOutcome::Configured(1));

    for u in ["https://a.com", "https://x.a.com", "https://b.com"] {
        assert_eq!(via.is_allowed(u), direct.is_allowed(u), "url={u}");
    }
}

#[test]
fn single_domain_also_sets_subdomain_mode() {
    let wl = SharedWhitelist::new();
    wl.configure(["a.com"], false);
    wl.apply(WhitelistSource::SingleDomain("b.com".into()), true);

    let snap = wl.snapshot();
    assert!(snap.allow_subdomains());
    assert!(wl.is_allowed("https://x.b.com"));
}

#[test]
fn blank_string_clears() {
    let wl = SharedWhitelist::new();
    wl.configure(["a.com"], true);

    let out = wl.apply(WhitelistSource::from_value(&json!("")), true);
    assert_eq!(out, ApplyOutcome::Cleared);
    assert!(!wl.snapshot().is_enabled());
    assert!(wl.snapshot().patterns().is_empty());
    assert!(wl.is_allowed("https://b.com"));
}

#[test]
fn unrecognized_keeps_previous_policy() {
    let wl = SharedWhitelist::new();
    wl.configure(["a.com"], false);

    let out = wl.apply(WhitelistSource::from_value(&json!(true)), true);
    assert_eq!(out, ApplyOutcome::Ignored("bool"));
    assert!(wl.is_allowed("https://a.com"));
    assert!(!wl.is_allowed("https://b.com"));
    assert!(!wl.snapshot().allow_subdomains());
}
