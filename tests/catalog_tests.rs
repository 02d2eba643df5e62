// tests/catalog_tests.rs - Embedded UI string catalog
use guest_menu::i18n::{available_languages, clear_cache, has_key, tr_in};
use guest_menu::Language;

#[test]
fn both_language_tables_are_embedded() {
    let mut langs = available_languages();
    langs.sort();
    assert_eq!(langs, ["am", "en"]);
}

#[test]
fn keys_resolve_per_language() {
    assert_eq!(tr_in(Language::En, "menu.heading", &[]), "Our Menu");
    assert_eq!(tr_in(Language::Am, "menu.heading", &[]), "የእኛ ምናሌ");
}

#[test]
fn params_are_substituted() {
    let line = tr_in(Language::En, "attendance.welcome", &["Hanna"]);
    assert_eq!(line, "Welcome back, Hanna!");

    let line = tr_in(Language::Am, "language.switched", &["en"]);
    assert!(line.contains("en"), "{}", line);
}

#[test]
fn missing_key_renders_a_visible_marker_not_a_panic() {
    let text = tr_in(Language::En, "no.such.key", &[]);
    assert_eq!(text, "missing: no.such.key");
    assert!(!has_key("no.such.key"));
}

#[test]
fn lookups_are_stable_across_cache_clears() {
    let before = tr_in(Language::Am, "brand.name", &[]);
    clear_cache();
    let after = tr_in(Language::Am, "brand.name", &[]);
    assert_eq!(before, after);
}

#[test]
fn known_keys_are_present_in_both_tables() {
    let keys = [
        "brand.name",
        "brand.tagline",
        "menu.heading",
        "menu.card.price",
        "attendance.heading",
        "attendance.date",
    ];
    for key in keys {
        assert!(has_key(key), "missing catalog key: {}", key);
        let en = tr_in(Language::En, key, &[]);
        let am = tr_in(Language::Am, key, &[]);
        assert!(!en.starts_with("missing:"), "{}", key);
        assert!(!am.starts_with("missing:"), "{}", key);
    }
}
