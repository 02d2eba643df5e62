// tests/resolver_tests.rs - Bilingual field resolution properties
use guest_menu::{BilingualText, Language, SUPPORTED_LANGUAGES};

#[test]
fn exact_lookup_wins_when_present() {
    let field = BilingualText::new("Pasta", "ፓስታ");

    let test_cases = [(Language::En, "Pasta"), (Language::Am, "ፓስታ")];
    for (lang, expected) in test_cases {
        assert_eq!(field.resolve(lang), expected, "resolve({})", lang);
    }
}

#[test]
fn missing_language_falls_back_to_first_supported() {
    let field = BilingualText::en_only("Pasta");
    assert_eq!(field.resolve(Language::Am), "Pasta");
}

#[test]
fn fallback_reaches_any_populated_language() {
    // English absent entirely; the Amharic value must still render
    // rather than an empty string or placeholder.
    let field = BilingualText::am_only("ፓስታ");
    assert_eq!(field.resolve(Language::En), "ፓስታ");
}

#[test]
fn empty_strings_count_as_absent() {
    let field = BilingualText {
        en: Some("Pasta".into()),
        am: Some("  ".into()),
    };
    assert_eq!(field.resolve(Language::Am), "Pasta");
}

#[test]
fn resolve_is_pure_and_idempotent() {
    let field = BilingualText::new("Coffee", "ቡና");
    for lang in SUPPORTED_LANGUAGES {
        let first = field.resolve(lang).to_string();
        for _ in 0..3 {
            assert_eq!(field.resolve(lang), first);
        }
    }
}

#[test]
fn validation_enforces_at_least_one_language() {
    assert!(BilingualText::default().validate("name").is_err());
    assert!(BilingualText::en_only("x").validate("name").is_ok());
    assert!(BilingualText::am_only("ሽሮ").validate("name").is_ok());
}

#[test]
fn language_codes_parse_case_insensitively() {
    let test_cases = [
        ("en", Some(Language::En)),
        ("EN", Some(Language::En)),
        (" am ", Some(Language::Am)),
        ("fr", None),
        ("", None),
    ];

    for (code, expected) in test_cases {
        let parsed = Language::from_code(code).ok();
        assert_eq!(parsed, expected, "from_code({:?})", code);
    }
}

#[test]
fn fallback_is_the_first_supported_code() {
    assert_eq!(Language::fallback(), SUPPORTED_LANGUAGES[0]);
    assert_eq!(Language::fallback(), Language::En);
}
