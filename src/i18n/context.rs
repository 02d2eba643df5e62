// src/i18n/context.rs - Shared active-language state
//
// One writer (the language switcher), many readers. Every mounted view
// reads the active language on render; the epoch counter lets a host
// detect that a switch happened and re-resolve its fields without
// rebuilding the view tree.
use crate::core::error::Result;
use crate::i18n::types::Language;
use lazy_static::lazy_static;
use std::sync::RwLock;

struct ContextState {
    language: Language,
    epoch: u64,
}

lazy_static! {
    static ref CONTEXT: RwLock<ContextState> = RwLock::new(ContextState {
        language: Language::fallback(),
        epoch: 0,
    });
}

pub fn active() -> Language {
    CONTEXT.read().unwrap().language
}

/// Monotonic render epoch; bumped on every effective language switch.
pub fn epoch() -> u64 {
    CONTEXT.read().unwrap().epoch
}

/// Switches the active language. Returns true if the language actually
/// changed (and the epoch was bumped); switching to the current language
/// is a no-op.
pub fn switch(lang: Language) -> bool {
    let mut state = CONTEXT.write().unwrap();
    if state.language == lang {
        return false;
    }
    state.language = lang;
    state.epoch += 1;
    log::info!("Active language switched to '{}'", lang.code());
    true
}

/// Parses and switches in one step, for switcher UIs holding raw codes.
pub fn switch_code(code: &str) -> Result<Language> {
    let lang = Language::from_code(code)?;
    switch(lang);
    Ok(lang)
}
