use std::collections::HashMap;

use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
        }
    }

    fn bundle_source(&self) -> &'static str {
        match self {
            Locale::En => include_str!("../../assets/locales/en.json"),
            Locale::De => include_str!("../../assets/locales/de.json"),
        }
    }
}

/// Readiness flags of the translation layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct I18nState {
    pub initialized: bool,
    pub bundle_loaded: bool,
    pub locale: Locale,
}

impl I18nState {
    /// Pages render translated copy only once both flags are set
    pub fn is_ready(&self) -> bool {
        self.initialized && self.bundle_loaded
    }
}

pub static I18N_STATE: GlobalSignal<I18nState> = Signal::global(I18nState::default);

/// Translations of the active locale, key -> text
pub static BUNDLE: GlobalSignal<HashMap<String, String>> = Signal::global(HashMap::new);

const STORAGE_KEY: &str = "dsecure_locale";

/// Parse the embedded bundle of a locale
pub fn parse_bundle(locale: Locale) -> SiteResult<HashMap<String, String>> {
    serde_json::from_str(locale.bundle_source()).map_err(|e| SiteError::LocaleBundle {
        locale: locale.as_str().to_string(),
        message: e.to_string(),
    })
}

/// Initialize translations from localStorage or the default locale
pub fn init_i18n() {
    let locale = match LocalStorage::get::<String>(STORAGE_KEY) {
        Ok(stored) => {
            let locale = Locale::from_str(&stored);
            log::info!("Loaded locale from storage: {:?}", locale);
            locale
        }
        Err(_) => {
            log::info!("No stored locale, using {:?}", Locale::default());
            Locale::default()
        }
    };

    I18N_STATE.write().initialized = true;
    load_locale(locale);
}

/// Switch locale and persist the choice
pub fn set_locale(locale: Locale) {
    if I18N_STATE.read().locale == locale && I18N_STATE.read().bundle_loaded {
        return;
    }

    if let Err(e) = LocalStorage::set(STORAGE_KEY, locale.as_str()).map_err(SiteError::from) {
        log::warn!("Failed to persist locale: {}", e);
    }
    load_locale(locale);
}

fn load_locale(locale: Locale) {
    let bundle = match parse_bundle(locale) {
        Ok(bundle) => bundle,
        Err(e) => {
            // Keys render as-is rather than blocking the page forever
            log::error!("{}", e);
            HashMap::new()
        }
    };

    *BUNDLE.write() = bundle;
    let mut state = I18N_STATE.write();
    state.locale = locale;
    state.bundle_loaded = true;
    log::info!("Locale changed to: {:?}", locale);
}

/// Look up a key in a bundle, falling back to the key itself
pub fn translate<'a>(bundle: &'a HashMap<String, String>, key: &'a str) -> &'a str {
    bundle.get(key).map(String::as_str).unwrap_or(key)
}

/// Translate a key with the active bundle
pub fn t(key: &str) -> String {
    translate(&BUNDLE.read(), key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundles_parse_with_same_keys() {
        let en = parse_bundle(Locale::En).unwrap();
        let de = parse_bundle(Locale::De).unwrap();
        assert!(!en.is_empty());

        let mut en_keys: Vec<_> = en.keys().collect();
        let mut de_keys: Vec<_> = de.keys().collect();
        en_keys.sort();
        de_keys.sort();
        assert_eq!(en_keys, de_keys);
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let bundle = parse_bundle(Locale::De).unwrap();
        assert_eq!(translate(&bundle, "nav.contact"), "Kontakt");
        assert_eq!(translate(&bundle, "nav.unknown"), "nav.unknown");
    }

    #[test]
    fn test_readiness_needs_both_flags() {
        let mut state = I18nState::default();
        assert!(!state.is_ready());
        state.initialized = true;
        assert!(!state.is_ready());
        state.bundle_loaded = true;
        assert!(state.is_ready());
    }

    #[test]
    fn test_locale_strings() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_str(locale.as_str()), locale);
        }
        assert_eq!(Locale::from_str("fr"), Locale::En);
    }
}
