//! Bundled translations and the persisted locale setting.

use std::collections::HashMap;

use crate::error::{BookingError, BookingResult};
use crate::storage::{Storage, LANG_KEY};

pub const DEFAULT_LOCALE: &str = "en";

static BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("el", include_str!("../locales/el.json")),
];

pub fn supported_locales() -> Vec<&'static str> {
    BUNDLES.iter().map(|(code, _)| *code).collect()
}

pub fn is_supported(code: &str) -> bool {
    BUNDLES.iter().any(|(c, _)| *c == code)
}

fn load_bundle(code: &str) -> HashMap<String, String> {
    let Some((_, source)) = BUNDLES.iter().find(|(c, _)| *c == code) else {
        return HashMap::new();
    };

    serde_json::from_str(source).unwrap_or_else(|e| {
        tracing::error!("Translation bundle '{code}' is malformed: {e}");
        HashMap::new()
    })
}

/// Looks up display strings for the active locale.
///
/// Missing keys fall back to the default locale, then to the key itself.
#[derive(Debug, Clone)]
pub struct Translator {
    code: String,
    active: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    pub fn new(code: &str) -> Self {
        let code = if is_supported(code) {
            code.to_string()
        } else {
            tracing::warn!("Unsupported locale '{code}', using '{DEFAULT_LOCALE}'");
            DEFAULT_LOCALE.to_string()
        };

        let active = load_bundle(&code);
        Translator::with_bundles(code, active, load_bundle(DEFAULT_LOCALE))
    }

    fn with_bundles(
        code: String,
        active: HashMap<String, String>,
        fallback: HashMap<String, String>,
    ) -> Self {
        Translator {
            code,
            active,
            fallback,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.active
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new(DEFAULT_LOCALE)
    }
}

/// Read the persisted locale code. Unreadable entries count as unset.
pub fn load_locale(storage: &impl Storage) -> Option<String> {
    let content = match storage.get(LANG_KEY) {
        Ok(content) => content?,
        Err(e) => {
            tracing::warn!("Could not read locale entry: {e}");
            return None;
        }
    };

    match serde_json::from_str::<String>(&content) {
        Ok(code) => Some(code),
        Err(e) => {
            tracing::warn!("Ignoring unreadable locale entry: {e}");
            None
        }
    }
}

pub fn save_locale(storage: &mut impl Storage, code: &str) -> BookingResult<()> {
    if !is_supported(code) {
        return Err(BookingError::UnsupportedLocale(code.to_string()));
    }

    storage.set(LANG_KEY, &serde_json::to_string(code)?)
}

/// Pick the active locale: explicit override, then the persisted choice,
/// then the configured default, then `en`.
pub fn resolve_locale(
    explicit: Option<&str>,
    persisted: Option<String>,
    configured: Option<&str>,
) -> String {
    explicit
        .map(str::to_string)
        .or(persisted)
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_bundles_parse_with_same_keys_as_default() {
        let en = load_bundle("en");
        assert!(!en.is_empty());

        for code in supported_locales() {
            let bundle = load_bundle(code);
            assert!(!bundle.is_empty(), "bundle {code} is empty");
            assert!(bundle.keys().all(|k| en.contains_key(k)), "bundle {code} has unknown keys");
        }
    }

    #[test]
    fn test_translate_active_locale() {
        let t = Translator::new("el");
        assert_eq!(t.code(), "el");
        assert_eq!(t.t("delete.confirm"), "Διαγραφή ραντεβού;");
    }

    #[test]
    fn test_missing_key_falls_back_to_default_then_key() {
        let active = HashMap::from([("list.title".to_string(), "Ραντεβού".to_string())]);
        let fallback = HashMap::from([
            ("list.title".to_string(), "Appointments".to_string()),
            ("list.empty".to_string(), "No appointments found".to_string()),
        ]);
        let t = Translator::with_bundles("el".to_string(), active, fallback);

        assert_eq!(t.t("list.title"), "Ραντεβού");
        assert_eq!(t.t("list.empty"), "No appointments found");
        assert_eq!(t.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_bundles_cover_every_default_key() {
        let en = load_bundle(DEFAULT_LOCALE);
        for code in supported_locales() {
            let bundle = load_bundle(code);
            let missing: Vec<_> = en.keys().filter(|k| !bundle.contains_key(*k)).collect();
            assert!(missing.is_empty(), "bundle {code} lacks {missing:?}");
        }
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        let t = Translator::new("fr");
        assert_eq!(t.code(), "en");
        assert_eq!(t.t("error.name_required"), "Name is required");
    }

    #[test]
    fn test_locale_persistence() {
        let mut storage = MemoryStorage::new();
        assert_eq!(load_locale(&storage), None);

        save_locale(&mut storage, "el").unwrap();
        assert_eq!(load_locale(&storage).as_deref(), Some("el"));

        assert!(matches!(
            save_locale(&mut storage, "xx"),
            Err(BookingError::UnsupportedLocale(_))
        ));
        assert_eq!(load_locale(&storage).as_deref(), Some("el"));
    }

    #[test]
    fn test_malformed_locale_entry_is_unset() {
        let mut storage = MemoryStorage::new();
        storage.set(LANG_KEY, "el").unwrap();
        assert_eq!(load_locale(&storage), None);
    }

    #[test]
    fn test_resolve_locale_precedence() {
        assert_eq!(resolve_locale(Some("el"), Some("en".into()), Some("en")), "el");
        assert_eq!(resolve_locale(None, Some("el".into()), Some("en")), "el");
        assert_eq!(resolve_locale(None, None, Some("el")), "el");
        assert_eq!(resolve_locale(None, None, None), "en");
    }
}
