//! Dictionary loading with default-locale fallback.
//!
//! # Design
//!
//! - Bundles are embedded with `include_str!` and parsed against the typed
//!   schema on first use; a parsed [`Dictionary`] is cached per locale for the
//!   process lifetime and never invalidated (content is build-time static).
//! - Fallback is an explicit two-step pipeline (try the requested locale,
//!   then the default) returning a tagged result so callers and tests can
//!   tell which branch fired.
//! - First loads may race; the parse is idempotent and first-writer-wins on
//!   the cache slot, which is safe because every load of a locale produces
//!   identical content.

use std::sync::OnceLock;

use meridian_catalog::Locale;
use tracing::error;

use crate::error::DictionaryError;
use crate::schema::Dictionary;

const LOCALE_COUNT: usize = Locale::ALL.len();

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: OnceLock<Dictionary> = OnceLock::new();
static CACHE: [OnceLock<Dictionary>; LOCALE_COUNT] = [EMPTY_SLOT; LOCALE_COUNT];

/// A dictionary together with the branch that produced it.
#[derive(Debug, Clone, Copy)]
pub struct LoadedDictionary {
    /// The resolved bundle (the requested locale's, or the default's).
    pub dictionary: &'static Dictionary,
    /// True when the requested locale's bundle failed and the default
    /// locale's bundle was served instead.
    pub fallback: bool,
}

fn raw_bundle(locale: Locale) -> &'static str {
    match locale {
        Locale::EnUs => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/en-US.json")),
        Locale::Fr => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/fr.json")),
        Locale::De => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/de.json")),
        Locale::Es => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/es.json")),
        Locale::Pt => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/pt.json")),
        Locale::Hi => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/hi.json")),
        Locale::Ja => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/ja.json")),
        Locale::Pa => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/pa.json")),
    }
}

/// Load and cache the bundle registered for exactly this locale, without
/// fallback.
///
/// # Errors
///
/// Returns [`DictionaryError::Parse`] when the embedded bundle does not
/// conform to the schema.
pub fn try_load(locale: Locale) -> Result<&'static Dictionary, DictionaryError> {
    let slot = &CACHE[locale as usize];
    if let Some(dictionary) = slot.get() {
        return Ok(dictionary);
    }
    let parsed = serde_json::from_str::<Dictionary>(raw_bundle(locale))
        .map_err(|source| DictionaryError::Parse { locale, source })?;
    Ok(slot.get_or_init(|| parsed))
}

/// Load the bundle for `locale`, falling back to the default locale's bundle
/// exactly once on failure.
///
/// # Errors
///
/// Returns [`DictionaryError::DefaultUnavailable`] when the default bundle
/// itself fails to load, a fatal configuration error callers must treat as
/// "do not serve".
pub fn load(locale: Locale) -> Result<LoadedDictionary, DictionaryError> {
    load_with(locale, try_load)
}

fn load_with<F>(locale: Locale, try_load: F) -> Result<LoadedDictionary, DictionaryError>
where
    F: Fn(Locale) -> Result<&'static Dictionary, DictionaryError>,
{
    match try_load(locale) {
        Ok(dictionary) => Ok(LoadedDictionary {
            dictionary,
            fallback: false,
        }),
        Err(err) if locale == Locale::DEFAULT => Err(DictionaryError::DefaultUnavailable {
            source: Box::new(err),
        }),
        Err(err) => {
            error!(
                error = %err,
                locale = %locale,
                "dictionary bundle failed to load; falling back to default locale"
            );
            match try_load(Locale::DEFAULT) {
                Ok(dictionary) => Ok(LoadedDictionary {
                    dictionary,
                    fallback: true,
                }),
                Err(default_err) => Err(DictionaryError::DefaultUnavailable {
                    source: Box::new(default_err),
                }),
            }
        }
    }
}
