//! Locale registry: the closed set of locales the site publishes in.
//!
//! The set is fixed at compile time; membership testing, the default locale,
//! and the declaration order (which drives alternate-language link generation)
//! are the entire contract.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A locale the site publishes content in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    /// `en-US`, the default locale.
    EnUs,
    /// `fr`
    Fr,
    /// `de`
    De,
    /// `es`
    Es,
    /// `pt`
    Pt,
    /// `hi`
    Hi,
    /// `ja`
    Ja,
    /// `pa`
    Pa,
}

impl Locale {
    /// Every registered locale, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::EnUs,
        Self::Fr,
        Self::De,
        Self::Es,
        Self::Pt,
        Self::Hi,
        Self::Ja,
        Self::Pa,
    ];

    /// The locale unprefixed requests are redirected to.
    pub const DEFAULT: Self = Self::EnUs;

    /// The locale's path-segment tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Es => "es",
            Self::Pt => "pt",
            Self::Hi => "hi",
            Self::Ja => "ja",
            Self::Pa => "pa",
        }
    }

    /// Human-readable display name for language pickers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EnUs => "English (US)",
            Self::Fr => "French",
            Self::De => "German",
            Self::Es => "Spanish",
            Self::Pt => "Portuguese",
            Self::Hi => "Hindi",
            Self::Ja => "Japanese",
            Self::Pa => "Punjabi",
        }
    }

    /// Parse a path segment into a registered locale. Matching is exact and
    /// case-sensitive: `/EN-us/...` is an ordinary content segment, not a
    /// locale.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|locale| locale.as_str() == tag)
    }

    /// Membership test mirroring [`Self::from_tag`].
    #[must_use]
    pub fn is_supported(tag: &str) -> bool {
        Self::from_tag(tag).is_some()
    }
}

impl Display for Locale {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::from_tag(&tag)
            .ok_or_else(|| de::Error::custom(format!("unregistered locale tag '{tag}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_is_declaration_order() {
        let tags: Vec<&str> = Locale::ALL.iter().map(|locale| locale.as_str()).collect();
        assert_eq!(
            tags,
            ["en-US", "fr", "de", "es", "pt", "hi", "ja", "pa"]
        );
    }

    #[test]
    fn default_locale_is_en_us() {
        assert_eq!(Locale::DEFAULT, Locale::EnUs);
        assert_eq!(Locale::DEFAULT.as_str(), "en-US");
    }

    #[test]
    fn from_tag_is_exact_match() {
        assert_eq!(Locale::from_tag("fr"), Some(Locale::Fr));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::EnUs));
        assert_eq!(Locale::from_tag("en-us"), None);
        assert_eq!(Locale::from_tag("xx"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn serde_round_trips_through_tag() {
        let serialized = serde_json::to_string(&Locale::Ja).expect("serialize");
        assert_eq!(serialized, "\"ja\"");
        let parsed: Locale = serde_json::from_str("\"pt\"").expect("deserialize");
        assert_eq!(parsed, Locale::Pt);
        assert!(serde_json::from_str::<Locale>("\"zz\"").is_err());
    }
}
