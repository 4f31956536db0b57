//! Typed schema for the per-locale content bundles.
//!
//! Every locale's bundle deserializes into the same shape; schema conformance
//! is checked once at load time so a missing key fails the load rather than a
//! page render. `deny_unknown_fields` keeps the bundles honest in the other
//! direction: a typo'd section is a load failure, not silently ignored data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One locale's complete content bundle. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dictionary {
    /// Shared strings (company name, call-to-action labels).
    pub common: BTreeMap<String, String>,
    /// Navigation labels.
    pub navigation: BTreeMap<String, String>,
    /// Home page copy.
    pub home: HomeContent,
    /// Per-solution content keyed by solution identifier.
    pub solutions: BTreeMap<String, SolutionContent>,
    /// Per-industry content keyed by industry identifier.
    pub industries: BTreeMap<String, IndustryContent>,
    /// Per-market content keyed by market identifier. Unlike the other
    /// sections, locales may omit individual markets.
    #[serde(default)]
    pub markets: BTreeMap<String, MarketContent>,
    /// Contact page copy and form labels.
    pub contact: ContactContent,
}

/// Home page sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeContent {
    /// Hero headline.
    pub hero_title: String,
    /// Hero subheadline.
    pub hero_subtitle: String,
    /// Heading over the solutions grid.
    pub solutions_title: String,
    /// Heading over the industries grid.
    pub industries_title: String,
    /// Heading over the markets grid.
    pub markets_title: String,
    /// Heading over the feature list.
    pub features_title: String,
    /// Feature blurbs keyed by feature identifier.
    pub features: BTreeMap<String, String>,
    /// Heading over the testimonials block.
    pub testimonials_title: String,
    /// Closing call-to-action headline.
    pub cta_title: String,
    /// Closing call-to-action subheadline.
    pub cta_subtitle: String,
}

/// Localized content for one solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolutionContent {
    /// Display name (brand names stay constant across locales).
    pub name: String,
    /// Short positioning line.
    pub subtitle: String,
    /// Long-form description.
    pub description: String,
    /// Ordered feature strings.
    pub features: Vec<String>,
}

/// Localized content for one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndustryContent {
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Ordered challenge strings.
    pub challenges: Vec<String>,
    /// Ordered identifiers of the solutions offered in this industry. Must
    /// mirror the catalog graph; the bootstrap cross-check enforces it.
    pub solutions: Vec<String>,
}

/// Localized content for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketContent {
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
}

/// Contact page copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactContent {
    /// Page title.
    pub title: String,
    /// Page subtitle.
    pub subtitle: String,
    /// Form labels keyed by field identifier.
    pub form: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sections_are_rejected() {
        let raw = r#"{
            "common": {}, "navigation": {},
            "home": {
                "hero_title": "", "hero_subtitle": "", "solutions_title": "",
                "industries_title": "", "markets_title": "", "features_title": "",
                "features": {}, "testimonials_title": "", "cta_title": "", "cta_subtitle": ""
            },
            "solutions": {}, "industries": {},
            "contact": { "title": "", "subtitle": "", "form": {} },
            "surprise": {}
        }"#;
        assert!(serde_json::from_str::<Dictionary>(raw).is_err());
    }

    #[test]
    fn markets_section_may_be_absent() {
        let raw = r#"{
            "common": {}, "navigation": {},
            "home": {
                "hero_title": "", "hero_subtitle": "", "solutions_title": "",
                "industries_title": "", "markets_title": "", "features_title": "",
                "features": {}, "testimonials_title": "", "cta_title": "", "cta_subtitle": ""
            },
            "solutions": {}, "industries": {},
            "contact": { "title": "", "subtitle": "", "form": {} }
        }"#;
        let parsed = serde_json::from_str::<Dictionary>(raw).expect("markets default to empty");
        assert!(parsed.markets.is_empty());
    }

    #[test]
    fn missing_required_section_fails_at_parse_time() {
        // No `contact` section: the schema check fires at load time, not in a
        // page handler.
        let raw = r#"{
            "common": {}, "navigation": {},
            "home": {
                "hero_title": "", "hero_subtitle": "", "solutions_title": "",
                "industries_title": "", "markets_title": "", "features_title": "",
                "features": {}, "testimonials_title": "", "cta_title": "", "cta_subtitle": ""
            },
            "solutions": {}, "industries": {}
        }"#;
        assert!(serde_json::from_str::<Dictionary>(raw).is_err());
    }
}
