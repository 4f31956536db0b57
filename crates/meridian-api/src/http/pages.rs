#![allow(clippy::unused_async)]

//! Localized page views.
//!
//! Handlers are thin adapters: parse the path, resolve through the content
//! resolver, and project the borrowed view into a serializable shape. Every
//! view carries alternate-language links for the same path.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{Json, extract::Path, extract::State};
use meridian_catalog::Locale;
use meridian_content::{
    ContactContent, DimensionSelection, HomeContent, IndustryContent, MarketContent,
    SolutionContent,
};
use serde::Serialize;

use crate::http::errors::ApiError;
use crate::state::ApiState;

/// Link to the same path under another locale.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct AlternateLink {
    pub(crate) locale: &'static str,
    pub(crate) display_name: &'static str,
    pub(crate) href: String,
}

/// Identifier plus localized display name.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub(crate) struct EntryRef {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
}

/// A selected dictionary entry inlined into a view.
#[derive(Debug, Serialize)]
pub(crate) struct SelectedEntry<T: Serialize + 'static> {
    pub(crate) id: &'static str,
    #[serde(flatten)]
    pub(crate) content: &'static T,
}

#[derive(Serialize)]
pub(crate) struct HomeView {
    pub(crate) locale: Locale,
    pub(crate) fallback: bool,
    pub(crate) common: &'static BTreeMap<String, String>,
    pub(crate) navigation: &'static BTreeMap<String, String>,
    pub(crate) home: &'static HomeContent,
    pub(crate) alternates: Vec<AlternateLink>,
}

#[derive(Serialize)]
pub(crate) struct SolutionsIndexView {
    pub(crate) locale: Locale,
    pub(crate) fallback: bool,
    pub(crate) solutions: Vec<SolutionSummary>,
    pub(crate) alternates: Vec<AlternateLink>,
}

#[derive(Serialize)]
pub(crate) struct SolutionSummary {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) subtitle: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SolutionDetailView {
    pub(crate) locale: Locale,
    pub(crate) fallback: bool,
    pub(crate) solution: SelectedEntry<SolutionContent>,
    /// Industries this solution is offered in, with localized names.
    pub(crate) industries: Vec<EntryRef>,
    pub(crate) alternates: Vec<AlternateLink>,
}

#[derive(Serialize)]
pub(crate) struct IndustriesIndexView {
    pub(crate) locale: Locale,
    pub(crate) fallback: bool,
    pub(crate) industries: Vec<EntryRef>,
    pub(crate) alternates: Vec<AlternateLink>,
}

#[derive(Serialize)]
pub(crate) struct IndustryDetailView {
    pub(crate) locale: Locale,
    pub(crate) fallback: bool,
    pub(crate) industry: SelectedEntry<IndustryContent>,
    /// Solutions offered in this industry, with localized names.
    pub(crate) solutions: Vec<EntryRef>,
    pub(crate) alternates: Vec<AlternateLink>,
}

#[derive(Serialize)]
pub(crate) struct MarketsIndexView {
    pub(crate) locale: Locale,
    pub(crate) fallback: bool,
    pub(crate) markets: Vec<MarketSummary>,
    pub(crate) alternates: Vec<AlternateLink>,
}

#[derive(Serialize)]
pub(crate) struct MarketSummary {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PageView {
    pub(crate) locale: Locale,
    pub(crate) fallback: bool,
    pub(crate) solution: SelectedEntry<SolutionContent>,
    pub(crate) industry: SelectedEntry<IndustryContent>,
    pub(crate) market: SelectedEntry<MarketContent>,
    pub(crate) alternates: Vec<AlternateLink>,
}

#[derive(Serialize)]
pub(crate) struct ContactView {
    pub(crate) locale: Locale,
    pub(crate) fallback: bool,
    pub(crate) contact: &'static ContactContent,
    /// Options offered by the form selects.
    pub(crate) solutions: Vec<EntryRef>,
    pub(crate) industries: Vec<EntryRef>,
    pub(crate) markets: Vec<EntryRef>,
    pub(crate) alternates: Vec<AlternateLink>,
}

/// Alternate-language links for the path suffix after the locale segment.
pub(crate) fn alternate_links(suffix: &str) -> Vec<AlternateLink> {
    Locale::ALL
        .iter()
        .map(|locale| AlternateLink {
            locale: locale.as_str(),
            display_name: locale.display_name(),
            href: format!("/{locale}{suffix}"),
        })
        .collect()
}

fn parse_locale(tag: &str) -> Result<Locale, ApiError> {
    Locale::from_tag(tag).ok_or_else(|| ApiError::not_found("no content at this path"))
}

pub(crate) async fn home(
    State(state): State<Arc<ApiState>>,
    Path(locale): Path<String>,
) -> Result<Json<HomeView>, ApiError> {
    let locale = parse_locale(&locale)?;
    let view = state.resolve_view(locale, &DimensionSelection::none())?;
    Ok(Json(HomeView {
        locale,
        fallback: view.fallback,
        common: &view.dictionary.common,
        navigation: &view.dictionary.navigation,
        home: &view.dictionary.home,
        alternates: alternate_links(""),
    }))
}

pub(crate) async fn solutions_index(
    State(state): State<Arc<ApiState>>,
    Path(locale): Path<String>,
) -> Result<Json<SolutionsIndexView>, ApiError> {
    let locale = parse_locale(&locale)?;
    let view = state.resolve_view(locale, &DimensionSelection::none())?;
    let solutions = view
        .dictionary
        .solutions
        .iter()
        .map(|(id, content)| SolutionSummary {
            id: id.as_str(),
            name: content.name.as_str(),
            subtitle: content.subtitle.as_str(),
        })
        .collect();
    Ok(Json(SolutionsIndexView {
        locale,
        fallback: view.fallback,
        solutions,
        alternates: alternate_links("/solutions"),
    }))
}

pub(crate) async fn solution_detail(
    State(state): State<Arc<ApiState>>,
    Path((locale, solution)): Path<(String, String)>,
) -> Result<Json<SolutionDetailView>, ApiError> {
    let locale = parse_locale(&locale)?;
    let view = state.resolve_view(locale, &DimensionSelection::solution(&solution))?;
    let selected = view.solution.ok_or_else(|| {
        ApiError::internal("resolved view is missing its solution")
    })?;
    let industries = state
        .resolver
        .catalog()
        .industries_for_solution(selected.id)
        .iter()
        .copied()
        .filter_map(|id| {
            view.dictionary.industries.get(id).map(|content| EntryRef {
                id,
                name: content.name.as_str(),
            })
        })
        .collect();
    Ok(Json(SolutionDetailView {
        locale,
        fallback: view.fallback,
        solution: SelectedEntry {
            id: selected.id,
            content: selected.content,
        },
        industries,
        alternates: alternate_links(&format!("/solutions/{}", selected.id)),
    }))
}

pub(crate) async fn industries_index(
    State(state): State<Arc<ApiState>>,
    Path(locale): Path<String>,
) -> Result<Json<IndustriesIndexView>, ApiError> {
    let locale = parse_locale(&locale)?;
    let view = state.resolve_view(locale, &DimensionSelection::none())?;
    let industries = view
        .dictionary
        .industries
        .iter()
        .map(|(id, content)| EntryRef {
            id: id.as_str(),
            name: content.name.as_str(),
        })
        .collect();
    Ok(Json(IndustriesIndexView {
        locale,
        fallback: view.fallback,
        industries,
        alternates: alternate_links("/industries"),
    }))
}

pub(crate) async fn industry_detail(
    State(state): State<Arc<ApiState>>,
    Path((locale, industry)): Path<(String, String)>,
) -> Result<Json<IndustryDetailView>, ApiError> {
    let locale = parse_locale(&locale)?;
    let view = state.resolve_view(locale, &DimensionSelection::industry(&industry))?;
    let selected = view.industry.ok_or_else(|| {
        ApiError::internal("resolved view is missing its industry")
    })?;
    let solutions = state
        .resolver
        .catalog()
        .solutions_for_industry(selected.id)
        .iter()
        .copied()
        .filter_map(|id| {
            view.dictionary.solutions.get(id).map(|content| EntryRef {
                id,
                name: content.name.as_str(),
            })
        })
        .collect();
    Ok(Json(IndustryDetailView {
        locale,
        fallback: view.fallback,
        industry: SelectedEntry {
            id: selected.id,
            content: selected.content,
        },
        solutions,
        alternates: alternate_links(&format!("/industries/{}", selected.id)),
    }))
}

pub(crate) async fn markets_index(
    State(state): State<Arc<ApiState>>,
    Path(locale): Path<String>,
) -> Result<Json<MarketsIndexView>, ApiError> {
    let locale = parse_locale(&locale)?;
    let view = state.resolve_view(locale, &DimensionSelection::none())?;
    let markets = view
        .dictionary
        .markets
        .iter()
        .map(|(id, content)| MarketSummary {
            id: id.as_str(),
            name: content.name.as_str(),
            description: content.description.as_str(),
        })
        .collect();
    Ok(Json(MarketsIndexView {
        locale,
        fallback: view.fallback,
        markets,
        alternates: alternate_links("/markets"),
    }))
}

pub(crate) async fn page_detail(
    State(state): State<Arc<ApiState>>,
    Path((locale, solution, industry, market)): Path<(String, String, String, String)>,
) -> Result<Json<PageView>, ApiError> {
    let locale = parse_locale(&locale)?;
    let dims = DimensionSelection::combined(&solution, &industry, &market);
    let view = state.resolve_view(locale, &dims)?;
    let (solution, industry, market) = match (view.solution, view.industry, view.market) {
        (Some(solution), Some(industry), Some(market)) => (solution, industry, market),
        _ => return Err(ApiError::internal("resolved view is missing a dimension")),
    };
    let suffix = format!("/solutions/{}/{}/{}", solution.id, industry.id, market.id);
    Ok(Json(PageView {
        locale,
        fallback: view.fallback,
        solution: SelectedEntry {
            id: solution.id,
            content: solution.content,
        },
        industry: SelectedEntry {
            id: industry.id,
            content: industry.content,
        },
        market: SelectedEntry {
            id: market.id,
            content: market.content,
        },
        alternates: alternate_links(&suffix),
    }))
}

pub(crate) async fn contact_page(
    State(state): State<Arc<ApiState>>,
    Path(locale): Path<String>,
) -> Result<Json<ContactView>, ApiError> {
    let locale = parse_locale(&locale)?;
    let view = state.resolve_view(locale, &DimensionSelection::none())?;
    let solutions = view
        .dictionary
        .solutions
        .iter()
        .map(|(id, content)| EntryRef {
            id: id.as_str(),
            name: content.name.as_str(),
        })
        .collect();
    let industries = view
        .dictionary
        .industries
        .iter()
        .map(|(id, content)| EntryRef {
            id: id.as_str(),
            name: content.name.as_str(),
        })
        .collect();
    let markets = view
        .dictionary
        .markets
        .iter()
        .map(|(id, content)| EntryRef {
            id: id.as_str(),
            name: content.name.as_str(),
        })
        .collect();
    Ok(Json(ContactView {
        locale,
        fallback: view.fallback,
        contact: &view.dictionary.contact,
        solutions,
        industries,
        markets,
        alternates: alternate_links("/contact"),
    }))
}

#[cfg(test)]
mod tests {
    use meridian_catalog::CatalogGraph;
    use meridian_content::ContentResolver;
    use meridian_telemetry::Metrics;

    use crate::http::contact::LoggingSink;

    use super::*;

    fn state() -> Arc<ApiState> {
        let resolver = ContentResolver::new(Arc::new(CatalogGraph::new().expect("catalog")));
        Arc::new(ApiState::new(
            resolver,
            Metrics::new().expect("metrics"),
            Arc::new(LoggingSink),
        ))
    }

    #[tokio::test]
    async fn home_view_carries_all_alternates() {
        let Json(view) = home(State(state()), Path("fr".to_string()))
            .await
            .expect("home view");
        assert_eq!(view.locale, Locale::Fr);
        assert!(!view.fallback);
        assert_eq!(view.alternates.len(), Locale::ALL.len());
        assert!(view.alternates.iter().any(|alt| alt.href == "/ja"));
    }

    #[tokio::test]
    async fn solution_detail_joins_compatible_industries() {
        let Json(view) = solution_detail(
            State(state()),
            Path(("en-US".to_string(), "orderlyai".to_string())),
        )
        .await
        .expect("solution view");
        assert_eq!(view.solution.id, "orderlyai");
        let ids: Vec<&str> = view.industries.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec!["restaurants"]);
    }

    #[tokio::test]
    async fn unknown_solution_is_a_problem_404() {
        let err = solution_detail(
            State(state()),
            Path(("en-US".to_string(), "fizzbuzzai".to_string())),
        )
        .await
        .expect_err("unknown solution");
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn incompatible_triple_is_a_problem_404() {
        let err = page_detail(
            State(state()),
            Path((
                "en-US".to_string(),
                "orderlyai".to_string(),
                "hospitality".to_string(),
                "canada".to_string(),
            )),
        )
        .await
        .expect_err("incompatible pair");
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn compatible_triple_resolves_with_localized_market() {
        let Json(view) = page_detail(
            State(state()),
            Path((
                "de".to_string(),
                "scheduleai".to_string(),
                "education".to_string(),
                "germany".to_string(),
            )),
        )
        .await
        .expect("page view");
        assert_eq!(view.market.content.name, "Deutschland");
        assert!(
            view.alternates
                .iter()
                .any(|alt| alt.href == "/pa/solutions/scheduleai/education/germany")
        );
    }

    #[tokio::test]
    async fn markets_index_respects_per_locale_presence() {
        let Json(view) = markets_index(State(state()), Path("pa".to_string()))
            .await
            .expect("markets view");
        assert!(!view.markets.iter().any(|market| market.id == "south-korea"));

        let Json(view) = markets_index(State(state()), Path("en-US".to_string()))
            .await
            .expect("markets view");
        assert!(view.markets.iter().any(|market| market.id == "south-korea"));
    }

    #[tokio::test]
    async fn contact_page_lists_form_options() {
        let Json(view) = contact_page(State(state()), Path("es".to_string()))
            .await
            .expect("contact view");
        assert_eq!(view.solutions.len(), 25);
        assert_eq!(view.industries.len(), 19);
        assert!(view.contact.form.contains_key("email"));
    }
}
