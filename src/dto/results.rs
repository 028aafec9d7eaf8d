//! View models consumed by the result templates.
//!
//! Values are kept raw here; templates escape them at each interpolation.

use serde::Serialize;

use crate::domain::funder::{FunderResult, SearchResults};
use crate::render::format::{encode_uri_component, format_money, format_number};

pub const UNNAMED_FUNDER: &str = "Unnamed Funder";
pub const NOT_AVAILABLE: &str = "N/A";
const WEB_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// One result card.
#[derive(Debug, Serialize)]
pub struct FunderCard {
    pub name: String,
    pub ein: String,
    pub location: String,
    pub grant_count: String,
    pub amount: String,
    pub total_giving: String,
    pub profile_url: Option<String>,
    pub website_url: Option<String>,
    pub search_url: String,
    pub summary: Option<String>,
    pub summary_source: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

impl From<&FunderResult> for FunderCard {
    fn from(funder: &FunderResult) -> Self {
        let location = funder.location_parts().join(", ");
        let name = non_empty(&funder.funder_name);

        Self {
            search_url: format!(
                "{WEB_SEARCH_URL}{}",
                encode_uri_component(name.as_deref().unwrap_or_default())
            ),
            name: name.unwrap_or_else(|| UNNAMED_FUNDER.to_string()),
            ein: non_empty(&funder.ein).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            location: if location.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                location
            },
            grant_count: funder
                .grant_count
                .map_or_else(|| NOT_AVAILABLE.to_string(), format_number),
            amount: funder
                .amount_usd
                .map_or_else(|| NOT_AVAILABLE.to_string(), format_number),
            total_giving: funder
                .amount_usd
                .map_or_else(|| NOT_AVAILABLE.to_string(), format_money),
            profile_url: non_empty(&funder.funder_profile_url),
            website_url: non_empty(&funder.funder_website),
            summary: non_empty(&funder.ai_summary),
            summary_source: non_empty(&funder.summary_source),
        }
    }
}

/// Data required to render a non-empty result list.
#[derive(Debug, Serialize)]
pub struct ResultsView {
    /// Grouped total hit count for the header.
    pub total: String,
    /// Number of cards on this page.
    pub shown: usize,
    /// Grouped total for the footer, present only when results were truncated.
    pub footer_total: Option<String>,
    pub cards: Vec<FunderCard>,
}

impl From<&SearchResults> for ResultsView {
    fn from(results: &SearchResults) -> Self {
        let total = format_number(results.total());
        Self {
            footer_total: results.is_truncated().then(|| total.clone()),
            total,
            shown: results.funders.len(),
            cards: results.funders.iter().map(FunderCard::from).collect(),
        }
    }
}
