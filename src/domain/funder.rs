//! Search results and failures as returned by the search endpoint.
//!
//! Decoding is lenient: `null` sections count as empty, display fields
//! accept any JSON scalar and counts accept any JSON number.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Fallback shown when an error payload carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text shown as-is; numbers and booleans are stringified, arrays and
/// objects are dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => Some(text),
        Some(Scalar::Integer(number)) => Some(number.to_string()),
        Some(Scalar::Unsigned(number)) => Some(number.to_string()),
        Some(Scalar::Float(number)) => Some(number.to_string()),
        Some(Scalar::Flag(flag)) => Some(flag.to_string()),
        Some(Scalar::Other(_)) | None => None,
    })
}

/// Any JSON number, or a string holding one.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Integer(number)) => Some(number as f64),
        Some(Scalar::Unsigned(number)) => Some(number as f64),
        Some(Scalar::Float(number)) => Some(number),
        Some(Scalar::Text(text)) => text.trim().parse().ok(),
        Some(Scalar::Flag(_) | Scalar::Other(_)) | None => None,
    })
}

/// A single funder record. Every field may be missing or `null`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FunderResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub funder_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ein: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub funder_city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub funder_state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub funder_country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub funder_website: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub funder_profile_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub grant_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount_usd: Option<f64>,
    /// Generated description of the funder.
    #[serde(default, deserialize_with = "lenient_text")]
    pub ai_summary: Option<String>,
    /// Label describing where `ai_summary` came from.
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary_source: Option<String>,
}

impl FunderResult {
    /// City, state and country that are present and non-empty, in that order.
    pub fn location_parts(&self) -> Vec<&str> {
        [&self.funder_city, &self.funder_state, &self.funder_country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchMeta {
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_hits: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub num_pages: Option<f64>,
}

/// Successful reply: `{funders: [...], meta: {total_hits}}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub funders: Vec<FunderResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: SearchMeta,
}

impl SearchResults {
    /// Total hit count, falling back to the number of returned funders when
    /// the endpoint reports none.
    pub fn total(&self) -> f64 {
        match self.meta.total_hits {
            Some(total) if total > 0.0 => total,
            _ => self.funders.len() as f64,
        }
    }

    /// Whether the endpoint reported more hits than were returned.
    pub fn is_truncated(&self) -> bool {
        self.meta
            .total_hits
            .is_some_and(|total| total > self.funders.len() as f64)
    }
}

/// Error reply: `{error, details?}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub details: Option<String>,
}

impl ErrorPayload {
    pub fn message(&self) -> &str {
        self.error
            .as_deref()
            .filter(|msg| !msg.is_empty())
            .unwrap_or(UNKNOWN_ERROR)
    }
}

/// Failures of a single search round trip.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The endpoint answered with a non-success status.
    #[error("search endpoint returned {status}: {}", payload.message())]
    Http { status: u16, payload: ErrorPayload },

    /// No usable reply was obtained.
    #[error("{0}")]
    Transport(String),
}

pub type SearchOutcome = Result<SearchResults, SearchError>;
