//! Normalized search filters sent to the search endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Form field that toggles government funders.
pub const INCLUDE_GOV_FIELD: &str = "include_gov";
/// Free-text search field.
pub const QUERY_FIELD: &str = "query";

/// Query object posted to `/search_grants`.
///
/// Absent fields are omitted from the serialized object; absence means
/// "no filter".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amt: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amt: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_gov: Option<bool>,
    /// Any other text filter submitted with the form.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SearchQuery {
    /// Mutable slot for a multi-value field, `None` if `name` is not one.
    pub fn list_slot(&mut self, name: &str) -> Option<&mut Option<Vec<String>>> {
        match name {
            "year" => Some(&mut self.year),
            "subject" => Some(&mut self.subject),
            "population" => Some(&mut self.population),
            "support" => Some(&mut self.support),
            "transaction" => Some(&mut self.transaction),
            _ => None,
        }
    }

    /// Mutable slot for an integer field, `None` if `name` is not one.
    pub fn integer_slot(&mut self, name: &str) -> Option<&mut Option<i64>> {
        match name {
            "min_amt" => Some(&mut self.min_amt),
            "max_amt" => Some(&mut self.max_amt),
            _ => None,
        }
    }

    /// Number of filters present.
    pub fn len(&self) -> usize {
        let lists = [
            &self.year,
            &self.subject,
            &self.population,
            &self.support,
            &self.transaction,
        ]
        .into_iter()
        .filter(|list| list.is_some())
        .count();

        lists
            + usize::from(self.query.is_some())
            + usize::from(self.min_amt.is_some())
            + usize::from(self.max_amt.is_some())
            + usize::from(self.include_gov.is_some())
            + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
