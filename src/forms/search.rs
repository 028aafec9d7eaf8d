//! Search form submitted from the index page.

use crate::domain::query::{INCLUDE_GOV_FIELD, QUERY_FIELD, SearchQuery};
use crate::forms::FormError;

/// Raw `(name, value)` pairs of a submitted search form, in submission order.
#[derive(Debug, Default)]
pub struct SearchForm {
    pub fields: Vec<(String, String)>,
}

impl SearchForm {
    /// Parses an `application/x-www-form-urlencoded` body.
    pub fn parse(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes::<Vec<(String, String)>>(body)
            .map(|fields| Self { fields })
            .map_err(|err| FormError::Malformed(err.to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for SearchForm
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<SearchForm> for SearchQuery {
    /// Coerces each submitted field; later pairs overwrite earlier ones.
    fn from(form: SearchForm) -> Self {
        let mut query = SearchQuery::default();
        for (name, value) in &form.fields {
            apply_field(&mut query, name, value);
        }
        query
    }
}

fn apply_field(query: &mut SearchQuery, name: &str, raw: &str) {
    if raw.trim().is_empty() {
        return;
    }

    if let Some(slot) = query.list_slot(name) {
        let values = split_list(raw);
        if !values.is_empty() {
            *slot = Some(values);
        }
    } else if let Some(slot) = query.integer_slot(name) {
        if let Some(number) = parse_leading_integer(raw) {
            *slot = Some(number);
        }
    } else if name == INCLUDE_GOV_FIELD {
        query.include_gov = Some(raw == "true");
    } else if name == QUERY_FIELD {
        query.query = Some(raw.trim().to_string());
    } else {
        query.extra.insert(name.to_string(), raw.trim().to_string());
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads an optionally signed run of leading decimal digits, ignoring
/// leading whitespace and anything after the digits.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    let number = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    number.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(pairs: &[(&str, &str)]) -> SearchQuery {
        pairs.iter().copied().collect::<SearchForm>().into()
    }

    #[test]
    fn blank_values_are_omitted() {
        let query = normalize(&[
            ("query", "   "),
            ("subject", ""),
            ("min_amt", " "),
            ("include_gov", "\t"),
            ("state", ""),
        ]);

        assert!(query.is_empty());
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
    }

    #[test]
    fn multi_value_fields_split_and_trim() {
        let query = normalize(&[("subject", "a, b ,,c")]);
        assert_eq!(
            query.subject,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn multi_value_field_with_only_commas_is_omitted() {
        let query = normalize(&[("year", " , ,, ")]);
        assert_eq!(query.year, None);
        assert!(query.is_empty());
    }

    #[test]
    fn integer_fields_parse_or_drop() {
        let query = normalize(&[("min_amt", "42"), ("max_amt", "abc")]);
        assert_eq!(query.min_amt, Some(42));
        assert_eq!(query.max_amt, None);
    }

    #[test]
    fn integer_fields_read_leading_digits() {
        assert_eq!(parse_leading_integer("  1500 dollars"), Some(1500));
        assert_eq!(parse_leading_integer("-25"), Some(-25));
        assert_eq!(parse_leading_integer("+7"), Some(7));
        assert_eq!(parse_leading_integer("3.9"), Some(3));
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer("$100"), None);
        assert_eq!(parse_leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn include_gov_is_exact_match() {
        assert_eq!(normalize(&[("include_gov", "true")]).include_gov, Some(true));
        assert_eq!(normalize(&[("include_gov", "on")]).include_gov, Some(false));
        assert_eq!(normalize(&[("include_gov", "TRUE")]).include_gov, Some(false));
        assert_eq!(normalize(&[("include_gov", " true")]).include_gov, Some(false));
    }

    #[test]
    fn other_fields_are_trimmed() {
        let query = normalize(&[("query", "  health  "), ("state", " WA ")]);
        assert_eq!(query.query.as_deref(), Some("health"));
        assert_eq!(query.extra.get("state").map(String::as_str), Some("WA"));
    }

    #[test]
    fn later_values_overwrite_earlier_ones() {
        let query = normalize(&[
            ("query", "first"),
            ("query", "second"),
            ("min_amt", "10"),
            ("min_amt", "oops"),
        ]);
        assert_eq!(query.query.as_deref(), Some("second"));
        assert_eq!(query.min_amt, Some(10));
    }

    #[test]
    fn parses_urlencoded_body_in_order() {
        let form = SearchForm::parse(b"query=arts+council&subject=music%2C+dance&include_gov=true")
            .unwrap();
        assert_eq!(form.fields[0], ("query".to_string(), "arts council".to_string()));

        let query = SearchQuery::from(form);
        assert_eq!(query.query.as_deref(), Some("arts council"));
        assert_eq!(
            query.subject,
            Some(vec!["music".to_string(), "dance".to_string()])
        );
        assert_eq!(query.include_gov, Some(true));
    }
}
