use crate::domain::funder::SearchOutcome;
use crate::domain::query::SearchQuery;
use crate::forms::search::SearchForm;
use crate::render::ResultsRenderer;
use crate::services::ServiceResult;

/// Anything that can answer a normalized search query.
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    async fn search(&self, query: &SearchQuery) -> SearchOutcome;
}

/// Normalizes the submitted form, runs one search and renders the outcome
/// as the `#results` fragment.
pub async fn search_funders<B>(
    backend: &B,
    renderer: &ResultsRenderer,
    form: SearchForm,
) -> ServiceResult<String>
where
    B: SearchBackend,
{
    let query = SearchQuery::from(form);
    let outcome = backend.search(&query).await;

    match &outcome {
        Ok(results) => log::info!(
            "Search returned {} of {} funders",
            results.funders.len(),
            results.total()
        ),
        Err(err) => log::error!("Search failed: {err}"),
    }

    let html = renderer.render_outcome(&outcome).map_err(|err| {
        log::error!("Failed to render search results: {err}");
        err
    })?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::funder::{ErrorPayload, FunderResult, SearchError, SearchResults};
    use crate::render::CardLayout;

    struct StubBackend {
        reply: fn() -> SearchOutcome,
        seen: RefCell<Vec<SearchQuery>>,
    }

    impl StubBackend {
        fn new(reply: fn() -> SearchOutcome) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl SearchBackend for StubBackend {
        async fn search(&self, query: &SearchQuery) -> SearchOutcome {
            self.seen.borrow_mut().push(query.clone());
            (self.reply)()
        }
    }

    fn renderer() -> ResultsRenderer {
        ResultsRenderer::new(CardLayout::Standard).unwrap()
    }

    #[actix_web::test]
    async fn passes_normalized_query_to_backend() {
        let backend = StubBackend::new(|| Ok(SearchResults::default()));
        let form: SearchForm = [("query", " arts "), ("min_amt", "abc"), ("year", "2020, 2021")]
            .into_iter()
            .collect();

        let html = search_funders(&backend, &renderer(), form).await.unwrap();

        assert!(html.contains("No funders found"));
        let seen = backend.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].query.as_deref(), Some("arts"));
        assert_eq!(seen[0].min_amt, None);
        assert_eq!(
            seen[0].year,
            Some(vec!["2020".to_string(), "2021".to_string()])
        );
    }

    #[actix_web::test]
    async fn renders_results_from_backend() {
        let backend = StubBackend::new(|| {
            Ok(SearchResults {
                funders: vec![FunderResult {
                    funder_name: Some("Gates Foundation".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            })
        });

        let html = search_funders(&backend, &renderer(), SearchForm::default())
            .await
            .unwrap();

        assert!(html.contains("Gates Foundation"));
        assert!(html.contains("Found 1 Funders"));
    }

    #[actix_web::test]
    async fn renders_endpoint_error_without_failing() {
        let backend = StubBackend::new(|| {
            Err(SearchError::Http {
                status: 400,
                payload: ErrorPayload {
                    error: Some("Bad query".to_string()),
                    details: None,
                },
            })
        });

        let html = search_funders(&backend, &renderer(), SearchForm::default())
            .await
            .unwrap();

        assert!(html.contains("Bad query"));
    }
}
