//! HTML fragments swapped into the `#results` container.
//!
//! Templates are compiled into the binary with autoescaping switched off;
//! every interpolation in them goes through the `escape_html` filter.

use std::collections::HashMap;

use serde::Deserialize;
use tera::{Context, Tera, Value};

use crate::domain::funder::{SearchError, SearchOutcome, SearchResults};
use crate::dto::results::ResultsView;
use crate::render::format::escape_html;

pub mod format;

const TEMPLATES: [(&str, &str); 4] = [
    ("results/loading.html", include_str!("templates/loading.html")),
    ("results/empty.html", include_str!("templates/empty.html")),
    ("results/list.html", include_str!("templates/list.html")),
    ("results/error.html", include_str!("templates/error.html")),
];

/// Card markup used for each funder.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardLayout {
    /// EIN, location, grant count, plain amount and profile link.
    #[default]
    Standard,
    /// Location, website, currency-style giving and the generated summary.
    Summary,
}

impl CardLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            CardLayout::Standard => "standard",
            CardLayout::Summary => "summary",
        }
    }
}

fn escape_html_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let escaped = match value {
        Value::Null => String::new(),
        Value::String(text) => escape_html(text),
        other => escape_html(&other.to_string()),
    };
    Ok(Value::String(escaped))
}

/// Renders search outcomes into HTML fragments.
#[derive(Clone, Debug)]
pub struct ResultsRenderer {
    tera: Tera,
    layout: CardLayout,
}

impl ResultsRenderer {
    pub fn new(layout: CardLayout) -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(TEMPLATES)?;
        tera.register_filter("escape_html", escape_html_filter);
        Ok(Self { tera, layout })
    }

    /// Indeterminate spinner shown while a search is in flight.
    pub fn render_loading(&self) -> tera::Result<String> {
        self.tera.render("results/loading.html", &Context::new())
    }

    pub fn render_results(&self, results: &SearchResults) -> tera::Result<String> {
        if results.funders.is_empty() {
            return self.tera.render("results/empty.html", &Context::new());
        }

        let mut context = Context::new();
        context.insert("results", &ResultsView::from(results));
        context.insert("layout", self.layout.as_str());
        self.tera.render("results/list.html", &context)
    }

    pub fn render_error(&self, error: &SearchError) -> tera::Result<String> {
        let mut context = Context::new();
        match error {
            SearchError::Http { payload, .. } => {
                context.insert("title", payload.message());
                context.insert("details", &payload.details);
                context.insert("hint", &true);
            }
            SearchError::Transport(description) => {
                context.insert("title", "Failed to fetch results");
                context.insert("details", &format!("Error: {description}"));
                context.insert("hint", &false);
            }
        }
        self.tera.render("results/error.html", &context)
    }

    pub fn render_outcome(&self, outcome: &SearchOutcome) -> tera::Result<String> {
        match outcome {
            Ok(results) => self.render_results(results),
            Err(error) => self.render_error(error),
        }
    }
}
