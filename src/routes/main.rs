use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use tera::{Context, Tera};

use crate::client::SearchClient;
use crate::forms::search::SearchForm;
use crate::render::ResultsRenderer;
use crate::routes::render_template;
use crate::services::search::search_funders;

/// Header htmx sets on requests it issues; such requests get the bare fragment.
pub const HX_REQUEST: &str = "HX-Request";

fn render_index(tera: &Tera, renderer: &ResultsRenderer, results: &str) -> HttpResponse {
    let loading = match renderer.render_loading() {
        Ok(loading) => loading,
        Err(err) => {
            log::error!("Failed to render loading indicator: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("loading", &loading);
    context.insert("results", results);
    render_template(tera, "main/index.html", &context)
}

#[get("/")]
pub async fn show_index(
    tera: web::Data<Tera>,
    renderer: web::Data<ResultsRenderer>,
) -> impl Responder {
    render_index(&tera, &renderer, "")
}

#[post("/search")]
pub async fn search(
    req: HttpRequest,
    body: web::Bytes,
    client: web::Data<SearchClient>,
    renderer: web::Data<ResultsRenderer>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = match SearchForm::parse(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse search form: {err}");
            return HttpResponse::BadRequest().body(err.to_string());
        }
    };

    let results = match search_funders(client.get_ref(), &renderer, form).await {
        Ok(results) => results,
        Err(err) => {
            log::error!("Failed to run search: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if req.headers().contains_key(HX_REQUEST) {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(results)
    } else {
        render_index(&tera, &renderer, &results)
    }
}
