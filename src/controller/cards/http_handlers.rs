use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::data_service::{AppState, get_data_for_cards_page};
use crate::model::CardSelection;
use crate::view::cards::render_cards_template;
use crate::view::index::render_index_template;

pub async fn index(state: Data<AppState>) -> impl Responder {
    let markup = render_index_template(&state.title);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn cards(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let json = match query.get("json").map(|s| s.trim()) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };

    let selection = match CardSelection::from_query(&query, &state.roster) {
        Ok(selection) => selection,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({ "error": e }));
        }
    };

    let roster_cards = get_data_for_cards_page(&state, &selection).await;

    if json {
        HttpResponse::Ok().json(roster_cards)
    } else {
        let markup = render_cards_template(&roster_cards, &selection);
        HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string())
    }
}
