//! HTTP API for the destination catalog
//!
//! Three read-only endpoints over a shared immutable catalog. Every payload
//! carries a `success` discriminator; list payloads also carry the match
//! count, and search payloads echo the (lowercased) query back to the
//! caller.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ParawisError;
use crate::models::Destination;
use crate::query::{self, DestinationQuery};

/// Catalog handle shared across request handlers
pub type SharedCatalog = Arc<Catalog>;

#[derive(Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Destination>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct DetailResponse {
    pub success: bool,
    pub data: Destination,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<Destination>,
    pub total: usize,
    pub query: QueryEcho,
}

/// The query as applied, echoed back in search responses
#[derive(Serialize)]
pub struct QueryEcho {
    pub search: String,
    pub category: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

pub fn router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/destinations", get(list_destinations))
        .route("/destinations/{id}", get(get_destination))
        .route("/search", get(search_destinations))
        .with_state(catalog)
}

async fn list_destinations(State(catalog): State<SharedCatalog>) -> Json<ListResponse> {
    let data = catalog.all().to_vec();
    Json(ListResponse {
        success: true,
        total: data.len(),
        data,
    })
}

async fn get_destination(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<u32>,
) -> Response {
    match catalog.get_by_id(id) {
        Some(destination) => Json(DetailResponse {
            success: true,
            data: destination.clone(),
        })
        .into_response(),
        None => {
            tracing::debug!(id, "destination lookup missed");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    success: false,
                    message: ParawisError::not_found(id).user_message(),
                }),
            )
                .into_response()
        }
    }
}

async fn search_destinations(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = DestinationQuery::new(params.q, params.category);
    let data: Vec<Destination> = query::search(&catalog, &query)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        search = %query.echoed_text(),
        category = %query.echoed_category(),
        matches = data.len(),
        "search executed"
    );

    Json(SearchResponse {
        success: true,
        total: data.len(),
        query: QueryEcho {
            search: query.echoed_text(),
            category: query.echoed_category(),
        },
        data,
    })
}
