//! Route tables: versioned resource routes plus common service routes.

mod common;
pub use common::common_routes_with_ready;

use crate::handlers::resource::{all, create, delete as delete_handler, one, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Resource CRUD routes under parameterized segments. The list route uses
/// the plural segment (`GET /products`); everything else uses the singular
/// (`POST /product`, `GET /product/:id`, ...). Handlers resolve the resource
/// and return 404 for segments that match neither.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/:resource", get(all).post(create))
        .route(
            "/:resource/:id",
            get(one).put(update).delete(delete_handler),
        )
        .with_state(state)
}
