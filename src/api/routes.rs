// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Route definitions.

use axum::{extract::Extension, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers;
use super::openapi::ApiDoc;
use crate::store::SharedStore;

/// Property routes only, without docs or CORS.
pub fn property_routes() -> Router {
    Router::new()
        .route(
            "/imoveis",
            get(handlers::list_properties).post(handlers::create_property),
        )
        .route(
            "/imoveis/:id",
            get(handlers::get_property)
                .put(handlers::update_property)
                .delete(handlers::delete_property),
        )
        .route("/imoveis/tipo/:tipo", get(handlers::list_properties_by_type))
        .route(
            "/imoveis/cidade/:cidade",
            get(handlers::list_properties_by_city),
        )
}

/// Build the complete application router backed by `store`.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(property_routes())
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(Extension(store))
        .layer(CorsLayer::permissive())
}
