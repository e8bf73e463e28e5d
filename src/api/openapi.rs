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

//! OpenAPI document, served at `/openapi.json` with Swagger UI at `/docs/`.

use utoipa::OpenApi;

use super::links::{CollectionLinks, PropertyCollection, PropertyLinks, PropertyResource};
use super::models::{Property, PropertyInput};
use super::responses::{ErrorResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health_check,
        super::handlers::list_properties,
        super::handlers::get_property,
        super::handlers::list_properties_by_type,
        super::handlers::list_properties_by_city,
        super::handlers::create_property,
        super::handlers::update_property,
        super::handlers::delete_property,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            Property,
            PropertyInput,
            PropertyLinks,
            PropertyResource,
            CollectionLinks,
            PropertyCollection,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Imoveis", description = "Property records"),
    ),
    info(
        title = "Imoveis API",
        version = "1.0.0",
        description = "CRUD API over property records.\n\nEvery property response carries a `_links` object with `self`, `update`, `delete`, `all`, `by_type` and `by_city` references. Collections carry `self` and `create`.\n\nErrors are returned as `{\"erro\": \"<message>\"}`.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDoc;
