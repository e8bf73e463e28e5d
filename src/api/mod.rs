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

//! REST API for property records.
//!
//! ## API Structure
//!
//! ```text
//! GET    /health                     - Health check
//! GET    /imoveis?cidade=&tipo=      - List properties, optionally filtered
//! POST   /imoveis                    - Create a property
//! GET    /imoveis/{id}               - Get a property
//! PUT    /imoveis/{id}               - Replace a property
//! DELETE /imoveis/{id}               - Delete a property
//! GET    /imoveis/tipo/{tipo}        - Properties of one type
//! GET    /imoveis/cidade/{cidade}    - Properties in one city
//! GET    /openapi.json               - OpenAPI document
//! GET    /docs/                      - Swagger UI
//! ```
//!
//! ## Module Organization
//!
//! - `handlers` - Route handlers
//! - `links` - `_links` decoration of responses
//! - `models` - Property DTOs
//! - `error` - Error type and `{erro}` rendering
//! - `routes` - Router assembly

pub mod error;
pub mod handlers;
pub mod links;
pub mod models;
pub mod openapi;
pub mod responses;
pub mod routes;


pub use error::ApiError;
pub use handlers::*;
pub use links::{decorate_collection, decorate_one, PropertyCollection, PropertyResource};
pub use openapi::ApiDoc;
pub use responses::{ErrorResponse, HealthResponse};
pub use routes::build_router;
