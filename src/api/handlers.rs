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

//! Property route handlers with OpenAPI documentation.

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::error::ApiError;
use super::links::{self, PropertyCollection, PropertyResource};
use super::models::PropertyInput;
use super::responses::{ErrorResponse, HealthResponse};
use crate::store::{CollectionFilter, PropertyStore, SharedStore};

/// Optional filters for the collection route
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CollectionQuery {
    /// Only properties in this city
    pub cidade: Option<String>,
    /// Only properties of this type
    pub tipo: Option<String>,
}

/// Ids that do not decode or parse as integers cannot name a record.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = path.map_err(|e| {
        log::debug!("Rejected id segment: {e}");
        ApiError::PropertyNotFound
    })?;
    raw.parse::<i64>().map_err(|_| ApiError::PropertyNotFound)
}

/// A `tipo`/`cidade` segment that is not valid UTF-8 matches no stored record.
fn path_segment(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(segment)| segment).map_err(|e| {
        log::debug!("Rejected path segment: {e}");
        ApiError::NoPropertiesFound
    })
}

/// Decode a create/update body.
///
/// Absent, empty, `null` and `{}` bodies count as "not provided"; anything
/// else must deserialize into all eight fields.
pub fn parse_property_body(body: &[u8]) -> Result<PropertyInput, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::MissingBody);
    }

    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    match &value {
        serde_json::Value::Null => return Err(ApiError::MissingBody),
        serde_json::Value::Object(map) if map.is_empty() => return Err(ApiError::MissingBody),
        _ => {}
    }

    serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

async fn fetch_non_empty(
    store: &SharedStore,
    filter: CollectionFilter,
) -> Result<PropertyCollection, ApiError> {
    let properties = store.fetch_collection(&filter).await?;
    if properties.is_empty() {
        return Err(ApiError::NoPropertiesFound);
    }
    Ok(links::decorate_collection(properties))
}

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List properties
///
/// With both `cidade` and `tipo`, only records matching both are returned.
#[utoipa::path(
    get,
    path = "/imoveis",
    params(CollectionQuery),
    responses(
        (status = 200, description = "Matching properties", body = PropertyCollection),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 404, description = "No property matched", body = ErrorResponse),
        (status = 500, description = "Store query failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    ),
    tag = "Imoveis"
)]
pub async fn list_properties(
    Extension(store): Extension<SharedStore>,
    query: Result<Query<CollectionQuery>, QueryRejection>,
) -> Result<Json<PropertyCollection>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let filter = CollectionFilter::new(query.cidade, query.tipo);
    Ok(Json(fetch_non_empty(&store, filter).await?))
}

/// Get a property by id
#[utoipa::path(
    get,
    path = "/imoveis/{id}",
    params(
        ("id" = i64, Path, description = "Property id")
    ),
    responses(
        (status = 200, description = "The property", body = PropertyResource),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 500, description = "Store query failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    ),
    tag = "Imoveis"
)]
pub async fn get_property(
    Extension(store): Extension<SharedStore>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<PropertyResource>, ApiError> {
    let id = parse_id(id)?;
    let property = store
        .fetch_by_id(id)
        .await?
        .ok_or(ApiError::PropertyNotFound)?;
    Ok(Json(links::decorate_one(property)))
}

/// List properties of one type
#[utoipa::path(
    get,
    path = "/imoveis/tipo/{tipo}",
    params(
        ("tipo" = String, Path, description = "Property type")
    ),
    responses(
        (status = 200, description = "Properties of this type", body = PropertyCollection),
        (status = 404, description = "No property matched", body = ErrorResponse),
        (status = 500, description = "Store query failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    ),
    tag = "Imoveis"
)]
pub async fn list_properties_by_type(
    Extension(store): Extension<SharedStore>,
    tipo: Result<Path<String>, PathRejection>,
) -> Result<Json<PropertyCollection>, ApiError> {
    let tipo = path_segment(tipo)?;
    let self_link = links::type_path(&tipo);
    let collection = fetch_non_empty(&store, CollectionFilter::ByType(tipo)).await?;
    Ok(Json(collection.with_self_link(self_link)))
}

/// List properties in one city
#[utoipa::path(
    get,
    path = "/imoveis/cidade/{cidade}",
    params(
        ("cidade" = String, Path, description = "City name")
    ),
    responses(
        (status = 200, description = "Properties in this city", body = PropertyCollection),
        (status = 404, description = "No property matched", body = ErrorResponse),
        (status = 500, description = "Store query failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    ),
    tag = "Imoveis"
)]
pub async fn list_properties_by_city(
    Extension(store): Extension<SharedStore>,
    cidade: Result<Path<String>, PathRejection>,
) -> Result<Json<PropertyCollection>, ApiError> {
    let cidade = path_segment(cidade)?;
    let self_link = links::city_path(&cidade);
    let collection = fetch_non_empty(&store, CollectionFilter::ByCity(cidade)).await?;
    Ok(Json(collection.with_self_link(self_link)))
}

/// Create a property
///
/// All eight fields are required. The response echoes them together with the
/// id assigned by the store.
#[utoipa::path(
    post,
    path = "/imoveis",
    request_body = PropertyInput,
    responses(
        (status = 201, description = "Property created", body = PropertyResource),
        (status = 400, description = "Body missing or invalid", body = ErrorResponse),
        (status = 500, description = "Store query failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    ),
    tag = "Imoveis"
)]
pub async fn create_property(
    Extension(store): Extension<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<PropertyResource>), ApiError> {
    let input = parse_property_body(&body)?;
    let id = store.insert(&input).await?;
    log::info!("Property {id} created");

    Ok((
        StatusCode::CREATED,
        Json(links::decorate_one(input.with_id(id))),
    ))
}

/// Replace a property
///
/// Every field is overwritten; the id comes from the path.
#[utoipa::path(
    put,
    path = "/imoveis/{id}",
    params(
        ("id" = i64, Path, description = "Property id")
    ),
    request_body = PropertyInput,
    responses(
        (status = 200, description = "Property updated", body = PropertyResource),
        (status = 400, description = "Body missing or invalid", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 500, description = "Store query failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    ),
    tag = "Imoveis"
)]
pub async fn update_property(
    Extension(store): Extension<SharedStore>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<PropertyResource>, ApiError> {
    let id = parse_id(id)?;
    let input = parse_property_body(&body)?;

    if store.update(id, &input).await? == 0 {
        return Err(ApiError::PropertyNotFound);
    }
    log::info!("Property {id} updated");

    Ok(Json(links::decorate_one(input.with_id(id))))
}

/// Delete a property
#[utoipa::path(
    delete,
    path = "/imoveis/{id}",
    params(
        ("id" = i64, Path, description = "Property id")
    ),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 500, description = "Store query failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    ),
    tag = "Imoveis"
)]
pub async fn delete_property(
    Extension(store): Extension<SharedStore>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(id)?;

    if store.delete(id).await? == 0 {
        return Err(ApiError::PropertyNotFound);
    }
    log::info!("Property {id} deleted");

    Ok(StatusCode::NO_CONTENT)
}
