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

//! Error type returned by the property handlers.
//!
//! Every failure is rendered as `{"erro": "<message>"}` with the status code
//! picked by [`ApiError::status`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::responses::ErrorResponse;
use crate::store::StoreError;

/// Client-facing error messages
pub mod messages {
    pub const NO_PROPERTIES_FOUND: &str = "Nenhum imóvel encontrado";
    pub const PROPERTY_NOT_FOUND: &str = "Imóvel não encontrado";
    pub const MISSING_BODY: &str = "Dados não fornecidos";
    pub const INVALID_BODY: &str = "Dados inválidos";
    pub const INVALID_QUERY: &str = "Parâmetros de consulta inválidos";
    pub const STORE_UNAVAILABLE: &str = "Banco de dados indisponível";
    pub const STORE_FAILURE: &str = "Erro interno ao acessar o banco de dados";
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A collection query matched nothing.
    #[error("{}", messages::NO_PROPERTIES_FOUND)]
    NoPropertiesFound,

    /// No record with the requested id.
    #[error("{}", messages::PROPERTY_NOT_FOUND)]
    PropertyNotFound,

    /// The request carried no usable JSON body.
    #[error("{}", messages::MISSING_BODY)]
    MissingBody,

    /// The body was present but not a valid property.
    #[error("{}: {0}", messages::INVALID_BODY)]
    InvalidBody(String),

    /// The query string could not be decoded into the collection filters.
    #[error("{}: {0}", messages::INVALID_QUERY)]
    InvalidQuery(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoPropertiesFound | ApiError::PropertyNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingBody | ApiError::InvalidBody(_) | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(StoreError::Query(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `erro` field. Store details stay in the log.
    pub fn message(&self) -> String {
        match self {
            ApiError::Store(StoreError::Unavailable(_)) => messages::STORE_UNAVAILABLE.to_string(),
            ApiError::Store(StoreError::Query(_)) => messages::STORE_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Store(err) => log::error!("Store failure: {err}"),
            ApiError::NoPropertiesFound | ApiError::PropertyNotFound => {
                log::debug!("{self}")
            }
            ApiError::MissingBody | ApiError::InvalidBody(_) => {
                log::debug!("Rejected request body: {self}")
            }
            ApiError::InvalidQuery(_) => log::debug!("Rejected query string: {self}"),
        }
        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}
