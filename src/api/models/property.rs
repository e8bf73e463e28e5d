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

//! Property record DTOs.
//!
//! Field names are part of the wire format and match the `imoveis` table
//! columns, so no case conversion is applied.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored property record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Property {
    /// Identifier assigned by the store
    pub id: i64,
    /// Street address line
    pub logradouro: String,
    /// Address-line category (e.g. "Rua", "Avenida", "Praça")
    pub tipo_logradouro: String,
    /// Neighborhood
    pub bairro: String,
    /// City
    pub cidade: String,
    /// Postal code
    pub cep: String,
    /// Property type (e.g. "Casa", "Apartamento")
    pub tipo: String,
    /// Monetary value
    pub valor: f64,
    /// Acquisition date as sent by the client
    pub data_aquisicao: String,
}

/// The eight client-supplied fields of a property record.
///
/// Used as the body of create and full-replace update requests. Every field
/// is required; an `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyInput {
    pub logradouro: String,
    pub tipo_logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub cep: String,
    pub tipo: String,
    pub valor: f64,
    pub data_aquisicao: String,
}

impl PropertyInput {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: i64) -> Property {
        Property {
            id,
            logradouro: self.logradouro,
            tipo_logradouro: self.tipo_logradouro,
            bairro: self.bairro,
            cidade: self.cidade,
            cep: self.cep,
            tipo: self.tipo,
            valor: self.valor,
            data_aquisicao: self.data_aquisicao,
        }
    }
}

impl From<Property> for PropertyInput {
    fn from(property: Property) -> Self {
        Self {
            logradouro: property.logradouro,
            tipo_logradouro: property.tipo_logradouro,
            bairro: property.bairro,
            cidade: property.cidade,
            cep: property.cep,
            tipo: property.tipo,
            valor: property.valor,
            data_aquisicao: property.data_aquisicao,
        }
    }
}
