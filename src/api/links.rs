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

//! Hypermedia links attached to property responses.
//!
//! Links are computed from the record on every response and never stored.
//! Path values are inserted as-is, without percent-encoding.

use serde::Serialize;
use utoipa::ToSchema;

use super::models::Property;

pub const COLLECTION_PATH: &str = "/imoveis";

pub fn property_path(id: i64) -> String {
    format!("{COLLECTION_PATH}/{id}")
}

pub fn type_path(tipo: &str) -> String {
    format!("{COLLECTION_PATH}/tipo/{tipo}")
}

pub fn city_path(cidade: &str) -> String {
    format!("{COLLECTION_PATH}/cidade/{cidade}")
}

/// Hypermedia links for a single property
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PropertyLinks {
    /// Link to this property
    #[serde(rename = "self")]
    pub self_link: String,
    /// Target of a full-replace update
    pub update: String,
    /// Target of a delete
    pub delete: String,
    /// The full collection
    pub all: String,
    /// Properties of the same type
    pub by_type: String,
    /// Properties in the same city
    pub by_city: String,
}

impl PropertyLinks {
    pub fn for_property(property: &Property) -> Self {
        let item = property_path(property.id);
        Self {
            self_link: item.clone(),
            update: item.clone(),
            delete: item,
            all: COLLECTION_PATH.to_string(),
            by_type: type_path(&property.tipo),
            by_city: city_path(&property.cidade),
        }
    }
}

/// Hypermedia links for a property collection
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CollectionLinks {
    /// The route that produced this collection
    #[serde(rename = "self")]
    pub self_link: String,
    /// Where new properties are created
    pub create: String,
}

impl Default for CollectionLinks {
    fn default() -> Self {
        Self {
            self_link: COLLECTION_PATH.to_string(),
            create: COLLECTION_PATH.to_string(),
        }
    }
}

/// A property with its `_links`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PropertyResource {
    #[serde(flatten)]
    pub property: Property,
    #[serde(rename = "_links")]
    pub links: PropertyLinks,
}

/// A list of properties with collection-level `_links`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PropertyCollection {
    pub imoveis: Vec<PropertyResource>,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
}

impl PropertyCollection {
    /// Replace the collection `self` link, keeping `create`.
    pub fn with_self_link(mut self, href: impl Into<String>) -> Self {
        self.links.self_link = href.into();
        self
    }
}

pub fn decorate_one(property: Property) -> PropertyResource {
    let links = PropertyLinks::for_property(&property);
    PropertyResource { property, links }
}

pub fn decorate_collection(properties: Vec<Property>) -> PropertyCollection {
    PropertyCollection {
        imoveis: properties.into_iter().map(decorate_one).collect(),
        links: CollectionLinks::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn property(id: i64, cidade: &str, tipo: &str) -> Property {
        Property {
            id,
            logradouro: "Rua das Flores, 123".to_string(),
            tipo_logradouro: "Rua".to_string(),
            bairro: "Centro".to_string(),
            cidade: cidade.to_string(),
            cep: "01000-000".to_string(),
            tipo: tipo.to_string(),
            valor: 250000.0,
            data_aquisicao: "2023-01-15".to_string(),
        }
    }

    #[test]
    fn test_decorate_one_adds_six_links() {
        let value = serde_json::to_value(decorate_one(property(7, "Recife", "Casa"))).unwrap();

        assert_eq!(
            value["_links"],
            json!({
                "self": "/imoveis/7",
                "update": "/imoveis/7",
                "delete": "/imoveis/7",
                "all": "/imoveis",
                "by_type": "/imoveis/tipo/Casa",
                "by_city": "/imoveis/cidade/Recife",
            })
        );
    }

    #[test]
    fn test_decorate_one_keeps_record_fields_at_top_level() {
        let record = property(3, "Curitiba", "Apartamento");
        let value = serde_json::to_value(decorate_one(record.clone())).unwrap();

        let mut expected = serde_json::to_value(&record).unwrap();
        expected["_links"] = value["_links"].clone();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_link_values_are_not_encoded() {
        let links = PropertyLinks::for_property(&property(1, "São Paulo", "Sala Comercial"));

        assert_eq!(links.by_city, "/imoveis/cidade/São Paulo");
        assert_eq!(links.by_type, "/imoveis/tipo/Sala Comercial");
    }

    #[test]
    fn test_decorate_collection() {
        let collection = decorate_collection(vec![
            property(0, "Recife", "Casa"),
            property(1, "Natal", "Casa"),
        ]);
        let value = serde_json::to_value(&collection).unwrap();

        assert_eq!(value["_links"], json!({"self": "/imoveis", "create": "/imoveis"}));
        assert_eq!(value["imoveis"].as_array().unwrap().len(), 2);
        assert_eq!(value["imoveis"][1]["_links"]["self"], "/imoveis/1");
    }

    #[test]
    fn test_with_self_link_keeps_create() {
        let collection = decorate_collection(vec![]).with_self_link(type_path("Casa"));

        assert_eq!(collection.links.self_link, "/imoveis/tipo/Casa");
        assert_eq!(collection.links.create, "/imoveis");
    }
}
