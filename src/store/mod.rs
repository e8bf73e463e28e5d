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

//! Data access for property records.
//!
//! Every backend implements [`PropertyStore`], which exposes exactly five
//! operations: collection fetch (with an optional city and/or type filter),
//! lookup by id, insert, full-replace update and delete. Handlers never see
//! the backend type.
//!
//! An absent record is a normal outcome (`Ok(None)`, `Ok(vec![])`, or zero
//! rows affected). Failures talking to the backend are reported as
//! [`StoreError`] and must never be turned into "not found".

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::models::{Property, PropertyInput};
use crate::config::{DatabaseKind, DatabaseSettings};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or no connection could be acquired.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A statement failed to execute or a row could not be decoded.
    #[error("store query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
            other => StoreError::Query(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Filter applied to a collection fetch.
///
/// Only `cidade` and `tipo` are filterable and both use exact string
/// equality. The four variants are the complete set of query shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionFilter {
    All,
    ByCity(String),
    ByType(String),
    ByCityAndType { city: String, tipo: String },
}

impl CollectionFilter {
    /// Build a filter from two optional values. Empty strings count as absent.
    pub fn new(city: Option<String>, tipo: Option<String>) -> Self {
        let city = city.filter(|c| !c.is_empty());
        let tipo = tipo.filter(|t| !t.is_empty());

        match (city, tipo) {
            (Some(city), Some(tipo)) => CollectionFilter::ByCityAndType { city, tipo },
            (Some(city), None) => CollectionFilter::ByCity(city),
            (None, Some(tipo)) => CollectionFilter::ByType(tipo),
            (None, None) => CollectionFilter::All,
        }
    }

    /// Whether a record satisfies this filter.
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            CollectionFilter::All => true,
            CollectionFilter::ByCity(city) => property.cidade == *city,
            CollectionFilter::ByType(tipo) => property.tipo == *tipo,
            CollectionFilter::ByCityAndType { city, tipo } => {
                property.cidade == *city && property.tipo == *tipo
            }
        }
    }
}

/// The storage seam consumed by the HTTP handlers.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Fetch every record matching `filter`, in store-natural order.
    async fn fetch_collection(&self, filter: &CollectionFilter) -> StoreResult<Vec<Property>>;

    /// Fetch a single record by id.
    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<Property>>;

    /// Persist a new record and return the id assigned by the store.
    async fn insert(&self, fields: &PropertyInput) -> StoreResult<i64>;

    /// Replace all fields of the record with `id`. Returns the rows affected.
    async fn update(&self, id: i64, fields: &PropertyInput) -> StoreResult<u64>;

    /// Remove the record with `id`. Returns the rows affected.
    async fn delete(&self, id: i64) -> StoreResult<u64>;
}

/// Store handle shared across request handlers.
pub type SharedStore = Arc<dyn PropertyStore>;

/// Create the backend selected by `settings.kind`.
pub async fn open_store(settings: &DatabaseSettings) -> StoreResult<SharedStore> {
    match settings.kind {
        DatabaseKind::Sqlite => Ok(Arc::new(SqliteStore::connect(settings).await?)),
        DatabaseKind::Memory => {
            log::warn!("Using in-memory store; records are lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
