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

//! In-memory property store.
//!
//! Records live in an id-ordered map behind a tokio `RwLock`. Ids are
//! assigned from a monotonically increasing counter and never reused.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{CollectionFilter, PropertyStore, StoreError, StoreResult};
use crate::api::models::{Property, PropertyInput};

struct MemoryState {
    records: BTreeMap<i64, Property>,
    /// `None` once the id space is exhausted.
    next_id: Option<i64>,
}

/// Thread-safe in-memory implementation of [`PropertyStore`].
#[derive(Clone)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty store. The first inserted record gets id 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MemoryState {
                records: BTreeMap::new(),
                next_id: Some(1),
            })),
        }
    }

    /// Create a store pre-populated with records, keeping their ids.
    pub fn with_records(records: impl IntoIterator<Item = Property>) -> Self {
        let records: BTreeMap<i64, Property> = records.into_iter().map(|p| (p.id, p)).collect();
        let next_id = records
            .keys()
            .next_back()
            .map_or(Some(1), |max| max.checked_add(1));

        Self {
            state: Arc::new(RwLock::new(MemoryState { records, next_id })),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn fetch_collection(&self, filter: &CollectionFilter) -> StoreResult<Vec<Property>> {
        let state = self.state.read().await;
        Ok(state
            .records
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<Property>> {
        let state = self.state.read().await;
        Ok(state.records.get(&id).cloned())
    }

    async fn insert(&self, fields: &PropertyInput) -> StoreResult<i64> {
        let mut state = self.state.write().await;
        let id = state
            .next_id
            .ok_or_else(|| StoreError::Query("property id space exhausted".to_string()))?;
        state.next_id = id.checked_add(1);
        state.records.insert(id, fields.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, id: i64, fields: &PropertyInput) -> StoreResult<u64> {
        let mut state = self.state.write().await;
        match state.records.get_mut(&id) {
            Some(record) => {
                *record = fields.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let mut state = self.state.write().await;
        Ok(u64::from(state.records.remove(&id).is_some()))
    }
}
