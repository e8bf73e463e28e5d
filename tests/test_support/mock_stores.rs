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

//! Store implementations that fail on purpose.

use async_trait::async_trait;
use imoveis_server::{
    CollectionFilter, Property, PropertyInput, PropertyStore, StoreError, StoreResult,
};

/// Which failure a [`FailingStore`] reports.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Unavailable,
    Query,
}

/// A store whose every operation fails.
pub struct FailingStore {
    failure: Failure,
}

impl FailingStore {
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }

    fn error(&self) -> StoreError {
        match self.failure {
            Failure::Unavailable => StoreError::Unavailable("connection refused".to_string()),
            Failure::Query => StoreError::Query("no such table: imoveis".to_string()),
        }
    }
}

#[async_trait]
impl PropertyStore for FailingStore {
    async fn fetch_collection(&self, _filter: &CollectionFilter) -> StoreResult<Vec<Property>> {
        Err(self.error())
    }

    async fn fetch_by_id(&self, _id: i64) -> StoreResult<Option<Property>> {
        Err(self.error())
    }

    async fn insert(&self, _fields: &PropertyInput) -> StoreResult<i64> {
        Err(self.error())
    }

    async fn update(&self, _id: i64, _fields: &PropertyInput) -> StoreResult<u64> {
        Err(self.error())
    }

    async fn delete(&self, _id: i64) -> StoreResult<u64> {
        Err(self.error())
    }
}
