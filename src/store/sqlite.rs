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

//! SQLite-backed property store.
//!
//! Each operation acquires one connection from the pool and runs a single
//! parameterized statement on it. The `PoolConnection` guard returns the
//! connection to the pool when it goes out of scope, on the success path and
//! on every `?` early return alike.

use async_trait::async_trait;
use log::{debug, info};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::str::FromStr;
use std::time::Duration;

use super::{CollectionFilter, PropertyStore, StoreError, StoreResult};
use crate::api::models::{Property, PropertyInput};
use crate::config::DatabaseSettings;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS imoveis (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    logradouro TEXT NOT NULL,
    tipo_logradouro TEXT NOT NULL,
    bairro TEXT NOT NULL,
    cidade TEXT NOT NULL,
    cep TEXT NOT NULL,
    tipo TEXT NOT NULL,
    valor REAL NOT NULL,
    data_aquisicao TEXT NOT NULL
)";

const SELECT_ALL: &str = "SELECT id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao \
     FROM imoveis ORDER BY id";

const SELECT_BY_CITY: &str = "SELECT id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao \
     FROM imoveis WHERE cidade = ? ORDER BY id";

const SELECT_BY_TYPE: &str = "SELECT id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao \
     FROM imoveis WHERE tipo = ? ORDER BY id";

const SELECT_BY_CITY_AND_TYPE: &str = "SELECT id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao \
     FROM imoveis WHERE cidade = ? AND tipo = ? ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao \
     FROM imoveis WHERE id = ?";

const INSERT: &str = "INSERT INTO imoveis \
     (logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

const UPDATE: &str = "UPDATE imoveis \
     SET logradouro = ?, tipo_logradouro = ?, bairro = ?, cidade = ?, \
         cep = ?, tipo = ?, valor = ?, data_aquisicao = ? \
     WHERE id = ?";

const DELETE: &str = "DELETE FROM imoveis WHERE id = ?";

/// [`PropertyStore`] backed by a sqlx `SqlitePool`.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a pool for the configured database and make sure the `imoveis`
    /// table exists.
    pub async fn connect(settings: &DatabaseSettings) -> StoreResult<Self> {
        let url = settings
            .url
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable("no database url configured".to_string()))?;

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Unavailable(format!("invalid database url '{url}': {e}")))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs));

        // Every connection to `:memory:` opens its own database, so the pool
        // must hold exactly one connection for the lifetime of the store.
        if url.contains(":memory:") {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            StoreError::Unavailable(format!("failed to open database '{url}': {e}"))
        })?;

        info!("Connected to SQLite database at {url}");

        let store = Self::from_pool(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Wrap an existing pool without touching the schema.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `imoveis` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        let mut conn = self.acquire().await?;
        sqlx::query(CREATE_TABLE).execute(&mut *conn).await?;
        debug!("Ensured imoveis table exists");
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn acquire(&self) -> StoreResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl PropertyStore for SqliteStore {
    async fn fetch_collection(&self, filter: &CollectionFilter) -> StoreResult<Vec<Property>> {
        let mut conn = self.acquire().await?;

        let query = match filter {
            CollectionFilter::All => sqlx::query_as::<Sqlite, Property>(SELECT_ALL),
            CollectionFilter::ByCity(city) => {
                sqlx::query_as::<Sqlite, Property>(SELECT_BY_CITY).bind(city.as_str())
            }
            CollectionFilter::ByType(tipo) => {
                sqlx::query_as::<Sqlite, Property>(SELECT_BY_TYPE).bind(tipo.as_str())
            }
            CollectionFilter::ByCityAndType { city, tipo } => {
                sqlx::query_as::<Sqlite, Property>(SELECT_BY_CITY_AND_TYPE)
                    .bind(city.as_str())
                    .bind(tipo.as_str())
            }
        };

        let rows = query.fetch_all(&mut *conn).await?;
        debug!("Fetched {} imoveis with filter {filter:?}", rows.len());
        Ok(rows)
    }

    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<Property>> {
        let mut conn = self.acquire().await?;
        let row = sqlx::query_as::<Sqlite, Property>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn insert(&self, fields: &PropertyInput) -> StoreResult<i64> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(INSERT)
            .bind(fields.logradouro.as_str())
            .bind(fields.tipo_logradouro.as_str())
            .bind(fields.bairro.as_str())
            .bind(fields.cidade.as_str())
            .bind(fields.cep.as_str())
            .bind(fields.tipo.as_str())
            .bind(fields.valor)
            .bind(fields.data_aquisicao.as_str())
            .execute(&mut *conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, fields: &PropertyInput) -> StoreResult<u64> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(UPDATE)
            .bind(fields.logradouro.as_str())
            .bind(fields.tipo_logradouro.as_str())
            .bind(fields.bairro.as_str())
            .bind(fields.cidade.as_str())
            .bind(fields.cep.as_str())
            .bind(fields.tipo.as_str())
            .bind(fields.valor)
            .bind(fields.data_aquisicao.as_str())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(DELETE).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}
