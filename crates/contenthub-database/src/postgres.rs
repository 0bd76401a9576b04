//! PostgreSQL document store.
//!
//! Every collection shares the `documents` table. Attributes are stored in
//! a JSONB column and predicates are translated to JSONB operators; field
//! names are always bound as parameters, never spliced into SQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use contenthub_core::error::{AppError, ErrorKind};
use contenthub_core::result::AppResult;
use contenthub_core::traits::DocumentStore;
use contenthub_core::types::{
    Document, DocumentQuery, Fields, NewDocument, Predicate, SortField,
};

const COLUMNS: &str = "SELECT id, data, created_at, updated_at FROM documents WHERE collection = ";

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    data: Json<Fields>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id.to_string(),
            fields: row.data.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Document store backed by a PostgreSQL JSONB table.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a new store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

fn push_predicates(builder: &mut QueryBuilder<'_, Postgres>, query: &DocumentQuery) {
    for predicate in &query.predicates {
        match predicate {
            Predicate::Eq { field, value } => {
                builder
                    .push(" AND (data -> ")
                    .push_bind(field.clone())
                    .push(") = ")
                    .push_bind(Json(value.clone()));
            }
            Predicate::Ne { field, value } => {
                builder
                    .push(" AND (data -> ")
                    .push_bind(field.clone())
                    .push(") IS DISTINCT FROM ")
                    .push_bind(Json(value.clone()));
            }
            Predicate::IdNot { id } => {
                // A malformed id cannot be stored, so every row satisfies it.
                if let Ok(id) = Uuid::parse_str(id) {
                    builder.push(" AND id <> ").push_bind(id);
                }
            }
            Predicate::NormalizedContains { fields, needle } => {
                builder.push(" AND (false");
                for field in fields {
                    builder
                        .push(r" OR strpos(lower(regexp_replace(coalesce(data ->> ")
                        .push_bind(field.clone())
                        .push(r", ''), '\s', '', 'g')), ")
                        .push_bind(needle.clone())
                        .push(") > 0");
                }
                builder.push(")");
            }
        }
    }
}

fn push_sort(builder: &mut QueryBuilder<'_, Postgres>, sort: &[SortField]) {
    builder.push(" ORDER BY ");
    for field in sort {
        match field.field.as_str() {
            "createdAt" => {
                builder.push("created_at");
            }
            "updatedAt" => {
                builder.push("updated_at");
            }
            name => {
                builder.push("(data -> ").push_bind(name.to_string()).push(")");
            }
        }
        builder.push(field.direction.sql_suffix()).push(", ");
    }
    builder.push("id ASC");
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn provider_type(&self) -> &str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(db_error("Health check failed"))
    }

    async fn find(
        &self,
        collection: &str,
        query: &DocumentQuery,
        sort: &[SortField],
        skip: u64,
        limit: Option<u64>,
    ) -> AppResult<Vec<Document>> {
        let mut builder = QueryBuilder::<Postgres>::new(COLUMNS);
        builder.push_bind(collection.to_string());
        push_predicates(&mut builder, query);
        push_sort(&mut builder, sort);
        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }
        builder.push(" OFFSET ").push_bind(i64::try_from(skip).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<DocumentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to find documents"))?;
        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data, created_at, updated_at FROM documents \
             WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find document"))?;
        Ok(row.map(Document::from))
    }

    async fn count(&self, collection: &str, query: &DocumentQuery) -> AppResult<u64> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM documents WHERE collection = ");
        builder.push_bind(collection.to_string());
        push_predicates(&mut builder, query);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count documents"))?;
        Ok(total.max(0) as u64)
    }

    async fn insert(&self, collection: &str, doc: NewDocument) -> AppResult<String> {
        let id = Uuid::now_v7();
        sqlx::query(
            "INSERT INTO documents (id, collection, data, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(collection)
        .bind(Json(doc.fields))
        .bind(doc.created_at)
        .bind(doc.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to insert document"))?;
        Ok(id.to_string())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Fields,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Document>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let row = sqlx::query_as::<_, DocumentRow>(
            "UPDATE documents SET data = data || $1, updated_at = $2 \
             WHERE collection = $3 AND id = $4 \
             RETURNING id, data, created_at, updated_at",
        )
        .bind(Json(patch))
        .bind(updated_at)
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update document"))?;
        Ok(row.map(Document::from))
    }

    async fn delete(&self, collection: &str, id: &str) -> AppResult<bool> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(false);
        };
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete document"))?;
        Ok(result.rows_affected() > 0)
    }
}
