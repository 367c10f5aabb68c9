//! `PostgreSQL` record store implementation.

use super::{
    models::{NewRequestRow, RequestRow},
    schema::requests,
};
use crate::request::{
    domain::{
        NewRequest, PersistedRequestData, RecordedStatus, Request, RequestContent, RequestId,
        RequestStatus, RequesterName,
    },
    ports::{RequestStore, RequestStoreError, RequestStoreResult, SubmissionOrder},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::warn;

/// `PostgreSQL` connection pool type used by request adapters.
pub type RequestPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`RequestStoreError::Persistence`] when the pool cannot establish
/// its initial connections.
pub fn connect_pool(database_url: &str, max_size: u32) -> RequestStoreResult<RequestPgPool> {
    Pool::builder()
        .max_size(max_size)
        .build(ConnectionManager::<PgConnection>::new(database_url))
        .map_err(RequestStoreError::persistence)
}

/// `PostgreSQL`-backed request store.
#[derive(Debug, Clone)]
pub struct PostgresRequestStore {
    pool: RequestPgPool,
}

impl PostgresRequestStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RequestPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RequestStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RequestStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RequestStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RequestStoreError::persistence)?
    }
}

#[async_trait]
impl RequestStore for PostgresRequestStore {
    async fn insert(&self, request: &NewRequest) -> RequestStoreResult<Request> {
        let new_row = to_new_row(request);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(requests::table)
                .values(&new_row)
                .returning(RequestRow::as_returning())
                .get_result::<RequestRow>(connection)
                .map_err(RequestStoreError::persistence)?;
            row_to_request(row)
        })
        .await
    }

    async fn list_all(&self, order: SubmissionOrder) -> RequestStoreResult<Vec<Request>> {
        self.run_blocking(move |connection| {
            let rows = match order {
                SubmissionOrder::OldestFirst => requests::table
                    .order((requests::created_at.asc(), requests::id.asc()))
                    .select(RequestRow::as_select())
                    .load::<RequestRow>(connection),
                SubmissionOrder::NewestFirst => requests::table
                    .order((requests::created_at.desc(), requests::id.asc()))
                    .select(RequestRow::as_select())
                    .load::<RequestRow>(connection),
            }
            .map_err(RequestStoreError::persistence)?;
            rows.into_iter().map(row_to_request).collect()
        })
        .await
    }

    async fn update_status(&self, id: RequestId, status: RequestStatus) -> RequestStoreResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::update(requests::table.find(id.into_inner()))
                .set((
                    requests::status.eq(status.as_str()),
                    requests::updated_at.eq(diesel::dsl::now),
                ))
                .execute(connection)
                .map_err(RequestStoreError::persistence)?;
            require_affected(affected, id)
        })
        .await
    }

    async fn delete(&self, id: RequestId) -> RequestStoreResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(requests::table.find(id.into_inner()))
                .execute(connection)
                .map_err(RequestStoreError::persistence)?;
            require_affected(affected, id)
        })
        .await
    }
}

fn to_new_row(request: &NewRequest) -> NewRequestRow {
    NewRequestRow {
        id: RequestId::new().into_inner(),
        name: request.name().as_str().to_owned(),
        content: request.content().as_str().to_owned(),
        status: request.status().as_str().to_owned(),
    }
}

fn require_affected(affected: usize, id: RequestId) -> RequestStoreResult<()> {
    if affected == 0 {
        return Err(RequestStoreError::NotFound(id));
    }
    Ok(())
}

fn row_to_request(row: RequestRow) -> RequestStoreResult<Request> {
    let RequestRow {
        id,
        name: persisted_name,
        content: persisted_content,
        status: persisted_status,
        created_at,
        updated_at,
    } = row;

    let name =
        RequesterName::new(persisted_name).map_err(RequestStoreError::invalid_persisted_data)?;
    let content =
        RequestContent::new(persisted_content).map_err(RequestStoreError::invalid_persisted_data)?;
    let status = RecordedStatus::from_stored(&persisted_status);
    if status.known().is_none() {
        warn!(request_id = %id, status = %persisted_status, "request has unrecognized status");
    }

    Ok(Request::from_persisted(PersistedRequestData {
        id: RequestId::from_uuid(id),
        name,
        content,
        status,
        created_at,
        updated_at,
    }))
}
