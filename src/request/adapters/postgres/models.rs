//! Diesel row models for request persistence.

use super::schema::requests;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for request records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RequestRow {
    /// Request identifier.
    pub id: uuid::Uuid,
    /// Submitter label.
    pub name: String,
    /// Request body.
    pub content: String,
    /// Triage status, possibly written by another client.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for request records.
///
/// Timestamps are filled in by column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = requests)]
pub struct NewRequestRow {
    /// Application-assigned request identifier.
    pub id: uuid::Uuid,
    /// Submitter label.
    pub name: String,
    /// Request body.
    pub content: String,
    /// Initial triage status.
    pub status: String,
}
