//! Diesel schema for request persistence.

diesel::table! {
    /// Submitted requests awaiting triage.
    requests (id) {
        /// Time-ordered request identifier.
        id -> Uuid,
        /// Submitter label.
        name -> Text,
        /// Request body.
        content -> Text,
        /// Triage status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
