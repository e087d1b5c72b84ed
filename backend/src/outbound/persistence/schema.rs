//! Diesel table definitions. Must match `backend/migrations` exactly.

diesel::table! {
    /// Registered accounts. `email` carries a unique index.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        /// PHC-formatted Argon2id hash.
        password_hash -> Text,
        name -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Journal entries, each owned by one user.
    journals (id) {
        id -> Uuid,
        user_id -> Uuid,
        title -> Text,
        content -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(journals -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(journals, users);
