/// Catalog listings are keyed by a small integer id.
pub type PropertyId = i64;

/// User ids are opaque strings issued by the auth endpoints.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
