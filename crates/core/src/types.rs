/// Friends and ledger entries are keyed by opaque UUID strings.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh opaque identifier.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}
