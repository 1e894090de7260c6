pub mod product_service;
pub mod user_service;

use uuid::Uuid;

/// Path identifiers that are not UUIDs cannot name a stored record.
pub(crate) fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}
