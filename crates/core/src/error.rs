use crate::types::DbId;

/// Domain error taxonomy shared by every layer above the database.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity looked up by id does not exist.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A lookup by something other than id found nothing (section, singleton row).
    #[error("{0}")]
    Missing(String),

    /// The request references a row that does not exist, or is otherwise malformed.
    #[error("{0}")]
    BadRequest(String),

    /// The write would break a relationship (e.g. deleting a category that still has products).
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Event",
            id: 7,
        };
        assert_eq!(err.to_string(), "Event with ID 7 not found");
    }

    #[test]
    fn conflict_message_is_passed_through() {
        let err = CoreError::Conflict("Cannot delete category that has products.".into());
        assert_eq!(err.to_string(), "Cannot delete category that has products.");
    }
}
