//! Ownership checks
//!
//! A single reusable predicate invoked by every handler that mutates an
//! owned resource, instead of repeating the comparison inline.

use crate::error::ApiError;
use uuid::Uuid;

/// Whether the acting identity owns the given resource
pub fn is_owner(actor: Uuid, owner: Uuid) -> bool {
    actor == owner
}

/// Reject with the legacy 401 "User not authorized" body on mismatch
pub fn ensure_owner(actor: Uuid, owner: Uuid) -> Result<(), ApiError> {
    if is_owner(actor, owner) {
        Ok(())
    } else {
        Err(ApiError::NotAuthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_allowed() {
        let id = Uuid::new_v4();
        assert!(is_owner(id, id));
        assert!(ensure_owner(id, id).is_ok());
    }

    #[test]
    fn test_non_owner_rejected() {
        let actor = Uuid::new_v4();
        let owner = Uuid::new_v4();
        assert!(!is_owner(actor, owner));
        assert!(ensure_owner(actor, owner).is_err());
    }
}
