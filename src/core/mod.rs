pub mod error;

pub use error::{AppError, Result};

use std::fmt::Display;

/// Unwrap a repository lookup or fail with a uniform NotFound error.
///
/// Every service resolves referenced entities through this helper so the
/// "<Resource> not found with ID: <id>" shape stays consistent across the API.
pub fn require<T>(entity: Option<T>, resource: &str, id: &dyn Display) -> Result<T> {
    entity.ok_or_else(|| AppError::not_found(format!("{} not found with ID: {}", resource, id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_returns_entity_when_present() {
        let value = require(Some(42), "Client", &"abc").unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn require_maps_none_to_not_found() {
        let err = require::<i32>(None, "Client", &"abc").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Client not found with ID: abc");
    }
}
