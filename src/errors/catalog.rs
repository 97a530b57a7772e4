//! Part catalog error types
//!
//! Structured errors for supplier part resolution. Reason strings are
//! machine-distinguishable so callers can supply a disambiguating parameter
//! instead of guessing.

use thiserror::Error;

/// Supplier part resolution errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Referenced supplier part does not exist
    #[error("Supplier part {0} not found")]
    PartIdNotFound(i32),

    /// Referenced supplier part belongs to a different supplier
    #[error("Supplier part {part_id} belongs to supplier {owner_id}, not supplier {supplier_id}")]
    PartWrongSupplier {
        part_id: i32,
        owner_id: i32,
        supplier_id: i32,
    },

    /// No catalog entry matches the given part number
    #[error("No catalog entry for part number '{0}'")]
    PartNumberNotFound(String),

    /// Neither a part id nor a part number was supplied
    #[error("A part id or part number is required")]
    PartNumberRequired,

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::PartIdNotFound(_) | CatalogError::PartNumberNotFound(_)
        )
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CatalogError::PartWrongSupplier { .. } | CatalogError::PartNumberRequired
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::PartIdNotFound(_) => "PART_ID_NOT_FOUND",
            CatalogError::PartWrongSupplier { .. } => "PART_WRONG_SUPPLIER",
            CatalogError::PartNumberNotFound(_) => "PART_NUMBER_NOT_FOUND",
            CatalogError::PartNumberRequired => "PART_NUMBER_REQUIRED",
            CatalogError::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_id_not_found() {
        let err = CatalogError::PartIdNotFound(42);
        assert_eq!(err.to_string(), "Supplier part 42 not found");
        assert!(err.is_not_found());
        assert_eq!(err.error_code(), "PART_ID_NOT_FOUND");
    }

    #[test]
    fn wrong_supplier() {
        let err = CatalogError::PartWrongSupplier {
            part_id: 7,
            owner_id: 1,
            supplier_id: 2,
        };
        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "PART_WRONG_SUPPLIER");
    }

    #[test]
    fn part_number_not_found() {
        let err = CatalogError::PartNumberNotFound("HT-195".to_string());
        assert_eq!(err.to_string(), "No catalog entry for part number 'HT-195'");
        assert_eq!(err.error_code(), "PART_NUMBER_NOT_FOUND");
    }
}
