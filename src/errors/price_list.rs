//! Price list error types
//!
//! Errors for price-list CRUD, spreadsheet import and the activation
//! pipeline. Activation precondition failures are conflicts: the transaction
//! rolls back and nothing is flipped.

use thiserror::Error;

/// Price list operation errors
#[derive(Error, Debug)]
pub enum PriceListError {
    /// Price list not found by ID
    #[error("Price list {0} not found")]
    NotFound(i32),

    /// Supplier not found by ID
    #[error("Supplier {0} not found")]
    SupplierNotFound(i32),

    /// Lines can only be added or imported while the list is a draft
    #[error("Price list {id} is {status}; only draft lists can be modified")]
    NotEditable { id: i32, status: String },

    /// Activation preconditions are not met
    #[error(
        "Price list {id} cannot be activated: {matched} matched line(s), \
         {blocking} line(s) in error/ambiguous/new_part_required"
    )]
    NotActivatable {
        id: i32,
        matched: u64,
        blocking: u64,
    },

    /// Uploaded payload could not be decoded
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Spreadsheet could not be decoded
    #[error("Invalid spreadsheet: {0}")]
    InvalidSpreadsheet(String),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl PriceListError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PriceListError::NotFound(_) | PriceListError::SupplierNotFound(_)
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            PriceListError::NotEditable { .. } | PriceListError::NotActivatable { .. }
        )
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PriceListError::InvalidUpload(_)
                | PriceListError::InvalidSpreadsheet(_)
                | PriceListError::Csv(_)
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PriceListError::NotFound(_) => "PRICE_LIST_NOT_FOUND",
            PriceListError::SupplierNotFound(_) => "SUPPLIER_NOT_FOUND",
            PriceListError::NotEditable { .. } => "PRICE_LIST_NOT_EDITABLE",
            PriceListError::NotActivatable { .. } => "ACTIVATION_BLOCKED",
            PriceListError::InvalidUpload(_) => "INVALID_UPLOAD",
            PriceListError::InvalidSpreadsheet(_) => "INVALID_SPREADSHEET",
            PriceListError::Csv(_) => "CSV_ERROR",
            PriceListError::Database(_) => "DATABASE_ERROR",
        }
    }
}
