//! Selection resolution error types
//!
//! Raised when the structural role an offer answers cannot be determined
//! unambiguously. The engine never silently picks among candidates.

use thiserror::Error;

/// Structural-role resolution errors
#[derive(Error, Debug)]
pub enum SelectionError {
    /// Explicit selection key is not known for the (supplier, item) pair
    #[error("Selection key '{key}' not found for RFQ item {rfq_item_id}")]
    UnknownSelectionKey { rfq_item_id: i32, key: String },

    /// More than one candidate remains after narrowing
    #[error(
        "{candidates} selections match RFQ item {rfq_item_id}; supply a selection key, \
         bundle id or original part to disambiguate"
    )]
    Ambiguous { rfq_item_id: i32, candidates: usize },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl SelectionError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SelectionError::UnknownSelectionKey { .. } | SelectionError::Ambiguous { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SelectionError::UnknownSelectionKey { .. } => "SELECTION_KEY_NOT_FOUND",
            SelectionError::Ambiguous { .. } => "SELECTION_AMBIGUOUS",
            SelectionError::Database(_) => "DATABASE_ERROR",
        }
    }
}
