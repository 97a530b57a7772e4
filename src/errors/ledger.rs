//! Response ledger error types
//!
//! Errors raised while appending to or revising the negotiation ledger. All
//! of these roll back the enclosing transaction; callers never observe
//! partial writes.

use thiserror::Error;

use super::{CatalogError, SelectionError};

/// Negotiation ledger errors
#[derive(Error, Debug)]
pub enum LedgerError {
    /// RFQ not found by ID
    #[error("RFQ {0} not found")]
    RfqNotFound(i32),

    /// RFQ/supplier pairing not found
    #[error("RFQ supplier pairing {0} not found")]
    RfqSupplierNotFound(i32),

    /// Supplier is not invited to this RFQ
    #[error("Supplier {supplier_id} is not invited to RFQ {rfq_id}")]
    SupplierNotInvited { rfq_id: i32, supplier_id: i32 },

    /// RFQ item not found by ID
    #[error("RFQ item {0} not found")]
    RfqItemNotFound(i32),

    /// RFQ item belongs to a different RFQ than the pairing
    #[error("RFQ item {rfq_item_id} does not belong to RFQ {rfq_id}")]
    ItemWrongRfq { rfq_item_id: i32, rfq_id: i32 },

    /// Response line not found by ID
    #[error("Response line {0} not found")]
    LineNotFound(i32),

    /// Revising a line requires a non-empty reason
    #[error("A reason is required to revise a response line")]
    ReasonRequired,

    /// Unknown supplier reply status value
    #[error("Unknown supplier reply status '{0}'")]
    InvalidReplyStatus(String),

    /// Price/currency do not agree with the reply status
    #[error(
        "Price and currency must both be set when the reply status is QUOTED, \
         and must both be absent otherwise"
    )]
    PriceCurrencyMismatch,

    /// Part resolution failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Selection resolution failed
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Snapshot payload could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl LedgerError {
    pub fn is_not_found(&self) -> bool {
        match self {
            LedgerError::RfqNotFound(_)
            | LedgerError::RfqSupplierNotFound(_)
            | LedgerError::SupplierNotInvited { .. }
            | LedgerError::RfqItemNotFound(_)
            | LedgerError::LineNotFound(_) => true,
            LedgerError::Catalog(e) => e.is_not_found(),
            _ => false,
        }
    }

    pub fn is_client_error(&self) -> bool {
        match self {
            LedgerError::ItemWrongRfq { .. }
            | LedgerError::ReasonRequired
            | LedgerError::InvalidReplyStatus(_)
            | LedgerError::PriceCurrencyMismatch => true,
            LedgerError::Catalog(e) => e.is_client_error(),
            LedgerError::Selection(e) => e.is_client_error(),
            _ => false,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            LedgerError::RfqNotFound(_) => "RFQ_NOT_FOUND",
            LedgerError::RfqSupplierNotFound(_) => "RFQ_SUPPLIER_NOT_FOUND",
            LedgerError::SupplierNotInvited { .. } => "SUPPLIER_NOT_INVITED",
            LedgerError::RfqItemNotFound(_) => "RFQ_ITEM_NOT_FOUND",
            LedgerError::ItemWrongRfq { .. } => "ITEM_WRONG_RFQ",
            LedgerError::LineNotFound(_) => "LINE_NOT_FOUND",
            LedgerError::ReasonRequired => "REASON_REQUIRED",
            LedgerError::InvalidReplyStatus(_) => "INVALID_REPLY_STATUS",
            LedgerError::PriceCurrencyMismatch => "PRICE_CURRENCY_MISMATCH",
            LedgerError::Catalog(e) => e.error_code(),
            LedgerError::Selection(e) => e.error_code(),
            LedgerError::Json(_) => "JSON_ERROR",
            LedgerError::Database(_) => "DATABASE_ERROR",
        }
    }
}
