//! Structured error types for the negotiation and matching core.
//!
//! Each subsystem has its own thiserror enum exposing `error_code()` plus
//! status classifiers; `ApiError` renders any of them as an HTTP response.

pub mod api;
pub mod catalog;
pub mod ledger;
pub mod price_list;
pub mod selection;

pub use api::ApiError;
pub use catalog::CatalogError;
pub use ledger::LedgerError;
pub use price_list::PriceListError;
pub use selection::SelectionError;
