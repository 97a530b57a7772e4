pub mod canonical;
pub mod line_status_service;
pub mod part_catalog_service;
pub mod price_list_service;
pub mod response_ledger_service;
pub mod selection_service;
pub mod spreadsheet;
pub mod workspace_service;

pub use part_catalog_service::PartCatalogService;
pub use price_list_service::PriceListService;
pub use response_ledger_service::ResponseLedgerService;
pub use workspace_service::WorkspaceService;
