pub mod common_types;

pub mod line_actions;
pub mod line_statuses;
pub mod original_parts;
pub mod price_history;
pub mod price_list_lines;
pub mod response_lines;
pub mod response_revisions;
pub mod rfq_item_selections;
pub mod rfq_items;
pub mod rfq_suppliers;
pub mod rfqs;
pub mod supplier_part_aliases;
pub mod supplier_part_oem_links;
pub mod supplier_parts;
pub mod supplier_price_lists;
pub mod supplier_responses;
pub mod suppliers;
