//! Spreadsheet decoding for price-list imports.
//!
//! Turns the first worksheet of an uploaded XLSX workbook into an ordered
//! sequence of header→value rows. All matching and classification happens
//! downstream; this module only flattens cells to strings.

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use indexmap::IndexMap;
use std::io::Cursor;

use crate::errors::PriceListError;

pub type SheetRow = IndexMap<String, String>;

/// Decode the first worksheet into header→value rows.
///
/// The first row is treated as the header row. Trailing cells beyond the
/// header width are dropped; missing cells become empty strings so every row
/// has the same keys.
pub fn decode_first_sheet(data: &[u8]) -> Result<Vec<SheetRow>, PriceListError> {
    let cursor = Cursor::new(data);
    let mut workbook: Xlsx<_> = open_workbook_from_rs(cursor)
        .map_err(|e| PriceListError::InvalidSpreadsheet(format!("failed to open XLSX: {e:?}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PriceListError::InvalidSpreadsheet("workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PriceListError::InvalidSpreadsheet(format!("failed to read sheet: {e:?}")))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Ok(Vec::new()),
    };

    let mut out = Vec::new();
    for row in rows {
        let mut mapped = IndexMap::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(idx).map(cell_to_string).unwrap_or_default();
            mapped.insert(header.clone(), value);
        }
        out.push(mapped);
    }

    tracing::debug!(
        sheet = %sheet_name,
        rows = out.len(),
        "decoded first worksheet"
    );

    Ok(out)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole floats come back from calamine for integer cells
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Map a spreadsheet/CSV column header to a canonical import field.
///
/// Pure lookup table; unknown headers are ignored by the importer.
pub fn canonical_header(header: &str) -> Option<&'static str> {
    let normalized = header.trim().to_lowercase().replace(['-', ' '], "_");
    match normalized.as_str() {
        "part_number" | "part_no" | "partno" | "pn" | "article" | "article_number"
        | "supplier_part_number" | "item_number" => Some("part_number"),
        "description" | "desc" | "name" | "designation" => Some("description"),
        "price" | "unit_price" | "price_per_unit" | "net_price" => Some("unit_price"),
        "currency" | "curr" | "ccy" => Some("currency"),
        "moq" | "min_order_qty" | "minimum_order_quantity" => Some("moq"),
        "lead_time" | "lead_time_days" | "leadtime" | "delivery_time" => Some("lead_time_days"),
        "valid_from" | "validity_start" => Some("valid_from"),
        "valid_until" | "valid_to" | "validity_end" => Some("valid_until"),
        _ => None,
    }
}
