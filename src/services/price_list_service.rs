//! Price-list import, matching and activation.
//!
//! Uploaded CSV/XLSX rows are stored verbatim as `price_list_lines` and
//! classified against the supplier's catalog by canonical part number.
//! Activation is all-or-nothing: preconditions are re-checked inside the
//! write transaction, prior active lists are superseded and one immutable
//! `price_history` row is appended per matched line.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::database::entities::common_types::{MatchMethod, PriceListLineStatus, PriceListStatus};
use crate::database::entities::{
    price_history, price_list_lines, supplier_part_aliases, supplier_parts, supplier_price_lists,
    suppliers,
};
use crate::errors::PriceListError;
use crate::services::canonical::canonicalize;
use crate::services::spreadsheet::{self, SheetRow};

#[derive(Clone, Debug, Deserialize)]
pub struct NewPriceList {
    pub supplier_id: i32,
    pub name: String,
    pub currency: Option<String>,
    pub valid_from: Option<chrono::DateTime<chrono::Utc>>,
    pub valid_until: Option<chrono::DateTime<chrono::Utc>>,
}

/// Single manually-entered price line.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewPriceListLine {
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
    pub currency: Option<String>,
    pub moq: Option<f64>,
    pub lead_time_days: Option<i32>,
    pub valid_from: Option<chrono::DateTime<chrono::Utc>>,
    pub valid_until: Option<chrono::DateTime<chrono::Utc>>,
}

/// Per-status line counts after an import or re-match pass.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ImportReport {
    pub total: u64,
    pub matched: u64,
    pub ambiguous: u64,
    pub new_part_required: u64,
    pub error: u64,
    pub ignored: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct PriceListDetail {
    pub price_list: supplier_price_lists::Model,
    pub lines: Vec<price_list_lines::Model>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ActivationReport {
    pub price_list: supplier_price_lists::Model,
    pub superseded_list_ids: Vec<i32>,
    pub history_rows: u64,
}

/// Matcher verdict for one import row.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    pub status: PriceListLineStatus,
    pub method: Option<MatchMethod>,
    pub supplier_part_id: Option<i32>,
    pub note: Option<String>,
}

/// Canonical-number lookup tables built once per import pass.
pub struct MatchIndex {
    parts: HashMap<String, Vec<i32>>,
    aliases: HashMap<String, Vec<i32>>,
}

#[derive(Clone)]
pub struct PriceListService {
    db: DatabaseConnection,
}

impl PriceListService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_list(
        &self,
        input: NewPriceList,
    ) -> Result<supplier_price_lists::Model, PriceListError> {
        suppliers::Entity::find_by_id(input.supplier_id)
            .one(&self.db)
            .await?
            .ok_or(PriceListError::SupplierNotFound(input.supplier_id))?;

        Ok(supplier_price_lists::ActiveModel {
            supplier_id: Set(input.supplier_id),
            name: Set(input.name),
            currency: Set(input.currency),
            status: Set(PriceListStatus::Draft.as_str().to_string()),
            valid_from: Set(input.valid_from),
            valid_until: Set(input.valid_until),
            created_at: Set(chrono::Utc::now()),
            activated_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_list(&self, id: i32) -> Result<PriceListDetail, PriceListError> {
        let price_list = supplier_price_lists::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(PriceListError::NotFound(id))?;

        let lines = price_list_lines::Entity::find()
            .filter(price_list_lines::Column::PriceListId.eq(id))
            .order_by_asc(price_list_lines::Column::RowNumber)
            .all(&self.db)
            .await?;

        Ok(PriceListDetail { price_list, lines })
    }

    pub async fn list_lists(
        &self,
        supplier_id: Option<i32>,
    ) -> Result<Vec<supplier_price_lists::Model>, PriceListError> {
        let mut query = supplier_price_lists::Entity::find()
            .order_by_desc(supplier_price_lists::Column::CreatedAt);
        if let Some(supplier_id) = supplier_id {
            query = query.filter(supplier_price_lists::Column::SupplierId.eq(supplier_id));
        }
        Ok(query.all(&self.db).await?)
    }

    /// Append a single line to a draft list, classifying it like an import
    /// row.
    pub async fn add_line(
        &self,
        list_id: i32,
        input: NewPriceListLine,
    ) -> Result<price_list_lines::Model, PriceListError> {
        let txn = self.db.begin().await?;

        let price_list = load_draft(&txn, list_id).await?;
        let index = MatchIndex::load(&txn, price_list.supplier_id).await?;

        let next_row = price_list_lines::Entity::find()
            .filter(price_list_lines::Column::PriceListId.eq(list_id))
            .order_by_desc(price_list_lines::Column::RowNumber)
            .one(&txn)
            .await?
            .map(|l| l.row_number + 1)
            .unwrap_or(1);

        let parsed = ParsedRow {
            part_number: input.part_number.clone(),
            description: input.description.clone(),
            unit_price: input.unit_price,
            currency: input.currency.clone().map(|c| c.to_uppercase()),
            moq: input.moq,
            lead_time_days: input.lead_time_days,
            valid_from: input.valid_from,
            valid_until: input.valid_until,
            parse_errors: Vec::new(),
        };
        let outcome = classify(&parsed, &index);

        let line = price_list_lines::ActiveModel {
            price_list_id: Set(list_id),
            row_number: Set(next_row),
            raw_part_number: Set(parsed.part_number),
            raw_description: Set(parsed.description),
            unit_price: Set(parsed.unit_price),
            currency: Set(parsed.currency),
            moq: Set(parsed.moq),
            lead_time_days: Set(parsed.lead_time_days),
            valid_from: Set(parsed.valid_from),
            valid_until: Set(parsed.valid_until),
            line_status: Set(outcome.status.as_str().to_string()),
            match_method: Set(outcome.method.map(|m| m.as_str().to_string())),
            match_confidence: Set(outcome.method.map(MatchMethod::confidence)),
            match_note: Set(outcome.note),
            supplier_part_id: Set(outcome.supplier_part_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(line)
    }

    /// Import a CSV upload into a draft list.
    pub async fn import_csv(
        &self,
        list_id: i32,
        data: &[u8],
    ) -> Result<ImportReport, PriceListError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(data);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows: Vec<SheetRow> = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = SheetRow::new();
            for (idx, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                row.insert(
                    header.clone(),
                    record.get(idx).unwrap_or_default().trim().to_string(),
                );
            }
            rows.push(row);
        }

        self.import_rows(list_id, rows).await
    }

    /// Import the first worksheet of an XLSX upload into a draft list.
    pub async fn import_xlsx(
        &self,
        list_id: i32,
        data: &[u8],
    ) -> Result<ImportReport, PriceListError> {
        let rows = spreadsheet::decode_first_sheet(data)?;
        self.import_rows(list_id, rows).await
    }

    /// Store and classify decoded rows. Row numbers continue after any rows
    /// already on the list, so repeated imports append.
    pub async fn import_rows(
        &self,
        list_id: i32,
        rows: Vec<SheetRow>,
    ) -> Result<ImportReport, PriceListError> {
        let txn = self.db.begin().await?;

        let price_list = load_draft(&txn, list_id).await?;
        let index = MatchIndex::load(&txn, price_list.supplier_id).await?;

        let next_row = price_list_lines::Entity::find()
            .filter(price_list_lines::Column::PriceListId.eq(list_id))
            .order_by_desc(price_list_lines::Column::RowNumber)
            .one(&txn)
            .await?
            .map(|l| l.row_number + 1)
            .unwrap_or(1);

        let mut report = ImportReport::default();
        for (offset, row) in rows.into_iter().enumerate() {
            let parsed = parse_row(&row);
            let outcome = classify(&parsed, &index);
            report.total += 1;
            count(&mut report, outcome.status);

            price_list_lines::ActiveModel {
                price_list_id: Set(list_id),
                row_number: Set(next_row + offset as i32),
                raw_part_number: Set(parsed.part_number.clone()),
                raw_description: Set(parsed.description.clone()),
                unit_price: Set(parsed.unit_price),
                currency: Set(parsed.currency.clone()),
                moq: Set(parsed.moq),
                lead_time_days: Set(parsed.lead_time_days),
                valid_from: Set(parsed.valid_from),
                valid_until: Set(parsed.valid_until),
                line_status: Set(outcome.status.as_str().to_string()),
                match_method: Set(outcome.method.map(|m| m.as_str().to_string())),
                match_confidence: Set(outcome.method.map(MatchMethod::confidence)),
                match_note: Set(outcome.note),
                supplier_part_id: Set(outcome.supplier_part_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        tracing::info!(
            list_id,
            total = report.total,
            matched = report.matched,
            "imported price list rows"
        );

        Ok(report)
    }

    /// Re-run the matcher over lines that did not match yet. Catalog entries
    /// created since the import (for example through manual response lines)
    /// can turn `new_part_required` rows into matches.
    pub async fn fill_gaps(&self, list_id: i32) -> Result<ImportReport, PriceListError> {
        let txn = self.db.begin().await?;

        let price_list = load_draft(&txn, list_id).await?;
        let index = MatchIndex::load(&txn, price_list.supplier_id).await?;

        let lines = price_list_lines::Entity::find()
            .filter(price_list_lines::Column::PriceListId.eq(list_id))
            .filter(price_list_lines::Column::LineStatus.is_in([
                PriceListLineStatus::Pending.as_str(),
                PriceListLineStatus::NewPartRequired.as_str(),
                PriceListLineStatus::Ambiguous.as_str(),
            ]))
            .all(&txn)
            .await?;

        let mut report = ImportReport::default();
        for line in lines {
            let parsed = ParsedRow {
                part_number: line.raw_part_number.clone(),
                description: line.raw_description.clone(),
                unit_price: line.unit_price,
                currency: line.currency.clone(),
                moq: line.moq,
                lead_time_days: line.lead_time_days,
                valid_from: line.valid_from,
                valid_until: line.valid_until,
                parse_errors: Vec::new(),
            };
            let outcome = classify(&parsed, &index);
            report.total += 1;
            count(&mut report, outcome.status);

            let mut active: price_list_lines::ActiveModel = line.into();
            active.line_status = Set(outcome.status.as_str().to_string());
            active.match_method = Set(outcome.method.map(|m| m.as_str().to_string()));
            active.match_confidence = Set(outcome.method.map(MatchMethod::confidence));
            active.match_note = Set(outcome.note);
            active.supplier_part_id = Set(outcome.supplier_part_id);
            active.update(&txn).await?;
        }

        txn.commit().await?;
        Ok(report)
    }

    /// Activate a draft list.
    ///
    /// Preconditions (checked inside the transaction): at least one matched
    /// line and zero lines in a blocking status. Failure rolls everything
    /// back; no status flips, no history rows.
    pub async fn activate(&self, list_id: i32) -> Result<ActivationReport, PriceListError> {
        let txn = self.db.begin().await?;

        let price_list = load_draft(&txn, list_id).await?;

        let lines = price_list_lines::Entity::find()
            .filter(price_list_lines::Column::PriceListId.eq(list_id))
            .order_by_asc(price_list_lines::Column::RowNumber)
            .all(&txn)
            .await?;

        let mut matched = 0u64;
        let mut blocking = 0u64;
        for line in &lines {
            match line.status() {
                Some(PriceListLineStatus::Matched) => matched += 1,
                Some(status) if status.blocks_activation() => blocking += 1,
                _ => {}
            }
        }
        if matched == 0 || blocking > 0 {
            return Err(PriceListError::NotActivatable {
                id: list_id,
                matched,
                blocking,
            });
        }

        let prior_active = supplier_price_lists::Entity::find()
            .filter(supplier_price_lists::Column::SupplierId.eq(price_list.supplier_id))
            .filter(supplier_price_lists::Column::Status.eq(PriceListStatus::Active.as_str()))
            .filter(supplier_price_lists::Column::Id.ne(list_id))
            .all(&txn)
            .await?;

        let mut superseded_list_ids = Vec::with_capacity(prior_active.len());
        for prior in prior_active {
            superseded_list_ids.push(prior.id);
            let mut active: supplier_price_lists::ActiveModel = prior.into();
            active.status = Set(PriceListStatus::Superseded.as_str().to_string());
            active.update(&txn).await?;
        }

        let now = chrono::Utc::now();
        let mut history_rows = 0u64;
        for line in &lines {
            if line.status() != Some(PriceListLineStatus::Matched) {
                continue;
            }
            let (Some(supplier_part_id), Some(unit_price), Some(currency)) = (
                line.supplier_part_id,
                line.unit_price,
                line.currency.clone().or(price_list.currency.clone()),
            ) else {
                continue;
            };

            price_history::ActiveModel {
                supplier_id: Set(price_list.supplier_id),
                supplier_part_id: Set(supplier_part_id),
                price_list_id: Set(price_list.id),
                price_list_line_id: Set(line.id),
                unit_price: Set(unit_price),
                currency: Set(currency),
                moq: Set(line.moq),
                lead_time_days: Set(line.lead_time_days),
                // Validity falls back line → list → activation time.
                valid_from: Set(line.valid_from.or(price_list.valid_from).unwrap_or(now)),
                valid_until: Set(line.valid_until.or(price_list.valid_until)),
                recorded_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            history_rows += 1;
        }

        let mut active: supplier_price_lists::ActiveModel = price_list.into();
        active.status = Set(PriceListStatus::Active.as_str().to_string());
        active.activated_at = Set(Some(now));
        let price_list = active.update(&txn).await?;

        txn.commit().await?;

        tracing::info!(
            list_id,
            history_rows,
            superseded = superseded_list_ids.len(),
            "activated price list"
        );

        Ok(ActivationReport {
            price_list,
            superseded_list_ids,
            history_rows,
        })
    }
}

impl MatchIndex {
    /// Build canonical lookup tables from the supplier's catalog and aliases.
    pub async fn load(
        txn: &DatabaseTransaction,
        supplier_id: i32,
    ) -> Result<Self, PriceListError> {
        let mut parts: HashMap<String, Vec<i32>> = HashMap::new();
        let catalog = supplier_parts::Entity::find()
            .filter(supplier_parts::Column::SupplierId.eq(supplier_id))
            .all(txn)
            .await?;
        let part_ids: Vec<i32> = catalog.iter().map(|p| p.id).collect();
        for part in &catalog {
            if let Some(key) = &part.canonical_part_number {
                parts.entry(key.clone()).or_default().push(part.id);
            }
        }

        let mut aliases: HashMap<String, Vec<i32>> = HashMap::new();
        if !part_ids.is_empty() {
            let rows = supplier_part_aliases::Entity::find()
                .filter(supplier_part_aliases::Column::SupplierPartId.is_in(part_ids))
                .all(txn)
                .await?;
            for row in rows {
                let key = row
                    .canonical_alias
                    .clone()
                    .or_else(|| canonicalize(&row.alias));
                if let Some(key) = key {
                    aliases.entry(key).or_default().push(row.supplier_part_id);
                }
            }
        }

        Ok(Self { parts, aliases })
    }

    #[cfg(test)]
    fn from_maps(parts: HashMap<String, Vec<i32>>, aliases: HashMap<String, Vec<i32>>) -> Self {
        Self { parts, aliases }
    }
}

#[derive(Clone, Debug, Default)]
struct ParsedRow {
    part_number: Option<String>,
    description: Option<String>,
    unit_price: Option<f64>,
    currency: Option<String>,
    moq: Option<f64>,
    lead_time_days: Option<i32>,
    valid_from: Option<chrono::DateTime<chrono::Utc>>,
    valid_until: Option<chrono::DateTime<chrono::Utc>>,
    parse_errors: Vec<String>,
}

/// Map one decoded row onto the canonical import fields, collecting parse
/// failures instead of aborting the import.
fn parse_row(row: &SheetRow) -> ParsedRow {
    let mut parsed = ParsedRow::default();

    for (header, value) in row {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let Some(field) = spreadsheet::canonical_header(header) else {
            continue;
        };
        match field {
            "part_number" => parsed.part_number = Some(value.to_string()),
            "description" => parsed.description = Some(value.to_string()),
            "currency" => parsed.currency = Some(value.to_uppercase()),
            "unit_price" => match parse_number(value) {
                Some(v) => parsed.unit_price = Some(v),
                None => parsed.parse_errors.push(format!("bad unit_price '{value}'")),
            },
            "moq" => match parse_number(value) {
                Some(v) => parsed.moq = Some(v),
                None => parsed.parse_errors.push(format!("bad moq '{value}'")),
            },
            "lead_time_days" => match value.parse::<i32>() {
                Ok(v) => parsed.lead_time_days = Some(v),
                Err(_) => parsed
                    .parse_errors
                    .push(format!("bad lead_time_days '{value}'")),
            },
            "valid_from" => match parse_date(value) {
                Some(v) => parsed.valid_from = Some(v),
                None => parsed.parse_errors.push(format!("bad valid_from '{value}'")),
            },
            "valid_until" => match parse_date(value) {
                Some(v) => parsed.valid_until = Some(v),
                None => parsed
                    .parse_errors
                    .push(format!("bad valid_until '{value}'")),
            },
            _ => {}
        }
    }

    parsed
}

fn parse_number(value: &str) -> Option<f64> {
    value.replace(',', ".").parse::<f64>().ok()
}

fn parse_date(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    if let Ok(ts) = value.parse::<chrono::DateTime<chrono::Utc>>() {
        return Some(ts);
    }
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Classify one parsed row against the catalog index.
fn classify(parsed: &ParsedRow, index: &MatchIndex) -> MatchOutcome {
    // Rows carrying neither a part number nor any price data are blank
    // filler, not failed matches.
    if parsed.part_number.is_none()
        && parsed.unit_price.is_none()
        && parsed.currency.is_none()
        && parsed.parse_errors.is_empty()
    {
        return MatchOutcome {
            status: PriceListLineStatus::Ignored,
            method: None,
            supplier_part_id: None,
            note: Some("blank row".to_string()),
        };
    }
    if !parsed.parse_errors.is_empty() {
        return MatchOutcome {
            status: PriceListLineStatus::Error,
            method: None,
            supplier_part_id: None,
            note: Some(parsed.parse_errors.join("; ")),
        };
    }
    let Some(number) = parsed.part_number.as_deref() else {
        return MatchOutcome {
            status: PriceListLineStatus::Error,
            method: None,
            supplier_part_id: None,
            note: Some("missing part number".to_string()),
        };
    };
    let Some(key) = canonicalize(number) else {
        return MatchOutcome {
            status: PriceListLineStatus::Error,
            method: None,
            supplier_part_id: None,
            note: Some("part number has no canonical form".to_string()),
        };
    };

    resolve_match(&key, index)
}

/// Pure matcher core: exact canonical hits win over alias hits; more than
/// one distinct candidate across both tables is ambiguous, none means the
/// catalog does not know the part yet.
pub fn resolve_match(key: &str, index: &MatchIndex) -> MatchOutcome {
    let exact = index.parts.get(key).cloned().unwrap_or_default();
    let via_alias = index.aliases.get(key).cloned().unwrap_or_default();

    let mut candidates: Vec<i32> = exact.iter().chain(via_alias.iter()).copied().collect();
    candidates.sort_unstable();
    candidates.dedup();

    match candidates.as_slice() {
        [] => MatchOutcome {
            status: PriceListLineStatus::NewPartRequired,
            method: None,
            supplier_part_id: None,
            note: None,
        },
        [part_id] => {
            let method = if exact.contains(part_id) {
                MatchMethod::ExactCanonical
            } else {
                MatchMethod::Alias
            };
            MatchOutcome {
                status: PriceListLineStatus::Matched,
                method: Some(method),
                supplier_part_id: Some(*part_id),
                note: None,
            }
        }
        many => MatchOutcome {
            status: PriceListLineStatus::Ambiguous,
            method: None,
            supplier_part_id: None,
            note: Some(format!("{} catalog candidates", many.len())),
        },
    }
}

async fn load_draft(
    txn: &DatabaseTransaction,
    list_id: i32,
) -> Result<supplier_price_lists::Model, PriceListError> {
    let price_list = supplier_price_lists::Entity::find_by_id(list_id)
        .one(txn)
        .await?
        .ok_or(PriceListError::NotFound(list_id))?;

    if price_list.list_status() != Some(PriceListStatus::Draft) {
        return Err(PriceListError::NotEditable {
            id: list_id,
            status: price_list.status.clone(),
        });
    }

    Ok(price_list)
}

fn count(report: &mut ImportReport, status: PriceListLineStatus) {
    match status {
        PriceListLineStatus::Matched => report.matched += 1,
        PriceListLineStatus::Ambiguous => report.ambiguous += 1,
        PriceListLineStatus::NewPartRequired => report.new_part_required += 1,
        PriceListLineStatus::Error => report.error += 1,
        PriceListLineStatus::Ignored => report.ignored += 1,
        PriceListLineStatus::Pending => {}
    }
}
