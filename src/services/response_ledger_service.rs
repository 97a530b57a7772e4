//! Append-only negotiation ledger.
//!
//! Owns the `SupplierResponse` → `ResponseRevision` → `ResponseLine` chain,
//! the `based_on` negotiation lineage and the per-action audit trail. Lines
//! are immutable: "editing" always inserts a new line superseding the old
//! one. Every mutation runs in one transaction; partial failure leaves no
//! trace.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::database::entities::common_types::{
    LineActionType, LineStatusKind, ResponseStatus, RfqSupplierStatus, SupplierReplyStatus,
};
use crate::database::entities::{
    line_actions, response_lines, response_revisions, rfq_items, rfq_suppliers, rfqs,
    supplier_responses,
};
use crate::errors::LedgerError;
use crate::services::line_status_service::{self, StatusUpsert};
use crate::services::part_catalog_service::{self, PartResolution};
use crate::services::selection_service::{self, SelectionHints};

/// Externally-owned request-status recomputation hook, invoked by client
/// request id after any response mutation. Fire-and-forget.
#[async_trait]
pub trait RequestStatusHook: Send + Sync {
    async fn recompute(&self, client_request_id: i32);
}

/// Default hook: records the recompute request in the log and nothing else.
pub struct LoggingStatusHook;

#[async_trait]
impl RequestStatusHook for LoggingStatusHook {
    async fn recompute(&self, client_request_id: i32) {
        tracing::debug!(client_request_id, "request status recompute triggered");
    }
}

/// Commercial fields of an offer line.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LineTerms {
    pub unit_price: Option<f64>,
    pub currency: Option<String>,
    pub lead_time_days: Option<i32>,
    pub moq: Option<f64>,
    pub packaging: Option<String>,
    pub valid_from: Option<chrono::DateTime<chrono::Utc>>,
    pub valid_until: Option<chrono::DateTime<chrono::Utc>>,
    pub payment_terms: Option<String>,
    pub incoterms: Option<String>,
}

/// Input for the "manual line" composite operation.
#[derive(Clone, Debug, Deserialize)]
pub struct NewLineInput {
    pub rfq_item_id: i32,
    pub supplier_reply_status: String,
    #[serde(default)]
    pub terms: LineTerms,
    pub selection_key: Option<String>,
    pub bundle_id: Option<i32>,
    pub bundle_item_id: Option<i32>,
    pub original_part_id: Option<i32>,
    #[serde(default)]
    pub part: Option<PartResolution>,
    pub reason: Option<String>,
    pub created_by: Option<String>,
}

/// Partial update for `revise_line`. Outer `None` keeps the base value;
/// `Some(None)` clears a nullable field; `Some(Some(v))` overrides it.
///
/// On the wire, an absent field keeps and an explicit `null` clears. Plain
/// serde would fold `null` into the outer `None`, so every field routes
/// through [`clear_or_set`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LineOverrides {
    pub supplier_reply_status: Option<String>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub unit_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub currency: Option<Option<String>>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub lead_time_days: Option<Option<i32>>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub moq: Option<Option<f64>>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub packaging: Option<Option<String>>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub valid_from: Option<Option<chrono::DateTime<chrono::Utc>>>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub valid_until: Option<Option<chrono::DateTime<chrono::Utc>>>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub payment_terms: Option<Option<String>>,
    #[serde(default, deserialize_with = "clear_or_set")]
    pub incoterms: Option<Option<String>>,
}

/// A present field always lands in `Some`, so `null` becomes `Some(None)`
/// instead of collapsing into the absent-field default.
fn clear_or_set<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Result of an append or revise: the line plus the chain it landed in.
#[derive(Clone, Debug, Serialize)]
pub struct AppendedLine {
    pub response: supplier_responses::Model,
    pub revision: response_revisions::Model,
    pub line: response_lines::Model,
}

#[derive(Clone)]
pub struct ResponseLedgerService {
    db: DatabaseConnection,
    hook: Arc<dyn RequestStatusHook>,
}

impl ResponseLedgerService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            hook: Arc::new(LoggingStatusHook),
        }
    }

    pub fn with_hook(db: DatabaseConnection, hook: Arc<dyn RequestStatusHook>) -> Self {
        Self { db, hook }
    }

    /// Look up the (rfq, supplier) pairing.
    pub async fn find_pairing(
        &self,
        rfq_id: i32,
        supplier_id: i32,
    ) -> Result<rfq_suppliers::Model, LedgerError> {
        rfq_suppliers::Entity::find()
            .filter(rfq_suppliers::Column::RfqId.eq(rfq_id))
            .filter(rfq_suppliers::Column::SupplierId.eq(supplier_id))
            .one(&self.db)
            .await?
            .ok_or(LedgerError::SupplierNotInvited { rfq_id, supplier_id })
    }

    /// Invite a supplier to an RFQ, creating the pairing. Idempotent: an
    /// existing pairing is returned unchanged.
    pub async fn invite(
        &self,
        rfq_id: i32,
        supplier_id: i32,
    ) -> Result<rfq_suppliers::Model, LedgerError> {
        rfqs::Entity::find_by_id(rfq_id)
            .one(&self.db)
            .await?
            .ok_or(LedgerError::RfqNotFound(rfq_id))?;

        if let Ok(existing) = self.find_pairing(rfq_id, supplier_id).await {
            return Ok(existing);
        }

        let pairing = rfq_suppliers::ActiveModel {
            rfq_id: Set(rfq_id),
            supplier_id: Set(supplier_id),
            status: Set(RfqSupplierStatus::Invited.as_str().to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        match pairing.insert(&self.db).await {
            Ok(model) => Ok(model),
            Err(err)
                if err.sql_err().map_or(false, |e| {
                    matches!(e, sea_orm::SqlErr::UniqueConstraintViolation(_))
                }) =>
            {
                self.find_pairing(rfq_id, supplier_id).await
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Find-or-create the response and its latest revision. Idempotent until
    /// a new revision is explicitly requested.
    pub async fn ensure_revision(
        &self,
        rfq_supplier_id: i32,
    ) -> Result<(supplier_responses::Model, response_revisions::Model), LedgerError> {
        let txn = self.db.begin().await?;
        let response = ensure_response(&txn, rfq_supplier_id).await?;
        let revision = ensure_latest_revision(&txn, response.id, None, None).await?;
        txn.commit().await?;
        Ok((response, revision))
    }

    /// Always insert a fresh revision with `rev_number = max(existing) + 1`.
    pub async fn create_new_revision(
        &self,
        rfq_supplier_id: i32,
        note: Option<String>,
        created_by: Option<String>,
    ) -> Result<(supplier_responses::Model, response_revisions::Model), LedgerError> {
        let txn = self.db.begin().await?;
        let response = ensure_response(&txn, rfq_supplier_id).await?;
        let revision = insert_next_revision(&txn, response.id, note, created_by).await?;
        txn.commit().await?;
        Ok((response, revision))
    }

    /// Manual-line composite: validate, resolve the structural role and the
    /// supplier part, append one immutable line and its audit record.
    pub async fn append_manual_line(
        &self,
        rfq_supplier_id: i32,
        input: NewLineInput,
    ) -> Result<AppendedLine, LedgerError> {
        let reply = parse_reply_status(&input.supplier_reply_status)?;
        validate_terms(reply, &input.terms)?;

        let txn = self.db.begin().await?;

        let pairing = rfq_suppliers::Entity::find_by_id(rfq_supplier_id)
            .one(&txn)
            .await?
            .ok_or(LedgerError::RfqSupplierNotFound(rfq_supplier_id))?;

        let item = rfq_items::Entity::find_by_id(input.rfq_item_id)
            .one(&txn)
            .await?
            .ok_or(LedgerError::RfqItemNotFound(input.rfq_item_id))?;
        if item.rfq_id != pairing.rfq_id {
            return Err(LedgerError::ItemWrongRfq {
                rfq_item_id: item.id,
                rfq_id: pairing.rfq_id,
            });
        }

        let hints = SelectionHints {
            selection_key: input.selection_key.clone(),
            bundle_id: input.bundle_id,
            bundle_item_id: input.bundle_item_id,
            original_part_id: input.original_part_id,
        };
        let resolved = selection_service::resolve(&txn, &item, &hints).await?;

        let supplier_part = match input.part {
            Some(mut resolution) => {
                if resolution.original_part_id.is_none() {
                    resolution.original_part_id = resolved.original_part_id;
                }
                Some(
                    part_catalog_service::resolve_or_create(&txn, pairing.supplier_id, resolution)
                        .await?,
                )
            }
            None => None,
        };

        let response = ensure_response(&txn, pairing.id).await?;
        let revision = ensure_latest_revision(&txn, response.id, None, input.created_by.clone())
            .await?;

        let selection = resolved.selection.as_ref();
        let line = response_lines::ActiveModel {
            response_revision_id: Set(revision.id),
            rfq_item_id: Set(item.id),
            selection_key: Set(selection.map(|s| s.selection_key.clone())),
            supplier_part_id: Set(supplier_part.as_ref().map(|p| p.id)),
            original_part_id: Set(resolved.original_part_id),
            bundle_id: Set(selection.and_then(|s| s.bundle_id).or(input.bundle_id)),
            bundle_item_id: Set(selection
                .and_then(|s| s.bundle_item_id)
                .or(input.bundle_item_id)),
            based_on_response_line_id: Set(None),
            supplier_reply_status: Set(reply.as_str().to_string()),
            unit_price: Set(input.terms.unit_price),
            currency: Set(input.terms.currency.clone()),
            lead_time_days: Set(input.terms.lead_time_days),
            moq: Set(input.terms.moq),
            packaging: Set(input.terms.packaging.clone()),
            valid_from: Set(input.terms.valid_from),
            valid_until: Set(input.terms.valid_until),
            payment_terms: Set(input.terms.payment_terms.clone()),
            incoterms: Set(input.terms.incoterms.clone()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        record_action(
            &txn,
            line.id,
            LineActionType::Create,
            serde_json::to_value(&line)?,
            input.reason.clone(),
            input.created_by.clone(),
        )
        .await?;

        if let Some(part) = &supplier_part {
            record_action(
                &txn,
                line.id,
                LineActionType::LinkSupplierPart,
                json!({
                    "supplier_part_id": part.id,
                    "supplier_part_number": part.supplier_part_number,
                    "original_part_id": resolved.original_part_id,
                }),
                input.reason.clone(),
                input.created_by.clone(),
            )
            .await?;
        }

        line_status_service::upsert_status(
            &txn,
            StatusUpsert {
                rfq_supplier_id: pairing.id,
                rfq_item_id: item.id,
                status: LineStatusKind::Request,
                source_type: Some("response_line".to_string()),
                source_ref: Some(line.id.to_string()),
                last_request_revision_id: None,
                last_response_revision_id: Some(revision.id),
                note: None,
            },
        )
        .await?;

        mark_responded(&txn, &pairing).await?;
        let response = ratchet_review(&txn, response).await?;

        let client_request_id = client_request_for(&txn, pairing.rfq_id).await?;
        txn.commit().await?;

        self.hook.recompute(client_request_id).await;

        Ok(AppendedLine {
            response,
            revision,
            line,
        })
    }

    /// Negotiation revise: merge overrides over the base line, re-validate
    /// the price/currency invariant and insert the result as a new line
    /// superseding the base. The base row is never touched.
    pub async fn revise_line(
        &self,
        base_line_id: i32,
        overrides: LineOverrides,
        reason: &str,
        created_by: Option<String>,
    ) -> Result<AppendedLine, LedgerError> {
        if reason.trim().is_empty() {
            return Err(LedgerError::ReasonRequired);
        }

        let txn = self.db.begin().await?;

        let base = response_lines::Entity::find_by_id(base_line_id)
            .one(&txn)
            .await?
            .ok_or(LedgerError::LineNotFound(base_line_id))?;

        let base_revision = response_revisions::Entity::find_by_id(base.response_revision_id)
            .one(&txn)
            .await?
            .ok_or(LedgerError::LineNotFound(base_line_id))?;
        let response = supplier_responses::Entity::find_by_id(base_revision.supplier_response_id)
            .one(&txn)
            .await?
            .ok_or(LedgerError::LineNotFound(base_line_id))?;
        let pairing = rfq_suppliers::Entity::find_by_id(response.rfq_supplier_id)
            .one(&txn)
            .await?
            .ok_or(LedgerError::RfqSupplierNotFound(response.rfq_supplier_id))?;

        let reply = match &overrides.supplier_reply_status {
            Some(status) => parse_reply_status(status)?,
            None => parse_reply_status(&base.supplier_reply_status)?,
        };

        let merged = LineTerms {
            unit_price: overrides.unit_price.unwrap_or(base.unit_price),
            currency: overrides.currency.clone().unwrap_or(base.currency.clone()),
            lead_time_days: overrides.lead_time_days.unwrap_or(base.lead_time_days),
            moq: overrides.moq.unwrap_or(base.moq),
            packaging: overrides.packaging.clone().unwrap_or(base.packaging.clone()),
            valid_from: overrides.valid_from.unwrap_or(base.valid_from),
            valid_until: overrides.valid_until.unwrap_or(base.valid_until),
            payment_terms: overrides
                .payment_terms
                .clone()
                .unwrap_or(base.payment_terms.clone()),
            incoterms: overrides.incoterms.clone().unwrap_or(base.incoterms.clone()),
        };
        validate_terms(reply, &merged)?;

        let revision = ensure_latest_revision(&txn, response.id, None, created_by.clone()).await?;

        let line = response_lines::ActiveModel {
            response_revision_id: Set(revision.id),
            rfq_item_id: Set(base.rfq_item_id),
            selection_key: Set(base.selection_key.clone()),
            supplier_part_id: Set(base.supplier_part_id),
            original_part_id: Set(base.original_part_id),
            bundle_id: Set(base.bundle_id),
            bundle_item_id: Set(base.bundle_item_id),
            based_on_response_line_id: Set(Some(base.id)),
            supplier_reply_status: Set(reply.as_str().to_string()),
            unit_price: Set(merged.unit_price),
            currency: Set(merged.currency.clone()),
            lead_time_days: Set(merged.lead_time_days),
            moq: Set(merged.moq),
            packaging: Set(merged.packaging.clone()),
            valid_from: Set(merged.valid_from),
            valid_until: Set(merged.valid_until),
            payment_terms: Set(merged.payment_terms.clone()),
            incoterms: Set(merged.incoterms.clone()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        record_action(
            &txn,
            line.id,
            LineActionType::Negotiation,
            json!({
                "based_on_response_line_id": base.id,
                "before": {
                    "supplier_reply_status": base.supplier_reply_status,
                    "unit_price": base.unit_price,
                    "currency": base.currency,
                    "lead_time_days": base.lead_time_days,
                    "moq": base.moq,
                    "payment_terms": base.payment_terms,
                    "incoterms": base.incoterms,
                },
                "after": {
                    "supplier_reply_status": line.supplier_reply_status,
                    "unit_price": line.unit_price,
                    "currency": line.currency,
                    "lead_time_days": line.lead_time_days,
                    "moq": line.moq,
                    "payment_terms": line.payment_terms,
                    "incoterms": line.incoterms,
                },
            }),
            Some(reason.to_string()),
            created_by,
        )
        .await?;

        line_status_service::upsert_status(
            &txn,
            StatusUpsert {
                rfq_supplier_id: pairing.id,
                rfq_item_id: base.rfq_item_id,
                status: LineStatusKind::Request,
                source_type: Some("response_line".to_string()),
                source_ref: Some(line.id.to_string()),
                last_request_revision_id: None,
                last_response_revision_id: Some(revision.id),
                note: None,
            },
        )
        .await?;

        mark_responded(&txn, &pairing).await?;
        let response = ratchet_review(&txn, response).await?;

        let client_request_id = client_request_for(&txn, pairing.rfq_id).await?;
        txn.commit().await?;

        self.hook.recompute(client_request_id).await;

        Ok(AppendedLine {
            response,
            revision,
            line,
        })
    }

    /// Fully joined read of a supplier's response: revisions in order, each
    /// with its lines.
    pub async fn get_response(
        &self,
        rfq_supplier_id: i32,
    ) -> Result<Option<ResponseDetail>, LedgerError> {
        let response = supplier_responses::Entity::find()
            .filter(supplier_responses::Column::RfqSupplierId.eq(rfq_supplier_id))
            .one(&self.db)
            .await?;
        let Some(response) = response else {
            return Ok(None);
        };

        let revisions = response_revisions::Entity::find()
            .filter(response_revisions::Column::SupplierResponseId.eq(response.id))
            .order_by_asc(response_revisions::Column::RevNumber)
            .all(&self.db)
            .await?;

        let mut detail_revisions = Vec::with_capacity(revisions.len());
        for revision in revisions {
            let lines = response_lines::Entity::find()
                .filter(response_lines::Column::ResponseRevisionId.eq(revision.id))
                .order_by_asc(response_lines::Column::Id)
                .all(&self.db)
                .await?;
            detail_revisions.push(RevisionDetail { revision, lines });
        }

        Ok(Some(ResponseDetail {
            response,
            revisions: detail_revisions,
        }))
    }

    /// Audit trail of a line, oldest first.
    pub async fn list_actions(
        &self,
        line_id: i32,
    ) -> Result<Vec<line_actions::Model>, LedgerError> {
        response_lines::Entity::find_by_id(line_id)
            .one(&self.db)
            .await?
            .ok_or(LedgerError::LineNotFound(line_id))?;

        Ok(line_actions::Entity::find()
            .filter(line_actions::Column::ResponseLineId.eq(line_id))
            .order_by_asc(line_actions::Column::Id)
            .all(&self.db)
            .await?)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ResponseDetail {
    pub response: supplier_responses::Model,
    pub revisions: Vec<RevisionDetail>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RevisionDetail {
    pub revision: response_revisions::Model,
    pub lines: Vec<response_lines::Model>,
}

fn parse_reply_status(status: &str) -> Result<SupplierReplyStatus, LedgerError> {
    SupplierReplyStatus::parse(status)
        .ok_or_else(|| LedgerError::InvalidReplyStatus(status.to_string()))
}

/// Price and currency are both present iff the reply status is QUOTED.
fn validate_terms(reply: SupplierReplyStatus, terms: &LineTerms) -> Result<(), LedgerError> {
    let priced = terms.unit_price.is_some() && terms.currency.is_some();
    let unpriced = terms.unit_price.is_none() && terms.currency.is_none();
    let valid = match reply {
        SupplierReplyStatus::Quoted => priced,
        _ => unpriced,
    };
    if valid {
        Ok(())
    } else {
        Err(LedgerError::PriceCurrencyMismatch)
    }
}

async fn ensure_response(
    txn: &DatabaseTransaction,
    rfq_supplier_id: i32,
) -> Result<supplier_responses::Model, LedgerError> {
    rfq_suppliers::Entity::find_by_id(rfq_supplier_id)
        .one(txn)
        .await?
        .ok_or(LedgerError::RfqSupplierNotFound(rfq_supplier_id))?;

    if let Some(existing) = supplier_responses::Entity::find()
        .filter(supplier_responses::Column::RfqSupplierId.eq(rfq_supplier_id))
        .one(txn)
        .await?
    {
        return Ok(existing);
    }

    let now = chrono::Utc::now();
    let response = supplier_responses::ActiveModel {
        rfq_supplier_id: Set(rfq_supplier_id),
        status: Set(ResponseStatus::Received.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match response.insert(txn).await {
        Ok(model) => Ok(model),
        Err(err)
            if err.sql_err().map_or(false, |e| {
                matches!(e, sea_orm::SqlErr::UniqueConstraintViolation(_))
            }) =>
        {
            // Concurrent first-response race: reuse the winner's row.
            supplier_responses::Entity::find()
                .filter(supplier_responses::Column::RfqSupplierId.eq(rfq_supplier_id))
                .one(txn)
                .await?
                .ok_or(LedgerError::Database(err))
        }
        Err(err) => Err(err.into()),
    }
}

async fn ensure_latest_revision(
    txn: &DatabaseTransaction,
    supplier_response_id: i32,
    note: Option<String>,
    created_by: Option<String>,
) -> Result<response_revisions::Model, LedgerError> {
    if let Some(latest) = response_revisions::Entity::find()
        .filter(response_revisions::Column::SupplierResponseId.eq(supplier_response_id))
        .order_by_desc(response_revisions::Column::RevNumber)
        .one(txn)
        .await?
    {
        return Ok(latest);
    }

    insert_next_revision(txn, supplier_response_id, note, created_by).await
}

async fn insert_next_revision(
    txn: &DatabaseTransaction,
    supplier_response_id: i32,
    note: Option<String>,
    created_by: Option<String>,
) -> Result<response_revisions::Model, LedgerError> {
    // Bounded retry: a concurrent insert of the same rev_number trips the
    // unique index, after which we re-read the max and try again.
    for _ in 0..3 {
        let max_rev = response_revisions::Entity::find()
            .filter(response_revisions::Column::SupplierResponseId.eq(supplier_response_id))
            .order_by_desc(response_revisions::Column::RevNumber)
            .one(txn)
            .await?
            .map(|r| r.rev_number)
            .unwrap_or(0);

        let revision = response_revisions::ActiveModel {
            supplier_response_id: Set(supplier_response_id),
            rev_number: Set(max_rev + 1),
            note: Set(note.clone()),
            created_by: Set(created_by.clone()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        match revision.insert(txn).await {
            Ok(model) => return Ok(model),
            Err(err)
                if err.sql_err().map_or(false, |e| {
                    matches!(e, sea_orm::SqlErr::UniqueConstraintViolation(_))
                }) =>
            {
                continue;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(LedgerError::Database(sea_orm::DbErr::Custom(
        "could not allocate a revision number".to_string(),
    )))
}

async fn record_action(
    txn: &DatabaseTransaction,
    response_line_id: i32,
    action_type: LineActionType,
    payload: serde_json::Value,
    reason: Option<String>,
    created_by: Option<String>,
) -> Result<line_actions::Model, LedgerError> {
    Ok(line_actions::ActiveModel {
        response_line_id: Set(response_line_id),
        action_type: Set(action_type.as_str().to_string()),
        payload: Set(serde_json::to_string(&payload)?),
        reason: Set(reason),
        created_by: Set(created_by),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(txn)
    .await?)
}

/// Mark the pairing responded. `responded_at` is first-write-wins.
async fn mark_responded(
    txn: &DatabaseTransaction,
    pairing: &rfq_suppliers::Model,
) -> Result<(), LedgerError> {
    if pairing.status == RfqSupplierStatus::Responded.as_str() && pairing.responded_at.is_some() {
        return Ok(());
    }

    let mut active: rfq_suppliers::ActiveModel = pairing.clone().into();
    active.status = Set(RfqSupplierStatus::Responded.as_str().to_string());
    if pairing.responded_at.is_none() {
        active.responded_at = Set(Some(chrono::Utc::now()));
    }
    active.update(txn).await?;
    Ok(())
}

/// One-way ratchet: received → review. `approved` is set externally when a
/// selection consumes the line and is never downgraded here.
async fn ratchet_review(
    txn: &DatabaseTransaction,
    response: supplier_responses::Model,
) -> Result<supplier_responses::Model, LedgerError> {
    if response.status != ResponseStatus::Received.as_str() {
        return Ok(response);
    }

    let mut active: supplier_responses::ActiveModel = response.into();
    active.status = Set(ResponseStatus::Review.as_str().to_string());
    active.updated_at = Set(chrono::Utc::now());
    Ok(active.update(txn).await?)
}

async fn client_request_for(
    txn: &DatabaseTransaction,
    rfq_id: i32,
) -> Result<i32, LedgerError> {
    let rfq = rfqs::Entity::find_by_id(rfq_id)
        .one(txn)
        .await?
        .ok_or(LedgerError::RfqNotFound(rfq_id))?;
    Ok(rfq.client_request_id)
}
