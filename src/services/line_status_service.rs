//! Per-(supplier, RFQ item) resolution state.
//!
//! Single source of truth for "has this line been answered" queries. The row
//! is a derived projection: every ledger action that touches a pair upserts
//! it, and revision pointers are merged keep-if-null so they never regress.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::database::entities::common_types::LineStatusKind;
use crate::database::entities::line_statuses;
use crate::errors::LedgerError;

#[derive(Clone, Debug)]
pub struct StatusUpsert {
    pub rfq_supplier_id: i32,
    pub rfq_item_id: i32,
    pub status: LineStatusKind,
    pub source_type: Option<String>,
    pub source_ref: Option<String>,
    pub last_request_revision_id: Option<i32>,
    pub last_response_revision_id: Option<i32>,
    pub note: Option<String>,
}

/// Idempotent upsert keyed by (rfq_supplier, rfq_item).
///
/// Revision pointers only ever move forward: a `None` in the upsert keeps the
/// recorded pointer, a `Some` replaces it.
pub async fn upsert_status<C: ConnectionTrait>(
    conn: &C,
    upsert: StatusUpsert,
) -> Result<line_statuses::Model, LedgerError> {
    let now = chrono::Utc::now();

    let existing = line_statuses::Entity::find()
        .filter(line_statuses::Column::RfqSupplierId.eq(upsert.rfq_supplier_id))
        .filter(line_statuses::Column::RfqItemId.eq(upsert.rfq_item_id))
        .one(conn)
        .await?;

    let model = match existing {
        Some(current) => {
            let last_request = upsert
                .last_request_revision_id
                .or(current.last_request_revision_id);
            let last_response = upsert
                .last_response_revision_id
                .or(current.last_response_revision_id);

            let mut active: line_statuses::ActiveModel = current.into();
            active.status = Set(upsert.status.as_str().to_string());
            active.source_type = Set(upsert.source_type);
            active.source_ref = Set(upsert.source_ref);
            active.last_request_revision_id = Set(last_request);
            active.last_response_revision_id = Set(last_response);
            if upsert.note.is_some() {
                active.note = Set(upsert.note);
            }
            active.updated_at = Set(now);
            active.update(conn).await?
        }
        None => {
            let new_status = line_statuses::ActiveModel {
                rfq_supplier_id: Set(upsert.rfq_supplier_id),
                rfq_item_id: Set(upsert.rfq_item_id),
                status: Set(upsert.status.as_str().to_string()),
                source_type: Set(upsert.source_type),
                source_ref: Set(upsert.source_ref),
                last_request_revision_id: Set(upsert.last_request_revision_id),
                last_response_revision_id: Set(upsert.last_response_revision_id),
                note: Set(upsert.note),
                updated_at: Set(now),
                ..Default::default()
            };
            match new_status.insert(conn).await {
                Ok(model) => model,
                Err(err)
                    if err.sql_err().map_or(false, |e| {
                        matches!(e, sea_orm::SqlErr::UniqueConstraintViolation(_))
                    }) =>
                {
                    // Lost a concurrent insert race; the row exists now.
                    line_statuses::Entity::find()
                        .filter(line_statuses::Column::RfqSupplierId.eq(upsert.rfq_supplier_id))
                        .filter(line_statuses::Column::RfqItemId.eq(upsert.rfq_item_id))
                        .one(conn)
                        .await?
                        .ok_or(LedgerError::Database(err))?
                }
                Err(err) => return Err(err.into()),
            }
        }
    };

    Ok(model)
}
