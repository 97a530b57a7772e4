//! Structural-role resolution for incoming offer lines.
//!
//! A multi-part RFQ item can be answered in several roles (BOM component,
//! kit role, alternate part). This resolver decides which role an offer
//! answers, narrowing by the caller's hints and failing rather than guessing
//! when more than one candidate remains.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::database::entities::common_types::SelectionType;
use crate::database::entities::{rfq_item_selections, rfq_items};
use crate::errors::SelectionError;

/// Caller-supplied disambiguation hints.
#[derive(Clone, Debug, Default)]
pub struct SelectionHints {
    pub selection_key: Option<String>,
    pub bundle_id: Option<i32>,
    pub bundle_item_id: Option<i32>,
    pub original_part_id: Option<i32>,
}

/// Outcome of resolution: the selection row answered (if any) and the
/// original part the offer should be recorded against.
#[derive(Clone, Debug)]
pub struct ResolvedSelection {
    pub selection: Option<rfq_item_selections::Model>,
    pub original_part_id: Option<i32>,
}

/// Resolve which structural role of `item` an offer with the given hints
/// answers.
pub async fn resolve<C: ConnectionTrait>(
    conn: &C,
    item: &rfq_items::Model,
    hints: &SelectionHints,
) -> Result<ResolvedSelection, SelectionError> {
    if let Some(key) = hints.selection_key.as_deref() {
        let selection = rfq_item_selections::Entity::find()
            .filter(rfq_item_selections::Column::RfqItemId.eq(item.id))
            .filter(rfq_item_selections::Column::SelectionKey.eq(key))
            .one(conn)
            .await?
            .ok_or_else(|| SelectionError::UnknownSelectionKey {
                rfq_item_id: item.id,
                key: key.to_string(),
            })?;
        return Ok(finish(item, hints, Some(selection)));
    }

    let candidates = rfq_item_selections::Entity::find()
        .filter(rfq_item_selections::Column::RfqItemId.eq(item.id))
        .all(conn)
        .await?;

    match candidates.len() {
        0 => Ok(finish(item, hints, None)),
        1 => Ok(finish(item, hints, candidates.into_iter().next())),
        _ => {
            let narrowed = narrow(candidates, hints);
            if narrowed.len() == 1 {
                Ok(finish(item, hints, narrowed.into_iter().next()))
            } else {
                Err(SelectionError::Ambiguous {
                    rfq_item_id: item.id,
                    candidates: narrowed.len(),
                })
            }
        }
    }
}

/// Successive narrowing: bundle identifiers, then component typing, then
/// original-part reference. Each step only applies when the corresponding
/// hint was supplied.
fn narrow(
    mut candidates: Vec<rfq_item_selections::Model>,
    hints: &SelectionHints,
) -> Vec<rfq_item_selections::Model> {
    if let Some(bundle_id) = hints.bundle_id {
        candidates.retain(|s| s.bundle_id == Some(bundle_id));
    }
    if let Some(bundle_item_id) = hints.bundle_item_id {
        candidates.retain(|s| {
            s.selection_type == SelectionType::BomComponent.as_str()
                && s.bundle_item_id == Some(bundle_item_id)
        });
    }
    if candidates.len() > 1 {
        if let Some(original_part_id) = hints.original_part_id {
            candidates.retain(|s| s.original_part_id == Some(original_part_id));
        }
    }
    candidates
}

fn finish(
    item: &rfq_items::Model,
    hints: &SelectionHints,
    selection: Option<rfq_item_selections::Model>,
) -> ResolvedSelection {
    let original_part_id = match &selection {
        // Kit roles default to no original part: quoting a role does not
        // imply a specific part was quoted.
        Some(s) if s.selection_type == SelectionType::KitRole.as_str() => hints.original_part_id,
        Some(s) => hints
            .original_part_id
            .or(s.original_part_id)
            .or(item.requested_original_part_id),
        None => hints
            .original_part_id
            .or(item.requested_original_part_id),
    };

    ResolvedSelection {
        selection,
        original_part_id,
    }
}
