//! Negotiation workspace aggregation.
//!
//! Read-only projection of an RFQ: for every (item, invited supplier) cell,
//! the latest offer line per selection partition, the resolution status row
//! and the negotiation depth of the current line. Items belonging to an
//! older request revision than the RFQ's active one are archived and hidden
//! unless explicitly requested.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::database::entities::{
    line_statuses, response_lines, response_revisions, rfq_items, rfq_suppliers, rfqs, suppliers,
    supplier_responses,
};
use crate::errors::LedgerError;

#[derive(Clone, Debug, Serialize)]
pub struct WorkspaceRow {
    pub rfq_item: rfq_items::Model,
    pub rfq_supplier_id: i32,
    pub supplier_id: i32,
    pub selection_key: Option<String>,
    pub line: Option<response_lines::Model>,
    pub status: Option<line_statuses::Model>,
    pub negotiation_depth: u32,
    pub is_archived: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct WorkspaceView {
    pub rfq: rfqs::Model,
    pub suppliers: Vec<suppliers::Model>,
    pub rows: Vec<WorkspaceRow>,
}

#[derive(Clone, Debug, Default)]
pub struct WorkspaceFilter {
    pub supplier_id: Option<i32>,
    pub include_archived: bool,
}

#[derive(Clone)]
pub struct WorkspaceService {
    db: DatabaseConnection,
}

impl WorkspaceService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn workspace(
        &self,
        rfq_id: i32,
        filter: WorkspaceFilter,
    ) -> Result<WorkspaceView, LedgerError> {
        let rfq = rfqs::Entity::find_by_id(rfq_id)
            .one(&self.db)
            .await?
            .ok_or(LedgerError::RfqNotFound(rfq_id))?;

        let items = rfq_items::Entity::find()
            .filter(rfq_items::Column::RfqId.eq(rfq_id))
            .order_by_asc(rfq_items::Column::LineNumber)
            .all(&self.db)
            .await?;

        let mut pairings = rfq_suppliers::Entity::find()
            .filter(rfq_suppliers::Column::RfqId.eq(rfq_id))
            .all(&self.db)
            .await?;
        if let Some(supplier_id) = filter.supplier_id {
            pairings.retain(|p| p.supplier_id == supplier_id);
        }

        let supplier_ids: Vec<i32> = pairings.iter().map(|p| p.supplier_id).collect();
        let supplier_models = if supplier_ids.is_empty() {
            Vec::new()
        } else {
            suppliers::Entity::find()
                .filter(suppliers::Column::Id.is_in(supplier_ids))
                .all(&self.db)
                .await?
        };

        let mut rows = Vec::new();
        for pairing in &pairings {
            let lines = lines_for_pairing(&self.db, pairing.id).await?;
            let by_id: HashMap<i32, &response_lines::Model> =
                lines.iter().map(|l| (l.id, l)).collect();

            // Latest line per (item, selection_key) partition. Line ids are
            // monotonic within a response, so max id is the latest append.
            let mut latest: HashMap<(i32, Option<String>), &response_lines::Model> =
                HashMap::new();
            for line in &lines {
                let key = (line.rfq_item_id, line.selection_key.clone());
                match latest.get(&key) {
                    Some(existing) if existing.id >= line.id => {}
                    _ => {
                        latest.insert(key, line);
                    }
                }
            }

            let statuses: HashMap<i32, line_statuses::Model> = line_statuses::Entity::find()
                .filter(line_statuses::Column::RfqSupplierId.eq(pairing.id))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|s| (s.rfq_item_id, s))
                .collect();

            for item in &items {
                let is_archived = item.request_revision != rfq.active_request_revision;
                if is_archived && !filter.include_archived {
                    continue;
                }

                let partitions: Vec<(&Option<String>, &&response_lines::Model)> = latest
                    .iter()
                    .filter(|((item_id, _), _)| *item_id == item.id)
                    .map(|((_, key), line)| (key, line))
                    .collect();

                if partitions.is_empty() {
                    rows.push(WorkspaceRow {
                        rfq_item: item.clone(),
                        rfq_supplier_id: pairing.id,
                        supplier_id: pairing.supplier_id,
                        selection_key: None,
                        line: None,
                        status: statuses.get(&item.id).cloned(),
                        negotiation_depth: 0,
                        is_archived,
                    });
                    continue;
                }

                for (selection_key, line) in partitions {
                    rows.push(WorkspaceRow {
                        rfq_item: item.clone(),
                        rfq_supplier_id: pairing.id,
                        supplier_id: pairing.supplier_id,
                        selection_key: selection_key.clone(),
                        line: Some((*line).clone()),
                        status: statuses.get(&item.id).cloned(),
                        negotiation_depth: negotiation_depth(line, &by_id),
                        is_archived,
                    });
                }
            }
        }

        rows.sort_by(|a, b| {
            (a.rfq_item.line_number, a.supplier_id, &a.selection_key).cmp(&(
                b.rfq_item.line_number,
                b.supplier_id,
                &b.selection_key,
            ))
        });

        Ok(WorkspaceView {
            rfq,
            suppliers: supplier_models,
            rows,
        })
    }
}

async fn lines_for_pairing(
    db: &DatabaseConnection,
    rfq_supplier_id: i32,
) -> Result<Vec<response_lines::Model>, LedgerError> {
    let Some(response) = supplier_responses::Entity::find()
        .filter(supplier_responses::Column::RfqSupplierId.eq(rfq_supplier_id))
        .one(db)
        .await?
    else {
        return Ok(Vec::new());
    };

    let revision_ids: Vec<i32> = response_revisions::Entity::find()
        .filter(response_revisions::Column::SupplierResponseId.eq(response.id))
        .all(db)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();
    if revision_ids.is_empty() {
        return Ok(Vec::new());
    }

    Ok(response_lines::Entity::find()
        .filter(response_lines::Column::ResponseRevisionId.is_in(revision_ids))
        .order_by_asc(response_lines::Column::Id)
        .all(db)
        .await?)
}

/// Number of hops along the `based_on` chain back to the original line.
fn negotiation_depth(
    line: &response_lines::Model,
    by_id: &HashMap<i32, &response_lines::Model>,
) -> u32 {
    let mut depth = 0;
    let mut current = line;
    while let Some(base_id) = current.based_on_response_line_id {
        match by_id.get(&base_id) {
            Some(base) => {
                depth += 1;
                current = base;
            }
            None => break,
        }
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: i32, based_on: Option<i32>) -> response_lines::Model {
        response_lines::Model {
            id,
            response_revision_id: 1,
            rfq_item_id: 1,
            selection_key: None,
            supplier_part_id: None,
            original_part_id: None,
            bundle_id: None,
            bundle_item_id: None,
            based_on_response_line_id: based_on,
            supplier_reply_status: "QUOTED".to_string(),
            unit_price: Some(1.0),
            currency: Some("EUR".to_string()),
            lead_time_days: None,
            moq: None,
            packaging: None,
            valid_from: None,
            valid_until: None,
            payment_terms: None,
            incoterms: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn depth_follows_the_based_on_chain() {
        let a = line(1, None);
        let b = line(2, Some(1));
        let c = line(3, Some(2));
        let by_id: HashMap<i32, &response_lines::Model> =
            [(1, &a), (2, &b), (3, &c)].into_iter().collect();

        assert_eq!(negotiation_depth(&a, &by_id), 0);
        assert_eq!(negotiation_depth(&c, &by_id), 2);
    }

    #[test]
    fn depth_stops_at_missing_ancestors() {
        let orphan = line(5, Some(99));
        let by_id: HashMap<i32, &response_lines::Model> = [(5, &orphan)].into_iter().collect();
        assert_eq!(negotiation_depth(&orphan, &by_id), 0);
    }
}
