//! Workspace aggregation tests

use anyhow::Result;
use chrono::Utc;
use quoteforge::database::entities::common_types::{RfqSupplierStatus, SupplierReplyStatus};
use quoteforge::database::entities::*;
use quoteforge::database::setup_database;
use quoteforge::services::response_ledger_service::{
    LineOverrides, LineTerms, NewLineInput, ResponseLedgerService,
};
use quoteforge::services::workspace_service::{WorkspaceFilter, WorkspaceService};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use tempfile::NamedTempFile;

async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

struct Fixture {
    rfq_id: i32,
    supplier_id: i32,
    rfq_supplier_id: i32,
    rfq_item_id: i32,
}

async fn seed(db: &DatabaseConnection) -> Result<Fixture> {
    let now = Utc::now();

    let supplier = suppliers::ActiveModel {
        name: Set("Hydra Supply GmbH".to_string()),
        code: Set("HYD".to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let rfq = rfqs::ActiveModel {
        reference: Set("RFQ-2026-001".to_string()),
        client_request_id: Set(501),
        active_request_revision: Set(2),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let item = rfq_items::ActiveModel {
        rfq_id: Set(rfq.id),
        line_number: Set(10),
        requested_original_part_id: Set(None),
        quantity: Set(Some(4.0)),
        request_revision: Set(2),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let pairing = rfq_suppliers::ActiveModel {
        rfq_id: Set(rfq.id),
        supplier_id: Set(supplier.id),
        status: Set(RfqSupplierStatus::Invited.as_str().to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(Fixture {
        rfq_id: rfq.id,
        supplier_id: supplier.id,
        rfq_supplier_id: pairing.id,
        rfq_item_id: item.id,
    })
}

fn quoted_line(rfq_item_id: i32, price: f64) -> NewLineInput {
    NewLineInput {
        rfq_item_id,
        supplier_reply_status: SupplierReplyStatus::Quoted.as_str().to_string(),
        terms: LineTerms {
            unit_price: Some(price),
            currency: Some("EUR".to_string()),
            ..Default::default()
        },
        selection_key: None,
        bundle_id: None,
        bundle_item_id: None,
        original_part_id: None,
        part: None,
        reason: None,
        created_by: None,
    }
}

#[tokio::test]
async fn workspace_shows_the_latest_line_per_partition() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let ledger = ResponseLedgerService::new(db.clone());

    let base = ledger
        .append_manual_line(fixture.rfq_supplier_id, quoted_line(fixture.rfq_item_id, 12.5))
        .await?;
    let revised = ledger
        .revise_line(
            base.line.id,
            LineOverrides {
                unit_price: Some(Some(11.0)),
                ..Default::default()
            },
            "negotiated",
            None,
        )
        .await?;

    let workspace = WorkspaceService::new(db.clone());
    let view = workspace
        .workspace(fixture.rfq_id, WorkspaceFilter::default())
        .await?;

    assert_eq!(view.rows.len(), 1);
    let row = &view.rows[0];
    let line = row.line.as_ref().expect("row has a line");
    assert_eq!(line.id, revised.line.id);
    assert_eq!(line.unit_price, Some(11.0));
    assert_eq!(row.negotiation_depth, 1);
    assert_eq!(row.supplier_id, fixture.supplier_id);
    assert!(!row.is_archived);
    assert_eq!(row.status.as_ref().map(|s| s.status.as_str()), Some("REQUEST"));

    Ok(())
}

#[tokio::test]
async fn unanswered_items_appear_without_a_line() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;

    let workspace = WorkspaceService::new(db.clone());
    let view = workspace
        .workspace(fixture.rfq_id, WorkspaceFilter::default())
        .await?;

    assert_eq!(view.rows.len(), 1);
    assert!(view.rows[0].line.is_none());
    assert!(view.rows[0].status.is_none());
    assert_eq!(view.rows[0].negotiation_depth, 0);

    Ok(())
}

#[tokio::test]
async fn archived_items_are_hidden_unless_requested() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;

    // Item from an older request revision than the RFQ's active one.
    rfq_items::ActiveModel {
        rfq_id: Set(fixture.rfq_id),
        line_number: Set(5),
        requested_original_part_id: Set(None),
        quantity: Set(Some(1.0)),
        request_revision: Set(1),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let workspace = WorkspaceService::new(db.clone());

    let view = workspace
        .workspace(fixture.rfq_id, WorkspaceFilter::default())
        .await?;
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].rfq_item.id, fixture.rfq_item_id);

    let view = workspace
        .workspace(
            fixture.rfq_id,
            WorkspaceFilter {
                include_archived: true,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(view.rows.len(), 2);
    assert!(view.rows[0].is_archived);
    assert!(!view.rows[1].is_archived);

    Ok(())
}

#[tokio::test]
async fn supplier_filter_restricts_rows() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;

    let other = suppliers::ActiveModel {
        name: Set("Other Parts Ltd".to_string()),
        code: Set("OTH".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    rfq_suppliers::ActiveModel {
        rfq_id: Set(fixture.rfq_id),
        supplier_id: Set(other.id),
        status: Set(RfqSupplierStatus::Invited.as_str().to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let workspace = WorkspaceService::new(db.clone());

    let all = workspace
        .workspace(fixture.rfq_id, WorkspaceFilter::default())
        .await?;
    assert_eq!(all.rows.len(), 2);
    assert_eq!(all.suppliers.len(), 2);

    let filtered = workspace
        .workspace(
            fixture.rfq_id,
            WorkspaceFilter {
                supplier_id: Some(other.id),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(filtered.rows.len(), 1);
    assert_eq!(filtered.rows[0].supplier_id, other.id);

    Ok(())
}
