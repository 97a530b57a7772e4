//! Selection disambiguation tests
//!
//! Exercises the role resolver through the ledger's manual-line operation.

use anyhow::Result;
use chrono::Utc;
use quoteforge::database::entities::common_types::{
    RfqSupplierStatus, SelectionType, SupplierReplyStatus,
};
use quoteforge::database::entities::*;
use quoteforge::database::setup_database;
use quoteforge::errors::{LedgerError, SelectionError};
use quoteforge::services::response_ledger_service::{
    LineTerms, NewLineInput, ResponseLedgerService,
};
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
        active_request_revision: Set(1),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let item = rfq_items::ActiveModel {
        rfq_id: Set(rfq.id),
        line_number: Set(10),
        requested_original_part_id: Set(Some(700)),
        quantity: Set(Some(4.0)),
        request_revision: Set(1),
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
        rfq_supplier_id: pairing.id,
        rfq_item_id: item.id,
    })
}

async fn seed_selection(
    db: &DatabaseConnection,
    rfq_item_id: i32,
    key: &str,
    selection_type: SelectionType,
    bundle_id: Option<i32>,
    original_part_id: Option<i32>,
) -> Result<rfq_item_selections::Model> {
    Ok(rfq_item_selections::ActiveModel {
        rfq_item_id: Set(rfq_item_id),
        selection_key: Set(key.to_string()),
        selection_type: Set(selection_type.as_str().to_string()),
        bundle_id: Set(bundle_id),
        bundle_item_id: Set(None),
        original_part_id: Set(original_part_id),
        role_name: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

fn line(rfq_item_id: i32) -> NewLineInput {
    NewLineInput {
        rfq_item_id,
        supplier_reply_status: SupplierReplyStatus::Quoted.as_str().to_string(),
        terms: LineTerms {
            unit_price: Some(10.0),
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
async fn two_candidates_without_hints_fail_as_ambiguous() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    seed_selection(
        &db,
        fixture.rfq_item_id,
        "bom-a",
        SelectionType::BomComponent,
        Some(100),
        Some(701),
    )
    .await?;
    seed_selection(
        &db,
        fixture.rfq_item_id,
        "bom-b",
        SelectionType::BomComponent,
        Some(200),
        Some(702),
    )
    .await?;

    let service = ResponseLedgerService::new(db.clone());
    let err = service
        .append_manual_line(fixture.rfq_supplier_id, line(fixture.rfq_item_id))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::Selection(SelectionError::Ambiguous { candidates: 2, .. })
    ));

    Ok(())
}

#[tokio::test]
async fn bundle_hint_narrows_to_one_candidate() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    seed_selection(
        &db,
        fixture.rfq_item_id,
        "bom-a",
        SelectionType::BomComponent,
        Some(100),
        Some(701),
    )
    .await?;
    seed_selection(
        &db,
        fixture.rfq_item_id,
        "bom-b",
        SelectionType::BomComponent,
        Some(200),
        Some(702),
    )
    .await?;

    let service = ResponseLedgerService::new(db.clone());
    let mut input = line(fixture.rfq_item_id);
    input.bundle_id = Some(200);
    let appended = service
        .append_manual_line(fixture.rfq_supplier_id, input)
        .await?;

    assert_eq!(appended.line.selection_key.as_deref(), Some("bom-b"));
    assert_eq!(appended.line.original_part_id, Some(702));
    assert_eq!(appended.line.bundle_id, Some(200));

    Ok(())
}

#[tokio::test]
async fn explicit_selection_key_wins_over_narrowing() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    seed_selection(
        &db,
        fixture.rfq_item_id,
        "bom-a",
        SelectionType::BomComponent,
        Some(100),
        Some(701),
    )
    .await?;
    seed_selection(
        &db,
        fixture.rfq_item_id,
        "bom-b",
        SelectionType::BomComponent,
        Some(200),
        Some(702),
    )
    .await?;

    let service = ResponseLedgerService::new(db.clone());
    let mut input = line(fixture.rfq_item_id);
    input.selection_key = Some("bom-a".to_string());
    let appended = service
        .append_manual_line(fixture.rfq_supplier_id, input)
        .await?;

    assert_eq!(appended.line.selection_key.as_deref(), Some("bom-a"));

    Ok(())
}

#[tokio::test]
async fn unknown_selection_key_is_rejected() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    seed_selection(
        &db,
        fixture.rfq_item_id,
        "bom-a",
        SelectionType::BomComponent,
        Some(100),
        Some(701),
    )
    .await?;

    let service = ResponseLedgerService::new(db.clone());
    let mut input = line(fixture.rfq_item_id);
    input.selection_key = Some("nope".to_string());
    let err = service
        .append_manual_line(fixture.rfq_supplier_id, input)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::Selection(SelectionError::UnknownSelectionKey { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn kit_role_line_carries_no_original_part_by_default() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    seed_selection(
        &db,
        fixture.rfq_item_id,
        "seal-kit",
        SelectionType::KitRole,
        None,
        Some(710),
    )
    .await?;

    let service = ResponseLedgerService::new(db.clone());
    let appended = service
        .append_manual_line(fixture.rfq_supplier_id, line(fixture.rfq_item_id))
        .await?;

    assert_eq!(appended.line.selection_key.as_deref(), Some("seal-kit"));
    assert_eq!(appended.line.original_part_id, None);

    Ok(())
}

#[tokio::test]
async fn plain_item_falls_back_to_the_requested_part() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;

    let service = ResponseLedgerService::new(db.clone());
    let appended = service
        .append_manual_line(fixture.rfq_supplier_id, line(fixture.rfq_item_id))
        .await?;

    assert_eq!(appended.line.selection_key, None);
    assert_eq!(appended.line.original_part_id, Some(700));

    Ok(())
}
