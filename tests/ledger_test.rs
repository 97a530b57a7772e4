//! Negotiation ledger tests
//!
//! Covers revision numbering, the quoted-price invariant, immutable
//! negotiation lineage and the response status ratchet.

use anyhow::Result;
use chrono::Utc;
use quoteforge::database::entities::common_types::{
    ResponseStatus, RfqSupplierStatus, SupplierReplyStatus,
};
use quoteforge::database::entities::*;
use quoteforge::database::setup_database;
use quoteforge::errors::LedgerError;
use quoteforge::services::response_ledger_service::{
    LineOverrides, LineTerms, NewLineInput, ResponseLedgerService,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
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
        requested_original_part_id: Set(None),
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

fn quoted_line(rfq_item_id: i32) -> NewLineInput {
    NewLineInput {
        rfq_item_id,
        supplier_reply_status: SupplierReplyStatus::Quoted.as_str().to_string(),
        terms: LineTerms {
            unit_price: Some(12.5),
            currency: Some("EUR".to_string()),
            lead_time_days: Some(21),
            ..Default::default()
        },
        selection_key: None,
        bundle_id: None,
        bundle_item_id: None,
        original_part_id: None,
        part: None,
        reason: None,
        created_by: Some("buyer".to_string()),
    }
}

#[tokio::test]
async fn revision_numbers_are_gapless_from_one() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let (_, first) = service.ensure_revision(fixture.rfq_supplier_id).await?;
    assert_eq!(first.rev_number, 1);

    let (_, second) = service
        .create_new_revision(fixture.rfq_supplier_id, Some("counter".to_string()), None)
        .await?;
    assert_eq!(second.rev_number, 2);

    let (_, third) = service
        .create_new_revision(fixture.rfq_supplier_id, None, None)
        .await?;
    assert_eq!(third.rev_number, 3);

    Ok(())
}

#[tokio::test]
async fn ensure_revision_is_idempotent() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let (response_a, rev_a) = service.ensure_revision(fixture.rfq_supplier_id).await?;
    let (response_b, rev_b) = service.ensure_revision(fixture.rfq_supplier_id).await?;

    assert_eq!(response_a.id, response_b.id);
    assert_eq!(rev_a.id, rev_b.id);
    assert_eq!(rev_b.rev_number, 1);

    let count = response_revisions::Entity::find().all(&db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

#[tokio::test]
async fn quoted_without_currency_is_rejected_with_no_row() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let mut input = quoted_line(fixture.rfq_item_id);
    input.terms.currency = None;

    let err = service
        .append_manual_line(fixture.rfq_supplier_id, input)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::PriceCurrencyMismatch));

    assert!(response_lines::Entity::find().all(&db).await?.is_empty());
    assert!(line_actions::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn no_stock_with_price_is_rejected() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let mut input = quoted_line(fixture.rfq_item_id);
    input.supplier_reply_status = SupplierReplyStatus::NoStock.as_str().to_string();

    let err = service
        .append_manual_line(fixture.rfq_supplier_id, input)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::PriceCurrencyMismatch));

    Ok(())
}

#[tokio::test]
async fn manual_line_records_audit_and_ratchets_status() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let appended = service
        .append_manual_line(fixture.rfq_supplier_id, quoted_line(fixture.rfq_item_id))
        .await?;

    assert_eq!(appended.revision.rev_number, 1);
    assert_eq!(appended.line.unit_price, Some(12.5));
    assert_eq!(appended.line.based_on_response_line_id, None);
    assert_eq!(appended.response.status, ResponseStatus::Review.as_str());

    let actions = service.list_actions(appended.line.id).await?;
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action_type, "CREATE");

    let pairing = rfq_suppliers::Entity::find_by_id(fixture.rfq_supplier_id)
        .one(&db)
        .await?
        .expect("pairing exists");
    assert_eq!(pairing.status, RfqSupplierStatus::Responded.as_str());
    assert!(pairing.responded_at.is_some());

    let status = line_statuses::Entity::find()
        .filter(line_statuses::Column::RfqItemId.eq(fixture.rfq_item_id))
        .one(&db)
        .await?
        .expect("line status row exists");
    assert_eq!(status.status, "REQUEST");
    assert_eq!(status.last_response_revision_id, Some(appended.revision.id));

    Ok(())
}

#[tokio::test]
async fn responded_at_is_first_write_wins() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    service
        .append_manual_line(fixture.rfq_supplier_id, quoted_line(fixture.rfq_item_id))
        .await?;
    let first = rfq_suppliers::Entity::find_by_id(fixture.rfq_supplier_id)
        .one(&db)
        .await?
        .expect("pairing exists")
        .responded_at;

    service
        .append_manual_line(fixture.rfq_supplier_id, quoted_line(fixture.rfq_item_id))
        .await?;
    let second = rfq_suppliers::Entity::find_by_id(fixture.rfq_supplier_id)
        .one(&db)
        .await?
        .expect("pairing exists")
        .responded_at;

    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn revise_requires_a_reason() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let appended = service
        .append_manual_line(fixture.rfq_supplier_id, quoted_line(fixture.rfq_item_id))
        .await?;

    let err = service
        .revise_line(appended.line.id, LineOverrides::default(), "   ", None)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::ReasonRequired));

    Ok(())
}

#[tokio::test]
async fn revise_appends_a_new_line_and_leaves_the_base_untouched() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let base = service
        .append_manual_line(fixture.rfq_supplier_id, quoted_line(fixture.rfq_item_id))
        .await?;

    let overrides = LineOverrides {
        unit_price: Some(Some(11.0)),
        ..Default::default()
    };
    let revised = service
        .revise_line(base.line.id, overrides, "negotiated discount", None)
        .await?;

    assert_ne!(revised.line.id, base.line.id);
    assert_eq!(revised.line.based_on_response_line_id, Some(base.line.id));
    assert_eq!(revised.line.unit_price, Some(11.0));
    assert_eq!(revised.line.currency, Some("EUR".to_string()));
    assert_eq!(revised.line.lead_time_days, Some(21));

    let original = response_lines::Entity::find_by_id(base.line.id)
        .one(&db)
        .await?
        .expect("base line still exists");
    assert_eq!(original.unit_price, Some(12.5));

    let actions = service.list_actions(revised.line.id).await?;
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action_type, "NEGOTIATION");
    assert_eq!(actions[0].reason.as_deref(), Some("negotiated discount"));

    Ok(())
}

#[tokio::test]
async fn revise_can_clear_price_when_switching_to_no_stock() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let base = service
        .append_manual_line(fixture.rfq_supplier_id, quoted_line(fixture.rfq_item_id))
        .await?;

    let overrides = LineOverrides {
        supplier_reply_status: Some(SupplierReplyStatus::NoStock.as_str().to_string()),
        unit_price: Some(None),
        currency: Some(None),
        ..Default::default()
    };
    let revised = service
        .revise_line(base.line.id, overrides, "supplier ran out", None)
        .await?;

    assert_eq!(revised.line.supplier_reply_status, "NO_STOCK");
    assert_eq!(revised.line.unit_price, None);
    assert_eq!(revised.line.currency, None);

    Ok(())
}

#[tokio::test]
async fn line_for_item_of_another_rfq_is_rejected() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let other_rfq = rfqs::ActiveModel {
        reference: Set("RFQ-2026-002".to_string()),
        client_request_id: Set(502),
        active_request_revision: Set(1),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let foreign_item = rfq_items::ActiveModel {
        rfq_id: Set(other_rfq.id),
        line_number: Set(10),
        requested_original_part_id: Set(None),
        quantity: Set(None),
        request_revision: Set(1),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let err = service
        .append_manual_line(fixture.rfq_supplier_id, quoted_line(foreign_item.id))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::ItemWrongRfq { .. }));

    Ok(())
}

#[tokio::test]
async fn invite_is_idempotent() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let _fixture = seed(&db).await?;
    let service = ResponseLedgerService::new(db.clone());

    let rfq = rfqs::Entity::find().one(&db).await?.expect("rfq exists");
    let supplier = suppliers::Entity::find()
        .one(&db)
        .await?
        .expect("supplier exists");

    let again = service.invite(rfq.id, supplier.id).await?;
    let pairings = rfq_suppliers::Entity::find().all(&db).await?;
    assert_eq!(pairings.len(), 1);
    assert_eq!(again.id, pairings[0].id);

    Ok(())
}
