//! Price list import, matching and activation tests

use anyhow::Result;
use chrono::Utc;
use quoteforge::database::entities::common_types::{PriceListLineStatus, PriceListStatus};
use quoteforge::database::entities::*;
use quoteforge::database::setup_database;
use quoteforge::errors::PriceListError;
use quoteforge::services::price_list_service::{NewPriceList, PriceListService};
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

async fn seed_supplier(db: &DatabaseConnection) -> Result<suppliers::Model> {
    Ok(suppliers::ActiveModel {
        name: Set("Hydra Supply GmbH".to_string()),
        code: Set("HYD".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

async fn seed_part(
    db: &DatabaseConnection,
    supplier_id: i32,
    number: &str,
    canonical: &str,
) -> Result<supplier_parts::Model> {
    let now = Utc::now();
    Ok(supplier_parts::ActiveModel {
        supplier_id: Set(supplier_id),
        supplier_part_number: Set(number.to_string()),
        canonical_part_number: Set(Some(canonical.to_string())),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

async fn create_draft(
    service: &PriceListService,
    supplier_id: i32,
    name: &str,
) -> Result<supplier_price_lists::Model> {
    Ok(service
        .create_list(NewPriceList {
            supplier_id,
            name: name.to_string(),
            currency: Some("EUR".to_string()),
            valid_from: None,
            valid_until: None,
        })
        .await?)
}

#[tokio::test]
async fn csv_rows_are_classified_against_the_catalog() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    seed_part(&db, supplier.id, "ABC123", "ABC123").await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,unit_price,currency\nabc-123,12.50,EUR\nXYZ999,3.20,EUR\n,,\n";
    let report = service.import_csv(list.id, csv.as_bytes()).await?;

    assert_eq!(report.total, 3);
    assert_eq!(report.matched, 1);
    assert_eq!(report.new_part_required, 1);
    assert_eq!(report.ignored, 1);

    let lines = service.get_list(list.id).await?.lines;
    assert_eq!(lines[0].line_status, "matched");
    assert_eq!(lines[0].match_method.as_deref(), Some("exact_canonical"));
    assert!(lines[0].supplier_part_id.is_some());
    assert_eq!(lines[1].line_status, "new_part_required");
    assert_eq!(lines[2].line_status, "ignored");

    Ok(())
}

#[tokio::test]
async fn alias_matches_report_the_alias_method() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    let part = seed_part(&db, supplier.id, "ABC123", "ABC123").await?;
    supplier_part_aliases::ActiveModel {
        supplier_part_id: Set(part.id),
        alias: Set("ABC-123-OLD".to_string()),
        canonical_alias: Set(Some("ABC123OLD".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,unit_price,currency\nabc-123-old,9.00,EUR\n";
    let report = service.import_csv(list.id, csv.as_bytes()).await?;

    assert_eq!(report.matched, 1);
    let lines = service.get_list(list.id).await?.lines;
    assert_eq!(lines[0].match_method.as_deref(), Some("alias"));
    assert_eq!(lines[0].supplier_part_id, Some(part.id));

    Ok(())
}

#[tokio::test]
async fn conflicting_alias_and_catalog_hits_are_ambiguous() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    seed_part(&db, supplier.id, "SHARED-01", "SHARED01").await?;
    let other = seed_part(&db, supplier.id, "DEF-456", "DEF456").await?;
    supplier_part_aliases::ActiveModel {
        supplier_part_id: Set(other.id),
        alias: Set("SHARED 01".to_string()),
        canonical_alias: Set(Some("SHARED01".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,unit_price,currency\nshared_01,5.00,EUR\n";
    let report = service.import_csv(list.id, csv.as_bytes()).await?;

    assert_eq!(report.ambiguous, 1);
    let lines = service.get_list(list.id).await?.lines;
    assert_eq!(lines[0].line_status, "ambiguous");
    assert_eq!(lines[0].supplier_part_id, None);

    Ok(())
}

#[tokio::test]
async fn malformed_price_lands_in_error_status() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    seed_part(&db, supplier.id, "ABC123", "ABC123").await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,unit_price,currency\nABC123,twelve,EUR\n";
    let report = service.import_csv(list.id, csv.as_bytes()).await?;

    assert_eq!(report.error, 1);
    let lines = service.get_list(list.id).await?.lines;
    assert_eq!(lines[0].line_status, "error");
    assert!(lines[0]
        .match_note
        .as_deref()
        .unwrap_or("")
        .contains("unit_price"));

    Ok(())
}

#[tokio::test]
async fn blocked_activation_rolls_back_everything() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    seed_part(&db, supplier.id, "SHARED-01", "SHARED01").await?;
    let other = seed_part(&db, supplier.id, "DEF-456", "DEF456").await?;
    supplier_part_aliases::ActiveModel {
        supplier_part_id: Set(other.id),
        alias: Set("SHARED 01".to_string()),
        canonical_alias: Set(Some("SHARED01".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,unit_price,currency\ndef-456,4.10,EUR\nshared_01,5.00,EUR\n";
    service.import_csv(list.id, csv.as_bytes()).await?;

    let err = service.activate(list.id).await.unwrap_err();
    assert!(matches!(
        err,
        PriceListError::NotActivatable {
            matched: 1,
            blocking: 1,
            ..
        }
    ));

    let reloaded = service.get_list(list.id).await?.price_list;
    assert_eq!(reloaded.status, PriceListStatus::Draft.as_str());
    assert!(reloaded.activated_at.is_none());
    assert!(price_history::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn empty_list_cannot_be_activated() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let err = service.activate(list.id).await.unwrap_err();
    assert!(matches!(
        err,
        PriceListError::NotActivatable { matched: 0, .. }
    ));

    Ok(())
}

#[tokio::test]
async fn activation_supersedes_the_prior_active_list() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    let part = seed_part(&db, supplier.id, "ABC123", "ABC123").await?;
    let service = PriceListService::new(db.clone());

    let csv = "part_number,unit_price,currency\nabc-123,12.50,EUR\n";

    let first = create_draft(&service, supplier.id, "Q1 2026").await?;
    service.import_csv(first.id, csv.as_bytes()).await?;
    let first_report = service.activate(first.id).await?;
    assert_eq!(first_report.history_rows, 1);
    assert!(first_report.superseded_list_ids.is_empty());

    let second = create_draft(&service, supplier.id, "Q2 2026").await?;
    let cheaper = "part_number,unit_price,currency\nabc-123,11.00,EUR\n";
    service.import_csv(second.id, cheaper.as_bytes()).await?;
    let second_report = service.activate(second.id).await?;

    assert_eq!(second_report.superseded_list_ids, vec![first.id]);
    assert_eq!(
        second_report.price_list.status,
        PriceListStatus::Active.as_str()
    );

    let first_reloaded = service.get_list(first.id).await?.price_list;
    assert_eq!(first_reloaded.status, PriceListStatus::Superseded.as_str());

    // History keeps both activations; nothing is rewritten.
    let history = price_history::Entity::find()
        .filter(price_history::Column::SupplierPartId.eq(part.id))
        .all(&db)
        .await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].unit_price, 12.5);
    assert_eq!(history[1].unit_price, 11.0);

    Ok(())
}

#[tokio::test]
async fn priceless_matched_lines_do_not_block_activation() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    seed_part(&db, supplier.id, "ABC123", "ABC123").await?;
    seed_part(&db, supplier.id, "DEF-456", "DEF456").await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,unit_price,currency\nabc-123,12.50,EUR\ndef-456,,\n";
    let report = service.import_csv(list.id, csv.as_bytes()).await?;
    assert_eq!(report.matched, 2);
    assert_eq!(report.error, 0);

    // Activation succeeds; only the priced line lands in history.
    let activation = service.activate(list.id).await?;
    assert_eq!(activation.history_rows, 1);
    let history = price_history::Entity::find().all(&db).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].unit_price, 12.5);

    Ok(())
}

#[tokio::test]
async fn active_lists_reject_further_imports() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    seed_part(&db, supplier.id, "ABC123", "ABC123").await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,unit_price,currency\nabc-123,12.50,EUR\n";
    service.import_csv(list.id, csv.as_bytes()).await?;
    service.activate(list.id).await?;

    let err = service.import_csv(list.id, csv.as_bytes()).await.unwrap_err();
    assert!(matches!(err, PriceListError::NotEditable { .. }));

    Ok(())
}

#[tokio::test]
async fn description_only_rows_are_ignored() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,description,unit_price,currency\n,section header,,\n";
    let report = service.import_csv(list.id, csv.as_bytes()).await?;

    assert_eq!(report.ignored, 1);
    assert_eq!(report.error, 0);

    Ok(())
}

#[tokio::test]
async fn manual_lines_are_classified_like_imports() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    let part = seed_part(&db, supplier.id, "ABC123", "ABC123").await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let line = service
        .add_line(
            list.id,
            quoteforge::services::price_list_service::NewPriceListLine {
                part_number: Some("abc-123".to_string()),
                unit_price: Some(8.0),
                currency: Some("eur".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(line.row_number, 1);
    assert_eq!(line.line_status, "matched");
    assert_eq!(line.supplier_part_id, Some(part.id));
    assert_eq!(line.currency.as_deref(), Some("EUR"));

    Ok(())
}

#[tokio::test]
async fn fill_gaps_picks_up_parts_created_after_import() -> Result<()> {
    let (db, _tmp) = setup_test_db().await?;
    let supplier = seed_supplier(&db).await?;
    let service = PriceListService::new(db.clone());

    let list = create_draft(&service, supplier.id, "Q1 2026").await?;
    let csv = "part_number,unit_price,currency\nNEW-001,7.00,EUR\n";
    let report = service.import_csv(list.id, csv.as_bytes()).await?;
    assert_eq!(report.new_part_required, 1);

    seed_part(&db, supplier.id, "NEW-001", "NEW001").await?;

    let report = service.fill_gaps(list.id).await?;
    assert_eq!(report.matched, 1);

    let lines = service.get_list(list.id).await?.lines;
    assert_eq!(
        lines[0].status(),
        Some(PriceListLineStatus::Matched)
    );

    Ok(())
}
