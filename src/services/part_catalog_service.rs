//! Supplier part catalog resolution.
//!
//! Finds or creates the supplier's catalog entry for a quoted part number,
//! merging supplementary attributes non-destructively and associating OEM
//! parts idempotently. Concurrent creation races are resolved by re-selecting
//! after a unique-key collision.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};
use serde::Deserialize;

use crate::database::entities::{supplier_part_oem_links, supplier_parts};
use crate::errors::CatalogError;
use crate::services::canonical::canonicalize;

/// Supplementary physical/commercial attributes. Each field is filled in only
/// if the catalog entry does not already carry a value (first write wins).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PartAttributes {
    pub description: Option<String>,
    pub material: Option<String>,
    pub weight_kg: Option<f64>,
    pub unit: Option<String>,
    pub hs_code: Option<String>,
}

impl PartAttributes {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.material.is_none()
            && self.weight_kg.is_none()
            && self.unit.is_none()
            && self.hs_code.is_none()
    }
}

/// Input for [`resolve_or_create`]. Either `part_id` or `part_number` must be
/// supplied.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PartResolution {
    pub part_id: Option<i32>,
    pub part_number: Option<String>,
    #[serde(default)]
    pub attributes: PartAttributes,
    pub original_part_id: Option<i32>,
    #[serde(default)]
    pub create_if_missing: bool,
}

#[derive(Clone)]
pub struct PartCatalogService {
    db: DatabaseConnection,
}

impl PartCatalogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn resolve_or_create(
        &self,
        supplier_id: i32,
        resolution: PartResolution,
    ) -> Result<supplier_parts::Model, CatalogError> {
        resolve_or_create(&self.db, supplier_id, resolution).await
    }
}

/// Resolve a supplier part by id or number, optionally creating it.
///
/// Generic over the connection so the ledger can call it inside its own
/// transaction.
pub async fn resolve_or_create<C: ConnectionTrait>(
    conn: &C,
    supplier_id: i32,
    resolution: PartResolution,
) -> Result<supplier_parts::Model, CatalogError> {
    let part = match resolution.part_id {
        Some(part_id) => {
            let part = supplier_parts::Entity::find_by_id(part_id)
                .one(conn)
                .await?
                .ok_or(CatalogError::PartIdNotFound(part_id))?;
            if part.supplier_id != supplier_id {
                return Err(CatalogError::PartWrongSupplier {
                    part_id,
                    owner_id: part.supplier_id,
                    supplier_id,
                });
            }
            part
        }
        None => {
            let number = resolution
                .part_number
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or(CatalogError::PartNumberRequired)?
                .to_string();
            find_or_insert_by_number(conn, supplier_id, &number, resolution.create_if_missing)
                .await?
        }
    };

    let part = backfill_attributes(conn, part, &resolution.attributes).await?;

    if let Some(original_part_id) = resolution.original_part_id {
        link_original_part(conn, part.id, original_part_id).await?;
    }

    Ok(part)
}

async fn find_or_insert_by_number<C: ConnectionTrait>(
    conn: &C,
    supplier_id: i32,
    number: &str,
    create_if_missing: bool,
) -> Result<supplier_parts::Model, CatalogError> {
    let canonical = canonicalize(number);

    if let Some(existing) = find_by_number(conn, supplier_id, number, canonical.as_deref()).await? {
        return Ok(existing);
    }

    if !create_if_missing {
        return Err(CatalogError::PartNumberNotFound(number.to_string()));
    }

    let now = chrono::Utc::now();
    let new_part = supplier_parts::ActiveModel {
        supplier_id: Set(supplier_id),
        supplier_part_number: Set(number.to_string()),
        canonical_part_number: Set(canonical.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match new_part.insert(conn).await {
        Ok(part) => {
            tracing::debug!(supplier_id, part_id = part.id, "created supplier part");
            Ok(part)
        }
        Err(err) if err.sql_err().map_or(false, |e| {
            matches!(e, sea_orm::SqlErr::UniqueConstraintViolation(_))
        }) =>
        {
            // A concurrent call created the same canonical entry; reuse it.
            find_by_number(conn, supplier_id, number, canonical.as_deref())
                .await?
                .ok_or(CatalogError::Database(err))
        }
        Err(err) => Err(err.into()),
    }
}

async fn find_by_number<C: ConnectionTrait>(
    conn: &C,
    supplier_id: i32,
    number: &str,
    canonical: Option<&str>,
) -> Result<Option<supplier_parts::Model>, CatalogError> {
    let mut matcher = Condition::any().add(supplier_parts::Column::SupplierPartNumber.eq(number));
    if let Some(key) = canonical {
        matcher = matcher.add(supplier_parts::Column::CanonicalPartNumber.eq(key));
    }

    Ok(supplier_parts::Entity::find()
        .filter(supplier_parts::Column::SupplierId.eq(supplier_id))
        .filter(matcher)
        .one(conn)
        .await?)
}

/// COALESCE semantics: only null attributes take the supplied value; existing
/// values are never overwritten.
async fn backfill_attributes<C: ConnectionTrait>(
    conn: &C,
    part: supplier_parts::Model,
    attributes: &PartAttributes,
) -> Result<supplier_parts::Model, CatalogError> {
    if attributes.is_empty() {
        return Ok(part);
    }

    let mut changed = false;
    let mut active: supplier_parts::ActiveModel = part.clone().into();

    if part.description.is_none() {
        if let Some(v) = &attributes.description {
            active.description = Set(Some(v.clone()));
            changed = true;
        }
    }
    if part.material.is_none() {
        if let Some(v) = &attributes.material {
            active.material = Set(Some(v.clone()));
            changed = true;
        }
    }
    if part.weight_kg.is_none() {
        if let Some(v) = attributes.weight_kg {
            active.weight_kg = Set(Some(v));
            changed = true;
        }
    }
    if part.unit.is_none() {
        if let Some(v) = &attributes.unit {
            active.unit = Set(Some(v.clone()));
            changed = true;
        }
    }
    if part.hs_code.is_none() {
        if let Some(v) = &attributes.hs_code {
            active.hs_code = Set(Some(v.clone()));
            changed = true;
        }
    }

    if !changed {
        return Ok(part);
    }

    active.updated_at = Set(chrono::Utc::now());
    Ok(active.update(conn).await?)
}

/// Associate a supplier part with an OEM part. Duplicate association is a
/// no-op.
pub async fn link_original_part<C: ConnectionTrait>(
    conn: &C,
    supplier_part_id: i32,
    original_part_id: i32,
) -> Result<bool, CatalogError> {
    let existing = supplier_part_oem_links::Entity::find()
        .filter(supplier_part_oem_links::Column::SupplierPartId.eq(supplier_part_id))
        .filter(supplier_part_oem_links::Column::OriginalPartId.eq(original_part_id))
        .one(conn)
        .await?;

    if existing.is_some() {
        return Ok(false);
    }

    let link = supplier_part_oem_links::ActiveModel {
        supplier_part_id: Set(supplier_part_id),
        original_part_id: Set(original_part_id),
        ..Default::default()
    };

    match link.insert(conn).await {
        Ok(_) => Ok(true),
        Err(err) if err.sql_err().map_or(false, |e| {
            matches!(e, sea_orm::SqlErr::UniqueConstraintViolation(_))
        }) =>
        {
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}
