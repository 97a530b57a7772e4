use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Record-store tables consumed by the core
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Suppliers::Name).string().not_null())
                    .col(
                        ColumnDef::new(Suppliers::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Suppliers::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OriginalParts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OriginalParts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OriginalParts::PartNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OriginalParts::Manufacturer).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rfqs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rfqs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rfqs::Reference).string().not_null())
                    .col(ColumnDef::new(Rfqs::ClientRequestId).integer().not_null())
                    .col(
                        ColumnDef::new(Rfqs::ActiveRequestRevision)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Rfqs::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RfqItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RfqItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RfqItems::RfqId).integer().not_null())
                    .col(ColumnDef::new(RfqItems::LineNumber).integer().not_null())
                    .col(ColumnDef::new(RfqItems::RequestedOriginalPartId).integer())
                    .col(ColumnDef::new(RfqItems::Quantity).double())
                    .col(
                        ColumnDef::new(RfqItems::RequestRevision)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rfq_items_rfq_id")
                            .from(RfqItems::Table, RfqItems::RfqId)
                            .to(Rfqs::Table, Rfqs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RfqItemSelections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RfqItemSelections::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RfqItemSelections::RfqItemId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RfqItemSelections::SelectionKey)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RfqItemSelections::SelectionType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RfqItemSelections::BundleId).integer())
                    .col(ColumnDef::new(RfqItemSelections::BundleItemId).integer())
                    .col(ColumnDef::new(RfqItemSelections::OriginalPartId).integer())
                    .col(ColumnDef::new(RfqItemSelections::RoleName).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rfq_item_selections_rfq_item_id")
                            .from(RfqItemSelections::Table, RfqItemSelections::RfqItemId)
                            .to(RfqItems::Table, RfqItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_rfq_item_selections_item_key")
                            .col(RfqItemSelections::RfqItemId)
                            .col(RfqItemSelections::SelectionKey)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // Negotiation ledger tables
        manager
            .create_table(
                Table::create()
                    .table(RfqSuppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RfqSuppliers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RfqSuppliers::RfqId).integer().not_null())
                    .col(
                        ColumnDef::new(RfqSuppliers::SupplierId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RfqSuppliers::Status)
                            .string()
                            .not_null()
                            .default("invited"),
                    )
                    .col(ColumnDef::new(RfqSuppliers::RespondedAt).timestamp())
                    .col(
                        ColumnDef::new(RfqSuppliers::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rfq_suppliers_rfq_id")
                            .from(RfqSuppliers::Table, RfqSuppliers::RfqId)
                            .to(Rfqs::Table, Rfqs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rfq_suppliers_supplier_id")
                            .from(RfqSuppliers::Table, RfqSuppliers::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id),
                    )
                    .index(
                        Index::create()
                            .name("idx_rfq_suppliers_rfq_supplier")
                            .col(RfqSuppliers::RfqId)
                            .col(RfqSuppliers::SupplierId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupplierResponses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupplierResponses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupplierResponses::RfqSupplierId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SupplierResponses::Status)
                            .string()
                            .not_null()
                            .default("received"),
                    )
                    .col(
                        ColumnDef::new(SupplierResponses::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupplierResponses::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_responses_rfq_supplier_id")
                            .from(SupplierResponses::Table, SupplierResponses::RfqSupplierId)
                            .to(RfqSuppliers::Table, RfqSuppliers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResponseRevisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResponseRevisions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResponseRevisions::SupplierResponseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResponseRevisions::RevNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResponseRevisions::Note).string())
                    .col(ColumnDef::new(ResponseRevisions::CreatedBy).string())
                    .col(
                        ColumnDef::new(ResponseRevisions::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_response_revisions_supplier_response_id")
                            .from(
                                ResponseRevisions::Table,
                                ResponseRevisions::SupplierResponseId,
                            )
                            .to(SupplierResponses::Table, SupplierResponses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_response_revisions_response_rev")
                            .col(ResponseRevisions::SupplierResponseId)
                            .col(ResponseRevisions::RevNumber)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResponseLines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResponseLines::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResponseLines::ResponseRevisionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResponseLines::RfqItemId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResponseLines::SelectionKey).string())
                    .col(ColumnDef::new(ResponseLines::SupplierPartId).integer())
                    .col(ColumnDef::new(ResponseLines::OriginalPartId).integer())
                    .col(ColumnDef::new(ResponseLines::BundleId).integer())
                    .col(ColumnDef::new(ResponseLines::BundleItemId).integer())
                    .col(ColumnDef::new(ResponseLines::BasedOnResponseLineId).integer())
                    .col(
                        ColumnDef::new(ResponseLines::SupplierReplyStatus)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResponseLines::UnitPrice).double())
                    .col(ColumnDef::new(ResponseLines::Currency).string())
                    .col(ColumnDef::new(ResponseLines::LeadTimeDays).integer())
                    .col(ColumnDef::new(ResponseLines::Moq).double())
                    .col(ColumnDef::new(ResponseLines::Packaging).string())
                    .col(ColumnDef::new(ResponseLines::ValidFrom).timestamp())
                    .col(ColumnDef::new(ResponseLines::ValidUntil).timestamp())
                    .col(ColumnDef::new(ResponseLines::PaymentTerms).string())
                    .col(ColumnDef::new(ResponseLines::Incoterms).string())
                    .col(
                        ColumnDef::new(ResponseLines::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_response_lines_response_revision_id")
                            .from(ResponseLines::Table, ResponseLines::ResponseRevisionId)
                            .to(ResponseRevisions::Table, ResponseRevisions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_response_lines_rfq_item_id")
                            .from(ResponseLines::Table, ResponseLines::RfqItemId)
                            .to(RfqItems::Table, RfqItems::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_response_lines_based_on")
                            .from(ResponseLines::Table, ResponseLines::BasedOnResponseLineId)
                            .to(ResponseLines::Table, ResponseLines::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LineActions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LineActions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LineActions::ResponseLineId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LineActions::ActionType).string().not_null())
                    .col(ColumnDef::new(LineActions::Payload).text().not_null())
                    .col(ColumnDef::new(LineActions::Reason).string())
                    .col(ColumnDef::new(LineActions::CreatedBy).string())
                    .col(
                        ColumnDef::new(LineActions::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_actions_response_line_id")
                            .from(LineActions::Table, LineActions::ResponseLineId)
                            .to(ResponseLines::Table, ResponseLines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LineStatuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LineStatuses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LineStatuses::RfqSupplierId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LineStatuses::RfqItemId).integer().not_null())
                    .col(
                        ColumnDef::new(LineStatuses::Status)
                            .string()
                            .not_null()
                            .default("NONE"),
                    )
                    .col(ColumnDef::new(LineStatuses::SourceType).string())
                    .col(ColumnDef::new(LineStatuses::SourceRef).string())
                    .col(ColumnDef::new(LineStatuses::LastRequestRevisionId).integer())
                    .col(ColumnDef::new(LineStatuses::LastResponseRevisionId).integer())
                    .col(ColumnDef::new(LineStatuses::Note).string())
                    .col(
                        ColumnDef::new(LineStatuses::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_statuses_rfq_supplier_id")
                            .from(LineStatuses::Table, LineStatuses::RfqSupplierId)
                            .to(RfqSuppliers::Table, RfqSuppliers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_statuses_rfq_item_id")
                            .from(LineStatuses::Table, LineStatuses::RfqItemId)
                            .to(RfqItems::Table, RfqItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_line_statuses_supplier_item")
                            .col(LineStatuses::RfqSupplierId)
                            .col(LineStatuses::RfqItemId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // Catalog tables
        manager
            .create_table(
                Table::create()
                    .table(SupplierParts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupplierParts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupplierParts::SupplierId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupplierParts::SupplierPartNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SupplierParts::CanonicalPartNumber).string())
                    .col(ColumnDef::new(SupplierParts::Description).string())
                    .col(ColumnDef::new(SupplierParts::Material).string())
                    .col(ColumnDef::new(SupplierParts::WeightKg).double())
                    .col(ColumnDef::new(SupplierParts::Unit).string())
                    .col(ColumnDef::new(SupplierParts::HsCode).string())
                    .col(
                        ColumnDef::new(SupplierParts::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupplierParts::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_parts_supplier_id")
                            .from(SupplierParts::Table, SupplierParts::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_supplier_parts_supplier_canonical")
                            .col(SupplierParts::SupplierId)
                            .col(SupplierParts::CanonicalPartNumber)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupplierPartAliases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupplierPartAliases::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupplierPartAliases::SupplierPartId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupplierPartAliases::Alias)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SupplierPartAliases::CanonicalAlias).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_part_aliases_supplier_part_id")
                            .from(
                                SupplierPartAliases::Table,
                                SupplierPartAliases::SupplierPartId,
                            )
                            .to(SupplierParts::Table, SupplierParts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupplierPartOemLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupplierPartOemLinks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupplierPartOemLinks::SupplierPartId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupplierPartOemLinks::OriginalPartId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_part_oem_links_supplier_part_id")
                            .from(
                                SupplierPartOemLinks::Table,
                                SupplierPartOemLinks::SupplierPartId,
                            )
                            .to(SupplierParts::Table, SupplierParts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_part_oem_links_original_part_id")
                            .from(
                                SupplierPartOemLinks::Table,
                                SupplierPartOemLinks::OriginalPartId,
                            )
                            .to(OriginalParts::Table, OriginalParts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_supplier_part_oem_links_pair")
                            .col(SupplierPartOemLinks::SupplierPartId)
                            .col(SupplierPartOemLinks::OriginalPartId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // Price-list tables
        manager
            .create_table(
                Table::create()
                    .table(SupplierPriceLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupplierPriceLists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupplierPriceLists::SupplierId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SupplierPriceLists::Name).string().not_null())
                    .col(ColumnDef::new(SupplierPriceLists::Currency).string())
                    .col(
                        ColumnDef::new(SupplierPriceLists::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(SupplierPriceLists::ValidFrom).timestamp())
                    .col(ColumnDef::new(SupplierPriceLists::ValidUntil).timestamp())
                    .col(
                        ColumnDef::new(SupplierPriceLists::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SupplierPriceLists::ActivatedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplier_price_lists_supplier_id")
                            .from(SupplierPriceLists::Table, SupplierPriceLists::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PriceListLines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceListLines::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PriceListLines::PriceListId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceListLines::RowNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PriceListLines::RawPartNumber).string())
                    .col(ColumnDef::new(PriceListLines::RawDescription).string())
                    .col(ColumnDef::new(PriceListLines::UnitPrice).double())
                    .col(ColumnDef::new(PriceListLines::Currency).string())
                    .col(ColumnDef::new(PriceListLines::Moq).double())
                    .col(ColumnDef::new(PriceListLines::LeadTimeDays).integer())
                    .col(ColumnDef::new(PriceListLines::ValidFrom).timestamp())
                    .col(ColumnDef::new(PriceListLines::ValidUntil).timestamp())
                    .col(
                        ColumnDef::new(PriceListLines::LineStatus)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(PriceListLines::MatchMethod).string())
                    .col(ColumnDef::new(PriceListLines::MatchConfidence).double())
                    .col(ColumnDef::new(PriceListLines::MatchNote).string())
                    .col(ColumnDef::new(PriceListLines::SupplierPartId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_list_lines_price_list_id")
                            .from(PriceListLines::Table, PriceListLines::PriceListId)
                            .to(SupplierPriceLists::Table, SupplierPriceLists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_list_lines_supplier_part_id")
                            .from(PriceListLines::Table, PriceListLines::SupplierPartId)
                            .to(SupplierParts::Table, SupplierParts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PriceHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::SupplierId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::SupplierPartId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::PriceListId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::PriceListLineId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PriceHistory::UnitPrice).double().not_null())
                    .col(ColumnDef::new(PriceHistory::Currency).string().not_null())
                    .col(ColumnDef::new(PriceHistory::Moq).double())
                    .col(ColumnDef::new(PriceHistory::LeadTimeDays).integer())
                    .col(
                        ColumnDef::new(PriceHistory::ValidFrom)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PriceHistory::ValidUntil).timestamp())
                    .col(
                        ColumnDef::new(PriceHistory::RecordedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_history_supplier_part_id")
                            .from(PriceHistory::Table, PriceHistory::SupplierPartId)
                            .to(SupplierParts::Table, SupplierParts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_history_price_list_id")
                            .from(PriceHistory::Table, PriceHistory::PriceListId)
                            .to(SupplierPriceLists::Table, SupplierPriceLists::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PriceListLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupplierPriceLists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupplierPartOemLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupplierPartAliases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupplierParts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LineStatuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LineActions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResponseLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResponseRevisions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupplierResponses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RfqSuppliers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RfqItemSelections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RfqItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rfqs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OriginalParts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Suppliers {
    Table,
    Id,
    Name,
    Code,
    CreatedAt,
}

#[derive(Iden)]
enum OriginalParts {
    Table,
    Id,
    PartNumber,
    Manufacturer,
}

#[derive(Iden)]
enum Rfqs {
    Table,
    Id,
    Reference,
    ClientRequestId,
    ActiveRequestRevision,
    CreatedAt,
}

#[derive(Iden)]
enum RfqItems {
    Table,
    Id,
    RfqId,
    LineNumber,
    RequestedOriginalPartId,
    Quantity,
    RequestRevision,
}

#[derive(Iden)]
enum RfqItemSelections {
    Table,
    Id,
    RfqItemId,
    SelectionKey,
    SelectionType,
    BundleId,
    BundleItemId,
    OriginalPartId,
    RoleName,
}

#[derive(Iden)]
enum RfqSuppliers {
    Table,
    Id,
    RfqId,
    SupplierId,
    Status,
    RespondedAt,
    CreatedAt,
}

#[derive(Iden)]
enum SupplierResponses {
    Table,
    Id,
    RfqSupplierId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ResponseRevisions {
    Table,
    Id,
    SupplierResponseId,
    RevNumber,
    Note,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum ResponseLines {
    Table,
    Id,
    ResponseRevisionId,
    RfqItemId,
    SelectionKey,
    SupplierPartId,
    OriginalPartId,
    BundleId,
    BundleItemId,
    BasedOnResponseLineId,
    SupplierReplyStatus,
    UnitPrice,
    Currency,
    LeadTimeDays,
    Moq,
    Packaging,
    ValidFrom,
    ValidUntil,
    PaymentTerms,
    Incoterms,
    CreatedAt,
}

#[derive(Iden)]
enum LineActions {
    Table,
    Id,
    ResponseLineId,
    ActionType,
    Payload,
    Reason,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum LineStatuses {
    Table,
    Id,
    RfqSupplierId,
    RfqItemId,
    Status,
    SourceType,
    SourceRef,
    LastRequestRevisionId,
    LastResponseRevisionId,
    Note,
    UpdatedAt,
}

#[derive(Iden)]
enum SupplierParts {
    Table,
    Id,
    SupplierId,
    SupplierPartNumber,
    CanonicalPartNumber,
    Description,
    Material,
    WeightKg,
    Unit,
    HsCode,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SupplierPartAliases {
    Table,
    Id,
    SupplierPartId,
    Alias,
    CanonicalAlias,
}

#[derive(Iden)]
enum SupplierPartOemLinks {
    Table,
    Id,
    SupplierPartId,
    OriginalPartId,
}

#[derive(Iden)]
enum SupplierPriceLists {
    Table,
    Id,
    SupplierId,
    Name,
    Currency,
    Status,
    ValidFrom,
    ValidUntil,
    CreatedAt,
    ActivatedAt,
}

#[derive(Iden)]
enum PriceListLines {
    Table,
    Id,
    PriceListId,
    RowNumber,
    RawPartNumber,
    RawDescription,
    UnitPrice,
    Currency,
    Moq,
    LeadTimeDays,
    ValidFrom,
    ValidUntil,
    LineStatus,
    MatchMethod,
    MatchConfidence,
    MatchNote,
    SupplierPartId,
}

#[derive(Iden)]
enum PriceHistory {
    Table,
    Id,
    SupplierId,
    SupplierPartId,
    PriceListId,
    PriceListLineId,
    UnitPrice,
    Currency,
    Moq,
    LeadTimeDays,
    ValidFrom,
    ValidUntil,
    RecordedAt,
}
