use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_inventory_items_table::Migration),
            Box::new(m20240101_000002_create_inventory_transactions_table::Migration),
            Box::new(m20240101_000003_create_inventory_transaction_details_table::Migration),
            Box::new(m20240101_000004_create_inventory_adjustments_table::Migration),
            Box::new(m20240101_000005_create_inventory_adjustment_details_table::Migration),
            Box::new(m20240101_000006_create_inventory_reservations_table::Migration),
            Box::new(m20240101_000007_create_inventory_reservation_details_table::Migration),
            Box::new(m20240101_000008_create_inventory_counts_table::Migration),
            Box::new(m20240101_000009_create_inventory_count_details_table::Migration),
            Box::new(m20240101_000010_create_inventory_policies_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_inventory_items_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_inventory_items_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryItems::ItemId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::ProductId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(InventoryItems::VariantId).integer().null())
                        .col(ColumnDef::new(InventoryItems::LotNumber).string().null())
                        .col(
                            ColumnDef::new(InventoryItems::SerialNumber)
                                .string()
                                .null(),
                        )
                        .col(ColumnDef::new(InventoryItems::Status).string().not_null())
                        .col(ColumnDef::new(InventoryItems::Condition).string().null())
                        .col(
                            ColumnDef::new(InventoryItems::QuantityOnHand)
                                .decimal_len(16, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::QuantityAllocated)
                                .decimal_len(16, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::QuantityAvailable)
                                .decimal_len(16, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::UnitOfMeasure)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::LocationId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(InventoryItems::FacilityId).integer().null())
                        .col(
                            ColumnDef::new(InventoryItems::ExpiryDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::ManufactureDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::ReceivedDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::LastCountedDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::UnitCost)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::TotalCost)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(ColumnDef::new(InventoryItems::Notes).string().null())
                        .col(
                            ColumnDef::new(InventoryItems::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::Version)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_items_tenant_id")
                        .table(InventoryItems::Table)
                        .col(InventoryItems::TenantId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_items_tenant_product")
                        .table(InventoryItems::Table)
                        .col(InventoryItems::TenantId)
                        .col(InventoryItems::ProductId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_items_tenant_status")
                        .table(InventoryItems::Table)
                        .col(InventoryItems::TenantId)
                        .col(InventoryItems::Status)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryItems {
        Table,
        ItemId,
        TenantId,
        ProductId,
        VariantId,
        LotNumber,
        SerialNumber,
        Status,
        Condition,
        QuantityOnHand,
        QuantityAllocated,
        QuantityAvailable,
        UnitOfMeasure,
        LocationId,
        FacilityId,
        ExpiryDate,
        ManufactureDate,
        ReceivedDate,
        LastCountedDate,
        UnitCost,
        TotalCost,
        Notes,
        IsActive,
        Version,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000002_create_inventory_transactions_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_inventory_transactions_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryTransactions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryTransactions::TransactionId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::TransactionType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::TransactionDate)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::Status)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::ReferenceNumber)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::ReferenceType)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::ReferenceId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::SourceType)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::SourceId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::DestinationType)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::DestinationId)
                                .integer()
                                .null(),
                        )
                        .col(ColumnDef::new(InventoryTransactions::Notes).string().null())
                        .col(
                            ColumnDef::new(InventoryTransactions::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactions::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_transactions_tenant_id")
                        .table(InventoryTransactions::Table)
                        .col(InventoryTransactions::TenantId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_transactions_tenant_type")
                        .table(InventoryTransactions::Table)
                        .col(InventoryTransactions::TenantId)
                        .col(InventoryTransactions::TransactionType)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryTransactions::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryTransactions {
        Table,
        TransactionId,
        TenantId,
        TransactionType,
        TransactionDate,
        Status,
        ReferenceNumber,
        ReferenceType,
        ReferenceId,
        SourceType,
        SourceId,
        DestinationType,
        DestinationId,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000003_create_inventory_transaction_details_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_inventory_transaction_details_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryTransactionDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::DetailId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::TransactionId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::ItemId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::Quantity)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::UnitOfMeasure)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::UnitCost)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::TotalCost)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::LotNumber)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::SerialNumber)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::FromLocationId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::ToLocationId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::Notes)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryTransactionDetails::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_transaction_details_transaction_id")
                        .table(InventoryTransactionDetails::Table)
                        .col(InventoryTransactionDetails::TransactionId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_transaction_details_item_id")
                        .table(InventoryTransactionDetails::Table)
                        .col(InventoryTransactionDetails::ItemId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(InventoryTransactionDetails::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryTransactionDetails {
        Table,
        DetailId,
        TenantId,
        TransactionId,
        ItemId,
        Quantity,
        UnitOfMeasure,
        UnitCost,
        TotalCost,
        LotNumber,
        SerialNumber,
        FromLocationId,
        ToLocationId,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000004_create_inventory_adjustments_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_inventory_adjustments_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryAdjustments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryAdjustments::AdjustmentId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::AdjustmentNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::AdjustmentDate)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::Status)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::AdjustmentType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::ReasonCode)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::ReferenceNumber)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::ReferenceType)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::ReferenceId)
                                .integer()
                                .null(),
                        )
                        .col(ColumnDef::new(InventoryAdjustments::Notes).string().null())
                        .col(
                            ColumnDef::new(InventoryAdjustments::IsApproved)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::ApprovedBy)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::ApprovedAt)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustments::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_adjustments_tenant_id")
                        .table(InventoryAdjustments::Table)
                        .col(InventoryAdjustments::TenantId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_adjustments_number")
                        .table(InventoryAdjustments::Table)
                        .col(InventoryAdjustments::AdjustmentNumber)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryAdjustments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryAdjustments {
        Table,
        AdjustmentId,
        TenantId,
        AdjustmentNumber,
        AdjustmentDate,
        Status,
        AdjustmentType,
        ReasonCode,
        ReferenceNumber,
        ReferenceType,
        ReferenceId,
        Notes,
        IsApproved,
        ApprovedBy,
        ApprovedAt,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000005_create_inventory_adjustment_details_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_inventory_adjustment_details_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryAdjustmentDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::DetailId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::AdjustmentId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::ItemId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::LocationId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::LotNumber)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::SerialNumber)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::QuantityBefore)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::QuantityAfter)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::QuantityAdjusted)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::UnitOfMeasure)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::UnitCost)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::TotalCost)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::Notes)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryAdjustmentDetails::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_adjustment_details_adjustment_id")
                        .table(InventoryAdjustmentDetails::Table)
                        .col(InventoryAdjustmentDetails::AdjustmentId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(InventoryAdjustmentDetails::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryAdjustmentDetails {
        Table,
        DetailId,
        TenantId,
        AdjustmentId,
        ItemId,
        LocationId,
        LotNumber,
        SerialNumber,
        QuantityBefore,
        QuantityAfter,
        QuantityAdjusted,
        UnitOfMeasure,
        UnitCost,
        TotalCost,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000006_create_inventory_reservations_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_inventory_reservations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryReservations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryReservations::ReservationId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::ReservationType)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::Status)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::ReferenceNumber)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::ReferenceType)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::ReferenceId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::RequestedDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::ExpiryDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::Priority)
                                .integer()
                                .null(),
                        )
                        .col(ColumnDef::new(InventoryReservations::Notes).string().null())
                        .col(
                            ColumnDef::new(InventoryReservations::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryReservations::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_reservations_tenant_id")
                        .table(InventoryReservations::Table)
                        .col(InventoryReservations::TenantId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_reservations_tenant_status")
                        .table(InventoryReservations::Table)
                        .col(InventoryReservations::TenantId)
                        .col(InventoryReservations::Status)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryReservations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryReservations {
        Table,
        ReservationId,
        TenantId,
        ReservationType,
        Status,
        ReferenceNumber,
        ReferenceType,
        ReferenceId,
        RequestedDate,
        ExpiryDate,
        Priority,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000007_create_inventory_reservation_details_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_inventory_reservation_details_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryReservationDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryReservationDetails::DetailId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::ReservationId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::ItemId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::QuantityRequested)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::QuantityAllocated)
                                .decimal_len(16, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::QuantityFulfilled)
                                .decimal_len(16, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::UnitOfMeasure)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::Notes)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryReservationDetails::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_reservation_details_reservation_id")
                        .table(InventoryReservationDetails::Table)
                        .col(InventoryReservationDetails::ReservationId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_reservation_details_item_id")
                        .table(InventoryReservationDetails::Table)
                        .col(InventoryReservationDetails::ItemId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(InventoryReservationDetails::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryReservationDetails {
        Table,
        DetailId,
        TenantId,
        ReservationId,
        ItemId,
        QuantityRequested,
        QuantityAllocated,
        QuantityFulfilled,
        UnitOfMeasure,
        Notes,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000008_create_inventory_counts_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000008_create_inventory_counts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryCounts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryCounts::CountId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryCounts::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCounts::CountNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(InventoryCounts::CountType).string().null())
                        .col(ColumnDef::new(InventoryCounts::Status).string().not_null())
                        .col(ColumnDef::new(InventoryCounts::StartDate).timestamp().null())
                        .col(ColumnDef::new(InventoryCounts::EndDate).timestamp().null())
                        .col(ColumnDef::new(InventoryCounts::FacilityId).integer().null())
                        .col(ColumnDef::new(InventoryCounts::ZoneId).integer().null())
                        .col(ColumnDef::new(InventoryCounts::LocationId).integer().null())
                        .col(ColumnDef::new(InventoryCounts::ProductId).integer().null())
                        .col(ColumnDef::new(InventoryCounts::CategoryId).integer().null())
                        .col(ColumnDef::new(InventoryCounts::Notes).string().null())
                        .col(
                            ColumnDef::new(InventoryCounts::IsApproved)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(InventoryCounts::ApprovedBy).integer().null())
                        .col(
                            ColumnDef::new(InventoryCounts::ApprovedAt)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCounts::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCounts::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCounts::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryCounts::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryCounts::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_counts_tenant_id")
                        .table(InventoryCounts::Table)
                        .col(InventoryCounts::TenantId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_counts_number")
                        .table(InventoryCounts::Table)
                        .col(InventoryCounts::CountNumber)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryCounts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryCounts {
        Table,
        CountId,
        TenantId,
        CountNumber,
        CountType,
        Status,
        StartDate,
        EndDate,
        FacilityId,
        ZoneId,
        LocationId,
        ProductId,
        CategoryId,
        Notes,
        IsApproved,
        ApprovedBy,
        ApprovedAt,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000009_create_inventory_count_details_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000009_create_inventory_count_details_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryCountDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryCountDetails::DetailId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::CountId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::ItemId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::ExpectedQuantity)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::CountedQuantity)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::Variance)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::UnitOfMeasure)
                                .string()
                                .null(),
                        )
                        .col(ColumnDef::new(InventoryCountDetails::Notes).string().null())
                        .col(
                            ColumnDef::new(InventoryCountDetails::IsRecounted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryCountDetails::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_count_details_count_id")
                        .table(InventoryCountDetails::Table)
                        .col(InventoryCountDetails::CountId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryCountDetails::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryCountDetails {
        Table,
        DetailId,
        TenantId,
        CountId,
        ItemId,
        ExpectedQuantity,
        CountedQuantity,
        Variance,
        UnitOfMeasure,
        Notes,
        IsRecounted,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}

mod m20240101_000010_create_inventory_policies_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000010_create_inventory_policies_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryPolicies::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryPolicies::PolicyId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::TenantId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::ProductId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(InventoryPolicies::VariantId).integer().null())
                        .col(
                            ColumnDef::new(InventoryPolicies::MinStockLevel)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::MaxStockLevel)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::ReorderPoint)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::ReorderQuantity)
                                .decimal_len(16, 4)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::ValuationMethod)
                                .string()
                                .null(),
                        )
                        .col(ColumnDef::new(InventoryPolicies::AbcClass).string().null())
                        .col(
                            ColumnDef::new(InventoryPolicies::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::CreatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::UpdatedBy)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryPolicies::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_policies_tenant_product")
                        .table(InventoryPolicies::Table)
                        .col(InventoryPolicies::TenantId)
                        .col(InventoryPolicies::ProductId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryPolicies::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum InventoryPolicies {
        Table,
        PolicyId,
        TenantId,
        ProductId,
        VariantId,
        MinStockLevel,
        MaxStockLevel,
        ReorderPoint,
        ReorderQuantity,
        ValuationMethod,
        AbcClass,
        IsActive,
        CreatedAt,
        UpdatedAt,
        CreatedBy,
        UpdatedBy,
        IsDeleted,
    }
}
