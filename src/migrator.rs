use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_operators_table::Migration),
            Box::new(m20240101_000002_create_product_master_table::Migration),
            Box::new(m20240101_000003_create_goods_receiving_table::Migration),
            Box::new(m20240101_000004_create_sales_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_operators_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_operators_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Operators::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Operators::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Operators::Username)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Operators::PasswordHash).string().not_null())
                        .col(ColumnDef::new(Operators::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Operators::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Operators {
        Table,
        Id,
        Username,
        PasswordHash,
        CreatedAt,
    }
}

mod m20240101_000002_create_product_master_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_product_master_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // barcode, sku_id and product_name each carry their own unique
            // key; the constraint detail names the column on violation.
            manager
                .create_table(
                    Table::create()
                        .table(ProductMaster::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProductMaster::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ProductMaster::Barcode)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(ProductMaster::SkuId)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(ProductMaster::Category).string().not_null())
                        .col(
                            ColumnDef::new(ProductMaster::Subcategory)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ProductMaster::ProductImagePath).string().null())
                        .col(
                            ColumnDef::new(ProductMaster::ProductName)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(ProductMaster::Description).string().null())
                        .col(ColumnDef::new(ProductMaster::Tax).decimal().not_null())
                        .col(ColumnDef::new(ProductMaster::Price).decimal().not_null())
                        .col(
                            ColumnDef::new(ProductMaster::DefaultUnitOfMeasurement)
                                .string()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ProductMaster::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum ProductMaster {
        Table,
        Id,
        Barcode,
        SkuId,
        Category,
        Subcategory,
        ProductImagePath,
        ProductName,
        Description,
        Tax,
        Price,
        DefaultUnitOfMeasurement,
    }
}

mod m20240101_000003_create_goods_receiving_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_goods_receiving_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(GoodsReceiving::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GoodsReceiving::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(GoodsReceiving::ProductName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GoodsReceiving::SupplierName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GoodsReceiving::Quantity)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GoodsReceiving::UnitOfMeasurement)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GoodsReceiving::RatePerUnit)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GoodsReceiving::TotalRate)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(GoodsReceiving::Tax).decimal().not_null())
                        .col(
                            ColumnDef::new(GoodsReceiving::Timestamp)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(GoodsReceiving::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum GoodsReceiving {
        Table,
        Id,
        ProductName,
        SupplierName,
        Quantity,
        UnitOfMeasurement,
        RatePerUnit,
        TotalRate,
        Tax,
        Timestamp,
    }
}

mod m20240101_000004_create_sales_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_sales_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Sales::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Sales::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Sales::ProductName).string().not_null())
                        .col(ColumnDef::new(Sales::CustomerName).string().not_null())
                        .col(ColumnDef::new(Sales::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(Sales::UnitOfMeasurement)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Sales::RatePerUnit).decimal().not_null())
                        .col(ColumnDef::new(Sales::TotalRate).decimal().not_null())
                        .col(ColumnDef::new(Sales::Tax).decimal().not_null())
                        .col(ColumnDef::new(Sales::Timestamp).timestamp().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Sales::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Sales {
        Table,
        Id,
        ProductName,
        CustomerName,
        Quantity,
        UnitOfMeasurement,
        RatePerUnit,
        TotalRate,
        Tax,
        Timestamp,
    }
}
