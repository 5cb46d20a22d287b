use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create customers table
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string().not_null())
                    .col(
                        ColumnDef::new(Customers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create locations table
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Name).string().not_null())
                    .col(
                        ColumnDef::new(Locations::MaxPartySize)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create reservations table
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::PartyName).string().not_null())
                    .col(
                        ColumnDef::new(Reservations::PartySize)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ReservationDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::LocationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-location_id")
                            .from(Reservations::Table, Reservations::LocationId)
                            .to(Locations::Table, Locations::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-customer_id")
                            .from(Reservations::Table, Reservations::CustomerId)
                            .to(Customers::Table, Customers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One reservation per customer, per location, per date
        manager
            .create_index(
                Index::create()
                    .name("uq_reservations_location_id_customer_id_reservation_date")
                    .table(Reservations::Table)
                    .col(Reservations::LocationId)
                    .col(Reservations::CustomerId)
                    .col(Reservations::ReservationDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
    Name,
    Email,
}

#[derive(Iden)]
enum Locations {
    Table,
    Id,
    Name,
    MaxPartySize,
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    PartyName,
    PartySize,
    ReservationDate,
    LocationId,
    CustomerId,
}
