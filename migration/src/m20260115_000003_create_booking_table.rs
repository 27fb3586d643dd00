use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000001_create_user_table::User, m20260115_000002_create_vehicle_table::Vehicle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::CustomerId))
                    .col(integer(Booking::VehicleId))
                    .col(timestamp(Booking::RentStartDate))
                    .col(
                        timestamp(Booking::RentEndDate).check(
                            Expr::col(Booking::RentEndDate)
                                .gt(Expr::col(Booking::RentStartDate)),
                        ),
                    )
                    .col(double(Booking::TotalPrice).check(Expr::col(Booking::TotalPrice).gt(0)))
                    .col(
                        string_len(Booking::Status, 20)
                            .default("active")
                            .check(
                                Expr::col(Booking::Status)
                                    .is_in(["active", "cancelled", "returned"]),
                            ),
                    )
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_customer_id")
                            .from(Booking::Table, Booking::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_vehicle_id")
                            .from(Booking::Table, Booking::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Status lookups by vehicle drive both the availability release check
        // and the auto-return sweep.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_vehicle_status")
                    .table(Booking::Table)
                    .col(Booking::VehicleId)
                    .col(Booking::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    Id,
    CustomerId,
    VehicleId,
    RentStartDate,
    RentEndDate,
    TotalPrice,
    Status,
    CreatedAt,
    UpdatedAt,
}
