use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Email, 120).unique_key())
                    .col(string_len(Users::Password, 255))
                    .to_owned(),
            )
            .await?;

        // Create planets table, ids are supplied by the client
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(integer(Planets::Id).primary_key())
                    .col(string_len(Planets::Name, 100).unique_key())
                    .col(string_len(Planets::Terrain, 50))
                    .col(string_len(Planets::Climate, 20))
                    .col(big_integer(Planets::Population))
                    .col(integer(Planets::OrbitalPeriod))
                    .col(integer(Planets::RotationPeriod))
                    .col(integer(Planets::Diameter))
                    .to_owned(),
            )
            .await?;

        // Create characters table. planet_id is a plain column: no foreign key
        // constraint, so deleting a planet leaves the reference in place.
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(integer(Characters::Id).primary_key())
                    .col(string_len(Characters::Name, 100).unique_key())
                    .col(string_len(Characters::Gender, 10))
                    .col(string_len(Characters::BirthYear, 50))
                    .col(integer(Characters::Height))
                    .col(string_len(Characters::HairColor, 10))
                    .col(string_len(Characters::EyeColor, 10))
                    .col(integer_null(Characters::PlanetId))
                    .to_owned(),
            )
            .await?;

        // Create vehicles table
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(integer(Vehicles::Id).primary_key())
                    .col(string_len(Vehicles::Name, 100).unique_key())
                    .col(string_len(Vehicles::Model, 100))
                    .col(string_len(Vehicles::VehicleClass, 20))
                    .col(string_len(Vehicles::Manufacturer, 50))
                    .col(integer(Vehicles::Length))
                    .col(integer(Vehicles::Passengers))
                    .col(integer_null(Vehicles::PilotId))
                    .to_owned(),
            )
            .await?;

        // Create favorites table
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::CharacterId))
                    .col(integer_null(Favorites::PlanetId))
                    .col(integer_null(Favorites::VehicleId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Terrain,
    Climate,
    Population,
    OrbitalPeriod,
    RotationPeriod,
    Diameter,
}

#[derive(DeriveIden)]
enum Characters {
    Table,
    Id,
    Name,
    Gender,
    BirthYear,
    Height,
    HairColor,
    EyeColor,
    PlanetId,
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
    Name,
    Model,
    VehicleClass,
    Manufacturer,
    Length,
    Passengers,
    PilotId,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
    VehicleId,
}
