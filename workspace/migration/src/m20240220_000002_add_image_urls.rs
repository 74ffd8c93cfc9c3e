use model::entities::prelude::*;
use model::entities::{character, planet, vehicle};
use sea_orm_migration::prelude::*;

use crate::entity_iden::EntityIden;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// SQLite only accepts one column per `ALTER TABLE ... ADD COLUMN`, so each
/// table gets its own statement.
fn add_image_url(
    table: impl IntoIden + 'static,
    column: impl IntoIden + 'static,
) -> TableAlterStatement {
    Table::alter()
        .table(table)
        .add_column(ColumnDef::new(column).string_len(500).null())
        .to_owned()
}

fn drop_image_url(
    table: impl IntoIden + 'static,
    column: impl IntoIden + 'static,
) -> TableAlterStatement {
    Table::alter().table(table).drop_column(column).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(add_image_url(
                Planet::table(),
                Planet::column(planet::Column::ImageUrl),
            ))
            .await?;
        manager
            .alter_table(add_image_url(
                Character::table(),
                Character::column(character::Column::ImageUrl),
            ))
            .await?;
        manager
            .alter_table(add_image_url(
                Vehicle::table(),
                Vehicle::column(vehicle::Column::ImageUrl),
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(drop_image_url(
                Vehicle::table(),
                Vehicle::column(vehicle::Column::ImageUrl),
            ))
            .await?;
        manager
            .alter_table(drop_image_url(
                Character::table(),
                Character::column(character::Column::ImageUrl),
            ))
            .await?;
        manager
            .alter_table(drop_image_url(
                Planet::table(),
                Planet::column(planet::Column::ImageUrl),
            ))
            .await
    }
}
