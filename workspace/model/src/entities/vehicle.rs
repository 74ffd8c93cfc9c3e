use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    #[sea_orm(string_value = "repulsorcraft")]
    Repulsorcraft,
    #[sea_orm(string_value = "wheeled")]
    Wheeled,
    #[sea_orm(string_value = "starfighter")]
    Starfighter,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum Manufacturer {
    #[sea_orm(string_value = "Incom Corporation")]
    #[serde(rename = "Incom Corporation")]
    IncomCorporation,
    #[sea_orm(string_value = "Corellia Mining Corporation")]
    #[serde(rename = "Corellia Mining Corporation")]
    CorelliaMiningCorporation,
}

/// A vehicle, optionally flown by a character.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Stored in the `model` column; renamed to keep clear of the derive's `Model` type.
    #[sea_orm(column_name = "model")]
    pub model_name: String,
    pub vehicle_class: VehicleClass,
    pub manufacturer: Manufacturer,
    pub length: i32,
    pub passengers: i32,
    pub image_url: Option<String>,
    pub pilot_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::PilotId",
        to = "super::character::Column::Id"
    )]
    Pilot,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
