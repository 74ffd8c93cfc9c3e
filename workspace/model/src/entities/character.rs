use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Gender {
    #[sea_orm(string_value = "female")]
    #[serde(rename = "female")]
    Female,
    #[sea_orm(string_value = "male")]
    #[serde(rename = "male")]
    Male,
    #[sea_orm(string_value = "other")]
    #[serde(rename = "other")]
    Other,
    #[sea_orm(string_value = "n/a")]
    #[serde(rename = "n/a")]
    NotApplicable,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum HairColor {
    #[sea_orm(string_value = "brown")]
    #[serde(rename = "brown")]
    Brown,
    #[sea_orm(string_value = "blond")]
    #[serde(rename = "blond")]
    Blond,
    #[sea_orm(string_value = "red")]
    #[serde(rename = "red")]
    Red,
    #[sea_orm(string_value = "black")]
    #[serde(rename = "black")]
    Black,
    #[sea_orm(string_value = "n/a")]
    #[serde(rename = "n/a")]
    NotApplicable,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum EyeColor {
    #[sea_orm(string_value = "brown")]
    #[serde(rename = "brown")]
    Brown,
    #[sea_orm(string_value = "green")]
    #[serde(rename = "green")]
    Green,
    #[sea_orm(string_value = "blue")]
    #[serde(rename = "blue")]
    Blue,
    #[sea_orm(string_value = "gold")]
    #[serde(rename = "gold")]
    Gold,
    #[sea_orm(string_value = "n/a")]
    #[serde(rename = "n/a")]
    NotApplicable,
}

/// A character. `planet_id` is a plain reference: it may be null, and it is
/// left untouched when the planet it points to is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub gender: Gender,
    /// Free-form galactic calendar year, e.g. "19BBY".
    pub birth_year: String,
    pub height: i32,
    pub hair_color: HairColor,
    pub eye_color: EyeColor,
    pub image_url: Option<String>,
    pub planet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Home planet.
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    /// Vehicles this character pilots.
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
