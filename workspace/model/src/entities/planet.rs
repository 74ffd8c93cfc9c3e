use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dominant terrain of a planet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum Terrain {
    #[sea_orm(string_value = "desert")]
    #[serde(rename = "desert")]
    Desert,
    #[sea_orm(string_value = "grasslands, mountains")]
    #[serde(rename = "grasslands, mountains")]
    GrasslandsMountains,
    #[sea_orm(string_value = "jungle, rainforests")]
    #[serde(rename = "jungle, rainforests")]
    JungleRainforests,
    #[sea_orm(string_value = "tundra, ice caves, mountain ranges")]
    #[serde(rename = "tundra, ice caves, mountain ranges")]
    TundraIceCavesMountainRanges,
    #[sea_orm(string_value = "swamp, jungles")]
    #[serde(rename = "swamp, jungles")]
    SwampJungles,
}

/// Prevailing climate of a planet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    #[sea_orm(string_value = "arid")]
    Arid,
    #[sea_orm(string_value = "temperate")]
    Temperate,
    #[sea_orm(string_value = "tropical")]
    Tropical,
    #[sea_orm(string_value = "frozen")]
    Frozen,
    #[sea_orm(string_value = "murky")]
    Murky,
}

/// A planet. The identifier is chosen by the client, not generated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub terrain: Terrain,
    pub climate: Climate,
    pub population: i64,
    pub orbital_period: i32,
    pub rotation_period: i32,
    pub diameter: i32,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Characters born on this planet.
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
