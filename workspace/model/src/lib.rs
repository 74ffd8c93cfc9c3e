//! SeaORM data model for the holocron API: users, planets, characters,
//! vehicles and the favorites join table.

pub mod entities;
