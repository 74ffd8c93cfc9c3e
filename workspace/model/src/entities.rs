//! Root of the SeaORM entity modules.
//!
//! References between tables (`characters.planet_id`, `vehicles.pilot_id` and
//! the favorite targets) are modelled as relations here but are not enforced
//! by the database, so a row may keep pointing at something that was deleted.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::character::Entity as Character;
    pub use super::favorite::Entity as Favorite;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
    pub use super::vehicle::Entity as Vehicle;
}
