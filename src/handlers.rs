pub mod characters;
pub mod favorites;
pub mod health;
pub mod planets;
pub mod sitemap;
pub mod users;
pub mod vehicles;
