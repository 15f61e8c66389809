pub mod auth;
pub mod cities;
pub mod health;
pub mod me;
pub mod places;
pub mod swipes;
