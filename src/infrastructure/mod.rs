pub mod catalogue;
pub mod database;
pub mod repositories;
pub mod security;
