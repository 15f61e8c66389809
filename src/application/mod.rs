pub mod accounts;
pub mod recommendations;
pub mod swipes;
