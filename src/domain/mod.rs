pub mod account;
pub mod catalogue;
pub mod preference;
pub mod recommendation;
pub mod shared;
