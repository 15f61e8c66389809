pub mod in_memory_account_repository;
pub mod in_memory_preference_repository;
pub mod sqlx_account_repository;
pub mod sqlx_preference_repository;
