pub mod fixture;
pub mod json_loader;

use crate::domain::catalogue::store::Catalogue;
use std::path::Path;

/// Loads the catalogue from `dir` when given, otherwise builds the built-in one.
pub fn load(dir: Option<&Path>) -> anyhow::Result<Catalogue> {
    match dir {
        Some(dir) => json_loader::load_from_dir(dir),
        None => Ok(fixture::builtin()?),
    }
}
