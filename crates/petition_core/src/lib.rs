//! Core domain logic for the petition drafting tool.
//! This crate is the single source of truth for the record lifecycle:
//! render a petition draft, store it, list or fetch it by id.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::petition::{PetitionDraft, PetitionId, PetitionSummary};
pub use render::render_petition;
pub use repo::petition_repo::{
    CreatedPetition, PetitionRepository, RepoError, RepoResult, SqlitePetitionRepository,
};
pub use store::{init_store, StoreConfig, StoreHandle};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
