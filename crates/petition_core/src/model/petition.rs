//! Petition domain model.
//!
//! # Responsibility
//! - Define the structured input for drafting a petition.
//! - Define the listing read model for stored records.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never reused or mutated.
//! - `petition_text` is fully determined by the draft fields at creation
//!   time and immutable thereafter.
//! - `facts` and `reliefs` are ordered and ephemeral: they are embedded
//!   into `petition_text` during rendering and never stored as rows.

use serde::{Deserialize, Serialize};

/// Stable identifier for a stored petition.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PetitionId = i64;

/// Structured input for drafting one petition.
///
/// No field content is validated: empty strings, unusual characters and
/// very long text are passed through to the renderer verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetitionDraft {
    pub petitioner: String,
    pub respondent: String,
    pub court_name: String,
    pub case_type: String,
    /// Ordered factual statements, rendered as a 1-based numbered list.
    pub facts: Vec<String>,
    /// Ordered relief requests, rendered as a 1-based numbered list.
    pub reliefs: Vec<String>,
}

/// Listing read model: the identifying quadruple of a stored petition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetitionSummary {
    pub id: PetitionId,
    pub petitioner: String,
    pub respondent: String,
    pub case_type: String,
}
