//! Petition repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/fetch APIs over the `petitions` table.
//! - Render the petition document as part of record creation.
//!
//! # Invariants
//! - `create` commits the full row before returning; no partially
//!   written record is ever visible to a subsequent read.
//! - Each operation opens its own connection and drops it on every
//!   exit path; no connection or transaction spans two calls.
//! - Listing order is ascending id, so results are deterministic.

use crate::db::DbError;
use crate::model::petition::{PetitionDraft, PetitionId, PetitionSummary};
use crate::render::render_petition;
use crate::store::StoreHandle;
use log::info;
use rusqlite::params;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for petition persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(PetitionId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "petition not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of a successful [`PetitionRepository::create`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPetition {
    /// Storage-assigned identifier; never reused.
    pub id: PetitionId,
    /// The document rendered and persisted for this record.
    pub petition_text: String,
}

/// Repository interface for petition record operations.
pub trait PetitionRepository {
    /// Renders the draft, stores one record and returns the assigned
    /// id together with the rendered text.
    fn create(&self, draft: &PetitionDraft) -> RepoResult<CreatedPetition>;
    /// Lists every stored petition's identifying quadruple, ascending
    /// by id.
    fn list_all(&self) -> RepoResult<Vec<PetitionSummary>>;
    /// Fetches the stored document text, or `Ok(None)` when no record
    /// has the given id.
    fn get_petition_text(&self, id: PetitionId) -> RepoResult<Option<String>>;
}

/// SQLite-backed petition repository.
///
/// Holds only the [`StoreHandle`]; each operation opens a fresh scoped
/// connection via [`crate::db::open_db`], which also re-checks the
/// schema version.
pub struct SqlitePetitionRepository {
    handle: StoreHandle,
}

impl SqlitePetitionRepository {
    /// Constructs a repository over an initialized store.
    pub fn new(handle: StoreHandle) -> Self {
        Self { handle }
    }

    fn open(&self) -> RepoResult<rusqlite::Connection> {
        Ok(crate::db::open_db(self.handle.path())?)
    }
}

impl PetitionRepository for SqlitePetitionRepository {
    fn create(&self, draft: &PetitionDraft) -> RepoResult<CreatedPetition> {
        let petition_text = render_petition(draft);

        let conn = self.open()?;
        conn.execute(
            "INSERT INTO petitions (
                petitioner,
                respondent,
                court_name,
                case_type,
                petition_text
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.petitioner.as_str(),
                draft.respondent.as_str(),
                draft.court_name.as_str(),
                draft.case_type.as_str(),
                petition_text.as_str(),
            ],
        )?;
        let id = conn.last_insert_rowid();

        info!("event=petition_create module=repo status=ok id={id}");

        Ok(CreatedPetition { id, petition_text })
    }

    fn list_all(&self) -> RepoResult<Vec<PetitionSummary>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, petitioner, respondent, case_type
             FROM petitions
             ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut summaries = Vec::new();
        while let Some(row) = rows.next()? {
            summaries.push(PetitionSummary {
                id: row.get("id")?,
                petitioner: row.get("petitioner")?,
                respondent: row.get("respondent")?,
                case_type: row.get("case_type")?,
            });
        }

        Ok(summaries)
    }

    fn get_petition_text(&self, id: PetitionId) -> RepoResult<Option<String>> {
        let conn = self.open()?;
        let mut stmt =
            conn.prepare("SELECT petition_text FROM petitions WHERE id = ?1;")?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get("petition_text")?));
        }

        Ok(None)
    }
}
