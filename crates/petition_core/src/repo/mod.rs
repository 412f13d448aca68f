//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from callers.
//!
//! # Invariants
//! - Repository APIs return semantic absence (`Ok(None)`) in addition
//!   to DB transport errors.
//! - Every operation opens and releases its own scoped connection.

pub mod petition_repo;
