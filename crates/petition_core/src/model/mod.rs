//! Domain models for petition records.

pub mod petition;
