//! The module contains the errors a [`DataSink`] can return.
//!
//! The errors are:
//!
//! - [`InvalidRecord`] thrown when a record cannot be converted to the
//!   storage column types.
//! - [`Rejected`] thrown when the sink refuses a record.
//! - [`Database`] for any failure reported by the database.
//!
//! The form never tells them apart: every one of them ends in the same
//! "submit failed" notification.
//!
//!  [`InvalidRecord`]: EngineError::InvalidRecord
//!  [`Rejected`]: EngineError::Rejected
//!  [`Database`]: EngineError::Database
//!  [`DataSink`]: super::sink::DataSink
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Record rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (Self::Rejected(a), Self::Rejected(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
