//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validate::FieldError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage write failed for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Unknown day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Editor workflow
    // ---------------------------
    #[error("Invalid class form: {}", describe_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("No class is being edited")]
    NotEditing,

    #[error("Nothing to delete: the editor is creating a new class")]
    NothingToDelete,

    #[error("Class not found: {0}")]
    SessionNotFound(String),

    #[error("Class id '{0}' is ambiguous, use more characters")]
    AmbiguousId(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

fn describe_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type AppResult<T> = Result<T, AppError>;
