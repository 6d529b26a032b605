use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("You can only select {allowed} court(s).")]
    CourtLimit { allowed: u32 },

    #[error("The selected club does not have any courts. Please add courts to the club first.")]
    NoCourts,

    #[error("The selected club does not have enough courts. You need {required} courts for {teams} teams, but this club only has {available} courts.")]
    InsufficientCourts {
        required: u32,
        teams: u32,
        available: u32,
    },

    #[error("Warning: The selected club needs at least {required} courts for {teams} teams")]
    CourtShortfall { required: u32, teams: u32 },

    #[error("Select exactly {required} court(s) for this league ({selected} selected)")]
    CourtAssignment { required: u32, selected: u32 },

    #[error("Please enter a name or select from the suggestions")]
    MissingSearchInput,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl SharedError {
    /// Constraint violations are shown to the user; the rest are logged.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, SharedError::Conversion(_))
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
