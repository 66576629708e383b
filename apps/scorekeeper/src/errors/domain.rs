//! Domain-level error type used by the pure game logic and the round machine.
//!
//! This error type is IO-agnostic. Code that touches storage or configuration
//! returns `Result<T, crate::error::AppError>` and converts from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.
//!
//! Out-of-range input never changes state: an entry point that returns
//! `Err(DomainError::Validation(..))` has left the session untouched, so a
//! presentation layer may simply ignore the error.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Validation error kinds for precise error categorization
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidBid,
    InvalidTricks,
    InvalidRound,
    InvalidPlayer,
    RosterSize,
    EmptyPlayerName,
    PhaseMismatch,
    BonusNotAllowed,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    GameMode,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// Stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                ValidationKind::InvalidTricks => ErrorCode::InvalidTricks,
                ValidationKind::InvalidRound => ErrorCode::InvalidRound,
                ValidationKind::InvalidPlayer => ErrorCode::InvalidPlayer,
                ValidationKind::RosterSize => ErrorCode::RosterSize,
                ValidationKind::EmptyPlayerName => ErrorCode::EmptyPlayerName,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::BonusNotAllowed => ErrorCode::BonusNotAllowed,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::GameMode => ErrorCode::GameModeNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
        }
    }
}
