use std::fmt;

/// Failure taxonomy for every store-backed operation. All failures abort the
/// whole operation; nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced league, match or other entity does not exist.
    NotFound(String),
    /// A precondition on the request itself failed.
    Validation(String),
    /// The store rejected a write due to a referential or uniqueness
    /// constraint. Propagated verbatim, never reinterpreted.
    Constraint(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "{}", msg),
            DomainError::Validation(msg) => write!(f, "{}", msg),
            DomainError::Constraint(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
