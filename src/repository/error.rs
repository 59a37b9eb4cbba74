use std::fmt;

use crate::post::PostId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No post is stored under this id.
    NotFound(PostId),
    LockPoisoned(&'static str),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(id) => write!(f, "Post {} not found", id),
            RepositoryError::LockPoisoned(operation) => {
                write!(f, "repository lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}
