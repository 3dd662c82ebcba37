//! Repository error type.

use crate::context::ContextError;
use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Execution failure of one tagged statement.
///
/// Absence of a row is never an error at this layer; lookups return
/// `Ok(None)` instead.
#[derive(Debug)]
pub enum RepoError {
    /// Store rejected or failed the statement.
    Db { op: &'static str, source: DbError },
    /// Request context was cancelled or expired before execution.
    Context {
        op: &'static str,
        source: ContextError,
    },
    /// Bound value could not be encoded for storage.
    Encode { op: &'static str, message: String },
}

impl RepoError {
    /// Operation tag of the failing statement.
    pub fn op(&self) -> &'static str {
        match self {
            Self::Db { op, .. } | Self::Context { op, .. } | Self::Encode { op, .. } => op,
        }
    }

    pub(crate) fn sqlite(op: &'static str, err: rusqlite::Error) -> Self {
        Self::Db {
            op,
            source: DbError::Sqlite(err),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db { op, source } => write!(f, "exec query \"{op}\": {source}"),
            Self::Context { op, source } => write!(f, "exec query \"{op}\": {source}"),
            Self::Encode { op, message } => write!(f, "build query \"{op}\": {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db { source, .. } => Some(source),
            Self::Context { source, .. } => Some(source),
            Self::Encode { .. } => None,
        }
    }
}
