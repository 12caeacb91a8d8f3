//! Catalog lookup errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when resolving level symbols against the catalogs.
///
/// A symbol that resolves to nothing means the level content is malformed, so
/// these are always fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("unknown tile symbol {0:?}")]
    UnknownSymbol(char),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::UnknownSymbol(_) => "UNKNOWN_SYMBOL",
        }
    }
}
