//! Tri-state outcome of an enrichment lookup.

use serde::{Deserialize, Serialize};

use crate::error::HitlistError;

/// Outcome of a single summary or media lookup.
///
/// `NotFound` means the service answered with nothing matching. `Failed`
/// means the call itself did not complete (transport, status, decode or
/// timeout). Both degrade to the same placeholder in the merged entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupResult<T> {
    /// The service returned a usable value.
    Found(T),
    /// The service answered but had no match.
    NotFound,
    /// The lookup could not be completed.
    Failed(String),
}

impl<T> LookupResult<T> {
    /// Fold a connector result into a lookup outcome.
    ///
    /// `HitlistError::NotFound` maps to [`LookupResult::NotFound`]; every other
    /// error becomes [`LookupResult::Failed`] carrying its display text.
    pub fn from_result(res: Result<T, HitlistError>) -> Self {
        match res {
            Ok(v) => Self::Found(v),
            Err(e) if e.is_not_found() => Self::NotFound,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Short label for logs: `found`, `not_found` or `failed`.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not_found",
            Self::Failed(_) => "failed",
        }
    }
}
