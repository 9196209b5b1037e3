use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the hitlist workspace.
///
/// Covers chart fetch failures, provider-tagged lookup failures, not-found
/// conditions, timeouts, and export failures. Per-entry lookup errors never
/// escape the pipeline; they are folded into [`crate::LookupResult`] and kept
/// as diagnostics on the run report.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HitlistError {
    /// The chart source could not be fetched (transport error or non-success status).
    #[error("chart fetch from {source_name} failed: {msg}")]
    Fetch {
        /// Connector or host that served the chart.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The requested capability is not provided by any registered connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label (e.g. "chart", "summary", "media").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, undecodable body).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The service answered but had nothing matching the request.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "summary for Song by Artist".
        what: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label.
        capability: String,
    },

    /// Writing or reading the export artifact failed.
    #[error("export failed: {0}")]
    Export(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl HitlistError {
    /// Helper: build a `Fetch` error for the given chart source.
    pub fn fetch(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build an `Export` error.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// A benign not-found or a missing capability is not actionable; transport,
    /// data, and export failures are.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }

    /// Returns true for the not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
