//! Error taxonomy for grid construction, tessellation and provider access.
//!
//! Every failure is detected synchronously at the call site; nothing here is
//! transient, so nothing is retried.

/// Convenience result type used across the engine.
pub type MeshResult<T> = Result<T, MeshError>;

/// Which provider variant an operation expected or found.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProviderKind {
    Static,
    Animated,
}

impl core::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProviderKind::Static => f.write_str("static"),
            ProviderKind::Animated => f.write_str("animated"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Parallel input sequences do not line up, or cannot be cut into rows of `width`.
    #[error("shape error: {0}")]
    Shape(String),

    /// Grid dimensions are degenerate for the requested operation.
    #[error("topology error: {0}")]
    Topology(String),

    /// A numeric parameter is out of its valid range.
    #[error("parameter error: {0}")]
    Parameter(String),

    /// A variant-specific operation was issued against the other provider variant.
    ///
    /// This is a caller bug: the caller lost track of which variant it created.
    #[error("provider mismatch: expected {expected} provider, found {found}")]
    StateMismatch {
        expected: ProviderKind,
        found: ProviderKind,
    },
}

impl MeshError {
    /// Build a [`MeshError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`MeshError::Topology`] value.
    pub fn topology(msg: impl Into<String>) -> Self {
        Self::Topology(msg.into())
    }

    /// Build a [`MeshError::Parameter`] value.
    pub fn parameter(msg: impl Into<String>) -> Self {
        Self::Parameter(msg.into())
    }
}
