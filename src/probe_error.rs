//! ProbeError: unified error type for mesh-probe public APIs
//!
//! This error type is used throughout the mesh-probe library to provide robust,
//! non-panicking error handling for all public APIs. There is no recovery path
//! anywhere in the probe: an error propagating out of `main` *is* the signal
//! that the kernel or its build configuration is broken.

use thiserror::Error;

/// Unified error type for mesh-probe operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProbeError {
    /// Mesh generation was asked for a degenerate or inverted domain.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A structured generator was asked for zero cells along an axis.
    #[error("Invalid subdivision: {0}")]
    InvalidSubdivision(String),
    /// A distributed vector layout was requested with no elements.
    #[error("Invalid vector layout: global length must be non-zero")]
    EmptyVectorLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ProbeError::InvalidGeometry("min must be below max".into());
        assert_eq!(e.to_string(), "Invalid geometry: min must be below max");
        assert_eq!(
            ProbeError::EmptyVectorLayout.to_string(),
            "Invalid vector layout: global length must be non-zero"
        );
    }
}
