//! Error types for Reed-Solomon codec initialization

use thiserror::Error;

/// Errors surfaced while building a codec configuration
///
/// Both variants are terminal for that initialization attempt. Construction is
/// pure, so a failed attempt leaves no partial state behind and a retry with
/// corrected parameters succeeds independently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsInitError {
    /// A code parameter is outside its valid range
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// The field generator polynomial candidate is not primitive
    #[error("field generator polynomial {gfpoly:#x} is not primitive over GF(2^{symsize})")]
    NonPrimitivePolynomial { gfpoly: u32, symsize: u32 },
}

/// Type alias for Result with RsInitError
pub type Result<T> = std::result::Result<T, RsInitError>;
