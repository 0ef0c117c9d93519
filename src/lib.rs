//! Systematic Reed-Solomon encoding over configurable GF(2^m)
//!
//! Building block for symbol-placement systems (matrix barcode generators):
//! the caller picks the field and code parameters, slices its message into
//! data blocks, and this crate appends the parity symbols a downstream
//! decoder needs to correct symbol errors and erasures. Decoding, block
//! interleaving, and symbol placement live with the caller.
//!
//! ```
//! use rscode::ReedSolomon;
//!
//! // GF(2^8) codec: 16 data symbols, 10 parity symbols, shortened block
//! let codec = ReedSolomon::gf256(10, 229)?;
//! let data = *b"sixteen byte blk";
//! let parity = codec.parity_block(&data);
//! assert_eq!(parity.len(), 10);
//! # Ok::<(), rscode::RsInitError>(())
//! ```

pub mod encoder;
pub mod error;
pub mod galois;
pub mod genpoly;

pub use encoder::{ReedSolomon, GF256_POLY, PARITY_INLINE};
pub use error::RsInitError;
pub use galois::{GaloisField, MAX_SYMBOL_WIDTH};
pub use genpoly::GeneratorPoly;
