//! Systematic Reed-Solomon encoder
//!
//! [`ReedSolomon`] is the reusable codec configuration: field tables plus
//! generator polynomial, built once from the code parameters and immutable
//! afterwards. [`encode`](ReedSolomon::encode) runs the classic shift-register
//! polynomial division, emitting `nroots` parity symbols per data block; the
//! data symbols themselves pass through unmodified (systematic code).
//!
//! The configuration is an owned value with no interior mutability, so one
//! instance can serve concurrent encode calls on independent buffers, and
//! codecs with different parameters coexist freely.

use log::debug;
use smallvec::{smallvec, SmallVec};

use crate::error::RsInitError;
use crate::galois::{GaloisField, MAX_SYMBOL_WIDTH};
use crate::genpoly::GeneratorPoly;

/// Field generator polynomial used by 8-bit barcode symbologies:
/// x^8 + x^4 + x^3 + x^2 + 1
pub const GF256_POLY: u32 = 0x11d;

/// Inline capacity of [`ReedSolomon::parity_block`] buffers. Deployed matrix
/// barcode codes top out at 30 parity symbols per block, so the common case
/// never touches the heap.
pub const PARITY_INLINE: usize = 32;

/// Reed-Solomon codec configuration
///
/// Built once by [`ReedSolomon::new`]; every field is read-only afterwards.
#[derive(Clone, Debug)]
pub struct ReedSolomon {
    field: GaloisField,
    genpoly: GeneratorPoly,
    /// Generator polynomial degree = parity symbols per block
    nroots: usize,
    /// First consecutive root, log form
    fcr: usize,
    /// Primitive element stride between roots, log form
    prim: usize,
    /// prim-th root of 1; unused by encoding, kept for decoder layering
    iprim: usize,
    /// Virtual leading zero symbols in a shortened block
    pad: usize,
}

impl ReedSolomon {
    /// Build a codec configuration.
    ///
    /// * `symsize` - bits per symbol, 1..=[`MAX_SYMBOL_WIDTH`]
    /// * `gfpoly` - field generator polynomial, must be primitive
    /// * `fcr` - first consecutive root of the generator polynomial, log form
    /// * `prim` - stride between generator roots, log form
    /// * `nroots` - generator polynomial degree = parity symbols per block
    /// * `pad` - leading pad symbols of a shortened block
    pub fn new(
        symsize: u32,
        gfpoly: u32,
        fcr: usize,
        prim: usize,
        nroots: usize,
        pad: usize,
    ) -> Result<Self, RsInitError> {
        if symsize < 1 || symsize > MAX_SYMBOL_WIDTH {
            return Err(RsInitError::InvalidParameter {
                name: "symsize",
                value: symsize as usize,
                reason: "symbol width must be between 1 and 8 bits",
            });
        }
        let nn = (1usize << symsize) - 1;

        if fcr > nn {
            return Err(RsInitError::InvalidParameter {
                name: "fcr",
                value: fcr,
                reason: "first root exceeds the block length",
            });
        }
        if prim < 1 || prim > nn {
            return Err(RsInitError::InvalidParameter {
                name: "prim",
                value: prim,
                reason: "root stride must be between 1 and the block length",
            });
        }
        if nroots > nn {
            return Err(RsInitError::InvalidParameter {
                name: "nroots",
                value: nroots,
                reason: "a block cannot hold more parity symbols than field values",
            });
        }
        if pad >= nn - nroots {
            return Err(RsInitError::InvalidParameter {
                name: "pad",
                value: pad,
                reason: "padding leaves no room for data symbols",
            });
        }
        // The prim-th root of 1: smallest k = 1 (mod nn) divisible by prim.
        // A stride sharing a factor with nn has no inverse and would generate
        // colliding roots, so it is rejected here rather than looping forever.
        let Some(iprim) = (0..prim).map(|j| 1 + j * nn).find(|k| k % prim == 0) else {
            return Err(RsInitError::InvalidParameter {
                name: "prim",
                value: prim,
                reason: "root stride must be coprime with the block length",
            });
        };
        let iprim = iprim / prim;

        let field = GaloisField::new(symsize, gfpoly)?;
        let genpoly = GeneratorPoly::new(&field, fcr, prim, nroots);

        debug!(
            "built RS configuration: GF(2^{}) gfpoly {:#x} fcr {} prim {} nroots {} pad {}",
            symsize, gfpoly, fcr, prim, nroots, pad
        );

        Ok(ReedSolomon { field, genpoly, nroots, fcr, prim, iprim, pad })
    }

    /// Codec over GF(2^8) with the standard barcode parameters
    /// (polynomial [`GF256_POLY`], first root `alpha^0`, root stride 1)
    pub fn gf256(nroots: usize, pad: usize) -> Result<Self, RsInitError> {
        Self::new(8, GF256_POLY, 0, 1, nroots, pad)
    }

    /// Compute the parity symbols for one data block.
    ///
    /// `data` must hold exactly [`data_len`](Self::data_len) symbols and
    /// `parity` exactly [`parity_len`](Self::parity_len); sizing is the
    /// caller's contract and is only `debug_assert`ed here. `parity` is
    /// zeroed first, so the buffer may be reused across calls.
    pub fn encode(&self, data: &[u8], parity: &mut [u8]) {
        debug_assert_eq!(data.len(), self.data_len(), "data block size mismatch");
        debug_assert_eq!(parity.len(), self.nroots, "parity buffer size mismatch");

        parity.fill(0);
        if self.nroots == 0 {
            return;
        }

        for &sym in data {
            // Division step: the feedback term is the symbol entering the
            // register plus the register's top slot, in log form. Zero
            // feedback contributes nothing and only shifts.
            let feedback = self.field.log(sym ^ parity[0]);
            if let Some(fb) = feedback {
                for j in 1..self.nroots {
                    parity[j] ^= self
                        .field
                        .alog(self.field.mod_nn(fb + self.genpoly.log_coeff(self.nroots - j)));
                }
            }
            parity.copy_within(1.., 0);
            parity[self.nroots - 1] = match feedback {
                Some(fb) => self.field.alog(self.field.mod_nn(fb + self.genpoly.log_coeff(0))),
                None => 0,
            };
        }
    }

    /// [`encode`](Self::encode) into a freshly allocated buffer
    pub fn parity_block(&self, data: &[u8]) -> SmallVec<[u8; PARITY_INLINE]> {
        let mut parity: SmallVec<[u8; PARITY_INLINE]> = smallvec![0; self.nroots];
        self.encode(data, &mut parity);
        parity
    }

    /// Total symbols per full block, `2^symsize - 1`
    #[inline]
    pub fn block_len(&self) -> usize {
        self.field.block_len()
    }

    /// Data symbols the encoder consumes per block
    #[inline]
    pub fn data_len(&self) -> usize {
        self.field.block_len() - self.nroots - self.pad
    }

    /// Parity symbols the encoder emits per block
    #[inline]
    pub fn parity_len(&self) -> usize {
        self.nroots
    }

    /// First consecutive root, log form
    #[inline]
    pub fn fcr(&self) -> usize {
        self.fcr
    }

    /// Stride between generator roots, log form
    #[inline]
    pub fn prim(&self) -> usize {
        self.prim
    }

    /// prim-th root of 1; a decoder built on this configuration needs it to
    /// map error locator roots back to symbol positions
    #[inline]
    pub fn iprim(&self) -> usize {
        self.iprim
    }

    /// Virtual leading zero symbols in a shortened block
    #[inline]
    pub fn pad(&self) -> usize {
        self.pad
    }

    /// The underlying field tables
    #[inline]
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// The generator polynomial
    #[inline]
    pub fn generator(&self) -> &GeneratorPoly {
        &self.genpoly
    }
}
