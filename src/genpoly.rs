//! Reed-Solomon generator polynomial construction
//!
//! The code's generator polynomial is the product of `nroots` linear factors
//! `(x + alpha^r)`, one per generator root `r = (fcr + i) * prim`. It is built
//! in polynomial (element) form, then converted to log form once so the
//! encoder's inner loop pays a single table lookup per coefficient.

use crate::galois::GaloisField;

/// Generator polynomial in log form, indexed by degree
///
/// Index 0 is the constant term consumed by the encoder's shift step; index
/// `nroots` is the monic leading term. Both are nonzero in polynomial form by
/// construction. Interior coefficients may vanish; the log form keeps the
/// field's zero sentinel in those slots.
#[derive(Clone, Debug)]
pub struct GeneratorPoly {
    log_coeffs: Vec<u8>,
}

impl GeneratorPoly {
    /// Multiply out `(x + alpha^(fcr*prim)) ... (x + alpha^((fcr+nroots-1)*prim))`.
    ///
    /// Parameter ranges are validated by the codec constructor.
    pub(crate) fn new(field: &GaloisField, fcr: usize, prim: usize, nroots: usize) -> Self {
        let mut coeffs = vec![0u8; nroots + 1];
        coeffs[0] = 1;

        let mut root = fcr * prim;
        for i in 0..nroots {
            // Multiply the running polynomial by (x + alpha^root): each
            // coefficient picks up the one below it plus itself scaled by the
            // new root.
            coeffs[i + 1] = 1;
            for j in (1..=i).rev() {
                coeffs[j] = coeffs[j - 1] ^ field.mul_alpha(coeffs[j], root);
            }
            // The constant term is a product of nonzero roots, never zero
            coeffs[0] = field.mul_alpha(coeffs[0], root);
            root += prim;
        }

        let log_coeffs = coeffs.iter().map(|&c| field.log_raw(c)).collect();
        GeneratorPoly { log_coeffs }
    }

    /// Polynomial degree, equal to the number of parity symbols
    #[inline]
    pub fn degree(&self) -> usize {
        self.log_coeffs.len() - 1
    }

    /// Log-form coefficient of `x^degree`; the field's zero sentinel marks a
    /// vanished coefficient
    #[inline]
    pub fn log_coeff(&self, degree: usize) -> usize {
        self.log_coeffs[degree] as usize
    }

    /// Polynomial-form coefficient of `x^degree` (sentinel slots map back to
    /// the zero element through the antilog table)
    #[inline]
    pub fn coeff(&self, field: &GaloisField, degree: usize) -> u8 {
        field.alog(self.log_coeffs[degree] as usize)
    }
}
