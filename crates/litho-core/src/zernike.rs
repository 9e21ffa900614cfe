//! Closed-form evaluation of Zernike polynomials Z4-Z11 (Noll ordering) over
//! the unit disk, used by the pupil filter to build the aberration phase.

use crate::pipeline::config::ZernikeCoeffs;

const SQRT3: f64 = 1.732_050_807_568_877_2;
const SQRT5: f64 = 2.236_067_977_499_79;
const SQRT6: f64 = 2.449_489_742_783_178;
const SQRT8: f64 = 2.828_427_124_746_19;

/// One Zernike term, named by its Noll index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZernikeTerm {
    Z4,
    Z5,
    Z6,
    Z7,
    Z8,
    Z9,
    Z10,
    Z11,
}

impl ZernikeTerm {
    pub const ALL: [ZernikeTerm; 8] = [
        ZernikeTerm::Z4,
        ZernikeTerm::Z5,
        ZernikeTerm::Z6,
        ZernikeTerm::Z7,
        ZernikeTerm::Z8,
        ZernikeTerm::Z9,
        ZernikeTerm::Z10,
        ZernikeTerm::Z11,
    ];

    /// Evaluates this term at normalized polar coordinates (rho in [0,1], theta in [-pi, pi]).
    pub fn eval(self, rho: f64, theta: f64) -> f64 {
        let rho2 = rho * rho;
        let rho3 = rho2 * rho;
        let rho4 = rho2 * rho2;
        match self {
            ZernikeTerm::Z4 => SQRT3 * (2.0 * rho2 - 1.0),
            ZernikeTerm::Z5 => SQRT6 * rho2 * (2.0 * theta).sin(),
            ZernikeTerm::Z6 => SQRT6 * rho2 * (2.0 * theta).cos(),
            ZernikeTerm::Z7 => SQRT8 * (3.0 * rho3 - 2.0 * rho) * theta.sin(),
            ZernikeTerm::Z8 => SQRT8 * (3.0 * rho3 - 2.0 * rho) * theta.cos(),
            ZernikeTerm::Z9 => SQRT5 * (6.0 * rho4 - 6.0 * rho2 + 1.0),
            ZernikeTerm::Z10 => SQRT8 * rho3 * (3.0 * theta).sin(),
            ZernikeTerm::Z11 => SQRT8 * rho3 * (3.0 * theta).cos(),
        }
    }
}

/// Returns `sum(c_k * Z_k(rho, theta))` in units of waves. Zero-coefficient
/// terms are skipped.
pub fn zernike_phase_error(rho: f64, theta: f64, coeffs: &ZernikeCoeffs) -> f64 {
    let mut total = 0.0;
    for term in ZernikeTerm::ALL {
        let c = coeffs.get(term);
        if c != 0.0 {
            total += c * term.eval(rho, theta);
        }
    }
    total
}
