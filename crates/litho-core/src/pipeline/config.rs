use std::fmt;

use serde::{Deserialize, Serialize};

use crate::zernike::ZernikeTerm;

/// Coefficients of Zernike terms Z4-Z11 (Noll ordering), in units of waves.
///
/// Stored as an eight-element array indexed by Noll offset (Z4 = index 0);
/// the named-field-like accessors below are sugar over that array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZernikeCoeffs(pub [f64; 8]);

impl Default for ZernikeCoeffs {
    fn default() -> Self {
        Self([0.0; 8])
    }
}

impl ZernikeCoeffs {
    pub fn get(&self, term: ZernikeTerm) -> f64 {
        self.0[Self::index(term)]
    }

    pub fn set(&mut self, term: ZernikeTerm, value: f64) {
        self.0[Self::index(term)] = value;
    }

    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }

    fn index(term: ZernikeTerm) -> usize {
        match term {
            ZernikeTerm::Z4 => 0,
            ZernikeTerm::Z5 => 1,
            ZernikeTerm::Z6 => 2,
            ZernikeTerm::Z7 => 3,
            ZernikeTerm::Z8 => 4,
            ZernikeTerm::Z9 => 5,
            ZernikeTerm::Z10 => 6,
            ZernikeTerm::Z11 => 7,
        }
    }
}

/// Optical parameters governing the pupil filter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PupilParams {
    /// Illumination wavelength, nm.
    pub wavelength_nm: f64,
    /// Numerical aperture, unitless.
    pub na: f64,
    /// Partial-coherence factor, unitless.
    pub sigma: f64,
    /// Defocus, micrometers.
    pub defocus_um: f64,
    pub zernike: ZernikeCoeffs,
}

impl Default for PupilParams {
    fn default() -> Self {
        Self {
            wavelength_nm: 248.0,
            na: 0.75,
            sigma: 0.5,
            defocus_um: 0.0,
            zernike: ZernikeCoeffs::default(),
        }
    }
}

impl fmt::Display for PupilParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lambda={}nm NA={} sigma={} defocus={}um",
            self.wavelength_nm, self.na, self.sigma, self.defocus_um
        )
    }
}

/// Setter key for the scalar fields of [`PupilParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKey {
    Wavelength,
    Na,
    Sigma,
    Defocus,
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Wavelength => write!(f, "wavelength"),
            ParamKey::Na => write!(f, "na"),
            ParamKey::Sigma => write!(f, "sigma"),
            ParamKey::Defocus => write!(f, "defocus"),
        }
    }
}

/// Setter key for an individual Zernike coefficient.
pub type ZernikeKey = ZernikeTerm;

/// View-time parameters: not consumed by the pipeline itself, but published
/// alongside it for collaborators (resist threshold, cross-section row).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    pub threshold: f64,
    pub cross_section_row: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            cross_section_row: 128,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewParamKey {
    Threshold,
    CrossSectionRow,
}

impl fmt::Display for ViewParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewParamKey::Threshold => write!(f, "threshold"),
            ViewParamKey::CrossSectionRow => write!(f, "crossSectionRow"),
        }
    }
}

/// Inputs to a Bossung (focus x dose) sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BossungParams {
    pub focus_range_um: (f64, f64),
    pub focus_steps: usize,
    pub dose_range: (f64, f64),
    pub dose_steps: usize,
}

impl Default for BossungParams {
    fn default() -> Self {
        Self {
            focus_range_um: (-1.0, 1.0),
            focus_steps: 11,
            dose_range: (0.7, 1.3),
            dose_steps: 7,
        }
    }
}

/// A single (focus, CD) sample on a Bossung curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BossungPoint {
    pub focus_um: f64,
    pub cd_nm: f64,
}

/// One Bossung curve: CD vs focus at a fixed dose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BossungCurve {
    pub dose: f64,
    pub points: Vec<BossungPoint>,
}

/// Result of a full focus x dose sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BossungResult {
    pub focus_values: Vec<f64>,
    pub dose_values: Vec<f64>,
    pub curves: Vec<BossungCurve>,
    pub time_ms: f64,
    pub pipeline_runs: usize,
}
