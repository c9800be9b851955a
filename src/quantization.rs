// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Scalar quantization.
//!
//! A [`Quantizer`] maps a real amplitude to its nearest lattice point. The
//! shipped [`UniformQuantizer`] uses a uniform lattice with spacing `step`
//! and round-half-to-even tie resolution, applied consistently everywhere
//! in this crate.

use crate::error::{QimError, Result};

/// A deterministic, pure amplitude quantizer.
pub trait Quantizer {
    /// Map `amplitude` to its nearest lattice point.
    fn quantize(&self, amplitude: f64) -> f64;
}

impl<Q: Quantizer + ?Sized> Quantizer for &Q {
    fn quantize(&self, amplitude: f64) -> f64 {
        (**self).quantize(amplitude)
    }
}

/// Uniform scalar quantizer with lattice points at integer multiples of `step`.
///
/// Ties (amplitudes exactly halfway between two lattice points) round half to
/// even, i.e. `quantize(15.0)` with `step = 10` yields `20.0` while
/// `quantize(25.0)` yields `20.0` as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformQuantizer {
    step: f64,
}

impl UniformQuantizer {
    /// Create a quantizer with lattice spacing `step`.
    ///
    /// # Errors
    /// [`QimError::InvalidStep`] if `step` is not finite and strictly positive.
    pub fn new(step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(QimError::InvalidStep(step));
        }
        Ok(Self { step })
    }

    /// The lattice spacing Δ.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Quantizer for UniformQuantizer {
    fn quantize(&self, amplitude: f64) -> f64 {
        self.step * (amplitude / self.step).round_ties_even()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_multiple() {
        let q = UniformQuantizer::new(10.0).unwrap();
        assert_eq!(q.quantize(12.0), 10.0);
        assert_eq!(q.quantize(17.0), 20.0);
        assert_eq!(q.quantize(-12.0), -10.0);
        assert_eq!(q.quantize(-17.0), -20.0);
        assert_eq!(q.quantize(0.0), 0.0);
    }

    #[test]
    fn lattice_points_are_fixed() {
        let q = UniformQuantizer::new(7.5).unwrap();
        for n in -20i32..=20 {
            let point = n as f64 * 7.5;
            assert_eq!(q.quantize(point), point, "lattice point {point} must not move");
        }
    }

    #[test]
    fn ties_round_half_to_even() {
        let q = UniformQuantizer::new(10.0).unwrap();
        // 15 is halfway between 10 and 20; 1.5 rounds to the even multiple 2.
        assert_eq!(q.quantize(15.0), 20.0);
        // 25 is halfway between 20 and 30; 2.5 rounds to 2.
        assert_eq!(q.quantize(25.0), 20.0);
        assert_eq!(q.quantize(-15.0), -20.0);
        assert_eq!(q.quantize(-25.0), -20.0);
    }

    #[test]
    fn rejects_bad_step() {
        assert!(matches!(UniformQuantizer::new(0.0), Err(QimError::InvalidStep(_))));
        assert!(matches!(UniformQuantizer::new(-3.0), Err(QimError::InvalidStep(_))));
        assert!(matches!(UniformQuantizer::new(f64::NAN), Err(QimError::InvalidStep(_))));
        assert!(matches!(UniformQuantizer::new(f64::INFINITY), Err(QimError::InvalidStep(_))));
    }

    #[test]
    fn usable_through_reference() {
        let q = UniformQuantizer::new(4.0).unwrap();
        let by_ref: &dyn Quantizer = &q;
        assert_eq!(by_ref.quantize(5.0), 4.0);
        assert_eq!((&q).quantize(5.0), 4.0);
    }
}
