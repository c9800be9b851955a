// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Indexed dither offsets for binary dither modulation.
//!
//! A [`Dither`] yields one small offset per bit value. [`BinaryDither`]
//! derives the second offset from the first so that the two reconstruction
//! lattices sit exactly half a quantization step apart:
//!
//! ```text
//! d1 = d0 − sign(d0) · Δ/2        (sign(0) = +1 by convention)
//! ```
//!
//! Both offsets are computed eagerly at construction; a dither is immutable
//! and freely shareable across threads afterwards.

use rand::Rng;

use crate::bit::Bit;
use crate::error::{QimError, Result};

/// An indexed dither offset source, deterministic after construction.
pub trait Dither {
    /// The offset for the given bit index.
    fn dither(&self, index: Bit) -> f64;
}

impl<D: Dither + ?Sized> Dither for &D {
    fn dither(&self, index: Bit) -> f64 {
        (**self).dither(index)
    }
}

/// Binary dither offset pair for a quantization step Δ.
///
/// `dither(0)` returns the base offset `d0`; `dither(1)` returns
/// `d0 − sign(d0) · Δ/2`. A zero base offset counts as positive so the
/// derived offset never degenerates to `d0` itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryDither {
    d0: f64,
    d1: f64,
}

impl BinaryDither {
    /// Create a dither pair for quantization step `step` and base offset `d0`.
    ///
    /// # Errors
    /// - [`QimError::InvalidStep`] if `step` is not finite and strictly positive.
    /// - [`QimError::DitherOutOfRange`] if `|d0| > step/2` (the boundary
    ///   values `±step/2` are valid).
    pub fn new(step: f64, d0: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(QimError::InvalidStep(step));
        }
        if !d0.is_finite() || d0.abs() > step / 2.0 {
            return Err(QimError::DitherOutOfRange { d0, step });
        }
        // -0.0 compares equal to 0.0, so both take the positive branch.
        let sign = if d0 == 0.0 { 1.0 } else { d0.signum() };
        Ok(Self { d0, d1: d0 - sign * step / 2.0 })
    }
}

impl Dither for BinaryDither {
    fn dither(&self, index: Bit) -> f64 {
        match index {
            Bit::Zero => self.d0,
            Bit::One => self.d1,
        }
    }
}

/// Draw a valid random base offset, uniform over `[-step/2, step/2]`.
pub fn random_dither_value<R: Rng + ?Sized>(step: f64, rng: &mut R) -> f64 {
    rng.gen_range(-step / 2.0..=step / 2.0)
}
