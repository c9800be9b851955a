// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Error types for the embedding core.
//!
//! [`QimError`] covers all failure modes from quantizer/dither construction
//! through bit normalization and coefficient addressing.

use core::convert::Infallible;
use core::fmt;

/// Errors that can occur while constructing or driving the embedding core.
#[derive(Debug, Clone, PartialEq)]
pub enum QimError {
    /// Quantization step is zero, negative, or not finite.
    InvalidStep(f64),
    /// Dither base offset lies outside `[-step/2, step/2]`.
    DitherOutOfRange { d0: f64, step: f64 },
    /// A payload bit could not be normalized to 0 or 1.
    InvalidBit(String),
    /// A scanned coefficient position falls outside the sequence.
    IndexOutOfRange { position: usize, len: usize },
}

impl fmt::Display for QimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep(step) => {
                write!(f, "invalid quantization step: {step} (must be finite and > 0)")
            }
            Self::DitherOutOfRange { d0, step } => {
                write!(f, "dither offset {d0} outside [-{half}, {half}]", half = step / 2.0)
            }
            Self::InvalidBit(value) => {
                write!(f, "invalid bit value {value:?} (expected 0 or 1)")
            }
            Self::IndexOutOfRange { position, len } => {
                write!(f, "scanned position {position} out of range for {len} coefficients")
            }
        }
    }
}

impl std::error::Error for QimError {}

impl From<Infallible> for QimError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, QimError>;
