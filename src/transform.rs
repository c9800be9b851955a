// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Reversible coefficient transforms.
//!
//! A [`Transform`] pairs a `direct` and `inverse` operation with the
//! external invariant `inverse(direct(x)) ≈ x`. The transform-domain hider
//! relies on that invariant but never validates it.
//!
//! [`Dct`] is an orthonormal DCT-II/DCT-III pair over the full sequence;
//! [`IdentityTransform`] is the exact no-op used in composition tests.

use std::f64::consts::PI;

/// A reversible transform between the sample domain and a coefficient domain.
pub trait Transform {
    /// Forward transform into the coefficient domain.
    fn direct(&self, work: &[f64]) -> Vec<f64>;

    /// Inverse transform back into the sample domain.
    fn inverse(&self, work: &[f64]) -> Vec<f64>;
}

impl<T: Transform + ?Sized> Transform for &T {
    fn direct(&self, work: &[f64]) -> Vec<f64> {
        (**self).direct(work)
    }

    fn inverse(&self, work: &[f64]) -> Vec<f64> {
        (**self).inverse(work)
    }
}

/// The identity transform. `inverse ∘ direct` is exactly the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {
    fn direct(&self, work: &[f64]) -> Vec<f64> {
        work.to_vec()
    }

    fn inverse(&self, work: &[f64]) -> Vec<f64> {
        work.to_vec()
    }
}

/// Orthonormal discrete cosine transform over a full sequence.
///
/// `direct` is the DCT-II, `inverse` the DCT-III, both with orthonormal
/// scaling so they invert each other to floating-point precision. O(n²);
/// intended for coefficient sequences, not bulk image data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dct;

impl Dct {
    fn scale(k: usize, n: usize) -> f64 {
        if k == 0 {
            (1.0 / n as f64).sqrt()
        } else {
            (2.0 / n as f64).sqrt()
        }
    }
}

impl Transform for Dct {
    fn direct(&self, work: &[f64]) -> Vec<f64> {
        let n = work.len();
        if n == 0 {
            return Vec::new();
        }
        (0..n)
            .map(|k| {
                let sum: f64 = work
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| x * ((2 * i + 1) as f64 * k as f64 * PI / (2 * n) as f64).cos())
                    .sum();
                Self::scale(k, n) * sum
            })
            .collect()
    }

    fn inverse(&self, work: &[f64]) -> Vec<f64> {
        let n = work.len();
        if n == 0 {
            return Vec::new();
        }
        (0..n)
            .map(|i| {
                work.iter()
                    .enumerate()
                    .map(|(k, &c)| {
                        Self::scale(k, n)
                            * c
                            * ((2 * i + 1) as f64 * k as f64 * PI / (2 * n) as f64).cos()
                    })
                    .sum()
            })
            .collect()
    }
}
