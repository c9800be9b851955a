// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Additive-noise steganalysis.
//!
//! One-class classification of feature vectors (e.g. centers of mass of
//! image histogram characteristic functions): a sample belongs to the
//! non-stego class when its Mahalanobis distance to the fitted distribution
//! stays below a threshold.

use core::fmt;

/// Default decision threshold on the Mahalanobis distance.
pub const DEFAULT_THRESHOLD: f64 = 40.0;

/// Errors from fitting or applying the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorError {
    /// Fewer than two samples, or an empty feature vector.
    NotEnoughSamples,
    /// Samples disagree on the number of features.
    ShapeMismatch { expected: usize, got: usize },
    /// The sample covariance matrix is singular and cannot be inverted.
    SingularCovariance,
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughSamples => write!(f, "need at least two non-empty samples"),
            Self::ShapeMismatch { expected, got } => {
                write!(f, "sample has {got} features, expected {expected}")
            }
            Self::SingularCovariance => write!(f, "sample covariance matrix is singular"),
        }
    }
}

impl std::error::Error for EstimatorError {}

pub type Result<T> = std::result::Result<T, EstimatorError>;

/// One-class estimator for non-stego feature vectors.
///
/// Fitting computes the feature mean and inverse covariance of the training
/// distribution; prediction thresholds the Mahalanobis distance.
#[derive(Debug, Clone)]
pub struct AdditiveNoiseEstimator {
    mean: Vec<f64>,
    /// Inverse covariance, row-major `features × features`.
    icovariance: Vec<f64>,
    features: usize,
}

impl AdditiveNoiseEstimator {
    /// Fit the estimator to training samples (one feature vector per row).
    ///
    /// # Errors
    /// - [`EstimatorError::NotEnoughSamples`] for fewer than two samples or
    ///   empty feature vectors.
    /// - [`EstimatorError::ShapeMismatch`] if rows differ in length.
    /// - [`EstimatorError::SingularCovariance`] if the covariance cannot be
    ///   inverted (e.g. linearly dependent features).
    pub fn fit(samples: &[Vec<f64>]) -> Result<Self> {
        let rows = samples.len();
        if rows < 2 {
            return Err(EstimatorError::NotEnoughSamples);
        }
        let features = samples[0].len();
        if features == 0 {
            return Err(EstimatorError::NotEnoughSamples);
        }
        for sample in samples {
            if sample.len() != features {
                return Err(EstimatorError::ShapeMismatch { expected: features, got: sample.len() });
            }
        }

        let mut mean = vec![0.0; features];
        for sample in samples {
            for (m, x) in mean.iter_mut().zip(sample) {
                *m += x;
            }
        }
        for m in &mut mean {
            *m /= rows as f64;
        }

        // Sample covariance with one delta degree of freedom.
        let mut covariance = vec![0.0; features * features];
        for sample in samples {
            for i in 0..features {
                let di = sample[i] - mean[i];
                for j in 0..features {
                    covariance[i * features + j] += di * (sample[j] - mean[j]);
                }
            }
        }
        for value in &mut covariance {
            *value /= (rows - 1) as f64;
        }

        let icovariance = invert(&covariance, features)?;
        Ok(Self { mean, icovariance, features })
    }

    /// Mahalanobis distance from `sample` to the fitted distribution.
    pub fn mahalanobis(&self, sample: &[f64]) -> Result<f64> {
        if sample.len() != self.features {
            return Err(EstimatorError::ShapeMismatch {
                expected: self.features,
                got: sample.len(),
            });
        }
        let n = self.features;
        let delta: Vec<f64> = sample.iter().zip(&self.mean).map(|(x, m)| x - m).collect();
        let mut quadratic = 0.0;
        for i in 0..n {
            let mut row = 0.0;
            for j in 0..n {
                row += self.icovariance[i * n + j] * delta[j];
            }
            quadratic += delta[i] * row;
        }
        Ok(quadratic.max(0.0).sqrt())
    }

    /// Classify samples: `1` when the distance stays below `threshold`
    /// (member of the non-stego class), `-1` otherwise.
    pub fn predict(&self, samples: &[Vec<f64>], threshold: f64) -> Result<Vec<i8>> {
        samples
            .iter()
            .map(|sample| Ok(if self.mahalanobis(sample)? < threshold { 1 } else { -1 }))
            .collect()
    }
}

/// Invert a row-major `n × n` matrix by Gauss–Jordan elimination with
/// partial pivoting.
fn invert(matrix: &[f64], n: usize) -> Result<Vec<f64>> {
    debug_assert_eq!(matrix.len(), n * n);

    let mut work = matrix.to_vec();
    let mut inverse = vec![0.0; n * n];
    for i in 0..n {
        inverse[i * n + i] = 1.0;
    }

    for col in 0..n {
        // Largest remaining pivot in this column.
        let pivot_row = (col..n)
            .max_by(|&a, &b| {
                work[a * n + col]
                    .abs()
                    .total_cmp(&work[b * n + col].abs())
            })
            .unwrap_or(col);
        let pivot = work[pivot_row * n + col];
        if pivot.abs() < 1e-12 || !pivot.is_finite() {
            return Err(EstimatorError::SingularCovariance);
        }
        if pivot_row != col {
            for j in 0..n {
                work.swap(col * n + j, pivot_row * n + j);
                inverse.swap(col * n + j, pivot_row * n + j);
            }
        }

        let inv_pivot = 1.0 / pivot;
        for j in 0..n {
            work[col * n + j] *= inv_pivot;
            inverse[col * n + j] *= inv_pivot;
        }
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = work[row * n + col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                work[row * n + j] -= factor * work[col * n + j];
                inverse[row * n + j] -= factor * inverse[col * n + j];
            }
        }
    }

    Ok(inverse)
}
