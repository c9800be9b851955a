// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Imperceptibility metrics.
//!
//! Offline quality measures between a cover work and its stego counterpart.
//! All functions compare flat sample sequences and fail with
//! [`MetricsError::ShapeMismatch`] when the two differ in length.

use core::fmt;

/// Errors from metric computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// Cover and stego work have different shapes.
    ShapeMismatch { cover: usize, stego: usize },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { cover, stego } => {
                write!(f, "cover and stego work have different shape: {cover} vs {stego}")
            }
        }
    }
}

impl std::error::Error for MetricsError {}

pub type Result<T> = std::result::Result<T, MetricsError>;

fn check_shape(cover: &[f64], stego: &[f64]) -> Result<()> {
    if cover.len() != stego.len() {
        return Err(MetricsError::ShapeMismatch { cover: cover.len(), stego: stego.len() });
    }
    Ok(())
}

/// Mean square error between cover and stego work.
///
/// Computed over the difference of absolute sample values.
pub fn mse(cover: &[f64], stego: &[f64]) -> Result<f64> {
    check_shape(cover, stego)?;
    let sum: f64 = cover
        .iter()
        .zip(stego)
        .map(|(c, s)| {
            let diff = c.abs() - s.abs();
            diff * diff
        })
        .sum();
    Ok(sum / cover.len() as f64)
}

/// Peak signal-to-noise ratio in decibels.
///
/// A zero MSE (identical works) falls back to an error floor of
/// `1 / len`, giving a large finite value instead of infinity.
pub fn psnr(cover: &[f64], stego: &[f64], max_value: f64) -> Result<f64> {
    let error = mse(cover, stego)?;
    let error = if error == 0.0 { 1.0 / cover.len() as f64 } else { error };
    Ok(10.0 * (max_value * max_value / error).log10())
}

/// Universal Image Quality Index (Wang & Bovik).
///
/// Computed from global means, sample variances (one delta degree of
/// freedom) and covariance; 1.0 for identical works, lower for distortion.
pub fn uiqi(cover: &[f64], stego: &[f64]) -> Result<f64> {
    check_shape(cover, stego)?;
    let n = cover.len() as f64;
    let mean_c = cover.iter().sum::<f64>() / n;
    let mean_s = stego.iter().sum::<f64>() / n;

    let var_c = cover.iter().map(|x| (x - mean_c) * (x - mean_c)).sum::<f64>() / (n - 1.0);
    let var_s = stego.iter().map(|x| (x - mean_s) * (x - mean_s)).sum::<f64>() / (n - 1.0);
    let covariance = cover
        .iter()
        .zip(stego)
        .map(|(c, s)| (c - mean_c) * (s - mean_s))
        .sum::<f64>()
        / (n - 1.0);

    Ok((4.0 * covariance * mean_c * mean_s)
        / ((var_c + var_s) * (mean_c * mean_c + mean_s * mean_s)))
}
