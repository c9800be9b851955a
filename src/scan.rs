// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Coefficient scan orders.
//!
//! A [`Scan`] is the seam where coefficient-selection policy is injected
//! into a hider: it maps a logical scan index to a position in the
//! coefficient sequence it is given. The hider reads and writes through
//! that position, so replacements are visible in the array it operates on.
//! The sequence is passed to every lookup, which lets content-dependent
//! policies (e.g. top-k by magnitude) rank the actual coefficients the
//! hider is about to modify.
//!
//! Any `Fn(&[f64], usize) -> usize` closure is a scan; [`SequentialScan`]
//! and [`ZigzagScan`] cover the common fixed orders.

/// Maps logical scan indices to storage positions.
pub trait Scan {
    /// The storage position of the `index`-th coefficient of `work` in
    /// scan order.
    fn position(&self, work: &[f64], index: usize) -> usize;
}

impl<F: Fn(&[f64], usize) -> usize> Scan for F {
    fn position(&self, work: &[f64], index: usize) -> usize {
        self(work, index)
    }
}

/// Identity scan: logical index equals storage position.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialScan;

impl Scan for SequentialScan {
    fn position(&self, _work: &[f64], index: usize) -> usize {
        index
    }
}

/// Maps zigzag index (0–63) to natural row-major index (0–63) within an
/// 8×8 coefficient block.
///
/// Frequency-transform codecs order block coefficients along anti-diagonals
/// from the DC corner; this table converts a zigzag position to the
/// corresponding `row * 8 + col` position.
pub const ZIGZAG_TO_NATURAL: [usize; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Maps natural row-major index (0–63) to zigzag index (0–63).
///
/// Inverse of [`ZIGZAG_TO_NATURAL`].
pub const NATURAL_TO_ZIGZAG: [usize; 64] = {
    let mut table = [0usize; 64];
    let mut i = 0;
    while i < 64 {
        table[ZIGZAG_TO_NATURAL[i]] = i;
        i += 1;
    }
    table
};

/// Zigzag scan over a sequence of 8×8 blocks stored in natural order.
///
/// Logical index `i` addresses block `i / 64`, coefficient
/// `ZIGZAG_TO_NATURAL[i % 64]` within it. Index 0 is the first block's DC
/// coefficient, index 1 its lowest-frequency AC coefficient.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZigzagScan;

impl Scan for ZigzagScan {
    fn position(&self, _work: &[f64], index: usize) -> usize {
        let block = index / 64;
        block * 64 + ZIGZAG_TO_NATURAL[index % 64]
    }
}
