// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Hider composition layers.
//!
//! [`SingleBitHider`] bridges an embedder to a coefficient sequence through
//! an injected [`Scan`]; [`TransformHider`] lifts any hider into a transform
//! domain. Insertion always works on an independent copy of the cover — the
//! caller's array is never mutated.

use crate::bit::Bit;
use crate::embedding::Embedder;
use crate::error::{QimError, Result};
use crate::scan::Scan;
use crate::transform::Transform;

/// Hides one bit in a coefficient sequence and recovers it again.
pub trait Hider {
    /// Embed `bit` at the `index`-th scanned coefficient of `cover`,
    /// returning the modified copy (the stego work).
    fn insert(&self, cover: &[f64], bit: Bit, index: usize) -> Result<Vec<f64>>;

    /// Recover the bit at the `index`-th scanned coefficient of `work`.
    fn extract(&self, work: &[f64], index: usize) -> Result<Bit>;
}

impl<H: Hider + ?Sized> Hider for &H {
    fn insert(&self, cover: &[f64], bit: Bit, index: usize) -> Result<Vec<f64>> {
        (**self).insert(cover, bit, index)
    }

    fn extract(&self, work: &[f64], index: usize) -> Result<Bit> {
        (**self).extract(work, index)
    }
}

/// Hides a bit in one coefficient selected by a scan.
#[derive(Debug, Clone, Copy)]
pub struct SingleBitHider<S, E> {
    scan: S,
    embedder: E,
}

impl<S, E> SingleBitHider<S, E> {
    pub fn new(scan: S, embedder: E) -> Self {
        Self { scan, embedder }
    }
}

impl<S: Scan, E: Embedder> Hider for SingleBitHider<S, E> {
    fn insert(&self, cover: &[f64], bit: Bit, index: usize) -> Result<Vec<f64>> {
        let mut work = cover.to_vec();
        // The scan ranks the copy the embedder is about to modify.
        let position = self.scan.position(&work, index);
        let amplitude = *work
            .get(position)
            .ok_or(QimError::IndexOutOfRange { position, len: work.len() })?;
        work[position] = self.embedder.embed(amplitude, bit);
        Ok(work)
    }

    fn extract(&self, work: &[f64], index: usize) -> Result<Bit> {
        let position = self.scan.position(work, index);
        let amplitude = *work
            .get(position)
            .ok_or(QimError::IndexOutOfRange { position, len: work.len() })?;
        Ok(self.embedder.extract(amplitude))
    }
}

/// Lifts a hider into a transform domain.
///
/// Insertion runs `direct → inner insert → inverse`; extraction runs
/// `direct → inner extract`. Bit and index pass through unmodified, and the
/// public input/output stay in the original domain. Correctness rests on
/// the transform satisfying `inverse(direct(x)) ≈ x`; no validation of that
/// invariant happens here.
#[derive(Debug, Clone, Copy)]
pub struct TransformHider<H, T> {
    hider: H,
    transform: T,
}

impl<H, T> TransformHider<H, T> {
    pub fn new(hider: H, transform: T) -> Self {
        Self { hider, transform }
    }
}

impl<H: Hider, T: Transform> Hider for TransformHider<H, T> {
    fn insert(&self, cover: &[f64], bit: Bit, index: usize) -> Result<Vec<f64>> {
        let direct = self.transform.direct(cover);
        let work = self.hider.insert(&direct, bit, index)?;
        Ok(self.transform.inverse(&work))
    }

    fn extract(&self, work: &[f64], index: usize) -> Result<Bit> {
        let direct = self.transform.direct(work);
        self.hider.extract(&direct, index)
    }
}

#[cfg(test)]
mod tests {
    use crate::dither::BinaryDither;
    use crate::embedding::BinaryDm;
    use crate::quantization::UniformQuantizer;
    use crate::scan::{SequentialScan, ZigzagScan};
    use crate::transform::{Dct, IdentityTransform};

    use super::*;

    fn make_embedder(step: f64, d0: f64) -> BinaryDm<UniformQuantizer, BinaryDither> {
        BinaryDm::new(
            UniformQuantizer::new(step).unwrap(),
            BinaryDither::new(step, d0).unwrap(),
        )
    }

    #[test]
    fn insert_then_extract() {
        let hider = SingleBitHider::new(SequentialScan, make_embedder(12.0, 3.0));
        let cover = [30.0, 7.0, -4.0, 11.0];

        let stego = hider.insert(&cover, Bit::One, 0).unwrap();
        assert_eq!(hider.extract(&stego, 0).unwrap(), Bit::One);

        let stego = hider.insert(&cover, Bit::Zero, 0).unwrap();
        assert_eq!(hider.extract(&stego, 0).unwrap(), Bit::Zero);
    }

    #[test]
    fn cover_is_not_mutated() {
        let hider = SingleBitHider::new(SequentialScan, make_embedder(12.0, 3.0));
        let cover = [30.0, 7.0, -4.0, 11.0];
        let original = cover;

        let stego = hider.insert(&cover, Bit::One, 2).unwrap();
        assert_eq!(cover, original);
        assert_ne!(stego[2], cover[2]);
    }

    #[test]
    fn only_scanned_position_changes() {
        let hider = SingleBitHider::new(SequentialScan, make_embedder(12.0, 3.0));
        let cover = [30.0, 7.0, -4.0, 11.0];

        let stego = hider.insert(&cover, Bit::One, 1).unwrap();
        for (i, (&before, &after)) in cover.iter().zip(&stego).enumerate() {
            if i != 1 {
                assert_eq!(before, after, "untouched position {i} changed");
            }
        }
    }

    #[test]
    fn scan_redirects_the_write() {
        // Reverse scan: index 0 addresses the last position.
        let reverse = |work: &[f64], index: usize| work.len() - 1 - index;
        let hider = SingleBitHider::new(reverse, make_embedder(12.0, 3.0));
        let cover = [30.0, 7.0, -4.0, 11.0];

        let stego = hider.insert(&cover, Bit::One, 0).unwrap();
        assert_eq!(stego[..3], cover[..3]);
        assert_ne!(stego[3], cover[3]);
        assert_eq!(hider.extract(&stego, 0).unwrap(), Bit::One);
    }

    #[test]
    fn content_dependent_scan_ranks_the_working_copy() {
        // Top-magnitude policy: index 0 carries the bit in the largest
        // coefficient of whatever sequence the hider hands the scan.
        let top = |work: &[f64], index: usize| {
            let mut order: Vec<usize> = (0..work.len()).collect();
            order.sort_by(|&a, &b| work[b].abs().total_cmp(&work[a].abs()));
            order[index]
        };
        let hider = SingleBitHider::new(top, make_embedder(12.0, 3.0));
        // Position 1 dominates and stays dominant after embedding, so
        // insertion and extraction agree on the carrier.
        let cover = [5.0, 80.0, 12.0, 3.0];

        for bit in [Bit::Zero, Bit::One] {
            let stego = hider.insert(&cover, bit, 0).unwrap();
            let changed: Vec<usize> = cover
                .iter()
                .zip(&stego)
                .enumerate()
                .filter(|(_, (c, s))| c != s)
                .map(|(i, _)| i)
                .collect();
            assert!(changed.is_empty() || changed == vec![1], "changed: {changed:?}");
            assert_eq!(hider.extract(&stego, 0).unwrap(), bit, "bit={bit}");
        }
    }

    #[test]
    fn zigzag_scan_addresses_block_coefficients() {
        let hider = SingleBitHider::new(ZigzagScan, make_embedder(12.0, 3.0));
        let cover = vec![50.0; 64];

        // Zigzag index 2 is natural position 8 (row 1, col 0).
        let stego = hider.insert(&cover, Bit::One, 2).unwrap();
        assert_ne!(stego[8], cover[8]);
        assert_eq!(hider.extract(&stego, 2).unwrap(), Bit::One);
    }

    #[test]
    fn out_of_range_position_fails() {
        let hider = SingleBitHider::new(SequentialScan, make_embedder(12.0, 3.0));
        let cover = [30.0, 7.0];

        assert!(matches!(
            hider.insert(&cover, Bit::One, 5),
            Err(QimError::IndexOutOfRange { position: 5, len: 2 })
        ));
        assert!(matches!(
            hider.extract(&cover, 5),
            Err(QimError::IndexOutOfRange { position: 5, len: 2 })
        ));
    }

    #[test]
    fn transform_hider_with_identity() {
        let inner = SingleBitHider::new(SequentialScan, make_embedder(12.0, -3.0));
        let hider = TransformHider::new(inner, IdentityTransform);
        let cover = [30.0, 7.0, -4.0, 11.0];

        for bit in [Bit::Zero, Bit::One] {
            let stego = hider.insert(&cover, bit, 0).unwrap();
            assert_eq!(hider.extract(&stego, 0).unwrap(), bit);
        }
    }

    #[test]
    fn transform_hider_with_dct() {
        let inner = SingleBitHider::new(SequentialScan, make_embedder(12.0, 3.0));
        let hider = TransformHider::new(inner, Dct);
        let cover: Vec<f64> = (0..16).map(|i| 40.0 + (i as f64 * 0.9).sin() * 20.0).collect();

        for bit in [Bit::Zero, Bit::One] {
            for index in [0, 3] {
                let stego = hider.insert(&cover, bit, index).unwrap();
                assert_eq!(
                    hider.extract(&stego, index).unwrap(),
                    bit,
                    "bit={bit} index={index}"
                );
            }
        }
    }

    #[test]
    fn transform_hider_passes_errors_through() {
        let inner = SingleBitHider::new(SequentialScan, make_embedder(12.0, 3.0));
        let hider = TransformHider::new(inner, IdentityTransform);

        assert!(matches!(
            hider.insert(&[1.0], Bit::Zero, 9),
            Err(QimError::IndexOutOfRange { .. })
        ));
    }
}
