// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! # qim-core
//!
//! Pure-Rust data-hiding core based on Quantization Index Modulation (QIM).
//! Embeds and recovers single bits inside numeric signal samples — typically
//! image transform coefficients — using binary dither modulation, and
//! composes that primitive into transform-domain hiding.
//!
//! The layering runs quantizer → dither → embedder → hider → transform-domain
//! hider:
//!
//! - [`UniformQuantizer`]: nearest-lattice-point scalar quantization.
//! - [`BinaryDither`]: bit-indexed dither offsets half a step apart.
//! - [`BinaryDm`]: the dither-modulation embedder (one bit per amplitude,
//!   exact recovery with zero noise, robust below Δ/4 additive noise).
//! - [`SingleBitHider`]: applies the embedder to one coefficient of a
//!   sequence, selected through an injected [`Scan`].
//! - [`TransformHider`]: lifts any hider into a reversible
//!   [`Transform`] domain.
//!
//! Supporting utilities: noise attacks (`noise`), imperceptibility metrics
//! (`metrics`), and a one-class additive-noise steganalysis estimator
//! (`steganalysis`).
//!
//! # Quick start
//!
//! ```
//! use qim_core::{
//!     BinaryDither, BinaryDm, Bit, Hider, SequentialScan, SingleBitHider,
//!     UniformQuantizer,
//! };
//!
//! let quantizer = UniformQuantizer::new(12.0)?;
//! let dither = BinaryDither::new(12.0, -3.0)?;
//! let hider = SingleBitHider::new(SequentialScan, BinaryDm::new(quantizer, dither));
//!
//! let cover = [30.0, 7.0, -4.0];
//! let stego = hider.insert(&cover, Bit::One, 0)?;
//! assert_eq!(hider.extract(&stego, 0)?, Bit::One);
//! # Ok::<(), qim_core::QimError>(())
//! ```

pub mod bit;
pub mod dither;
pub mod embedding;
pub mod error;
pub mod hider;
pub mod metrics;
pub mod noise;
pub mod quantization;
pub mod scan;
pub mod steganalysis;
pub mod transform;

pub use bit::Bit;
pub use dither::{random_dither_value, BinaryDither, Dither};
pub use embedding::{BinaryDm, Embedder};
pub use error::{QimError, Result};
pub use hider::{Hider, SingleBitHider, TransformHider};
pub use quantization::{Quantizer, UniformQuantizer};
pub use scan::{Scan, SequentialScan, ZigzagScan};
pub use steganalysis::AdditiveNoiseEstimator;
pub use transform::{Dct, IdentityTransform, Transform};
