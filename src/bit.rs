// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! The binary payload symbol and its normalization seam.
//!
//! Callers hold payload bits in whatever representation their framing layer
//! produces (integers, characters, decoded text). [`Bit`] is the single
//! normalization point: every fallible conversion rejects anything that is
//! not exactly 0 or 1 with [`QimError::InvalidBit`], so the embedder itself
//! never sees an invalid symbol.

use core::fmt;
use core::str::FromStr;

use crate::error::QimError;

/// One payload bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// The other bit value.
    pub fn flipped(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "0"),
            Self::One => write!(f, "1"),
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl From<Bit> for i64 {
    fn from(bit: Bit) -> Self {
        u8::from(bit) as i64
    }
}

impl From<Bit> for usize {
    fn from(bit: Bit) -> Self {
        u8::from(bit) as usize
    }
}

impl TryFrom<i64> for Bit {
    type Error = QimError;

    fn try_from(value: i64) -> Result<Self, QimError> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(QimError::InvalidBit(other.to_string())),
        }
    }
}

impl TryFrom<i32> for Bit {
    type Error = QimError;

    fn try_from(value: i32) -> Result<Self, QimError> {
        Self::try_from(value as i64)
    }
}

impl TryFrom<u8> for Bit {
    type Error = QimError;

    fn try_from(value: u8) -> Result<Self, QimError> {
        Self::try_from(value as i64)
    }
}

impl TryFrom<char> for Bit {
    type Error = QimError;

    fn try_from(value: char) -> Result<Self, QimError> {
        match value {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            other => Err(QimError::InvalidBit(other.to_string())),
        }
    }
}

impl FromStr for Bit {
    type Err = QimError;

    /// Parse a textual bit. The text must parse as an integer equal to 0 or 1.
    fn from_str(s: &str) -> Result<Self, QimError> {
        let value: i64 = s
            .parse()
            .map_err(|_| QimError::InvalidBit(s.to_string()))?;
        Self::try_from(value)
    }
}

impl TryFrom<&str> for Bit {
    type Error = QimError;

    fn try_from(value: &str) -> Result<Self, QimError> {
        value.parse()
    }
}
