// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas size selection and platform limits.

use core::fmt;

use super::PackOptions;
use super::arranged::ArrangedGlyph;
use super::shelf::ShelfPacker;
use crate::error::Error;

/// Width used for the first placement pass.
pub const INITIAL_WIDTH_GUESS: u32 = 512;

/// Largest atlas dimension allowed for power-of-two or square atlases.
pub const MAX_POT_DIMENSION: u32 = 8192;

/// Largest width the size estimator will try for unconstrained atlases.
pub const MAX_DIMENSION: u32 = 16380;

/// Atlas dimensions are kept a multiple of this so that block compression stays possible.
const BLOCK_SIZE: u32 = 4;

/// Atlases at or above this many pixels cannot be indexed by target runtimes.
const MAX_AREA: u64 = 16380 * 16384;

/// Atlases at or above this many pixels are likely to fail on some platforms.
const LARGE_AREA: u64 = 16380 * 8192;

/// Rounds `value` up to the next size a texture may have.
///
/// Power-of-two textures never go below one compression block; other
/// textures are rounded up to a whole number of blocks.
pub(crate) fn make_valid_size(value: u32, require_power_of_two: bool) -> u32 {
    let value = value.max(1);
    if require_power_of_two {
        value
            .checked_next_power_of_two()
            .unwrap_or(u32::MAX)
            .max(BLOCK_SIZE)
    } else {
        value
            .checked_next_multiple_of(BLOCK_SIZE)
            .unwrap_or(u32::MAX)
    }
}

/// Chooses the final atlas size, leaving `glyphs` placed for that size.
///
/// The first pass uses a fixed width and usually produces a long, flat
/// atlas. Its area is then used to derive a roughly square width for the
/// second pass.
pub(crate) fn estimate_size(
    glyphs: &mut [ArrangedGlyph],
    options: PackOptions,
) -> Result<(u32, u32), Error> {
    let pot = options.require_power_of_two;

    let (first_width, first_height) = ShelfPacker::pack(glyphs, INITIAL_WIDTH_GUESS, pot);
    let guess = refine_guess(first_width, first_height, pot);
    let (mut width, mut height) = ShelfPacker::pack(glyphs, guess, pot);

    if options.require_square {
        let max = width.max(height);
        width = max;
        height = max;
    }

    validate(width, height, options)?;
    Ok((width, height))
}

fn refine_guess(width: u32, height: u32, require_power_of_two: bool) -> u32 {
    let area = u64::from(width) * u64::from(height);
    let side = u32::try_from(area.isqrt()).unwrap_or(u32::MAX);
    let cap = if require_power_of_two {
        MAX_POT_DIMENSION
    } else {
        MAX_DIMENSION
    };
    make_valid_size(side, require_power_of_two).clamp(1, cap)
}

fn validate(width: u32, height: u32, options: PackOptions) -> Result<(), Error> {
    let max = width.max(height);
    let area = u64::from(width) * u64::from(height);
    if ((options.require_power_of_two || options.require_square) && max > MAX_POT_DIMENSION)
        || area >= MAX_AREA
    {
        return Err(Error::texture_too_large(width, height));
    }
    Ok(())
}

/// A non-fatal warning about the size of a packed atlas.
///
/// Only the most severe applicable diagnostic is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeDiagnostic {
    /// The atlas covers at least 16380×8192 pixels and may fail to build.
    VeryLarge {
        /// Atlas width.
        width: u32,
        /// Atlas height.
        height: u32,
    },
    /// The larger atlas dimension exceeds `limit`, which some platforms do not support.
    ExceedsDimension {
        /// The exceeded limit: 8192, 4096 or 2048.
        limit: u32,
        /// Atlas width.
        width: u32,
        /// Atlas height.
        height: u32,
    },
}

impl SizeDiagnostic {
    /// Returns the diagnostic that applies to an atlas of the given size, if any.
    ///
    /// The 2048 limit is only reported for power-of-two profiles since most
    /// current hardware handles 4096 textures.
    pub fn check(width: u32, height: u32, require_power_of_two: bool) -> Option<Self> {
        let max = width.max(height);
        if u64::from(width) * u64::from(height) >= LARGE_AREA {
            Some(Self::VeryLarge { width, height })
        } else if max > 8192 {
            Some(Self::exceeds(8192, width, height))
        } else if max > 4096 {
            Some(Self::exceeds(4096, width, height))
        } else if max > 2048 && require_power_of_two {
            Some(Self::exceeds(2048, width, height))
        } else {
            None
        }
    }

    fn exceeds(limit: u32, width: u32, height: u32) -> Self {
        Self::ExceedsDimension {
            limit,
            width,
            height,
        }
    }

    /// The level this diagnostic should be logged at.
    ///
    /// Everything above 4096 is a warning; the 2048 power-of-two notice is informational.
    pub fn level(&self) -> log::Level {
        match self {
            Self::VeryLarge { .. } => log::Level::Warn,
            Self::ExceedsDimension { limit, .. } if *limit > 2048 => log::Level::Warn,
            Self::ExceedsDimension { .. } => log::Level::Info,
        }
    }
}

impl fmt::Display for SizeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VeryLarge { width, height } => write!(
                f,
                "the font texture size is very large, {width}x{height}, and may fail to build"
            ),
            Self::ExceedsDimension {
                limit,
                width,
                height,
            } => write!(
                f,
                "the font texture size is larger than {limit}; check to see if this size, \
                 {width}x{height}, is supported on the target platform"
            ),
        }
    }
}
