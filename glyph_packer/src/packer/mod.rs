// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas packing.
//!
//! Packing happens in three steps:
//! - The size estimator runs the shelf packer at a fixed width, then again
//!   at a width derived from the first pass's area, and checks the result
//!   against platform limits.
//! - The shelf packer assigns every glyph a cell, aliasing glyphs that
//!   share a [`GlyphIndex`](crate::GlyphIndex).
//! - The compositor copies each unique glyph into the new atlas.
//!
//! No state survives between calls to [`arrange_glyphs`].

mod arranged;
mod compositor;
mod shelf;
mod size;

use alloc::vec::Vec;

pub use compositor::CompositeStats;
pub use size::{INITIAL_WIDTH_GUESS, MAX_DIMENSION, MAX_POT_DIMENSION, SizeDiagnostic};

use crate::error::Error;
use crate::glyph::{Glyph, Rect};
use crate::logger::BuildLogger;
use crate::surface::Surface;

/// Size constraints for the output atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackOptions {
    /// Round both atlas dimensions up to powers of two.
    ///
    /// This also lowers the maximum dimension to [`MAX_POT_DIMENSION`].
    pub require_power_of_two: bool,
    /// Make the atlas square.
    pub require_square: bool,
}

impl PackOptions {
    /// Creates options with the given constraints.
    pub fn new(require_power_of_two: bool, require_square: bool) -> Self {
        Self {
            require_power_of_two,
            require_square,
        }
    }

    /// Sets whether both dimensions must be powers of two.
    #[must_use]
    pub fn with_power_of_two(mut self, require_power_of_two: bool) -> Self {
        self.require_power_of_two = require_power_of_two;
        self
    }

    /// Sets whether the atlas must be square.
    #[must_use]
    pub fn with_square(mut self, require_square: bool) -> Self {
        self.require_square = require_square;
        self
    }
}

/// The result of [`arrange_glyphs`].
#[derive(Clone, Debug)]
pub struct PackedAtlas {
    surface: Surface,
    placements: Vec<Rect>,
    stats: CompositeStats,
    diagnostic: Option<SizeDiagnostic>,
}

impl PackedAtlas {
    /// The atlas surface.
    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Consumes the result, returning the atlas surface.
    pub fn into_surface(self) -> Surface {
        self.surface
    }

    /// Atlas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    /// Atlas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Where each input glyph's pixels live in the atlas, in input order.
    ///
    /// The rectangle excludes the one pixel border around each glyph.
    #[inline]
    pub fn placements(&self) -> &[Rect] {
        &self.placements
    }

    /// The atlas rectangle of the input glyph at `index`.
    pub fn placement(&self, index: usize) -> Option<Rect> {
        self.placements.get(index).copied()
    }

    /// Unique and total glyph counts.
    #[inline]
    pub fn stats(&self) -> CompositeStats {
        self.stats
    }

    /// The size warning that was logged, if any.
    #[inline]
    pub fn diagnostic(&self) -> Option<SizeDiagnostic> {
        self.diagnostic
    }

    /// Returns copies of `glyphs` that point into the atlas instead of their
    /// source surfaces.
    ///
    /// `glyphs` must be the slice that was passed to [`arrange_glyphs`].
    pub fn rebind<'a>(&'a self, glyphs: &[Glyph<'_>]) -> Vec<Glyph<'a>> {
        debug_assert_eq!(
            glyphs.len(),
            self.placements.len(),
            "rebind needs the glyphs that were packed"
        );
        glyphs
            .iter()
            .zip(&self.placements)
            .map(|(glyph, rect)| Glyph::new(glyph.character, glyph.index, &self.surface, *rect))
            .collect()
    }
}

/// Packs `glyphs` into a single atlas surface.
///
/// Glyphs sharing a [`GlyphIndex`](crate::GlyphIndex) are stored once and all receive the same
/// rectangle. Size warnings and a summary are reported through `logger`.
///
/// # Errors
///
/// Returns an [`Error`] of kind [`TextureTooLarge`](crate::ErrorKind::TextureTooLarge)
/// when the atlas would exceed [`MAX_POT_DIMENSION`] under a power-of-two or
/// square policy, or when its area reaches 16380×16384 pixels.
pub fn arrange_glyphs<L: BuildLogger + ?Sized>(
    glyphs: &[Glyph<'_>],
    options: PackOptions,
    logger: &mut L,
) -> Result<PackedAtlas, Error> {
    let mut arranged = arranged::arrange(glyphs);
    let (width, height) = size::estimate_size(&mut arranged, options)?;

    let diagnostic = SizeDiagnostic::check(width, height, options.require_power_of_two);
    if let Some(diagnostic) = diagnostic {
        logger.log_warning("", None, format_args!("{diagnostic}"));
    }

    let (surface, placements, stats) =
        compositor::composite(glyphs, &arranged, width, height, logger);
    Ok(PackedAtlas {
        surface,
        placements,
        stats,
        diagnostic,
    })
}
