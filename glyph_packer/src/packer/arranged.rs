// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Working state for one glyph while it is being arranged.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::glyph::{GLYPH_PADDING, Glyph, GlyphIndex};

/// A glyph's padded cell and its assigned position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ArrangedGlyph {
    /// Position of the source glyph in the caller's slice.
    pub(crate) source: usize,
    pub(crate) character: char,
    pub(crate) index: GlyphIndex,
    /// Padded width.
    pub(crate) width: u32,
    /// Padded height.
    pub(crate) height: u32,
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl ArrangedGlyph {
    pub(crate) fn new(source: usize, glyph: &Glyph<'_>) -> Self {
        Self {
            source,
            character: glyph.character,
            index: glyph.index,
            width: glyph.subrect.width + GLYPH_PADDING * 2,
            height: glyph.subrect.height + GLYPH_PADDING * 2,
            x: 0,
            y: 0,
        }
    }
}

impl Ord for ArrangedGlyph {
    /// Tallest first, then widest. Equal cells fall back to ascending
    /// codepoint, identity and input position.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .height
            .cmp(&self.height)
            .then_with(|| other.width.cmp(&self.width))
            .then_with(|| self.character.cmp(&other.character))
            .then_with(|| self.index.cmp(&other.index))
            .then_with(|| self.source.cmp(&other.source))
    }
}

impl PartialOrd for ArrangedGlyph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Wraps the caller's glyphs and sorts them into placement order.
pub(crate) fn arrange(glyphs: &[Glyph<'_>]) -> Vec<ArrangedGlyph> {
    let mut arranged: Vec<_> = glyphs
        .iter()
        .enumerate()
        .map(|(source, glyph)| ArrangedGlyph::new(source, glyph))
        .collect();
    arranged.sort_unstable();
    arranged
}
