// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copies arranged glyphs into the atlas surface.

use alloc::vec;
use alloc::vec::Vec;

use foldhash::fast::FixedState;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use super::arranged::ArrangedGlyph;
use crate::glyph::{GLYPH_PADDING, Glyph, GlyphIndex, Rect};
use crate::logger::BuildLogger;
use crate::surface::Surface;

/// Counts reported after the atlas has been composited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompositeStats {
    /// Number of glyph images actually stored in the atlas.
    pub unique_glyphs: usize,
    /// Number of glyphs processed, duplicates included.
    pub total_glyphs: usize,
    /// Number of glyphs whose identity was [`GlyphIndex::NOT_FOUND`].
    pub not_found_glyphs: usize,
}

/// Allocates the atlas and blits the first glyph of every identity into it.
///
/// Returns the atlas together with each input glyph's rectangle inside it,
/// indexed like `glyphs`.
pub(crate) fn composite<L: BuildLogger + ?Sized>(
    glyphs: &[Glyph<'_>],
    arranged: &[ArrangedGlyph],
    width: u32,
    height: u32,
    logger: &mut L,
) -> (Surface, Vec<Rect>, CompositeStats) {
    let mut surface = Surface::new(width, height);
    let mut placements = vec![Rect::default(); glyphs.len()];
    let mut stored: HashMap<GlyphIndex, Rect, FixedState> =
        HashMap::with_capacity_and_hasher(arranged.len(), FixedState::default());
    let mut stats = CompositeStats {
        total_glyphs: arranged.len(),
        ..CompositeStats::default()
    };

    for cell in arranged {
        let glyph = &glyphs[cell.source];
        if glyph.index.is_not_found() {
            stats.not_found_glyphs += 1;
        }

        let destination = match stored.entry(glyph.index) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                // The border stays transparent; pixels go inside the padded cell.
                let destination = Rect::new(
                    cell.x + GLYPH_PADDING,
                    cell.y + GLYPH_PADDING,
                    glyph.subrect.width,
                    glyph.subrect.height,
                );
                surface.copy_rect(glyph.surface, glyph.subrect, destination);
                stats.unique_glyphs += 1;
                *entry.insert(destination)
            }
        };
        placements[cell.source] = destination;
    }

    logger.log_message(format_args!(
        "Created {} unique glyphs from {} characters. {} were reported as not found in the font file.",
        stats.unique_glyphs, stats.total_glyphs, stats.not_found_glyphs
    ));

    (surface, placements, stats)
}
