// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shelf placement with smallest-first backfill.
//!
//! Glyphs arrive sorted tallest first. A forward cursor lays them left to
//! right into rows ("shelves"). Whenever a shelf leaves a gap, either at the
//! end of a row or underneath a glyph shorter than the row, the gap is
//! drained from a tail cursor that walks back from the smallest glyph. The
//! two cursors meet exactly once, so each pass is linear in the glyph count.

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use super::arranged::ArrangedGlyph;
use super::size::make_valid_size;
use crate::glyph::GlyphIndex;

/// An open area that backfill may drain glyphs into.
#[derive(Clone, Copy, Debug)]
struct Region {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

/// One placement pass over a sorted glyph slice.
pub(crate) struct ShelfPacker<'a> {
    glyphs: &'a mut [ArrangedGlyph],
    /// Where each identity was first placed.
    positions: HashMap<GlyphIndex, (u32, u32), FixedState>,
    /// Candidate output width.
    width: u32,
    /// Forward cursor.
    next: usize,
    /// One past the smallest unplaced glyph.
    tail: usize,
}

impl<'a> ShelfPacker<'a> {
    /// Places every glyph for the candidate `width` and returns the valid
    /// `(width, height)` of the resulting bounding box.
    pub(crate) fn pack(
        glyphs: &'a mut [ArrangedGlyph],
        width: u32,
        require_power_of_two: bool,
    ) -> (u32, u32) {
        let tail = glyphs.len();
        let mut packer = Self {
            positions: HashMap::with_capacity_and_hasher(tail, FixedState::default()),
            glyphs,
            width,
            next: 0,
            tail,
        };
        packer.run(require_power_of_two)
    }

    fn run(&mut self, require_power_of_two: bool) -> (u32, u32) {
        let mut x = 0;
        let mut y = 0;
        let mut row_height = 0;
        // Right edge of everything backfilled underneath the current row.
        let mut under_x = 0;
        let mut content_width = 0;

        while self.next < self.tail {
            let i = self.next;
            if self.alias(i) {
                self.next += 1;
                continue;
            }
            let ArrangedGlyph { width, height, .. } = self.glyphs[i];

            if x > 0 && x + width > self.width {
                // End of the row: fill what is left of it before moving down.
                let start = x.max(under_x);
                if start < self.width {
                    let used = self.drain(Region {
                        x: start,
                        y,
                        width: self.width - start,
                        height: row_height,
                    });
                    content_width = content_width.max(start + used);
                }
                y += row_height;
                x = 0;
                row_height = 0;
                under_x = 0;
            }

            row_height = row_height.max(height);
            self.commit(i, x, y);

            if height < row_height {
                // Later glyphs in this row are no taller than this one, so the
                // space below it stays free all the way to the right edge.
                let start = x.max(under_x);
                if start < x + width && start < self.width {
                    let used = self.drain(Region {
                        x: start,
                        y: y + height,
                        width: self.width - start,
                        height: row_height - height,
                    });
                    under_x = under_x.max(start + used);
                }
            }

            x += width;
            content_width = content_width.max(x).max(under_x);
            self.next += 1;
        }

        let width = if y == 0 {
            // Everything fit on one row, so the guess was too generous.
            make_valid_size(content_width, require_power_of_two)
        } else {
            make_valid_size(self.width.max(content_width), require_power_of_two)
        };
        (width, make_valid_size(y + row_height, require_power_of_two))
    }

    /// Moves the smallest unplaced glyphs into `region`.
    ///
    /// Glyphs are stacked top to bottom in columns; a new column starts to
    /// the right when the next glyph no longer fits below. Draining stops at
    /// the first glyph that does not fit in a fresh column. Returns the total
    /// width of the columns that were used.
    fn drain(&mut self, region: Region) -> u32 {
        let right = region.x + region.width;
        let bottom = region.y + region.height;
        let mut column_x = region.x;

        loop {
            let mut column_y = region.y;
            let mut column_width = 0;

            while let Some(s) = self.smallest() {
                if self.alias(s) {
                    self.tail -= 1;
                    continue;
                }
                let ArrangedGlyph { width, height, .. } = self.glyphs[s];
                if column_x + width > right || column_y + height > bottom {
                    break;
                }
                self.commit(s, column_x, column_y);
                self.tail -= 1;
                column_y += height;
                column_width = column_width.max(width);
            }

            if column_width == 0 {
                break;
            }
            column_x += column_width;
        }

        column_x - region.x
    }

    /// The smallest glyph not yet reached by either cursor.
    fn smallest(&self) -> Option<usize> {
        let s = self.tail.checked_sub(1)?;
        (s > self.next).then_some(s)
    }

    /// If the glyph's identity was already placed, reuses that position.
    fn alias(&mut self, idx: usize) -> bool {
        let glyph = &mut self.glyphs[idx];
        match self.positions.get(&glyph.index) {
            Some(&(x, y)) => {
                glyph.x = x;
                glyph.y = y;
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, idx: usize, x: u32, y: u32) {
        let glyph = &mut self.glyphs[idx];
        glyph.x = x;
        glyph.y = y;
        self.positions.insert(glyph.index, (x, y));
    }
}
