// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input glyph records.

use crate::surface::Surface;

/// Padding in pixels added to each side of a glyph to prevent texture bleeding.
pub const GLYPH_PADDING: u32 = 1;

/// Identity of a rendered glyph shape.
///
/// Two glyphs with the same index render identically (for example two
/// codepoints mapped to the same outline), so the atlas stores them once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphIndex(pub u32);

impl GlyphIndex {
    /// Sentinel reported by the rasterizer for characters missing from the font.
    pub const NOT_FOUND: Self = Self(0);

    /// Whether this is the [`NOT_FOUND`](Self::NOT_FOUND) sentinel.
    #[inline]
    pub fn is_not_found(self) -> bool {
        self == Self::NOT_FOUND
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns this rectangle grown by `amount` pixels on every side, saturating at zero.
    pub fn inflate(&self, amount: u32) -> Self {
        let x = self.x.saturating_sub(amount);
        let y = self.y.saturating_sub(amount);
        Self {
            x,
            y,
            width: self.right() + amount - x,
            height: self.bottom() + amount - y,
        }
    }
}

/// One character's rendered image, ready to be placed in an atlas.
///
/// The glyph borrows the surface it was rendered into; `subrect` selects the
/// glyph's pixels within that surface.
#[derive(Copy, Clone, Debug)]
pub struct Glyph<'a> {
    /// The character this glyph renders.
    pub character: char,
    /// The rendered shape's identity, used for deduplication.
    pub index: GlyphIndex,
    /// The surface holding the glyph's pixels.
    pub surface: &'a Surface,
    /// Location of the glyph within `surface`.
    pub subrect: Rect,
}

impl<'a> Glyph<'a> {
    /// Creates a new glyph record.
    #[inline]
    pub fn new(character: char, index: GlyphIndex, surface: &'a Surface, subrect: Rect) -> Self {
        Self {
            character,
            index,
            surface,
            subrect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, 12, 12);
        assert!(!a.intersects(&Rect::new(12, 0, 12, 12)));
        assert!(!a.intersects(&Rect::new(0, 12, 12, 12)));
        assert!(a.intersects(&Rect::new(11, 11, 2, 2)));
        assert!(!a.intersects(&Rect::new(4, 4, 0, 3)));
    }

    #[test]
    fn rect_inflate_saturates_at_origin() {
        assert_eq!(Rect::new(1, 1, 10, 10).inflate(1), Rect::new(0, 0, 12, 12));
        assert_eq!(Rect::new(0, 5, 4, 4).inflate(1), Rect::new(0, 4, 5, 6));
    }

    #[test]
    fn not_found_sentinel() {
        assert!(GlyphIndex(0).is_not_found());
        assert!(!GlyphIndex(7).is_not_found());
    }
}
