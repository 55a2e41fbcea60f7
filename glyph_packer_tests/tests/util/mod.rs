// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

use core::fmt::Arguments;

use glyph_packer::{
    BuildLogger, GLYPH_PADDING, Glyph, GlyphIndex, PackedAtlas, Rect, Rgba8, Surface,
};

/// Description of one test glyph: its character, identity and unpadded size.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Sample {
    pub(crate) character: char,
    pub(crate) index: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

pub(crate) fn sample(character: char, index: u32, width: u32, height: u32) -> Sample {
    Sample {
        character,
        index,
        width,
        height,
    }
}

/// Owns one source surface per glyph so tests can hand out borrowed [`Glyph`]s.
///
/// Each surface is filled with [`identity_color`] inside a one pixel margin,
/// so the glyph's source rectangle does not start at the origin.
pub(crate) struct GlyphSet {
    samples: Vec<Sample>,
    surfaces: Vec<Surface>,
}

impl GlyphSet {
    pub(crate) fn new(samples: impl IntoIterator<Item = Sample>) -> Self {
        let samples: Vec<_> = samples.into_iter().collect();
        let surfaces = samples
            .iter()
            .map(|s| {
                let mut surface = Surface::new(s.width + 2, s.height + 2);
                surface.fill_rect(
                    Rect::new(1, 1, s.width, s.height),
                    identity_color(GlyphIndex(s.index)),
                );
                surface
            })
            .collect();
        Self { samples, surfaces }
    }

    /// `count` distinct glyphs of the same size, codepoints ascending from `first`.
    pub(crate) fn uniform(first: char, count: u32, width: u32, height: u32) -> Self {
        Self::new((0..count).map(|i| {
            let character = char::from_u32(u32::from(first) + i).expect("valid test codepoint");
            sample(character, i + 1, width, height)
        }))
    }

    /// A reproducible pseudo-random glyph set resembling a real font: many
    /// small glyphs, a handful of large ones and some shared identities.
    pub(crate) fn font_like(count: u32, seed: u32) -> Self {
        let mut state = seed.max(1);
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        };
        let mut samples: Vec<Sample> = Vec::new();
        for i in 0..count {
            let r = next();
            let character = char::from_u32(0x21 + i).expect("valid test codepoint");
            // Roughly one glyph in eight renders like an earlier one.
            if i > 0 && (r >> 16) % 8 == 0 {
                let earlier = samples[((r >> 4) % i) as usize];
                samples.push(Sample {
                    character,
                    ..earlier
                });
                continue;
            }
            let (width, height) = if r % 40 == 0 {
                (30 + r % 50, 40 + (r >> 8) % 40)
            } else {
                (2 + r % 12, 4 + (r >> 8) % 14)
            };
            samples.push(sample(character, i + 1, width, height));
        }
        Self::new(samples)
    }

    pub(crate) fn glyphs(&self) -> Vec<Glyph<'_>> {
        self.samples
            .iter()
            .zip(&self.surfaces)
            .map(|(s, surface)| {
                Glyph::new(
                    s.character,
                    GlyphIndex(s.index),
                    surface,
                    Rect::new(1, 1, s.width, s.height),
                )
            })
            .collect()
    }

    pub(crate) fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

/// A distinct, opaque color per identity.
#[expect(clippy::cast_possible_truncation, reason = "only the low bits matter")]
pub(crate) fn identity_color(index: GlyphIndex) -> Rgba8 {
    Rgba8::new(index.0 as u8, (index.0 >> 8) as u8, 0x80, 0xff)
}

/// A [`BuildLogger`] that keeps everything it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingLogger {
    pub(crate) warnings: Vec<String>,
    pub(crate) messages: Vec<String>,
}

impl BuildLogger for RecordingLogger {
    fn log_warning(&mut self, context: &str, detail: Option<&str>, message: Arguments<'_>) {
        assert!(context.is_empty(), "packer warnings carry no context");
        assert!(detail.is_none(), "packer warnings carry no detail");
        self.warnings.push(message.to_string());
    }

    fn log_message(&mut self, message: Arguments<'_>) {
        self.messages.push(message.to_string());
    }
}

/// Checks every structural guarantee of a packed atlas against its input.
pub(crate) fn assert_valid_atlas(glyphs: &[Glyph<'_>], atlas: &PackedAtlas) {
    let placements = atlas.placements();
    assert_eq!(placements.len(), glyphs.len(), "every glyph gets a placement");

    for (glyph, rect) in glyphs.iter().zip(placements) {
        assert_eq!(
            (rect.width, rect.height),
            (glyph.subrect.width, glyph.subrect.height),
            "placement keeps the glyph size"
        );
        let cell = rect.inflate(GLYPH_PADDING);
        assert_eq!(cell.x + GLYPH_PADDING, rect.x, "border fits left of {rect:?}");
        assert_eq!(cell.y + GLYPH_PADDING, rect.y, "border fits above {rect:?}");
        assert!(
            cell.right() <= atlas.width() && cell.bottom() <= atlas.height(),
            "{cell:?} exceeds {}x{}",
            atlas.width(),
            atlas.height()
        );
    }

    for (i, (a, ra)) in glyphs.iter().zip(placements).enumerate() {
        for (b, rb) in glyphs[i + 1..].iter().zip(&placements[i + 1..]) {
            if a.index == b.index {
                assert_eq!(ra, rb, "{:?} and {:?} share an identity", a.character, b.character);
            } else {
                assert!(
                    !ra.inflate(GLYPH_PADDING)
                        .intersects(&rb.inflate(GLYPH_PADDING)),
                    "{:?} at {ra:?} overlaps {:?} at {rb:?}",
                    a.character,
                    b.character
                );
            }
        }
    }
}
