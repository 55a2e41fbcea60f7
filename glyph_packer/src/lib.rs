// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Packer bakes a set of individually rendered glyph images into one
//! texture atlas.
//!
//! The entry point is [`arrange_glyphs`]. It sorts the glyphs, runs a shelf
//! packer twice to settle on a near-minimal atlas size that satisfies the
//! requested [`PackOptions`], and then copies every visually unique glyph
//! into a fresh [`Surface`]. Glyphs sharing a [`GlyphIndex`] are stored once
//! and aliased.
//!
//! ```
//! use glyph_packer::{arrange_glyphs, Glyph, GlyphIndex, NullLogger, PackOptions, Rect, Surface};
//!
//! let source = Surface::new(10, 10);
//! let glyphs = [
//!     Glyph::new('a', GlyphIndex(1), &source, Rect::new(0, 0, 10, 10)),
//!     Glyph::new('b', GlyphIndex(2), &source, Rect::new(0, 0, 10, 10)),
//! ];
//! let atlas = arrange_glyphs(&glyphs, PackOptions::default(), &mut NullLogger).unwrap();
//! assert_eq!(atlas.placements().len(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in the `log` facade.
//! - `png`: Enables [`Surface::save_png`] for inspecting atlases.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod glyph;
mod impl_bytemuck;
mod logger;
mod packer;
mod region;
mod surface;

pub use crate::error::{Error, ErrorKind};
pub use crate::glyph::{GLYPH_PADDING, Glyph, GlyphIndex, Rect};
pub use crate::logger::{BuildLogger, LogBuildLogger, NullLogger};
pub use crate::packer::{
    CompositeStats, INITIAL_WIDTH_GUESS, MAX_DIMENSION, MAX_POT_DIMENSION, PackOptions,
    PackedAtlas, SizeDiagnostic, arrange_glyphs,
};
pub use crate::region::{CharacterRegion, ParseRegionError};
pub use crate::surface::{Rgba8, Surface};
