// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel surfaces.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::glyph::Rect;

/// An 8-bit-per-channel RGBA pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Creates a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A rectangular buffer of [`Rgba8`] pixels in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Surface {
    /// Allocates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Wraps existing pixel data.
    ///
    /// Returns `None` if `pixels` does not hold exactly `width * height` entries.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.offset(x, y)).copied()
    }

    /// Overwrites the pixel at `(x, y)`. Out of bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.offset(x, y);
        self.pixels[offset] = pixel;
    }

    /// Fills `rect` with a single pixel value, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, pixel: Rgba8) {
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        for y in rect.y.min(bottom)..bottom {
            let start = self.offset(rect.x.min(right), y);
            let end = self.offset(right, y);
            self.pixels[start..end].fill(pixel);
        }
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// All pixels as raw RGBA bytes.
    #[inline]
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copies `src_rect` of `src` into `dst_rect` of this surface.
    ///
    /// Both rectangles must have the same size and lie within their surfaces.
    pub fn copy_rect(&mut self, src: &Self, src_rect: Rect, dst_rect: Rect) {
        debug_assert_eq!(
            (src_rect.width, src_rect.height),
            (dst_rect.width, dst_rect.height),
            "copy_rect needs equally sized rectangles"
        );
        debug_assert!(
            src_rect.right() <= src.width && src_rect.bottom() <= src.height,
            "source rectangle {src_rect:?} exceeds {}x{}",
            src.width,
            src.height
        );
        debug_assert!(
            dst_rect.right() <= self.width && dst_rect.bottom() <= self.height,
            "destination rectangle {dst_rect:?} exceeds {}x{}",
            self.width,
            self.height
        );

        let row_len = src_rect.width as usize;
        for row in 0..src_rect.height {
            let from = src.offset(src_rect.x, src_rect.y + row);
            let to = self.offset(dst_rect.x, dst_rect.y + row);
            self.pixels[to..to + row_len].copy_from_slice(&src.pixels[from..from + row_len]);
        }
    }

    /// Saves the surface as an 8-bit RGBA PNG file.
    #[cfg(feature = "png")]
    pub fn save_png(&self, path: &std::path::Path) -> std::io::Result<()> {
        use std::fs::File;
        use std::io::BufWriter;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let w = BufWriter::new(file);

        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().map_err(std::io::Error::other)?;
        writer
            .write_image_data(self.data_as_u8_slice())
            .map_err(std::io::Error::other)?;

        Ok(())
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Debug for Surface {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
