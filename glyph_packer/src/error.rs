// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Fatal failure while packing glyphs into an atlas.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the atlas dimensions that were
/// computed when packing gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Atlas width at the time of failure.
    width: u32,

    /// Atlas height at the time of failure.
    height: u32,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The atlas width that was computed before packing failed.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The atlas height that was computed before packing failed.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn texture_too_large(width: u32, height: u32) -> Self {
        Self {
            kind: ErrorKind::TextureTooLarge,
            width,
            height,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::TextureTooLarge => write!(
                f,
                "font texture size is too large {}x{}, try using a smaller size",
                self.width, self.height
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The atlas would exceed the maximum texture dimension or area that
    /// target platforms can allocate.
    TextureTooLarge,
}
