// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character regions select which characters a font atlas contains.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use foldhash::fast::FixedState;
use hashbrown::HashSet;

/// A range of consecutive characters to include in a font.
///
/// Each character can be displayed as a different codepoint: the region's
/// `start` maps to [`display_as`](Self::display_as) and every following
/// character to the next codepoint after that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharacterRegion {
    start: char,
    end: char,
    display_as: u32,
}

impl CharacterRegion {
    /// Creates a region covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseRegionError::Reversed`] when `start > end`.
    pub fn new(start: char, end: char) -> Result<Self, ParseRegionError> {
        if start > end {
            return Err(ParseRegionError::Reversed);
        }
        Ok(Self {
            start,
            end,
            display_as: u32::from(start),
        })
    }

    /// Remaps the region so that `start` is displayed as `display_as`.
    ///
    /// Zero resets the mapping to `start` itself.
    #[must_use]
    pub fn with_display_as(mut self, display_as: u32) -> Self {
        self.display_as = if display_as == 0 {
            u32::from(self.start)
        } else {
            display_as
        };
        self
    }

    /// First character of the region.
    pub fn start(&self) -> char {
        self.start
    }

    /// Last character of the region, inclusive.
    pub fn end(&self) -> char {
        self.end
    }

    /// Codepoint that `start` is displayed as.
    pub fn display_as(&self) -> u32 {
        self.display_as
    }

    /// Iterates the region's characters with the codepoint each is displayed as.
    ///
    /// Surrogate codepoints are not characters and are skipped; the display
    /// codepoint still advances over them.
    pub fn characters(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        let start = u32::from(self.start);
        let display_as = self.display_as;
        (self.start..=self.end).map(move |c| (c, display_as.wrapping_add(u32::from(c) - start)))
    }

    /// Merges several regions, keeping the first mapping of every character.
    pub fn distinct_characters(regions: &[Self]) -> Vec<(char, u32)> {
        let mut seen: HashSet<char, FixedState> = HashSet::default();
        regions
            .iter()
            .flat_map(|region| region.characters())
            .filter(|(c, _)| seen.insert(*c))
            .collect()
    }
}

impl Default for CharacterRegion {
    /// Printable ASCII, `' '..='~'`.
    fn default() -> Self {
        Self {
            start: ' ',
            end: '~',
            display_as: u32::from(' '),
        }
    }
}

/// An error returned when parsing a [`CharacterRegion`] fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseRegionError {
    /// The input was empty.
    Empty,
    /// A bound was neither a single character nor a valid codepoint number.
    InvalidCharacter,
    /// The input contained more than two bounds.
    TooManyParts,
    /// The first bound comes after the second.
    Reversed,
}

impl fmt::Display for ParseRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty character region"),
            Self::InvalidCharacter => f.write_str("invalid character in region"),
            Self::TooManyParts => f.write_str("character region has more than two bounds"),
            Self::Reversed => f.write_str("character region start is after its end"),
        }
    }
}

impl core::error::Error for ParseRegionError {}

impl FromStr for CharacterRegion {
    type Err = ParseRegionError;

    /// Parses `A`, `A-Z`, `32-127`, `0x20-0x7F`, or XML character
    /// references such as `&#65;` and `&#x41;`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseRegionError::Empty);
        }
        // A lone character, including '-' itself.
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::new(c, c);
        }

        let mut parts = s.split('-');
        let start = parts.next().ok_or(ParseRegionError::Empty)?;
        let end = parts.next();
        if parts.next().is_some() {
            return Err(ParseRegionError::TooManyParts);
        }

        let start = parse_bound(start)?;
        let end = end.map(parse_bound).transpose()?.unwrap_or(start);
        Self::new(start, end)
    }
}

fn parse_bound(s: &str) -> Result<char, ParseRegionError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c);
    }

    let value = if let Some(hex) = s.strip_prefix("&#x").or_else(|| s.strip_prefix("&#X")) {
        u32::from_str_radix(hex.strip_suffix(';').unwrap_or(hex), 16)
    } else if let Some(dec) = s.strip_prefix("&#") {
        dec.strip_suffix(';').unwrap_or(dec).parse()
    } else if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    value
        .ok()
        .and_then(char::from_u32)
        .ok_or(ParseRegionError::InvalidCharacter)
}
