// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `bytemuck` trait impls for pixel types.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::surface::Rgba8;
use bytemuck::{Pod, Zeroable};

// Safety: The struct is `repr(C)` with four `u8` fields, so it has no padding
// and every bit pattern is valid.
unsafe impl Zeroable for Rgba8 {}

// Safety: See above. The type is also `Copy` and `'static`.
unsafe impl Pod for Rgba8 {}

#[cfg(test)]
mod tests {
    use crate::surface::Rgba8;

    #[test]
    fn pixel_bytes_are_rgba_ordered() {
        let pixel = Rgba8::new(1, 2, 3, 4);
        assert_eq!(bytemuck::bytes_of(&pixel), &[1, 2, 3, 4]);
        assert_eq!(
            bytemuck::cast_slice::<u8, Rgba8>(&[9, 8, 7, 6]),
            &[Rgba8::new(9, 8, 7, 6)]
        );
    }
}
