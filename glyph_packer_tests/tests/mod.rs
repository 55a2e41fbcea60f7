// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `glyph_packer`.
//!
//! - The `util` module contains shared glyph fixtures and atlas checks.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that every topic module can share `util`.
//! - If you want to add new tests, put them into the module matching their topic, or into
//!   `basic.rs` if none fits. Start test names with the topic, e.g. `sizing_square_policy`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod logging;
mod util;
