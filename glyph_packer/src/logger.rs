// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build logging.
//!
//! Packing reports size warnings and a summary through a [`BuildLogger`]
//! supplied by the caller, so that content pipelines can route them into
//! their own build output. [`LogBuildLogger`] forwards everything to the
//! [`log`] facade.

use core::fmt::Arguments;

/// Receiver for diagnostics produced while building a font atlas.
///
/// Loggers are pure observers: packing never inspects what they do with a
/// message.
pub trait BuildLogger {
    /// Report a condition the operator should look at.
    ///
    /// `context` names the asset or stage the warning concerns and may be
    /// empty. `detail` optionally points at more information.
    fn log_warning(&mut self, context: &str, detail: Option<&str>, message: Arguments<'_>);

    /// Report an informational message.
    fn log_message(&mut self, message: Arguments<'_>);
}

impl<L: BuildLogger + ?Sized> BuildLogger for &mut L {
    fn log_warning(&mut self, context: &str, detail: Option<&str>, message: Arguments<'_>) {
        (**self).log_warning(context, detail, message);
    }

    fn log_message(&mut self, message: Arguments<'_>) {
        (**self).log_message(message);
    }
}

/// A [`BuildLogger`] that forwards to the [`log`] crate.
///
/// Warnings use [`log::Level::Warn`], messages [`log::Level::Info`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LogBuildLogger;

impl BuildLogger for LogBuildLogger {
    fn log_warning(&mut self, context: &str, detail: Option<&str>, message: Arguments<'_>) {
        match (context.is_empty(), detail) {
            (true, None) => log::warn!(target: "glyph_packer", "{message}"),
            (false, None) => log::warn!(target: "glyph_packer", "{context}: {message}"),
            (true, Some(detail)) => log::warn!(target: "glyph_packer", "{message} ({detail})"),
            (false, Some(detail)) => {
                log::warn!(target: "glyph_packer", "{context}: {message} ({detail})");
            }
        }
    }

    fn log_message(&mut self, message: Arguments<'_>) {
        log::info!(target: "glyph_packer", "{message}");
    }
}

/// A [`BuildLogger`] that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl BuildLogger for NullLogger {
    fn log_warning(&mut self, _context: &str, _detail: Option<&str>, _message: Arguments<'_>) {}

    fn log_message(&mut self, _message: Arguments<'_>) {}
}
