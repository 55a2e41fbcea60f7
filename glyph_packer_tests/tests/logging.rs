// Copyright 2026 the Glyph Packer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checks what [`LogBuildLogger`] sends to the `log` facade.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use glyph_packer::{BuildLogger, LogBuildLogger, PackOptions, arrange_glyphs};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::util::{GlyphSet, sample};

struct Captured {
    thread: ThreadId,
    level: Level,
    target: String,
    message: String,
}

/// Global logger that remembers every record. Tests run in parallel, so each
/// test only looks at records from its own thread.
struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records.lock().unwrap().push(Captured {
            thread: thread::current().id(),
            level: record.level(),
            target: record.target().to_owned(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

/// Runs `f` and returns the `(level, message)` pairs it logged.
fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });

    let me = thread::current().id();
    LOGGER.records.lock().unwrap().retain(|r| r.thread != me);
    f();
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|r| r.thread == me)
        .map(|r| {
            assert_eq!(r.target, "glyph_packer");
            (r.level, r.message.clone())
        })
        .collect()
}

#[test]
fn logging_packing_summary_and_diagnostic() {
    let set = GlyphSet::new([sample('W', 1, 3000, 1)]);
    let glyphs = set.glyphs();
    let options = PackOptions::default().with_power_of_two(true);

    let records = capture(|| {
        arrange_glyphs(&glyphs, options, &mut LogBuildLogger).unwrap();
    });

    assert_eq!(
        records,
        [
            (
                Level::Warn,
                "the font texture size is larger than 2048; check to see if this size, \
                 4096x4, is supported on the target platform"
                    .to_owned()
            ),
            (
                Level::Info,
                "Created 1 unique glyphs from 1 characters. \
                 0 were reported as not found in the font file."
                    .to_owned()
            ),
        ]
    );
}

#[test]
fn logging_warning_context_and_detail() {
    let records = capture(|| {
        let mut logger = LogBuildLogger;
        logger.log_warning("", None, format_args!("plain"));
        logger.log_warning("Arial.spritefont", None, format_args!("with context"));
        logger.log_warning("", Some("see the docs"), format_args!("with detail"));
        logger.log_warning("Arial.spritefont", Some("see the docs"), format_args!("both"));
    });

    let messages: Vec<_> = records.into_iter().map(|(_, message)| message).collect();
    assert_eq!(
        messages,
        [
            "plain",
            "Arial.spritefont: with context",
            "with detail (see the docs)",
            "Arial.spritefont: both (see the docs)",
        ]
    );
}
