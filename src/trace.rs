// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Global activity trace.
//!
//! The engines emit short one-line events (segment dropped, bytes embedded,
//! scan verdict) through a process-global sink that the host UI may hook to
//! drive a terminal pane or log view. With no sink installed every emit is a
//! cheap atomic load and nothing else.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// A host-installed line consumer.
pub type TraceSink = Box<dyn Fn(&str) + Send + Sync>;

static ENABLED: AtomicBool = AtomicBool::new(false);
static SINK: RwLock<Option<TraceSink>> = RwLock::new(None);

/// Install (or clear) the global trace sink.
///
/// Passing `None` disables tracing entirely. The sink may be called from
/// rayon worker threads when the `parallel` feature is in use, so it must
/// be `Send + Sync`.
pub fn set_sink(sink: Option<TraceSink>) {
    let mut guard = match SINK.write() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };
    ENABLED.store(sink.is_some(), Ordering::Relaxed);
    *guard = sink;
}

/// Emit one trace line to the installed sink, if any.
pub fn emit(line: &str) {
    if !ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let guard = match SINK.read() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(sink) = guard.as_ref() {
        sink(line);
    }
}

/// Emit a formatted trace line without paying the formatting cost when no
/// sink is installed.
macro_rules! trace_line {
    ($($arg:tt)*) => {
        if $crate::trace::is_enabled() {
            $crate::trace::emit(&format!($($arg)*));
        }
    };
}
pub(crate) use trace_line;

/// Whether a sink is currently installed.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn sink_receives_lines() {
        let lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        set_sink(Some(Box::new(move |l| {
            captured.lock().unwrap().push(l.to_string());
        })));

        emit("trace-test-alpha");
        trace_line!("trace-test-{}", "beta");
        set_sink(None);
        emit("trace-test-gamma");

        // Other tests may emit concurrently, so check membership not equality.
        let lines = lines.lock().unwrap();
        assert!(lines.iter().any(|l| l == "trace-test-alpha"));
        assert!(lines.iter().any(|l| l == "trace-test-beta"));
        assert!(!lines.iter().any(|l| l == "trace-test-gamma"));
    }
}
