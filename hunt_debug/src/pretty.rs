// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to milliseconds using a [`Timebase`].

use std::io::Write;

use hunt_core::backend::FrameRequest;
use hunt_core::time::{HostTime, Timebase};
use hunt_core::trace::{
    EvictEvent, FrameEvent, PassSummary, RegisterEvent, ResizeEvent, ScrollEvent, TraceSink,
    Transition, TransitionEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns the destination.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ticks_to_ms(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1_000_000.0
    }

    fn host_ms(&self, t: HostTime) -> f64 {
        self.ticks_to_ms(t.ticks())
    }
}

fn request(r: Option<FrameRequest>) -> String {
    r.map_or_else(|| "-".to_owned(), |r| r.0.to_string())
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_register(&mut self, e: &RegisterEvent) {
        let first = e.first.map_or_else(|| "-".to_owned(), |id| id.get().to_string());
        let _ = writeln!(
            self.writer,
            "[register] at={:.3}ms first={first} count={} tracked={}",
            self.host_ms(e.at),
            e.count,
            e.tracked,
        );
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        let name = match e.transition {
            Transition::Enter => "enter",
            Transition::Leave => "leave",
        };
        let _ = writeln!(
            self.writer,
            "[{name}] pass={} id={} top={:.1} height={:.1} offset={:.1} viewport={:.1}",
            e.stamp.pass,
            e.id.get(),
            e.top,
            e.height,
            e.offset,
            e.viewport_height,
        );
    }

    fn on_evict(&mut self, e: &EvictEvent) {
        let _ = writeln!(self.writer, "[evict] pass={} id={}", e.stamp.pass, e.id.get());
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        let _ = writeln!(
            self.writer,
            "[pass] pass={} at={:.3}ms examined={} entered={} left={} evicted={} remaining={}",
            s.stamp.pass,
            self.host_ms(s.stamp.at),
            s.examined,
            s.entered,
            s.left,
            s.evicted,
            s.remaining,
        );
    }

    fn on_scroll(&mut self, e: &ScrollEvent) {
        let _ = writeln!(
            self.writer,
            "[scroll] at={:.3}ms superseded={} scheduled={}",
            self.host_ms(e.at),
            request(e.superseded),
            request(e.scheduled),
        );
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        let _ = writeln!(
            self.writer,
            "[frame] at={:.3}ms quiet={:.3}ms outcome={:?}",
            self.host_ms(e.at),
            self.ticks_to_ms(e.elapsed.ticks()),
            e.outcome,
        );
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        let _ = writeln!(
            self.writer,
            "[resize] at={:.3}ms height={:.1}",
            self.host_ms(e.at),
            e.height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_core::scheduler::FrameOutcome;
    use hunt_core::time::Duration;
    use hunt_core::trace::PassStamp;

    #[test]
    fn pretty_print_frame() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::MICROS);
        sink.on_frame(&FrameEvent {
            at: HostTime(16_000),
            elapsed: Duration(4_000),
            outcome: FrameOutcome::Deferred,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.starts_with("[frame]"), "got: {output}");
        assert!(output.contains("at=16.000ms"), "got: {output}");
        assert!(output.contains("quiet=4.000ms"), "got: {output}");
        assert!(output.contains("Deferred"), "got: {output}");
    }

    #[test]
    fn pretty_print_scroll_without_frames() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_scroll(&ScrollEvent {
            at: HostTime(0),
            superseded: None,
            scheduled: None,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("superseded=- scheduled=-"), "got: {output}");
    }

    #[test]
    fn pretty_print_pass_summary() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_pass_summary(&PassSummary {
            stamp: PassStamp {
                pass: 7,
                at: HostTime(2_500_000),
            },
            examined: 4,
            entered: 1,
            left: 2,
            evicted: 1,
            remaining: 3,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("pass=7 at=2.500ms"), "got: {output}");
        assert!(output.contains("evicted=1 remaining=3"), "got: {output}");
    }
}
