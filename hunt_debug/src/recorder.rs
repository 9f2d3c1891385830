// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps a copy of every event
//! it receives, in arrival order, as a [`RecordedEvent`]. Share one with a
//! [`Hunter`](hunt_core::Hunter) through `Rc<RefCell<RecorderSink>>` to read
//! the recording while the service is still running.

use hunt_core::trace::{
    EvictEvent, FrameEvent, PassSummary, RegisterEvent, ResizeEvent, ScrollEvent, TraceSink,
    TransitionEvent,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_register`].
    Register(RegisterEvent),
    /// See [`TraceSink::on_transition`].
    Transition(TransitionEvent),
    /// See [`TraceSink::on_evict`].
    Evict(EvictEvent),
    /// See [`TraceSink::on_pass_summary`].
    PassSummary(PassSummary),
    /// See [`TraceSink::on_scroll`].
    Scroll(ScrollEvent),
    /// See [`TraceSink::on_frame`].
    Frame(FrameEvent),
    /// See [`TraceSink::on_resize`].
    Resize(ResizeEvent),
}

impl RecordedEvent {
    /// Short event name, as used in exported traces.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Register(_) => "Register",
            Self::Transition(_) => "Transition",
            Self::Evict(_) => "Evict",
            Self::PassSummary(_) => "PassSummary",
            Self::Scroll(_) => "Scroll",
            Self::Frame(_) => "Frame",
            Self::Resize(_) => "Resize",
        }
    }
}

/// A [`TraceSink`] that records every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TraceSink for RecorderSink {
    fn on_register(&mut self, e: &RegisterEvent) {
        self.events.push(RecordedEvent::Register(*e));
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.events.push(RecordedEvent::Transition(*e));
    }

    fn on_evict(&mut self, e: &EvictEvent) {
        self.events.push(RecordedEvent::Evict(*e));
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        self.events.push(RecordedEvent::PassSummary(*s));
    }

    fn on_scroll(&mut self, e: &ScrollEvent) {
        self.events.push(RecordedEvent::Scroll(*e));
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        self.events.push(RecordedEvent::Frame(*e));
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.events.push(RecordedEvent::Resize(*e));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use hunt_core::Hunter;
    use hunt_core::backend::{FrameHost, FrameRequest, Target};
    use hunt_core::config::{HuntConfig, Settings};
    use hunt_core::time::HostTime;
    use kurbo::Rect;

    struct Fixed(f64);

    impl Target for Fixed {
        fn bounding_rect(&self) -> Rect {
            Rect::new(0.0, self.0, 10.0, self.0 + 10.0)
        }
    }

    #[derive(Debug, Default)]
    struct NoFrames;

    impl FrameHost for NoFrames {
        fn now(&self) -> HostTime {
            HostTime(0)
        }

        fn request_frame(&mut self) -> Option<FrameRequest> {
            None
        }

        fn cancel_frame(&mut self, _request: FrameRequest) {}
    }

    #[test]
    fn records_in_arrival_order() {
        let recorder = Rc::new(RefCell::new(RecorderSink::new()));
        let mut hunter = Hunter::new(NoFrames, Settings::default(), 800.0);
        hunter.set_trace_sink(Rc::clone(&recorder));

        hunter
            .register(vec![Fixed(100.0), Fixed(2000.0)], &HuntConfig::new())
            .unwrap();
        hunter.resize(600.0);

        let names: Vec<_> = recorder
            .borrow()
            .events()
            .iter()
            .map(RecordedEvent::name)
            .collect();
        assert_eq!(names, ["Register", "Transition", "PassSummary", "Resize"]);
    }

    #[test]
    fn clear_discards_events() {
        let mut rec = RecorderSink::new();
        rec.on_resize(&ResizeEvent {
            at: HostTime(1),
            height: 500.0,
        });
        assert_eq!(rec.len(), 1);
        rec.clear();
        assert!(rec.is_empty());
    }
}
