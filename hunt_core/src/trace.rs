// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for registration, evaluation and scheduling.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Hunter`](crate::hunter::Hunter) calls at each stage. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Sinks compose: `Rc<RefCell<S>>` forwards to a shared sink the caller can
//! still read, and a pair `(A, B)` fans every event out to both.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::backend::FrameRequest;
use crate::scheduler::FrameOutcome;
use crate::time::{Duration, HostTime};
use crate::tracked::TrackedId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Direction of a visibility transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The entry entered the band; its enter callback fired.
    Enter,
    /// The entry left the band; its leave callback fired.
    Leave,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Identifies one evaluation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PassStamp {
    /// Monotonic pass counter.
    pub pass: u64,
    /// Host time when the pass started.
    pub at: HostTime,
}

/// Emitted after targets are appended to the registry, before the initial
/// evaluation pass.
#[derive(Clone, Copy, Debug)]
pub struct RegisterEvent {
    /// Host time of the call.
    pub at: HostTime,
    /// Id of the first new entry, or `None` for an empty collection.
    pub first: Option<TrackedId>,
    /// Number of entries added.
    pub count: usize,
    /// Registry size after the call.
    pub tracked: usize,
}

/// Emitted for every enter or leave callback invocation.
#[derive(Clone, Copy, Debug)]
pub struct TransitionEvent {
    /// The pass that produced the transition.
    pub stamp: PassStamp,
    /// The entry that transitioned.
    pub id: TrackedId,
    /// Which callback fired.
    pub transition: Transition,
    /// Top of the bounding rectangle, relative to the viewport.
    pub top: f64,
    /// Height of the bounding rectangle.
    pub height: f64,
    /// The entry's trigger offset.
    pub offset: f64,
    /// Viewport height used for the check.
    pub viewport_height: f64,
}

/// Emitted when a non-persistent entry is removed after leaving.
#[derive(Clone, Copy, Debug)]
pub struct EvictEvent {
    /// The pass that removed the entry.
    pub stamp: PassStamp,
    /// The removed entry.
    pub id: TrackedId,
}

/// Per-pass counts, emitted at the end of every evaluation.
#[derive(Clone, Copy, Debug)]
pub struct PassSummary {
    /// Which pass.
    pub stamp: PassStamp,
    /// Entries examined (registry size at the start of the pass).
    pub examined: usize,
    /// Enter callbacks fired.
    pub entered: usize,
    /// Leave callbacks fired.
    pub left: usize,
    /// Entries removed.
    pub evicted: usize,
    /// Registry size at the end of the pass.
    pub remaining: usize,
}

/// Emitted for every scroll signal.
#[derive(Clone, Copy, Debug)]
pub struct ScrollEvent {
    /// Host time of the scroll.
    pub at: HostTime,
    /// The pending frame this scroll cancelled, if any.
    pub superseded: Option<FrameRequest>,
    /// The frame requested in its place, or `None` if the host has no frames.
    pub scheduled: Option<FrameRequest>,
}

/// Emitted for every delivered frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameEvent {
    /// Host time of the frame.
    pub at: HostTime,
    /// Time since the last scroll.
    pub elapsed: Duration,
    /// What the scheduler decided.
    pub outcome: FrameOutcome,
}

/// Emitted when the viewport height is refreshed.
#[derive(Clone, Copy, Debug)]
pub struct ResizeEvent {
    /// Host time of the resize.
    pub at: HostTime,
    /// New viewport height.
    pub height: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a [`Hunter`](crate::hunter::Hunter).
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a registration appended entries.
    fn on_register(&mut self, e: &RegisterEvent) {
        _ = e;
    }

    /// Called for each enter or leave transition.
    fn on_transition(&mut self, e: &TransitionEvent) {
        _ = e;
    }

    /// Called when an entry is evicted.
    fn on_evict(&mut self, e: &EvictEvent) {
        _ = e;
    }

    /// Called at the end of each evaluation pass.
    fn on_pass_summary(&mut self, s: &PassSummary) {
        _ = s;
    }

    /// Called for each scroll signal.
    fn on_scroll(&mut self, e: &ScrollEvent) {
        _ = e;
    }

    /// Called for each delivered frame.
    fn on_frame(&mut self, e: &FrameEvent) {
        _ = e;
    }

    /// Called when the viewport is resized.
    fn on_resize(&mut self, e: &ResizeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// Provided sinks
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

impl<S: TraceSink + ?Sized> TraceSink for Rc<RefCell<S>> {
    fn on_register(&mut self, e: &RegisterEvent) {
        self.borrow_mut().on_register(e);
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.borrow_mut().on_transition(e);
    }

    fn on_evict(&mut self, e: &EvictEvent) {
        self.borrow_mut().on_evict(e);
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        self.borrow_mut().on_pass_summary(s);
    }

    fn on_scroll(&mut self, e: &ScrollEvent) {
        self.borrow_mut().on_scroll(e);
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        self.borrow_mut().on_frame(e);
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.borrow_mut().on_resize(e);
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for (A, B) {
    fn on_register(&mut self, e: &RegisterEvent) {
        self.0.on_register(e);
        self.1.on_register(e);
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.0.on_transition(e);
        self.1.on_transition(e);
    }

    fn on_evict(&mut self, e: &EvictEvent) {
        self.0.on_evict(e);
        self.1.on_evict(e);
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        self.0.on_pass_summary(s);
        self.1.on_pass_summary(s);
    }

    fn on_scroll(&mut self, e: &ScrollEvent) {
        self.0.on_scroll(e);
        self.1.on_scroll(e);
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        self.0.on_frame(e);
        self.1.on_frame(e);
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.0.on_resize(e);
        self.1.on_resize(e);
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`RegisterEvent`].
    #[inline]
    pub fn register(&mut self, e: &RegisterEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_register(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransitionEvent`].
    #[inline]
    pub fn transition(&mut self, e: &TransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EvictEvent`].
    #[inline]
    pub fn evict(&mut self, e: &EvictEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_evict(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassSummary`].
    #[inline]
    pub fn pass_summary(&mut self, s: &PassSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_pass_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }

    /// Emits a [`ScrollEvent`].
    #[inline]
    pub fn scroll(&mut self, e: &ScrollEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scroll(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameEvent`].
    #[inline]
    pub fn frame(&mut self, e: &FrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResizeEvent`].
    #[inline]
    pub fn resize(&mut self, e: &ResizeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resize(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
