// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visibility-tracking service.
//!
//! A [`Hunter`] owns the [`Registry`], the [`Viewport`] metrics and the
//! [`DebounceScheduler`], plus the host primitives it needs to read time and
//! request frames. Construct one per page (or per application instance) and
//! route host signals to it:
//!
//! ```rust,ignore
//! let mut hunter = Hunter::new(host, Settings::default(), window_height);
//! hunter.register(targets, &HuntConfig::new().on_enter(|e| reveal(e.target())))?;
//!
//! // host scroll listener
//! hunter.scroll();
//! // host frame callback
//! hunter.frame();
//! // host resize listener
//! hunter.resize(window_height);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::backend::{FrameHost, Target};
use crate::config::{HuntConfig, Settings, Targets};
use crate::error::HuntError;
use crate::scheduler::{DebounceScheduler, FrameOutcome, FrameSlot, ScrollOutcome};
use crate::trace::{
    FrameEvent, PassStamp, RegisterEvent, ResizeEvent, ScrollEvent, TraceSink, Tracer,
};
use crate::tracked::{Registry, Tracked, TrackedId, VisibilityChanges};
use crate::viewport::Viewport;

/// Tracks registered targets and fires their callbacks as they scroll into
/// and out of view.
pub struct Hunter<T, H> {
    registry: Registry<T>,
    viewport: Viewport,
    scheduler: DebounceScheduler,
    host: H,
    sink: Option<Box<dyn TraceSink>>,
    passes: u64,
}

impl<T: Target, H: FrameHost> Hunter<T, H> {
    /// Creates a service with an empty registry.
    ///
    /// `settings` is read once here; `viewport_height` is the initial
    /// viewport height, refreshed later through [`resize`](Self::resize).
    #[must_use]
    pub fn new(host: H, settings: Settings, viewport_height: f64) -> Self {
        Self {
            registry: Registry::new(),
            viewport: Viewport::new(viewport_height),
            scheduler: DebounceScheduler::new(settings.debounce),
            host,
            sink: None,
            passes: 0,
        }
    }

    /// Registers one or more targets with the given configuration.
    ///
    /// Pass a `Vec` or array for a collection, or [`Targets::Single`] for one
    /// target.
    ///
    /// Each target gets its own entry, appended in input order, even if it is
    /// already tracked. One evaluation pass runs before returning, so targets
    /// that are already on screen fire their enter callback immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HuntError::InvalidArgument`] if the configuration does not
    /// [validate](HuntConfig::validate). Nothing is registered in that case.
    pub fn register(
        &mut self,
        targets: impl Into<Targets<T>>,
        config: &HuntConfig<T>,
    ) -> Result<Vec<TrackedId>, HuntError> {
        config.validate()?;

        let ids: Vec<TrackedId> = targets
            .into()
            .into_vec()
            .into_iter()
            .map(|target| self.registry.insert(target, config))
            .collect();

        tracer(&mut self.sink).register(&RegisterEvent {
            at: self.host.now(),
            first: ids.first().copied(),
            count: ids.len(),
            tracked: self.registry.len(),
        });

        self.evaluate();
        Ok(ids)
    }

    /// Runs one evaluation pass over every tracked entry.
    pub fn evaluate(&mut self) -> VisibilityChanges {
        let stamp = PassStamp {
            pass: self.passes,
            at: self.host.now(),
        };
        self.passes += 1;

        let mut changes = VisibilityChanges::default();
        let mut tracer = tracer(&mut self.sink);
        self.registry
            .evaluate_into(&self.viewport, stamp, &mut tracer, &mut changes);
        changes
    }

    /// Handles a scroll signal from the host.
    ///
    /// Supersedes any pending frame and requests a new one. On a host
    /// without frames the evaluation runs synchronously instead.
    pub fn scroll(&mut self) -> ScrollOutcome {
        let now = self.host.now();
        let outcome = self.scheduler.on_scroll(now, &mut self.host);
        tracer(&mut self.sink).scroll(&ScrollEvent {
            at: now,
            superseded: outcome.superseded,
            scheduled: outcome.scheduled,
        });

        if !outcome.is_deferred() {
            self.evaluate();
        }
        outcome
    }

    /// Handles a frame delivered by the host.
    ///
    /// Evaluates once scrolling has been quiet for the debounce threshold;
    /// otherwise polls again on the next frame.
    pub fn frame(&mut self) -> FrameOutcome {
        let now = self.host.now();
        let elapsed = self.scheduler.elapsed(now);
        let outcome = self.scheduler.on_frame(now, &mut self.host);
        tracer(&mut self.sink).frame(&FrameEvent {
            at: now,
            elapsed,
            outcome,
        });

        if outcome == FrameOutcome::Settled {
            self.evaluate();
        }
        outcome
    }

    /// Handles a resize signal: refreshes the viewport height immediately.
    ///
    /// No evaluation runs; the new height applies from the next pass.
    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport.set_height(viewport_height);
        tracer(&mut self.sink).resize(&ResizeEvent {
            at: self.host.now(),
            height: viewport_height,
        });
    }

    /// Cancels any pending frame. Used when tearing down host wiring.
    pub fn cancel_pending(&mut self) {
        self.scheduler.cancel(&mut self.host);
    }
}

impl<T, H> Hunter<T, H> {
    /// Returns the entry with the given id, if it is still tracked.
    #[must_use]
    pub fn get(&self, id: TrackedId) -> Option<&Tracked<T>> {
        self.registry.get(id)
    }

    /// Returns the number of tracked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Iterates tracked entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tracked<T>> + '_ {
        self.registry.iter()
    }

    /// Returns the current viewport metrics.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the scheduler's frame slot.
    #[must_use]
    pub fn slot(&self) -> FrameSlot {
        self.scheduler.slot()
    }

    /// Returns the number of evaluation passes run so far.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Installs a trace sink, returning the previous one.
    ///
    /// Events only reach the sink when the `trace` feature is enabled.
    pub fn set_trace_sink(
        &mut self,
        sink: impl TraceSink + 'static,
    ) -> Option<Box<dyn TraceSink>> {
        self.sink.replace(Box::new(sink))
    }

    /// Removes and returns the trace sink.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.sink.take()
    }
}

fn tracer(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink {
        Some(sink) => Tracer::new(&mut **sink),
        None => Tracer::none(),
    }
}

impl<T, H: fmt::Debug> fmt::Debug for Hunter<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hunter")
            .field("registry", &self.registry)
            .field("viewport", &self.viewport)
            .field("scheduler", &self.scheduler)
            .field("host", &self.host)
            .field("traced", &self.sink.is_some())
            .field("passes", &self.passes)
            .finish()
    }
}
