// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced frame scheduling for scroll-driven evaluation.
//!
//! The [`DebounceScheduler`] owns a single pending-frame slot and the time of
//! the most recent scroll. See the [`DebounceScheduler`] struct docs for the
//! state machine.

use crate::backend::{FrameHost, FrameRequest};
use crate::time::{Duration, HostTime};

/// The scheduler's single pending-frame slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrameSlot {
    /// No frame is pending.
    #[default]
    Idle,
    /// A frame callback has been requested and not yet delivered.
    Scheduled(FrameRequest),
}

impl FrameSlot {
    /// Returns the pending request, if any.
    #[must_use]
    pub const fn pending(self) -> Option<FrameRequest> {
        match self {
            Self::Idle => None,
            Self::Scheduled(request) => Some(request),
        }
    }
}

/// What a scroll signal did to the frame slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrollOutcome {
    /// The pending frame that was cancelled, if any.
    pub superseded: Option<FrameRequest>,
    /// The newly requested frame. `None` means the host could not provide a
    /// frame and the caller must evaluate synchronously.
    pub scheduled: Option<FrameRequest>,
}

impl ScrollOutcome {
    /// Returns `true` if evaluation was deferred to a frame.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        self.scheduled.is_some()
    }
}

/// What the scheduler decided when a frame was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameOutcome {
    /// Scrolling has been quiet for the threshold: evaluate now. The slot is
    /// back to idle.
    Settled,
    /// Scrolling is too recent: another frame was requested.
    Deferred,
    /// The frame arrived while nothing was pending and was ignored.
    Stale,
}

/// Single-slot scheduler that coalesces scroll bursts into one evaluation.
///
/// # State machine
///
/// ```text
///            scroll (cancel old, request new)
///   Idle ──────────────────────────────────► Scheduled ◄──┐
///    ▲                                          │          │ frame, elapsed < threshold
///    │          frame, elapsed >= threshold     │          │ (request again)
///    └──────────────────────────────────────────┘──────────┘
/// ```
///
/// - **scroll** cancels any pending frame, records the scroll time and
///   requests a new frame.
/// - **frame** compares the time since the last scroll with the threshold.
///   Once it is reached the slot is cleared and the caller evaluates;
///   otherwise the scheduler requests another frame, polling once per frame
///   until scrolling has been quiet long enough.
///
/// With a zero threshold every delivered frame settles, so a burst of scroll
/// events inside one frame produces exactly one evaluation.
///
/// If the host cannot provide a frame, the slot stays idle and the outcome
/// tells the caller to evaluate synchronously instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebounceScheduler {
    threshold: Duration,
    slot: FrameSlot,
    last_scroll: Option<HostTime>,
}

impl DebounceScheduler {
    /// Creates an idle scheduler with the given debounce threshold.
    #[must_use]
    pub const fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            slot: FrameSlot::Idle,
            last_scroll: None,
        }
    }

    /// Returns the debounce threshold.
    #[must_use]
    pub const fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Returns the current slot state.
    #[must_use]
    pub const fn slot(&self) -> FrameSlot {
        self.slot
    }

    /// Returns the time of the most recent scroll.
    #[must_use]
    pub const fn last_scroll(&self) -> Option<HostTime> {
        self.last_scroll
    }

    /// Returns the time elapsed between the last scroll and `now` (zero if
    /// there has been no scroll yet).
    #[must_use]
    pub fn elapsed(&self, now: HostTime) -> Duration {
        self.last_scroll
            .map_or(Duration::ZERO, |t| now.saturating_duration_since(t))
    }

    /// Handles a scroll signal at time `now`.
    pub fn on_scroll<H: FrameHost + ?Sized>(
        &mut self,
        now: HostTime,
        host: &mut H,
    ) -> ScrollOutcome {
        let superseded = self.slot.pending();
        if let Some(request) = superseded {
            host.cancel_frame(request);
        }
        self.last_scroll = Some(now);

        let scheduled = host.request_frame();
        self.slot = match scheduled {
            Some(request) => FrameSlot::Scheduled(request),
            None => FrameSlot::Idle,
        };
        ScrollOutcome {
            superseded,
            scheduled,
        }
    }

    /// Handles a delivered frame at time `now`.
    ///
    /// A deferral that cannot get a new frame from the host settles
    /// immediately rather than stalling.
    pub fn on_frame<H: FrameHost + ?Sized>(
        &mut self,
        now: HostTime,
        host: &mut H,
    ) -> FrameOutcome {
        if self.slot == FrameSlot::Idle {
            return FrameOutcome::Stale;
        }

        if self.elapsed(now) >= self.threshold {
            self.slot = FrameSlot::Idle;
            return FrameOutcome::Settled;
        }

        match host.request_frame() {
            Some(request) => {
                self.slot = FrameSlot::Scheduled(request);
                FrameOutcome::Deferred
            }
            None => {
                self.slot = FrameSlot::Idle;
                FrameOutcome::Settled
            }
        }
    }

    /// Cancels the pending frame, if any, and returns to idle.
    pub fn cancel<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(request) = self.slot.pending() {
            host.cancel_frame(request);
        }
        self.slot = FrameSlot::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualHost;

    fn ms(n: u64) -> Duration {
        Duration(n * 1_000)
    }

    #[test]
    fn scroll_schedules_a_frame() {
        let mut host = ManualHost::new();
        let mut sched = DebounceScheduler::new(Duration::ZERO);
        assert_eq!(sched.slot(), FrameSlot::Idle);

        let outcome = sched.on_scroll(host.now, &mut host);
        assert!(outcome.is_deferred());
        assert_eq!(outcome.superseded, None);
        assert_eq!(sched.slot(), FrameSlot::Scheduled(FrameRequest(1)));
    }

    #[test]
    fn new_scroll_supersedes_pending_frame() {
        let mut host = ManualHost::new();
        let mut sched = DebounceScheduler::new(Duration::ZERO);
        sched.on_scroll(host.now, &mut host);
        let outcome = sched.on_scroll(host.now, &mut host);

        assert_eq!(outcome.superseded, Some(FrameRequest(1)));
        assert_eq!(outcome.scheduled, Some(FrameRequest(2)));
        assert_eq!(host.cancelled, [FrameRequest(1)]);
    }

    #[test]
    fn zero_threshold_settles_on_first_frame() {
        let mut host = ManualHost::new();
        let mut sched = DebounceScheduler::new(Duration::ZERO);
        sched.on_scroll(host.now, &mut host);
        assert_eq!(sched.on_frame(host.now, &mut host), FrameOutcome::Settled);
        assert_eq!(sched.slot(), FrameSlot::Idle);
    }

    #[test]
    fn frames_poll_until_quiet() {
        let mut host = ManualHost::new();
        let mut sched = DebounceScheduler::new(ms(50));
        sched.on_scroll(host.now, &mut host);

        for _ in 0..3 {
            host.advance(ms(16));
            assert_eq!(sched.on_frame(host.now, &mut host), FrameOutcome::Deferred);
            assert!(matches!(sched.slot(), FrameSlot::Scheduled(_)));
        }
        host.advance(ms(16));
        assert_eq!(sched.elapsed(host.now), ms(64));
        assert_eq!(sched.on_frame(host.now, &mut host), FrameOutcome::Settled);
        assert_eq!(host.requested.len(), 4, "one scroll request plus three polls");
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut host = ManualHost::new();
        let mut sched = DebounceScheduler::new(ms(10));
        sched.on_scroll(host.now, &mut host);
        host.advance(ms(10));
        assert_eq!(sched.on_frame(host.now, &mut host), FrameOutcome::Settled);
    }

    #[test]
    fn frame_while_idle_is_stale() {
        let mut host = ManualHost::new();
        let mut sched = DebounceScheduler::new(Duration::ZERO);
        assert_eq!(sched.on_frame(host.now, &mut host), FrameOutcome::Stale);
    }

    #[test]
    fn host_without_frames_leaves_slot_idle() {
        let mut host = ManualHost::without_frames();
        let mut sched = DebounceScheduler::new(ms(50));
        let outcome = sched.on_scroll(host.now, &mut host);
        assert!(!outcome.is_deferred());
        assert_eq!(sched.slot(), FrameSlot::Idle);
        assert_eq!(sched.last_scroll(), Some(host.now));
    }

    #[test]
    fn losing_frames_mid_chain_settles() {
        let mut host = ManualHost::new();
        let mut sched = DebounceScheduler::new(ms(50));
        sched.on_scroll(host.now, &mut host);
        host.frames_available = false;
        host.advance(ms(1));
        assert_eq!(sched.on_frame(host.now, &mut host), FrameOutcome::Settled);
        assert_eq!(sched.slot(), FrameSlot::Idle);
    }

    #[test]
    fn cancel_clears_pending_frame() {
        let mut host = ManualHost::new();
        let mut sched = DebounceScheduler::new(Duration::ZERO);
        sched.on_scroll(host.now, &mut host);
        sched.cancel(&mut host);
        assert_eq!(sched.slot(), FrameSlot::Idle);
        assert_eq!(host.pending, None);
    }
}
