// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! Hunt splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Geometry**: A [`Target`] implementation that reports the current
//!   bounding rectangle of a watched element relative to the viewport's top
//!   left corner (e.g. `Element.getBoundingClientRect()`).
//!
//! - **Frames and time**: A [`FrameHost`] implementation that reads the
//!   host's monotonic clock and requests/cancels display-synchronized frame
//!   callbacks (e.g. `requestAnimationFrame`).
//!
//! - **Signal wiring**: Subscribing to the host's scroll and resize
//!   notifications and forwarding them to
//!   [`Hunter::scroll`](crate::hunter::Hunter::scroll),
//!   [`Hunter::resize`](crate::hunter::Hunter::resize), and each delivered
//!   frame to [`Hunter::frame`](crate::hunter::Hunter::frame). This is
//!   backend-specific and not abstracted by a trait because the event
//!   plumbing differs fundamentally across hosts.
//!
//! # Crate boundaries
//!
//! `hunt_core` owns the registry, evaluation, scheduling, and this contract
//! module. Backend crates depend on `hunt_core` and provide platform glue.

use core::fmt;

use kurbo::Rect;

use crate::time::HostTime;

/// Something whose on-screen geometry can be queried.
///
/// Implementations must read the geometry fresh on every call; the evaluator
/// never caches rectangles between passes.
pub trait Target {
    /// Returns the bounding rectangle in viewport coordinates.
    ///
    /// `y0` is the distance of the top edge from the top of the viewport
    /// (negative once the element has scrolled above the fold) and
    /// `height()` is the element's rendered height.
    fn bounding_rect(&self) -> Rect;
}

/// Identifies a pending frame request issued by a [`FrameHost`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequest(pub i32);

impl fmt::Debug for FrameRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameRequest({})", self.0)
    }
}

/// Clock and frame-scheduling primitives of the host.
///
/// A host delivers each requested frame by calling
/// [`Hunter::frame`](crate::hunter::Hunter::frame) once, from the same
/// execution context that owns the `Hunter`.
pub trait FrameHost {
    /// Returns the current monotonic host time.
    fn now(&self) -> HostTime;

    /// Requests a callback on the next display frame.
    ///
    /// Returns `None` when the host has no frame primitive (or the request
    /// failed); callers then fall back to evaluating synchronously.
    fn request_frame(&mut self) -> Option<FrameRequest>;

    /// Cancels a pending frame request. Cancelling a request that already
    /// fired is a no-op.
    fn cancel_frame(&mut self, request: FrameRequest);
}
