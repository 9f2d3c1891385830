// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles for the host contract.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::Rect;

use crate::backend::{FrameHost, FrameRequest, Target};
use crate::time::{Duration, HostTime};

/// A target whose position can be moved from the test. Clones share state.
#[derive(Clone, Debug)]
pub(crate) struct FakeTarget {
    top: Rc<Cell<f64>>,
    height: f64,
    reads: Rc<Cell<u32>>,
}

impl FakeTarget {
    pub(crate) fn new(top: f64, height: f64) -> Self {
        Self {
            top: Rc::new(Cell::new(top)),
            height,
            reads: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn move_to(&self, top: f64) {
        self.top.set(top);
    }

    /// Number of geometry reads so far.
    pub(crate) fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl Target for FakeTarget {
    fn bounding_rect(&self) -> Rect {
        self.reads.set(self.reads.get() + 1);
        let top = self.top.get();
        Rect::new(0.0, top, 100.0, top + self.height)
    }
}

/// A host with a hand-driven clock and a log of frame requests.
#[derive(Debug, Default)]
pub(crate) struct ManualHost {
    pub(crate) now: HostTime,
    pub(crate) frames_available: bool,
    pub(crate) next_request: i32,
    pub(crate) pending: Option<FrameRequest>,
    pub(crate) requested: Vec<FrameRequest>,
    pub(crate) cancelled: Vec<FrameRequest>,
}

impl ManualHost {
    pub(crate) fn new() -> Self {
        Self {
            frames_available: true,
            next_request: 1,
            ..Self::default()
        }
    }

    /// A host with no frame primitive.
    pub(crate) fn without_frames() -> Self {
        Self {
            frames_available: false,
            ..Self::new()
        }
    }

    pub(crate) fn advance(&mut self, by: Duration) {
        self.now = self.now + by;
    }
}

impl FrameHost for ManualHost {
    fn now(&self) -> HostTime {
        self.now
    }

    fn request_frame(&mut self) -> Option<FrameRequest> {
        if !self.frames_available {
            return None;
        }
        let request = FrameRequest(self.next_request);
        self.next_request += 1;
        self.pending = Some(request);
        self.requested.push(request);
        Some(request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
        self.cancelled.push(request);
    }
}
