// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport metrics and the visibility band.
//!
//! An element is inside the band when its top edge has crossed above the
//! bottom fold (shifted by the element's offset) and the element has not yet
//! scrolled entirely past the top fold:
//!
//! ```text
//!   enter:  top - offset <  height_vp   &&  top >= -(height + offset)
//!   leave:  top - offset >  height_vp   ||  top <  -(height + offset)
//! ```
//!
//! The two predicates are not complements: at exactly
//! `top - offset == height_vp` neither holds, so an element resting on the
//! bottom fold keeps whatever state it had.

use kurbo::Rect;

/// Current viewport metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    height: f64,
}

impl Viewport {
    /// Creates viewport metrics for the given height in CSS pixels.
    #[must_use]
    pub const fn new(height: f64) -> Self {
        Self { height }
    }

    /// Returns the viewport height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Replaces the viewport height.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Returns whether an element with bounding rectangle `rect` and trigger
    /// `offset` satisfies the enter condition.
    #[must_use]
    pub fn admits(&self, rect: Rect, offset: f64) -> bool {
        let top = rect.y0;
        top - offset < self.height && top >= -(rect.height() + offset)
    }

    /// Returns whether an element with bounding rectangle `rect` and trigger
    /// `offset` satisfies the leave condition.
    #[must_use]
    pub fn excludes(&self, rect: Rect, offset: f64) -> bool {
        let top = rect.y0;
        top - offset > self.height || top < -(rect.height() + offset)
    }
}
