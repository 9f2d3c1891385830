// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element geometry.

use hunt_core::backend::Target;
use kurbo::Rect;
use web_sys::Element;

/// A DOM element tracked by a [`Hunter`](hunt_core::Hunter).
///
/// Geometry comes from `getBoundingClientRect()`, which is relative to the
/// viewport, so `y0` is the distance of the element's top edge from the top
/// of the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomTarget(Element);

impl DomTarget {
    /// Wraps an element.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.0
    }

    /// Unwraps the element.
    #[must_use]
    pub fn into_element(self) -> Element {
        self.0
    }
}

impl From<Element> for DomTarget {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl Target for DomTarget {
    fn bounding_rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }
}
