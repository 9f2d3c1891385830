// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use super::id::TrackedId;
use crate::config::{Callback, HuntConfig};

/// A registered target together with its configuration and visibility.
pub struct Tracked<T> {
    pub(crate) id: TrackedId,
    pub(crate) target: T,
    pub(crate) offset: f64,
    pub(crate) persist: bool,
    pub(crate) on_enter: Callback<T>,
    pub(crate) on_leave: Callback<T>,
    pub(crate) visible: bool,
}

impl<T> Tracked<T> {
    pub(crate) fn new(id: TrackedId, target: T, config: &HuntConfig<T>) -> Self {
        let config = config.clone();
        Self {
            id,
            target,
            offset: config.offset,
            persist: config.persist,
            on_enter: config.on_enter,
            on_leave: config.on_leave,
            visible: false,
        }
    }

    /// Returns the entry's id.
    #[must_use]
    pub fn id(&self) -> TrackedId {
        self.id
    }

    /// Returns the watched target.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns the trigger offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns whether the entry survives its leave transition.
    #[must_use]
    pub fn persist(&self) -> bool {
        self.persist
    }

    /// Returns whether the enter callback was the last one fired.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("offset", &self.offset)
            .field("persist", &self.persist)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
