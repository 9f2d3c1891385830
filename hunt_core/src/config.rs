// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration and service configuration.
//!
//! [`HuntConfig`] is the per-registration configuration: trigger offset,
//! persistence and the enter/leave callbacks. One configuration may be
//! applied to many targets, so callbacks are shared [`Rc`] closures.
//!
//! [`Settings`] is the service-wide configuration read once when a
//! [`Hunter`](crate::hunter::Hunter) is constructed.
//!
//! [`Targets`] normalizes "one target" and "a collection of targets" into a
//! single ordered sequence.

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::HuntError;
use crate::time::{Duration, Timebase};
use crate::tracked::Tracked;

/// A transition callback. Receives the entry that transitioned.
pub type Callback<T> = Rc<dyn Fn(&Tracked<T>)>;

/// Per-registration configuration.
///
/// | field | default |
/// |---|---|
/// | `offset` | `0.0` |
/// | `persist` | `false` |
/// | `on_enter` | no-op |
/// | `on_leave` | no-op |
pub struct HuntConfig<T> {
    /// Pixel adjustment to the trigger band. Positive values let an element
    /// count as visible `offset` pixels before it reaches the fold.
    pub offset: f64,
    /// Keep tracking after the first enter/leave cycle instead of evicting.
    pub persist: bool,
    /// Invoked when the element enters the band.
    pub on_enter: Callback<T>,
    /// Invoked when the element leaves the band.
    pub on_leave: Callback<T>,
}

impl<T> HuntConfig<T> {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            persist: false,
            on_enter: noop(),
            on_leave: noop(),
        }
    }

    /// Sets the trigger offset.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets whether entries outlive their first enter/leave cycle.
    #[must_use]
    pub fn persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// Sets the enter callback.
    #[must_use]
    pub fn on_enter(mut self, f: impl Fn(&Tracked<T>) + 'static) -> Self {
        self.on_enter = Rc::new(f);
        self
    }

    /// Sets the leave callback.
    #[must_use]
    pub fn on_leave(mut self, f: impl Fn(&Tracked<T>) + 'static) -> Self {
        self.on_leave = Rc::new(f);
        self
    }

    /// Checks the configuration for values the evaluator cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`HuntError::InvalidArgument`] if `offset` is NaN or infinite.
    pub fn validate(&self) -> Result<(), HuntError> {
        if !self.offset.is_finite() {
            return Err(HuntError::InvalidArgument("offset must be a finite number"));
        }
        Ok(())
    }
}

fn noop<T>() -> Callback<T> {
    Rc::new(|_: &Tracked<T>| {})
}

impl<T> Default for HuntConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for HuntConfig<T> {
    fn clone(&self) -> Self {
        Self {
            offset: self.offset,
            persist: self.persist,
            on_enter: Rc::clone(&self.on_enter),
            on_leave: Rc::clone(&self.on_leave),
        }
    }
}

impl<T> fmt::Debug for HuntConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuntConfig")
            .field("offset", &self.offset)
            .field("persist", &self.persist)
            .finish_non_exhaustive()
    }
}

/// Service-wide settings, read once at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// How long scrolling must have been quiet before a frame runs an
    /// evaluation. Zero evaluates on the first frame after a scroll.
    pub debounce: Duration,
}

impl Settings {
    /// Creates settings with a debounce threshold in milliseconds, converted
    /// to ticks of `timebase`.
    #[must_use]
    pub const fn from_millis(debounce_ms: u64, timebase: Timebase) -> Self {
        Self {
            debounce: Duration::from_millis(debounce_ms, timebase),
        }
    }
}

/// One target or an ordered collection of targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Targets<T> {
    /// A single target.
    Single(T),
    /// Several targets, registered in order.
    Many(Vec<T>),
}

impl<T> Targets<T> {
    /// Returns the number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    /// Returns `true` for an empty collection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalizes into an ordered vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Single(t) => vec![t],
            Self::Many(v) => v,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Targets<T> {
    fn from(targets: [T; N]) -> Self {
        Self::Many(targets.into())
    }
}

impl<T> From<Vec<T>> for Targets<T> {
    fn from(targets: Vec<T>) -> Self {
        Self::Many(targets)
    }
}

impl<T> FromIterator<T> for Targets<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}
