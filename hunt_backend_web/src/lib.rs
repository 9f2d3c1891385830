// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for hunt.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafHost`]: `requestAnimationFrame` frame host with vendor-prefix
//!   fallback
//! - [`DomTarget`]: DOM element geometry via `getBoundingClientRect()`
//! - [`WebHunter`]: the JS-facing class wiring window `scroll`/`resize`
//!   listeners to a [`Hunter`](hunt_core::Hunter)
//!
//! From JavaScript:
//!
//! ```js
//! const hunter = new WebHunter();
//! hunter.hunt(document.querySelectorAll(".reveal"), {
//!   offset: 50,
//!   in() { this.classList.add("visible"); },
//! });
//! ```

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "the JS bindings only run in the browser")
)]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod hunter;
mod options;
mod raf;
mod target;

pub use hunt_core::backend::{FrameHost, Target};
pub use hunter::WebHunter;
pub use raf::RafHost;
pub use target::DomTarget;

use hunt_core::config::Settings;
use hunt_core::time::{Duration, HostTime, Timebase};

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    HostTime(millis_to_micros(raf::performance_now()))
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}

/// Builds [`Settings`] from a debounce value in (possibly fractional)
/// milliseconds, as found in `window.hunt.debounce`.
///
/// Anything that is not a finite, positive number yields the default
/// threshold of zero.
#[must_use]
pub fn settings_from_millis(debounce_ms: f64) -> Settings {
    if !debounce_ms.is_finite() || debounce_ms <= 0.0 {
        return Settings::default();
    }
    Settings {
        debounce: Duration(millis_to_micros(debounce_ms)),
    }
}

fn millis_to_micros(ms: f64) -> u64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "callers pass small positive millisecond values; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    us
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timebase_is_microsecond() {
        let tb = timebase();
        assert_eq!(tb.ticks_to_nanos(1), 1000);
        assert_eq!(tb.ticks_to_nanos(1_000_000), 1_000_000_000);
    }

    #[test]
    fn debounce_millis_become_microsecond_ticks() {
        assert_eq!(settings_from_millis(50.0).debounce, Duration(50_000));
        assert_eq!(settings_from_millis(0.5).debounce, Duration(500));
    }

    #[test]
    fn unusable_debounce_falls_back_to_zero() {
        for ms in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert_eq!(settings_from_millis(ms), Settings::default(), "{ms}");
        }
    }
}
