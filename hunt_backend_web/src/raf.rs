// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` frame host.
//!
//! [`RafHost`] implements [`FrameHost`] on top of the browser's animation
//! frame API. The request and cancel functions are resolved once, at
//! construction, from the global object, trying the unprefixed name first
//! and then the `webkit` and `moz` prefixed variants. When none exists the
//! host reports that it cannot provide frames and the service evaluates
//! synchronously on every scroll.
//!
//! Time is read from `performance.now()` and expressed in microsecond
//! [`HostTime`] ticks.

use alloc::boxed::Box;

use hunt_core::backend::{FrameHost, FrameRequest};
use hunt_core::time::HostTime;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;
}

const REQUEST_NAMES: [&str; 3] = [
    "requestAnimationFrame",
    "webkitRequestAnimationFrame",
    "mozRequestAnimationFrame",
];

const CANCEL_NAMES: [&str; 3] = [
    "cancelAnimationFrame",
    "webkitCancelAnimationFrame",
    "mozCancelAnimationFrame",
];

type FrameClosure = Closure<dyn FnMut(f64)>;

/// A [`FrameHost`] backed by `requestAnimationFrame`.
///
/// The host owns the JS closure handed to every frame request. Install it
/// with [`set_callback`](Self::set_callback) before the first request;
/// until then, requests report that no frame is available.
pub struct RafHost {
    global: JsValue,
    request: Option<Function>,
    cancel: Option<Function>,
    callback: Option<FrameClosure>,
}

impl RafHost {
    /// Resolves the animation frame functions from the global object.
    #[must_use]
    pub fn detect() -> Self {
        let global: JsValue = js_sys::global().into();
        let request = lookup(&global, &REQUEST_NAMES);
        let cancel = lookup(&global, &CANCEL_NAMES);
        Self {
            global,
            request,
            cancel,
            callback: None,
        }
    }

    /// Creates a host that never provides frames.
    #[must_use]
    pub fn without_frames() -> Self {
        Self {
            global: js_sys::global().into(),
            request: None,
            cancel: None,
            callback: None,
        }
    }

    /// Installs the closure invoked on each delivered frame, returning the
    /// previous one.
    pub fn set_callback(
        &mut self,
        callback: impl FnMut(f64) + 'static,
    ) -> Option<Closure<dyn FnMut(f64)>> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(f64)>);
        self.callback.replace(closure)
    }

    /// Returns `true` if an animation frame primitive was found.
    #[must_use]
    pub fn has_frames(&self) -> bool {
        self.request.is_some()
    }
}

fn lookup(global: &JsValue, names: &[&str]) -> Option<Function> {
    names.iter().find_map(|name| {
        Reflect::get(global, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    })
}

impl FrameHost for RafHost {
    fn now(&self) -> HostTime {
        crate::now()
    }

    fn request_frame(&mut self) -> Option<FrameRequest> {
        let request = self.request.as_ref()?;
        let callback = self.callback.as_ref()?;
        let id = request
            .call1(&self.global, callback.as_ref())
            .ok()?
            .as_f64()?;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "animation frame handles are positive 32-bit integers"
        )]
        let id = id as i32;
        Some(FrameRequest(id))
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if let Some(cancel) = &self.cancel {
            // A failed cancel leaves a frame that will be ignored as stale.
            let _ = cancel.call1(&self.global, &JsValue::from(request.0));
        }
    }
}

impl core::fmt::Debug for RafHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafHost")
            .field("has_frames", &self.request.is_some())
            .field("can_cancel", &self.cancel.is_some())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test]
    fn browser_provides_frames() {
        let mut host = RafHost::detect();
        assert!(host.has_frames());
        assert_eq!(host.request_frame(), None, "no callback installed yet");

        host.set_callback(|_| {});
        let request = host.request_frame().unwrap();
        host.cancel_frame(request);
    }

    #[wasm_bindgen_test]
    fn frameless_host_never_schedules() {
        let mut host = RafHost::without_frames();
        host.set_callback(|_| {});
        assert!(!host.has_frames());
        assert_eq!(host.request_frame(), None);
    }

    #[wasm_bindgen_test]
    fn time_advances_in_microseconds() {
        let host = RafHost::without_frames();
        let before = host.now();
        assert!(host.now() >= before);
        assert_eq!(crate::timebase().ticks_to_nanos(1), 1_000);
    }
}
