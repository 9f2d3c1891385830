// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The JS-facing `WebHunter` class.
//!
//! A [`WebHunter`] owns a [`Hunter`] over [`DomTarget`]s and a [`RafHost`],
//! and routes the window's `scroll` and `resize` events to it. All entry
//! points go through [`Shared::run`], which takes the service borrow and,
//! once the borrow is released, applies registrations that arrived while it
//! was held (for example from inside an `in`/`out` callback).

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};

use hunt_core::Hunter;
use hunt_core::config::{HuntConfig, Settings, Targets};
use js_sys::Reflect;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use crate::options::{parse_config, parse_targets, type_error};
use crate::raf::RafHost;
use crate::target::DomTarget;

type Listener = Closure<dyn FnMut(Event)>;

type Registration = (Targets<DomTarget>, HuntConfig<DomTarget>);

struct Shared {
    hunter: RefCell<Hunter<DomTarget, RafHost>>,
    queue: RefCell<VecDeque<Registration>>,
    tracked: Cell<usize>,
}

impl Shared {
    /// Runs `f` against the service, then drains queued registrations.
    ///
    /// If the service is already borrowed the call is a reentrant one from
    /// inside a callback, and `f` is skipped.
    fn run(&self, f: impl FnOnce(&mut Hunter<DomTarget, RafHost>)) {
        let Ok(mut hunter) = self.hunter.try_borrow_mut() else {
            return;
        };
        f(&mut hunter);
        self.tracked.set(hunter.len());
        drop(hunter);
        self.drain();
    }

    fn drain(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some((targets, config)) = next else {
                break;
            };
            let Ok(mut hunter) = self.hunter.try_borrow_mut() else {
                // Still borrowed further up the stack; that caller drains.
                self.queue.borrow_mut().push_front((targets, config));
                break;
            };
            // Validated before queueing.
            let registered = hunter.register(targets, &config);
            debug_assert!(registered.is_ok(), "queued config failed validation");
            self.tracked.set(hunter.len());
        }
    }

    fn register(&self, targets: Targets<DomTarget>, config: HuntConfig<DomTarget>) {
        if self.hunter.try_borrow_mut().is_err() {
            self.queue.borrow_mut().push_back((targets, config));
            return;
        }
        self.run(|hunter| {
            // `parse_config` already validated.
            let registered = hunter.register(targets, &config);
            debug_assert!(registered.is_ok(), "config failed validation");
        });
    }
}

/// Tracks DOM elements and calls back as they scroll into and out of view.
///
/// Constructing one installs `scroll` and `resize` listeners on `window`;
/// calling `free()` removes them and cancels the pending frame.
#[wasm_bindgen]
pub struct WebHunter {
    shared: Rc<Shared>,
    window: Window,
    on_scroll: Listener,
    on_resize: Listener,
}

#[wasm_bindgen]
impl WebHunter {
    /// Creates a hunter bound to the current window.
    ///
    /// The debounce threshold is read once from `window.hunt.debounce`
    /// (milliseconds), defaulting to zero.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebHunter, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("hunt: no window"))?;
        let hunter = Hunter::new(RafHost::detect(), read_settings(&window), inner_height(&window));
        let shared = Rc::new(Shared {
            hunter: RefCell::new(hunter),
            queue: RefCell::new(VecDeque::new()),
            tracked: Cell::new(0),
        });

        let weak = Rc::downgrade(&shared);
        shared
            .hunter
            .borrow_mut()
            .host_mut()
            .set_callback(move |_timestamp_ms: f64| {
                with_shared(&weak, |shared| {
                    shared.run(|hunter| {
                        hunter.frame();
                    });
                });
            });

        let weak = Rc::downgrade(&shared);
        let on_scroll = Closure::wrap(Box::new(move |_event: Event| {
            with_shared(&weak, |shared| {
                shared.run(|hunter| {
                    hunter.scroll();
                });
            });
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;

        let weak = Rc::downgrade(&shared);
        let resize_window = window.clone();
        let on_resize = Closure::wrap(Box::new(move |_event: Event| {
            let height = inner_height(&resize_window);
            with_shared(&weak, |shared| shared.run(|hunter| hunter.resize(height)));
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        Ok(Self {
            shared,
            window,
            on_scroll,
            on_resize,
        })
    }

    /// Starts tracking `elements` (an element, `NodeList`, `HTMLCollection`
    /// or array of elements) with the given options object.
    ///
    /// Elements already in view fire `in` before this returns. When called
    /// from inside an `in`/`out` callback, the registration is applied right
    /// after the running pass finishes.
    ///
    /// # Errors
    ///
    /// Throws a `TypeError` when `elements` is not an element or a collection
    /// of elements, when `options` is not an object (or `null`), or when a
    /// recognized option has the wrong type.
    pub fn hunt(&self, elements: &JsValue, options: &JsValue) -> Result<(), JsValue> {
        let targets = parse_targets(elements).map_err(type_error)?;
        let config = parse_config(options).map_err(type_error)?;
        self.shared.register(targets, config);
        Ok(())
    }

    /// Runs one evaluation pass now. Does nothing when called from inside a
    /// callback.
    pub fn evaluate(&self) {
        self.shared.run(|hunter| {
            hunter.evaluate();
        });
    }

    /// Number of tracked elements as of the last completed operation.
    #[wasm_bindgen(getter)]
    pub fn tracked(&self) -> usize {
        self.shared.tracked.get()
    }
}

impl Drop for WebHunter {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        if let Ok(mut hunter) = self.shared.hunter.try_borrow_mut() {
            hunter.cancel_pending();
        }
    }
}

impl core::fmt::Debug for WebHunter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebHunter")
            .field("tracked", &self.shared.tracked.get())
            .field("queued", &self.shared.queue.borrow().len())
            .finish_non_exhaustive()
    }
}

fn with_shared(weak: &Weak<Shared>, f: impl FnOnce(&Shared)) {
    if let Some(shared) = weak.upgrade() {
        f(&shared);
    }
}

fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

fn read_settings(window: &Window) -> Settings {
    let debounce = Reflect::get(window, &JsValue::from_str("hunt"))
        .ok()
        .filter(JsValue::is_object)
        .and_then(|hunt| Reflect::get(&hunt, &JsValue::from_str("debounce")).ok())
        .and_then(|ms| ms.as_f64())
        .unwrap_or(0.0);
    crate::settings_from_millis(debounce)
}
