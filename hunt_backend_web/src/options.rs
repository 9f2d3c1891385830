// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of JS arguments into core registration types.
//!
//! Shapes are checked dynamically here since JS callers can pass anything.
//! Every rejection is a [`HuntError::InvalidArgument`], surfaced to JS as a
//! `TypeError` by [`type_error`].

use alloc::string::ToString as _;
use alloc::vec::Vec;

use hunt_core::HuntError;
use hunt_core::config::{HuntConfig, Targets};
use hunt_core::tracked::Tracked;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, console};

use crate::target::DomTarget;

const BAD_ELEMENTS: &str = "expected an element or a collection of elements";
const BAD_OPTIONS: &str = "options must be an object";
const BAD_OFFSET: &str = "offset must be a finite number";
const BAD_IN: &str = "in must be a function";
const BAD_OUT: &str = "out must be a function";

/// Reads the `elements` argument: a single element or an array-like
/// (`NodeList`, `HTMLCollection`, array) whose items are all elements.
pub(crate) fn parse_targets(value: &JsValue) -> Result<Targets<DomTarget>, HuntError> {
    if let Some(element) = value.dyn_ref::<Element>() {
        return Ok(Targets::Single(DomTarget::new(element.clone())));
    }
    if !value.is_object() {
        return Err(HuntError::InvalidArgument(BAD_ELEMENTS));
    }

    let len = array_like_len(value).ok_or(HuntError::InvalidArgument(BAD_ELEMENTS))?;
    let mut targets = Vec::new();
    for idx in 0..len {
        let element = Reflect::get_u32(value, idx)
            .ok()
            .and_then(|item| item.dyn_into::<Element>().ok())
            .ok_or(HuntError::InvalidArgument(BAD_ELEMENTS))?;
        targets.push(DomTarget::new(element));
    }
    Ok(Targets::Many(targets))
}

fn array_like_len(value: &JsValue) -> Option<u32> {
    let len = Reflect::get(value, &JsValue::from_str("length"))
        .ok()?
        .as_f64()?;
    if !(0.0..=f64::from(u32::MAX)).contains(&len) || len.fract() != 0.0 {
        return None;
    }
    #[expect(clippy::cast_possible_truncation, reason = "range-checked above")]
    let len = len as u32;
    Some(len)
}

/// Reads the `options` argument.
///
/// `null` means all defaults. Recognized keys are `offset`, `persist`, `in`
/// and `out`; a key whose value is `undefined` is treated as absent. Any
/// other own key is ignored with a console warning.
pub(crate) fn parse_config(options: &JsValue) -> Result<HuntConfig<DomTarget>, HuntError> {
    let mut config = HuntConfig::new();
    if options.is_null() {
        return Ok(config);
    }
    if !options.is_object() {
        return Err(HuntError::InvalidArgument(BAD_OPTIONS));
    }

    for key in Object::keys(options.unchecked_ref::<Object>()).iter() {
        let Some(name) = key.as_string() else {
            continue;
        };
        let value =
            Reflect::get(options, &key).map_err(|_| HuntError::InvalidArgument(BAD_OPTIONS))?;
        if value.is_undefined() {
            continue;
        }
        config = match name.as_str() {
            "offset" => match value.as_f64() {
                Some(offset) => config.offset(offset),
                None => return Err(HuntError::InvalidArgument(BAD_OFFSET)),
            },
            "persist" => config.persist(value.is_truthy()),
            "in" => config.on_enter(js_callback(value, BAD_IN)?),
            "out" => config.on_leave(js_callback(value, BAD_OUT)?),
            _ => {
                console::warn_2(&JsValue::from_str("hunt: ignoring unknown option"), &key);
                config
            }
        };
    }

    config.validate()?;
    Ok(config)
}

/// Wraps a JS function as an entry callback. The function is called with the
/// element as `this` and no arguments; an exception it throws is logged and
/// does not interrupt the evaluation pass.
fn js_callback(
    value: JsValue,
    what: &'static str,
) -> Result<impl Fn(&Tracked<DomTarget>) + 'static, HuntError> {
    let func = value
        .dyn_into::<Function>()
        .map_err(|_| HuntError::InvalidArgument(what))?;
    Ok(move |entry: &Tracked<DomTarget>| {
        if let Err(err) = func.call0(entry.target().element()) {
            console::error_2(&JsValue::from_str("hunt: callback threw"), &err);
        }
    })
}

/// Converts a core error into a JS `TypeError`.
pub(crate) fn type_error(err: HuntError) -> JsValue {
    js_sys::TypeError::new(&err.to_string()).into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use js_sys::Array;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    fn element() -> Element {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("div")
            .unwrap()
    }

    fn options(entries: &[(&str, JsValue)]) -> JsValue {
        let obj = Object::new();
        for (key, value) in entries {
            Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
        }
        obj.into()
    }

    #[wasm_bindgen_test]
    fn single_element_is_one_target() {
        let targets = parse_targets(&element().into()).unwrap();
        assert!(matches!(targets, Targets::Single(_)));
    }

    #[wasm_bindgen_test]
    fn array_of_elements_keeps_order() {
        let (a, b) = (element(), element());
        a.set_id("a");
        b.set_id("b");
        let targets = parse_targets(&Array::of2(&a, &b).into()).unwrap();
        let ids: Vec<_> = targets
            .into_vec()
            .into_iter()
            .map(|t| t.element().id())
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[wasm_bindgen_test]
    fn non_elements_are_rejected() {
        assert!(parse_targets(&JsValue::NULL).is_err());
        assert!(parse_targets(&JsValue::UNDEFINED).is_err());
        assert!(parse_targets(&JsValue::from_str("div")).is_err());
        assert!(parse_targets(&Object::new().into()).is_err());
        let mixed = Array::of2(&element(), &JsValue::from(3));
        assert!(parse_targets(&mixed.into()).is_err());
    }

    #[wasm_bindgen_test]
    fn empty_array_is_an_empty_collection() {
        let targets = parse_targets(&Array::new().into()).unwrap();
        assert!(targets.is_empty());
    }

    #[wasm_bindgen_test]
    fn null_options_mean_defaults() {
        let config = parse_config(&JsValue::NULL).unwrap();
        assert_eq!(config.offset, 0.0);
        assert!(!config.persist);
    }

    #[wasm_bindgen_test]
    fn non_object_options_are_rejected() {
        let err = parse_config(&JsValue::from_str("not-an-object")).unwrap_err();
        assert_eq!(err, HuntError::InvalidArgument(BAD_OPTIONS));
        assert!(parse_config(&JsValue::from(5)).is_err());
    }

    #[wasm_bindgen_test]
    fn recognized_options_are_applied() {
        let config = parse_config(&options(&[
            ("offset", JsValue::from(50)),
            ("persist", JsValue::from(1)),
            ("in", Function::new_no_args("").into()),
            ("out", JsValue::UNDEFINED),
        ]))
        .unwrap();
        assert_eq!(config.offset, 50.0);
        assert!(config.persist);
    }

    #[wasm_bindgen_test]
    fn bad_option_values_are_rejected() {
        let cases = [
            ("offset", JsValue::from(f64::NAN), BAD_OFFSET),
            ("offset", JsValue::from(f64::INFINITY), BAD_OFFSET),
            ("offset", JsValue::from_str("50"), BAD_OFFSET),
            ("in", JsValue::from(3), BAD_IN),
            ("out", JsValue::from_str("leave"), BAD_OUT),
        ];
        for (key, value, message) in cases {
            let err = parse_config(&options(&[(key, value)])).unwrap_err();
            assert_eq!(err, HuntError::InvalidArgument(message), "{key}");
        }
    }

    #[wasm_bindgen_test]
    fn unknown_options_are_ignored() {
        let config = parse_config(&options(&[("speed", JsValue::from(9))])).unwrap();
        assert_eq!(config.offset, 0.0);
    }

    #[wasm_bindgen_test]
    fn errors_surface_as_type_errors() {
        let err = type_error(HuntError::InvalidArgument(BAD_ELEMENTS));
        assert!(err.is_instance_of::<js_sys::TypeError>());
    }
}
