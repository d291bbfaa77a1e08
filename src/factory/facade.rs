//! JS surface: `makeGrid(source)(action)` plus the shared default value.
//!
//! Cells are carried as `serde_json::Value`, so any JSON-representable JS
//! value (numbers, strings, nested objects) round-trips through the grid.
//! Values JSON cannot hold (`undefined`, `NaN`) come back as `null`.

use std::cell::RefCell;

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::domain::Action;
use crate::grid::Grid;

use super::{make_grid_from_json, Applier, GridConfig};

thread_local! {
    // wasm is single-threaded; this is the `grid.defaultValue` JS callers expect
    static DEFAULT_VALUE: RefCell<Value> = RefCell::new(Value::from(0));
}

fn shared_default() -> Value {
    DEFAULT_VALUE.with(|value| value.borrow().clone())
}

fn store_default(value: Value) {
    DEFAULT_VALUE.with(|slot| *slot.borrow_mut() = value);
}

/// `undefined` / `null` count as "nothing passed"
fn js_to_json(value: &JsValue) -> Option<String> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string())
}

fn json_to_js(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap_or(JsValue::UNDEFINED)
}

fn grid_to_js(grid: &Grid<Value>) -> JsValue {
    match grid.to_json() {
        Ok(json) => json_to_js(&json),
        Err(err) => {
            log::warn!("could not encode grid: {}", err);
            js_sys::Array::new().into()
        }
    }
}

/// Decode a JS action. `JSON.stringify` drops `value: undefined`, so a `SET`
/// without a value still sets the cell (to `null`).
fn parse_action(json: &str) -> Option<Action<Value>> {
    let mut value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("ignoring malformed action: {}", err);
            return None;
        }
    };

    if let Value::Object(fields) = &mut value {
        if fields.get("type").and_then(Value::as_str) == Some("SET") {
            fields.entry("value").or_insert(Value::Null);
        }
    }

    match serde_json::from_value(value) {
        Ok(action) => Some(action),
        Err(err) => {
            log::warn!("ignoring malformed action: {}", err);
            None
        }
    }
}

fn build_applier(source: Option<&str>) -> Applier<Value> {
    make_grid_from_json(source, GridConfig::with_default_value(shared_default()))
}

/// One applier call: CLEAR resets to whatever the shared default is right now
fn apply_with_shared_default(applier: &mut Applier<Value>, action: Option<&str>) -> Grid<Value> {
    applier.set_default_value(shared_default());
    applier.apply(action.and_then(parse_action))
}

/// Set the value new grids are filled with and `CLEAR` resets to
#[wasm_bindgen(js_name = setDefaultValue)]
pub fn set_default_value(value: JsValue) {
    let value = js_to_json(&value)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or(Value::Null);
    store_default(value);
}

#[wasm_bindgen(js_name = defaultValue)]
pub fn default_value() -> JsValue {
    json_to_js(&shared_default().to_string())
}

/// Build a grid from `undefined`, `{width, height}` or an array of arrays.
/// Returns the applier function: `applier(action?)` -> fresh array of arrays.
#[wasm_bindgen(js_name = makeGrid)]
pub fn js_make_grid(source: JsValue) -> js_sys::Function {
    let mut applier = GridApplier::new(source);
    Closure::<dyn FnMut(JsValue) -> JsValue>::new(move |action: JsValue| applier.apply(action))
        .into_js_value()
        .unchecked_into()
}

/// Same applier as an object, for callers that also want the dimensions
#[wasm_bindgen]
pub struct GridApplier {
    inner: Applier<Value>,
}

#[wasm_bindgen]
impl GridApplier {
    #[wasm_bindgen(constructor)]
    pub fn new(source: JsValue) -> Self {
        Self {
            inner: build_applier(js_to_json(&source).as_deref()),
        }
    }

    /// Apply an optional `{type, ...}` action and return the grid as a fresh JS array
    pub fn apply(&mut self, action: JsValue) -> JsValue {
        let json = js_to_json(&action);
        let grid = apply_with_shared_default(&mut self.inner, json.as_deref());
        grid_to_js(&grid)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize { self.inner.current().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize { self.inner.current().height() }
}
