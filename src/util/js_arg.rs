//! Stringification of arguments passed to the exported page API.
//!
//! The exported functions accept any JS value, like the page script they
//! replace. Text arguments go through JS `String(value)` semantics; the
//! browser side classifies the `JsValue` and this module renders it.

#[cfg(test)]
#[path = "js_arg_test.rs"]
mod js_arg_test;

/// Host-side view of a JS argument.
#[derive(Clone, Debug, PartialEq)]
pub enum JsArg {
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    /// Objects, symbols and the like, with their `toString()` result if any.
    Other(Option<String>),
}

impl JsArg {
    /// Render like JS `String(value)`.
    pub fn to_text(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Number(n) => number_text(*n),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_owned(),
            Self::Undefined => "undefined".to_owned(),
            Self::Other(text) => text.clone().unwrap_or_else(|| "[object Object]".to_owned()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// JS number formatting for the common cases: integral values print
/// without a fraction, `-0` prints as `0`.
pub fn number_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    if n.fract() == 0.0 && n.abs() < 1e21 {
        return format!("{n:.0}");
    }
    n.to_string()
}

#[cfg(feature = "hydrate")]
impl From<&wasm_bindgen::JsValue> for JsArg {
    fn from(value: &wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        if let Some(s) = value.as_string() {
            return Self::Str(s);
        }
        if let Some(n) = value.as_f64() {
            return Self::Number(n);
        }
        if let Some(b) = value.as_bool() {
            return Self::Bool(b);
        }
        if value.is_null() {
            return Self::Null;
        }
        if value.is_undefined() {
            return Self::Undefined;
        }
        Self::Other(value.dyn_ref::<js_sys::Object>().and_then(|obj| obj.to_string().as_string()))
    }
}
