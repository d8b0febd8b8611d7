//! WASM bindings for htmlgen.
//!
//! Exposes `renderPage()` and the escaping helpers to JavaScript via
//! wasm-bindgen. Pages are described by a plain JS object:
//!
//! ```text
//! { title?, language?, stylesheets?: [], scripts?: [], body?: [], raw? }
//! ```

use htmlgen::{Document, Generator};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// A page description, deserialized from a JS object.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSpec {
    pub title: String,
    pub language: Option<String>,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
    pub body: Vec<String>,
    /// Insert body entries as markup instead of escaping them.
    pub raw: bool,
}

impl PageSpec {
    pub fn build(&self) -> Document {
        let mut doc = Document::with_title(&self.title);
        if let Some(ref language) = self.language {
            doc = doc.with_language(language);
        }
        doc.add_stylesheets(self.stylesheets.iter().map(String::as_str));
        doc.add_scripts(self.scripts.iter().map(String::as_str));
        for text in &self.body {
            if self.raw {
                doc.append_body_raw(text);
            } else {
                doc.append_body(text);
            }
        }
        doc
    }
}

/// Render a page description to an HTML document string.
///
/// Throws a JS error if the argument is not a valid page description.
#[wasm_bindgen(js_name = renderPage)]
pub fn render_page(spec: JsValue) -> Result<String, JsError> {
    let spec: PageSpec = if spec.is_undefined() || spec.is_null() {
        PageSpec::default()
    } else {
        serde_wasm_bindgen::from_value(spec).map_err(|e| JsError::new(&e.to_string()))?
    };
    Ok(spec.build().render())
}

/// Render a page description as a JS array of markup fragments.
#[wasm_bindgen(js_name = renderFragments)]
pub fn render_fragments(spec: JsValue) -> Result<js_sys::Array, JsError> {
    let spec: PageSpec =
        serde_wasm_bindgen::from_value(spec).map_err(|e| JsError::new(&e.to_string()))?;
    let doc = spec.build();
    let fragments = js_sys::Array::new();
    for fragment in doc.fragments() {
        fragments.push(&JsValue::from_str(&fragment));
    }
    Ok(fragments)
}

/// Escape text for element content.
#[wasm_bindgen(js_name = escapeText)]
pub fn escape_text(text: &str) -> String {
    htmlgen::escape_text(text).into_owned()
}

/// Escape text for a double-quoted attribute value.
#[wasm_bindgen(js_name = escapeAttribute)]
pub fn escape_attribute(text: &str) -> String {
    htmlgen::escape_attribute(text).into_owned()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
