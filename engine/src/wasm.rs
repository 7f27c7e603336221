//! Browser bindings
//!
//! String-in/string-out methods over a [`Session`], one per keypad
//! control. `equals` computes synchronously; the browser event loop
//! already provides the asynchrony the artificial delay models.

use crate::session::compute_now;
use crate::{Intent, Session, ThemeSet};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmCalculator {
    session: Session,
}

#[wasm_bindgen]
impl WasmCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        WasmCalculator {
            session: Session::new(),
        }
    }

    /// Feed a single key character; returns the expression line.
    ///
    /// `=` is ignored here; hosts call [`equals`](Self::equals) so they
    /// receive the display string back.
    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&mut self, key: char) -> String {
        if let Some(intent) = Intent::from_key(key) {
            if intent != Intent::Equals {
                let _ = self.session.handle(intent);
            }
        }
        self.session.expression_line()
    }

    #[wasm_bindgen(js_name = pressDelete)]
    pub fn press_delete(&mut self) -> String {
        let _ = self.session.handle(Intent::Delete);
        self.session.expression_line()
    }

    #[wasm_bindgen(js_name = pressClear)]
    pub fn press_clear(&mut self) -> String {
        let _ = self.session.handle(Intent::Clear);
        self.session.expression_line()
    }

    /// Evaluate the current expression and return the display string.
    #[wasm_bindgen(js_name = equals)]
    pub fn equals(&mut self) -> String {
        if let Some(request) = self.session.begin_evaluation() {
            let completion = compute_now(&request);
            self.session.apply_completion(completion);
        }
        self.session.display().to_string()
    }

    #[wasm_bindgen(js_name = expressionLine)]
    pub fn expression_line(&self) -> String {
        self.session.expression_line()
    }

    #[wasm_bindgen(js_name = display)]
    pub fn display(&self) -> String {
        self.session.display().to_string()
    }

    /// Pick a theme from a themes document.
    ///
    /// Returns a JSON object of style variables for the host to apply, or
    /// `"null"` when the document is malformed or has no usable entry;
    /// hosts treat that as "keep current styling".
    #[wasm_bindgen(js_name = selectTheme)]
    pub fn select_theme(&self, themes_json: &str) -> String {
        let Ok(set) = ThemeSet::parse(themes_json) else {
            return "null".to_string();
        };
        let Some(theme) = set.select() else {
            return "null".to_string();
        };

        let mut map = serde_json::Map::new();
        for (name, value) in theme.variables() {
            map.insert(
                name.to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
        serde_json::Value::Object(map).to_string()
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}
