//! WASM exports for the shell core
//!
//! This module provides wasm-bindgen exports for the ShellEngine,
//! allowing the React renderer to drive the window manager directly.

use wasm_bindgen::prelude::*;

use crate::config::ShellConfig;
use crate::engine::{Command, ShellEngine};
use crate::error::ShellError;
use crate::input::InputResult;
use crate::math::{Rect, Vec2};
use crate::transition::DockAnchors;

const UNHANDLED_JSON: &str = r#"{"type":"unhandled"}"#;

/// Report a bridge error on the browser console
fn report(context: &str, err: &ShellError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("[zos-shell] {context}: {err}")));
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
}

/// Dock locator backed by a JS function `(windowId) => {x, y, width, height} | null`
struct JsDock {
    locate: js_sys::Function,
}

impl JsDock {
    fn number(value: &JsValue, key: &str) -> Option<f32> {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()?
            .as_f64()
            .map(|n| n as f32)
    }
}

impl DockAnchors for JsDock {
    fn locate(&self, window_id: &str) -> Option<Rect> {
        let value = match self.locate.call1(&JsValue::NULL, &JsValue::from_str(window_id)) {
            Ok(value) => value,
            Err(err) => {
                web_sys::console::warn_2(&JsValue::from_str("[zos-shell] dock lookup failed:"), &err);
                return None;
            }
        };
        if value.is_null() || value.is_undefined() {
            return None;
        }
        Some(Rect::new(
            Self::number(&value, "x")?,
            Self::number(&value, "y")?,
            Self::number(&value, "width")?,
            Self::number(&value, "height")?,
        ))
    }
}

/// Shell controller for WASM - wraps ShellEngine with a JS-friendly API
#[wasm_bindgen]
pub struct ShellController {
    engine: ShellEngine,
}

#[wasm_bindgen]
impl ShellController {
    /// Create a controller; `config_json` may be partial or omitted
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, width: f32, height: f32) -> Self {
        console_error_panic_hook::set_once();

        let config = config_json
            .as_deref()
            .map(ShellConfig::from_json_or_default)
            .unwrap_or_default();
        Self {
            engine: ShellEngine::new(config, width, height),
        }
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Install the dock icon locator used by minimize
    #[wasm_bindgen]
    pub fn set_dock_locator(&mut self, locate: js_sys::Function) {
        self.engine.set_dock(JsDock { locate });
    }

    /// Resize the page
    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.engine.set_viewport(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn open(&mut self, id: &str, title: &str, component_key: &str) {
        let request = crate::window::OpenRequest::new(id, title, component_key);
        self.engine.open(request, now_ms());
    }

    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) -> bool {
        self.engine.close(id, now_ms())
    }

    #[wasm_bindgen]
    pub fn minimize(&mut self, id: &str) -> bool {
        self.engine.minimize(id, now_ms())
    }

    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: &str) -> bool {
        self.engine.toggle_maximize(id)
    }

    #[wasm_bindgen]
    pub fn focus(&mut self, id: &str) -> bool {
        self.engine.focus(id, now_ms())
    }

    #[wasm_bindgen]
    pub fn pointer_down_in_content(&mut self, id: &str) -> bool {
        self.engine.pointer_down_in_content(id, now_ms())
    }

    /// Renderer finished mounting a window
    #[wasm_bindgen]
    pub fn mounted(&mut self, id: &str) -> bool {
        self.engine.mounted(id)
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Header pressed; returns the input result as JSON
    #[wasm_bindgen]
    pub fn begin_drag(&mut self, id: &str, x: f32, y: f32) -> String {
        result_json(&self.engine.begin_drag(id, Vec2::new(x, y)))
    }

    /// Resize handle pressed, `direction` is e.g. `"nw"`
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, id: &str, direction: &str, x: f32, y: f32) -> String {
        match direction.parse() {
            Ok(direction) => result_json(&self.engine.begin_resize(id, direction, Vec2::new(x, y))),
            Err(err) => {
                report("begin_resize", &err);
                UNHANDLED_JSON.to_string()
            }
        }
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        result_json(&self.engine.handle_pointer_move(Vec2::new(x, y)))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        result_json(&self.engine.handle_pointer_up())
    }

    /// Pointer capture lost (e.g. window blur)
    #[wasm_bindgen]
    pub fn cancel(&mut self) -> String {
        result_json(&self.engine.cancel_interaction())
    }

    // =========================================================================
    // Desktops
    // =========================================================================

    #[wasm_bindgen]
    pub fn create_desktop(&mut self, name: &str) -> u32 {
        self.engine.create_desktop(name)
    }

    #[wasm_bindgen]
    pub fn switch_desktop(&mut self, id: u32) -> bool {
        self.engine.switch_desktop(id)
    }

    #[wasm_bindgen]
    pub fn remove_desktop(&mut self, id: u32) -> bool {
        self.engine.remove_desktop(id)
    }

    // =========================================================================
    // Commands, time, and rendering
    // =========================================================================

    /// Apply a JSON-encoded command
    #[wasm_bindgen]
    pub fn dispatch(&mut self, command_json: &str) -> String {
        match Command::from_json(command_json) {
            Ok(command) => result_json(&self.engine.apply(command, now_ms())),
            Err(err) => {
                report("dispatch", &err);
                UNHANDLED_JSON.to_string()
            }
        }
    }

    /// Fire due timers; call once per animation frame
    #[wasm_bindgen]
    pub fn tick(&mut self) -> u32 {
        self.engine.tick(now_ms()).len() as u32
    }

    /// Render snapshot as JSON
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> String {
        match serde_json::to_string(&self.engine.snapshot(now_ms())) {
            Ok(json) => json,
            Err(err) => {
                report("snapshot_json", &ShellError::from(err));
                "{}".to_string()
            }
        }
    }
}
