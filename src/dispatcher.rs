//! Action Dispatchers
//!
//! Sinks for the actions produced by item cards.

use wasm_bindgen::prelude::*;

use crate::actions::RetroAction;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "RetroBoard"], js_name = dispatch, catch)]
    fn js_dispatch(action: JsValue) -> Result<(), JsValue>;
}

/// Accepts an action and routes it to application state
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, action: RetroAction);
}

/// Hands actions to the page's `window.RetroBoard.dispatch`
#[derive(Clone, Copy, Default)]
pub struct JsDispatcher;

impl JsDispatcher {
    fn try_dispatch(&self, action: &RetroAction) -> Result<(), String> {
        let js_action = serde_wasm_bindgen::to_value(action)
            .map_err(|e| format!("Serialization error: {}", e))?;
        js_dispatch(js_action).map_err(|e| format!("Dispatch error: {:?}", e))
    }
}

impl Dispatcher for JsDispatcher {
    fn dispatch(&self, action: RetroAction) {
        log::debug!("[DISPATCH] {} retro={}", action.kind(), action.retro_id());
        if let Err(e) = self.try_dispatch(&action) {
            log::error!("[DISPATCH] {} failed: {}", action.kind(), e);
        }
    }
}
