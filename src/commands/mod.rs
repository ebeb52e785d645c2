//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

mod list;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::remote::StoreError;

#[wasm_bindgen]
extern "C" {
    // `catch`: a rejected IPC promise comes back as `Err` instead of throwing
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke `cmd` and decode its answer
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, StoreError> {
    let result = invoke(cmd, args).await.map_err(|e| {
        StoreError::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| StoreError::Codec(e.to_string()))
}

pub use list::*;
