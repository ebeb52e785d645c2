//! List Commands
//!
//! Frontend bindings for the positional list store.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::call;
use crate::models::{Item, MutationResult};
use crate::remote::StoreError;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ElementArgs<'a> {
    idx: usize,
    elem: &'a Item,
}

#[derive(Serialize)]
struct IdxArgs {
    idx: usize,
}

fn encode<T: Serialize>(args: &T) -> Result<JsValue, StoreError> {
    serde_wasm_bindgen::to_value(args).map_err(|e| StoreError::Codec(e.to_string()))
}

// ========================
// Commands
// ========================

pub async fn list_all() -> Result<Vec<Item>, StoreError> {
    call("list_all", JsValue::NULL).await
}

pub async fn add_element_at(idx: usize, elem: &Item) -> Result<MutationResult, StoreError> {
    call("add_element_at", encode(&ElementArgs { idx, elem })?).await
}

pub async fn update_element_at(idx: usize, elem: &Item) -> Result<MutationResult, StoreError> {
    call("update_element_at", encode(&ElementArgs { idx, elem })?).await
}

pub async fn remove_element_at(idx: usize) -> Result<MutationResult, StoreError> {
    call("remove_element_at", encode(&IdxArgs { idx })?).await
}
