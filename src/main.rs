//! To-Do Frontend Entry Point

mod models;
mod commands;
mod remote;
mod controller;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
