#![allow(warnings)]
//! Sprint Board Frontend Entry Point

mod app;
mod board;
mod commands;
mod components;
mod context;
mod lanes;
mod links;
mod models;
mod status;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
