//! Retro Board Frontend Entry Point

mod actions;
mod app;
mod card;
mod components;
mod context;
mod dispatcher;
mod models;
mod scroll;
mod store;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let log_handle = match console_logger::init(LoggerConfig::default()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] logger init failed: {}", e).into());
            None
        }
    };
    mount_to_body(move || view! { <App log_handle=log_handle /> });
}
