#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::i18n;

// Modules
mod components;
mod config;
mod content;
mod error;
mod hooks;
mod routes;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting D-Secure site");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize stores on mount
    use_effect(move || {
        i18n::init_i18n();
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
