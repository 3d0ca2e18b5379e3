//! Clubhouse Activity Board
//!
//! Browser frontend for the Clubhouse signup API, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the full activity collection from the API,
//! renders it wholesale, and re-fetches after mutations that change the
//! roster. There is no client-side diffing: the view is a pure function of
//! the last server response.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
