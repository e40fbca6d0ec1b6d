//! MindJournal
//!
//! Browser front-end for the MindJournal journaling service, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Sign in and registration
//! - Journal list with weekly AI insights
//! - Entry detail with on-demand AI analysis
//! - New entries with a mood picker and optional voice dictation
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. The session lives in
//! `localStorage` under the `token` and `user` keys, so every open tab sees
//! the same sign-in state; the journal API is reached over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
