//! API Client
//!
//! HTTP calls to the journal backend and the quote service.

pub mod client;

pub use client::*;
