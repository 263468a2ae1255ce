//! Resources Browser - Dioxus Web Application
//!
//! A single-screen catalog browser: free-text search, year filter, type and
//! tag checkbox filters, and a sort order over a fixed in-memory catalog.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod catalog;
mod components;
mod pages;
mod query;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    dioxus::launch(app::App);
}
