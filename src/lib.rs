//! Terminal client for a URL-shortening service.
//!
//! A single form: type a long URL, submit, and get the shortened link back
//! from `POST /api/v1/shorten`.

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod link;
pub mod logging;
pub mod submission;
pub mod ui;
