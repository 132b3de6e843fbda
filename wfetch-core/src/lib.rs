//! Core library for the `wfetch` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The OpenWeather HTTP client and its error taxonomy
//!
//! It is used by `wfetch-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;

pub use client::{WeatherClient, request_url};
pub use config::Config;
pub use error::FetchError;
