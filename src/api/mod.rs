//! REST API client module for the FullSlate scheduling service.
//!
//! This module provides the `FullSlate` client for fetching scheduling
//! data and creating bookings against `{key}.fullslate.com`.
//!
//! The API authenticates with a company token passed as the `auth`
//! query parameter; the booking endpoints are public and never send it.

pub mod client;
pub mod error;

pub use client::{FullSlate, FullSlateBuilder};
pub use error::ApiError;
