//! Client library for the [FullSlate](https://www.fullslate.com) scheduling
//! service.
//!
//! FullSlate hosts one scheduling site per company at `{key}.fullslate.com`.
//! This crate wraps that site's `/api/` endpoints: employees, services,
//! openings and bookings, plus the token-protected company resources
//! (clients, events, products and vouchers).
//!
//! Public resources need only the company key:
//!
//! ```no_run
//! use fullslate::FullSlate;
//!
//! # async fn run() -> fullslate::Result<()> {
//! let api = FullSlate::new("acme")?;
//!
//! for employee in api.employees().await? {
//!     println!("{} {}", employee.id, employee.full_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The company resources also need the API token from the FullSlate
//! dashboard:
//!
//! ```no_run
//! use fullslate::models::ClientsQuery;
//! use fullslate::FullSlate;
//!
//! # async fn run() -> fullslate::Result<()> {
//! let api = FullSlate::with_token("acme", "token-from-dashboard")?;
//! let clients = api.clients(&ClientsQuery::default().include_all()).await?;
//! println!("{} client records", clients.len());
//! # Ok(())
//! # }
//! ```
//!
//! Application errors the service reports through its `failure` flag
//! surface as [`ApiError::Failure`] with the server's own message.

pub mod api;
pub mod models;

pub use api::{ApiError, FullSlate, FullSlateBuilder};

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, ApiError>;
