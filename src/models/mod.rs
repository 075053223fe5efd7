//! Data models for FullSlate resources.
//!
//! This module contains the structures exchanged with the FullSlate API:
//!
//! - `Employee`, `Service`: the public catalog
//! - `Opening`, `OpeningsResponse`, `OpeningsQuery`: availability search
//! - `Booking`, `BookingRequest`: fetching and creating appointments
//! - `ClientRecord`, `ClientsQuery`, `ClientInclude`: company client records
//! - `Event`, `EventsQuery`: schedule entries
//! - `Product`, `Voucher`: retail items and gift vouchers
//!
//! Response models are deliberately tolerant: identifiers are required,
//! everything else is optional or defaulted, and fields whose wire shape
//! varies by account are kept as raw JSON values.

pub mod booking;
pub mod client;
pub mod employee;
pub mod event;
pub mod opening;
pub mod product;
pub mod service;
pub mod voucher;

pub use booking::{Booking, BookingRequest};
pub use client::{ClientInclude, ClientRecord, ClientsQuery};
pub use employee::Employee;
pub use event::{Event, EventsQuery};
pub use opening::{Opening, OpeningsQuery, OpeningsResponse, Window};
pub use product::Product;
pub use service::Service;
pub use voucher::Voucher;
