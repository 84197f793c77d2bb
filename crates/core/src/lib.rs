//! Vendor Portal Core - Shared types library.
//!
//! Common types used across the portal components:
//! - `portal` - Vendor-facing web server
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, vendor statuses,
//!   and commission rates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
