//! Gourmet Express Core - Shared domain types.
//!
//! This crate provides common types used across all Gourmet Express components:
//! - `client` - Headless ordering SDK (gateway, storage, orchestrator)
//! - `cli` - Command-line demo driver over the ordering action surface
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no clocks beyond values callers pass in. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Carts, profiles, restaurants, orders, and tracking state
//! - [`decode`] - Tolerant decoding of loose backend payloads into typed records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod decode;
pub mod types;

pub use types::*;
