//! Gourmet Express client library.
//!
//! Headless ordering client: restaurant catalog access, a persistent
//! single-restaurant cart, checkout with backend-or-fallback semantics,
//! and live-or-simulated order tracking. Presentation layers (web, CLI,
//! kiosk) hold an [`state::AppState`] and drive it through its command
//! methods; nothing in this crate renders anything.
//!
//! The backend is optional. Every remote call degrades to local fallback
//! behavior, so the full ordering flow works with no configuration at all.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod fallback;
pub mod gateway;
pub mod state;
pub mod storage;
