//! Core of the trip booking wizard: booking state, its transitions,
//! step gating, and per-day pricing over read-only reference data.

pub mod booking;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod pricing;
pub mod reference;
pub mod session;
pub mod store;
pub mod summary;
pub mod types;
pub mod wizard;
