//! Entitlement evaluation engine for reservist benefits.
//!
//! The [`entitlements`] module holds the core: a stateless engine that maps a
//! validated service profile to a list of entitlement records, subtotaled by
//! payment timing. The remaining modules carry the host plumbing shared with
//! the API service (configuration, telemetry, error surface).

pub mod config;
pub mod entitlements;
pub mod error;
pub mod telemetry;
