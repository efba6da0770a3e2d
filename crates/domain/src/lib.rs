//! # gasscale-domain
//!
//! Pure domain model for the gas-bottle scale.
//!
//! ## Responsibilities
//! - Error conventions shared by every layer
//! - **Calibration**: empty/full reference weights of a bottle and the
//!   presence-validated write request
//! - **Levels**: per-scale fill readings and their derivation from a single
//!   weight measurement
//! - **Diagnostics**: the read-only health snapshot of the monitoring device
//! - **Scale selection** for per-scale requests
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod scale;

pub mod calibration;
pub mod diagnostics;
pub mod level;
