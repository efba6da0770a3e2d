//! # gasscale-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `ReadingSource`: where calibration, level and diagnostics data
//!     comes from (random mock, calibrated load cell, …)
//! - Define the **driving** use-case struct:
//!   - `TelemetryService`: validate calibration writes, resolve per-scale
//!     requests, hand everything else through to the source
//!
//! ## Dependency rule
//! Depends on `gasscale-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
