//! timepred Test Harness - Fixtures and law sweeps
//!
//! This crate provides:
//! - Canonical event/interval fixtures
//! - Seeded random interval generation
//! - Law sweeps over generated data
//! - Tracing setup for tests

pub mod fixture;
pub mod generator;
pub mod logging;
pub mod sweep;

pub use fixture::*;
pub use generator::*;
pub use logging::*;
pub use sweep::*;
