//! timepred Core - Events, intervals and their temporal relations
//!
//! This crate defines:
//! - [`Timestamp`]: the nanosecond instant every comparison is made on
//! - [`Location`]: a 3-D point with heading carried by each event
//! - [`Event`]: an instant paired with a location, with the point relations
//!   `after`, `before` and `meets`
//! - [`EventInterval`]: a closed `[start, end]` span between two events, with
//!   the interval relations `after`, `before`, `meets`, `overlaps`, `starts`,
//!   `finishes` and `during`
//! - Relation catalogues, algebra laws and the interval construction policy
//!
//! Every type is an immutable `Copy` value and every relation is a pure
//! function of its two operands, so values can be shared freely across threads.

pub mod config;
pub mod error;
pub mod event;
pub mod interval;
pub mod laws;
pub mod location;
pub mod relation;
pub mod time;

pub use config::*;
pub use error::*;
pub use event::*;
pub use interval::*;
pub use location::*;
pub use relation::*;
pub use time::*;
