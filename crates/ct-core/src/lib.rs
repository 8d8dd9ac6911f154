//! ct-core: shared foundation for capflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CtError, CtResult};
pub use numeric::*;
pub use units::*;
