//! vm-core: shared foundation for the volumetrics workspace.
//!
//! Contains:
//! - units (uom imperial constructors + oilfield conversion constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{VmError, VmResult};
pub use numeric::*;
pub use units::*;
