//! vm-engine: reservoir volumetrics.
//!
//! Converts basic reservoir parameters into pore volume, hydrocarbon pore
//! volume, original oil/gas in place and an optional recoverable split.
//!
//! Every operation is a pure function of its arguments. The only runtime
//! check is the formation-volume-factor divisor, which must be positive.
//!
//! # Example
//!
//! ```
//! use vm_engine::{Fluid, ReservoirInputs, RecoveryEstimate, evaluate};
//!
//! let inputs = ReservoirInputs::new(1000.0, 50.0, 0.2, 0.3);
//! let result = evaluate(&inputs, Fluid::Oil { bo: 1.2 }, Some(RecoveryEstimate::new(0.25))).unwrap();
//! assert!((result.in_place_volume - 45_255.0).abs() < 1e-6);
//! ```

pub mod error;
pub mod fluid;
pub mod inputs;
pub mod result;
pub mod volumetrics;

pub use error::{EngineError, EngineResult};
pub use fluid::{Fluid, FluidKind, VolumeUnit};
pub use inputs::{RecoveryEstimate, ReservoirInputs};
pub use result::{GasResult, OilResult, RecoverySplit, VolumetricResult};
pub use volumetrics::{compute_gas, compute_oil, compute_pore_volume, compute_recovery, evaluate};
