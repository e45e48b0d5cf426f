//! Volumetrics errors.

use crate::fluid::FluidKind;
use thiserror::Error;
use vm_core::VmError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while evaluating volumetrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Bo or Bg at or below zero; the in-place division would be undefined.
    #[error("Non-positive formation volume factor for {fluid}: {value}")]
    NonPositiveFormationVolumeFactor { fluid: FluidKind, value: f64 },

    /// NaN or infinity in an input or intermediate.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<EngineError> for VmError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NonPositiveFormationVolumeFactor { .. } => VmError::InvalidArg {
                what: "formation volume factor must be positive",
            },
            EngineError::NonFinite { what, value } => VmError::NonFinite { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::NonPositiveFormationVolumeFactor {
            fluid: FluidKind::Oil,
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("formation volume factor"));
        assert!(msg.contains("Oil"));
    }

    #[test]
    fn error_to_vm_error() {
        let err = EngineError::NonPositiveFormationVolumeFactor {
            fluid: FluidKind::Gas,
            value: -0.1,
        };
        let vm: VmError = err.into();
        assert!(matches!(vm, VmError::InvalidArg { .. }));
    }
}
