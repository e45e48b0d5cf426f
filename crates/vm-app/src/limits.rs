//! Form ranges for every input.
//!
//! These are the only input checks in the system: values are clamped into
//! range before they reach the engine, never rejected.

use serde::{Deserialize, Serialize};
use vm_engine::FluidKind;

/// Closed interval plus the slider increment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into `[min, max]`. NaN falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn as_inclusive(&self) -> std::ops::RangeInclusive<f64> {
        self.min..=self.max
    }
}

/// All form ranges.
pub struct InputLimits;

impl InputLimits {
    pub const AREA_ACRES: InputRange = InputRange::new(10.0, 10_000.0, 10.0);
    pub const NET_PAY_FT: InputRange = InputRange::new(5.0, 300.0, 1.0);
    pub const POROSITY: InputRange = InputRange::new(0.0, 0.6, 0.01);
    pub const WATER_SATURATION: InputRange = InputRange::new(0.0, 1.0, 0.01);
    pub const BO: InputRange = InputRange::new(1.0, 2.0, 0.01);
    pub const BG: InputRange = InputRange::new(0.001, 0.01, 0.0001);
    pub const RECOVERY_OIL: InputRange = InputRange::new(0.05, 0.6, 0.01);
    pub const RECOVERY_GAS: InputRange = InputRange::new(0.3, 0.95, 0.01);

    pub fn formation_volume_factor(kind: FluidKind) -> InputRange {
        match kind {
            FluidKind::Oil => Self::BO,
            FluidKind::Gas => Self::BG,
        }
    }

    pub fn recovery_factor(kind: FluidKind) -> InputRange {
        match kind {
            FluidKind::Oil => Self::RECOVERY_OIL,
            FluidKind::Gas => Self::RECOVERY_GAS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_into_range() {
        let r = InputLimits::AREA_ACRES;
        assert_eq!(r.clamp(5.0), 10.0);
        assert_eq!(r.clamp(20_000.0), 10_000.0);
        assert_eq!(r.clamp(640.0), 640.0);
        assert_eq!(r.clamp(f64::NAN), 10.0);
    }

    #[test]
    fn fvf_ranges_exclude_zero() {
        for kind in FluidKind::ALL {
            assert!(InputLimits::formation_volume_factor(kind).min > 0.0);
        }
    }

    #[test]
    fn recovery_ranges_per_fluid() {
        assert_eq!(InputLimits::recovery_factor(FluidKind::Oil).max, 0.6);
        assert_eq!(InputLimits::recovery_factor(FluidKind::Gas).min, 0.3);
        assert!(InputLimits::RECOVERY_GAS.contains(0.95));
        assert!(!InputLimits::RECOVERY_OIL.contains(0.95));
    }
}
