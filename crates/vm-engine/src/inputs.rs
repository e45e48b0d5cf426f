//! Reservoir input groups.

use serde::{Deserialize, Serialize};
use vm_core::units::{Area, Length, Ratio, to_acres, to_fraction, to_ft};

/// Rock and saturation inputs shared by both fluids.
///
/// Porosity and water saturation are fractions in [0, 1], not percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReservoirInputs {
    pub area_acres: f64,
    pub net_pay_ft: f64,
    pub porosity: f64,
    pub water_saturation: f64,
}

impl ReservoirInputs {
    pub fn new(area_acres: f64, net_pay_ft: f64, porosity: f64, water_saturation: f64) -> Self {
        Self {
            area_acres,
            net_pay_ft,
            porosity,
            water_saturation,
        }
    }

    /// Build from typed quantities, converting to acres and feet.
    pub fn from_quantities(
        area: Area,
        net_pay: Length,
        porosity: Ratio,
        water_saturation: Ratio,
    ) -> Self {
        Self::new(
            to_acres(area),
            to_ft(net_pay),
            to_fraction(porosity),
            to_fraction(water_saturation),
        )
    }

    /// Hydrocarbon saturation, 1 - Sw.
    pub fn hydrocarbon_saturation(&self) -> f64 {
        1.0 - self.water_saturation
    }
}

/// Optional recovery estimate. The factor is a fraction in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryEstimate {
    pub recovery_factor: f64,
}

impl RecoveryEstimate {
    pub fn new(recovery_factor: f64) -> Self {
        Self { recovery_factor }
    }
}
