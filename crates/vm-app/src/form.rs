//! Raw form values and the request they produce.

use crate::limits::{InputLimits, InputRange};
use serde::{Deserialize, Serialize};
use vm_engine::{Fluid, FluidKind, RecoveryEstimate, ReservoirInputs};

/// Everything a form holds between interactions.
///
/// Both formation volume factors are kept so switching fluid back and forth
/// does not lose the user's value; only the selected one is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub area_acres: f64,
    pub net_pay_ft: f64,
    pub porosity: f64,
    pub water_saturation: f64,
    pub fluid: FluidKind,
    pub bo: f64,
    pub bg: f64,
    pub estimate_recovery: bool,
    pub recovery_factor: f64,
}

impl Default for FormState {
    /// Every input starts at the bottom of its range.
    fn default() -> Self {
        Self {
            area_acres: InputLimits::AREA_ACRES.min,
            net_pay_ft: InputLimits::NET_PAY_FT.min,
            porosity: InputLimits::POROSITY.min,
            water_saturation: InputLimits::WATER_SATURATION.min,
            fluid: FluidKind::Oil,
            bo: InputLimits::BO.min,
            bg: InputLimits::BG.min,
            estimate_recovery: false,
            recovery_factor: InputLimits::RECOVERY_OIL.min,
        }
    }
}

/// Explicit engine inputs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub inputs: ReservoirInputs,
    pub fluid: Fluid,
    pub recovery: Option<RecoveryEstimate>,
}

impl FormState {
    pub fn recovery_range(&self) -> InputRange {
        InputLimits::recovery_factor(self.fluid)
    }

    /// Switch fluid and pull the recovery factor into the new fluid's range.
    pub fn set_fluid(&mut self, kind: FluidKind) {
        self.fluid = kind;
        self.recovery_factor = self.recovery_range().clamp(self.recovery_factor);
    }

    /// Clamp every field into its range, in place.
    pub fn clamp_all(&mut self) {
        self.area_acres = clamp_logged(InputLimits::AREA_ACRES, self.area_acres, "area_acres");
        self.net_pay_ft = clamp_logged(InputLimits::NET_PAY_FT, self.net_pay_ft, "net_pay_ft");
        self.porosity = clamp_logged(InputLimits::POROSITY, self.porosity, "porosity");
        self.water_saturation = clamp_logged(
            InputLimits::WATER_SATURATION,
            self.water_saturation,
            "water_saturation",
        );
        self.bo = clamp_logged(InputLimits::BO, self.bo, "bo");
        self.bg = clamp_logged(InputLimits::BG, self.bg, "bg");
        self.recovery_factor =
            clamp_logged(self.recovery_range(), self.recovery_factor, "recovery_factor");
    }

    /// Build the request for the engine from clamped values.
    pub fn to_request(&self) -> EvaluationRequest {
        let mut form = self.clone();
        form.clamp_all();

        let fluid = match form.fluid {
            FluidKind::Oil => Fluid::Oil { bo: form.bo },
            FluidKind::Gas => Fluid::Gas { bg: form.bg },
        };
        let recovery = form
            .estimate_recovery
            .then(|| RecoveryEstimate::new(form.recovery_factor));

        EvaluationRequest {
            inputs: ReservoirInputs::new(
                form.area_acres,
                form.net_pay_ft,
                form.porosity,
                form.water_saturation,
            ),
            fluid,
            recovery,
        }
    }
}

fn clamp_logged(range: InputRange, value: f64, field: &'static str) -> f64 {
    let clamped = range.clamp(value);
    if clamped != value {
        tracing::warn!(field, value, clamped, "input outside form range, clamped");
    }
    clamped
}
