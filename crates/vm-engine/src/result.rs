//! Result value groups.

use crate::fluid::{FluidKind, VolumeUnit};
use serde::{Deserialize, Serialize};

/// Oil volumetrics. Reservoir volumes in Mbbl, in-place in MSTB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OilResult {
    pub pore_volume_acre_ft: f64,
    pub pore_volume_mbbl: f64,
    pub hydrocarbon_pore_volume_mbbl: f64,
    pub ooip_mstb: f64,
}

/// Gas volumetrics. Reservoir volumes in MMcf, in-place in MMSCF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasResult {
    pub pore_volume_acre_ft: f64,
    pub pore_volume_mmcf: f64,
    pub hydrocarbon_pore_volume_mmcf: f64,
    pub ogip_mmscf: f64,
}

/// Split of an in-place volume. The two parts always sum to the whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoverySplit {
    pub recoverable: f64,
    pub non_recoverable: f64,
}

impl RecoverySplit {
    pub fn total(&self) -> f64 {
        self.recoverable + self.non_recoverable
    }
}

/// Fluid-independent view of a full evaluation.
///
/// `pore_volume` and `hydrocarbon_pore_volume` are in the fluid's reservoir
/// unit; `in_place_volume` and the recovery split in its surface unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumetricResult {
    pub fluid: FluidKind,
    pub pore_volume_acre_ft: f64,
    pub pore_volume: f64,
    pub hydrocarbon_pore_volume: f64,
    pub in_place_volume: f64,
    pub recovery: Option<RecoverySplit>,
}

impl VolumetricResult {
    pub fn reservoir_unit(&self) -> VolumeUnit {
        self.fluid.reservoir_unit()
    }

    pub fn surface_unit(&self) -> VolumeUnit {
        self.fluid.surface_unit()
    }

    pub fn recoverable(&self) -> Option<f64> {
        self.recovery.map(|r| r.recoverable)
    }

    pub fn non_recoverable(&self) -> Option<f64> {
        self.recovery.map(|r| r.non_recoverable)
    }
}

impl From<OilResult> for VolumetricResult {
    fn from(oil: OilResult) -> Self {
        Self {
            fluid: FluidKind::Oil,
            pore_volume_acre_ft: oil.pore_volume_acre_ft,
            pore_volume: oil.pore_volume_mbbl,
            hydrocarbon_pore_volume: oil.hydrocarbon_pore_volume_mbbl,
            in_place_volume: oil.ooip_mstb,
            recovery: None,
        }
    }
}

impl From<GasResult> for VolumetricResult {
    fn from(gas: GasResult) -> Self {
        Self {
            fluid: FluidKind::Gas,
            pore_volume_acre_ft: gas.pore_volume_acre_ft,
            pore_volume: gas.pore_volume_mmcf,
            hydrocarbon_pore_volume: gas.hydrocarbon_pore_volume_mmcf,
            in_place_volume: gas.ogip_mmscf,
            recovery: None,
        }
    }
}
