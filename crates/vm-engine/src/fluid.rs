//! Fluid selection and the unit set that goes with it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hydrocarbon in place, carrying its formation volume factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Fluid {
    /// Oil with Bo in rb/stb (typically 1.0..=2.0).
    Oil { bo: f64 },
    /// Gas with Bg in rcf/scf (typically 0.001..=0.01).
    Gas { bg: f64 },
}

impl Fluid {
    pub fn kind(&self) -> FluidKind {
        match self {
            Fluid::Oil { .. } => FluidKind::Oil,
            Fluid::Gas { .. } => FluidKind::Gas,
        }
    }

    /// Bo or Bg, whichever applies.
    pub fn formation_volume_factor(&self) -> f64 {
        match *self {
            Fluid::Oil { bo } => bo,
            Fluid::Gas { bg } => bg,
        }
    }
}

/// Payload-free fluid discriminant, as picked on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FluidKind {
    #[default]
    Oil,
    Gas,
}

impl FluidKind {
    pub const ALL: [FluidKind; 2] = [FluidKind::Oil, FluidKind::Gas];

    pub fn label(self) -> &'static str {
        match self {
            FluidKind::Oil => "Oil",
            FluidKind::Gas => "Gas",
        }
    }

    /// Unit of the pore and hydrocarbon pore volumes at reservoir conditions.
    pub fn reservoir_unit(self) -> VolumeUnit {
        match self {
            FluidKind::Oil => VolumeUnit::Mbbl,
            FluidKind::Gas => VolumeUnit::MMcf,
        }
    }

    /// Unit of in-place and recoverable volumes at surface conditions.
    pub fn surface_unit(self) -> VolumeUnit {
        match self {
            FluidKind::Oil => VolumeUnit::Mstb,
            FluidKind::Gas => VolumeUnit::MMscf,
        }
    }

    /// Short name of the in-place quantity.
    pub fn in_place_label(self) -> &'static str {
        match self {
            FluidKind::Oil => "OOIP",
            FluidKind::Gas => "OGIP",
        }
    }
}

impl fmt::Display for FluidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FluidKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oil" => Ok(FluidKind::Oil),
            "gas" => Ok(FluidKind::Gas),
            other => Err(format!("unknown fluid '{other}' (expected 'oil' or 'gas')")),
        }
    }
}

/// Volume units reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    /// acre-feet
    AcreFt,
    /// thousand reservoir barrels
    Mbbl,
    /// thousand stock-tank barrels
    Mstb,
    /// million reservoir cubic feet
    MMcf,
    /// million standard cubic feet
    MMscf,
}

impl VolumeUnit {
    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::AcreFt => "acre-ft",
            VolumeUnit::Mbbl => "Mbbl",
            VolumeUnit::Mstb => "MSTB",
            VolumeUnit::MMcf => "MMcf",
            VolumeUnit::MMscf => "MMSCF",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
