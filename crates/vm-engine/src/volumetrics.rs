//! Volumetric equations.
//!
//! ```text
//! PV   = A · h · φ                       [acre-ft]
//! HCPV = PV · c · (1 − Sw)               [Mbbl or MMcf]
//! OOIP = HCPV / Bo,  OGIP = HCPV / Bg    [MSTB or MMSCF]
//! ```
//!
//! with c = 7.758 Mbbl/acre-ft for oil and 43560/1e6 MMcf/acre-ft for gas.

use crate::error::{EngineError, EngineResult};
use crate::fluid::{Fluid, FluidKind};
use crate::inputs::{RecoveryEstimate, ReservoirInputs};
use crate::result::{GasResult, OilResult, RecoverySplit, VolumetricResult};
use vm_core::units::constants::{MBBL_PER_ACRE_FT, MILLION, SQFT_PER_ACRE};

/// Bulk pore volume in acre-ft.
pub fn compute_pore_volume(area_acres: f64, net_pay_ft: f64, porosity: f64) -> f64 {
    area_acres * net_pay_ft * porosity
}

/// Oil in place from a pore volume. Bo must be positive.
pub fn compute_oil(
    pore_volume_acre_ft: f64,
    water_saturation: f64,
    bo: f64,
) -> EngineResult<OilResult> {
    let bo = check_fvf(FluidKind::Oil, bo)?;

    let pore_volume_mbbl = pore_volume_acre_ft * MBBL_PER_ACRE_FT;
    let hydrocarbon_pore_volume_mbbl = pore_volume_mbbl * (1.0 - water_saturation);
    let ooip_mstb = hydrocarbon_pore_volume_mbbl / bo;

    Ok(OilResult {
        pore_volume_acre_ft,
        pore_volume_mbbl,
        hydrocarbon_pore_volume_mbbl,
        ooip_mstb: check_finite(ooip_mstb, "OOIP")?,
    })
}

/// Gas in place from a pore volume. Bg must be positive.
pub fn compute_gas(
    pore_volume_acre_ft: f64,
    water_saturation: f64,
    bg: f64,
) -> EngineResult<GasResult> {
    let bg = check_fvf(FluidKind::Gas, bg)?;

    let pore_volume_mmcf = pore_volume_acre_ft * SQFT_PER_ACRE / MILLION;
    let hydrocarbon_pore_volume_mmcf = pore_volume_mmcf * (1.0 - water_saturation);
    let ogip_mmscf = hydrocarbon_pore_volume_mmcf / bg;

    Ok(GasResult {
        pore_volume_acre_ft,
        pore_volume_mmcf,
        hydrocarbon_pore_volume_mmcf,
        ogip_mmscf: check_finite(ogip_mmscf, "OGIP")?,
    })
}

/// Split an in-place volume by recovery factor.
///
/// The non-recoverable part is taken as the remainder so the two parts
/// always add back up to `in_place_volume`.
pub fn compute_recovery(in_place_volume: f64, recovery_factor: f64) -> RecoverySplit {
    let recoverable = in_place_volume * recovery_factor;
    RecoverySplit {
        recoverable,
        non_recoverable: in_place_volume - recoverable,
    }
}

/// Full evaluation for one set of inputs.
pub fn evaluate(
    inputs: &ReservoirInputs,
    fluid: Fluid,
    recovery: Option<RecoveryEstimate>,
) -> EngineResult<VolumetricResult> {
    let pv = compute_pore_volume(inputs.area_acres, inputs.net_pay_ft, inputs.porosity);

    let mut result: VolumetricResult = match fluid {
        Fluid::Oil { bo } => compute_oil(pv, inputs.water_saturation, bo)?.into(),
        Fluid::Gas { bg } => compute_gas(pv, inputs.water_saturation, bg)?.into(),
    };
    result.recovery =
        recovery.map(|rf| compute_recovery(result.in_place_volume, rf.recovery_factor));

    tracing::debug!(
        fluid = %result.fluid,
        pore_volume_acre_ft = result.pore_volume_acre_ft,
        hcpv = result.hydrocarbon_pore_volume,
        in_place = result.in_place_volume,
        recoverable = ?result.recoverable(),
        "volumetrics evaluated"
    );

    Ok(result)
}

fn check_fvf(fluid: FluidKind, value: f64) -> EngineResult<f64> {
    vm_core::ensure_positive(value, "formation volume factor")
        .map_err(|_| EngineError::NonPositiveFormationVolumeFactor { fluid, value })
}

fn check_finite(value: f64, what: &'static str) -> EngineResult<f64> {
    vm_core::ensure_finite(value, what).map_err(|_| EngineError::NonFinite { what, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vm_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn pore_volume_product() {
        assert_eq!(compute_pore_volume(1000.0, 50.0, 0.2), 10_000.0);
        assert_eq!(compute_pore_volume(500.0, 30.0, 0.0), 0.0);
    }

    #[test]
    fn oil_scenario() {
        let oil = compute_oil(10_000.0, 0.3, 1.2).unwrap();
        assert!(close(oil.pore_volume_mbbl, 77_580.0));
        assert!(close(oil.hydrocarbon_pore_volume_mbbl, 54_306.0));
        assert!(close(oil.ooip_mstb, 45_255.0));
    }

    #[test]
    fn gas_scenario() {
        let gas = compute_gas(2250.0, 0.25, 0.004).unwrap();
        assert!(close(gas.pore_volume_mmcf, 98.01));
        assert!(close(gas.hydrocarbon_pore_volume_mmcf, 73.5075));
        assert!(close(gas.ogip_mmscf, 18_376.875));
    }

    #[test]
    fn zero_fvf_is_rejected() {
        let err = compute_oil(10_000.0, 0.3, 0.0).unwrap_err();
        assert_eq!(
            err,
            EngineError::NonPositiveFormationVolumeFactor {
                fluid: FluidKind::Oil,
                value: 0.0
            }
        );
        assert!(compute_gas(10_000.0, 0.3, -0.004).is_err());
        assert!(compute_gas(10_000.0, 0.3, f64::NAN).is_err());
    }

    #[test]
    fn full_recovery_leaves_nothing_behind() {
        let split = compute_recovery(45_255.0, 1.0);
        assert_eq!(split.recoverable, 45_255.0);
        assert_eq!(split.non_recoverable, 0.0);
    }

    #[test]
    fn zero_recovery_leaves_everything() {
        let split = compute_recovery(1234.5, 0.0);
        assert_eq!(split.recoverable, 0.0);
        assert_eq!(split.non_recoverable, 1234.5);
    }

    #[test]
    fn evaluate_without_recovery() {
        let inputs = ReservoirInputs::new(500.0, 30.0, 0.15, 0.25);
        let result = evaluate(&inputs, Fluid::Gas { bg: 0.004 }, None).unwrap();
        assert_eq!(result.fluid, FluidKind::Gas);
        assert!(close(result.pore_volume_acre_ft, 2250.0));
        assert!(close(result.in_place_volume, 18_376.875));
        assert!(result.recovery.is_none());
    }

    #[test]
    fn evaluate_with_recovery() {
        let inputs = ReservoirInputs::new(1000.0, 50.0, 0.2, 0.3);
        let result = evaluate(
            &inputs,
            Fluid::Oil { bo: 1.2 },
            Some(RecoveryEstimate::new(0.4)),
        )
        .unwrap();
        let split = result.recovery.unwrap();
        assert!(close(split.recoverable, 18_102.0));
        assert_eq!(split.recoverable + split.non_recoverable, result.in_place_volume);
    }
}
