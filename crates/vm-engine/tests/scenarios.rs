use vm_core::{Tolerances, nearly_equal};
use vm_engine::{
    EngineError, Fluid, FluidKind, RecoveryEstimate, ReservoirInputs, VolumeUnit, evaluate,
};

fn close(a: f64, b: f64) -> bool {
    nearly_equal(a, b, Tolerances::default())
}

#[test]
fn oil_end_to_end() {
    let inputs = ReservoirInputs::new(1000.0, 50.0, 0.2, 0.3);
    let result = evaluate(&inputs, Fluid::Oil { bo: 1.2 }, None).unwrap();

    assert_eq!(result.fluid, FluidKind::Oil);
    assert!(close(result.pore_volume_acre_ft, 10_000.0));
    assert!(close(result.pore_volume, 77_580.0));
    assert!(close(result.hydrocarbon_pore_volume, 54_306.0));
    assert!(close(result.in_place_volume, 45_255.0));
    assert_eq!(result.reservoir_unit(), VolumeUnit::Mbbl);
    assert_eq!(result.surface_unit(), VolumeUnit::Mstb);
}

#[test]
fn gas_end_to_end() {
    let inputs = ReservoirInputs::new(500.0, 30.0, 0.15, 0.25);
    let result = evaluate(&inputs, Fluid::Gas { bg: 0.004 }, None).unwrap();

    assert_eq!(result.fluid, FluidKind::Gas);
    assert!(close(result.pore_volume_acre_ft, 2250.0));
    assert!(close(result.pore_volume, 98.01));
    assert!(close(result.hydrocarbon_pore_volume, 73.5075));
    assert!(close(result.in_place_volume, 18_376.875));
    assert_eq!(result.surface_unit(), VolumeUnit::MMscf);
}

#[test]
fn fully_water_saturated_reservoir_holds_nothing() {
    let inputs = ReservoirInputs::new(1000.0, 50.0, 0.2, 1.0);
    for fluid in [Fluid::Oil { bo: 1.3 }, Fluid::Gas { bg: 0.005 }] {
        let result = evaluate(&inputs, fluid, Some(RecoveryEstimate::new(0.5))).unwrap();
        assert_eq!(result.hydrocarbon_pore_volume, 0.0);
        assert_eq!(result.in_place_volume, 0.0);
        assert_eq!(result.recoverable(), Some(0.0));
        assert_eq!(result.non_recoverable(), Some(0.0));
    }
}

#[test]
fn full_recovery_factor() {
    let inputs = ReservoirInputs::new(640.0, 80.0, 0.18, 0.35);
    let result = evaluate(
        &inputs,
        Fluid::Gas { bg: 0.0045 },
        Some(RecoveryEstimate::new(1.0)),
    )
    .unwrap();
    assert_eq!(result.recoverable(), Some(result.in_place_volume));
    assert_eq!(result.non_recoverable(), Some(0.0));
}

#[test]
fn non_positive_fvf_fails_clearly() {
    let inputs = ReservoirInputs::new(1000.0, 50.0, 0.2, 0.3);
    let err = evaluate(&inputs, Fluid::Gas { bg: 0.0 }, None).unwrap_err();
    assert!(matches!(
        err,
        EngineError::NonPositiveFormationVolumeFactor {
            fluid: FluidKind::Gas,
            ..
        }
    ));
    assert!(err.to_string().contains("Non-positive formation volume factor"));
}
