//! Text report of an evaluation.

use crate::format::{thousands, two_decimals};
use serde::{Deserialize, Serialize};
use std::fmt;
use vm_engine::{FluidKind, VolumetricResult};

/// Ordered display lines with a heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub lines: Vec<String>,
}

impl Report {
    pub fn from_result(result: &VolumetricResult) -> Self {
        let fluid = result.fluid;
        let surface = result.surface_unit();
        let mut lines = Vec::with_capacity(5);

        match fluid {
            FluidKind::Oil => {
                lines.push(format!(
                    "Pore Volume: {} acre-ft | {} Mbbl",
                    two_decimals(result.pore_volume_acre_ft),
                    thousands(result.pore_volume)
                ));
                lines.push(format!(
                    "Hydrocarbon Pore Volume: {} Mbbl",
                    thousands(result.hydrocarbon_pore_volume)
                ));
            }
            FluidKind::Gas => {
                lines.push(format!(
                    "Pore Volume: {} acre-ft",
                    two_decimals(result.pore_volume_acre_ft)
                ));
                lines.push(format!(
                    "Hydrocarbon Pore Volume: {} MMcu ft",
                    thousands(result.hydrocarbon_pore_volume)
                ));
            }
        }
        lines.push(format!(
            "{}: {} {}",
            fluid.in_place_label(),
            thousands(result.in_place_volume),
            surface
        ));

        if let Some(split) = result.recovery {
            lines.push(format!(
                "Recoverable {} Reserves: {} {}",
                fluid,
                thousands(split.recoverable),
                surface
            ));
            lines.push(format!(
                "Non-recoverable {} Reserves: {} {}",
                fluid,
                thousands(split.non_recoverable),
                surface
            ));
        }

        Self {
            title: format!("{fluid} Calculation Results"),
            lines,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vm_engine::{Fluid, RecoveryEstimate, ReservoirInputs, evaluate};

    #[test]
    fn oil_lines() {
        let inputs = ReservoirInputs::new(1000.0, 50.0, 0.2, 0.3);
        let result = evaluate(&inputs, Fluid::Oil { bo: 1.2 }, None).unwrap();
        let report = Report::from_result(&result);

        assert_eq!(report.title, "Oil Calculation Results");
        assert_eq!(
            report.lines,
            vec![
                "Pore Volume: 10000.00 acre-ft | 77,580 Mbbl".to_string(),
                "Hydrocarbon Pore Volume: 54,306 Mbbl".to_string(),
                "OOIP: 45,255 MSTB".to_string(),
            ]
        );
    }

    #[test]
    fn gas_lines_with_recovery() {
        let inputs = ReservoirInputs::new(500.0, 30.0, 0.15, 0.25);
        let result = evaluate(
            &inputs,
            Fluid::Gas { bg: 0.004 },
            Some(RecoveryEstimate::new(0.8)),
        )
        .unwrap();
        let report = Report::from_result(&result);

        assert_eq!(report.title, "Gas Calculation Results");
        assert_eq!(report.lines[0], "Pore Volume: 2250.00 acre-ft");
        assert_eq!(report.lines[1], "Hydrocarbon Pore Volume: 74 MMcu ft");
        assert_eq!(report.lines[2], "OGIP: 18,377 MMSCF");
        assert_eq!(report.lines[3], "Recoverable Gas Reserves: 14,702 MMSCF");
        assert_eq!(report.lines[4], "Non-recoverable Gas Reserves: 3,675 MMSCF");
    }

    #[test]
    fn display_indents_lines() {
        let report = Report {
            title: "Oil Calculation Results".to_string(),
            lines: vec!["OOIP: 1 MSTB".to_string()],
        };
        assert_eq!(report.to_string(), "Oil Calculation Results\n  OOIP: 1 MSTB\n");
    }
}
