//! Chart payloads handed to a drawing surface.
//!
//! Payloads are plain data: labels, values, colors and pre-formatted data
//! labels. The GUI draws them with egui_plot, the CLI as text, and `--json`
//! serializes them as-is.

use crate::format::{percent, two_decimals};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use vm_engine::{FluidKind, VolumetricResult};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const ORANGE: Rgb = Rgb::new(0xff, 0xa5, 0x00);
    pub const BROWN: Rgb = Rgb::new(0xa5, 0x2a, 0x2a);
    pub const GREEN: Rgb = Rgb::new(0x00, 0x80, 0x00);
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    pub const SKY: Rgb = Rgb::new(0x66, 0xb3, 0xff);
    pub const SALMON: Rgb = Rgb::new(0xff, 0x66, 0x66);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartId {
    /// Pore volume vs hydrocarbon pore volume.
    VolumeComparison,
    /// Recoverable vs non-recoverable bars.
    RecoveryComparison,
    /// Recoverable/non-recoverable pie.
    RecoverySplit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
    /// Value rounded to two decimals, drawn above the bar.
    pub data_label: String,
}

impl Bar {
    fn new(label: impl Into<String>, value: f64, color: Rgb) -> Self {
        Self {
            label: label.into(),
            value,
            color,
            data_label: two_decimals(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub id: ChartId,
    pub title: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the whole in [0, 1]; 0 when the whole is 0.
    pub fraction: f64,
    pub percent_label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub id: ChartId,
    pub title: String,
    /// Where the first slice starts, degrees counter-clockwise from +x.
    pub start_angle_deg: f64,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    fn new(id: ChartId, title: String, parts: [(String, f64, Rgb); 2]) -> Self {
        let total: f64 = parts.iter().map(|(_, v, _)| v).sum();
        let slices = parts
            .into_iter()
            .map(|(label, value, color)| {
                let fraction = if total > 0.0 { value / total } else { 0.0 };
                PieSlice {
                    label,
                    value,
                    fraction,
                    percent_label: percent(fraction),
                    color,
                }
            })
            .collect();
        Self {
            id,
            title,
            start_angle_deg: 90.0,
            slices,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChartPayload {
    Bar(BarChart),
    Pie(PieChart),
}

impl ChartPayload {
    pub fn id(&self) -> ChartId {
        match self {
            ChartPayload::Bar(c) => c.id,
            ChartPayload::Pie(c) => c.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartPayload::Bar(c) => &c.title,
            ChartPayload::Pie(c) => &c.title,
        }
    }

    /// Plain-text rendering; bars are scaled so the largest spans `width` columns.
    pub fn render_text(&self, width: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title());
        match self {
            ChartPayload::Bar(chart) => {
                let _ = writeln!(out, "  [{}]", chart.y_label);
                let max = chart.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
                let label_w = chart.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
                for bar in &chart.bars {
                    let cols = if max > 0.0 {
                        ((bar.value / max) * width as f64).round() as usize
                    } else {
                        0
                    };
                    let _ = writeln!(
                        out,
                        "  {:<label_w$} |{} {}",
                        bar.label,
                        "#".repeat(cols.min(width)),
                        bar.data_label
                    );
                }
            }
            ChartPayload::Pie(chart) => {
                for slice in &chart.slices {
                    let _ = writeln!(out, "  {}: {}", slice.label, slice.percent_label);
                }
            }
        }
        out
    }
}

/// Charts for one result, in display order.
///
/// The volume comparison is always present; the recovery bar chart and pie
/// only when the result carries a recovery split.
pub fn build_charts(result: &VolumetricResult) -> Vec<ChartPayload> {
    let fluid = result.fluid;
    let mut charts = vec![ChartPayload::Bar(volume_chart(result))];

    if let Some(split) = result.recovery {
        let recoverable = format!("Recoverable {fluid}");
        let non_recoverable = format!("Non-Recoverable {fluid}");

        charts.push(ChartPayload::Bar(BarChart {
            id: ChartId::RecoveryComparison,
            title: format!("Recoverable vs Non-Recoverable {fluid}"),
            y_label: format!("Volume ({})", surface_axis_unit(fluid)),
            bars: vec![
                Bar::new(recoverable.clone(), split.recoverable, Rgb::GREEN),
                Bar::new(non_recoverable.clone(), split.non_recoverable, Rgb::RED),
            ],
        }));
        charts.push(ChartPayload::Pie(PieChart::new(
            ChartId::RecoverySplit,
            format!("{fluid} Recovery Split"),
            [
                (recoverable, split.recoverable, Rgb::SKY),
                (non_recoverable, split.non_recoverable, Rgb::SALMON),
            ],
        )));
    }

    charts
}

fn volume_chart(result: &VolumetricResult) -> BarChart {
    BarChart {
        id: ChartId::VolumeComparison,
        title: "Pore Volume vs Hydrocarbon PV".to_string(),
        y_label: format!("Volume ({})", reservoir_axis_unit(result.fluid)),
        bars: vec![
            Bar::new("Pore Volume", result.pore_volume, Rgb::ORANGE),
            Bar::new("Hydrocarbon PV", result.hydrocarbon_pore_volume, Rgb::BROWN),
        ],
    }
}

fn reservoir_axis_unit(fluid: FluidKind) -> &'static str {
    match fluid {
        FluidKind::Oil => "Mbbl",
        FluidKind::Gas => "MMCF",
    }
}

fn surface_axis_unit(fluid: FluidKind) -> &'static str {
    match fluid {
        FluidKind::Oil => "MSTB",
        FluidKind::Gas => "MMSCF",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vm_engine::{Fluid, RecoveryEstimate, ReservoirInputs, evaluate};

    fn oil(rf: Option<f64>) -> VolumetricResult {
        let inputs = ReservoirInputs::new(1000.0, 50.0, 0.2, 0.3);
        evaluate(&inputs, Fluid::Oil { bo: 1.2 }, rf.map(RecoveryEstimate::new)).unwrap()
    }

    #[test]
    fn volume_chart_only_without_recovery() {
        let charts = build_charts(&oil(None));
        assert_eq!(charts.len(), 1);
        let ChartPayload::Bar(chart) = &charts[0] else {
            panic!("expected bar chart");
        };
        assert_eq!(chart.y_label, "Volume (Mbbl)");
        assert_eq!(chart.bars[0].label, "Pore Volume");
        assert_eq!(chart.bars[0].color, Rgb::ORANGE);
        assert_eq!(chart.bars[0].data_label, "77580.00");
        assert_eq!(chart.bars[1].label, "Hydrocarbon PV");
        assert_eq!(chart.bars[1].color.hex(), "#a52a2a");
    }

    #[test]
    fn recovery_adds_bar_and_pie() {
        let charts = build_charts(&oil(Some(0.25)));
        let ids: Vec<ChartId> = charts.iter().map(ChartPayload::id).collect();
        assert_eq!(
            ids,
            vec![
                ChartId::VolumeComparison,
                ChartId::RecoveryComparison,
                ChartId::RecoverySplit
            ]
        );

        let ChartPayload::Bar(bars) = &charts[1] else {
            panic!("expected bar chart");
        };
        assert_eq!(bars.bars[0].label, "Recoverable Oil");
        assert_eq!(bars.bars[1].label, "Non-Recoverable Oil");
        assert_eq!(bars.y_label, "Volume (MSTB)");

        let ChartPayload::Pie(pie) = &charts[2] else {
            panic!("expected pie chart");
        };
        assert_eq!(pie.start_angle_deg, 90.0);
        assert_eq!(pie.slices[0].percent_label, "25.0%");
        assert_eq!(pie.slices[1].percent_label, "75.0%");
        assert_eq!(pie.slices[0].color.hex(), "#66b3ff");
        assert_eq!(pie.slices[1].color.hex(), "#ff6666");
    }

    #[test]
    fn empty_pie_has_zero_shares() {
        let inputs = ReservoirInputs::new(1000.0, 50.0, 0.2, 1.0);
        let result = evaluate(
            &inputs,
            Fluid::Gas { bg: 0.004 },
            Some(RecoveryEstimate::new(0.5)),
        )
        .unwrap();
        let charts = build_charts(&result);
        let ChartPayload::Pie(pie) = &charts[2] else {
            panic!("expected pie chart");
        };
        for slice in &pie.slices {
            assert_eq!(slice.fraction, 0.0);
            assert_eq!(slice.percent_label, "0.0%");
        }
    }

    #[test]
    fn text_rendering_scales_bars() {
        let charts = build_charts(&oil(None));
        let text = charts[0].render_text(10);
        assert!(text.starts_with("Pore Volume vs Hydrocarbon PV\n"));
        assert!(text.contains("Pore Volume    |########## 77580.00"));
        // 54306 / 77580 = 0.7 -> 7 columns
        assert!(text.contains("Hydrocarbon PV |####### 54306.00"));
    }
}
