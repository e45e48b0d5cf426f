use egui::{DragValue, Slider, Ui};
use vm_app::{FormState, InputLimits, InputRange};
use vm_engine::FluidKind;

/// Input form. Widgets are range-limited, which is the only input check.
pub struct FormView;

impl FormView {
    pub fn show(&mut self, ui: &mut Ui, form: &mut FormState) {
        ui.heading("Reservoir Properties");
        slider(
            ui,
            &mut form.area_acres,
            InputLimits::AREA_ACRES,
            "Reservoir Area (acres)",
            0,
        );
        slider(
            ui,
            &mut form.net_pay_ft,
            InputLimits::NET_PAY_FT,
            "Net Pay Thickness (ft)",
            0,
        );
        slider(
            ui,
            &mut form.porosity,
            InputLimits::POROSITY,
            "Porosity (fraction)",
            2,
        );
        slider(
            ui,
            &mut form.water_saturation,
            InputLimits::WATER_SATURATION,
            "Water Saturation (fraction)",
            2,
        );

        ui.add_space(8.0);
        ui.label("Select the type of hydrocarbon:");
        let mut kind = form.fluid;
        ui.horizontal(|ui| {
            for choice in FluidKind::ALL {
                ui.radio_value(&mut kind, choice, choice.label());
            }
        });
        if kind != form.fluid {
            form.set_fluid(kind);
        }

        ui.separator();

        match form.fluid {
            FluidKind::Oil => {
                ui.heading("Oil Properties");
                slider(
                    ui,
                    &mut form.bo,
                    InputLimits::BO,
                    "Oil Formation Volume Factor Bₒ (rb/stb)",
                    2,
                );
            }
            FluidKind::Gas => {
                ui.heading("Gas Properties");
                let range = InputLimits::BG;
                ui.horizontal(|ui| {
                    ui.add(
                        DragValue::new(&mut form.bg)
                            .speed(range.step)
                            .range(range.as_inclusive())
                            .fixed_decimals(4),
                    );
                    ui.label("Gas Formation Volume Factor B₉ (rcf/scf)");
                });
            }
        }

        let toggle_label = format!(
            "I want to estimate recoverable {} reserves",
            form.fluid.label().to_lowercase()
        );
        ui.checkbox(&mut form.estimate_recovery, toggle_label);

        if form.estimate_recovery {
            let range = form.recovery_range();
            slider(
                ui,
                &mut form.recovery_factor,
                range,
                "Recovery Factor (fraction)",
                2,
            );
        }
    }
}

fn slider(ui: &mut Ui, value: &mut f64, range: InputRange, label: &str, decimals: usize) {
    ui.add(
        Slider::new(value, range.as_inclusive())
            .step_by(range.step)
            .fixed_decimals(decimals)
            .text(label),
    );
}
