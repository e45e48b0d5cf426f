use crate::views::{FormView, ResultsView};
use vm_app::FormState;

pub struct VolumetricsApp {
    form: FormState,
    form_view: FormView,
    results_view: ResultsView,
}

impl VolumetricsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            form: FormState::default(),
            form_view: FormView,
            results_view: ResultsView::default(),
        }
    }
}

impl eframe::App for VolumetricsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading("Hydrocarbon Volume Calculator");
            ui.label("Calculate OOIP or OGIP with Optional Recovery Estimation");
        });

        egui::SidePanel::left("inputs")
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.form_view.show(ui, &mut self.form);
                });
            });

        // Full re-evaluation every frame; nothing is cached between interactions
        let evaluation = vm_app::evaluate_form(&self.form);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &evaluation {
                Ok(evaluation) => self.results_view.show(ui, evaluation),
                Err(e) => {
                    tracing::error!(error = %e, "evaluation failed");
                    ui.colored_label(egui::Color32::RED, format!("Evaluation failed: {e}"));
                }
            });
        });
    }
}
