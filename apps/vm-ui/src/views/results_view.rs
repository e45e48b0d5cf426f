use crate::views::chart_view::ChartView;
use vm_app::Evaluation;

#[derive(Default)]
pub struct ResultsView {
    chart_view: ChartView,
}

impl ResultsView {
    pub fn show(&mut self, ui: &mut egui::Ui, evaluation: &Evaluation) {
        ui.label(
            egui::RichText::new(&evaluation.report.title)
                .strong()
                .color(egui::Color32::from_rgb(0, 150, 0)),
        );
        for line in &evaluation.report.lines {
            ui.monospace(line);
        }

        ui.separator();

        for chart in &evaluation.charts {
            self.chart_view.show(ui, chart);
            ui.add_space(12.0);
        }
    }
}
