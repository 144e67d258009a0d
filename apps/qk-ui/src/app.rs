use qk_app::{RunRequest, RunResponse, run_service};
use qk_project::schema::ParameterFile;

use crate::views::{input_view, notes_view, plot_view};

pub struct QuakesimApp {
    params: ParameterFile,
    /// Outcome of the last recompute; the error text replaces the plots.
    result: Result<RunResponse, String>,
}

impl QuakesimApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let params = ParameterFile::default();
        let result = recompute(&params);
        Self { params, result }
    }
}

fn recompute(params: &ParameterFile) -> Result<RunResponse, String> {
    run_service::run(&RunRequest {
        params: params.clone(),
    })
    .map_err(|e| {
        tracing::warn!(error = %e, "recompute failed");
        e.to_string()
    })
}

impl eframe::App for QuakesimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                if input_view::show(ui, &mut self.params) {
                    self.result = recompute(&self.params);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Advanced Earthquake Wave Propagation and Isolation Demonstration");
                ui.separator();

                match &self.result {
                    Ok(response) => plot_view::show(ui, response),
                    Err(message) => {
                        ui.colored_label(egui::Color32::RED, format!("Error: {}", message));
                    }
                }

                ui.separator();
                notes_view::show(ui);
            });
        });
    }
}
