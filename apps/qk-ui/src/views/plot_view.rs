use egui_plot::{Legend, Line, Plot, PlotPoints};
use qk_app::{Channel, ResponseKind, RunResponse, X_AXIS_LABEL, Y_AXIS_LABEL, extract_series};

const PLOT_HEIGHT: f32 = 320.0;

/// Raw and isolated responses, one plot each.
pub fn show(ui: &mut egui::Ui, response: &RunResponse) {
    for kind in [ResponseKind::Raw, ResponseKind::Isolated] {
        ui.heading(kind.title());

        let lines: Vec<Line> = Channel::ALL
            .iter()
            .map(|&channel| {
                let points: PlotPoints = extract_series(&response.output, kind, channel)
                    .into_iter()
                    .map(|(t, v)| [t, v])
                    .collect();
                Line::new(points).name(channel.label())
            })
            .collect();

        Plot::new(kind.title())
            .legend(Legend::default())
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .height(PLOT_HEIGHT)
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });

        ui.add_space(8.0);
    }
}
